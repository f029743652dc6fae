//! Error types for the service layer.
//!
//! Store failures pass through unmodified via the transparent `Store`
//! variant — the service performs no retries and no wrapping.

use gala_core::ids::ParticipantId;
use gala_store::StoreError;
use thiserror::Error;

/// Errors that can occur during service operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A participant looked up by a caller-supplied id was absent.
    #[error("participant not found: {0}")]
    ParticipantNotFound(ParticipantId),

    /// A store operation failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Convenience type alias for service results.
pub type Result<T> = std::result::Result<T, ServiceError>;

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn participant_not_found_display() {
        let err = ServiceError::ParticipantNotFound(ParticipantId::new(7));
        assert_eq!(err.to_string(), "participant not found: 7");
    }

    #[test]
    fn store_error_passes_through_unwrapped() {
        let store_err = StoreError::InvalidRole("chairman".into());
        let err: ServiceError = store_err.into();
        assert!(matches!(err, ServiceError::Store(_)));
        assert_eq!(err.to_string(), "invalid role in store: chairman");
    }
}
