//! Branded numeric IDs for the three entity kinds.
//!
//! IDs are `i64` newtypes so a participant id cannot be handed to a call
//! expecting an event id. Id `0` means "not yet assigned"; a store assigns
//! a real id on first save.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! numeric_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(
            Clone,
            Copy,
            Debug,
            Default,
            Hash,
            Eq,
            PartialEq,
            Ord,
            PartialOrd,
            Serialize,
            Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wrap a raw database id.
            pub const fn new(raw: i64) -> Self {
                Self(raw)
            }

            /// The raw `i64` value.
            pub const fn as_i64(self) -> i64 {
                self.0
            }

            /// Whether a store has assigned this id yet.
            pub const fn is_unassigned(self) -> bool {
                self.0 == 0
            }
        }

        impl From<i64> for $name {
            fn from(raw: i64) -> Self {
                Self(raw)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

numeric_id!(ParticipantId, "Identifier of a participant.");
numeric_id!(EventId, "Identifier of an event.");
numeric_id!(LogisticsId, "Identifier of a logistics item.");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unassigned() {
        assert!(ParticipantId::default().is_unassigned());
        assert!(EventId::default().is_unassigned());
        assert!(LogisticsId::default().is_unassigned());
    }

    #[test]
    fn new_preserves_raw_value() {
        let id = EventId::new(42);
        assert_eq!(id.as_i64(), 42);
        assert!(!id.is_unassigned());
    }

    #[test]
    fn display_is_the_raw_number() {
        assert_eq!(LogisticsId::new(7).to_string(), "7");
    }

    #[test]
    fn serde_is_transparent() {
        let json = serde_json::to_string(&ParticipantId::new(3)).unwrap();
        assert_eq!(json, "3");
        let back: ParticipantId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ParticipantId::new(3));
    }
}
