//! The logistics entity.

use gala_core::ids::LogisticsId;
use serde::{Deserialize, Serialize};

/// A priced logistics item attached to at most one event.
///
/// Only items with `reserved == true` count toward an event's cost and
/// toward date-range queries.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Logistics {
    /// Identifier. Zero until a store assigns one.
    pub id: LogisticsId,
    /// Description of the item.
    pub description: String,
    /// Quantity ordered.
    pub quantity: u32,
    /// Price per unit.
    pub unit_price: f64,
    /// Whether the item is confirmed/allocated.
    pub reserved: bool,
}

impl Logistics {
    /// Create a logistics item.
    pub fn new(
        id: LogisticsId,
        description: impl Into<String>,
        quantity: u32,
        unit_price: f64,
        reserved: bool,
    ) -> Self {
        Self {
            id,
            description: description.into(),
            quantity,
            unit_price,
            reserved,
        }
    }

    /// Total price of this line: `quantity × unit_price`.
    pub fn line_total(&self) -> f64 {
        f64::from(self.quantity) * self.unit_price
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
