//! Placed orders and their confirmation details

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use xxhash_rust::xxh3::xxh3_64;

/// Delivery estimate shown when nothing is configured
pub const DEFAULT_ESTIMATED_DELIVERY: &str = "35-45 minutes";

/// Prefix of generated order numbers
const ORDER_PREFIX: &str = "EE";

/// Human-facing order number, `EE-NNNNNN`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderNumber(String);

impl OrderNumber {
    /// Derive a six-digit order number from arbitrary seed bytes
    pub fn from_seed(seed: &[u8]) -> Self {
        let digits = 100_000 + xxh3_64(seed) % 900_000;
        Self(format!("{}-{}", ORDER_PREFIX, digits))
    }

    /// Order number text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Result of a successful order submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderReceipt {
    /// Generated order number
    pub order_number: OrderNumber,
    /// Delivery estimate text
    pub estimated_delivery: String,
    /// Submission time
    pub placed_at: DateTime<Local>,
}
