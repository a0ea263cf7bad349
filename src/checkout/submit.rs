//! Order submission collaborator

use crate::checkout::field::CheckoutField;
use crate::checkout::form::CheckoutValues;
use crate::order::{DEFAULT_ESTIMATED_DELIVERY, OrderNumber, OrderReceipt};
use chrono::Local;
use thiserror::Error;
use tracing::info;

/// Failure reported by an order backend
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("order rejected: {reason}")]
    Rejected { reason: String },
}

/// Accepts a complete set of checkout values and places the order.
///
/// Implementations must not validate again; the wizard only calls this
/// once every step has been validated.
pub trait OrderSubmitter {
    fn submit_order(&mut self, values: &CheckoutValues) -> Result<OrderReceipt, SubmitError>;
}

/// Submitter that places orders locally and always succeeds
#[derive(Debug, Clone)]
pub struct LocalOrderSubmitter {
    estimated_delivery: String,
    placed: u64,
}

impl LocalOrderSubmitter {
    /// Create a submitter with the given delivery estimate
    pub fn new(estimated_delivery: impl Into<String>) -> Self {
        Self {
            estimated_delivery: estimated_delivery.into(),
            placed: 0,
        }
    }

    /// Number of orders placed so far
    pub fn placed(&self) -> u64 {
        self.placed
    }
}

impl Default for LocalOrderSubmitter {
    fn default() -> Self {
        Self::new(DEFAULT_ESTIMATED_DELIVERY)
    }
}

impl OrderSubmitter for LocalOrderSubmitter {
    fn submit_order(&mut self, values: &CheckoutValues) -> Result<OrderReceipt, SubmitError> {
        let placed_at = Local::now();
        self.placed += 1;

        let mut seed = Vec::new();
        for (_, value) in values.iter() {
            seed.extend_from_slice(value.as_bytes());
            seed.push(0);
        }
        seed.extend_from_slice(&placed_at.timestamp_nanos_opt().unwrap_or_default().to_le_bytes());
        seed.extend_from_slice(&self.placed.to_le_bytes());

        let receipt = OrderReceipt {
            order_number: OrderNumber::from_seed(&seed),
            estimated_delivery: self.estimated_delivery.clone(),
            placed_at,
        };

        info!(
            order_number = %receipt.order_number,
            name = values.get(CheckoutField::Name),
            city = values.get(CheckoutField::City),
            card_last_four = %values.card_last_four(),
            "Order placed"
        );

        Ok(receipt)
    }
}
