//! # Error Taxonomy
//!
//! Nothing in EcoLogic is fatal. The error variants here cover the
//! three situations that are actually surfaced:
//!
//! - form validation failures (keep the submit control disabled)
//! - insufficient balance on a purchase (transient user message)
//! - storage problems in the durable key-value layer
//!
//! Idempotency violations (duplicate adoption, double submission) are
//! deliberately NOT errors; the operations no-op instead.

use thiserror::Error;

/// Errors produced by the core state machines.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A form field requirement was not met. The message names the field.
    #[error("validation failed: {0}")]
    Validation(String),

    /// A purchase was attempted with too few Eco Points.
    #[error("not enough points: need {need}, have {have}")]
    InsufficientBalance {
        /// The price of the item.
        need: i64,
        /// The current balance.
        have: i64,
    },

    /// The durable key-value store failed.
    #[error("storage error: {0}")]
    Storage(String),
}

impl CoreError {
    /// Shorthand for a validation error naming the offending field.
    #[must_use]
    pub fn missing_field(field: &str) -> Self {
        Self::Validation(format!("{field} is required"))
    }
}
