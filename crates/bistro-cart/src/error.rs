//! Cart error types.

use thiserror::Error;

use crate::ids::ItemId;

/// Errors that can occur in cart operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CartError {
    /// Malformed id, name, price, click dataset or config value.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Item not in cart.
    #[error("Item not in cart: {0}")]
    NotFound(ItemId),

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in cart calculation")]
    Overflow,
}

impl CartError {
    /// Shorthand for an [`CartError::InvalidInput`].
    pub fn invalid(message: impl Into<String>) -> Self {
        CartError::InvalidInput(message.into())
    }
}
