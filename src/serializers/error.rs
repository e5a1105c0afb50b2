//! Error types for the sample serializers.

use crate::framework::SirenError;
use std::convert::Infallible;
use thiserror::Error;

/// Errors that can occur while rendering a line item.
#[derive(Debug, Error)]
pub enum LineItemError {
    /// Zero-quantity lines are not rendered.
    #[error("Invalid quantity for product {0}")]
    InvalidQuantity(String),

    /// The item could not be converted into properties.
    #[error("Line item properties: {0}")]
    Properties(#[from] SirenError),
}

/// Errors that can occur while rendering an order.
#[derive(Debug, Error)]
pub enum OrderError {
    /// The order data is incomplete.
    #[error("Order validation error: {0}")]
    ValidationError(String),

    /// One of the order's line items failed to render.
    #[error(transparent)]
    LineItem(#[from] LineItemError),
}

impl From<Infallible> for OrderError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}
