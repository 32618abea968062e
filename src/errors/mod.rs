//! Error types for the storefront core

use thiserror::Error;

use crate::types::catalog::ProductId;

/// Storefront-specific errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StorefrontError {
    /// Attempted to add a non-positive quantity to the cart.
    #[error("Invalid quantity")]
    InvalidQuantity,
    /// Product not found in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),
    /// Cart has no lines to check out.
    #[error("Cart is empty")]
    CartEmpty,
    /// An order submission is already being processed.
    #[error("Checkout already in progress")]
    CheckoutPending,
}

/// Result type for storefront operations.
pub type StorefrontResult<T> = Result<T, StorefrontError>;
