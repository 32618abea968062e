//! # Campus Storefront
//!
//! Implements the in-memory core of the college merchandise storefront:
//! the product catalog with browsing queries, the variant-keyed shopping
//! cart with pricing totals, and the simulated checkout flow.

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::uninlined_format_args)]

pub mod errors;
pub mod implementation;
pub mod types;

// Re-exports for public API
pub use implementation::product_catalog::Catalog;
pub use implementation::session::StorefrontSession;
pub use types::StorefrontConfig;
