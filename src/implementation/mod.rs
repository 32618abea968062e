//! Implementation details for the storefront core

pub mod cart_system;
pub mod checkout;
pub mod product_catalog;
pub mod session;
