//! Cart line item type definition

use serde::{Deserialize, Serialize};

use crate::types::catalog::{Product, ProductId};

use super::types::{Color, LineKey, Size};

/// One line in the shopping cart.
///
/// Embeds a product snapshot taken at add time. If the catalog changed
/// afterwards the line keeps the price and name it was added with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// Product snapshot.
    pub product:  Product,
    /// Quantity, always at least 1.
    pub quantity: u32,
    /// Selected size.
    pub size:     Size,
    /// Selected color.
    pub color:    Color,
}

impl CartLine {
    /// Creates a new line from a product snapshot.
    #[must_use]
    pub fn new(product: Product, quantity: u32, size: Size, color: Color) -> Self {
        Self { product, quantity, size, color }
    }

    /// Composite identity of this line.
    #[must_use]
    pub fn key(&self) -> LineKey {
        LineKey { product_id: self.product.id, size: self.size, color: self.color }
    }

    /// Product ID of the embedded snapshot.
    #[must_use]
    pub fn product_id(&self) -> ProductId {
        self.product.id
    }

    /// Line total before tax.
    #[must_use]
    pub fn line_total(&self) -> u64 {
        self.product.price.saturating_mul(u64::from(self.quantity))
    }
}
