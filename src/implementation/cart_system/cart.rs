//! Shopping cart and totals

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{errors::StorefrontError, types::catalog::{Product, ProductId}};

use super::item::CartLine;
use super::types::{Color, LineKey, Size};

/// Cart price totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartTotals {
    /// Sum of line totals before tax.
    pub subtotal: u64,
    /// Tax amount.
    pub tax:      u64,
    /// Grand total.
    pub total:    u64,
}

impl CartTotals {
    /// Calculates totals for a set of cart lines.
    ///
    /// Tax is half-up rounded from the same f64 product the storefront UI
    /// displays, so a subtotal of 5 yields 1 of tax at 10%.
    #[must_use]
    pub fn calculate(lines: &[CartLine], tax_rate_percent: f64) -> Self {
        let subtotal = lines.iter().fold(0_u64, |acc, line| acc.saturating_add(line.line_total()));
        let tax = (subtotal as f64 * tax_rate_percent / 100.0).round() as u64;
        let total = subtotal.saturating_add(tax);

        Self { subtotal, tax, total }
    }
}

/// Shopping cart.
///
/// Lines are kept in first-insertion order; merging updates a line in
/// place and never moves it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    /// Lines in insertion order.
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines. This is the cart badge value.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Total quantity across all lines.
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        self.lines.iter().fold(0_u32, |acc, line| acc.saturating_add(line.quantity))
    }

    /// Adds a product in the given size and color.
    ///
    /// A line with the same `(product, size, color)` key absorbs the new
    /// quantity; otherwise a new line is appended.
    ///
    /// # Errors
    /// Returns `InvalidQuantity` for a zero quantity. The UI keeps its
    /// buttons clamped above zero, but the core still guards.
    pub fn add(
        &mut self, product: Product, quantity: u32, size: Size, color: Color,
    ) -> Result<(), StorefrontError> {
        if quantity == 0 {
            return Err(StorefrontError::InvalidQuantity);
        }

        let key = LineKey { product_id: product.id, size, color };
        if let Some(line) = self.lines.iter_mut().find(|line| line.key() == key) {
            line.quantity = line.quantity.saturating_add(quantity);
            debug!(product = %key.product_id, quantity = line.quantity, "merged cart line");
        } else {
            self.lines.push(CartLine::new(product, quantity, size, color));
            debug!(product = %key.product_id, quantity, "appended cart line");
        }

        Ok(())
    }

    /// Overwrites the quantity of the first line with this product id.
    ///
    /// A zero quantity removes instead. Matches on product id alone, so a
    /// cart holding two variants of one product updates the earliest line.
    /// Unknown ids are ignored.
    pub fn set_quantity(&mut self, product_id: ProductId, quantity: u32) {
        if quantity == 0 {
            self.remove(product_id);
            return;
        }

        if let Some(line) = self.lines.iter_mut().find(|line| line.product.id == product_id) {
            line.quantity = quantity;
            debug!(product = %product_id, quantity, "set cart line quantity");
        }
    }

    /// Removes every line with this product id.
    ///
    /// Variants of the same product go together. Unknown ids are ignored.
    pub fn remove(&mut self, product_id: ProductId) {
        self.lines.retain(|line| line.product.id != product_id);
    }

    /// Removes all lines.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Calculates totals at the given tax rate.
    ///
    /// Recomputed on every call; nothing is cached.
    #[must_use]
    pub fn totals(&self, tax_rate_percent: f64) -> CartTotals {
        CartTotals::calculate(&self.lines, tax_rate_percent)
    }
}
