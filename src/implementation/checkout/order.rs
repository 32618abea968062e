//! Order snapshot types
//!
//! A placed order captures the cart lines and totals as they stood at
//! submission; later cart mutations do not reach it.

use serde::{Deserialize, Serialize};

use crate::implementation::cart_system::{CartLine, CartTotals, Color, Size};
use crate::types::catalog::ProductId;

use super::form::OrderFormData;

/// One line of a placed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    /// Product ID.
    pub product_id: ProductId,
    /// Product name at submission.
    pub name:       String,
    /// Unit price at submission.
    pub unit_price: u64,
    /// Quantity ordered.
    pub quantity:   u32,
    /// Selected size.
    pub size:       Size,
    /// Selected color.
    pub color:      Color,
    /// Line total before tax.
    pub line_total: u64,
}

impl OrderLine {
    /// Creates an order line from a cart line.
    #[must_use]
    pub fn from_cart_line(line: &CartLine) -> Self {
        Self {
            product_id: line.product.id,
            name:       line.product.name.clone(),
            unit_price: line.product.price,
            quantity:   line.quantity,
            size:       line.size,
            color:      line.color,
            line_total: line.line_total(),
        }
    }
}

/// Snapshot of a submitted order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedOrder {
    /// Ordered lines as they stood at submission.
    pub lines:  Vec<OrderLine>,
    /// Totals the cart computed at submission.
    pub totals: CartTotals,
    /// Form data the order was placed with.
    pub form:   OrderFormData,
}

impl PlacedOrder {
    /// Snapshots cart lines, totals, and the form.
    #[must_use]
    pub fn new(lines: &[CartLine], totals: CartTotals, form: OrderFormData) -> Self {
        Self {
            lines: lines.iter().map(OrderLine::from_cart_line).collect(),
            totals,
            form,
        }
    }
}
