//! Variant selection types for the cart system

use serde::{Deserialize, Serialize};

use crate::types::catalog::ProductId;

/// Garment size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Size {
    /// Small.
    S,
    /// Medium. The quick-add default.
    #[default]
    M,
    /// Large.
    L,
    /// Extra large.
    XL,
}

impl Size {
    /// All sizes, in the order the selector shows them.
    pub const ALL: [Size; 4] = [Self::S, Self::M, Self::L, Self::XL];

    /// Display label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::S => "S",
            Self::M => "M",
            Self::L => "L",
            Self::XL => "XL",
        }
    }
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Garment color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Color {
    /// Black. The quick-add default.
    #[default]
    Black,
    /// White.
    White,
    /// Navy.
    Navy,
    /// Grey.
    Grey,
}

impl Color {
    /// All colors, in the order the selector shows them.
    pub const ALL: [Color; 4] = [Self::Black, Self::White, Self::Navy, Self::Grey];

    /// Display label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Black => "Black",
            Self::White => "White",
            Self::Navy => "Navy",
            Self::Grey => "Grey",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Composite identity of a cart line.
///
/// Two additions with the same key merge into one line; the same product
/// in a different size or color is a distinct line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineKey {
    /// Product ID.
    pub product_id: ProductId,
    /// Selected size.
    pub size:       Size,
    /// Selected color.
    pub color:      Color,
}
