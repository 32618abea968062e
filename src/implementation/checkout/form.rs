//! Order form field set

use serde::{Deserialize, Serialize};

/// Contact and shipping fields collected at checkout.
///
/// Field-level validation belongs to the form surface; the core only
/// snapshots whatever was entered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderFormData {
    /// Customer full name.
    pub name:         String,
    /// Email address the confirmation is addressed to.
    pub email:        String,
    /// Phone number.
    pub phone:        String,
    /// College the order ships to.
    pub college_name: String,
    /// Delivery address.
    pub address:      String,
}

impl OrderFormData {
    /// Clears every field.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
