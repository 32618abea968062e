//! # Checkout
//!
//! Order form, order snapshots, and the simulated submission flow.

mod form;
mod order;
mod submission;

pub use form::OrderFormData;
pub use order::{OrderLine, PlacedOrder};
pub use submission::{CheckoutFlow, CheckoutState};
