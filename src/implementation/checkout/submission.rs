//! Simulated order submission
//!
//! No network call occurs anywhere in the storefront; placing an order
//! shows a confirmation for a fixed delay and then resets the form.

use tracing::{debug, info};

use crate::errors::{StorefrontError, StorefrontResult};
use crate::implementation::cart_system::{CartLine, CartTotals};

use super::form::OrderFormData;
use super::order::PlacedOrder;

/// Checkout flow state.
#[derive(Debug, Clone, Default)]
pub enum CheckoutState {
    /// Collecting form input.
    #[default]
    Editing,
    /// Order accepted; the confirmation is showing while the simulated
    /// processing delay counts down.
    Processing {
        /// The order snapshotted at submission.
        order:        PlacedOrder,
        /// Delay still to elapse before completion.
        remaining_ms: u64,
    },
}

/// Simulated order submission with a fixed completion delay.
///
/// Time is injected through [`CheckoutFlow::tick`]; the flow never reads
/// a clock, so a cancelled submission cannot fire later.
#[derive(Debug, Clone)]
pub struct CheckoutFlow {
    state:    CheckoutState,
    delay_ms: u64,
    form:     OrderFormData,
}

impl CheckoutFlow {
    /// Creates an idle flow with the given processing delay.
    #[must_use]
    pub fn new(delay_ms: u64) -> Self {
        Self { state: CheckoutState::Editing, delay_ms, form: OrderFormData::default() }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &CheckoutState {
        &self.state
    }

    /// Whether a submission is counting down.
    #[must_use]
    pub fn is_processing(&self) -> bool {
        matches!(self.state, CheckoutState::Processing { .. })
    }

    /// The form being edited.
    #[must_use]
    pub fn form(&self) -> &OrderFormData {
        &self.form
    }

    /// Mutable access for the form surface.
    pub fn form_mut(&mut self) -> &mut OrderFormData {
        &mut self.form
    }

    /// Submits the current form against a cart snapshot.
    ///
    /// # Errors
    /// `CartEmpty` when there is nothing to order, `CheckoutPending` when
    /// a submission is already counting down.
    pub fn submit(&mut self, lines: &[CartLine], totals: CartTotals) -> StorefrontResult<()> {
        if self.is_processing() {
            return Err(StorefrontError::CheckoutPending);
        }
        if lines.is_empty() {
            return Err(StorefrontError::CartEmpty);
        }

        let order = PlacedOrder::new(lines, totals, self.form.clone());
        info!(lines = order.lines.len(), total = order.totals.total, "order placed");

        self.state = CheckoutState::Processing { order, remaining_ms: self.delay_ms };
        Ok(())
    }

    /// Advances the simulated clock.
    ///
    /// Returns the completed order exactly once, when the delay elapses;
    /// the form resets at that moment. Idle flows ignore ticks.
    pub fn tick(&mut self, elapsed_ms: u64) -> Option<PlacedOrder> {
        let CheckoutState::Processing { remaining_ms, .. } = &mut self.state else {
            return None;
        };

        *remaining_ms = remaining_ms.saturating_sub(elapsed_ms);
        if *remaining_ms > 0 {
            return None;
        }

        match std::mem::take(&mut self.state) {
            CheckoutState::Processing { order, .. } => {
                self.form.reset();
                info!("order processing complete");
                Some(order)
            },
            state => {
                self.state = state;
                None
            },
        }
    }

    /// Abandons any in-flight submission and resets the form.
    ///
    /// Called when the checkout surface closes; nothing completes after
    /// a cancel.
    pub fn cancel(&mut self) {
        if self.is_processing() {
            debug!("pending submission cancelled");
        }
        self.state = CheckoutState::Editing;
        self.form.reset();
    }
}
