//! Session orchestration
//!
//! One [`StorefrontSession`] owns the catalog, the cart, the checkout
//! flow, and the view state the storefront page keeps. Presentation
//! components call the handlers here and render what the accessors
//! return; nothing else mutates cart state.

use tracing::debug;

use crate::errors::{StorefrontError, StorefrontResult};
use crate::implementation::cart_system::{Cart, CartTotals, Color, Size};
use crate::implementation::checkout::{CheckoutFlow, OrderFormData, PlacedOrder};
use crate::implementation::product_catalog::Catalog;
use crate::types::catalog::{CategoryFilter, Product, ProductId, SortOption};
use crate::types::StorefrontConfig;

/// One browsing session: catalog, cart, checkout, and view state.
#[derive(Debug)]
pub struct StorefrontSession {
    config:   StorefrontConfig,
    catalog:  Catalog,
    cart:     Cart,
    checkout: CheckoutFlow,
    /// Product currently shown in the detail modal.
    selected_product: Option<ProductId>,
    /// Whether the cart drawer is open.
    cart_open:        bool,
    /// Whether the order form is open.
    order_form_open:  bool,
}

impl StorefrontSession {
    /// Creates a session over a seeded catalog.
    #[must_use]
    pub fn new(catalog: Catalog, config: StorefrontConfig) -> Self {
        let checkout = CheckoutFlow::new(config.submission_delay_ms);
        Self {
            config,
            catalog,
            cart: Cart::new(),
            checkout,
            selected_product: None,
            cart_open: false,
            order_form_open: false,
        }
    }

    /// Creates a session over the built-in demo catalog.
    #[must_use]
    pub fn demo() -> Self {
        Self::new(Catalog::demo(), StorefrontConfig::default())
    }

    // ========================================================================
    // READ ACCESS
    // ========================================================================

    /// Session configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    /// The catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The cart.
    #[must_use]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The checkout flow.
    #[must_use]
    pub fn checkout(&self) -> &CheckoutFlow {
        &self.checkout
    }

    /// Current totals at the configured tax rate.
    #[must_use]
    pub fn totals(&self) -> CartTotals {
        self.cart.totals(self.config.tax_rate_percent)
    }

    /// Cart badge value: distinct lines, not summed quantities.
    #[must_use]
    pub fn cart_badge(&self) -> usize {
        self.cart.line_count()
    }

    /// Product shown in the detail modal, if any.
    #[must_use]
    pub fn selected_product(&self) -> Option<&Product> {
        self.selected_product.and_then(|id| self.catalog.get(id))
    }

    /// Whether the cart drawer is open.
    #[must_use]
    pub fn is_cart_open(&self) -> bool {
        self.cart_open
    }

    /// Whether the order form is open.
    #[must_use]
    pub fn is_order_form_open(&self) -> bool {
        self.order_form_open
    }

    /// Filtered and sorted products for the grid.
    #[must_use]
    pub fn browse(&self, filter: CategoryFilter, sort: SortOption) -> Vec<Product> {
        self.catalog.browse(filter, sort)
    }

    // ========================================================================
    // BROWSING HANDLERS
    // ========================================================================

    /// Opens the detail modal for a product.
    pub fn select_product(&mut self, product_id: ProductId) -> StorefrontResult<()> {
        if self.catalog.get(product_id).is_none() {
            return Err(StorefrontError::ProductNotFound(product_id));
        }
        self.selected_product = Some(product_id);
        Ok(())
    }

    /// Closes the detail modal.
    pub fn close_details(&mut self) {
        self.selected_product = None;
    }

    // ========================================================================
    // CART HANDLERS
    // ========================================================================

    /// Grid quick-add: quantity 1, default size and color.
    pub fn quick_add(&mut self, product_id: ProductId) -> StorefrontResult<()> {
        let product = self
            .catalog
            .get(product_id)
            .cloned()
            .ok_or(StorefrontError::ProductNotFound(product_id))?;
        self.cart.add(product, 1, Size::default(), Color::default())
    }

    /// Detail-modal add with explicit variant selection.
    ///
    /// Mirrors the modal flow: on success the modal closes and the cart
    /// drawer opens.
    pub fn add_with_options(
        &mut self, product_id: ProductId, quantity: u32, size: Size, color: Color,
    ) -> StorefrontResult<()> {
        let product = self
            .catalog
            .get(product_id)
            .cloned()
            .ok_or(StorefrontError::ProductNotFound(product_id))?;
        self.cart.add(product, quantity, size, color)?;
        self.selected_product = None;
        self.cart_open = true;
        Ok(())
    }

    /// Drawer increment button.
    pub fn increment_line(&mut self, product_id: ProductId) {
        let current = self.line_quantity(product_id);
        if let Some(quantity) = current {
            self.cart.set_quantity(product_id, quantity.saturating_add(1));
        }
    }

    /// Drawer decrement button.
    ///
    /// Clamps at 1 before reaching the core; removing a line is the trash
    /// button's job, not the decrement's.
    pub fn decrement_line(&mut self, product_id: ProductId) {
        let current = self.line_quantity(product_id);
        if let Some(quantity) = current {
            self.cart.set_quantity(product_id, quantity.saturating_sub(1).max(1));
        }
    }

    /// Direct quantity entry; 0 removes the line.
    pub fn set_line_quantity(&mut self, product_id: ProductId, quantity: u32) {
        self.cart.set_quantity(product_id, quantity);
    }

    /// Drawer trash button.
    pub fn remove_line(&mut self, product_id: ProductId) {
        self.cart.remove(product_id);
    }

    fn line_quantity(&self, product_id: ProductId) -> Option<u32> {
        self.cart
            .lines()
            .iter()
            .find(|line| line.product.id == product_id)
            .map(|line| line.quantity)
    }

    // ========================================================================
    // DRAWER & CHECKOUT HANDLERS
    // ========================================================================

    /// Navbar cart button.
    pub fn toggle_cart(&mut self) {
        self.cart_open = !self.cart_open;
    }

    /// Closes the cart drawer.
    pub fn close_cart(&mut self) {
        self.cart_open = false;
    }

    /// Drawer proceed button: closes the drawer and opens the order form.
    pub fn proceed_to_order(&mut self) {
        self.cart_open = false;
        self.order_form_open = true;
    }

    /// Closes the order form, abandoning any in-flight submission.
    pub fn close_order_form(&mut self) {
        self.order_form_open = false;
        self.checkout.cancel();
    }

    /// Mutable access to the order form fields.
    pub fn order_form_mut(&mut self) -> &mut OrderFormData {
        self.checkout.form_mut()
    }

    /// Submits the order form against the current cart.
    pub fn place_order(&mut self) -> StorefrontResult<()> {
        let totals = self.totals();
        self.checkout.submit(self.cart.lines(), totals)
    }

    /// Advances the simulated clock.
    ///
    /// When the submission delay elapses the order form closes, the cart
    /// empties, and the completed order is returned to the caller.
    pub fn tick(&mut self, elapsed_ms: u64) -> Option<PlacedOrder> {
        let completed = self.checkout.tick(elapsed_ms)?;
        self.order_form_open = false;
        self.cart.clear();
        debug!(total = completed.totals.total, "session checkout complete");
        Some(completed)
    }
}


#[cfg(all(test, feature = "full-tests"))]
mod full_flow_tests {
    use super::*;
    use crate::types::catalog::{Category, CategoryFilter, SortOption};

    #[test]
    fn test_full_shopping_trip() {
        let mut session = StorefrontSession::demo();

        // Browse hoodies, cheapest first, and open the cheapest one.
        let hoodies =
            session.browse(CategoryFilter::Only(Category::Hoodies), SortOption::PriceLowToHigh);
        let cheapest = hoodies[0].id;
        session.select_product(cheapest).expect("select");

        // Add two in L/Navy from the modal, then quick-add a cap.
        session.add_with_options(cheapest, 2, Size::L, Color::Navy).expect("modal add");
        session.quick_add(ProductId(3)).expect("quick-add cap");
        assert_eq!(session.cart_badge(), 2);

        // Tweak quantities in the drawer.
        session.increment_line(ProductId(3));
        session.decrement_line(cheapest);

        // Check out.
        session.proceed_to_order();
        session.order_form_mut().name = "Arjun Mehta".to_string();
        session.order_form_mut().email = "arjun@example.com".to_string();
        session.order_form_mut().phone = "+91 91234 56789".to_string();
        session.order_form_mut().college_name = "ABC Institute".to_string();
        session.order_form_mut().address = "12 MG Road".to_string();
        session.place_order().expect("place order");

        let expected_total = session.totals().total;
        let order = session.tick(2000).expect("complete");

        assert_eq!(order.totals.total, expected_total);
        assert_eq!(order.lines.len(), 2);
        assert!(session.cart().is_empty());
        assert!(!session.is_order_form_open());
        assert_eq!(session.checkout().form(), &OrderFormData::default());
    }
}
