//! # Cart System
//!
//! Shopping cart state for the storefront: variant-keyed line items,
//! merge-on-add semantics, and pricing totals.

mod cart;
mod item;
mod types;

pub use cart::{Cart, CartTotals};
pub use item::CartLine;
pub use types::{Color, LineKey, Size};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::StorefrontError;
    use crate::types::catalog::{Category, Product, ProductId};

    const TAX_RATE: f64 = 10.0;

    fn test_product(id: u32, price: u64) -> Product {
        Product::new(id, format!("Product {}", id), Category::Hoodies, price)
    }

    #[test]
    fn test_empty_cart_totals() {
        let cart = Cart::new();

        assert!(cart.is_empty());
        assert_eq!(cart.line_count(), 0);
        assert_eq!(cart.totals(TAX_RATE), CartTotals { subtotal: 0, tax: 0, total: 0 });
    }

    #[test]
    fn test_add_appends_line() {
        let mut cart = Cart::new();

        cart.add(test_product(1, 1000), 2, Size::M, Color::Black).expect("should add");

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.total_quantity(), 2);
        assert_eq!(cart.lines()[0].line_total(), 2000);
    }

    #[test]
    fn test_add_same_key_merges() {
        let mut cart = Cart::new();
        let product = test_product(1, 1000);

        cart.add(product.clone(), 2, Size::M, Color::Black).expect("add first");
        cart.add(product, 3, Size::M, Color::Black).expect("add second");

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.lines()[0].quantity, 5);
    }

    #[test]
    fn test_merge_preserves_position() {
        let mut cart = Cart::new();

        cart.add(test_product(1, 1000), 1, Size::M, Color::Black).expect("add 1");
        cart.add(test_product(2, 2000), 1, Size::M, Color::Black).expect("add 2");
        cart.add(test_product(1, 1000), 4, Size::M, Color::Black).expect("merge into 1");

        assert_eq!(cart.line_count(), 2);
        assert_eq!(cart.lines()[0].product_id(), ProductId(1));
        assert_eq!(cart.lines()[0].quantity, 5);
        assert_eq!(cart.lines()[1].product_id(), ProductId(2));
    }

    #[test]
    fn test_different_size_is_distinct_line() {
        let mut cart = Cart::new();
        let product = test_product(1, 1000);

        cart.add(product.clone(), 1, Size::M, Color::Black).expect("add M");
        cart.add(product, 1, Size::L, Color::Black).expect("add L");

        assert_eq!(cart.line_count(), 2);
    }

    #[test]
    fn test_different_color_is_distinct_line() {
        let mut cart = Cart::new();
        let product = test_product(1, 1000);

        cart.add(product.clone(), 1, Size::M, Color::Black).expect("add Black");
        cart.add(product, 1, Size::M, Color::Navy).expect("add Navy");

        assert_eq!(cart.line_count(), 2);
    }

    #[test]
    fn test_add_zero_quantity_rejected() {
        let mut cart = Cart::new();

        let result = cart.add(test_product(1, 1000), 0, Size::M, Color::Black);

        assert_eq!(result, Err(StorefrontError::InvalidQuantity));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_overwrites() {
        let mut cart = Cart::new();

        cart.add(test_product(1, 1000), 2, Size::M, Color::Black).expect("add");
        cart.set_quantity(ProductId(1), 7);

        assert_eq!(cart.lines()[0].quantity, 7);
    }

    #[test]
    fn test_set_quantity_zero_removes() {
        let mut cart = Cart::new();

        cart.add(test_product(1, 1000), 2, Size::M, Color::Black).expect("add");
        cart.set_quantity(ProductId(1), 0);

        assert!(cart.is_empty());
        assert_eq!(cart.totals(TAX_RATE), CartTotals::default());
    }

    #[test]
    fn test_set_quantity_absent_id_is_noop() {
        let mut cart = Cart::new();

        cart.add(test_product(1, 1000), 2, Size::M, Color::Black).expect("add");
        cart.set_quantity(ProductId(99), 5);

        assert_eq!(cart.lines()[0].quantity, 2);
    }

    #[test]
    fn test_set_quantity_hits_earliest_variant() {
        // Update keys on product id alone, so with two variants of one
        // product the earliest line takes the new quantity.
        let mut cart = Cart::new();
        let product = test_product(1, 1000);

        cart.add(product.clone(), 1, Size::M, Color::Black).expect("add M");
        cart.add(product, 1, Size::L, Color::Black).expect("add L");
        cart.set_quantity(ProductId(1), 9);

        assert_eq!(cart.lines()[0].quantity, 9);
        assert_eq!(cart.lines()[1].quantity, 1);
    }

    #[test]
    fn test_remove_takes_all_variants() {
        let mut cart = Cart::new();
        let product = test_product(1, 1000);

        cart.add(product.clone(), 1, Size::M, Color::Black).expect("add M");
        cart.add(product, 1, Size::L, Color::Navy).expect("add L");
        cart.add(test_product(2, 500), 1, Size::M, Color::Black).expect("add other");
        cart.remove(ProductId(1));

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.lines()[0].product_id(), ProductId(2));
    }

    #[test]
    fn test_remove_absent_id_is_noop() {
        let mut cart = Cart::new();

        cart.add(test_product(1, 1000), 1, Size::M, Color::Black).expect("add");
        cart.remove(ProductId(42));

        assert_eq!(cart.line_count(), 1);
    }

    #[test]
    fn test_totals_with_tax_rounding() {
        let mut cart = Cart::new();

        cart.add(test_product(1, 1499), 1, Size::M, Color::Black).expect("add hoodie");
        cart.add(test_product(2, 599), 2, Size::M, Color::Black).expect("add tee");

        let totals = cart.totals(TAX_RATE);

        assert_eq!(totals.subtotal, 2697);
        assert_eq!(totals.tax, 270); // round(269.7)
        assert_eq!(totals.total, 2967);
    }

    #[test]
    fn test_merge_scenario_totals() {
        let mut cart = Cart::new();
        let hoodie = test_product(1, 1499);

        cart.add(hoodie.clone(), 1, Size::M, Color::Black).expect("add once");
        cart.add(hoodie, 2, Size::M, Color::Black).expect("add again");

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.lines()[0].quantity, 3);

        let totals = cart.totals(TAX_RATE);
        assert_eq!(totals.subtotal, 4497);
        assert_eq!(totals.tax, 450);
        assert_eq!(totals.total, 4947);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();

        cart.add(test_product(1, 1000), 3, Size::M, Color::Black).expect("add");
        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.total_quantity(), 0);
    }

    #[test]
    fn test_snapshot_price_is_stable() {
        let mut cart = Cart::new();
        let mut product = test_product(1, 1000);

        cart.add(product.clone(), 1, Size::M, Color::Black).expect("add");
        product.price = 9999; // catalog change after add

        assert_eq!(cart.lines()[0].product.price, 1000);
    }
}
