//! # Product Catalog Service
//!
//! Read-only queries over the seeded product list.

use crate::types::catalog::{Category, CategoryFilter, Product, ProductId, SortOption};

/// Immutable product catalog.
///
/// Seeded once at session start. There are no mutation operations; the
/// cart snapshots whatever it is handed.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Products in seeded order.
    products: Vec<Product>,
}

impl Catalog {
    /// Creates a catalog from a seeded product list.
    #[must_use]
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Creates the built-in demo catalog.
    #[must_use]
    pub fn demo() -> Self {
        Self::new(super::data::demo_products())
    }

    /// All products in seeded order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Looks up a product by ID.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// The fixed list of filter chips, "All" first.
    #[must_use]
    pub fn category_filters() -> [CategoryFilter; 5] {
        [
            CategoryFilter::All,
            CategoryFilter::Only(Category::Hoodies),
            CategoryFilter::Only(Category::TShirts),
            CategoryFilter::Only(Category::Bottoms),
            CategoryFilter::Only(Category::Accessories),
        ]
    }

    /// Applies the category filter, then the sort comparator.
    ///
    /// Sorts are stable, so within equal keys the seeded order survives.
    #[must_use]
    pub fn browse(&self, filter: CategoryFilter, sort: SortOption) -> Vec<Product> {
        let mut results: Vec<Product> =
            self.products.iter().filter(|product| filter.matches(product)).cloned().collect();

        match sort {
            SortOption::Featured => {
                results.sort_by(|a, b| b.is_bestseller.cmp(&a.is_bestseller));
            },
            SortOption::PriceLowToHigh => {
                results.sort_by(|a, b| a.price.cmp(&b.price));
            },
            SortOption::PriceHighToLow => {
                results.sort_by(|a, b| b.price.cmp(&a.price));
            },
            SortOption::TopRated => {
                results.sort_by(|a, b| b.rating.total_cmp(&a.rating));
            },
        }

        results
    }

    /// Products sharing a category with `id`, excluding the product
    /// itself, in seeded order, capped at `limit`.
    #[must_use]
    pub fn related(&self, id: ProductId, limit: usize) -> Vec<Product> {
        let Some(subject) = self.get(id) else {
            return Vec::new();
        };

        self.products
            .iter()
            .filter(|product| product.category == subject.category && product.id != id)
            .take(limit)
            .cloned()
            .collect()
    }
}
