//! # Product Catalog Types
//!
//! Type definitions for the immutable product catalog.

use serde::{Deserialize, Serialize};

// ============================================================================
// CORE TYPES
// ============================================================================

/// Unique product identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProductId(pub u32);

impl ProductId {
    /// Creates a new product ID.
    #[must_use]
    pub fn new(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Product category.
///
/// The shop carries a fixed set of categories; there is no way to add one
/// at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Hoodies, fleeces, and jackets.
    Hoodies,
    /// T-shirts and polos.
    TShirts,
    /// Sweatpants and other bottoms.
    Bottoms,
    /// Caps, bags, and everything else.
    Accessories,
}

impl Category {
    /// All categories, in the order the filter chips show them.
    pub const ALL: [Category; 4] =
        [Self::Hoodies, Self::TShirts, Self::Bottoms, Self::Accessories];

    /// Display name.
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Hoodies => "Hoodies",
            Self::TShirts => "T-Shirts",
            Self::Bottoms => "Bottoms",
            Self::Accessories => "Accessories",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Category filter selected in the browsing grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CategoryFilter {
    /// No filtering; every product passes.
    #[default]
    All,
    /// Only products in the given category pass.
    Only(Category),
}

impl CategoryFilter {
    /// Whether a product passes this filter.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => product.category == *category,
        }
    }

    /// Display name for the filter chip.
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(category) => category.display_name(),
        }
    }
}

/// Sort order for the browsing grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOption {
    /// Bestsellers first, seeded order otherwise.
    #[default]
    Featured,
    /// Sort by price, lowest first.
    PriceLowToHigh,
    /// Sort by price, highest first.
    PriceHighToLow,
    /// Sort by rating, highest first.
    TopRated,
}

impl SortOption {
    /// Display name for the sort dropdown.
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Featured => "Featured",
            Self::PriceLowToHigh => "Price: Low to High",
            Self::PriceHighToLow => "Price: High to Low",
            Self::TopRated => "Highest Rated",
        }
    }
}

// ============================================================================
// PRODUCT
// ============================================================================

/// Catalog product.
///
/// Catalog records are immutable; cart lines embed a clone taken at
/// add time rather than referring back here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Product ID.
    pub id:            ProductId,
    /// Product name.
    pub name:          String,
    /// Category the product is listed under.
    pub category:      Category,
    /// Whole-rupee price; no minor units.
    pub price:         u64,
    /// Average rating in [0, 5].
    pub rating:        f32,
    /// Image URL.
    pub image:         String,
    /// Short description.
    pub description:   String,
    /// Whether the product is a bestseller.
    pub is_bestseller: bool,
}

impl Product {
    /// Creates a new product.
    #[must_use]
    pub fn new(id: u32, name: impl Into<String>, category: Category, price: u64) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.into(),
            category,
            price,
            rating: 0.0,
            image: String::new(),
            description: String::new(),
            is_bestseller: false,
        }
    }

    /// Sets the rating.
    #[must_use]
    pub fn with_rating(mut self, rating: f32) -> Self {
        self.rating = rating;
        self
    }

    /// Sets the image URL.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Marks the product as a bestseller.
    #[must_use]
    pub fn bestseller(mut self) -> Self {
        self.is_bestseller = true;
        self
    }

    /// Number of filled stars when rendering the rating.
    #[must_use]
    pub fn full_stars(&self) -> u32 {
        self.rating.floor() as u32
    }
}
