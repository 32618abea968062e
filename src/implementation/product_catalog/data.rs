//! Built-in demo catalog

use crate::types::catalog::{Category, Product};

/// The eight products the shop is seeded with.
#[must_use]
pub fn demo_products() -> Vec<Product> {
    vec![
        Product::new(1, "Classic College Hoodie", Category::Hoodies, 1499)
            .with_rating(4.8)
            .with_image("https://images.unsplash.com/photo-1556821552-7f41c5d440db?w=400&h=500&fit=crop")
            .with_description("Premium quality hoodie with college embroidery")
            .bestseller(),
        Product::new(2, "Pride Graphic Tee", Category::TShirts, 599)
            .with_rating(4.6)
            .with_image("https://images.unsplash.com/photo-1521572163474-6864f9cf17ab?w=400&h=500&fit=crop")
            .with_description("Comfortable cotton t-shirt with college logo"),
        Product::new(3, "College Baseball Cap", Category::Accessories, 449)
            .with_rating(4.5)
            .with_image("https://images.unsplash.com/photo-1572635196237-14b3f281503f?w=400&h=500&fit=crop")
            .with_description("Adjustable baseball cap perfect for any occasion"),
        Product::new(4, "Zip-Up Fleece Jacket", Category::Hoodies, 1999)
            .with_rating(4.9)
            .with_image("https://images.unsplash.com/photo-1551028719-00167b16ebc5?w=400&h=500&fit=crop")
            .with_description("Warm and stylish fleece jacket for college")
            .bestseller(),
        Product::new(5, "College Sweatpants", Category::Bottoms, 999)
            .with_rating(4.7)
            .with_image("https://images.unsplash.com/photo-1506629082632-11c6099d4033?w=400&h=500&fit=crop")
            .with_description("Comfortable and stylish sweatpants"),
        Product::new(6, "Embroidered Polo", Category::TShirts, 799)
            .with_rating(4.4)
            .with_image("https://images.unsplash.com/photo-1578689998416-2dfa387d27bb?w=400&h=500&fit=crop")
            .with_description("Classic polo shirt with college crest"),
        Product::new(7, "College Tote Bag", Category::Accessories, 599)
            .with_rating(4.5)
            .with_image("https://images.unsplash.com/photo-1594938298603-c8148c4dae35?w=400&h=500&fit=crop")
            .with_description("Spacious tote bag for books and essentials"),
        Product::new(8, "Varsity Bomber Jacket", Category::Hoodies, 2499)
            .with_rating(4.8)
            .with_image("https://images.unsplash.com/photo-1551028719-00167b16ebc5?w=400&h=500&fit=crop")
            .with_description("Bold varsity style bomber jacket")
            .bestseller(),
    ]
}
