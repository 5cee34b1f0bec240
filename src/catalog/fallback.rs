// catalog/fallback.rs - Embedded catalog used when the remote source fails
//
// A fixed general-goods set. It is never fetched and never empty.

use super::model::Product;

/// Number of products in the embedded catalog.
pub const FALLBACK_LEN: usize = 6;

/// The embedded fallback catalog, in display order.
pub fn fallback_products() -> Vec<Product> {
    vec![
        Product::new(1, "Wireless Bluetooth Headphones", 79.99)
            .with_description(
                "High-quality wireless headphones with noise cancellation and 30-hour battery life.",
            )
            .with_category("Electronics"),
        Product::new(2, "Smart Fitness Watch", 199.99)
            .with_description(
                "Track your health and fitness with GPS, heart rate monitor, and sleep tracking.",
            )
            .with_category("Electronics"),
        Product::new(3, "Organic Coffee Beans", 24.99)
            .with_description(
                "Premium organic coffee beans from sustainable farms. Medium roast, 1lb bag.",
            )
            .with_category("Food"),
        Product::new(4, "Yoga Mat", 39.99)
            .with_description(
                "Non-slip yoga mat made from eco-friendly materials. Perfect for home workouts.",
            )
            .with_category("Sports"),
        Product::new(5, "LED Desk Lamp", 45.99)
            .with_description(
                "Adjustable LED desk lamp with multiple brightness levels and USB charging port.",
            )
            .with_category("Home"),
        Product::new(6, "Stainless Steel Water Bottle", 29.99)
            .with_description(
                "Insulated water bottle that keeps drinks cold for 24 hours or hot for 12 hours.",
            )
            .with_category("Sports"),
    ]
}
