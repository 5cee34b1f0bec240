// tests/component_render_tests.rs
// Server-side rendering of the catalog components

use catalog_browser::catalog::{fallback_products, Price, Product, ResultSummary};
use catalog_browser::web_app::components::*;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

// Render a view to HTML inside a fresh reactive owner
fn render<F, V>(f: F) -> String
where
    F: FnOnce() -> V,
    V: RenderHtml,
{
    let owner = Owner::new();
    owner.with(|| f().to_html())
}

#[test]
fn test_product_card_full_record() {
    let product = Product::new(1, "Fjallraven Backpack", 109.95)
        .with_description("Fits 15 inch laptops")
        .with_category("men's clothing")
        .with_image("https://example.com/bag.jpg");

    let html = render(move || view! { <ProductCard product=product /> });

    assert!(html.contains("Fjallraven Backpack"));
    assert!(html.contains("Fits 15 inch laptops"));
    assert!(html.contains("109.95"));
    assert!(html.contains("https://example.com/bag.jpg"));
    assert!(html.contains("<img"));
    assert!(html.contains("Add to Cart"));
}

#[test]
fn test_product_card_sparse_record() {
    let product = Product::new("q-1", "Custom Engraving", Price::from("Contact us"));

    let html = render(move || view! { <ProductCard product=product /> });

    assert!(html.contains("Custom Engraving"));
    assert!(html.contains("Contact us"));
    assert!(!html.contains("<img"));
    assert!(!html.contains("bg-blue-100"), "no category badge expected");
}

#[test]
fn test_product_card_numeric_price() {
    let product = Product::new(2, "Half Price", 19.5);
    let html = render(move || view! { <ProductCard product=product /> });
    assert!(html.contains("19.50"));
}

#[test]
fn test_grid_renders_every_product() {
    let products = Signal::derive(fallback_products);
    let html = render(move || view! { <ProductGrid products=products /> });

    for product in fallback_products() {
        assert!(html.contains(&product.title), "missing {}", product.title);
    }
    assert!(!html.contains("No products found"));
}

#[test]
fn test_grid_keeps_products_sharing_an_id() {
    let products = Signal::derive(|| {
        vec![
            Product::new(5, "Red Mug", 8.0),
            Product::new(5, "Blue Mug", 9.0),
        ]
    });
    let html = render(move || view! { <ProductGrid products=products /> });

    assert!(html.contains("Red Mug"));
    assert!(html.contains("Blue Mug"));
    assert_eq!(html.matches("Add to Cart").count(), 2);
}

#[test]
fn test_grid_empty_state() {
    let products = Signal::derive(Vec::<Product>::new);
    let html = render(move || view! { <ProductGrid products=products /> });

    assert!(html.contains("No products found"));
    assert!(html.contains("Try adjusting your search terms"));
}

#[test]
fn test_result_count_text() {
    let summary = Signal::derive(|| ResultSummary::new(0, "xyz"));
    let html = render(move || view! { <ResultCount summary=summary /> });
    assert!(html.contains("0 products found for"));
    assert!(html.contains("xyz"));
}

#[test]
fn test_loading_and_header_text() {
    let html = render(|| view! { <Loading /> });
    assert!(html.contains("Loading products..."));

    let html = render(|| view! { <PageHeader /> });
    assert!(html.contains("Product Store"));
    assert!(html.contains("Discover amazing products at great prices"));
}

#[test]
fn test_search_bar_placeholder() {
    let html = render(|| {
        let query = RwSignal::new(String::from("mat"));
        view! { <SearchBar query=query /> }
    });
    assert!(html.contains(SEARCH_PLACEHOLDER));
}
