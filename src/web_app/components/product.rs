// web_app/components/product.rs - Product display components
//
// - ProductCard: one card in the grid
// - ProductGrid: the grid, or the empty state when nothing matches
// - EmptyState: "No products found"

use leptos::prelude::*;
use crate::catalog::Product;
use super::common::{Badge, Button};

/// Product card
///
/// Image and category are optional and simply omitted when absent. The cart
/// button has no behavior.
#[component]
pub fn ProductCard(
    product: Product,
) -> impl IntoView {
    let price_display = product.price_display();
    let Product {
        title,
        description,
        category,
        image,
        ..
    } = product;

    let image_view = image.map(|src| {
        let alt = title.clone();
        view! {
            <div class="h-48 bg-gray-100 flex items-center justify-center">
                <img
                    src=src
                    alt=alt
                    class="max-h-full max-w-full object-contain p-4"
                />
            </div>
        }
    });

    let category_view = category.map(|label| view! {
        <Badge>{label}</Badge>
    });

    view! {
        <div class="bg-white rounded-lg shadow-md hover:shadow-lg transition-shadow duration-300 overflow-hidden">
            {image_view}
            <div class="p-6">
                <h3 class="text-lg font-semibold text-gray-900 mb-2 line-clamp-2">
                    {title}
                </h3>
                <p class="text-gray-600 text-sm mb-4 line-clamp-3">
                    {description.unwrap_or_default()}
                </p>
                <div class="flex items-center justify-between">
                    <div class="flex items-center">
                        <span class="text-green-600 font-bold">"$"</span>
                        <span class="text-xl font-bold text-green-600">{price_display}</span>
                    </div>
                    {category_view}
                </div>
                <Button class="w-full mt-4">"Add to Cart"</Button>
            </div>
        </div>
    }
}

/// Shown when the filtered view is empty
#[component]
pub fn EmptyState() -> impl IntoView {
    view! {
        <div class="text-center py-12">
            <div class="text-gray-400 mb-4 text-6xl">"🔍"</div>
            <h2 class="text-xl font-semibold text-gray-600 mb-2">"No products found"</h2>
            <p class="text-gray-500">"Try adjusting your search terms"</p>
        </div>
    }
}

/// Grid of product cards in catalog order
///
/// Rows are keyed by position as well as id, since remote ids are not
/// guaranteed to be unique.
#[component]
pub fn ProductGrid(
    products: Signal<Vec<Product>>,
) -> impl IntoView {
    view! {
        <Show
            when=move || !products.get().is_empty()
            fallback=|| view! { <EmptyState /> }
        >
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                <For
                    each=move || products.get().into_iter().enumerate()
                    key=|(index, product)| (*index, product.id.clone())
                    children=move |(_, product)| view! { <ProductCard product=product /> }
                />
            </div>
        </Show>
    }
}
