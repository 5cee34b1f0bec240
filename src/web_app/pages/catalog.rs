// web_app/pages/catalog.rs - Catalog page component
//
// Wires a catalog session into the view:
// - a one-shot resource runs the loader once per page mount
// - the query signal holds the raw search text
// - the filtered view is a memo over (load state, query)

use leptos::prelude::*;
use crate::catalog::{CatalogView, LoadState};
use crate::web_app::components::*;
use crate::web_app::server_fns::load_catalog_or_fallback;

/// Main catalog page
#[component]
pub fn CatalogPage() -> impl IntoView {
    // Runs once; the source never changes
    let catalog = Resource::new(|| (), |_| load_catalog_or_fallback());

    let query = RwSignal::new(String::new());

    let load_state = Signal::derive(move || match catalog.get() {
        Some(loaded) => LoadState::Ready(loaded),
        None => LoadState::Pending,
    });

    let catalog_view = Memo::new(move |_| CatalogView::derive(&load_state.get(), &query.get()));

    let products = Signal::derive(move || catalog_view.get().products);
    let summary = Signal::derive(move || catalog_view.get().summary);

    view! {
        <Suspense fallback=move || view! { <Loading /> }>
            // Reading the resource here lets Suspense wait for it during SSR
            {move || match catalog.get() {
                None => view! { <Loading /> }.into_any(),
                Some(_) => {
                    view! {
                        <div class="min-h-screen bg-gray-50 py-8">
                            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                                <PageHeader />
                                <SearchBar query=query />
                                <ResultCount summary=summary />
                                <ProductGrid products=products />
                            </div>
                        </div>
                    }.into_any()
                }
            }}
        </Suspense>
    }
}
