// web_app/components/search.rs - Search input and result count
//
// The search input writes every keystroke straight into the query signal;
// there is no submit step and no debouncing.

use leptos::prelude::*;
use crate::catalog::ResultSummary;

/// Placeholder shown in the empty search field.
pub const SEARCH_PLACEHOLDER: &str = "Search products...";

/// Live search input
#[component]
pub fn SearchBar(
    /// Current search text, stored exactly as typed
    query: RwSignal<String>,
) -> impl IntoView {
    view! {
        <div class="max-w-md mx-auto mb-8">
            <div class="relative">
                <span class="absolute left-3 top-1/2 transform -translate-y-1/2 text-gray-400">"🔍"</span>
                <input
                    type="text"
                    placeholder=SEARCH_PLACEHOLDER
                    class="w-full pl-10 pr-4 py-3 border border-gray-300 rounded-lg \
                           focus:ring-2 focus:ring-blue-500 focus:border-transparent \
                           outline-none transition-all duration-200"
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
            </div>
        </div>
    }
}

/// "N products found" line
#[component]
pub fn ResultCount(
    summary: Signal<ResultSummary>,
) -> impl IntoView {
    view! {
        <div class="mb-6">
            <p class="text-gray-600 text-center">
                {move || summary.get().to_string()}
            </p>
        </div>
    }
}
