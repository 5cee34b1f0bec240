// web_app/components/common.rs - Reusable UI components
//
// Small, stateless components that receive all data via props.

use leptos::prelude::*;

/// Full-page loading spinner
#[component]
pub fn Loading(
    /// Message shown below the spinner
    #[prop(default = "Loading products...")]
    message: &'static str,
) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-50 flex items-center justify-center">
            <div class="text-center">
                <div class="animate-spin rounded-full h-12 w-12 border-b-2 border-blue-600 mx-auto"></div>
                <p class="mt-4 text-gray-600">{message}</p>
            </div>
        </div>
    }
}

/// Page header with store name and tagline
#[component]
pub fn PageHeader(
    #[prop(default = "Product Store")]
    title: &'static str,
    #[prop(default = "Discover amazing products at great prices")]
    tagline: &'static str,
) -> impl IntoView {
    view! {
        <div class="text-center mb-8">
            <div class="flex items-center justify-center mb-4">
                <span class="text-3xl mr-2">"🛍"</span>
                <h1 class="text-3xl font-bold text-gray-900">{title}</h1>
            </div>
            <p class="text-gray-600">{tagline}</p>
        </div>
    }
}

/// Primary button, decorative only
#[component]
pub fn Button(
    children: Children,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let base_class = "bg-blue-600 text-white py-2 px-4 rounded-lg hover:bg-blue-700 \
                      transition-colors duration-200 font-medium";

    view! {
        <button type="button" class=format!("{} {}", base_class, class)>
            {children()}
        </button>
    }
}

/// Small rounded label for a product category
#[component]
pub fn Badge(children: Children) -> impl IntoView {
    view! {
        <span class="px-2 py-1 bg-blue-100 text-blue-800 text-xs rounded-full">
            {children()}
        </span>
    }
}
