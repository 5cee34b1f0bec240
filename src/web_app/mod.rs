// web_app/mod.rs - Root module for the Leptos catalog view
//
// The view is a thin collaborator around catalog::session: it renders the
// loading state, the filtered product grid and the "no results" state, and
// feeds raw search text back into the session.
//
// Architecture:
// - server_fns.rs: the `load_catalog` server function (both client and server)
// - api/: loader registry used by server functions (SSR only)
// - components/: product cards, search input, shared widgets
// - pages/: the catalog page
// - app.rs: root component with routing

// Server function declarations - must be available to both client and server
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod server_fns;

#[cfg(feature = "ssr")]
pub mod api;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod components;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod pages;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub use app::App;
