// web_app/server_fns.rs - Leptos server function declarations
//
// The #[server] macro generates:
// - On server: the actual function, which runs the catalog loader
// - On client: a stub that POSTs to /api and decodes the result
//
// IMPORTANT: This file must be compiled for BOTH ssr and hydrate features!

use leptos::prelude::*;
use crate::catalog::LoadedCatalog;

/// Load the session catalog (remote, or the embedded fallback).
///
/// Never fails because of the remote endpoint; the only error is a missing
/// loader on the server.
#[server(LoadCatalog, "/api")]
pub async fn load_catalog() -> Result<LoadedCatalog, ServerFnError> {
    use crate::web_app::api::catalog;

    let loader = catalog::get_loader()
        .map_err(|e| ServerFnError::new(format!("Catalog loader unavailable: {}", e)))?;

    let loaded = loader.load().await;
    tracing::info!(
        "Catalog request served: {} products ({})",
        loaded.len(),
        loaded.provenance
    );
    Ok(loaded)
}

/// Client-side entry point: any server function failure still yields a
/// displayable catalog.
pub async fn load_catalog_or_fallback() -> LoadedCatalog {
    match load_catalog().await {
        Ok(loaded) => loaded,
        Err(e) => {
            tracing::warn!("load_catalog failed, using fallback products: {}", e);
            LoadedCatalog::fallback()
        }
    }
}
