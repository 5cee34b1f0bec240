// web_app/api/catalog.rs - Process-wide catalog loader
//
// The binary installs a loader built from the environment at startup.
// Tests may install an override loader with any source.

use crate::catalog::{CatalogLoader, CatalogResult, CatalogSource, HttpCatalogSource};
use std::sync::{Arc, Mutex, OnceLock};

/// Loader shared by every request.
pub type SharedLoader = Arc<CatalogLoader<Arc<dyn CatalogSource>>>;

static LOADER: OnceLock<SharedLoader> = OnceLock::new();
static TEST_LOADER_OVERRIDE: Mutex<Option<SharedLoader>> = Mutex::new(None);

/// Wrap any source into a shareable loader.
pub fn shared_loader<S: CatalogSource + 'static>(source: S) -> SharedLoader {
    Arc::new(CatalogLoader::new(Arc::new(source) as Arc<dyn CatalogSource>))
}

/// Build the HTTP loader from CATALOG_* environment variables.
pub fn loader_from_env() -> CatalogResult<SharedLoader> {
    let source = HttpCatalogSource::new(crate::catalog::CatalogConfig::from_env())?;
    tracing::info!(
        "Catalog endpoint: {} (limit {})",
        source.config().endpoint(),
        source.config().limit()
    );
    Ok(shared_loader(source))
}

/// Install the global loader. Later calls are ignored.
pub fn init_loader(loader: SharedLoader) {
    if LOADER.set(loader).is_err() {
        tracing::warn!("Catalog loader already initialized");
    } else {
        tracing::info!("Global catalog loader initialized");
    }
}

/// Route server functions to a specific loader (tests only).
pub fn set_test_loader(loader: SharedLoader) {
    let mut guard = TEST_LOADER_OVERRIDE
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = Some(loader);
}

/// The loader to use for the current request.
///
/// Falls back to building one from the environment when nothing was installed.
pub fn get_loader() -> CatalogResult<SharedLoader> {
    {
        let guard = TEST_LOADER_OVERRIDE
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(ref loader) = *guard {
            return Ok(loader.clone());
        }
    }

    if let Some(loader) = LOADER.get() {
        return Ok(loader.clone());
    }

    tracing::warn!("No catalog loader installed; building one from the environment");
    let loader = loader_from_env()?;
    Ok(LOADER.get_or_init(|| loader).clone())
}
