// catalog/loader.rs - Fetch-with-fallback
//
// The loader asks its source once. Whatever goes wrong (transport, status,
// decode) is logged and replaced by the embedded catalog, so callers always
// get a populated `LoadedCatalog` and never an error.

use super::error::{CatalogError, CatalogResult};
use super::fallback::fallback_products;
use super::model::Product;
use super::source::CatalogSource;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[cfg(feature = "fetch")]
use super::config::CatalogConfig;
#[cfg(feature = "fetch")]
use super::source::HttpCatalogSource;

/// Which branch produced a catalog. Informational only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Provenance {
    Remote,
    Fallback,
}

impl std::fmt::Display for Provenance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Provenance::Remote => write!(f, "remote"),
            Provenance::Fallback => write!(f, "fallback"),
        }
    }
}

/// The authoritative catalog for one session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoadedCatalog {
    pub products: Vec<Product>,
    pub provenance: Provenance,
}

impl LoadedCatalog {
    pub fn remote(products: Vec<Product>) -> Self {
        Self {
            products,
            provenance: Provenance::Remote,
        }
    }

    /// The embedded catalog.
    pub fn fallback() -> Self {
        Self {
            products: fallback_products(),
            provenance: Provenance::Fallback,
        }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// Runs a catalog source and collapses failures into the fallback catalog.
#[derive(Debug, Clone)]
pub struct CatalogLoader<S> {
    source: S,
}

impl<S: CatalogSource> CatalogLoader<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch once; fall back on any failure.
    pub async fn load(&self) -> LoadedCatalog {
        tracing::info!("Loading product catalog");

        match self.source.fetch_products().await {
            Ok(products) => {
                tracing::info!("Loaded {} products from remote catalog", products.len());
                LoadedCatalog::remote(products)
            }
            Err(e) => {
                tracing::warn!("Catalog fetch failed, using fallback products: {}", e);
                LoadedCatalog::fallback()
            }
        }
    }
}

#[cfg(feature = "fetch")]
impl CatalogLoader<HttpCatalogSource> {
    /// HTTP loader for the given configuration.
    pub fn http(config: CatalogConfig) -> CatalogResult<Self> {
        Ok(Self::new(HttpCatalogSource::new(config)?))
    }

    /// HTTP loader configured from the environment.
    pub fn from_env() -> CatalogResult<Self> {
        Self::http(CatalogConfig::from_env())
    }
}

/// Loader that never touches the network.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineSource;

#[async_trait]
impl CatalogSource for OfflineSource {
    async fn fetch_products(&self) -> CatalogResult<Vec<Product>> {
        Err(CatalogError::unavailable("offline mode"))
    }
}

impl CatalogLoader<OfflineSource> {
    pub fn offline() -> Self {
        Self::new(OfflineSource)
    }
}
