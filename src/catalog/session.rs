// catalog/session.rs - Session state for one catalog view
//
// The loading flag and the catalog live in one enum, so "loaded" can never be
// observed without data. The filtered view is derived on every read.

use super::filter::{filter_products, ResultSummary};
use super::loader::LoadedCatalog;
use super::model::Product;

#[cfg(feature = "fetch")]
use super::loader::CatalogLoader;
#[cfg(feature = "fetch")]
use super::source::CatalogSource;
#[cfg(feature = "fetch")]
use tokio::{sync::watch, task::JoinHandle};

/// One-shot load state: Pending until the loader resolves, then Ready forever.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadState {
    #[default]
    Pending,
    Ready(LoadedCatalog),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Pending)
    }

    pub fn catalog(&self) -> Option<&LoadedCatalog> {
        match self {
            LoadState::Pending => None,
            LoadState::Ready(catalog) => Some(catalog),
        }
    }
}

/// What the view renders: loading flag, filtered products and the count line.
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogView {
    pub loading: bool,
    pub products: Vec<Product>,
    pub summary: ResultSummary,
}

impl CatalogView {
    /// Derive the view from the load state and the raw query.
    pub fn derive(state: &LoadState, query: &str) -> Self {
        let products = state
            .catalog()
            .map(|catalog| filter_products(&catalog.products, query))
            .unwrap_or_default();

        Self {
            loading: state.is_loading(),
            summary: ResultSummary::new(products.len(), query),
            products,
        }
    }

    /// True once loaded with nothing to show ("No products found").
    pub fn is_empty_result(&self) -> bool {
        !self.loading && self.products.is_empty()
    }
}

/// Synchronous session: single writer for the query, resolved once.
#[derive(Clone, Debug, Default)]
pub struct CatalogSession {
    state: LoadState,
    query: String,
}

impl CatalogSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// Store the loaded catalog. Returns false, leaving state untouched, if
    /// the session was already resolved.
    pub fn resolve(&mut self, loaded: LoadedCatalog) -> bool {
        if !self.state.is_loading() {
            tracing::warn!("Ignoring second catalog resolution ({})", loaded.provenance);
            return false;
        }
        tracing::debug!("Session resolved with {} {} products", loaded.len(), loaded.provenance);
        self.state = LoadState::Ready(loaded);
        true
    }

    /// Replace the search text.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn view(&self) -> CatalogView {
        CatalogView::derive(&self.state, &self.query)
    }
}

/// Session whose catalog is loaded by a background tokio task.
///
/// Dropping the session aborts the load. A result that still arrives after
/// teardown has no receiver and is dropped.
#[cfg(feature = "fetch")]
pub struct LiveSession {
    state: watch::Receiver<LoadState>,
    query: String,
    task: JoinHandle<()>,
}

#[cfg(feature = "fetch")]
impl LiveSession {
    /// Start the one-shot load. Must be called within a tokio runtime.
    pub fn start<S>(loader: CatalogLoader<S>) -> Self
    where
        S: CatalogSource + 'static,
    {
        let (tx, rx) = watch::channel(LoadState::Pending);
        let task = tokio::spawn(async move {
            let loaded = loader.load().await;
            if tx.send(LoadState::Ready(loaded)).is_err() {
                tracing::debug!("Session closed before the catalog arrived; discarding it");
            }
        });

        Self {
            state: rx,
            query: String::new(),
            task,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn view(&self) -> CatalogView {
        CatalogView::derive(&self.state.borrow(), &self.query)
    }

    /// Wait for the load to resolve, then return the current view.
    pub async fn ready(&mut self) -> CatalogView {
        if self.state.wait_for(|state| !state.is_loading()).await.is_err() {
            tracing::warn!("Catalog load task ended without a result");
        }
        self.view()
    }

    /// A receiver for observing the Pending -> Ready transition.
    pub fn subscribe(&self) -> watch::Receiver<LoadState> {
        self.state.clone()
    }
}

#[cfg(feature = "fetch")]
impl Drop for LiveSession {
    fn drop(&mut self) {
        self.task.abort();
    }
}
