// catalog/mod.rs - Catalog loading, filtering and session state
//
// Data flows in one direction:
//   loader (remote | fallback) -> LoadedCatalog -> filter -> CatalogView
//
// Structure:
// - model.rs: Product, ProductId, Price
// - fallback.rs: the embedded catalog used when the remote source fails
// - config.rs: endpoint / limit / timeout configuration
// - error.rs: errors raised by catalog sources
// - source.rs: the CatalogSource port and its HTTP implementation
// - loader.rs: fetch-with-fallback, collapsing failures into fallback data
// - filter.rs: the pure title filter and the result summary
// - session.rs: Pending -> Ready state machine and the live async driver

pub mod config;
pub mod error;
pub mod fallback;
pub mod filter;
pub mod loader;
pub mod model;
pub mod session;
pub mod source;

pub use config::CatalogConfig;
pub use error::{CatalogError, CatalogResult};
pub use fallback::fallback_products;
pub use filter::{filter_products, ResultSummary};
pub use loader::{CatalogLoader, LoadedCatalog, OfflineSource, Provenance};
pub use model::{Price, Product, ProductId};
pub use session::{CatalogSession, CatalogView, LoadState};
pub use source::CatalogSource;

#[cfg(feature = "fetch")]
pub use session::LiveSession;
#[cfg(feature = "fetch")]
pub use source::HttpCatalogSource;
