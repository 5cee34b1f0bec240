// web_app/components/mod.rs - UI components module
//
// Structure:
// - common.rs: Loading, PageHeader, Button, Badge
// - search.rs: SearchBar, ResultCount
// - product.rs: ProductCard, ProductGrid, EmptyState

pub mod common;
pub mod search;
pub mod product;

// Re-export commonly used components for convenience
pub use common::*;
pub use search::*;
pub use product::*;
