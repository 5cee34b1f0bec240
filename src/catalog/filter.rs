// catalog/filter.rs - Title search over a loaded catalog
//
// The filtered view is never cached: every change to the catalog or the
// query recomputes it from scratch.

use super::model::Product;
use std::fmt;

/// Products whose title contains `query`, ignoring case, in catalog order.
///
/// The query is used as typed: no trimming, tokenizing or fuzzy matching.
/// An empty query keeps every product.
pub fn filter_products(catalog: &[Product], query: &str) -> Vec<Product> {
    if query.is_empty() {
        return catalog.to_vec();
    }

    let needle = query.to_lowercase();
    catalog
        .iter()
        .filter(|product| product.title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// "N products found" line shown above the results.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultSummary {
    pub count: usize,
    pub term: String,
}

impl ResultSummary {
    pub fn new(count: usize, term: impl Into<String>) -> Self {
        Self {
            count,
            term: term.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

impl fmt::Display for ResultSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plural = if self.count == 1 { "" } else { "s" };
        write!(f, "{} product{} found", self.count, plural)?;
        if !self.term.is_empty() {
            write!(f, " for \"{}\"", self.term)?;
        }
        Ok(())
    }
}
