// catalog/source.rs - Where a catalog comes from
//
// `CatalogSource` is the seam between the loader and the network. The
// production implementation talks HTTP via reqwest; tests plug in stubs.

use super::error::CatalogResult;
use super::model::Product;
use async_trait::async_trait;
use std::sync::Arc;

#[cfg(feature = "fetch")]
use super::config::CatalogConfig;
#[cfg(feature = "fetch")]
use super::error::CatalogError;

/// A single-shot provider of products.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch the catalog once. Order of the returned products is display order.
    async fn fetch_products(&self) -> CatalogResult<Vec<Product>>;
}

#[async_trait]
impl<S: CatalogSource + ?Sized> CatalogSource for Arc<S> {
    async fn fetch_products(&self) -> CatalogResult<Vec<Product>> {
        (**self).fetch_products().await
    }
}

/// Decode a response body as a JSON array of products.
pub fn decode_products(body: &[u8]) -> CatalogResult<Vec<Product>> {
    Ok(serde_json::from_slice(body)?)
}

/// Remote catalog fetched with a single GET `<endpoint>?limit=<n>`.
///
/// No retries and no authentication. The configured timeout covers the whole
/// request including the body.
#[cfg(feature = "fetch")]
#[derive(Debug, Clone)]
pub struct HttpCatalogSource {
    client: reqwest::Client,
    config: CatalogConfig,
}

#[cfg(feature = "fetch")]
impl HttpCatalogSource {
    pub fn new(config: CatalogConfig) -> CatalogResult<Self> {
        let mut builder = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone());
        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }
        let client = builder.build()?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }
}

#[cfg(feature = "fetch")]
#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch_products(&self) -> CatalogResult<Vec<Product>> {
        let response = self
            .client
            .get(&self.config.endpoint)
            .query(&[("limit", self.config.limit)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                status: status.as_u16(),
                url: response.url().to_string(),
            });
        }

        let body = response.bytes().await?;
        decode_products(&body)
    }
}
