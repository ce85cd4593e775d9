use common::catalog::{Fetch, FetchResponse};
use common::error::CatalogError;
use gloo_net::http::Request;

/// Browser `fetch` transport for `RemoteCatalog`.
pub struct GlooFetch;

impl Fetch for GlooFetch {
    async fn get(&self, url: &str) -> Result<FetchResponse, CatalogError> {
        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;
        let status = response.status();
        let body = response
            .binary()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;
        Ok(FetchResponse { status, body })
    }
}
