//! Catalog sources and the page-load routine.
//!
//! A [`CatalogSource`] yields the ordered product list. Two strategies exist:
//! - [`StaticCatalog`]: a list held in memory, available immediately.
//! - [`RemoteCatalog`]: one GET of the JSON document through a [`Fetch`]
//!   implementation supplied by the caller (the browser fetch API on the
//!   page, a stub in tests).
//!
//! [`load_catalog`] is the defensive remote path: failures are logged and
//! nothing is rendered. [`render_products`] is the direct path used with the
//! static list; it borrows the container, so it cannot run without one.

mod bundled;

use crate::config::SiteConfig;
use crate::error::CatalogError;
use crate::fragment::ProductFragment;
use crate::model::catalog::CatalogDocument;
use crate::model::product::Product;
use log::{debug, error, info};

pub use bundled::bundled_products;

/// Anything able to yield the catalog's products.
#[allow(async_fn_in_trait)]
pub trait CatalogSource {
    async fn products(&self) -> Result<Vec<Product>, CatalogError>;
}

/// Raw response of a catalog fetch.
#[derive(Debug, Clone)]
pub struct FetchResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl FetchResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport used by [`RemoteCatalog`]. Errors are transport failures only;
/// HTTP status handling is left to the caller.
#[allow(async_fn_in_trait)]
pub trait Fetch {
    async fn get(&self, url: &str) -> Result<FetchResponse, CatalogError>;
}

/// Receives rendered fragments in source order.
pub trait Container {
    fn append(&mut self, fragment: ProductFragment);
}

impl Container for Vec<ProductFragment> {
    fn append(&mut self, fragment: ProductFragment) {
        self.push(fragment);
    }
}

/// Products held in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    products: Vec<Product>,
}

impl StaticCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The list shipped with the page.
    pub fn bundled() -> Self {
        Self::new(bundled_products())
    }

    pub fn products_now(&self) -> &[Product] {
        &self.products
    }
}

impl CatalogSource for StaticCatalog {
    async fn products(&self) -> Result<Vec<Product>, CatalogError> {
        Ok(self.products.clone())
    }
}

/// Products read from a JSON document with a top-level `products` array.
pub struct RemoteCatalog<F> {
    fetcher: F,
    url: String,
}

impl<F: Fetch> RemoteCatalog<F> {
    pub fn new(fetcher: F, url: &str) -> Self {
        Self {
            fetcher,
            url: url.to_string(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub async fn document(&self) -> Result<CatalogDocument, CatalogError> {
        let response = self.fetcher.get(&self.url).await?;
        debug!("Response status: {}", response.status);
        if !response.is_success() {
            return Err(CatalogError::Http {
                status: response.status,
            });
        }
        Ok(CatalogDocument::from_slice(&response.body)?)
    }
}

impl<F: Fetch> CatalogSource for RemoteCatalog<F> {
    async fn products(&self) -> Result<Vec<Product>, CatalogError> {
        Ok(self.document().await?.products)
    }
}

/// Appends one fragment per product, in order. Returns the number appended.
pub fn render_products<C: Container>(
    products: &[Product],
    container: &mut C,
    config: &SiteConfig,
) -> usize {
    for (index, product) in products.iter().enumerate() {
        container.append(ProductFragment::build(product, config));
        debug!("Product {} added: {}", index + 1, product.name);
    }
    products.len()
}

/// Fetches the products and renders them into `container`.
///
/// Returns the number of fragments appended. A failed fetch or an absent
/// container is logged and yields `0`; no error leaves this function.
pub async fn load_catalog<S, C>(source: &S, container: Option<&mut C>, config: &SiteConfig) -> usize
where
    S: CatalogSource,
    C: Container,
{
    info!("Loading products...");
    let products = match source.products().await {
        Ok(products) => products,
        Err(e) => {
            error!("Error loading products: {}", e);
            return 0;
        }
    };

    let Some(container) = container else {
        error!("Products container not found!");
        return 0;
    };

    debug!("Number of products: {}", products.len());
    let count = render_products(&products, container, config);
    info!("All products loaded successfully");
    count
}
