//! # Catalog Page Service
//!
//! Renders the catalog to a complete HTML document on the server for the
//! `GET /catalog` endpoint. The page needs no WebAssembly bundle; its only
//! script is the inline `orderOnWhatsApp` definition the order buttons call.
//!
//! ## Workflow
//!
//! 1.  **HTTP Request**: `process` is the Actix handler. It receives the shared
//!     `ServerConfig` (document path) and `SiteConfig` (WhatsApp number, image
//!     directory, labels).
//!
//! 2.  **Document Load**: `load_document` reads the file through
//!     `document::read_document` and decodes it as a `CatalogDocument`. Entries
//!     that are not usable products are skipped by the decoder; a document
//!     without a `products` list fails as a whole.
//!
//! 3.  **Fragment Building**: `common::catalog::render_products` turns each
//!     product into a `ProductFragment`, in document order.
//!
//! 4.  **HTTP Response**: `common::markup::render_page` writes the brand header,
//!     the product grid and the order script, returned as `text/html`.

use super::document::read_document;
use crate::config::ServerConfig;
use actix_web::{web, HttpResponse, Responder};
use common::catalog::render_products;
use common::config::SiteConfig;
use common::error::CatalogError;
use common::fragment::ProductFragment;
use common::markup::render_page;
use common::model::catalog::CatalogDocument;
use log::{debug, error};
use std::path::Path;

/// Actix handler for `GET /catalog`.
///
/// # Arguments
/// * `config` - Server settings holding the path of the catalog document.
/// * `site` - Page settings used to build each product card.
///
/// # Returns
/// - `200 OK` with the rendered page as `text/html`.
/// - `404 Not Found` when the document does not exist.
/// - `500 Internal Server Error` when the document cannot be read or has no
///   `products` list.
pub async fn process(
    config: web::Data<ServerConfig>,
    site: web::Data<SiteConfig>,
) -> impl Responder {
    let document = match load_document(&config.catalog_path).await {
        Ok(document) => document,
        Err(e) if e.is_not_found() => {
            return HttpResponse::NotFound().body("Catalog not found");
        }
        Err(e) => {
            error!("Error loading catalog page: {}", e);
            return HttpResponse::InternalServerError()
                .body(format!("Error loading catalog: {}", e));
        }
    };

    let mut fragments: Vec<ProductFragment> = Vec::with_capacity(document.products.len());
    let count = render_products(&document.products, &mut fragments, &site);
    debug!("Rendered {} products", count);

    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(render_page(document.brand.as_ref(), &fragments, &site))
}

async fn load_document(path: &Path) -> Result<CatalogDocument, CatalogError> {
    let bytes = read_document(path).await?;
    Ok(CatalogDocument::from_slice(&bytes)?)
}
