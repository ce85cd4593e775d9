//! # Catalog Service Module
//!
//! Routes that expose the catalog document kept on disk.
//!
//! - `document`: serves the raw `products.json` the page fetches at load time.
//! - `page`: renders the catalog to HTML on the server; the page needs no WebAssembly
//!   bundle and carries one inline script for the order buttons.
//!
//! Both read the file on every request, so edits show up on the next reload.

mod document;
mod page;

use actix_web::web::{get, resource, ServiceConfig};


/// Registers the catalog routes.
///
/// *   **`GET /products.json`**: the catalog document as stored, or `404` when
///     the file does not exist.
/// *   **`GET /catalog`**: HTML page with one card per product.
pub fn configure_routes(cfg: &mut ServiceConfig) {
    cfg.service(resource("/products.json").route(get().to(document::process)))
        .service(resource("/catalog").route(get().to(page::process)));
}
