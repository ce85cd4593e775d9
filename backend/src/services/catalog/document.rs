//! # Catalog Document Service
//!
//! Serves the catalog document kept on disk for the `GET /products.json`
//! endpoint, which the page fetches once when its product grid first renders.
//!
//! ## Workflow
//!
//! 1.  **HTTP Request**: `process` is the Actix handler. It reads the document
//!     path from the shared `ServerConfig`.
//!
//! 2.  **File Read**: `read_document` reads the whole file with `tokio::fs` on
//!     every request, so edits show up on the next reload without a restart.
//!
//! 3.  **HTTP Response**: the bytes go back unchanged as `application/json`.
//!     Decoding and the per-record leniency happen in the browser, through
//!     `common::model::catalog::CatalogDocument`.
//!
//! A missing file is an expected state while the catalog is still being
//! written, so it is logged as a warning rather than an error.

use crate::config::ServerConfig;
use actix_web::{web, HttpResponse, Responder};
use common::error::CatalogError;
use log::{error, warn};
use std::path::Path;

/// Actix handler for `GET /products.json`.
///
/// The file is passed through as stored; no schema validation happens here.
///
/// # Arguments
/// * `config` - Server settings holding the path of the catalog document.
///
/// # Returns
/// - `200 OK` with the document bytes and an `application/json` content type.
/// - `404 Not Found` when the file does not exist.
/// - `500 Internal Server Error` with the error text for any other read failure.
pub async fn process(config: web::Data<ServerConfig>) -> impl Responder {
    match read_document(&config.catalog_path).await {
        Ok(bytes) => HttpResponse::Ok()
            .content_type("application/json")
            .body(bytes),
        Err(e) if e.is_not_found() => {
            warn!("{} not found", config.catalog_path.display());
            HttpResponse::NotFound().body("Catalog not found")
        }
        Err(e) => {
            error!("Error reading {}: {}", config.catalog_path.display(), e);
            HttpResponse::InternalServerError().body(format!("Error reading catalog: {}", e))
        }
    }
}

/// Reads the catalog document at `path`.
///
/// # Returns
/// The raw file contents, or `CatalogError::Io` (check `is_not_found`).
pub async fn read_document(path: &Path) -> Result<Vec<u8>, CatalogError> {
    Ok(tokio::fs::read(path).await?)
}
