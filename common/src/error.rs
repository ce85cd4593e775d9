use thiserror::Error;

/// Failures while obtaining the catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("HTTP error! status: {status}")]
    Http { status: u16 },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid catalog document: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Catalog file error: {0}")]
    Io(#[from] std::io::Error),
}

impl CatalogError {
    pub fn is_not_found(&self) -> bool {
        match self {
            CatalogError::Http { status } => *status == 404,
            CatalogError::Io(e) => e.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }
}
