//! Server settings, read from the environment with local-development defaults.
//!
//! | variable             | default         |
//! |----------------------|-----------------|
//! | `CATALOG_HOST`       | `127.0.0.1`     |
//! | `CATALOG_PORT`       | `8000`          |
//! | `CATALOG_FILE`       | `products.json` |
//! | `CATALOG_MEDIA_DIR`  | `media`         |
//! | `CATALOG_NO_BROWSER` | unset           |

use log::warn;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// The catalog document served at `/products.json`.
    pub catalog_path: PathBuf,
    /// Directory served under `/media`.
    pub media_dir: PathBuf,
    pub open_browser: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            catalog_path: PathBuf::from("products.json"),
            media_dir: PathBuf::from("media"),
            open_browser: true,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let port = match lookup("CATALOG_PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                warn!("Ignoring invalid CATALOG_PORT {:?}, using {}", raw, defaults.port);
                defaults.port
            }),
            None => defaults.port,
        };

        Self {
            host: lookup("CATALOG_HOST").unwrap_or(defaults.host),
            port,
            catalog_path: lookup("CATALOG_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.catalog_path),
            media_dir: lookup("CATALOG_MEDIA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.media_dir),
            open_browser: lookup("CATALOG_NO_BROWSER").is_none(),
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}
