mod config;
mod services;

use crate::config::ServerConfig;
use actix_files::Files;
use actix_web::middleware::{DefaultHeaders, Logger};
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use common::config::SiteConfig;
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::{info, warn};
use mime_guess::from_path;
use std::thread;
use std::time::Duration;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

const NO_CACHE: &str = "no-store, no-cache, must-revalidate, max-age=0";

async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let path = req.path().trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match STATIC_DIR.get_file("index.html") {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = ServerConfig::from_env();
    let url = config.url();

    if !config.catalog_path.exists() {
        warn!(
            "{} does not exist yet; the page will render no products",
            config.catalog_path.display()
        );
    }

    if config.open_browser {
        let url_clone = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            if webbrowser::open(&url_clone).is_err() {
                info!("Please open your browser and go to: {}", url_clone);
            }
        });
    }

    info!("Serving at {} (Ctrl+C to stop)", url);

    let bind = (config.host.clone(), config.port);
    let media_dir = config.media_dir.clone();
    let server_config = web::Data::new(config);
    let site_config = web::Data::new(SiteConfig::default());

    HttpServer::new(move || {
        App::new()
            .wrap(DefaultHeaders::new().add(("Cache-Control", NO_CACHE)))
            .wrap(Logger::default())
            .app_data(server_config.clone())
            .app_data(site_config.clone())
            .configure(services::catalog::configure_routes)
            .service(Files::new("/media", &media_dir))
            .default_service(web::route().to(serve_embedded))
    })
        .bind(bind)?
        .run()
        .await?;

    info!("Server stopped");
    Ok(())
}
