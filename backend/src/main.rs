mod config;
mod otp_store;
mod services;

use crate::config::ServerConfig;
use crate::otp_store::state::OtpState;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::{info, warn};
use mime_guess::from_path;
use std::thread;
use std::time::Duration;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

/// Serves the embedded SPA. Unknown paths get `index.html` so client-side
/// routes survive a reload.
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

    if config.open_browser {
        let url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            if let Err(e) = webbrowser::open(&url) {
                warn!("Could not open browser: {}", e);
            }
        });
    }

    let otp_state = OtpState::new(config.dev_otp_code.clone());
    let dev_api = config.dev_api;
    if dev_api {
        info!("Development API mounted under {}", services::API_PATH);
    }

    info!("Server running at {}", url);

    HttpServer::new(move || {
        let app = App::new()
            .app_data(web::JsonConfig::default().limit(64 * 1024))
            .app_data(web::Data::new(otp_state.clone()));
        let app = if dev_api {
            app.service(services::configure_routes())
        } else {
            app
        };
        app.default_service(web::route().to(serve_embedded))
    })
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
