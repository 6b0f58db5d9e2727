//! Lifeline clinical records server
//!
//! Main entry point for the Lifeline API server.

use actix_cors::Cors;
use actix_files as fs;
use actix_web::{web, App, HttpServer};
use tracing::info;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::EnvFilter;

use lifeline::{api, config, db::Database};

/// Directory the prebuilt frontend bundle is served from.
const STATIC_DIR: &str = "./public";

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load a local .env before reading configuration
    dotenv::dotenv().ok();

    // Initialize logger
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let settings = config::load().expect("Failed to load configuration");

    // Connect to database
    let database = Database::connect(&settings)
        .await
        .expect("Failed to connect to database");

    info!(port = settings.port, "starting Lifeline server");

    // Start HTTP server
    let db = web::Data::new(database);
    HttpServer::new(move || {
        App::new()
            // Shared connection pool
            .app_data(db.clone())
            // Per-request tracing spans
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            // API routes
            .configure(api::configure)
            // Serve the prebuilt frontend for any non-API path
            .service(fs::Files::new("/", STATIC_DIR).index_file("index.html"))
    })
    .bind(("0.0.0.0", settings.port))?
    .run()
    .await
}
