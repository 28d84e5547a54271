use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use travel_bot::config::Settings;
use travel_bot::core::Recommender;
use travel_bot::error::handle_json_payload_error;
use travel_bot::routes::{self, AppState};
use travel_bot::services::load_dataset;

fn init_logging() {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_level))
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    init_logging();

    info!("Starting Travel Bot recommendation service...");

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        std::process::exit(1);
    });

    let data_dir = settings.data.resolve_dir()?;
    info!("Loading datasets from {}", data_dir.display());

    // Datasets must load before the server binds
    let dataset = load_dataset(&data_dir).unwrap_or_else(|e| {
        error!("Error: {}", e);
        error!("Please ensure all required datasets are present in {}", data_dir.display());
        std::process::exit(1);
    });

    info!("All datasets loaded successfully: {:?}", dataset.stats());

    let app_state = AppState {
        recommender: Recommender::new(Arc::new(dataset)),
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;

    info!("Starting HTTP server on {}:{}", host, port);

    let server = HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .configure(routes::configure_routes)
    });

    let server = match settings.server.workers {
        Some(workers) => server.workers(workers),
        None => server,
    };

    server.bind((host, port))?.run().await
}
