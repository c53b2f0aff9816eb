// src/main.rs
// DOCUMENTATION: Application entry point
// PURPOSE: Initialize config, store client, admission control and start HTTP server

use actix_web::middleware::{from_fn, Compress, Logger};
use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use std::io;
use std::sync::Arc;
use studio_gateway::config::{self, Config};
use studio_gateway::db::DataStore;
use studio_gateway::handlers;
use studio_gateway::middleware::{admission, start_cleanup_task, ClientRateLimiter, OriginPolicy};

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Load configuration
    let config = Config::from_env();

    // 3. Initialize logging
    if std::env::var("RUST_LOG").is_err() {
        let log_level = if !config.log_level.is_empty() {
            &config.log_level
        } else {
            "info,actix_web=info"
        };
        std::env::set_var("RUST_LOG", log_level);
    }
    env_logger::init();

    if let Err(e) = config.validate() {
        log::error!("Configuration error: {}", e);
        std::process::exit(1);
    }

    log::info!("Starting studio-gateway...");
    log::info!("Environment: {}", config.environment);
    log::info!("Allowed origins: {}", config.allowed_origins.join(", "));
    log::info!(
        "Server Address: {}:{}",
        config.server_address,
        config.server_port
    );

    // 4. Initialize the data store client (degraded mode without credentials)
    let store: Arc<dyn DataStore> = match config::init_store(&config, &config.supabase_anon_key) {
        Ok(store) => Arc::new(store),
        Err(e) => {
            log::error!("Failed to initialize data store client: {}", e);
            std::process::exit(1);
        }
    };

    // 5. Admission control
    let policy = OriginPolicy::from_config(&config);
    let limiter = Arc::new(ClientRateLimiter::new(
        config.rate_limit_max,
        config.rate_limit_window(),
    ));
    log::info!(
        "Rate limit: {} requests per {}s per client",
        config.rate_limit_max,
        config.rate_limit_window_secs
    );

    // Prune idle clients every 5 minutes
    start_cleanup_task(limiter.clone(), 300);

    // 6. Start HTTP server
    let server_addr = format!("{}:{}", config.server_address, config.server_port);
    log::info!("Health check: http://localhost:{}/health", config.server_port);

    HttpServer::new(move || {
        App::new()
            // Application state (store client, origin policy and rate limiter)
            .app_data(web::Data::from(store.clone()))
            .app_data(web::Data::new(policy.clone()))
            .app_data(web::Data::from(limiter.clone()))
            // Middleware
            .wrap(from_fn(admission))
            .wrap(Compress::default())
            .wrap(Logger::default())
            // Routes
            .configure(handlers::routes)
    })
    .bind(&server_addr)?
    .run()
    .await
}
