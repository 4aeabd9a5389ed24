//! CyberShield Dashboard Service
//!
//! This is the main entry point for the dashboard service.
//! It initializes the application components, starts the synthetic
//! telemetry feeds and serves the view endpoints.

use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use log::info;

use cybershield_dashboard::api::{self, ApiState};
use cybershield_dashboard::config;
use cybershield_dashboard::core::feed;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logging
    env_logger::init();

    info!("Starting CyberShield Dashboard Service...");

    // Load configuration
    let config = Arc::new(config::load_config()?);

    // Create API state
    let state = web::Data::new(ApiState::new(config.clone()));

    // Start the synthetic feeds; the guards keep the tasks alive for the
    // lifetime of the server and abort them on shutdown
    let _traffic_feed = feed::spawn_traffic_feed(state.traffic.clone(), config.feed.clone());
    let _connection_feed =
        feed::spawn_connection_feed(state.connections.clone(), config.feed.clone());

    // Start HTTP server
    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(api::config)
            .default_service(web::route().to(api::not_found))
    })
    .bind((config.server.host.as_str(), config.server.port))?
    .run()
    .await?;

    Ok(())
}
