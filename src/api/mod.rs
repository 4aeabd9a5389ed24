//! HTTP endpoints for the dashboard service.
//!
//! This module exposes every dashboard view as a JSON endpoint, plus the
//! mutating operations (alert acknowledgement, agent toggle, training
//! start) and a catch-all 404 for unmapped routes.

pub mod views;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::core::alerts::AlertError;
use crate::core::feed::{ConnectionGauge, TrafficWindow};
use crate::core::filter::{filter_logs, level_tally, LevelFilter};
use crate::core::training::TrainingError;
use crate::core::{AlertBoard, Fixtures, TrainingSession};
use crate::models::Config;

/// Shared application state
pub struct ApiState {
    pub config: Arc<Config>,
    pub fixtures: Arc<Fixtures>,
    pub traffic: Arc<RwLock<TrafficWindow>>,
    pub connections: Arc<RwLock<ConnectionGauge>>,
    pub alerts: Arc<AlertBoard>,
    pub training: Arc<TrainingSession>,
    pub agent_enabled: AtomicBool,
}

impl ApiState {
    /// Build the full state from configuration, seeded at the current time.
    pub fn new(config: Arc<Config>) -> Self {
        let now = Utc::now();
        let fixtures = Arc::new(Fixtures::seeded_at(now));
        Self {
            traffic: Arc::new(RwLock::new(TrafficWindow::seeded(&config.feed, now))),
            connections: Arc::new(RwLock::new(ConnectionGauge::new(
                config.feed.connection_base,
            ))),
            alerts: Arc::new(AlertBoard::new(fixtures.alerts.clone())),
            training: Arc::new(TrainingSession::new(config.training.clone())),
            agent_enabled: AtomicBool::new(true),
            fixtures,
            config,
        }
    }
}

/// API configuration function for Actix-web
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .service(web::resource("/health").route(web::get().to(health_check))),
    )
    .service(web::resource("/").route(web::get().to(dashboard)))
    .service(web::resource("/ai-agent").route(web::get().to(ai_agent)))
    .service(web::resource("/ai-agent/toggle").route(web::post().to(toggle_agent)))
    .service(web::resource("/network").route(web::get().to(network)))
    .service(web::resource("/training").route(web::get().to(training)))
    .service(web::resource("/training/start").route(web::post().to(start_training)))
    .service(web::resource("/alerts").route(web::get().to(alerts)))
    .service(web::resource("/alerts/acknowledge-all").route(web::post().to(acknowledge_all)))
    .service(web::resource("/alerts/{id}/acknowledge").route(web::post().to(acknowledge_alert)))
    .service(web::resource("/logs").route(web::get().to(logs)))
    .service(web::resource("/backup").route(web::get().to(backup)))
    .service(web::resource("/settings").route(web::get().to(settings)));
}

/// Health check endpoint response
#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

/// Body of every error response
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

/// Log filter query parameters
#[derive(Debug, Deserialize)]
pub struct LogsQuery {
    pub search: Option<String>,
    pub level: Option<String>,
}

#[derive(Serialize)]
struct AgentToggleResponse {
    enabled: bool,
}

#[derive(Serialize)]
struct TrainingStartResponse {
    started: bool,
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn dashboard(state: web::Data<ApiState>) -> impl Responder {
    let active = state.connections.read().await.active();
    HttpResponse::Ok().json(views::dashboard_view(&state.fixtures, active, Utc::now()))
}

async fn ai_agent(state: web::Data<ApiState>) -> impl Responder {
    let enabled = state.agent_enabled.load(Ordering::Relaxed);
    HttpResponse::Ok().json(views::agent_view(&state.fixtures, enabled))
}

async fn toggle_agent(state: web::Data<ApiState>) -> impl Responder {
    let enabled = !state.agent_enabled.fetch_xor(true, Ordering::Relaxed);
    HttpResponse::Ok().json(AgentToggleResponse { enabled })
}

async fn network(state: web::Data<ApiState>) -> impl Responder {
    let window = state.traffic.read().await;
    let view = views::network_view(&state.fixtures, window.snapshot(), window.current_rps());
    HttpResponse::Ok().json(view)
}

async fn training(state: web::Data<ApiState>) -> impl Responder {
    let status = state.training.status().await;
    HttpResponse::Ok().json(views::training_view(&state.fixtures, status))
}

async fn start_training(state: web::Data<ApiState>) -> impl Responder {
    match state.training.start().await {
        Ok(()) => HttpResponse::Accepted().json(TrainingStartResponse { started: true }),
        Err(TrainingError::AlreadyRunning) => HttpResponse::Conflict().json(ErrorResponse {
            error: "training already in progress".to_string(),
        }),
    }
}

async fn alerts(state: web::Data<ApiState>) -> impl Responder {
    let alerts = state.alerts.snapshot().await;
    let tally = state.alerts.severity_tally().await;
    HttpResponse::Ok().json(views::alerts_view(alerts, tally, Utc::now()))
}

async fn acknowledge_alert(
    state: web::Data<ApiState>,
    path: web::Path<String>,
) -> impl Responder {
    let raw = path.into_inner();
    let id = match raw.parse::<Uuid>() {
        Ok(id) => id,
        Err(_) => {
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: format!("invalid alert id: {}", raw),
            })
        }
    };
    match state.alerts.acknowledge(id).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(AlertError::NotFound(id)) => HttpResponse::NotFound().json(ErrorResponse {
            error: format!("alert {} not found", id),
        }),
    }
}

async fn acknowledge_all(state: web::Data<ApiState>) -> impl Responder {
    state.alerts.acknowledge_all().await;
    HttpResponse::NoContent().finish()
}

async fn logs(state: web::Data<ApiState>, query: web::Query<LogsQuery>) -> impl Responder {
    let search = query.search.as_deref().unwrap_or("");
    let level = LevelFilter::parse(query.level.as_deref().unwrap_or("all"));
    let entries = &state.fixtures.log_entries;
    let filtered = filter_logs(entries, search, level);
    let tally = level_tally(entries);
    HttpResponse::Ok().json(views::logs_view(entries, filtered, tally))
}

async fn backup() -> impl Responder {
    HttpResponse::Ok().json(views::backup_view())
}

async fn settings(state: web::Data<ApiState>) -> impl Responder {
    let server = &state.config.server;
    HttpResponse::Ok().json(views::settings_view(&server.host, server.port))
}

/// Catch-all for unmapped routes
pub async fn not_found() -> impl Responder {
    HttpResponse::NotFound().json(ErrorResponse {
        error: "not found".to_string(),
    })
}
