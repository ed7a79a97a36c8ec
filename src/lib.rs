use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod auth;
pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;

use auth::session::SessionRegistry;
use config::Config;
use services::sheets::SheetStore;

#[derive(Clone)]
pub struct AppState {
    pub store: SheetStore,
    pub sessions: SessionRegistry,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Arc<Config>) -> Self {
        let store = if config.seed_demo_data {
            SheetStore::with_demo_data()
        } else {
            SheetStore::new()
        };

        Self {
            store,
            sessions: SessionRegistry::new(),
            config,
        }
    }
}

/// Build the full application router. Split out of `main` so tests can drive
/// it with `tower::ServiceExt::oneshot`.
pub fn app(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/readyz", get(handlers::health::readyz))
        .route("/api/auth/login", post(handlers::auth::login));

    let protected_routes = Router::new()
        .route("/api/me", get(handlers::auth::me))
        .route("/api/auth/logout", post(handlers::auth::logout))
        // Wellness logs
        .route(
            "/api/wellness-logs",
            post(handlers::wellness_logs::create_wellness_log),
        )
        .route(
            "/api/wellness-logs",
            get(handlers::wellness_logs::list_wellness_logs),
        )
        // Insights
        .route("/api/insights", get(handlers::insights::get_insights))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::middleware::require_auth,
        ));

    let cors = CorsLayer::new()
        .allow_origin(
            state
                .config
                .frontend_url
                .parse::<axum::http::HeaderValue>()
                .expect("FRONTEND_URL must be a valid origin"),
        )
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
        ])
        .allow_credentials(true);

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
