//! HTTP boundary - the read and write endpoints plus static assets
//!
//! Provides:
//! - `GET /api/facts/today` - today's fact with fresh vote aggregates
//! - `POST /api/votes` - record one reaction, returns updated aggregates
//! - `GET /health` - liveness check
//! - `/static` - client assets (presentation layer, out of scope here)

pub mod routes;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::db::FactDb;

/// Shared storage handle injected into request handlers
pub type SharedDb = Arc<FactDb>;

/// Create the API router
pub fn create_router(db: SharedDb, static_dir: &str) -> Router {
    Router::new()
        .route("/api/facts/today", get(routes::fact_of_the_day))
        .route("/api/votes", post(routes::create_vote))
        .route("/health", get(routes::health))
        .nest_service("/static", tower_http::services::ServeDir::new(static_dir))
        .with_state(db)
}
