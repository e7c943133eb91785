mod handlers;
pub mod types;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::dashboard::Dashboard;
use crate::rice::{IdProvider, UuidIds};

/// Shared, read-only server state.
#[derive(Clone)]
pub struct AppState {
    /// Seed served by `GET /dashboard`. Never mutated.
    pub seed: Arc<Dashboard>,
    pub ids: Arc<dyn IdProvider>,
}

impl AppState {
    /// State that hands out UUID feature ids.
    pub fn new(seed: Dashboard) -> Self {
        Self::with_ids(seed, UuidIds)
    }

    pub fn with_ids(seed: Dashboard, ids: impl IdProvider + 'static) -> Self {
        Self {
            seed: Arc::new(seed),
            ids: Arc::new(ids),
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        // Dashboard
        .route("/dashboard", get(handlers::get_dashboard))
        .route("/dashboard/seed", get(handlers::get_seed))
        .route("/dashboard/snapshot", post(handlers::snapshot_dashboard))
        // RICE
        .route("/rice/score", post(handlers::compute_score))
        .route("/features/rank", post(handlers::rank_features))
        .route("/features/add", post(handlers::add_feature))
        .route("/features/remove", post(handlers::remove_feature))
        // Market
        .route("/market/sizes", post(handlers::market_sizes))
        .route("/market/projection", post(handlers::market_projection))
        // Roadmap
        .route("/roadmap/summary", post(handlers::roadmap_summary))
        .route("/roadmap/toggle", post(handlers::toggle_quarter))
        // Competition
        .route("/competitors/advantages", post(handlers::competitor_advantages))
        // Health
        .route("/health", get(handlers::health));

    Router::new()
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
