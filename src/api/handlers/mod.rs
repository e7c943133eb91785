use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use super::types::*;
use super::AppState;
use crate::competition;
use crate::dashboard::{Dashboard, DashboardSnapshot};
use crate::error::CoreError;
use crate::market;
use crate::models::*;
use crate::rice;
use crate::roadmap::{self, ExpandedQuarters};

// ============================================================
// Error Handling
// ============================================================

/// Map a core error to a response.
///
/// Input problems are the caller's to fix and are returned verbatim. An id
/// allocation failure is logged and reported as a generic server error.
fn core_error(e: CoreError) -> (StatusCode, String) {
    match e {
        CoreError::InvalidInput(_) => {
            tracing::warn!("Invalid input: {}", e);
            (StatusCode::BAD_REQUEST, e.to_string())
        }
        CoreError::Validation(_) => {
            tracing::warn!("Validation error: {}", e);
            (StatusCode::UNPROCESSABLE_ENTITY, e.to_string())
        }
        CoreError::IdCollision { .. } => {
            tracing::error!("Internal error: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            )
        }
    }
}

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Dashboard
// ============================================================

pub async fn get_dashboard(State(state): State<AppState>) -> Json<DashboardSnapshot> {
    Json(state.seed.snapshot())
}

pub async fn get_seed(State(state): State<AppState>) -> Json<Dashboard> {
    Json(state.seed.as_ref().clone())
}

/// Snapshot of caller-supplied state, for clients that edit their own copy.
pub async fn snapshot_dashboard(Json(dashboard): Json<Dashboard>) -> Json<DashboardSnapshot> {
    Json(dashboard.snapshot())
}

// ============================================================
// RICE Scoring
// ============================================================

pub async fn compute_score(
    Json(input): Json<ScoreRequest>,
) -> Result<Json<ScoreResponse>, (StatusCode, String)> {
    rice::compute_score(input.reach, input.impact, input.confidence, input.effort)
        .map(|score| Json(ScoreResponse { score }))
        .map_err(core_error)
}

pub async fn rank_features(Json(features): Json<Vec<Feature>>) -> Json<Vec<Feature>> {
    Json(rice::rank_features(&features))
}

pub async fn add_feature(
    State(state): State<AppState>,
    Json(input): Json<AddFeatureRequest>,
) -> Result<(StatusCode, Json<AddFeatureResponse>), (StatusCode, String)> {
    rice::add_feature(&input.features, input.draft, state.ids.as_ref())
        .map(|(feature, features)| {
            (
                StatusCode::CREATED,
                Json(AddFeatureResponse { feature, features }),
            )
        })
        .map_err(core_error)
}

pub async fn remove_feature(Json(input): Json<RemoveFeatureRequest>) -> Json<Vec<Feature>> {
    Json(rice::remove_feature(&input.features, &input.id))
}

// ============================================================
// Market Sizing
// ============================================================

pub async fn market_sizes(Json(input): Json<MarketInputs>) -> Json<MarketFigures> {
    Json(market::derive_market_sizes(
        input.tam,
        input.sam_percentage,
        input.som_percentage,
    ))
}

pub async fn market_projection(Json(input): Json<ProjectionRequest>) -> Json<CaptureProjection> {
    Json(market::project_capture(input.som))
}

// ============================================================
// Roadmap
// ============================================================

pub async fn roadmap_summary(Json(quarters): Json<Vec<RoadmapQuarter>>) -> Json<RoadmapReport> {
    Json(RoadmapReport {
        summary: roadmap::summarize(&quarters),
        quarters: roadmap::quarter_progresses(&quarters),
    })
}

pub async fn toggle_quarter(Json(input): Json<ToggleQuarterRequest>) -> Json<ExpandedQuarters> {
    Json(input.expanded.toggle(&input.quarter))
}

// ============================================================
// Competition
// ============================================================

pub async fn competitor_advantages(
    Json(input): Json<AdvantagesRequest>,
) -> Json<AdvantagesResponse> {
    let advantages: Vec<CapabilityDimension> =
        competition::advantages(&input.competitors, &input.dimensions)
            .into_iter()
            .cloned()
            .collect();
    Json(AdvantagesResponse {
        count: advantages.len(),
        advantages,
    })
}
