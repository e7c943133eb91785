//! Request and response bodies for the HTTP API.
//!
//! Collections always travel with the request: the server keeps no feature
//! list of its own.

use serde::{Deserialize, Serialize};

use crate::models::*;
use crate::roadmap::ExpandedQuarters;

// ============================================================
// Request Types
// ============================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreRequest {
    pub reach: u64,
    pub impact: f64,
    pub confidence: f64,
    pub effort: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddFeatureRequest {
    /// The caller's current list. Features are re-scored on the way in.
    #[serde(default)]
    pub features: Vec<Feature>,
    #[serde(default)]
    pub draft: FeatureDraft,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoveFeatureRequest {
    #[serde(default)]
    pub features: Vec<Feature>,
    pub id: FeatureId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionRequest {
    pub som: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToggleQuarterRequest {
    #[serde(default)]
    pub expanded: ExpandedQuarters,
    pub quarter: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvantagesRequest {
    pub competitors: Vec<CompetitorProfile>,
    pub dimensions: Vec<CapabilityDimension>,
}

// ============================================================
// Response Types
// ============================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreResponse {
    pub score: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddFeatureResponse {
    pub feature: Feature,
    /// The input list with `feature` appended, in insertion order.
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadmapReport {
    pub summary: RoadmapSummary,
    pub quarters: Vec<QuarterProgress>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvantagesResponse {
    pub count: usize,
    pub advantages: Vec<CapabilityDimension>,
}
