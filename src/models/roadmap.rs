use serde::{Deserialize, Serialize};

/// Delivery status of a roadmap quarter or feature.
///
/// - `Completed`: Shipped
/// - `InProgress`: Actively being built
/// - `Planned`: Scheduled, not started
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum RoadmapStatus {
    Completed,
    InProgress,
    Planned,
}

impl RoadmapStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::InProgress => "in-progress",
            Self::Planned => "planned",
        }
    }

    /// Short badge text shown next to a feature.
    pub fn badge(&self) -> &'static str {
        match self {
            Self::Completed => "Done",
            Self::InProgress => "Active",
            Self::Planned => "Planned",
        }
    }
}

/// A deliverable scheduled in a roadmap quarter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapFeature {
    pub id: String,
    pub name: String,
    pub status: RoadmapStatus,
    /// Owning team, e.g. "Engineering".
    pub team: String,
    /// Percent complete, 0..=100. Missing progress counts as zero.
    #[serde(default)]
    pub progress: Option<u8>,
}

/// A quarter of the roadmap, e.g. "Q1 2025".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapQuarter {
    pub name: String,
    pub status: RoadmapStatus,
    pub features: Vec<RoadmapFeature>,
}

/// Counts across every feature of the roadmap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapSummary {
    pub completed: usize,
    pub in_progress: usize,
    pub planned: usize,
    pub total: usize,
    /// Share of completed features, rounded; 0 for an empty roadmap.
    pub completion_percentage: i64,
}

/// Progress of one quarter, for the collapsible quarter headers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuarterProgress {
    pub name: String,
    pub status: RoadmapStatus,
    pub feature_count: usize,
    /// Mean progress of the quarter's features.
    pub progress: f64,
}
