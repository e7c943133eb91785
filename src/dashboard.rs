//! Caller-owned dashboard state and the figures derived from it.
//!
//! [`Dashboard`] holds everything the presentation layer edits or displays.
//! Nothing is cached: [`Dashboard::snapshot`] re-derives every figure from
//! the current state each time it is called.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::competition;
use crate::market;
use crate::models::*;
use crate::rice;
use crate::roadmap::{self, ExpandedQuarters};

/// Number of roadmap quarters shown expanded on first render.
pub const INITIALLY_EXPANDED_QUARTERS: usize = 2;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dashboard {
    pub features: Vec<Feature>,
    pub market: MarketInputs,
    pub roadmap: Vec<RoadmapQuarter>,
    pub competitors: Vec<CompetitorProfile>,
    pub dimensions: Vec<CapabilityDimension>,
}

/// The four headline cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverviewMetrics {
    /// TAM in currency-millions.
    pub tam: i64,
    /// SOM as a percentage of SAM.
    pub projected_adoption: f64,
    pub features_prioritized: usize,
    pub differentiators: usize,
}

/// Every figure the dashboard renders, derived from one [`Dashboard`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub overview: OverviewMetrics,
    pub features: Vec<RankedFeature>,
    pub insights: PrioritizationInsights,
    pub market: MarketFigures,
    pub market_segments: Vec<MarketSegment>,
    pub capture: CaptureProjection,
    pub roadmap: RoadmapSummary,
    pub quarters: Vec<QuarterProgress>,
    pub advantages: Vec<CapabilityDimension>,
    pub competitors: Vec<CompetitorProfile>,
}

impl Dashboard {
    /// Read a dashboard seed from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read seed file {}", path.display()))?;
        let dashboard: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse seed file {}", path.display()))?;
        tracing::debug!(
            path = %path.display(),
            features = dashboard.features.len(),
            quarters = dashboard.roadmap.len(),
            "Loaded dashboard seed"
        );
        Ok(dashboard)
    }

    /// The built-in demo data.
    pub fn seed() -> Self {
        Self {
            features: seed_features(),
            market: MarketInputs::default(),
            roadmap: seed_roadmap(),
            competitors: seed_competitors(),
            dimensions: seed_dimensions(),
        }
    }

    pub fn expanded_quarters(&self) -> ExpandedQuarters {
        ExpandedQuarters::initial(&self.roadmap, INITIALLY_EXPANDED_QUARTERS)
    }

    pub fn snapshot(&self) -> DashboardSnapshot {
        let figures = self.market.figures();
        let advantages: Vec<CapabilityDimension> =
            competition::advantages(&self.competitors, &self.dimensions)
                .into_iter()
                .cloned()
                .collect();

        DashboardSnapshot {
            overview: OverviewMetrics {
                tam: figures.tam,
                projected_adoption: self.market.som_percentage,
                features_prioritized: self.features.len(),
                differentiators: advantages.len(),
            },
            features: rice::rank_with_positions(&self.features),
            insights: rice::prioritization_insights(&self.features),
            market: figures,
            market_segments: self.market.breakdown(),
            capture: market::project_capture(figures.som),
            roadmap: roadmap::summarize(&self.roadmap),
            quarters: roadmap::quarter_progresses(&self.roadmap),
            advantages,
            competitors: self.competitors.clone(),
        }
    }
}

// ============================================================
// Seed Data
// ============================================================

fn seed_features() -> Vec<Feature> {
    [
        ("1", "Real-time Diagnostics", 5000, 3.0, 90.0, 5.0),
        ("2", "Predictive Analytics", 4000, 3.0, 80.0, 8.0),
        ("3", "Patient Dashboard", 3500, 2.0, 95.0, 3.0),
        ("4", "AI Report Generation", 4500, 3.0, 85.0, 6.0),
        ("5", "Integration API", 2000, 2.0, 100.0, 4.0),
    ]
    .into_iter()
    .filter_map(|(id, name, reach, impact, confidence, effort)| {
        Feature::new(
            FeatureId::from(id),
            FeatureDraft::new(name, reach, impact, confidence, effort),
        )
        .ok()
    })
    .collect()
}

fn seed_roadmap() -> Vec<RoadmapQuarter> {
    use RoadmapStatus::*;

    let feature = |id: &str, name: &str, status, team: &str, progress| RoadmapFeature {
        id: id.to_string(),
        name: name.to_string(),
        status,
        team: team.to_string(),
        progress: Some(progress),
    };

    vec![
        RoadmapQuarter {
            name: "Q1 2025".to_string(),
            status: InProgress,
            features: vec![
                feature("1", "Real-time Diagnostics", Completed, "Engineering", 100),
                feature("2", "Patient Dashboard", InProgress, "Product", 65),
                feature("3", "Integration API", Planned, "Engineering", 0),
            ],
        },
        RoadmapQuarter {
            name: "Q2 2025".to_string(),
            status: Planned,
            features: vec![
                feature("4", "Predictive Analytics", Planned, "Data Science", 0),
                feature("5", "AI Report Generation", Planned, "AI/ML", 0),
                feature("6", "Mobile App Beta", Planned, "Mobile", 0),
            ],
        },
        RoadmapQuarter {
            name: "Q3 2025".to_string(),
            status: Planned,
            features: vec![
                feature("7", "Advanced Analytics Dashboard", Planned, "Product", 0),
                feature("8", "Multi-language Support", Planned, "Engineering", 0),
            ],
        },
        RoadmapQuarter {
            name: "Q4 2025".to_string(),
            status: Planned,
            features: vec![
                feature("9", "Enterprise SSO", Planned, "Security", 0),
                feature("10", "Custom Reporting", Planned, "Analytics", 0),
            ],
        },
    ]
}

fn seed_dimensions() -> Vec<CapabilityDimension> {
    vec![
        CapabilityDimension::new("realTime", "Real-time Diagnostics"),
        CapabilityDimension::new("aiPowered", "AI-Powered Analysis"),
        CapabilityDimension::new("integration", "EHR Integration"),
        CapabilityDimension::new("mobile", "Mobile Support"),
    ]
}

fn seed_competitors() -> Vec<CompetitorProfile> {
    use Capability as C;

    let profile = |name: &str, caps: [Capability; 4], pricing: &str, share: f64, is_us: bool| {
        CompetitorProfile {
            name: name.to_string(),
            capabilities: ["realTime", "aiPowered", "integration", "mobile"]
                .into_iter()
                .map(String::from)
                .zip(caps)
                .collect(),
            pricing: pricing.to_string(),
            market_share: Some(share),
            is_us,
        }
    };

    vec![
        profile("Our Product", [C::Full, C::Full, C::Full, C::Full], "$$", 15.0, true),
        profile("Competitor A", [C::Full, C::None, C::Full, C::None], "$$$", 35.0, false),
        profile("Competitor B", [C::None, C::Full, C::Partial, C::Full], "$$", 25.0, false),
        profile("Competitor C", [C::Full, C::Full, C::Full, C::Partial], "$$$$", 20.0, false),
    ]
}
