use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::rice::compute_score;

/// Opaque identifier of a prioritized feature.
///
/// Identifiers only need to be unique within the collection they live in;
/// their content carries no meaning.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureId(String);

impl FeatureId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FeatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FeatureId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for FeatureId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A candidate feature scored with the RICE framework.
///
/// The score is derived from reach, impact, confidence and effort when the
/// feature is built and can never be set on its own. Fields are read-only;
/// to change an input, remove the feature and add a new one.
///
/// Deserializing recomputes the score, so a payload carrying a stale or
/// forged `score` still yields a consistent feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "FeatureRecord")]
pub struct Feature {
    id: FeatureId,
    name: String,
    reach: u64,
    impact: f64,
    confidence: f64,
    effort: f64,
    score: i64,
}

impl Feature {
    /// Build a feature from a draft, computing its score.
    ///
    /// The name is taken as-is; rejecting blank names is the job of
    /// [`crate::rice::add_feature`].
    pub fn new(id: FeatureId, draft: FeatureDraft) -> Result<Self, CoreError> {
        let score = compute_score(draft.reach, draft.impact, draft.confidence, draft.effort)?;
        Ok(Self {
            id,
            name: draft.name,
            reach: draft.reach,
            impact: draft.impact,
            confidence: draft.confidence,
            effort: draft.effort,
            score,
        })
    }

    pub fn id(&self) -> &FeatureId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Users impacted per period.
    pub fn reach(&self) -> u64 {
        self.reach
    }

    pub fn impact(&self) -> f64 {
        self.impact
    }

    /// Confidence as a percentage.
    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    /// Effort in person-weeks.
    pub fn effort(&self) -> f64 {
        self.effort
    }

    pub fn score(&self) -> i64 {
        self.score
    }
}

/// Wire shape of a feature. Any `score` in the payload is ignored.
#[derive(Debug, Deserialize)]
struct FeatureRecord {
    id: FeatureId,
    name: String,
    reach: u64,
    impact: f64,
    confidence: f64,
    effort: f64,
}

impl TryFrom<FeatureRecord> for Feature {
    type Error = CoreError;

    fn try_from(record: FeatureRecord) -> Result<Self, Self::Error> {
        Feature::new(
            record.id,
            FeatureDraft {
                name: record.name,
                reach: record.reach,
                impact: record.impact,
                confidence: record.confidence,
                effort: record.effort,
            },
        )
    }
}

/// Input for adding a new feature. Missing fields fall back to the values
/// the entry form starts with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureDraft {
    pub name: String,
    pub reach: u64,
    /// Typically one of 0.25, 0.5, 1, 2 or 3.
    pub impact: f64,
    /// Percentage, expected in 0..=100.
    pub confidence: f64,
    /// Person-weeks; must be non-zero.
    pub effort: f64,
}

impl Default for FeatureDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            reach: 1000,
            impact: 1.0,
            confidence: 80.0,
            effort: 1.0,
        }
    }
}

impl FeatureDraft {
    pub fn new(name: impl Into<String>, reach: u64, impact: f64, confidence: f64, effort: f64) -> Self {
        Self {
            name: name.into(),
            reach,
            impact,
            confidence,
            effort,
        }
    }
}

/// A feature placed in ranked order, as the prioritization list shows it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedFeature {
    /// 1-based position in the ranking.
    pub rank: usize,
    #[serde(flatten)]
    pub feature: Feature,
    /// Width of the score bar, 0..=100.
    pub bar_percent: f64,
}

/// Summary line under the prioritization list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrioritizationInsights {
    pub features_analyzed: usize,
    /// Name of the highest-scoring feature, absent for an empty list.
    pub top_priority: Option<String>,
}
