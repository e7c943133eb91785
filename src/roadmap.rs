//! Roadmap counts and the expand/collapse state of quarter sections.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::models::{QuarterProgress, RoadmapQuarter, RoadmapStatus, RoadmapSummary};

/// Count features by status across every quarter.
pub fn summarize(quarters: &[RoadmapQuarter]) -> RoadmapSummary {
    let count = |status: RoadmapStatus| {
        quarters
            .iter()
            .flat_map(|q| &q.features)
            .filter(|f| f.status == status)
            .count()
    };

    let completed = count(RoadmapStatus::Completed);
    let in_progress = count(RoadmapStatus::InProgress);
    let planned = count(RoadmapStatus::Planned);
    let total = completed + in_progress + planned;

    let completion_percentage = if total == 0 {
        0
    } else {
        (completed as f64 / total as f64 * 100.0).round() as i64
    };

    RoadmapSummary {
        completed,
        in_progress,
        planned,
        total,
        completion_percentage,
    }
}

/// Mean progress of a quarter's features. Empty quarters report 0.
pub fn quarter_progress(quarter: &RoadmapQuarter) -> f64 {
    if quarter.features.is_empty() {
        return 0.0;
    }
    let sum: f64 = quarter
        .features
        .iter()
        .map(|f| f64::from(f.progress.unwrap_or(0)))
        .sum();
    sum / quarter.features.len() as f64
}

pub fn quarter_progresses(quarters: &[RoadmapQuarter]) -> Vec<QuarterProgress> {
    quarters
        .iter()
        .map(|q| QuarterProgress {
            name: q.name.clone(),
            status: q.status,
            feature_count: q.features.len(),
            progress: quarter_progress(q),
        })
        .collect()
}

/// Names of the quarter sections currently expanded.
///
/// Owned by the caller; [`ExpandedQuarters::toggle`] returns a new set and
/// leaves the original untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpandedQuarters(BTreeSet<String>);

impl ExpandedQuarters {
    /// Expand the first `count` quarters.
    pub fn initial(quarters: &[RoadmapQuarter], count: usize) -> Self {
        Self(quarters.iter().take(count).map(|q| q.name.clone()).collect())
    }

    pub fn toggle(&self, quarter: &str) -> Self {
        let mut expanded = self.0.clone();
        if !expanded.remove(quarter) {
            expanded.insert(quarter.to_string());
        }
        Self(expanded)
    }

    pub fn is_expanded(&self, quarter: &str) -> bool {
        self.0.contains(quarter)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
