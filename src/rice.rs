//! RICE prioritization: scoring, ranking, and add/remove over caller-owned
//! feature lists.
//!
//! Every function here is pure. Collections are borrowed and a new `Vec` is
//! returned, so the caller can re-render from the same state as often as it
//! likes.

use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};

use chrono::Utc;
use uuid::Uuid;

use crate::error::{CoreError, Result};
use crate::models::{Feature, FeatureDraft, FeatureId, PrioritizationInsights, RankedFeature};

/// Score at which the dashboard's score bar is full.
pub const SCORE_BAR_CEILING: f64 = 3000.0;

/// How many ids to draw from a provider before giving up on finding a free one.
const MAX_ID_ATTEMPTS: usize = 32;

// ============================================================
// Scoring
// ============================================================

/// Compute `round(reach * impact * confidence/100 / effort)`.
///
/// Rounds half away from zero. A zero effort, a non-finite result, or a
/// result too large for an `i64` is rejected; range checks on the inputs
/// themselves belong to the caller.
pub fn compute_score(reach: u64, impact: f64, confidence: f64, effort: f64) -> Result<i64> {
    if effort == 0.0 {
        return Err(CoreError::InvalidInput(
            "effort must be non-zero".to_string(),
        ));
    }

    let raw = reach as f64 * impact * (confidence / 100.0) / effort;
    if !raw.is_finite() {
        return Err(CoreError::InvalidInput(format!(
            "score is not a finite number (reach={reach}, impact={impact}, confidence={confidence}, effort={effort})"
        )));
    }

    // 2^63: the first magnitude an i64 cannot hold
    const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;
    let rounded = raw.round();
    if !(-I64_LIMIT..I64_LIMIT).contains(&rounded) {
        return Err(CoreError::InvalidInput(format!(
            "score {raw:e} is outside the representable range"
        )));
    }

    let score = rounded as i64;
    tracing::trace!(reach, impact, confidence, effort, score, "Computed RICE score");
    Ok(score)
}

/// Width of a feature's score bar in percent, capped at 100.
pub fn score_bar_percent(score: i64) -> f64 {
    (score as f64 / SCORE_BAR_CEILING * 100.0).clamp(0.0, 100.0)
}

// ============================================================
// Ranking
// ============================================================

/// Sort by score, highest first. Equal scores keep their input order.
pub fn rank_features(features: &[Feature]) -> Vec<Feature> {
    let mut ranked = features.to_vec();
    // `sort_by` is stable
    ranked.sort_by(|a, b| b.score().cmp(&a.score()));
    ranked
}

/// Rank features and attach their 1-based position and score bar width.
pub fn rank_with_positions(features: &[Feature]) -> Vec<RankedFeature> {
    rank_features(features)
        .into_iter()
        .enumerate()
        .map(|(i, feature)| RankedFeature {
            rank: i + 1,
            bar_percent: score_bar_percent(feature.score()),
            feature,
        })
        .collect()
}

pub fn prioritization_insights(features: &[Feature]) -> PrioritizationInsights {
    PrioritizationInsights {
        features_analyzed: features.len(),
        top_priority: rank_features(features)
            .first()
            .map(|f| f.name().to_string()),
    }
}

// ============================================================
// Add / Remove
// ============================================================

/// Score a draft and append it to a copy of `existing`.
///
/// Returns the new feature and the updated list. A blank name is a
/// [`CoreError::Validation`] and nothing is added.
pub fn add_feature(
    existing: &[Feature],
    draft: FeatureDraft,
    ids: &dyn IdProvider,
) -> Result<(Feature, Vec<Feature>)> {
    if draft.name.trim().is_empty() {
        tracing::warn!("Rejected feature draft with an empty name");
        return Err(CoreError::Validation(
            "feature name must not be empty".to_string(),
        ));
    }

    let id = allocate_id(existing, ids)?;
    let feature = Feature::new(id, draft)?;
    tracing::debug!(id = %feature.id(), score = feature.score(), "Added feature");

    let mut updated = Vec::with_capacity(existing.len() + 1);
    updated.extend_from_slice(existing);
    updated.push(feature.clone());
    Ok((feature, updated))
}

/// Drop the first feature with `id`. Unknown ids leave the list as it was.
pub fn remove_feature(existing: &[Feature], id: &FeatureId) -> Vec<Feature> {
    let mut updated = existing.to_vec();
    if let Some(pos) = updated.iter().position(|f| f.id() == id) {
        updated.remove(pos);
    }
    updated
}

fn allocate_id(existing: &[Feature], ids: &dyn IdProvider) -> Result<FeatureId> {
    for _ in 0..MAX_ID_ATTEMPTS {
        let id = ids.next_id();
        if !existing.iter().any(|f| f.id() == &id) {
            return Ok(id);
        }
        tracing::debug!(%id, "Id provider returned a taken id, retrying");
    }
    Err(CoreError::IdCollision {
        attempts: MAX_ID_ATTEMPTS,
    })
}

// ============================================================
// Id Providers
// ============================================================

/// Source of fresh feature identifiers.
///
/// Implementations only need to be unique within their own lifetime;
/// [`add_feature`] skips ids that already exist in the target list.
pub trait IdProvider: Send + Sync {
    fn next_id(&self) -> FeatureId;
}

/// Monotonic counter: `1`, `2`, `3`, ...
#[derive(Debug)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl SequentialIds {
    pub fn new(start: u64) -> Self {
        Self {
            next: AtomicU64::new(start),
        }
    }

    /// Start after the largest numeric id in `features`.
    pub fn after(features: &[Feature]) -> Self {
        let max = features
            .iter()
            .filter_map(|f| f.id().as_str().parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        Self::new(max.saturating_add(1))
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new(1)
    }
}

impl IdProvider for SequentialIds {
    fn next_id(&self) -> FeatureId {
        FeatureId::new(self.next.fetch_add(1, Ordering::Relaxed).to_string())
    }
}

/// Random v4 UUIDs.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIds;

impl IdProvider for UuidIds {
    fn next_id(&self) -> FeatureId {
        FeatureId::new(Uuid::new_v4().to_string())
    }
}

/// Milliseconds since the epoch, bumped by one when two ids land in the
/// same millisecond so consecutive ids never repeat.
#[derive(Debug, Default)]
pub struct TimestampIds {
    last: AtomicI64,
}

impl TimestampIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdProvider for TimestampIds {
    fn next_id(&self) -> FeatureId {
        let now = Utc::now().timestamp_millis();
        let prev = self
            .last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now.max(last + 1))
            })
            .unwrap_or_else(|last| last);
        FeatureId::new(now.max(prev + 1).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feature(id: &str, name: &str, reach: u64, impact: f64, confidence: f64, effort: f64) -> Feature {
        Feature::new(
            FeatureId::from(id),
            FeatureDraft::new(name, reach, impact, confidence, effort),
        )
        .unwrap()
    }

    /// Always hands out the same id.
    struct StuckIds;

    impl IdProvider for StuckIds {
        fn next_id(&self) -> FeatureId {
            FeatureId::from("1")
        }
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(compute_score(5, 1.0, 50.0, 1.0).unwrap(), 3);
        assert_eq!(compute_score(5, -1.0, 50.0, 1.0).unwrap(), -3);
    }

    #[test]
    fn fractional_effort_scales_up() {
        assert_eq!(compute_score(100, 1.0, 100.0, 0.5).unwrap(), 200);
    }

    #[test]
    fn zero_effort_is_invalid_input() {
        let err = compute_score(1000, 2.0, 80.0, 0.0).unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput(_)));
    }

    #[test]
    fn nan_input_is_invalid_input() {
        let err = compute_score(1000, f64::NAN, 80.0, 1.0).unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput(_)));
    }

    #[test]
    fn score_beyond_i64_is_invalid_input() {
        let err = compute_score(u64::MAX, 3.0, 100.0, 1e-280).unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput(_)));

        let err = compute_score(u64::MAX, -3.0, 100.0, 1e-280).unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput(_)));
    }

    #[test]
    fn large_score_within_i64_is_kept() {
        assert_eq!(compute_score(u64::MAX, 0.25, 100.0, 1.0).unwrap(), (u64::MAX as f64 * 0.25) as i64);
    }

    #[test]
    fn score_bar_is_capped() {
        assert_eq!(score_bar_percent(1500), 50.0);
        assert_eq!(score_bar_percent(4500), 100.0);
        assert_eq!(score_bar_percent(-10), 0.0);
    }

    #[test]
    fn rank_positions_start_at_one() {
        let features = vec![
            feature("a", "Low", 100, 1.0, 100.0, 1.0),
            feature("b", "High", 900, 1.0, 100.0, 1.0),
        ];
        let ranked = rank_with_positions(&features);
        assert_eq!(ranked[0].rank, 1);
        assert_eq!(ranked[0].feature.name(), "High");
        assert_eq!(ranked[1].rank, 2);
        assert_eq!(ranked[0].bar_percent, 30.0);
    }

    #[test]
    fn insights_name_the_top_feature() {
        let features = vec![
            feature("a", "Low", 100, 1.0, 100.0, 1.0),
            feature("b", "High", 900, 1.0, 100.0, 1.0),
        ];
        let insights = prioritization_insights(&features);
        assert_eq!(insights.features_analyzed, 2);
        assert_eq!(insights.top_priority.as_deref(), Some("High"));

        assert_eq!(prioritization_insights(&[]).top_priority, None);
    }

    #[test]
    fn add_feature_skips_taken_ids() {
        let existing = vec![feature("1", "Seed", 10, 1.0, 100.0, 1.0)];
        let ids = SequentialIds::default();

        let (added, updated) = add_feature(&existing, FeatureDraft::new("New", 10, 1.0, 100.0, 1.0), &ids).unwrap();

        assert_eq!(added.id().as_str(), "2");
        assert_eq!(updated.len(), 2);
    }

    #[test]
    fn add_feature_gives_up_on_a_stuck_provider() {
        let existing = vec![feature("1", "Seed", 10, 1.0, 100.0, 1.0)];
        let err = add_feature(&existing, FeatureDraft::new("New", 10, 1.0, 100.0, 1.0), &StuckIds).unwrap_err();
        assert_eq!(err, CoreError::IdCollision { attempts: MAX_ID_ATTEMPTS });
    }

    #[test]
    fn add_feature_rejects_zero_effort() {
        let err = add_feature(&[], FeatureDraft::new("New", 10, 1.0, 100.0, 0.0), &SequentialIds::default()).unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput(_)));
    }

    #[test]
    fn sequential_ids_start_after_numeric_ids() {
        let existing = vec![
            feature("3", "A", 1, 1.0, 100.0, 1.0),
            feature("x", "B", 1, 1.0, 100.0, 1.0),
            feature("7", "C", 1, 1.0, 100.0, 1.0),
        ];
        let ids = SequentialIds::after(&existing);
        assert_eq!(ids.next_id().as_str(), "8");
        assert_eq!(ids.next_id().as_str(), "9");
    }

    #[test]
    fn timestamp_ids_never_repeat() {
        let ids = TimestampIds::new();
        let first: i64 = ids.next_id().as_str().parse().unwrap();
        let second: i64 = ids.next_id().as_str().parse().unwrap();
        let third: i64 = ids.next_id().as_str().parse().unwrap();
        assert!(second > first);
        assert!(third > second);
    }

    #[test]
    fn uuid_ids_are_distinct() {
        let ids = UuidIds;
        assert_ne!(ids.next_id(), ids.next_id());
    }

    #[test]
    fn remove_feature_drops_only_the_first_match() {
        let features = vec![
            feature("dup", "First", 1, 1.0, 100.0, 1.0),
            feature("dup", "Second", 1, 1.0, 100.0, 1.0),
        ];
        let updated = remove_feature(&features, &FeatureId::from("dup"));
        assert_eq!(updated.len(), 1);
        assert_eq!(updated[0].name(), "Second");
    }
}
