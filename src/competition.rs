//! Competitive comparison over static competitor profiles.

use crate::models::{Capability, CapabilityDimension, CompetitorProfile};

/// The profile flagged as our own product.
pub fn our_profile(competitors: &[CompetitorProfile]) -> Option<&CompetitorProfile> {
    competitors.iter().find(|c| c.is_us)
}

/// Dimensions we fully support while at least one rival does not.
pub fn advantages<'a>(
    competitors: &[CompetitorProfile],
    dimensions: &'a [CapabilityDimension],
) -> Vec<&'a CapabilityDimension> {
    let Some(ours) = our_profile(competitors) else {
        return Vec::new();
    };

    dimensions
        .iter()
        .filter(|d| ours.capability(&d.key) == Capability::Full)
        .filter(|d| {
            competitors
                .iter()
                .any(|c| !c.is_us && c.capability(&d.key) != Capability::Full)
        })
        .collect()
}

pub fn count_advantages(competitors: &[CompetitorProfile], dimensions: &[CapabilityDimension]) -> usize {
    advantages(competitors, dimensions).len()
}
