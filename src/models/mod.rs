//! Domain models for Product Compass.
//!
//! # Core Concepts
//!
//! ## Scored Entities
//!
//! - [`Feature`]: A candidate feature with a RICE score derived from its inputs.
//!   The score is never settable on its own.
//! - [`MarketInputs`] / [`MarketFigures`]: TAM plus the two ratios, and the
//!   nested SAM/SOM figures derived from them.
//!
//! ## Seed Data
//!
//! Owned by the caller and only displayed or counted by the core:
//!
//! - [`RoadmapQuarter`]: Quarterly plan of [`RoadmapFeature`]s.
//! - [`CompetitorProfile`]: A column of the competitive comparison.

mod competitor;
mod feature;
mod market;
mod roadmap;

pub use competitor::*;
pub use feature::*;
pub use market::*;
pub use roadmap::*;
