//! TAM/SAM/SOM market sizing and capture projections.

use crate::models::{CaptureProjection, MarketFigures, MarketInputs, MarketSegment};

/// Share of SOM assumed to be captured in the first year.
pub const YEAR_ONE_CAPTURE_RATIO: f64 = 0.3;

/// Derive SAM from TAM and SOM from the rounded SAM.
///
/// `sam = round(tam * sam% / 100)`, `som = round(sam * som% / 100)`, halves
/// away from zero. Percentages are not clamped.
pub fn derive_market_sizes(tam: i64, sam_percentage: f64, som_percentage: f64) -> MarketFigures {
    let sam = percent_of(tam, sam_percentage);
    let som = percent_of(sam, som_percentage);
    MarketFigures { tam, sam, som }
}

/// Year one captures a fixed 30% of SOM; year three realizes all of it.
pub fn project_capture(som: i64) -> CaptureProjection {
    CaptureProjection {
        year1: (som as f64 * YEAR_ONE_CAPTURE_RATIO).round() as i64,
        year3: som,
    }
}

fn percent_of(value: i64, percentage: f64) -> i64 {
    (value as f64 * percentage / 100.0).round() as i64
}

impl MarketInputs {
    pub fn figures(&self) -> MarketFigures {
        derive_market_sizes(self.tam, self.sam_percentage, self.som_percentage)
    }

    pub fn projection(&self) -> CaptureProjection {
        project_capture(self.figures().som)
    }

    /// The TAM, SAM and SOM bars in display order.
    pub fn breakdown(&self) -> Vec<MarketSegment> {
        let figures = self.figures();
        [
            ("TAM", figures.tam, "Total Addressable"),
            ("SAM", figures.sam, "Serviceable Addressable"),
            ("SOM", figures.som, "Serviceable Obtainable"),
        ]
        .into_iter()
        .map(|(name, value, label)| MarketSegment {
            name: name.to_string(),
            value,
            label: label.to_string(),
        })
        .collect()
    }
}
