use serde::{Deserialize, Serialize};

/// Raw inputs of the market-size calculator.
///
/// TAM is in whole currency-millions: a fractional `tam` such as `2400.5`
/// fails to deserialize (the API answers 422) rather than being truncated.
/// Neither percentage is clamped, and a negative TAM is accepted;
/// out-of-range values produce consistent but meaningless figures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketInputs {
    pub tam: i64,
    /// SAM as a percentage of TAM.
    pub sam_percentage: f64,
    /// SOM as a percentage of SAM.
    pub som_percentage: f64,
}

impl Default for MarketInputs {
    fn default() -> Self {
        Self {
            tam: 2400,
            sam_percentage: 50.0,
            som_percentage: 30.0,
        }
    }
}

/// Nested market sizes. SAM and SOM are always derived from a
/// [`MarketInputs`] and never stored on their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketFigures {
    pub tam: i64,
    pub sam: i64,
    pub som: i64,
}

/// How much of SOM is expected to be realized by year one and year three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureProjection {
    pub year1: i64,
    pub year3: i64,
}

/// One labelled bar of the TAM/SAM/SOM chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketSegment {
    pub name: String,
    pub value: i64,
    pub label: String,
}
