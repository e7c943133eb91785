use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// How completely a product covers a compared capability.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    Full,
    Partial,
    #[default]
    None,
}

impl Capability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Partial => "partial",
            Self::None => "none",
        }
    }
}

/// A capability the comparison table has a row for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilityDimension {
    /// Key into [`CompetitorProfile::capabilities`].
    pub key: String,
    pub label: String,
}

impl CapabilityDimension {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// One column of the competitive comparison. Static seed data only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitorProfile {
    pub name: String,
    /// Coverage per dimension key. Missing keys mean no support.
    #[serde(default)]
    pub capabilities: BTreeMap<String, Capability>,
    /// Pricing tier, e.g. "$$$".
    pub pricing: String,
    /// Market share in percent.
    #[serde(default)]
    pub market_share: Option<f64>,
    /// Marks our own product.
    #[serde(default)]
    pub is_us: bool,
}

impl CompetitorProfile {
    pub fn capability(&self, key: &str) -> Capability {
        self.capabilities.get(key).copied().unwrap_or_default()
    }
}
