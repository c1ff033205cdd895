use serde::{Deserialize, Serialize};

/// Pricing tier of a Defender for Cloud plan, collapsed to the one
/// distinction the report makes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PricingTier {
    Standard,
    Other,
}

impl PricingTier {
    /// Exact, case-sensitive match on the tier string the pricing API
    /// returns. "Free" and any tier value added later classify as Other.
    pub fn from_raw(raw: &str) -> Self {
        if raw == "Standard" {
            Self::Standard
        } else {
            Self::Other
        }
    }

    pub fn is_standard(&self) -> bool {
        matches!(self, Self::Standard)
    }
}

/// One Defender plan with its resolved pricing tier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceTierRecord {
    pub name: String,
    pub tier: PricingTier,
}

impl ServiceTierRecord {
    pub fn new(name: impl Into<String>, tier: PricingTier) -> Self {
        Self {
            name: name.into(),
            tier,
        }
    }
}

/// Service names split by protection status, each side sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtectionSummary {
    pub protected: Vec<String>,
    pub unprotected: Vec<String>,
}

impl ProtectionSummary {
    /// Total number of plans that were classified.
    pub fn service_count(&self) -> usize {
        self.protected.len() + self.unprotected.len()
    }
}
