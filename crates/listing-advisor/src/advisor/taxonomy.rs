//! Closed enumerations for the three seller-facing dimensions and the five
//! service tiers. Decision code only ever sees these variants; display copy
//! lives in `label()`/`blurb()` so cosmetic wording can change without
//! touching the policy.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How quickly the seller needs the sale closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Timeline {
    Fast,
    Standard,
    Flexible,
}

impl Timeline {
    pub const ALL: [Timeline; 3] = [Timeline::Fast, Timeline::Standard, Timeline::Flexible];

    pub fn label(self) -> &'static str {
        match self {
            Timeline::Fast => "Fast",
            Timeline::Standard => "Standard",
            Timeline::Flexible => "Flexible",
        }
    }
}

/// How much hands-on effort the seller will tolerate during the sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Involvement {
    Minimal,
    Moderate,
    High,
}

impl Involvement {
    pub const ALL: [Involvement; 3] = [
        Involvement::Minimal,
        Involvement::Moderate,
        Involvement::High,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Involvement::Minimal => "Minimal",
            Involvement::Moderate => "Moderate",
            Involvement::High => "High",
        }
    }
}

/// Current physical condition of the home, poor to excellent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    NeedsWork,
    Marketable,
    Showcase,
}

impl Condition {
    pub const ALL: [Condition; 3] = [
        Condition::NeedsWork,
        Condition::Marketable,
        Condition::Showcase,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Condition::NeedsWork => "Needs Work",
            Condition::Marketable => "Marketable",
            Condition::Showcase => "Showcase",
        }
    }
}

/// One of the five fixed service/fee bundles a seller can be routed to.
///
/// Tiers are totally ordered by `fee_percent`; that ordering is used for
/// display and for hedging checks in tests, never for tier selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceTier {
    Cash,
    Core,
    Classic,
    Cosmetic,
    Comprehensive,
}

impl ServiceTier {
    pub const ALL: [ServiceTier; 5] = [
        ServiceTier::Cash,
        ServiceTier::Core,
        ServiceTier::Classic,
        ServiceTier::Cosmetic,
        ServiceTier::Comprehensive,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ServiceTier::Cash => "Cash",
            ServiceTier::Core => "Core",
            ServiceTier::Classic => "Classic",
            ServiceTier::Cosmetic => "Cosmetic",
            ServiceTier::Comprehensive => "Comprehensive",
        }
    }

    pub fn fee_percent(self) -> u8 {
        match self {
            ServiceTier::Cash => 1,
            ServiceTier::Core => 2,
            ServiceTier::Classic => 3,
            ServiceTier::Cosmetic => 4,
            ServiceTier::Comprehensive => 5,
        }
    }

    pub fn blurb(self) -> &'static str {
        match self {
            ServiceTier::Cash => "Fast, off-MLS investor network. Lower prep, lower typical net.",
            ServiceTier::Core => "MLS syndication plus the essentials. Solid exposure, minimal hassle.",
            ServiceTier::Classic => "Showcase prep, upgraded media, and tracked advertising.",
            ServiceTier::Cosmetic => "Advisor-coordinated polish, light updates, and staging.",
            ServiceTier::Comprehensive => "Strategic, ROI-driven renovations with full support.",
        }
    }
}

/// A supplied value is not a member of its closed enumeration.
///
/// Only the text boundaries (CLI arguments, HTTP payloads) can produce this;
/// internal callers hold enum values and cannot represent an out-of-set one.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{value}' is not in the {dimension} taxonomy")]
pub struct TaxonomyError {
    pub dimension: &'static str,
    pub value: String,
}

impl TaxonomyError {
    fn unknown(dimension: &'static str, value: &str) -> Self {
        Self {
            dimension,
            value: value.to_string(),
        }
    }
}

impl FromStr for Timeline {
    type Err = TaxonomyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "fast" => Ok(Timeline::Fast),
            "standard" => Ok(Timeline::Standard),
            "flexible" => Ok(Timeline::Flexible),
            other => Err(TaxonomyError::unknown("timeline", other)),
        }
    }
}

impl FromStr for Involvement {
    type Err = TaxonomyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "minimal" => Ok(Involvement::Minimal),
            "moderate" => Ok(Involvement::Moderate),
            "high" => Ok(Involvement::High),
            other => Err(TaxonomyError::unknown("involvement", other)),
        }
    }
}

impl FromStr for Condition {
    type Err = TaxonomyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "needs_work" => Ok(Condition::NeedsWork),
            "marketable" => Ok(Condition::Marketable),
            "showcase" => Ok(Condition::Showcase),
            other => Err(TaxonomyError::unknown("condition", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_are_ordered_by_fee() {
        let fees: Vec<u8> = ServiceTier::ALL.iter().map(|t| t.fee_percent()).collect();
        assert_eq!(fees, vec![1, 2, 3, 4, 5]);
        assert!(ServiceTier::Cash < ServiceTier::Comprehensive);
    }

    #[test]
    fn dimension_values_parse_from_stable_identifiers() {
        assert_eq!("fast".parse::<Timeline>(), Ok(Timeline::Fast));
        assert_eq!("high".parse::<Involvement>(), Ok(Involvement::High));
        assert_eq!("needs_work".parse::<Condition>(), Ok(Condition::NeedsWork));
    }

    #[test]
    fn display_labels_are_not_valid_identifiers() {
        // Labels stay in the presentation layer; parsing them must fail.
        let err = "Needs Work".parse::<Condition>().expect_err("label rejected");
        assert_eq!(err.dimension, "condition");
        assert_eq!(err.value, "Needs Work");
    }

    #[test]
    fn serde_identifiers_round_trip() {
        let json = serde_json::to_string(&Condition::NeedsWork).expect("serializes");
        assert_eq!(json, "\"needs_work\"");
        let back: Condition = serde_json::from_str(&json).expect("deserializes");
        assert_eq!(back, Condition::NeedsWork);
    }
}
