//! Presentation views over a [`Recommendation`]. Pure formatting; no
//! decision logic lives here.

use super::engine::{Recommendation, RationaleTag};
use super::taxonomy::ServiceTier;
use serde::Serialize;
use std::fmt::Write;

#[derive(Debug, Clone, Serialize)]
pub struct TierView {
    pub tier: ServiceTier,
    pub label: &'static str,
    pub fee_percent: u8,
    pub blurb: &'static str,
}

impl From<ServiceTier> for TierView {
    fn from(tier: ServiceTier) -> Self {
        Self {
            tier,
            label: tier.label(),
            fee_percent: tier.fee_percent(),
            blurb: tier.blurb(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RationaleEntry {
    pub tag: RationaleTag,
    pub label: &'static str,
}

/// Flat, serializable rendering of a recommendation for the API and CLI.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationView {
    pub primary: TierView,
    pub alternative: TierView,
    pub rationale: Vec<RationaleEntry>,
}

impl From<&Recommendation> for RecommendationView {
    fn from(recommendation: &Recommendation) -> Self {
        Self {
            primary: recommendation.primary.into(),
            alternative: recommendation.alternative.into(),
            rationale: recommendation
                .rationale
                .iter()
                .map(|tag| RationaleEntry {
                    tag: *tag,
                    label: tag.label(),
                })
                .collect(),
        }
    }
}

impl RecommendationView {
    /// Multi-line plain-text summary for terminal output.
    pub fn text_summary(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "Primary:     {} ({}%) - {}",
            self.primary.label, self.primary.fee_percent, self.primary.blurb
        );
        let _ = writeln!(
            out,
            "Alternative: {} ({}%) - {}",
            self.alternative.label, self.alternative.fee_percent, self.alternative.blurb
        );
        if self.rationale.is_empty() {
            let _ = writeln!(out, "Rationale:   balanced inputs, no single driver");
        } else {
            let labels: Vec<&str> = self.rationale.iter().map(|entry| entry.label).collect();
            let _ = writeln!(out, "Rationale:   {}", labels.join("; "));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor::engine::{RecommendationEngine, SellerProfile};
    use crate::advisor::taxonomy::{Condition, Involvement, Timeline};

    fn sample_view() -> RecommendationView {
        let recommendation = RecommendationEngine::new().recommend(SellerProfile {
            timeline: Timeline::Fast,
            involvement: Involvement::Minimal,
            condition: Condition::NeedsWork,
        });
        RecommendationView::from(&recommendation)
    }

    #[test]
    fn text_summary_names_both_tiers() {
        let summary = sample_view().text_summary();
        assert!(summary.contains("Primary:     Cash (1%)"));
        assert!(summary.contains("Alternative: Core (2%)"));
        assert!(summary.contains("Speed prioritized"));
    }

    #[test]
    fn view_serializes_with_labels_and_fees() {
        let value = serde_json::to_value(sample_view()).expect("view serializes");
        assert_eq!(value["primary"]["tier"], "cash");
        assert_eq!(value["primary"]["fee_percent"], 1);
        assert_eq!(value["rationale"][0]["tag"], "speed_prioritized");
    }
}
