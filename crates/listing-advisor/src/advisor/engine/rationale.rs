use super::SellerProfile;
use crate::advisor::taxonomy::{Condition, Involvement, Timeline};
use serde::{Deserialize, Serialize};

/// Short label explaining which input drove a recommendation.
///
/// Tags are derived from extreme input values alone, independent of which
/// branch of the routing tree fired, so the explanation stays truthful even
/// if the tier table is retuned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RationaleTag {
    SpeedPrioritized,
    TimingFlexible,
    LowInvolvement,
    HighInvolvementOk,
    NeedsWork,
    ShowReady,
}

impl RationaleTag {
    pub fn label(self) -> &'static str {
        match self {
            RationaleTag::SpeedPrioritized => "Speed prioritized",
            RationaleTag::TimingFlexible => "Timing flexible",
            RationaleTag::LowInvolvement => "Low seller involvement",
            RationaleTag::HighInvolvementOk => "High seller involvement OK",
            RationaleTag::NeedsWork => "Home needs work",
            RationaleTag::ShowReady => "Home is show-ready",
        }
    }
}

/// Emit tags in dimension order: timeline, involvement, condition. Middle
/// values contribute nothing.
pub(crate) fn derive_tags(profile: &SellerProfile) -> Vec<RationaleTag> {
    let mut tags = Vec::new();

    match profile.timeline {
        Timeline::Fast => tags.push(RationaleTag::SpeedPrioritized),
        Timeline::Flexible => tags.push(RationaleTag::TimingFlexible),
        Timeline::Standard => {}
    }

    match profile.involvement {
        Involvement::Minimal => tags.push(RationaleTag::LowInvolvement),
        Involvement::High => tags.push(RationaleTag::HighInvolvementOk),
        Involvement::Moderate => {}
    }

    match profile.condition {
        Condition::NeedsWork => tags.push(RationaleTag::NeedsWork),
        Condition::Showcase => tags.push(RationaleTag::ShowReady),
        Condition::Marketable => {}
    }

    tags
}
