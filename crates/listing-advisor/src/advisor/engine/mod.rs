mod policy;
mod rationale;

pub use rationale::RationaleTag;

use super::taxonomy::{Condition, Involvement, ServiceTier, Timeline};
use serde::{Deserialize, Serialize};

/// The three selections a seller makes, one per dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SellerProfile {
    pub timeline: Timeline,
    pub involvement: Involvement,
    pub condition: Condition,
}

/// Output of a single recommendation: the routed tier, its hedge, and the
/// tags explaining which inputs drove the pick. Built fresh per call and
/// owned by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub primary: ServiceTier,
    pub alternative: ServiceTier,
    pub rationale: Vec<RationaleTag>,
}

/// Stateless evaluator applying the tier routing policy to a profile.
///
/// The policy is a priority-ordered decision tree, exhaustive over all 27
/// input combinations by construction (the nested match cannot have gaps),
/// so recommendation cannot fail.
#[derive(Debug, Default, Clone, Copy)]
pub struct RecommendationEngine;

impl RecommendationEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn recommend(&self, profile: SellerProfile) -> Recommendation {
        let pick = policy::route_tiers(profile.timeline, profile.condition, profile.involvement);
        debug_assert_ne!(pick.primary, pick.alternative);

        Recommendation {
            primary: pick.primary,
            alternative: pick.alternative,
            rationale: rationale::derive_tags(&profile),
        }
    }
}
