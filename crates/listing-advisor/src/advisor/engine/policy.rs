use super::super::taxonomy::ServiceTier::{Cash, Classic, Comprehensive, Core, Cosmetic};
use super::super::taxonomy::{Condition, Involvement, ServiceTier, Timeline};

pub(crate) struct TierPick {
    pub primary: ServiceTier,
    pub alternative: ServiceTier,
}

fn pick(primary: ServiceTier, alternative: ServiceTier) -> TierPick {
    TierPick {
        primary,
        alternative,
    }
}

/// Route a profile to a primary tier and its hedge.
///
/// Branch order is fixed: timeline first (speed pressure dominates), then
/// condition (how much prep the home structurally needs), then involvement
/// as the tie-break within a timeline/condition bucket. The alternative is
/// the next-best neighbor on the fee ladder, hedging the tie-break
/// dimension, and never equals the primary.
///
/// Invariants the table upholds, exercised by the integration tests:
/// - holding the other two inputs fixed, a faster timeline never raises the
///   primary fee;
/// - improving condition never pushes the primary above Classic, and a
///   showcase-ready home always lands at Core or Classic regardless of the
///   other inputs.
pub(crate) fn route_tiers(
    timeline: Timeline,
    condition: Condition,
    involvement: Involvement,
) -> TierPick {
    match timeline {
        Timeline::Fast => match condition {
            Condition::NeedsWork => match involvement {
                // Seller wants out quickly and will not manage repairs.
                Involvement::Minimal | Involvement::Moderate => pick(Cash, Core),
                Involvement::High => pick(Cosmetic, Cash),
            },
            Condition::Marketable => match involvement {
                Involvement::Minimal => pick(Core, Classic),
                Involvement::Moderate => pick(Classic, Core),
                Involvement::High => pick(Classic, Cosmetic),
            },
            Condition::Showcase => match involvement {
                Involvement::Minimal => pick(Core, Classic),
                Involvement::Moderate => pick(Classic, Core),
                Involvement::High => pick(Classic, Cosmetic),
            },
        },
        Timeline::Standard => match condition {
            Condition::NeedsWork => match involvement {
                Involvement::Minimal => pick(Cash, Core),
                Involvement::Moderate => pick(Core, Cash),
                Involvement::High => pick(Cosmetic, Core),
            },
            Condition::Marketable => match involvement {
                Involvement::Minimal => pick(Core, Classic),
                Involvement::Moderate => pick(Classic, Core),
                Involvement::High => pick(Cosmetic, Classic),
            },
            Condition::Showcase => match involvement {
                Involvement::Minimal => pick(Core, Classic),
                Involvement::Moderate => pick(Classic, Core),
                Involvement::High => pick(Classic, Cosmetic),
            },
        },
        Timeline::Flexible => match condition {
            Condition::NeedsWork => match involvement {
                Involvement::Minimal => pick(Core, Cash),
                Involvement::Moderate => pick(Cosmetic, Core),
                // Time and appetite for a full renovation program.
                Involvement::High => pick(Comprehensive, Cosmetic),
            },
            Condition::Marketable => match involvement {
                Involvement::Minimal => pick(Core, Classic),
                Involvement::Moderate => pick(Classic, Cosmetic),
                Involvement::High => pick(Comprehensive, Cosmetic),
            },
            Condition::Showcase => match involvement {
                Involvement::Minimal => pick(Core, Classic),
                Involvement::Moderate => pick(Classic, Core),
                Involvement::High => pick(Classic, Cosmetic),
            },
        },
    }
}
