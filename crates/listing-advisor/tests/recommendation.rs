//! Property suite for the tier routing policy, exercised over the full
//! Cartesian product of inputs so coverage gaps cannot ship silently.

use listing_advisor::advisor::engine::{RationaleTag, RecommendationEngine, SellerProfile};
use listing_advisor::advisor::taxonomy::{Condition, Involvement, ServiceTier, Timeline};

fn engine() -> RecommendationEngine {
    RecommendationEngine::new()
}

fn all_profiles() -> impl Iterator<Item = SellerProfile> {
    Timeline::ALL.into_iter().flat_map(|timeline| {
        Involvement::ALL.into_iter().flat_map(move |involvement| {
            Condition::ALL
                .into_iter()
                .map(move |condition| SellerProfile {
                    timeline,
                    involvement,
                    condition,
                })
        })
    })
}

#[test]
fn every_combination_resolves() {
    let engine = engine();
    let count = all_profiles()
        .map(|profile| engine.recommend(profile))
        .count();
    assert_eq!(count, 27);
}

#[test]
fn identical_inputs_yield_identical_results() {
    let engine = engine();
    for profile in all_profiles() {
        assert_eq!(
            engine.recommend(profile),
            engine.recommend(profile),
            "non-deterministic result for {profile:?}"
        );
    }
}

#[test]
fn primary_never_equals_alternative() {
    let engine = engine();
    for profile in all_profiles() {
        let recommendation = engine.recommend(profile);
        assert_ne!(
            recommendation.primary, recommendation.alternative,
            "degenerate hedge for {profile:?}"
        );
    }
}

#[test]
fn faster_timeline_never_raises_the_primary_fee() {
    let engine = engine();
    // Flexible -> Standard -> Fast must be non-increasing in fee.
    for involvement in Involvement::ALL {
        for condition in Condition::ALL {
            let fee = |timeline| {
                engine
                    .recommend(SellerProfile {
                        timeline,
                        involvement,
                        condition,
                    })
                    .primary
                    .fee_percent()
            };
            let flexible = fee(Timeline::Flexible);
            let standard = fee(Timeline::Standard);
            let fast = fee(Timeline::Fast);
            assert!(
                fast <= standard && standard <= flexible,
                "speed pressure not monotone for {involvement:?}/{condition:?}: \
                 fast={fast} standard={standard} flexible={flexible}"
            );
        }
    }
}

#[test]
fn better_condition_never_pushes_the_primary_above_classic() {
    let engine = engine();
    let classic_fee = ServiceTier::Classic.fee_percent();
    for timeline in Timeline::ALL {
        for involvement in Involvement::ALL {
            let fee = |condition| {
                engine
                    .recommend(SellerProfile {
                        timeline,
                        involvement,
                        condition,
                    })
                    .primary
                    .fee_percent()
            };
            let needs_work = fee(Condition::NeedsWork);
            let marketable = fee(Condition::Marketable);
            let showcase = fee(Condition::Showcase);

            // Improving condition may move the fee up the ladder, but only
            // as far as Classic; renovation-heavy tiers require a home that
            // actually needs the work.
            assert!(
                marketable <= needs_work.max(classic_fee),
                "condition effect not capped for {timeline:?}/{involvement:?}"
            );
            assert!(
                showcase <= marketable.max(classic_fee),
                "condition effect not capped for {timeline:?}/{involvement:?}"
            );
            assert!(
                showcase <= classic_fee,
                "showcase home routed past Classic for {timeline:?}/{involvement:?}"
            );
        }
    }
}

#[test]
fn rationale_tags_track_extreme_inputs() {
    let engine = engine();
    for profile in all_profiles() {
        let recommendation = engine.recommend(profile);
        if profile.timeline == Timeline::Fast {
            assert!(
                recommendation
                    .rationale
                    .contains(&RationaleTag::SpeedPrioritized),
                "missing speed tag for {profile:?}"
            );
        }
        if profile.condition == Condition::NeedsWork {
            assert!(
                recommendation.rationale.contains(&RationaleTag::NeedsWork),
                "missing needs-work tag for {profile:?}"
            );
        }
    }
}

#[test]
fn pinned_scenarios_hold() {
    let engine = engine();
    let recommend = |timeline, involvement, condition| {
        engine.recommend(SellerProfile {
            timeline,
            involvement,
            condition,
        })
    };

    let urgent_as_is = recommend(Timeline::Fast, Involvement::Minimal, Condition::NeedsWork);
    assert_eq!(urgent_as_is.primary, ServiceTier::Cash);
    assert_eq!(urgent_as_is.alternative, ServiceTier::Core);

    let urgent_hands_on = recommend(Timeline::Fast, Involvement::High, Condition::NeedsWork);
    assert_eq!(urgent_hands_on.primary, ServiceTier::Cosmetic);
    assert!(
        urgent_hands_on.alternative.fee_percent() < urgent_hands_on.primary.fee_percent(),
        "hedge should fall back down the ladder under time pressure"
    );

    let patient_renovator = recommend(Timeline::Flexible, Involvement::High, Condition::NeedsWork);
    assert_eq!(patient_renovator.primary, ServiceTier::Comprehensive);
    assert_eq!(patient_renovator.alternative, ServiceTier::Cosmetic);

    let turnkey_quick = recommend(Timeline::Fast, Involvement::Minimal, Condition::Showcase);
    assert_eq!(turnkey_quick.primary, ServiceTier::Core);
    assert_ne!(turnkey_quick.alternative, turnkey_quick.primary);

    let turnkey_patient = recommend(Timeline::Flexible, Involvement::Minimal, Condition::Showcase);
    assert!(
        turnkey_patient.primary != ServiceTier::Cash
            && turnkey_patient.primary != ServiceTier::Comprehensive,
        "show-ready home with a patient, hands-off seller should land mid-tier"
    );
}
