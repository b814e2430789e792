//! Property tests for the selector over the built-in catalog.

use habitus_catalog::{CHALLENGES, FAITH_MOTIVATIONS, MATURITY_LEVELS, WELLNESS_MOTIVATIONS};
use habitus_engine::duration::maturity_adjusted;
use habitus_engine::HabitSelector;
use habitus_types::{Category, Intent, Profile, SupportLevel};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn arb_support() -> impl Strategy<Value = SupportLevel> {
    prop_oneof![
        Just(SupportLevel::Weak),
        Just(SupportLevel::Normal),
        Just(SupportLevel::Strong),
    ]
}

fn arb_motivations(pool: &'static [&'static str]) -> impl Strategy<Value = Vec<String>> {
    prop::sample::subsequence(pool.to_vec(), 1..=3)
        .prop_shuffle()
        .prop_map(|ms| ms.into_iter().map(String::from).collect())
}

fn arb_profile_for(intent: Intent) -> impl Strategy<Value = Profile> {
    let motivations = match intent {
        Intent::FaithBased => arb_motivations(FAITH_MOTIVATIONS).boxed(),
        Intent::Wellness => arb_motivations(WELLNESS_MOTIVATIONS).boxed(),
        Intent::Both => (arb_motivations(FAITH_MOTIVATIONS), arb_motivations(WELLNESS_MOTIVATIONS))
            .prop_map(|(mut faith, wellness)| {
                faith.extend(wellness);
                faith
            })
            .boxed(),
    };
    (
        motivations,
        prop::sample::select(CHALLENGES.to_vec()),
        prop::sample::select(MATURITY_LEVELS.to_vec()),
        arb_support(),
    )
        .prop_map(move |(motivations, challenge, maturity, support)| {
            let profile = Profile::new(intent, motivations, challenge).with_support(support);
            if intent.involves_faith() {
                profile.with_maturity(maturity)
            } else {
                profile
            }
        })
}

fn arb_profile() -> impl Strategy<Value = Profile> {
    prop_oneof![
        arb_profile_for(Intent::FaithBased),
        arb_profile_for(Intent::Wellness),
        arb_profile_for(Intent::Both),
    ]
}

fn with_challenge(profile: Profile, challenge: &str) -> Profile {
    Profile {
        challenge: challenge.to_string(),
        ..profile
    }
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    /// Selecting twice gives the same ordered list.
    #[test]
    fn selection_is_idempotent(profile in arb_profile()) {
        let selector = HabitSelector::builtin().unwrap();
        prop_assert_eq!(selector.select(&profile), selector.select(&profile));
    }

    /// Never more than desired, never a repeated id, never below the floor.
    #[test]
    fn selection_is_bounded_and_unique(profile in arb_profile()) {
        let selector = HabitSelector::builtin().unwrap();
        let selection = selector.select(&profile);
        prop_assert!(selection.len() <= selector.desired_count(&profile));
        prop_assert!(selection.len() >= 3);

        let mut ids: Vec<_> = selection.iter().map(|h| h.id.clone()).collect();
        ids.sort();
        ids.dedup();
        prop_assert_eq!(ids.len(), selection.len());
        prop_assert!(selection.iter().all(|h| h.target_minutes >= 5));
    }

    /// Faith-based selections are purely spiritual.
    #[test]
    fn faith_based_is_all_spiritual(profile in arb_profile_for(Intent::FaithBased)) {
        let selection = HabitSelector::builtin().unwrap().select(&profile);
        prop_assert!(selection.iter().all(|h| h.category == Category::Spiritual));
    }

    /// Wellness selections never contain spiritual habits.
    #[test]
    fn wellness_has_no_spiritual(profile in arb_profile_for(Intent::Wellness)) {
        let selection = HabitSelector::builtin().unwrap().select(&profile);
        prop_assert!(selection.iter().all(|h| h.category != Category::Spiritual));
    }

    /// Lack of time caps every habit at 15 minutes.
    #[test]
    fn lack_of_time_caps_duration(profile in arb_profile()) {
        let profile = with_challenge(profile, "lackOfTime");
        let selection = HabitSelector::builtin().unwrap().select(&profile);
        prop_assert!(selection.iter().all(|h| h.target_minutes <= 15));
    }

    /// Giving up cuts the average duration by at least 40%.
    #[test]
    fn giving_up_reduces_average_duration(profile in arb_profile()) {
        let profile = with_challenge(profile, "givingUp");
        let selector = HabitSelector::builtin().unwrap();
        let selection = selector.select(&profile);
        prop_assume!(!selection.is_empty());

        let catalog = selector.catalog();
        let mut baseline = 0u32;
        for picked in &selection {
            let habit = catalog.get(&picked.id).ok_or_else(|| TestCaseError::fail("unknown id"))?;
            baseline += habit
                .base_duration_minutes
                .max(maturity_adjusted(habit, profile.maturity()));
        }
        let adjusted: u32 = selection.iter().map(|h| h.target_minutes).sum();
        prop_assert!(f64::from(adjusted) <= 0.6 * f64::from(baseline),
            "adjusted {} vs baseline {}", adjusted, baseline);
    }

    /// Weak support brings in a relational habit whenever the pool has one.
    #[test]
    fn weak_support_includes_relational(
        profile in prop_oneof![arb_profile_for(Intent::Both), arb_profile_for(Intent::Wellness)],
    ) {
        let profile = profile.with_support(SupportLevel::Weak);
        let selection = HabitSelector::builtin().unwrap().select(&profile);
        prop_assert_eq!(selection.len(), 6);
        prop_assert!(selection.iter().any(|h| h.category == Category::Relational));
    }
}
