//! Habit Selector - picks a category-balanced habit set for a profile
//!
//! The selector is a read-only view over a catalog. It scores the intent's
//! pool, walks the quota table and adjusts durations; it never mutates the
//! catalog and never fails.

use crate::duration::{adjust_duration_with_floor, MIN_TARGET_MINUTES};
use crate::quota::quota_table;
use crate::scorer::{filter_by_maturity, rank, ScoredHabit};
use habitus_catalog::HabitCatalog;
use habitus_types::{HabitusResult, Profile, SelectedHabit};
use std::collections::HashSet;
use tracing::debug;

/// Habits requested for a normal or strong support level.
pub const DEFAULT_COUNT: usize = 5;
/// Habits requested for weak support, leaving room for a relational habit.
pub const WEAK_SUPPORT_COUNT: usize = 6;

/// Selects habits from a catalog
#[derive(Clone, Debug)]
pub struct HabitSelector<'c> {
    catalog: &'c HabitCatalog,
    default_count: usize,
    weak_support_count: usize,
    min_minutes: u32,
}

impl<'c> HabitSelector<'c> {
    pub fn new(catalog: &'c HabitCatalog) -> Self {
        Self {
            catalog,
            default_count: DEFAULT_COUNT,
            weak_support_count: WEAK_SUPPORT_COUNT,
            min_minutes: MIN_TARGET_MINUTES,
        }
    }

    /// Override the desired counts.
    pub fn with_counts(mut self, default_count: usize, weak_support_count: usize) -> Self {
        self.default_count = default_count;
        self.weak_support_count = weak_support_count;
        self
    }

    /// Raise the duration floor. Values under [`MIN_TARGET_MINUTES`] keep
    /// the hard floor.
    pub fn with_min_minutes(mut self, min_minutes: u32) -> Self {
        self.min_minutes = min_minutes.max(MIN_TARGET_MINUTES);
        self
    }

    pub fn catalog(&self) -> &'c HabitCatalog {
        self.catalog
    }

    pub fn desired_count(&self, profile: &Profile) -> usize {
        if profile.support_level.is_weak() {
            self.weak_support_count
        } else {
            self.default_count
        }
    }

    /// Scored candidates for a profile, best first.
    ///
    /// This is the list the quota walk consumes: the intent's pool after the
    /// maturity filter, stable-sorted by descending score.
    pub fn explain(&self, profile: &Profile) -> Vec<ScoredHabit<'c>> {
        let pool = self.catalog.pool_for_intent(profile.intent);
        let eligible = filter_by_maturity(pool, profile.maturity());
        rank(&eligible, profile)
    }

    /// Select up to `desired` habits with adjusted durations.
    ///
    /// An empty pool yields an empty selection.
    pub fn select_habits(&self, profile: &Profile, desired: usize) -> Vec<SelectedHabit> {
        let ranked = self.explain(profile);

        let mut used = HashSet::new();
        let mut chosen: Vec<&ScoredHabit<'c>> = Vec::with_capacity(desired);
        for rule in quota_table(profile.intent) {
            let cap = rule.cap_for(desired, profile.support_level);
            let mut taken = 0;
            for candidate in &ranked {
                if taken >= cap {
                    break;
                }
                if candidate.habit.category == rule.category
                    && used.insert(candidate.habit.id.as_str())
                {
                    chosen.push(candidate);
                    taken += 1;
                }
            }
        }
        chosen.truncate(desired);

        chosen
            .into_iter()
            .map(|candidate| {
                let minutes =
                    adjust_duration_with_floor(candidate.habit, profile, self.min_minutes);
                debug!(
                    habit_id = %candidate.habit.id,
                    category = %candidate.habit.category,
                    score = candidate.score,
                    target_minutes = minutes,
                    "Habit selected"
                );
                SelectedHabit::from_habit(candidate.habit, minutes)
            })
            .collect()
    }

    /// Select the desired count for the profile's support level.
    pub fn select(&self, profile: &Profile) -> Vec<SelectedHabit> {
        self.select_habits(profile, self.desired_count(profile))
    }
}

impl HabitSelector<'static> {
    /// Selector over the built-in catalog.
    pub fn builtin() -> HabitusResult<Self> {
        Ok(Self::new(habitus_catalog::builtin()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use habitus_types::{Category, Intent, SupportLevel};

    fn ids(selection: &[SelectedHabit]) -> Vec<&str> {
        selection.iter().map(|h| h.id.as_str()).collect()
    }

    fn minutes(selection: &[SelectedHabit]) -> Vec<u32> {
        selection.iter().map(|h| h.target_minutes).collect()
    }

    #[test]
    fn desired_count_follows_support() {
        let selector = HabitSelector::builtin().unwrap();
        let p = Profile::new(Intent::Wellness, ["reduceStress"], "givingUp");
        assert_eq!(selector.desired_count(&p), 5);
        assert_eq!(selector.desired_count(&p.with_support(SupportLevel::Weak)), 6);
    }

    #[test]
    fn faith_new_lack_of_time() {
        let selector = HabitSelector::builtin().unwrap();
        let p =
            Profile::new(Intent::FaithBased, ["closerToGod"], "lackOfTime").with_maturity("new");
        let selection = selector.select(&p);

        assert_eq!(ids(&selection), ["sp01", "sp12", "sp03", "sp19", "sp17"]);
        assert_eq!(minutes(&selection), [5, 10, 10, 10, 10]);
        assert!(selection.iter().all(|h| h.category == Category::Spiritual));
    }

    #[test]
    fn wellness_weak_support_adds_relational() {
        let selector = HabitSelector::builtin().unwrap();
        let p = Profile::new(Intent::Wellness, ["physicalHealth", "reduceStress"], "lackOfTime");

        let normal = selector.select(&p);
        assert_eq!(ids(&normal), ["ph02", "ph08", "ph01", "mn07", "mn03"]);
        assert_eq!(minutes(&normal), [10, 10, 15, 10, 10]);

        let weak = selector.select(&p.with_support(SupportLevel::Weak));
        assert_eq!(weak.len(), 6);
        assert_eq!(weak[5].id, "rl01");
        assert_eq!(weak[5].target_minutes, 15);
    }

    #[test]
    fn both_normal_support_truncates_mental() {
        let selector = HabitSelector::builtin().unwrap();
        let p = Profile::new(Intent::Both, ["closerToGod", "physicalHealth"], "lackOfMotivation")
            .with_maturity("growing");
        let selection = selector.select(&p);
        assert_eq!(ids(&selection), ["sp01", "sp03", "sp19", "ph02", "ph08"]);
    }

    #[test]
    fn low_floor_override_keeps_five_minutes() {
        let selector = HabitSelector::builtin().unwrap().with_min_minutes(1);
        let p = Profile::new(Intent::FaithBased, ["closerToGod"], "dontKnowStart")
            .with_maturity("new");
        let selection = selector.select(&p);
        assert_eq!(selection.len(), 5);
        assert!(selection.iter().all(|h| h.target_minutes >= 5), "{:?}", minutes(&selection));
    }

    #[test]
    fn zero_desired_selects_nothing() {
        let selector = HabitSelector::builtin().unwrap();
        let p = Profile::new(Intent::Both, ["closerToGod"], "givingUp").with_maturity("new");
        assert!(selector.select_habits(&p, 0).is_empty());
    }

    #[test]
    fn empty_pool_selects_nothing() {
        let catalog = HabitCatalog::new("empty", Vec::new()).unwrap();
        let selector = HabitSelector::new(&catalog);
        let p =
            Profile::new(Intent::FaithBased, ["closerToGod"], "lackOfTime").with_maturity("new");
        assert!(selector.select(&p).is_empty());
        assert!(selector.explain(&p).is_empty());
    }

    #[test]
    fn explain_is_sorted_descending() {
        let selector = HabitSelector::builtin().unwrap();
        let p = Profile::new(Intent::Both, ["growInFaith", "betterSleep"], "dontKnowStart")
            .with_maturity("mature");
        let ranked = selector.explain(&p);
        assert_eq!(ranked.len(), 45);
        assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
    }
}
