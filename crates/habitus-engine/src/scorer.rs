//! Habit scoring.

use habitus_types::{Habit, Profile};
use tracing::debug;

/// Added once per profile motivation the habit matches.
pub const MOTIVATION_BONUS: f64 = 20.0;

/// A habit paired with its score for one profile.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScoredHabit<'a> {
    pub score: f64,
    pub habit: &'a Habit,
}

/// Score a habit for a profile.
///
/// Starts from the habit's priority and adds [`MOTIVATION_BONUS`] for every
/// matching motivation (uncapped), then multiplies by the challenge fit and,
/// for weak support, by the habit's weak-support boost. The additive step
/// always comes first.
pub fn score(habit: &Habit, profile: &Profile) -> f64 {
    let matches = profile
        .motivations
        .iter()
        .filter(|m| habit.matches_motivation(m))
        .count();

    let mut score = f64::from(habit.priority) + MOTIVATION_BONUS * matches as f64;
    score *= habit.challenge_fit_for(&profile.challenge);
    if profile.support_level.is_weak() {
        score *= habit.support_boost_for(profile.support_level);
    }
    score
}

/// Habits eligible at a maturity level.
///
/// Every habit stays eligible: one without a multiplier table (absent or
/// empty) applies to all levels, and one with a table is kept whether or not
/// it maps the requested level. An unmapped level later scales by 1.0.
pub fn filter_by_maturity<'a>(habits: Vec<&'a Habit>, maturity: Option<&str>) -> Vec<&'a Habit> {
    let Some(level) = maturity.filter(|m| !m.is_empty()) else {
        return habits;
    };
    for habit in &habits {
        let unmapped = habit
            .maturity_multiplier
            .as_ref()
            .is_some_and(|table| !table.is_empty() && !table.contains_key(level));
        if unmapped {
            debug!(habit_id = %habit.id, maturity = level, "Maturity level not mapped");
        }
    }
    habits
}

/// Score every habit and sort by descending score.
///
/// The sort is stable, so equal scores keep catalog order.
pub fn rank<'a>(habits: &[&'a Habit], profile: &Profile) -> Vec<ScoredHabit<'a>> {
    let mut scored: Vec<ScoredHabit<'a>> = habits
        .iter()
        .copied()
        .map(|habit| ScoredHabit {
            score: score(habit, profile),
            habit,
        })
        .collect();
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use habitus_types::{Intent, SupportLevel};

    fn habit(json: serde_json::Value) -> Habit {
        let mut base = serde_json::json!({
            "id": "h1",
            "nameKey": "k",
            "category": "spiritual",
            "emoji": "🙏",
            "base_duration": 10,
            "priority": 100,
        });
        if let (Some(base), Some(extra)) = (base.as_object_mut(), json.as_object()) {
            base.extend(extra.clone());
        }
        serde_json::from_value(base).unwrap()
    }

    fn profile(motivations: &[&str], challenge: &str) -> Profile {
        Profile::new(Intent::FaithBased, motivations.iter().copied(), challenge)
            .with_maturity("new")
    }

    #[test]
    fn priority_times_default_fit() {
        let h = habit(serde_json::json!({}));
        assert_eq!(score(&h, &profile(&["closerToGod"], "lackOfTime")), 50.0);
    }

    #[test]
    fn motivation_bonus_is_additive_before_multipliers() {
        let h = habit(serde_json::json!({
            "motivation_match": ["closerToGod", "prayerDiscipline"],
            "challenge_fit": {"lackOfTime": 0.5},
        }));
        let p = profile(&["closerToGod", "prayerDiscipline", "growInFaith"], "lackOfTime");
        assert_eq!(score(&h, &p), (100.0 + 40.0) * 0.5);
    }

    #[test]
    fn weak_support_applies_boost() {
        let h = habit(serde_json::json!({
            "challenge_fit": {"givingUp": 1.0},
            "support_boost": {"weak": 2.0},
        }));
        let p = profile(&["x"], "givingUp");
        assert_eq!(score(&h, &p), 100.0);
        assert_eq!(score(&h, &p.clone().with_support(SupportLevel::Weak)), 200.0);
        assert_eq!(score(&h, &p.with_support(SupportLevel::Strong)), 100.0);
    }

    #[test]
    fn weak_support_without_boost_is_neutral() {
        let h = habit(serde_json::json!({"challenge_fit": {"givingUp": 1.0}}));
        let p = profile(&["x"], "givingUp").with_support(SupportLevel::Weak);
        assert_eq!(score(&h, &p), 100.0);
    }

    #[test]
    fn maturity_filter_is_permissive() {
        let scaled = habit(serde_json::json!({"id": "a", "maturity_multiplier": {"mature": 1.5}}));
        let universal = habit(serde_json::json!({"id": "b"}));
        let empty = habit(serde_json::json!({"id": "c", "maturity_multiplier": {}}));
        let all = vec![&scaled, &universal, &empty];

        let kept = filter_by_maturity(all.clone(), Some("new"));
        let ids: Vec<_> = kept.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);

        assert_eq!(filter_by_maturity(all.clone(), None).len(), 3);
        assert_eq!(filter_by_maturity(all, Some("")).len(), 3);
    }

    #[test]
    fn rank_is_stable_on_ties() {
        let first = habit(serde_json::json!({"id": "first", "priority": 80}));
        let top = habit(serde_json::json!({"id": "top", "priority": 90}));
        let second = habit(serde_json::json!({"id": "second", "priority": 80}));
        let ranked = rank(&[&first, &top, &second], &profile(&["x"], "lackOfTime"));
        let ids: Vec<_> = ranked.iter().map(|s| s.habit.id.as_str()).collect();
        assert_eq!(ids, ["top", "first", "second"]);
    }
}
