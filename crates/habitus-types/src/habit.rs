use crate::error::HabitusError;
use crate::profile::SupportLevel;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

/// Challenge fit applied when a habit does not list the profile's challenge.
pub const DEFAULT_CHALLENGE_FIT: f64 = 0.5;

/// Support boost applied when a habit does not list the profile's support level.
pub const DEFAULT_SUPPORT_BOOST: f64 = 1.0;

/// Habit category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Spiritual,
    Physical,
    Mental,
    Relational,
}

impl Category {
    /// Catalog iteration order.
    pub const ALL: [Category; 4] = [
        Category::Spiritual,
        Category::Physical,
        Category::Mental,
        Category::Relational,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Spiritual => "spiritual",
            Category::Physical => "physical",
            Category::Mental => "mental",
            Category::Relational => "relational",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = HabitusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| HabitusError::UnknownValue {
                kind: "category",
                value: s.to_string(),
            })
    }
}

/// Suggested time of day for a habit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    #[default]
    Flexible,
}

impl TimeOfDay {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "morning",
            TimeOfDay::Afternoon => "afternoon",
            TimeOfDay::Evening => "evening",
            TimeOfDay::Flexible => "flexible",
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A catalog entry.
///
/// Field names on the wire follow the catalog document format
/// (`nameKey`, `base_duration`, `challenge_fit`, ...).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Habit {
    /// Unique identifier, e.g. `sp01`
    pub id: String,
    /// i18n lookup key for the display name
    #[serde(rename = "nameKey")]
    pub name_key: String,
    pub category: Category,
    pub emoji: String,
    /// Catalog duration before any adjustment
    #[serde(rename = "base_duration")]
    pub base_duration_minutes: u32,
    /// Maturity level -> duration scale. `None` means no maturity scaling.
    #[serde(default)]
    pub maturity_multiplier: Option<BTreeMap<String, f64>>,
    /// Informational only
    #[serde(default)]
    pub tags: BTreeSet<String>,
    /// Motivations that earn a score bonus
    #[serde(default)]
    pub motivation_match: BTreeSet<String>,
    /// Challenge -> fit factor in [0, 1]
    #[serde(default)]
    pub challenge_fit: BTreeMap<String, f64>,
    /// Support level -> score multiplier
    #[serde(default)]
    pub support_boost: BTreeMap<String, f64>,
    #[serde(default)]
    pub verse_key: Option<String>,
    /// Base score
    pub priority: u32,
    #[serde(default)]
    pub time_of_day: TimeOfDay,
}

impl Habit {
    /// Fit factor for a challenge, [`DEFAULT_CHALLENGE_FIT`] when unlisted.
    pub fn challenge_fit_for(&self, challenge: &str) -> f64 {
        self.challenge_fit
            .get(challenge)
            .copied()
            .unwrap_or(DEFAULT_CHALLENGE_FIT)
    }

    /// Score multiplier for a support level, [`DEFAULT_SUPPORT_BOOST`] when unlisted.
    pub fn support_boost_for(&self, level: SupportLevel) -> f64 {
        self.support_boost
            .get(level.as_str())
            .copied()
            .unwrap_or(DEFAULT_SUPPORT_BOOST)
    }

    pub fn matches_motivation(&self, motivation: &str) -> bool {
        self.motivation_match.contains(motivation)
    }

    /// Duration scale for a maturity level.
    ///
    /// `None` when no scaling applies: the profile has no maturity or the
    /// habit has no multiplier table. A table without an entry for the
    /// requested level scales by 1.0.
    pub fn maturity_scale(&self, maturity: Option<&str>) -> Option<f64> {
        let maturity = maturity?;
        let table = self.maturity_multiplier.as_ref()?;
        if table.is_empty() {
            return None;
        }
        Some(table.get(maturity).copied().unwrap_or(1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn habit_json() -> &'static str {
        r#"{
            "id": "sp01",
            "nameKey": "morning_prayer",
            "category": "spiritual",
            "emoji": "🙏",
            "base_duration": 10,
            "maturity_multiplier": {"new": 0.5, "growing": 1.0},
            "tags": ["prayer"],
            "motivation_match": ["closerToGod"],
            "challenge_fit": {"lackOfTime": 0.9},
            "support_boost": {"weak": 1.2},
            "verse_key": "psalms_5_3",
            "priority": 100,
            "time_of_day": "morning"
        }"#
    }

    #[test]
    fn deserializes_catalog_record() {
        let habit: Habit = serde_json::from_str(habit_json()).unwrap();
        assert_eq!(habit.name_key, "morning_prayer");
        assert_eq!(habit.base_duration_minutes, 10);
        assert_eq!(habit.category, Category::Spiritual);
        assert_eq!(habit.time_of_day, TimeOfDay::Morning);
    }

    #[test]
    fn lookups_fall_back_to_defaults() {
        let habit: Habit = serde_json::from_str(habit_json()).unwrap();
        assert_eq!(habit.challenge_fit_for("lackOfTime"), 0.9);
        assert_eq!(habit.challenge_fit_for("givingUp"), DEFAULT_CHALLENGE_FIT);
        assert_eq!(habit.support_boost_for(SupportLevel::Weak), 1.2);
        assert_eq!(habit.support_boost_for(SupportLevel::Strong), DEFAULT_SUPPORT_BOOST);
    }

    #[test]
    fn maturity_scale_cases() {
        let mut habit: Habit = serde_json::from_str(habit_json()).unwrap();
        assert_eq!(habit.maturity_scale(Some("new")), Some(0.5));
        assert_eq!(habit.maturity_scale(Some("passionate")), Some(1.0));
        assert_eq!(habit.maturity_scale(None), None);

        habit.maturity_multiplier = None;
        assert_eq!(habit.maturity_scale(Some("new")), None);
    }

    #[test]
    fn optional_fields_default() {
        let habit: Habit = serde_json::from_str(
            r#"{"id":"x","nameKey":"k","category":"mental","emoji":"🧘","base_duration":10,"priority":1}"#,
        )
        .unwrap();
        assert!(habit.maturity_multiplier.is_none());
        assert!(habit.verse_key.is_none());
        assert_eq!(habit.time_of_day, TimeOfDay::Flexible);
    }

    #[test]
    fn category_round_trips_through_str() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
        assert!("emotional".parse::<Category>().is_err());
    }
}
