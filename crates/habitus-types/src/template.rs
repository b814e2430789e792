use crate::habit::{Category, Habit, TimeOfDay};
use crate::profile::Profile;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A catalog habit with its duration adjusted for one profile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedHabit {
    pub id: String,
    #[serde(rename = "nameKey")]
    pub name_key: String,
    pub category: Category,
    pub emoji: String,
    pub target_minutes: u32,
    pub verse_key: Option<String>,
    pub notification_key: String,
    pub time_of_day: TimeOfDay,
}

impl SelectedHabit {
    /// Project a catalog habit at the given duration. The notification key
    /// reuses the name key.
    pub fn from_habit(habit: &Habit, target_minutes: u32) -> Self {
        Self {
            id: habit.id.clone(),
            name_key: habit.name_key.clone(),
            category: habit.category,
            emoji: habit.emoji.clone(),
            target_minutes,
            verse_key: habit.verse_key.clone(),
            notification_key: habit.name_key.clone(),
            time_of_day: habit.time_of_day,
        }
    }
}

/// Persisted template record, looked up by `fingerprint`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub template_id: String,
    pub fingerprint: String,
    pub version: String,
    pub generated_by: String,
    pub profile: Profile,
    pub habits: Vec<SelectedHabit>,
}

impl Template {
    /// Name of the file the template is stored under.
    pub fn file_name(&self) -> String {
        format!("{}.json", self.fingerprint)
    }

    pub fn category_counts(&self) -> BTreeMap<Category, usize> {
        let mut counts = BTreeMap::new();
        for habit in &self.habits {
            *counts.entry(habit.category).or_insert(0) += 1;
        }
        counts
    }

    pub fn count_in(&self, category: Category) -> usize {
        self.habits.iter().filter(|h| h.category == category).count()
    }

    pub fn total_minutes(&self) -> u32 {
        self.habits.iter().map(|h| h.target_minutes).sum()
    }
}
