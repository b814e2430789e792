use habitus_types::{Category, Habit, HabitusError, HabitusResult, Intent};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::sync::LazyLock;
use tracing::debug;

const BUILTIN_JSON: &str = include_str!("../data/catalog.json");

static BUILTIN: LazyLock<Result<HabitCatalog, String>> =
    LazyLock::new(|| HabitCatalog::from_json(BUILTIN_JSON).map_err(|e| e.to_string()));

/// The catalog shipped with the crate, parsed on first use.
pub fn builtin() -> HabitusResult<&'static HabitCatalog> {
    BUILTIN
        .as_ref()
        .map_err(|e| HabitusError::InvalidCatalog(e.clone()))
}

/// On-disk layout: one record list per category.
#[derive(Debug, Serialize, Deserialize)]
struct CatalogDocument {
    version: String,
    #[serde(default)]
    spiritual: Vec<Habit>,
    #[serde(default)]
    physical: Vec<Habit>,
    #[serde(default)]
    mental: Vec<Habit>,
    #[serde(default)]
    relational: Vec<Habit>,
}

/// Read-only registry of candidate habits.
///
/// Habits are held in catalog iteration order: spiritual, physical, mental,
/// relational, each in list order. Selection tie-breaks depend on it.
#[derive(Clone, Debug, PartialEq)]
pub struct HabitCatalog {
    version: String,
    habits: Vec<Habit>,
}

impl HabitCatalog {
    /// Build a catalog from habits already in iteration order.
    pub fn new(version: impl Into<String>, habits: Vec<Habit>) -> HabitusResult<Self> {
        let catalog = Self {
            version: version.into(),
            habits,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn from_json(json: &str) -> HabitusResult<Self> {
        let doc: CatalogDocument = serde_json::from_str(json)
            .map_err(|e| HabitusError::InvalidCatalog(format!("malformed catalog: {e}")))?;

        let lists = [
            (Category::Spiritual, doc.spiritual),
            (Category::Physical, doc.physical),
            (Category::Mental, doc.mental),
            (Category::Relational, doc.relational),
        ];
        let mut habits = Vec::new();
        for (category, list) in lists {
            if let Some(stray) = list.iter().find(|h| h.category != category) {
                return Err(HabitusError::InvalidCatalog(format!(
                    "habit {} is listed under {category} but declares {}",
                    stray.id, stray.category
                )));
            }
            habits.extend(list);
        }

        let catalog = Self::new(doc.version, habits)?;
        debug!(
            version = %catalog.version,
            habits = catalog.len(),
            "Catalog loaded"
        );
        Ok(catalog)
    }

    pub fn from_path(path: impl AsRef<Path>) -> HabitusResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            HabitusError::InvalidCatalog(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_json(&json)
    }

    /// Structural checks run before any scoring.
    pub fn validate(&self) -> HabitusResult<()> {
        let mut seen = HashSet::new();
        for habit in &self.habits {
            let fail = |reason: String| {
                Err(HabitusError::InvalidCatalog(format!("habit {}: {reason}", habit.id)))
            };

            if habit.id.trim().is_empty() {
                return Err(HabitusError::InvalidCatalog("habit with empty id".into()));
            }
            if !seen.insert(habit.id.as_str()) {
                return fail("duplicate id".into());
            }
            if habit.name_key.trim().is_empty() {
                return fail("empty nameKey".into());
            }
            if habit.emoji.is_empty() {
                return fail("empty emoji".into());
            }
            if habit.base_duration_minutes == 0 {
                return fail("base_duration must be positive".into());
            }
            if let Some((challenge, fit)) = habit
                .challenge_fit
                .iter()
                .find(|(_, fit)| !(0.0..=1.0).contains(*fit))
            {
                return fail(format!("challenge_fit[{challenge}] = {fit} outside [0, 1]"));
            }
            if let Some((level, m)) = habit
                .maturity_multiplier
                .iter()
                .flatten()
                .find(|(_, m)| !(m.is_finite() && **m > 0.0))
            {
                return fail(format!("maturity_multiplier[{level}] = {m} must be positive"));
            }
            if let Some((level, b)) = habit
                .support_boost
                .iter()
                .find(|(_, b)| !(b.is_finite() && **b > 0.0))
            {
                return fail(format!("support_boost[{level}] = {b} must be positive"));
            }
        }
        Ok(())
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    pub fn len(&self) -> usize {
        self.habits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.habits.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Habit> {
        self.habits.iter().find(|h| h.id == id)
    }

    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &Habit> + '_ {
        self.habits.iter().filter(move |h| h.category == category)
    }

    /// Candidate pool for an intent, in catalog iteration order.
    pub fn pool_for_intent(&self, intent: Intent) -> Vec<&Habit> {
        self.habits
            .iter()
            .filter(|h| match intent {
                Intent::FaithBased => h.category == Category::Spiritual,
                Intent::Wellness => h.category != Category::Spiritual,
                Intent::Both => true,
            })
            .collect()
    }
}
