//! Configuration for template generation

use crate::error::{TemplateError, TemplateResult};
use habitus_engine::MIN_TARGET_MINUTES;
use serde::{Deserialize, Serialize};

/// Template generation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Template format version written into every record
    #[serde(default = "default_version")]
    pub version: String,

    /// Generator tag written into every record
    #[serde(default = "default_generated_by")]
    pub generated_by: String,

    /// Fewest habits an accepted template may hold
    #[serde(default = "default_min_habits")]
    pub min_habits: usize,

    /// Most habits an accepted template may hold
    #[serde(default = "default_max_habits")]
    pub max_habits: usize,

    /// Habits requested for normal and strong support
    #[serde(default = "default_count")]
    pub default_count: usize,

    /// Habits requested for weak support
    #[serde(default = "default_weak_support_count")]
    pub weak_support_count: usize,

    /// Duration floor for every habit, at least 5 minutes
    #[serde(default = "default_min_target_minutes")]
    pub min_target_minutes: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            generated_by: default_generated_by(),
            min_habits: default_min_habits(),
            max_habits: default_max_habits(),
            default_count: default_count(),
            weak_support_count: default_weak_support_count(),
            min_target_minutes: default_min_target_minutes(),
        }
    }
}

impl GeneratorConfig {
    /// Check the bounds agree with each other.
    pub fn validate(&self) -> TemplateResult<()> {
        if self.min_habits == 0 || self.min_habits > self.max_habits {
            return Err(TemplateError::Config(format!(
                "habit bounds [{}, {}] are empty",
                self.min_habits, self.max_habits
            )));
        }
        for (name, count) in [
            ("default_count", self.default_count),
            ("weak_support_count", self.weak_support_count),
        ] {
            if !(self.min_habits..=self.max_habits).contains(&count) {
                return Err(TemplateError::Config(format!(
                    "{name} {count} outside [{}, {}]",
                    self.min_habits, self.max_habits
                )));
            }
        }
        if self.min_target_minutes < MIN_TARGET_MINUTES {
            return Err(TemplateError::Config(format!(
                "min_target_minutes {} is below the {MIN_TARGET_MINUTES} minute floor",
                self.min_target_minutes
            )));
        }
        if self.version.trim().is_empty() {
            return Err(TemplateError::Config("version is empty".into()));
        }
        Ok(())
    }
}

fn default_version() -> String {
    "2.0".to_string()
}

fn default_generated_by() -> String {
    "rule_engine".to_string()
}

fn default_min_habits() -> usize {
    3
}

fn default_max_habits() -> usize {
    6
}

fn default_count() -> usize {
    5
}

fn default_weak_support_count() -> usize {
    6
}

fn default_min_target_minutes() -> u32 {
    MIN_TARGET_MINUTES
}
