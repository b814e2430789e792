//! Checks on typed templates.
//!
//! [`check_structure`] is the gate the assembler applies before accepting a
//! template. [`check_invariants`] adds the per-intent category and duration
//! rules the batch validator enforces on stored templates.

use crate::config::GeneratorConfig;
use crate::violation::{TemplateViolation, ViolationKind, ViolationSeverity};
use habitus_engine::duration::{LACK_OF_TIME_CEILING, MIN_TARGET_MINUTES};
use habitus_engine::quota::category_ceiling;
use habitus_types::{Category, Intent, Template};

fn violation(kind: ViolationKind, message: String) -> TemplateViolation {
    TemplateViolation::new(kind, ViolationSeverity::Violation, message)
}

/// Required fields, habit count, duration floor and fingerprint agreement.
pub fn check_structure(template: &Template, config: &GeneratorConfig) -> Vec<TemplateViolation> {
    let mut found = Vec::new();

    if template.template_id.is_empty() {
        found.push(violation(ViolationKind::MissingField, "template_id is empty".into()));
    }
    if template.fingerprint.is_empty() {
        found.push(violation(ViolationKind::MissingField, "fingerprint is empty".into()));
    }
    if template.version != config.version {
        found.push(violation(
            ViolationKind::VersionMismatch,
            format!("version {} (expected {})", template.version, config.version),
        ));
    }

    let count = template.habits.len();
    if !(config.min_habits..=config.max_habits).contains(&count) {
        found.push(violation(
            ViolationKind::HabitCount,
            format!(
                "{count} habits outside [{}, {}]",
                config.min_habits, config.max_habits
            ),
        ));
    }

    let floor = config.min_target_minutes.max(MIN_TARGET_MINUTES);
    for (i, habit) in template.habits.iter().enumerate() {
        let required = [
            ("id", &habit.id),
            ("nameKey", &habit.name_key),
            ("emoji", &habit.emoji),
            ("notification_key", &habit.notification_key),
        ];
        for (field, value) in required {
            if value.is_empty() {
                found.push(violation(
                    ViolationKind::MissingField,
                    format!("habit #{i} has an empty {field}"),
                ));
            }
        }
        if habit.target_minutes < floor {
            found.push(violation(
                ViolationKind::Duration,
                format!(
                    "habit {} targets {} min, below the {floor} min floor",
                    habit.id, habit.target_minutes
                ),
            ));
        }
    }

    let recomputed = habitus_fingerprint::fingerprint(&template.profile);
    if recomputed != template.fingerprint {
        found.push(TemplateViolation::fingerprint(format!(
            "stored {}, recomputed {recomputed}",
            template.fingerprint
        )));
    }

    found
}

/// Per-intent category balance and the lack-of-time ceiling.
pub fn check_invariants(template: &Template, config: &GeneratorConfig) -> Vec<TemplateViolation> {
    let mut found = Vec::new();
    let profile = &template.profile;

    if profile.challenge == "lackOfTime" {
        for habit in template
            .habits
            .iter()
            .filter(|h| h.target_minutes > LACK_OF_TIME_CEILING)
        {
            found.push(violation(
                ViolationKind::DurationCeiling,
                format!(
                    "habit {} targets {} min, above the {LACK_OF_TIME_CEILING} min lackOfTime ceiling",
                    habit.id, habit.target_minutes
                ),
            ));
        }
    }

    let counts = template.category_counts();
    let count = |c: Category| counts.get(&c).copied().unwrap_or(0);
    let balance = |message: &str| violation(ViolationKind::CategoryBalance, message.to_string());

    match profile.intent {
        Intent::FaithBased => {
            if template.habits.iter().any(|h| h.category != Category::Spiritual) {
                found.push(balance("faithBased template holds non-spiritual habits"));
            }
        }
        Intent::Wellness => {
            if count(Category::Spiritual) > 0 {
                found.push(balance("wellness template holds spiritual habits"));
            }
            if count(Category::Physical) + count(Category::Mental) == 0 {
                found.push(balance("wellness template has no physical or mental habit"));
            }
        }
        Intent::Both => {
            if count(Category::Spiritual) == 0 {
                found.push(balance("both template has no spiritual habit"));
            }
            if count(Category::Physical) == 0 {
                found.push(balance("both template has no physical habit"));
            }
        }
    }

    for category in Category::ALL {
        let ceiling = category_ceiling(profile.intent, category, config.max_habits);
        let n = count(category);
        // Category purity above already covers categories outside the table.
        if n > ceiling && ceiling > 0 {
            found.push(violation(
                ViolationKind::CategoryBalance,
                format!("{n} {category} habits exceed the quota of {ceiling}"),
            ));
        }
    }

    found
}

/// Every check, structure first.
pub fn validate_template(template: &Template, config: &GeneratorConfig) -> Vec<TemplateViolation> {
    let mut found = check_structure(template, config);
    found.extend(check_invariants(template, config));
    found
}
