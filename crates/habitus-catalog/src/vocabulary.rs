//! Known onboarding answers.
//!
//! These lists describe what the mobile client offers. They are not enforced:
//! profiles carrying other strings are scored like any other input.

/// Motivations offered for faith-based intents.
pub const FAITH_MOTIVATIONS: &[&str] = &[
    "closerToGod",
    "prayerDiscipline",
    "understandBible",
    "growInFaith",
    "overcomeHabits",
];

/// Motivations offered for wellness intents.
pub const WELLNESS_MOTIVATIONS: &[&str] = &[
    "physicalHealth",
    "reduceStress",
    "timeManagement",
    "productivity",
    "betterSleep",
];

/// Spiritual maturity stages, least to most mature.
pub const MATURITY_LEVELS: &[&str] = &["new", "growing", "mature", "passionate"];

pub const CHALLENGES: &[&str] = &["lackOfTime", "lackOfMotivation", "dontKnowStart", "givingUp"];

pub fn is_known_motivation(motivation: &str) -> bool {
    FAITH_MOTIVATIONS.contains(&motivation) || WELLNESS_MOTIVATIONS.contains(&motivation)
}
