//! Duration adjustment.
//!
//! Maturity scaling runs first, so challenge caps apply to the scaled value
//! rather than the catalog base. Every step truncates toward zero.

use habitus_types::{Habit, Profile};

/// Hard floor for any adjusted duration.
pub const MIN_TARGET_MINUTES: u32 = 5;

/// Ceiling applied for `lackOfTime`.
pub const LACK_OF_TIME_CEILING: u32 = 15;

const GIVING_UP_FACTOR: f64 = 0.5;
const DONT_KNOW_START_FACTOR: f64 = 0.7;

fn scale(minutes: u32, factor: f64) -> u32 {
    (f64::from(minutes) * factor).floor() as u32
}

/// Base duration scaled by the habit's multiplier for `maturity`.
pub fn maturity_adjusted(habit: &Habit, maturity: Option<&str>) -> u32 {
    match habit.maturity_scale(maturity) {
        Some(factor) => scale(habit.base_duration_minutes, factor),
        None => habit.base_duration_minutes,
    }
}

/// Challenge-specific rule. Unknown challenges leave the duration as is.
pub fn apply_challenge(minutes: u32, challenge: &str) -> u32 {
    match challenge {
        "lackOfTime" => minutes.min(LACK_OF_TIME_CEILING),
        "givingUp" => scale(minutes, GIVING_UP_FACTOR).max(MIN_TARGET_MINUTES),
        "dontKnowStart" => scale(minutes, DONT_KNOW_START_FACTOR),
        _ => minutes,
    }
}

/// Target minutes for `habit` under `profile`, never below `floor`.
///
/// A floor under [`MIN_TARGET_MINUTES`] is raised to it.
pub fn adjust_duration_with_floor(habit: &Habit, profile: &Profile, floor: u32) -> u32 {
    let scaled = maturity_adjusted(habit, profile.maturity());
    apply_challenge(scaled, &profile.challenge).max(floor.max(MIN_TARGET_MINUTES))
}

/// Target minutes for `habit` under `profile`.
pub fn adjust_duration(habit: &Habit, profile: &Profile) -> u32 {
    adjust_duration_with_floor(habit, profile, MIN_TARGET_MINUTES)
}
