//! The fixed scenario matrix covered by batch generation.
//!
//! 24 faith-based, 12 wellness and 24 combined profiles, chosen to cover
//! every maturity, challenge and support level with the common motivation
//! pairings.

use habitus_types::{Intent, Profile, SupportLevel};
use SupportLevel::{Normal, Strong, Weak};

type Row = (
    Option<&'static str>,
    &'static [&'static str],
    &'static str,
    SupportLevel,
);

const FAITH_BASED: &[Row] = &[
    (Some("new"), &["closerToGod"], "lackOfTime", Weak),
    (Some("new"), &["prayerDiscipline"], "lackOfTime", Normal),
    (Some("new"), &["closerToGod", "prayerDiscipline"], "lackOfMotivation", Weak),
    (Some("new"), &["understandBible"], "dontKnowStart", Normal),
    (Some("new"), &["growInFaith"], "dontKnowStart", Weak),
    (Some("new"), &["closerToGod"], "givingUp", Weak),
    (Some("new"), &["prayerDiscipline", "understandBible"], "givingUp", Normal),
    (Some("new"), &["growInFaith", "closerToGod"], "lackOfTime", Strong),
    (Some("new"), &["understandBible"], "lackOfMotivation", Normal),
    (Some("new"), &["overcomeHabits"], "givingUp", Weak),
    (Some("new"), &["prayerDiscipline"], "dontKnowStart", Normal),
    (Some("new"), &["growInFaith"], "lackOfMotivation", Weak),
    (Some("growing"), &["understandBible", "growInFaith"], "lackOfMotivation", Normal),
    (Some("growing"), &["closerToGod", "prayerDiscipline"], "lackOfTime", Normal),
    (Some("growing"), &["prayerDiscipline"], "givingUp", Weak),
    (Some("growing"), &["overcomeHabits", "closerToGod"], "lackOfMotivation", Weak),
    (Some("mature"), &["understandBible", "growInFaith"], "lackOfTime", Strong),
    (Some("mature"), &["closerToGod", "prayerDiscipline"], "lackOfMotivation", Normal),
    (Some("mature"), &["overcomeHabits"], "givingUp", Normal),
    (Some("mature"), &["growInFaith"], "dontKnowStart", Strong),
    (
        Some("passionate"),
        &["closerToGod", "prayerDiscipline", "understandBible"],
        "lackOfTime",
        Strong,
    ),
    (Some("passionate"), &["growInFaith", "overcomeHabits"], "lackOfMotivation", Normal),
    (Some("passionate"), &["understandBible"], "dontKnowStart", Strong),
    (Some("passionate"), &["closerToGod", "growInFaith"], "givingUp", Normal),
];

const WELLNESS: &[Row] = &[
    (None, &["physicalHealth"], "lackOfTime", Normal),
    (None, &["physicalHealth", "reduceStress"], "lackOfTime", Weak),
    (None, &["timeManagement"], "dontKnowStart", Normal),
    (None, &["timeManagement", "productivity"], "dontKnowStart", Weak),
    (None, &["reduceStress"], "lackOfMotivation", Weak),
    (None, &["reduceStress", "betterSleep"], "lackOfMotivation", Normal),
    (None, &["productivity"], "lackOfTime", Strong),
    (None, &["betterSleep"], "givingUp", Weak),
    (None, &["physicalHealth", "timeManagement"], "givingUp", Weak),
    (None, &["productivity", "reduceStress"], "lackOfMotivation", Normal),
    (None, &["betterSleep", "physicalHealth"], "lackOfTime", Normal),
    (None, &["timeManagement", "reduceStress"], "dontKnowStart", Weak),
];

const BOTH: &[Row] = &[
    (Some("new"), &["closerToGod", "physicalHealth"], "lackOfTime", Weak),
    (Some("new"), &["prayerDiscipline", "reduceStress"], "lackOfMotivation", Weak),
    (Some("new"), &["understandBible", "timeManagement"], "dontKnowStart", Normal),
    (Some("new"), &["growInFaith", "physicalHealth"], "givingUp", Weak),
    (Some("new"), &["closerToGod", "productivity"], "lackOfTime", Normal),
    (Some("new"), &["prayerDiscipline", "betterSleep"], "lackOfMotivation", Normal),
    (Some("new"), &["understandBible", "reduceStress"], "dontKnowStart", Weak),
    (Some("new"), &["growInFaith", "timeManagement"], "givingUp", Weak),
    (Some("growing"), &["closerToGod", "physicalHealth"], "lackOfTime", Normal),
    (Some("growing"), &["prayerDiscipline", "productivity"], "lackOfMotivation", Weak),
    (Some("growing"), &["understandBible", "reduceStress"], "dontKnowStart", Normal),
    (Some("growing"), &["overcomeHabits", "timeManagement"], "givingUp", Weak),
    (Some("growing"), &["growInFaith", "betterSleep"], "lackOfTime", Normal),
    (Some("growing"), &["closerToGod", "reduceStress"], "lackOfMotivation", Weak),
    (Some("growing"), &["prayerDiscipline", "physicalHealth"], "dontKnowStart", Normal),
    (Some("growing"), &["understandBible", "productivity"], "givingUp", Normal),
    (Some("mature"), &["closerToGod", "physicalHealth", "productivity"], "lackOfTime", Strong),
    (Some("mature"), &["understandBible", "reduceStress"], "lackOfMotivation", Normal),
    (Some("mature"), &["growInFaith", "timeManagement"], "dontKnowStart", Strong),
    (Some("mature"), &["overcomeHabits", "betterSleep"], "givingUp", Weak),
    (
        Some("passionate"),
        &["closerToGod", "prayerDiscipline", "physicalHealth"],
        "lackOfTime",
        Strong,
    ),
    (
        Some("passionate"),
        &["understandBible", "growInFaith", "productivity"],
        "lackOfMotivation",
        Normal,
    ),
    (Some("passionate"), &["closerToGod", "reduceStress"], "dontKnowStart", Strong),
    (Some("passionate"), &["growInFaith", "timeManagement"], "givingUp", Normal),
];

fn expand(intent: Intent, rows: &[Row]) -> impl Iterator<Item = Profile> + '_ {
    rows.iter().map(move |&(maturity, motivations, challenge, support)| {
        let profile =
            Profile::new(intent, motivations.iter().copied(), challenge).with_support(support);
        match maturity {
            Some(m) => profile.with_maturity(m),
            None => profile,
        }
    })
}

/// Every scenario profile, faith-based first, then wellness, then both.
pub fn scenario_matrix() -> Vec<Profile> {
    expand(Intent::FaithBased, FAITH_BASED)
        .chain(expand(Intent::Wellness, WELLNESS))
        .chain(expand(Intent::Both, BOTH))
        .collect()
}
