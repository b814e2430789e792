//! Fixed hash vectors captured from the client runtime.
//!
//! Any failure here means cache lookups from the mobile client will miss.

use habitus_fingerprint::{fingerprint, fingerprint_key, string_hash};
use habitus_types::{Intent, Profile, SupportLevel};

const VECTORS: &[(&str, i32)] = &[
    ("", 0),
    ("a", -902917054),
    ("hello", -922937317),
    ("ñ", 394112695),
    ("faithBased_new_closerToGod_lackOfTime", 1689162142),
    ("faithBased_new_closerToGod_prayerDiscipline_lackOfTime", -188740676),
    ("faithBased_new_prayerDiscipline_closerToGod_lackOfTime", -1946710283),
    ("wellness__physicalHealth_lackOfMotivation", 2051870800),
    ("wellness__physicalHealth_reduceStress_dontKnowStart", 2117325617),
    ("wellness__reduceStress_lackOfMotivation", 142490031),
    (
        "both_passionate_closerToGod_prayerDiscipline_physicalHealth_lackOfTime",
        1363693368,
    ),
    ("both_growing_closerToGod_timeManagement_dontKnowStart", -1777248532),
];

#[test]
fn hash_matches_vector_table() {
    for (input, expected) in VECTORS {
        assert_eq!(string_hash(input), *expected, "hash of {input:?}");
    }
}

#[test]
fn onboarding_scenario_fingerprint() {
    let profile = Profile::new(Intent::FaithBased, ["closerToGod"], "lackOfTime")
        .with_maturity("new")
        .with_support(SupportLevel::Weak);

    assert_eq!(fingerprint_key(&profile), "faithBased_new_closerToGod_lackOfTime");
    assert_eq!(
        fingerprint(&profile),
        string_hash("faithBased_new_closerToGod_lackOfTime").to_string()
    );
    assert_eq!(fingerprint(&profile), "1689162142");
}

#[test]
fn reversed_motivations_give_different_fingerprints() {
    let forward = Profile::new(
        Intent::FaithBased,
        ["closerToGod", "prayerDiscipline"],
        "lackOfTime",
    )
    .with_maturity("new");
    let reversed = Profile::new(
        Intent::FaithBased,
        ["prayerDiscipline", "closerToGod"],
        "lackOfTime",
    )
    .with_maturity("new");

    assert_eq!(fingerprint(&forward), "-188740676");
    assert_eq!(fingerprint(&reversed), "-1946710283");
}

#[test]
fn empty_maturity_matches_absent_maturity() {
    let absent = Profile::new(Intent::Wellness, ["reduceStress"], "lackOfMotivation");
    let empty = absent.clone().with_maturity("");
    assert_eq!(fingerprint(&absent), fingerprint(&empty));
    assert_eq!(fingerprint(&absent), "142490031");
}
