//! Loading external catalogs from disk.

use habitus_catalog::{builtin, HabitCatalog};
use habitus_types::{Category, HabitusError};
use std::io::Write;

#[test]
fn external_catalog_round_trips_through_a_file() {
    let json = serde_json::json!({
        "version": "test-1",
        "spiritual": [{
            "id": "s1", "nameKey": "pray", "category": "spiritual", "emoji": "🙏",
            "base_duration": 10, "priority": 90,
            "maturity_multiplier": {"new": 0.5},
            "challenge_fit": {"lackOfTime": 1.0}
        }],
        "relational": [{
            "id": "r1", "nameKey": "call", "category": "relational", "emoji": "📞",
            "base_duration": 15, "priority": 60,
            "support_boost": {"weak": 2.0}
        }]
    });

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{json}").unwrap();

    let catalog = HabitCatalog::from_path(file.path()).unwrap();
    assert_eq!(catalog.version(), "test-1");
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.by_category(Category::Relational).count(), 1);
}

#[test]
fn missing_file_is_a_catalog_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = HabitCatalog::from_path(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, HabitusError::InvalidCatalog(_)));
}

#[test]
fn malformed_file_is_a_catalog_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{{ not json").unwrap();
    assert!(HabitCatalog::from_path(file.path()).is_err());
}

#[test]
fn builtin_durations_and_weights_are_sane() {
    let catalog = builtin().unwrap();
    for habit in catalog.habits() {
        assert!(habit.base_duration_minutes >= 10, "{}", habit.id);
        assert!(habit.priority > 0, "{}", habit.id);
    }
    let relational_boosted = catalog
        .by_category(Category::Relational)
        .all(|h| h.support_boost.contains_key("weak"));
    assert!(relational_boosted);
}
