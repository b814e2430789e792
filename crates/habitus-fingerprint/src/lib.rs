//! # habitus-fingerprint
//!
//! Derives the cache key a pre-generated template is stored under.
//!
//! The mobile client computes the same key on its own from the same four
//! profile fields, with its runtime's built-in string hash. Both sides must
//! agree bit for bit with no communication: any drift in operation order,
//! truncation or sign conversion turns every lookup into a silent miss.
//!
//! ```
//! use habitus_fingerprint::{fingerprint, fingerprint_key};
//! use habitus_types::{Intent, Profile};
//!
//! let profile = Profile::new(Intent::FaithBased, ["closerToGod"], "lackOfTime")
//!     .with_maturity("new");
//! assert_eq!(fingerprint_key(&profile), "faithBased_new_closerToGod_lackOfTime");
//! assert_eq!(fingerprint(&profile), "1689162142");
//! ```

#![deny(unsafe_code)]
#![warn(rust_2018_idioms)]

mod hash;

pub use hash::string_hash;

use habitus_types::{HabitusError, HabitusResult, Profile};

/// Composite key: `{intent}_{maturity}_{motivations}_{challenge}`.
///
/// An absent maturity contributes an empty segment, and motivations are
/// joined in input order. No other profile field takes part.
pub fn fingerprint_key(profile: &Profile) -> String {
    format!(
        "{}_{}_{}_{}",
        profile.intent,
        profile.maturity().unwrap_or(""),
        profile.motivations.join("_"),
        profile.challenge
    )
}

/// Signed decimal hash of [`fingerprint_key`].
pub fn fingerprint(profile: &Profile) -> String {
    string_hash(&fingerprint_key(profile)).to_string()
}

/// Whether `stored` is the fingerprint of `profile`.
pub fn verify(profile: &Profile, stored: &str) -> bool {
    fingerprint(profile) == stored
}

/// Fail with [`HabitusError::FingerprintMismatch`] unless `stored` is the
/// fingerprint of `profile`.
pub fn check(profile: &Profile, stored: &str) -> HabitusResult<()> {
    let recomputed = fingerprint(profile);
    if recomputed == stored {
        Ok(())
    } else {
        Err(HabitusError::FingerprintMismatch {
            stored: stored.to_string(),
            recomputed,
        })
    }
}
