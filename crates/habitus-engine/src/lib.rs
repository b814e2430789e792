//! # habitus-engine
//!
//! Deterministic habit selection for a profile.
//!
//! The pipeline is:
//!
//! 1. take the catalog pool for the profile's intent,
//! 2. apply the maturity eligibility rule ([`filter_by_maturity`]),
//! 3. score and stable-sort the rest ([`score`], [`rank`]),
//! 4. walk the per-intent [`quota_table`] taking the best unused habits per category,
//! 5. truncate to the desired count,
//! 6. adjust each duration: maturity scaling first, then the challenge rule,
//!    then the hard floor ([`adjust_duration`]).
//!
//! Everything here is a pure function of the catalog and the profile. The
//! selector never fails; a short selection is for the caller to reject.

#![deny(unsafe_code)]
#![warn(rust_2018_idioms)]

pub mod duration;
pub mod quota;
pub mod scorer;
pub mod selector;

pub use duration::{adjust_duration, adjust_duration_with_floor, MIN_TARGET_MINUTES};
pub use quota::{category_ceiling, quota_table, QuotaCap, QuotaRule};
pub use scorer::{filter_by_maturity, rank, score, ScoredHabit, MOTIVATION_BONUS};
pub use selector::HabitSelector;
