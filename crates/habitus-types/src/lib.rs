//! # habitus-types
//!
//! Shared data model for the Habitus template pipeline.
//!
//! ## Records
//!
//! - **Habit** - an immutable catalog entry carrying scoring metadata
//!   (priority, motivation matches, challenge fit, support boost, maturity
//!   scaling). Catalog records are defined at build time and never mutated.
//! - **Profile** - the onboarding answers a template is generated for. The
//!   order of `motivations` is significant: it is part of the cache key.
//! - **SelectedHabit** - a catalog habit with its duration adjusted for one
//!   profile, in the shape the mobile client consumes.
//! - **Template** - the persisted record, keyed by its fingerprint.
//!
//! ## Errors
//!
//! [`HabitusError`] models the structural, shortfall and fingerprint error
//! classes shared by every crate in the workspace.

#![deny(unsafe_code)]
#![warn(rust_2018_idioms)]

mod error;
pub mod habit;
pub mod profile;
pub mod template;

pub use error::{HabitusError, HabitusResult};
pub use habit::{Category, Habit, TimeOfDay, DEFAULT_CHALLENGE_FIT, DEFAULT_SUPPORT_BOOST};
pub use profile::{Intent, Profile, SupportLevel};
pub use template::{SelectedHabit, Template};
