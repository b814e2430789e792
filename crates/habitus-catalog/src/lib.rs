//! # habitus-catalog
//!
//! The static, versioned registry of candidate habits.
//!
//! The built-in catalog is embedded at compile time and parsed once per
//! process; afterwards it is read-only shared state, so concurrent readers
//! need no locking. External catalogs can be loaded with
//! [`HabitCatalog::from_json`] or [`HabitCatalog::from_path`]; both run the
//! structural checks before the catalog can be used.

#![deny(unsafe_code)]
#![warn(rust_2018_idioms)]

mod catalog;
pub mod vocabulary;

pub use catalog::{builtin, HabitCatalog};
pub use vocabulary::{
    is_known_motivation, CHALLENGES, FAITH_MOTIVATIONS, MATURITY_LEVELS, WELLNESS_MOTIVATIONS,
};
