//! # habitus-templates
//!
//! Turns profiles into persisted habit templates and re-checks them.
//!
//! - [`TemplateAssembler`] validates a profile, selects habits, computes the
//!   fingerprint and gates the result on structural checks. Failing
//!   templates are rejected, not repaired.
//! - [`Validator`] re-reads stored templates and reports every finding per
//!   file: missing fields, habit counts, durations, category balance and the
//!   three-way fingerprint check (file name, stored value, recomputed value).
//! - [`TemplateStore`] keeps one `{fingerprint}.json` file per template.
//! - [`generate_batch`] and [`BatchReport`] run the assembler over many
//!   profiles, such as the fixed [`scenario_matrix`], in parallel.

#![deny(unsafe_code)]
#![warn(rust_2018_idioms)]

pub mod assembler;
pub mod batch;
pub mod config;
pub mod coverage;
mod error;
pub mod matrix;
pub mod store;
pub mod validation;
pub mod validator;
mod violation;

pub use assembler::{template_id, TemplateAssembler};
pub use batch::{generate_batch, generate_sequential, BatchReport, Collision, Rejection};
pub use config::GeneratorConfig;
pub use coverage::{coverage, Coverage};
pub use error::{TemplateError, TemplateResult};
pub use matrix::scenario_matrix;
pub use store::TemplateStore;
pub use validation::{check_invariants, check_structure, validate_template};
pub use validator::{TemplateReport, ValidationReport, Validator};
pub use violation::{TemplateViolation, ViolationKind, ViolationSeverity};
