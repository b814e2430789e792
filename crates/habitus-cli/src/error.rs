//! CLI error types

use habitus_templates::TemplateError;
use habitus_types::HabitusError;
use thiserror::Error;

/// CLI error types
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Catalog or profile error
    #[error(transparent)]
    Habitus(#[from] HabitusError),

    /// Template generation or storage error
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// Stored templates failed validation
    #[error("Validation failed: {failed} of {total} templates have findings")]
    ValidationFailed { failed: usize, total: usize },

    /// Profiles rejected during generation
    #[error("Generation incomplete: {rejected} profile(s) rejected")]
    Rejected { rejected: usize },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
