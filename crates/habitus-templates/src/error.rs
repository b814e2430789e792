use crate::violation::TemplateViolation;
use habitus_types::HabitusError;
use thiserror::Error;

/// Result type for template operations.
pub type TemplateResult<T> = Result<T, TemplateError>;

/// Template assembly, validation and storage errors.
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error(transparent)]
    Habitus(#[from] HabitusError),

    #[error("template {template_id} rejected with {} violation(s)", .violations.len())]
    Rejected {
        template_id: String,
        violations: Vec<TemplateViolation>,
    },

    #[error("duplicate fingerprint {fingerprint}: {existing} already stored, {duplicate} skipped")]
    DuplicateFingerprint {
        fingerprint: String,
        existing: String,
        duplicate: String,
    },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TemplateError {
    /// Violations behind a rejection, empty for every other error.
    pub fn violations(&self) -> &[TemplateViolation] {
        match self {
            TemplateError::Rejected { violations, .. } => violations,
            _ => &[],
        }
    }

    /// Whether the profile produced too few habits.
    pub fn is_shortfall(&self) -> bool {
        matches!(
            self,
            TemplateError::Habitus(HabitusError::SelectionShortfall { .. })
        )
    }

    /// Whether a stored fingerprint disagreed with its recomputed value.
    pub fn is_fingerprint_mismatch(&self) -> bool {
        matches!(self, TemplateError::Habitus(e) if e.is_fingerprint_mismatch())
    }
}
