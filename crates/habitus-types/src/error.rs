use thiserror::Error;

/// Result type for Habitus operations.
pub type HabitusResult<T> = Result<T, HabitusError>;

/// Errors shared across the template pipeline.
#[derive(Debug, Error)]
pub enum HabitusError {
    #[error("invalid profile: {0}")]
    InvalidProfile(String),

    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("unknown {kind}: {value}")]
    UnknownValue { kind: &'static str, value: String },

    #[error(
        "selection shortfall for {template_id}: {found} habits selected, at least {required} required"
    )]
    SelectionShortfall {
        template_id: String,
        found: usize,
        required: usize,
    },

    #[error("fingerprint mismatch: stored {stored}, recomputed {recomputed}")]
    FingerprintMismatch { stored: String, recomputed: String },
}

impl HabitusError {
    /// Whether the error signals a silent cache-lookup break.
    pub fn is_fingerprint_mismatch(&self) -> bool {
        matches!(self, HabitusError::FingerprintMismatch { .. })
    }
}
