//! Batch generation over many profiles.
//!
//! Profiles are independent, so the assembler is mapped over them in
//! parallel; the catalog is only ever read. Results come back in input
//! order and one failure never stops the batch.

use crate::assembler::TemplateAssembler;
use crate::error::{TemplateError, TemplateResult};
use habitus_types::{Profile, Template};
use rayon::prelude::*;
use std::collections::HashMap;
use tracing::{info, warn};

/// Assemble every profile, in parallel. Results keep input order.
pub fn generate_batch(
    assembler: &TemplateAssembler<'_>,
    profiles: &[Profile],
) -> Vec<TemplateResult<Template>> {
    profiles
        .par_iter()
        .map(|profile| assembler.assemble(profile))
        .collect()
}

/// Assemble every profile on the calling thread.
pub fn generate_sequential(
    assembler: &TemplateAssembler<'_>,
    profiles: &[Profile],
) -> Vec<TemplateResult<Template>> {
    profiles.iter().map(|p| assembler.assemble(p)).collect()
}

/// A profile the assembler refused.
#[derive(Debug)]
pub struct Rejection {
    pub profile: Profile,
    pub error: TemplateError,
}

/// Two profiles that map to one cache key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Collision {
    pub fingerprint: String,
    /// Template kept under the key
    pub kept: String,
    /// Template dropped in favour of `kept`
    pub dropped: String,
}

/// Outcome of a batch, ready to persist.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Accepted templates with unique fingerprints, in input order
    pub accepted: Vec<Template>,
    pub rejected: Vec<Rejection>,
    pub collisions: Vec<Collision>,
}

impl BatchReport {
    /// Sort batch results into accepted, rejected and colliding. The first
    /// template for a fingerprint in input order wins.
    pub fn collect(profiles: &[Profile], results: Vec<TemplateResult<Template>>) -> Self {
        let mut report = BatchReport::default();
        let mut owners: HashMap<String, String> = HashMap::new();

        for (profile, result) in profiles.iter().zip(results) {
            match result {
                Ok(template) => {
                    if let Some(kept) = owners.get(&template.fingerprint) {
                        warn!(
                            fingerprint = %template.fingerprint,
                            kept = %kept,
                            dropped = %template.template_id,
                            "Fingerprint collision"
                        );
                        report.collisions.push(Collision {
                            fingerprint: template.fingerprint.clone(),
                            kept: kept.clone(),
                            dropped: template.template_id,
                        });
                    } else {
                        owners.insert(template.fingerprint.clone(), template.template_id.clone());
                        report.accepted.push(template);
                    }
                }
                Err(error) => report.rejected.push(Rejection {
                    profile: profile.clone(),
                    error,
                }),
            }
        }

        info!(
            accepted = report.accepted.len(),
            rejected = report.rejected.len(),
            collisions = report.collisions.len(),
            "Batch finished"
        );
        report
    }

    /// Generate and collect in one step.
    pub fn generate(
        assembler: &TemplateAssembler<'_>,
        profiles: &[Profile],
        parallel: bool,
    ) -> Self {
        let results = if parallel {
            generate_batch(assembler, profiles)
        } else {
            generate_sequential(assembler, profiles)
        };
        Self::collect(profiles, results)
    }

    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty() && self.collisions.is_empty()
    }
}
