//! Template Assembler - turns a profile into an accepted template
//!
//! The assembler validates the profile, runs the selector and the
//! fingerprint generator, and gates the result on the structural checks.
//! A template that fails the gate is rejected, never repaired.

use crate::config::GeneratorConfig;
use crate::error::{TemplateError, TemplateResult};
use crate::validation::check_structure;
use habitus_catalog::{is_known_motivation, HabitCatalog};
use habitus_engine::HabitSelector;
use habitus_types::{HabitusError, Profile, Template};
use tracing::{debug, info, warn};

/// Human-readable template id.
///
/// `{intent}_{maturity or "none"}_{challenge}_{supportLevel}_{motivations}`,
/// where only the first two motivations take part, sorted.
pub fn template_id(profile: &Profile) -> String {
    let mut leading: Vec<&str> = profile
        .motivations
        .iter()
        .take(2)
        .map(String::as_str)
        .collect();
    leading.sort_unstable();
    format!(
        "{}_{}_{}_{}_{}",
        profile.intent,
        profile.maturity().unwrap_or("none"),
        profile.challenge,
        profile.support_level,
        leading.join("_")
    )
}

/// Builds templates from profiles
#[derive(Clone, Debug)]
pub struct TemplateAssembler<'c> {
    selector: HabitSelector<'c>,
    config: GeneratorConfig,
}

impl<'c> TemplateAssembler<'c> {
    pub fn new(catalog: &'c HabitCatalog, config: GeneratorConfig) -> TemplateResult<Self> {
        config.validate()?;
        let selector = HabitSelector::new(catalog)
            .with_counts(config.default_count, config.weak_support_count)
            .with_min_minutes(config.min_target_minutes);
        Ok(Self { selector, config })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn selector(&self) -> &HabitSelector<'c> {
        &self.selector
    }

    /// Assemble and gate one template.
    pub fn assemble(&self, profile: &Profile) -> TemplateResult<Template> {
        profile.validate()?;
        let template_id = template_id(profile);
        for motivation in profile.motivations.iter().filter(|m| !is_known_motivation(m)) {
            debug!(template_id = %template_id, motivation = %motivation, "Unknown motivation");
        }

        let habits = self.selector.select(profile);
        if habits.len() < self.config.min_habits {
            warn!(
                template_id = %template_id,
                found = habits.len(),
                required = self.config.min_habits,
                "Selection shortfall"
            );
            return Err(HabitusError::SelectionShortfall {
                template_id,
                found: habits.len(),
                required: self.config.min_habits,
            }
            .into());
        }

        let template = Template {
            template_id,
            fingerprint: habitus_fingerprint::fingerprint(profile),
            version: self.config.version.clone(),
            generated_by: self.config.generated_by.clone(),
            profile: profile.clone(),
            habits,
        };

        let violations = check_structure(&template, &self.config);
        if !violations.is_empty() {
            warn!(
                template_id = %template.template_id,
                violations = violations.len(),
                "Template rejected"
            );
            return Err(TemplateError::Rejected {
                template_id: template.template_id,
                violations,
            });
        }

        info!(
            template_id = %template.template_id,
            fingerprint = %template.fingerprint,
            habits = template.habits.len(),
            "Template assembled"
        );
        Ok(template)
    }
}

impl TemplateAssembler<'static> {
    /// Assembler over the built-in catalog.
    pub fn builtin(config: GeneratorConfig) -> TemplateResult<Self> {
        Self::new(habitus_catalog::builtin()?, config)
    }
}
