//! Which onboarding answers a template set covers.

use habitus_catalog::{CHALLENGES, MATURITY_LEVELS};
use habitus_types::{Intent, SupportLevel, Template};
use serde::Serialize;
use std::collections::BTreeMap;

/// Template counts per profile dimension.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Coverage {
    pub total: usize,
    pub intents: BTreeMap<String, usize>,
    pub maturities: BTreeMap<String, usize>,
    pub challenges: BTreeMap<String, usize>,
    pub support_levels: BTreeMap<String, usize>,
    pub motivations: BTreeMap<String, usize>,
}

impl Coverage {
    /// Known answers with no template, as `dimension:value`.
    pub fn uncovered(&self) -> Vec<String> {
        let mut gaps = Vec::new();
        gaps_in("intent", Intent::ALL.iter().map(Intent::as_str), &self.intents, &mut gaps);
        gaps_in("maturity", MATURITY_LEVELS.iter().copied(), &self.maturities, &mut gaps);
        gaps_in("challenge", CHALLENGES.iter().copied(), &self.challenges, &mut gaps);
        gaps_in(
            "supportLevel",
            SupportLevel::ALL.iter().map(SupportLevel::as_str),
            &self.support_levels,
            &mut gaps,
        );
        gaps
    }
}

fn gaps_in<'a>(
    dimension: &str,
    known: impl IntoIterator<Item = &'a str>,
    seen: &BTreeMap<String, usize>,
    gaps: &mut Vec<String>,
) {
    gaps.extend(
        known
            .into_iter()
            .filter(|value| !seen.contains_key(*value))
            .map(|value| format!("{dimension}:{value}")),
    );
}

pub fn coverage(templates: &[Template]) -> Coverage {
    let mut cov = Coverage {
        total: templates.len(),
        ..Coverage::default()
    };
    let bump = |map: &mut BTreeMap<String, usize>, key: &str| {
        *map.entry(key.to_string()).or_insert(0) += 1;
    };
    for template in templates {
        let profile = &template.profile;
        bump(&mut cov.intents, profile.intent.as_str());
        bump(&mut cov.maturities, profile.maturity().unwrap_or("none"));
        bump(&mut cov.challenges, &profile.challenge);
        bump(&mut cov.support_levels, profile.support_level.as_str());
        for motivation in &profile.motivations {
            bump(&mut cov.motivations, motivation);
        }
    }
    cov
}
