//! Generation command

use crate::error::{CliError, CliResult};
use crate::output::{
    print_error, print_json, print_success, print_table, print_warning, OutputFormat,
};
use habitus_catalog::HabitCatalog;
use habitus_templates::{
    scenario_matrix, BatchReport, GeneratorConfig, TemplateAssembler, TemplateStore,
};
use habitus_types::{Profile, Template};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tabled::Tabled;

/// A profile file holds one profile or a list of them
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ProfileFile {
    One(Profile),
    Many(Vec<Profile>),
}

/// Read profiles from a JSON file
pub fn load_profiles(path: &Path) -> CliResult<Vec<Profile>> {
    let contents = std::fs::read_to_string(path)?;
    let profiles = match serde_json::from_str(&contents)? {
        ProfileFile::One(profile) => vec![profile],
        ProfileFile::Many(profiles) => profiles,
    };
    if profiles.is_empty() {
        return Err(CliError::InvalidInput(format!(
            "{} holds no profiles",
            path.display()
        )));
    }
    Ok(profiles)
}

/// Table row for a generated template
#[derive(Debug, Serialize, Tabled)]
struct TemplateRow {
    fingerprint: String,
    template_id: String,
    habits: usize,
    minutes: u32,
}

impl From<&Template> for TemplateRow {
    fn from(template: &Template) -> Self {
        Self {
            fingerprint: template.fingerprint.clone(),
            template_id: template.template_id.clone(),
            habits: template.habits.len(),
            minutes: template.total_minutes(),
        }
    }
}

#[derive(Debug, Serialize)]
struct GenerateOutput {
    written: usize,
    rejected: Vec<String>,
    collisions: Vec<String>,
}

/// Generate templates and write them to `out`
pub fn execute(
    profiles: Option<&Path>,
    out: &Path,
    parallel: bool,
    catalog: &HabitCatalog,
    config: &GeneratorConfig,
    format: OutputFormat,
) -> CliResult<()> {
    let profiles = match profiles {
        Some(path) => load_profiles(path)?,
        None => scenario_matrix(),
    };

    let assembler = TemplateAssembler::new(catalog, config.clone())?;
    let report = BatchReport::generate(&assembler, &profiles, parallel);
    TemplateStore::new(out).write_all(&report.accepted)?;

    let rejected: Vec<String> = report
        .rejected
        .iter()
        .map(|r| format!("{}: {}", habitus_templates::template_id(&r.profile), r.error))
        .collect();
    let collisions: Vec<String> = report
        .collisions
        .iter()
        .map(|c| format!("{} kept {}, dropped {}", c.fingerprint, c.kept, c.dropped))
        .collect();

    match format {
        OutputFormat::Json => print_json(&GenerateOutput {
            written: report.accepted.len(),
            rejected: rejected.clone(),
            collisions: collisions.clone(),
        })?,
        OutputFormat::Table => {
            print_table(report.accepted.iter().map(TemplateRow::from).collect());
            for collision in &collisions {
                print_warning(&format!("Fingerprint collision: {collision}"));
            }
            for rejection in &rejected {
                print_error(&format!("Rejected {rejection}"));
            }
            print_success(&format!(
                "Wrote {} templates to {}",
                report.accepted.len(),
                out.display()
            ));
        }
    }

    if rejected.is_empty() {
        Ok(())
    } else {
        Err(CliError::Rejected {
            rejected: rejected.len(),
        })
    }
}
