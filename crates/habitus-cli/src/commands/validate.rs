//! Validation command

use crate::error::{CliError, CliResult};
use crate::output::{print_json, print_success, print_table, OutputFormat};
use colored::*;
use habitus_templates::{GeneratorConfig, Validator};
use serde::Serialize;
use std::path::Path;
use tabled::Tabled;

/// Table row for one finding
#[derive(Debug, Serialize, Tabled)]
struct FindingRow {
    file: String,
    severity: String,
    kind: String,
    message: String,
}

/// Re-check every stored template in a directory
pub fn execute(dir: &Path, config: &GeneratorConfig, format: OutputFormat) -> CliResult<()> {
    let report = Validator::new(config.clone()).validate_directory(dir)?;

    match format {
        OutputFormat::Json => print_json(&report)?,
        OutputFormat::Table => {
            let findings: Vec<FindingRow> = report
                .reports
                .iter()
                .flat_map(|r| {
                    r.violations.iter().map(move |v| FindingRow {
                        file: r.file_name.clone(),
                        severity: format!("{:?}", v.severity),
                        kind: format!("{:?}", v.kind),
                        message: v.message.clone(),
                    })
                })
                .collect();
            if !findings.is_empty() {
                print_table(findings);
            }
            println!(
                "Checked {} templates: {} failed, {} critical findings",
                report.total(),
                if report.failed() > 0 {
                    report.failed().to_string().red()
                } else {
                    report.failed().to_string().green()
                },
                report.critical_count()
            );
        }
    }

    if report.is_clean() {
        if format == OutputFormat::Table {
            print_success("All templates valid");
        }
        Ok(())
    } else {
        Err(CliError::ValidationFailed {
            failed: report.failed(),
            total: report.total(),
        })
    }
}
