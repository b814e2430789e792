//! Coverage command

use crate::error::CliResult;
use crate::output::{
    print_heading, print_json, print_success, print_table, print_warning, OutputFormat,
};
use habitus_templates::{coverage, TemplateStore};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;
use tabled::Tabled;

#[derive(Debug, Serialize, Tabled)]
struct CoverageRow {
    dimension: &'static str,
    value: String,
    templates: usize,
}

fn rows<'a>(
    dimension: &'static str,
    counts: &'a BTreeMap<String, usize>,
) -> impl Iterator<Item = CoverageRow> + 'a {
    counts.iter().map(move |(value, templates)| CoverageRow {
        dimension,
        value: value.clone(),
        templates: *templates,
    })
}

/// Report which onboarding answers the stored templates cover
pub fn execute(dir: &Path, format: OutputFormat) -> CliResult<()> {
    let templates = TemplateStore::new(dir).read_all()?;
    let cov = coverage(&templates);

    if format == OutputFormat::Json {
        return print_json(&cov);
    }

    print_heading(&format!("{} templates in {}", cov.total, dir.display()));
    let table: Vec<CoverageRow> = rows("intent", &cov.intents)
        .chain(rows("maturity", &cov.maturities))
        .chain(rows("challenge", &cov.challenges))
        .chain(rows("supportLevel", &cov.support_levels))
        .chain(rows("motivation", &cov.motivations))
        .collect();
    print_table(table);

    let gaps = cov.uncovered();
    if gaps.is_empty() {
        print_success("Every known answer is covered");
    } else {
        print_warning(&format!("Uncovered: {}", gaps.join(", ")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_carry_dimension_and_counts() {
        let counts = BTreeMap::from([("both".to_string(), 2), ("wellness".to_string(), 1)]);
        let table: Vec<CoverageRow> = rows("intent", &counts).collect();
        assert_eq!(table.len(), 2);
        assert_eq!(table[0].dimension, "intent");
        assert_eq!(table[0].value, "both");
        assert_eq!(table[1].templates, 1);
    }
}
