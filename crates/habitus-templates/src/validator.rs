//! Batch validator for stored templates.
//!
//! Works on raw documents so that missing fields are reported as findings
//! instead of failing deserialization. Each document gets its own report;
//! nothing is corrected.

use crate::config::GeneratorConfig;
use crate::error::TemplateResult;
use crate::store::TemplateStore;
use crate::validation::validate_template;
use crate::violation::{TemplateViolation, ViolationKind, ViolationSeverity};
use habitus_types::Template;
use serde::Serialize;
use serde_json::Value;
use std::path::Path;
use tracing::{info, warn};

const TEMPLATE_FIELDS: &[&str] = &["template_id", "fingerprint", "version", "profile", "habits"];
const PROFILE_FIELDS: &[&str] = &[
    "intent",
    "motivations",
    "challenge",
    "supportLevel",
    "spiritualMaturity",
];
const HABIT_FIELDS: &[&str] = &[
    "id",
    "nameKey",
    "category",
    "emoji",
    "target_minutes",
    "notification_key",
];

/// Findings for one stored template.
#[derive(Clone, Debug, Serialize)]
pub struct TemplateReport {
    pub file_name: String,
    pub template_id: Option<String>,
    pub fingerprint: Option<String>,
    pub violations: Vec<TemplateViolation>,
}

impl TemplateReport {
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn max_severity(&self) -> Option<ViolationSeverity> {
        self.violations.iter().map(|v| v.severity).max()
    }
}

/// Findings for a set of stored templates.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ValidationReport {
    pub reports: Vec<TemplateReport>,
}

impl ValidationReport {
    pub fn total(&self) -> usize {
        self.reports.len()
    }

    pub fn failed(&self) -> usize {
        self.reports.iter().filter(|r| !r.is_clean()).count()
    }

    pub fn is_clean(&self) -> bool {
        self.reports.iter().all(TemplateReport::is_clean)
    }

    pub fn violation_count(&self) -> usize {
        self.reports.iter().map(|r| r.violations.len()).sum()
    }

    pub fn critical_count(&self) -> usize {
        self.reports
            .iter()
            .flat_map(|r| &r.violations)
            .filter(|v| v.severity == ViolationSeverity::Critical)
            .count()
    }
}

fn missing(found: &mut Vec<TemplateViolation>, object: Option<&Value>, fields: &[&str], at: &str) {
    let Some(object) = object.and_then(Value::as_object) else {
        found.push(TemplateViolation::new(
            ViolationKind::Malformed,
            ViolationSeverity::Violation,
            format!("{at} is not an object"),
        ));
        return;
    };
    for field in fields {
        if !object.contains_key(*field) {
            found.push(TemplateViolation::new(
                ViolationKind::MissingField,
                ViolationSeverity::Violation,
                format!("{at} is missing {field}"),
            ));
        }
    }
}

/// Re-checks stored templates
#[derive(Clone, Debug, Default)]
pub struct Validator {
    config: GeneratorConfig,
}

impl Validator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Validate one raw document stored under `file_name`.
    pub fn validate_document(&self, file_name: &str, document: &Value) -> TemplateReport {
        let text = |key: &str| document.get(key).and_then(Value::as_str).map(String::from);
        let mut report = TemplateReport {
            file_name: file_name.to_string(),
            template_id: text("template_id"),
            fingerprint: text("fingerprint"),
            violations: Vec::new(),
        };

        let found = &mut report.violations;
        missing(found, Some(document), TEMPLATE_FIELDS, "template");
        if let Some(profile) = document.get("profile") {
            missing(found, Some(profile), PROFILE_FIELDS, "profile");
        }
        if let Some(habits) = document.get("habits") {
            match habits.as_array() {
                Some(habits) => {
                    for (i, habit) in habits.iter().enumerate() {
                        missing(found, Some(habit), HABIT_FIELDS, &format!("habit #{i}"));
                    }
                }
                None => found.push(TemplateViolation::new(
                    ViolationKind::Malformed,
                    ViolationSeverity::Violation,
                    "habits is not an array",
                )),
            }
        }
        if !found.is_empty() {
            return self.finish(report);
        }

        let template: Template = match serde_json::from_value(document.clone()) {
            Ok(template) => template,
            Err(e) => {
                found.push(TemplateViolation::new(
                    ViolationKind::Malformed,
                    ViolationSeverity::Violation,
                    e.to_string(),
                ));
                return self.finish(report);
            }
        };

        let stem = file_name.strip_suffix(".json").unwrap_or(file_name);
        if stem != template.fingerprint {
            found.push(TemplateViolation::fingerprint(format!(
                "file name {file_name} does not match stored fingerprint {}",
                template.fingerprint
            )));
        }
        found.extend(validate_template(&template, &self.config));
        self.finish(report)
    }

    fn finish(&self, report: TemplateReport) -> TemplateReport {
        for violation in &report.violations {
            warn!(
                file = %report.file_name,
                severity = ?violation.severity,
                kind = ?violation.kind,
                "{}",
                violation.message
            );
        }
        report
    }

    pub fn validate_documents<'a>(
        &self,
        documents: impl IntoIterator<Item = (&'a str, &'a Value)>,
    ) -> ValidationReport {
        let reports = documents
            .into_iter()
            .map(|(name, doc)| self.validate_document(name, doc))
            .collect();
        ValidationReport { reports }
    }

    /// Validate in-memory templates as if stored under their own file names.
    pub fn validate_templates(&self, templates: &[Template]) -> TemplateResult<ValidationReport> {
        let mut reports = Vec::with_capacity(templates.len());
        for template in templates {
            let document = serde_json::to_value(template)?;
            reports.push(self.validate_document(&template.file_name(), &document));
        }
        Ok(ValidationReport { reports })
    }

    /// Validate every `.json` file in a directory. Unreadable JSON is a
    /// finding for that file, not an error for the run.
    pub fn validate_directory(&self, dir: impl AsRef<Path>) -> TemplateResult<ValidationReport> {
        let store = TemplateStore::new(dir.as_ref());
        let mut reports = Vec::new();
        for (name, parsed) in store.documents()? {
            let report = match parsed {
                Ok(document) => self.validate_document(&name, &document),
                Err(e) => self.finish(TemplateReport {
                    file_name: name,
                    template_id: None,
                    fingerprint: None,
                    violations: vec![TemplateViolation::new(
                        ViolationKind::Malformed,
                        ViolationSeverity::Violation,
                        format!("not valid JSON: {e}"),
                    )],
                }),
            };
            reports.push(report);
        }
        let report = ValidationReport { reports };
        info!(
            dir = %dir.as_ref().display(),
            total = report.total(),
            failed = report.failed(),
            "Validation finished"
        );
        Ok(report)
    }
}
