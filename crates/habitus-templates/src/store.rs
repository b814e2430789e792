//! File-backed template store.
//!
//! One pretty-printed JSON document per template, named
//! `{fingerprint}.json`, in a single directory.

use crate::error::{TemplateError, TemplateResult};
use habitus_types::{HabitusError, Template};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Clone, Debug)]
pub struct TemplateStore {
    root: PathBuf,
}

impl TemplateStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, fingerprint: &str) -> PathBuf {
        self.root.join(format!("{fingerprint}.json"))
    }

    /// Write one template, replacing any file with the same fingerprint.
    pub fn write(&self, template: &Template) -> TemplateResult<PathBuf> {
        fs::create_dir_all(&self.root)?;
        let path = self.root.join(template.file_name());
        let json = serde_json::to_string_pretty(template)?;
        fs::write(&path, json)?;
        debug!(
            template_id = %template.template_id,
            path = %path.display(),
            "Template written"
        );
        Ok(path)
    }

    /// Write a set of templates. Two templates sharing a fingerprint would
    /// overwrite each other, so the set is refused before anything is written.
    pub fn write_all(&self, templates: &[Template]) -> TemplateResult<Vec<PathBuf>> {
        let mut seen: HashMap<&str, &str> = HashMap::new();
        for template in templates {
            if let Some(existing) = seen.insert(&template.fingerprint, &template.template_id) {
                return Err(TemplateError::DuplicateFingerprint {
                    fingerprint: template.fingerprint.clone(),
                    existing: existing.to_string(),
                    duplicate: template.template_id.clone(),
                });
            }
        }
        templates.iter().map(|t| self.write(t)).collect()
    }

    /// Look up the template cached under `fingerprint`.
    ///
    /// The stored fingerprint field and the recomputed one must both equal
    /// the requested key; otherwise the lookup fails with
    /// [`HabitusError::FingerprintMismatch`] and nothing is corrected.
    pub fn read(&self, fingerprint: &str) -> TemplateResult<Template> {
        let template = Self::read_path(&self.path_for(fingerprint))?;
        if template.fingerprint != fingerprint {
            return Err(HabitusError::FingerprintMismatch {
                stored: template.fingerprint,
                recomputed: fingerprint.to_string(),
            }
            .into());
        }
        habitus_fingerprint::check(&template.profile, fingerprint)?;
        Ok(template)
    }

    pub fn read_path(path: &Path) -> TemplateResult<Template> {
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Stored `.json` files, sorted by file name.
    pub fn paths(&self) -> TemplateResult<Vec<PathBuf>> {
        let mut paths = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
                paths.push(path);
            }
        }
        paths.sort();
        Ok(paths)
    }

    /// Every stored template, sorted by file name.
    pub fn read_all(&self) -> TemplateResult<Vec<Template>> {
        self.paths()?.iter().map(|p| Self::read_path(p)).collect()
    }

    /// Raw documents keyed by file name, for validation. A file that is not
    /// JSON yields its parse error in place of a document.
    pub fn documents(
        &self,
    ) -> TemplateResult<Vec<(String, Result<serde_json::Value, serde_json::Error>)>> {
        let mut documents = Vec::new();
        for path in self.paths()? {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let text = fs::read_to_string(&path)?;
            documents.push((name, serde_json::from_str(&text)));
        }
        Ok(documents)
    }
}
