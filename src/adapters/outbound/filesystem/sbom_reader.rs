use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::licensing::domain::{Component, ComponentKey, LicenseDeclaration, UNKNOWN};
use crate::shared::error::ReportError;
use crate::shared::Result;

/// CycloneDX-shaped SBOM document, reduced to the fields this tool reads.
#[derive(Debug, Deserialize)]
struct SbomDocument {
    #[serde(default)]
    components: Vec<RawComponent>,
}

#[derive(Debug, Deserialize)]
struct RawComponent {
    #[serde(default)]
    group: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    version: Option<String>,
    #[serde(default)]
    licenses: Vec<RawLicenseChoice>,
    #[serde(default, rename = "externalReferences")]
    external_references: Vec<RawExternalReference>,
}

/// CycloneDX license choice: either a `license` object or an `expression`.
#[derive(Debug, Deserialize)]
struct RawLicenseChoice {
    #[serde(default)]
    license: Option<RawLicense>,
    #[serde(default)]
    expression: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawLicense {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawExternalReference {
    #[serde(rename = "type", default)]
    ref_type: Option<String>,
    #[serde(default)]
    url: Option<String>,
}

/// SbomDirectoryReader adapter for loading SBOM documents off disk
///
/// Reads every `*.json` file in the SBOM directory (non-recursive, sorted
/// by filename so runs are deterministic). A malformed document is skipped
/// with a console warning; only a missing or unreadable directory is fatal,
/// since no report at all can be produced then.
pub struct SbomDirectoryReader;

impl SbomDirectoryReader {
    pub fn new() -> Self {
        Self
    }

    /// Reads all SBOM documents and returns their components in document
    /// order, not yet deduplicated.
    pub fn read_components(&self, dir: &Path) -> Result<Vec<Component>> {
        if !dir.exists() {
            return Err(ReportError::SbomDirectoryNotFound {
                path: dir.to_path_buf(),
                suggestion: "Pass --sboms with the directory containing your SBOM JSON files"
                    .to_string(),
            }
            .into());
        }

        let entries = std::fs::read_dir(dir).map_err(|e| ReportError::SbomDirectoryUnreadable {
            path: dir.to_path_buf(),
            details: e.to_string(),
        })?;

        let mut files: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file()
                    && path
                        .extension()
                        .map(|ext| ext.eq_ignore_ascii_case("json"))
                        .unwrap_or(false)
            })
            .collect();
        files.sort();

        let mut components = Vec::new();
        for file in &files {
            match self.read_document(file) {
                Ok(mut extracted) => components.append(&mut extracted),
                Err(e) => {
                    eprintln!(
                        "⚠️  Warning: Skipping SBOM file {}: {}",
                        file.display(),
                        e
                    );
                }
            }
        }

        Ok(components)
    }

    fn read_document(&self, path: &Path) -> Result<Vec<Component>> {
        let content = std::fs::read_to_string(path).map_err(|e| ReportError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        let document: SbomDocument = serde_json::from_str(&content)?;

        Ok(document
            .components
            .into_iter()
            .map(convert_component)
            .collect())
    }
}

fn convert_component(raw: RawComponent) -> Component {
    let key = ComponentKey::new(
        raw.group.filter(|s| !s.is_empty()).unwrap_or_else(|| UNKNOWN.to_string()),
        raw.name.filter(|s| !s.is_empty()).unwrap_or_else(|| UNKNOWN.to_string()),
        raw.version.filter(|s| !s.is_empty()).unwrap_or_else(|| UNKNOWN.to_string()),
    );

    let declarations = raw
        .licenses
        .into_iter()
        .map(convert_declaration)
        .collect();

    let vcs_url = raw
        .external_references
        .into_iter()
        .find(|r| r.ref_type.as_deref() == Some("vcs"))
        .and_then(|r| r.url);

    Component::new(key, declarations, vcs_url)
}

/// Maps one CycloneDX license choice onto its resolution shape: an
/// `expression` string, an object with an SPDX id, or a bare name with no
/// SPDX typing at all.
fn convert_declaration(raw: RawLicenseChoice) -> LicenseDeclaration {
    if let Some(expression) = raw.expression.filter(|s| !s.is_empty()) {
        return LicenseDeclaration::Expression(expression);
    }

    match raw.license {
        Some(license) => {
            let has_id = license.id.as_deref().is_some_and(|s| !s.is_empty());
            match (has_id, license.name.filter(|s| !s.is_empty())) {
                (false, Some(name)) => LicenseDeclaration::FreeText(name),
                (_, name) => LicenseDeclaration::explicit(
                    license.id.filter(|s| !s.is_empty()),
                    name,
                    license.url.filter(|s| !s.is_empty()),
                ),
            }
        }
        // An empty choice carries no information; resolution maps it to
        // the "Unknown" record.
        None => LicenseDeclaration::explicit(None, None, None),
    }
}
