use std::collections::HashMap;

/// Base against which relative SPDX list URLs are resolved.
pub const SPDX_LICENSE_BASE: &str = "https://spdx.org/licenses/";

/// One entry of the published SPDX license list.
#[derive(Debug, Clone, PartialEq)]
pub struct LicenseCatalogEntry {
    pub id: String,
    pub name: String,
    pub reference_url: String,
    pub details_url: String,
}

/// One entry of the published SPDX exception list.
///
/// Exception ids are matched case-insensitively, so the id stored here is
/// already lowercased; `display_id` keeps the published casing for output.
#[derive(Debug, Clone, PartialEq)]
pub struct ExceptionCatalogEntry {
    pub id: String,
    pub display_id: String,
    pub name: String,
    pub reference_url: String,
    pub details_url: String,
}

/// The SPDX license list, keyed case-sensitively by license id.
///
/// SPDX ids are case-canonical as published, so lookups use the id verbatim.
#[derive(Debug, Clone, Default)]
pub struct LicenseCatalog {
    entries: HashMap<String, LicenseCatalogEntry>,
}

impl LicenseCatalog {
    pub fn new(entries: Vec<LicenseCatalogEntry>) -> Self {
        Self {
            entries: entries.into_iter().map(|e| (e.id.clone(), e)).collect(),
        }
    }

    /// Empty catalog used when the list could not be fetched; every id
    /// then resolves as unknown instead of aborting the run.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<&LicenseCatalogEntry> {
        self.entries.get(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The SPDX exception list, keyed by lowercased exception id.
#[derive(Debug, Clone, Default)]
pub struct ExceptionCatalog {
    entries: HashMap<String, ExceptionCatalogEntry>,
}

impl ExceptionCatalog {
    pub fn new(entries: Vec<ExceptionCatalogEntry>) -> Self {
        Self {
            entries: entries.into_iter().map(|e| (e.id.clone(), e)).collect(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Case-insensitive lookup; the catalog keys are lowercased at load time.
    pub fn get(&self, id: &str) -> Option<&ExceptionCatalogEntry> {
        self.entries.get(&id.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Resolve a possibly-relative SPDX list URL to absolute form.
///
/// The published lists carry values like `./Apache-2.0.html` or bare
/// filenames; those are joined onto the SPDX license base. Anything
/// already absolute - an http(s) URL, or a local path when the lists are
/// read off disk - is kept as-is.
pub fn absolutize_spdx_url(url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else if let Some(rest) = url.strip_prefix("./") {
        format!("{}{}", SPDX_LICENSE_BASE, rest)
    } else if !url.contains('/') && !url.is_empty() {
        format!("{}{}", SPDX_LICENSE_BASE, url)
    } else {
        url.to_string()
    }
}
