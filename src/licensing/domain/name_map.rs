use std::collections::HashMap;

use serde::Deserialize;

use crate::shared::Result;

/// User-supplied mapping from free-text license names to SPDX ids.
///
/// Covers the cases the SPDX catalog cannot resolve directly, e.g. SBOMs
/// that declare `"MIT License"` instead of `MIT`, or a dual-license text
/// block that maps to several ids. Loaded once per run, read-only after.
#[derive(Debug, Clone, Default)]
pub struct NameMap {
    entries: HashMap<String, Vec<String>>,
}

/// A mapping value may be a single id or a list of ids.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum MappedIds {
    One(String),
    Many(Vec<String>),
}

impl NameMap {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: HashMap<String, Vec<String>>) -> Self {
        Self { entries }
    }

    /// Parse the mapping document: a JSON object whose values are either a
    /// scalar id or an ordered list of ids.
    pub fn from_json(content: &str) -> Result<Self> {
        let raw: HashMap<String, MappedIds> = serde_json::from_str(content)?;
        let entries = raw
            .into_iter()
            .map(|(name, ids)| {
                let ids = match ids {
                    MappedIds::One(id) => vec![id],
                    MappedIds::Many(ids) => ids,
                };
                (name, ids)
            })
            .collect();
        Ok(Self { entries })
    }

    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.entries.get(name).map(|ids| ids.as_slice())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
