use crate::licensing::domain::LicenseText;
use crate::ports::outbound::LicenseTextSource;
use dashmap::DashMap;

/// Process-wide memoization of fetched full license text.
///
/// Keyed by canonical identifier (SPDX license id, or lowercased exception
/// id). The cache is thread-safe and shared across concurrent resolution
/// tasks; a key is populated at most once per run with a complete
/// `{plain, html}` pair. Two tasks racing on the same id may both fetch -
/// wasted work, not a correctness issue, since the source data is static
/// for the run and the last writer stores identical content.
#[derive(Debug, Default)]
pub struct TextCache {
    cache: DashMap<String, LicenseText>,
}

impl TextCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.cache.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<LicenseText> {
        self.cache.get(id).map(|entry| entry.clone())
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Fetches and stores the text for `id` unless already cached.
    ///
    /// A partial detail document (either form empty) is discarded rather
    /// than cached, so a later call may retry the fetch. Fetch failures are
    /// reported as a console warning and treated as "no text available";
    /// they never fail resolution.
    pub async fn ensure_cached(
        &self,
        id: &str,
        details_url: &str,
        is_exception: bool,
        source: &dyn LicenseTextSource,
    ) {
        if details_url.is_empty() || self.cache.contains_key(id) {
            return;
        }

        match source.fetch_text(details_url, is_exception).await {
            Ok(text) if text.is_complete() => {
                self.cache.insert(id.to_string(), text);
            }
            Ok(_) => {
                eprintln!(
                    "⚠️  Warning: License text for '{}' was incomplete and will not be cached ({})",
                    id, details_url
                );
            }
            Err(e) => {
                eprintln!(
                    "⚠️  Warning: Failed to fetch license text for '{}': {}",
                    id, e
                );
            }
        }
    }

    /// All cached entries in id order, for deterministic rendering.
    pub fn snapshot_sorted(&self) -> Vec<(String, LicenseText)> {
        let mut entries: Vec<(String, LicenseText)> = self
            .cache
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries
    }
}
