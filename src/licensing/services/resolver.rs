use crate::adapters::outbound::network::TextCache;
use crate::licensing::domain::{
    ExceptionCatalog, LicenseCatalog, LicenseDeclaration, NameMap, ResolvedLicense,
    UNKNOWN_LICENSE_ID,
};
use crate::ports::outbound::LicenseTextSource;

/// Keywords of SPDX boolean expressions; never license identifiers.
const EXPRESSION_KEYWORDS: [&str; 5] = ["OR", "AND", "WITH", "WITHOUT", "EXCEPTION"];

/// LicenseResolver - the license-resolution engine
///
/// Takes one license declaration in any of its three shapes and normalizes
/// it into zero or more canonical records, consulting the license catalog
/// (case-sensitive), the exception catalog (case-insensitive) and the
/// user-supplied name map, in that discipline. As a side effect it
/// populates the shared [`TextCache`] for every id that resolved against a
/// catalog entry carrying a details endpoint.
///
/// The catalogs and name map are read-only for the run, so the resolver
/// borrows them and is freely shared across concurrent tasks.
pub struct LicenseResolver<'a> {
    licenses: &'a LicenseCatalog,
    exceptions: &'a ExceptionCatalog,
    name_map: &'a NameMap,
    texts: &'a TextCache,
    text_source: &'a dyn LicenseTextSource,
}

impl<'a> LicenseResolver<'a> {
    pub fn new(
        licenses: &'a LicenseCatalog,
        exceptions: &'a ExceptionCatalog,
        name_map: &'a NameMap,
        texts: &'a TextCache,
        text_source: &'a dyn LicenseTextSource,
    ) -> Self {
        Self {
            licenses,
            exceptions,
            name_map,
            texts,
            text_source,
        }
    }

    /// Resolves one declaration into its canonical records
    ///
    /// An expression yields one record per identifier in appearance order
    /// (duplicates included, mirroring multiplicity in the expression); a
    /// mapped name can fan out to several ids; a declaration the catalogs
    /// cannot place yields a single opaque record.
    pub async fn resolve(&self, declaration: &LicenseDeclaration) -> Vec<ResolvedLicense> {
        match declaration {
            LicenseDeclaration::Explicit { id, name, url } => {
                self.resolve_explicit(id.as_deref(), name.as_deref(), url.as_deref())
                    .await
            }
            LicenseDeclaration::Expression(text) => self.resolve_expression(text).await,
            LicenseDeclaration::FreeText(name) => self.resolve_free_text(name).await,
        }
    }

    async fn resolve_explicit(
        &self,
        id: Option<&str>,
        name: Option<&str>,
        url: Option<&str>,
    ) -> Vec<ResolvedLicense> {
        let Some(id) = id.filter(|s| !s.is_empty()) else {
            // No SPDX id at all: keep whatever the declaration carried.
            return vec![ResolvedLicense::opaque(
                "",
                name.unwrap_or(""),
                url.map(str::to_string),
            )];
        };

        // A mapped declaration name overrides the literal id, possibly
        // fanning out to several canonical ids (dual-license text blocks).
        let ids: Vec<String> = name
            .and_then(|n| self.name_map.get(n))
            .map(|mapped| mapped.to_vec())
            .unwrap_or_else(|| vec![id.to_string()]);

        let mut resolved = Vec::with_capacity(ids.len());
        for candidate in &ids {
            resolved.push(self.resolve_id(candidate, name, url).await);
        }
        resolved
    }

    async fn resolve_expression(&self, text: &str) -> Vec<ResolvedLicense> {
        let mut resolved = Vec::new();
        for token in expression_tokens(text) {
            resolved.extend(self.resolve_token(&token).await);
        }
        resolved
    }

    async fn resolve_free_text(&self, name: &str) -> Vec<ResolvedLicense> {
        match self.name_map.get(name) {
            None => vec![ResolvedLicense::opaque(UNKNOWN_LICENSE_ID, name, None)],
            Some(ids) => {
                let ids = ids.to_vec();
                let mut resolved = Vec::with_capacity(ids.len());
                for id in &ids {
                    resolved.push(self.resolve_id(id, Some(name), None).await);
                }
                resolved
            }
        }
    }

    /// Resolves one expression token: catalogs first, then the name map,
    /// then opaque.
    async fn resolve_token(&self, token: &str) -> Vec<ResolvedLicense> {
        if self.exceptions.get(token).is_some() || self.licenses.get(token).is_some() {
            return vec![self.resolve_id(token, None, None).await];
        }
        match self.name_map.get(token) {
            Some(ids) => {
                let ids = ids.to_vec();
                let mut resolved = Vec::with_capacity(ids.len());
                for id in &ids {
                    resolved.push(self.resolve_id(id, None, None).await);
                }
                resolved
            }
            None => vec![ResolvedLicense::opaque(token, "", None)],
        }
    }

    /// Resolves one candidate id against the catalogs.
    ///
    /// Exception catalog first (case-insensitive), then the license catalog
    /// (case-sensitive); anything else stays opaque, keeping the literal id
    /// and the declaration's own name/url when present. Catalog hits
    /// trigger the lazy text fetch under the canonical id.
    async fn resolve_id(
        &self,
        id: &str,
        declared_name: Option<&str>,
        declared_url: Option<&str>,
    ) -> ResolvedLicense {
        if let Some(entry) = self.exceptions.get(id) {
            self.texts
                .ensure_cached(&entry.id, &entry.details_url, true, self.text_source)
                .await;
            return ResolvedLicense::exception(
                entry.display_id.clone(),
                entry.name.clone(),
                Some(entry.reference_url.clone()),
            );
        }

        if let Some(entry) = self.licenses.get(id) {
            self.texts
                .ensure_cached(&entry.id, &entry.details_url, false, self.text_source)
                .await;
            return ResolvedLicense::license(
                entry.id.clone(),
                entry.name.clone(),
                Some(entry.reference_url.clone()),
            );
        }

        ResolvedLicense::opaque(id, declared_name.unwrap_or(""), declared_url.map(str::to_string))
    }
}

/// Extracts identifier-like tokens from an SPDX expression.
///
/// A token is a maximal run of letters, digits, `.` and `-`; the boolean
/// and exception keywords are dropped case-insensitively. No precedence is
/// evaluated - this is identifier discovery only.
fn expression_tokens(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();

    for c in text.chars() {
        if c.is_alphanumeric() || c == '.' || c == '-' {
            current.push(c);
        } else if !current.is_empty() {
            tokens.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
        .into_iter()
        .filter(|token| {
            !EXPRESSION_KEYWORDS
                .iter()
                .any(|keyword| keyword.eq_ignore_ascii_case(token))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::licensing::domain::{ExceptionCatalogEntry, LicenseCatalogEntry, LicenseText};
    use crate::shared::Result;
    use async_trait::async_trait;
    use std::collections::HashMap;

    struct StaticTextSource;

    #[async_trait]
    impl LicenseTextSource for StaticTextSource {
        async fn fetch_text(&self, _details_url: &str, _is_exception: bool) -> Result<LicenseText> {
            Ok(LicenseText::new("full text", "<p>full text</p>"))
        }
    }

    fn license_entry(id: &str, name: &str) -> LicenseCatalogEntry {
        LicenseCatalogEntry {
            id: id.to_string(),
            name: name.to_string(),
            reference_url: format!("https://spdx.org/licenses/{}.html", id),
            details_url: format!("https://spdx.org/licenses/{}.json", id),
        }
    }

    fn exception_entry(id: &str, name: &str) -> ExceptionCatalogEntry {
        ExceptionCatalogEntry {
            id: id.to_lowercase(),
            display_id: id.to_string(),
            name: name.to_string(),
            reference_url: format!("https://spdx.org/licenses/{}.html", id),
            details_url: format!("https://spdx.org/licenses/{}.json", id),
        }
    }

    fn licenses() -> LicenseCatalog {
        LicenseCatalog::new(vec![
            license_entry("MIT", "MIT License"),
            license_entry("Apache-2.0", "Apache License 2.0"),
            license_entry("GPL-2.0-only", "GNU General Public License v2.0 only"),
        ])
    }

    fn exceptions() -> ExceptionCatalog {
        ExceptionCatalog::new(vec![exception_entry(
            "Classpath-exception-2.0",
            "Classpath exception 2.0",
        )])
    }

    fn name_map() -> NameMap {
        let mut entries = HashMap::new();
        entries.insert("MIT License".to_string(), vec!["MIT".to_string()]);
        entries.insert(
            "Dual MIT/GPL".to_string(),
            vec!["MIT".to_string(), "GPL-2.0-only".to_string()],
        );
        entries.insert(
            "Weird Vendor License".to_string(),
            vec!["MIT".to_string(), "Vendor-Special-1.0".to_string()],
        );
        NameMap::from_entries(entries)
    }

    fn ids(records: &[ResolvedLicense]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    async fn resolve_with(
        cache: &TextCache,
        declaration: LicenseDeclaration,
    ) -> Vec<ResolvedLicense> {
        let licenses = licenses();
        let exceptions = exceptions();
        let name_map = name_map();
        let source = StaticTextSource;
        let resolver = LicenseResolver::new(&licenses, &exceptions, &name_map, cache, &source);
        resolver.resolve(&declaration).await
    }

    #[tokio::test]
    async fn test_expression_or_yields_both_ids_in_order() {
        let cache = TextCache::new();
        let records = resolve_with(
            &cache,
            LicenseDeclaration::Expression("MIT OR Apache-2.0".to_string()),
        )
        .await;

        assert_eq!(ids(&records), vec!["MIT", "Apache-2.0"]);
        assert!(records.iter().all(|r| !r.is_exception));
        assert_eq!(
            records[0].reference_url.as_deref(),
            Some("https://spdx.org/licenses/MIT.html")
        );
    }

    #[tokio::test]
    async fn test_expression_keywords_dropped_case_insensitively() {
        let cache = TextCache::new();
        let records = resolve_with(
            &cache,
            LicenseDeclaration::Expression("MIT or Apache-2.0 and MIT".to_string()),
        )
        .await;

        // Duplicate identifiers are preserved, keywords are not.
        assert_eq!(ids(&records), vec!["MIT", "Apache-2.0", "MIT"]);
    }

    #[tokio::test]
    async fn test_expression_with_exception() {
        let cache = TextCache::new();
        let records = resolve_with(
            &cache,
            LicenseDeclaration::Expression(
                "GPL-2.0-only WITH Classpath-exception-2.0".to_string(),
            ),
        )
        .await;

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "GPL-2.0-only");
        assert!(!records[0].is_exception);
        assert_eq!(records[1].id, "Classpath-exception-2.0");
        assert!(records[1].is_exception);
    }

    #[tokio::test]
    async fn test_expression_unknown_token_stays_opaque() {
        let cache = TextCache::new();
        let records = resolve_with(
            &cache,
            LicenseDeclaration::Expression("MIT OR Proprietary-1.0".to_string()),
        )
        .await;

        assert_eq!(ids(&records), vec!["MIT", "Proprietary-1.0"]);
        assert!(records[1].reference_url.is_none());
    }

    #[tokio::test]
    async fn test_explicit_id_resolves_against_catalog() {
        let cache = TextCache::new();
        let records = resolve_with(
            &cache,
            LicenseDeclaration::explicit(Some("MIT".to_string()), None, None),
        )
        .await;

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "MIT License");
        assert_eq!(
            records[0].reference_url.as_deref(),
            Some("https://spdx.org/licenses/MIT.html")
        );
    }

    #[tokio::test]
    async fn test_explicit_name_map_overrides_literal_id() {
        let cache = TextCache::new();
        let records = resolve_with(
            &cache,
            LicenseDeclaration::explicit(
                Some("Something-Else".to_string()),
                Some("Dual MIT/GPL".to_string()),
                None,
            ),
        )
        .await;

        assert_eq!(ids(&records), vec!["MIT", "GPL-2.0-only"]);
    }

    #[tokio::test]
    async fn test_explicit_exception_id_matched_case_insensitively() {
        let cache = TextCache::new();
        let records = resolve_with(
            &cache,
            LicenseDeclaration::explicit(Some("CLASSPATH-EXCEPTION-2.0".to_string()), None, None),
        )
        .await;

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "Classpath-exception-2.0");
        assert!(records[0].is_exception);
    }

    #[tokio::test]
    async fn test_explicit_unknown_id_keeps_declared_url() {
        let cache = TextCache::new();
        let records = resolve_with(
            &cache,
            LicenseDeclaration::explicit(
                Some("Internal-1.0".to_string()),
                None,
                Some("https://example.com/license".to_string()),
            ),
        )
        .await;

        assert_eq!(records[0].id, "Internal-1.0");
        assert_eq!(
            records[0].reference_url.as_deref(),
            Some("https://example.com/license")
        );
    }

    #[tokio::test]
    async fn test_explicit_without_id_or_name_is_unknown() {
        let cache = TextCache::new();
        let records = resolve_with(&cache, LicenseDeclaration::explicit(None, None, None)).await;

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, UNKNOWN_LICENSE_ID);
    }

    #[tokio::test]
    async fn test_free_text_unmapped_is_unknown_with_original_name() {
        let cache = TextCache::new();
        let records = resolve_with(
            &cache,
            LicenseDeclaration::FreeText("Custom Corp License".to_string()),
        )
        .await;

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, UNKNOWN_LICENSE_ID);
        assert_eq!(records[0].name, "Custom Corp License");
        assert!(records[0].reference_url.is_none());
    }

    #[tokio::test]
    async fn test_free_text_mapped_fans_out() {
        let cache = TextCache::new();
        let records = resolve_with(
            &cache,
            LicenseDeclaration::FreeText("Dual MIT/GPL".to_string()),
        )
        .await;

        assert_eq!(ids(&records), vec!["MIT", "GPL-2.0-only"]);
    }

    #[tokio::test]
    async fn test_free_text_mapped_unresolvable_id_kept_opaque() {
        let cache = TextCache::new();
        let records = resolve_with(
            &cache,
            LicenseDeclaration::FreeText("Weird Vendor License".to_string()),
        )
        .await;

        // The unresolvable mapped id is kept as an opaque entry, not dropped.
        assert_eq!(ids(&records), vec!["MIT", "Vendor-Special-1.0"]);
        assert!(records[1].reference_url.is_none());
    }

    #[tokio::test]
    async fn test_catalog_hits_populate_text_cache() {
        let cache = TextCache::new();
        resolve_with(
            &cache,
            LicenseDeclaration::Expression(
                "GPL-2.0-only WITH Classpath-exception-2.0".to_string(),
            ),
        )
        .await;

        assert!(cache.contains("GPL-2.0-only"));
        // Exceptions are cached under the lowercase-normalized id.
        assert!(cache.contains("classpath-exception-2.0"));
        assert_eq!(cache.len(), 2);
    }

    #[tokio::test]
    async fn test_opaque_records_do_not_fetch_text() {
        let cache = TextCache::new();
        resolve_with(
            &cache,
            LicenseDeclaration::FreeText("Custom Corp License".to_string()),
        )
        .await;

        assert!(cache.is_empty());
    }

    #[test]
    fn test_expression_tokens_splitting() {
        assert_eq!(
            expression_tokens("(MIT OR Apache-2.0) AND GPL-2.0-only"),
            vec!["MIT", "Apache-2.0", "GPL-2.0-only"]
        );
        assert_eq!(expression_tokens("OR AND WITH"), Vec::<String>::new());
        assert_eq!(expression_tokens(""), Vec::<String>::new());
    }
}
