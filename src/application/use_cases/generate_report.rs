use std::path::PathBuf;

use futures::stream::{self, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};

use crate::adapters::outbound::filesystem::SbomDirectoryReader;
use crate::adapters::outbound::network::TextCache;
use crate::application::read_models::ResolvedComponent;
use crate::licensing::domain::{
    Component, ExceptionCatalog, LicenseCatalog, LicenseText, NameMap,
};
use crate::licensing::services::{ComponentAggregator, LicenseResolver};
use crate::ports::outbound::{CatalogSource, LicenseTextSource};
use crate::shared::error::ReportError;
use crate::shared::Result;

/// Default number of components resolved in parallel.
pub const DEFAULT_CONCURRENCY: usize = 10;

/// Input for one report generation run.
#[derive(Debug, Clone)]
pub struct ReportRequest {
    pub sbom_dir: PathBuf,
    pub mapping_path: Option<PathBuf>,
    pub concurrency: usize,
}

impl ReportRequest {
    pub fn new(sbom_dir: PathBuf, mapping_path: Option<PathBuf>, concurrency: usize) -> Self {
        Self {
            sbom_dir,
            mapping_path,
            concurrency: concurrency.max(1),
        }
    }
}

/// Output of one run: report rows in aggregation order plus the full
/// license texts that resolution cached, sorted by id.
#[derive(Debug)]
pub struct ReportResponse {
    pub rows: Vec<ResolvedComponent>,
    pub texts: Vec<(String, LicenseText)>,
}

/// GenerateReportUseCase - the report orchestrator
///
/// Sequences one run: load catalogs and the optional name map, aggregate
/// components across SBOM files, resolve licenses with bounded
/// parallelism, and reassemble results in aggregation order. Only the
/// SBOM directory being unusable is fatal; every other failure is logged
/// and the affected unit (catalog, file, component) degrades to empty.
///
/// # Type Parameters
/// * `S` - source for both the SPDX lists and per-license detail documents
pub struct GenerateReportUseCase<S: CatalogSource + LicenseTextSource> {
    spdx_source: S,
    sbom_reader: SbomDirectoryReader,
}

impl<S: CatalogSource + LicenseTextSource> GenerateReportUseCase<S> {
    /// Creates a new use case with injected dependencies
    pub fn new(spdx_source: S, sbom_reader: SbomDirectoryReader) -> Self {
        Self {
            spdx_source,
            sbom_reader,
        }
    }

    /// Executes one report generation run
    ///
    /// # Errors
    /// Returns an error only when the SBOM directory is missing or
    /// unreadable - no report can be produced then.
    pub async fn execute(&self, request: ReportRequest) -> Result<ReportResponse> {
        let name_map = self.load_name_map(request.mapping_path.as_deref());
        let (licenses, exceptions) = self.load_catalogs().await;

        let components = self.sbom_reader.read_components(&request.sbom_dir)?;
        let components = ComponentAggregator::aggregate(components);
        eprintln!("🔍 Aggregated {} unique components", components.len());

        let cache = TextCache::new();
        let rows = self
            .resolve_components(
                components,
                &licenses,
                &exceptions,
                &name_map,
                &cache,
                request.concurrency,
            )
            .await;

        Ok(ReportResponse {
            rows,
            texts: cache.snapshot_sorted(),
        })
    }

    /// Loads both SPDX lists; a failed list degrades to an empty catalog
    /// and every id then resolves as unresolved instead of aborting.
    async fn load_catalogs(&self) -> (LicenseCatalog, ExceptionCatalog) {
        let (licenses, exceptions) = tokio::join!(
            self.spdx_source.fetch_license_list(),
            self.spdx_source.fetch_exception_list(),
        );

        let licenses = match licenses {
            Ok(catalog) => {
                eprintln!("📄 Loaded {} SPDX licenses", catalog.len());
                catalog
            }
            Err(e) => {
                eprintln!("⚠️  Warning: Failed to load the SPDX license list: {}", e);
                LicenseCatalog::empty()
            }
        };

        let exceptions = match exceptions {
            Ok(catalog) => {
                eprintln!("📄 Loaded {} SPDX exceptions", catalog.len());
                catalog
            }
            Err(e) => {
                eprintln!("⚠️  Warning: Failed to load the SPDX exception list: {}", e);
                ExceptionCatalog::empty()
            }
        };

        (licenses, exceptions)
    }

    /// Loads the optional name-to-id mapping file. A missing or malformed
    /// mapping degrades to an empty map with a warning.
    fn load_name_map(&self, mapping_path: Option<&std::path::Path>) -> NameMap {
        let Some(path) = mapping_path else {
            return NameMap::empty();
        };

        let loaded = std::fs::read_to_string(path)
            .map_err(|e| {
                anyhow::Error::from(ReportError::FileReadError {
                    path: path.to_path_buf(),
                    details: e.to_string(),
                })
            })
            .and_then(|content| {
                NameMap::from_json(&content).map_err(|e| {
                    ReportError::MappingParseError {
                        path: path.to_path_buf(),
                        details: e.to_string(),
                    }
                    .into()
                })
            });

        match loaded {
            Ok(map) => {
                eprintln!("📄 Loaded {} license name mappings", map.len());
                map
            }
            Err(e) => {
                eprintln!(
                    "⚠️  Warning: Ignoring mapping file {}: {}",
                    path.display(),
                    e
                );
                NameMap::empty()
            }
        }
    }

    /// Fans out one resolution task per component with bounded
    /// parallelism. Each task carries its aggregation index and results
    /// are re-sorted on it, so report order never depends on completion
    /// order. A failed task is logged and its component omitted; siblings
    /// keep running.
    async fn resolve_components(
        &self,
        components: Vec<Component>,
        licenses: &LicenseCatalog,
        exceptions: &ExceptionCatalog,
        name_map: &NameMap,
        cache: &TextCache,
        concurrency: usize,
    ) -> Vec<ResolvedComponent> {
        let resolver = LicenseResolver::new(licenses, exceptions, name_map, cache, &self.spdx_source);
        let resolver = &resolver;

        let progress = ProgressBar::new(components.len() as u64);
        progress.set_style(
            ProgressStyle::default_bar()
                .template("   {spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} - {msg}")
                .expect("Failed to set progress bar template")
                .progress_chars("=>-"),
        );
        progress.set_message("Resolving licenses...");
        let progress = &progress;

        let mut results: Vec<(usize, Component, Result<Vec<_>>)> =
            stream::iter(components.into_iter().enumerate())
                .map(|(index, component)| async move {
                    let resolved = resolve_component(resolver, &component).await;
                    progress.inc(1);
                    (index, component, resolved)
                })
                .buffer_unordered(concurrency)
                .collect()
                .await;

        progress.finish_and_clear();

        results.sort_by_key(|(index, _, _)| *index);

        results
            .into_iter()
            .filter_map(|(_, component, resolved)| match resolved {
                Ok(licenses) => Some(ResolvedComponent::new(component, licenses)),
                Err(e) => {
                    eprintln!(
                        "⚠️  Warning: Skipping component {}: {}",
                        component.key, e
                    );
                    None
                }
            })
            .collect()
    }
}

/// Resolves every declaration of one component, in declaration order.
async fn resolve_component(
    resolver: &LicenseResolver<'_>,
    component: &Component,
) -> Result<Vec<crate::licensing::domain::ResolvedLicense>> {
    let mut resolved = Vec::new();
    for declaration in &component.declarations {
        resolved.extend(resolver.resolve(declaration).await);
    }
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::licensing::domain::{ExceptionCatalogEntry, LicenseCatalogEntry};
    use async_trait::async_trait;
    use std::fs;
    use tempfile::TempDir;

    /// In-memory SPDX source: a small fixed catalog and static text.
    struct StaticSpdxSource;

    #[async_trait]
    impl CatalogSource for StaticSpdxSource {
        async fn fetch_license_list(&self) -> Result<LicenseCatalog> {
            Ok(LicenseCatalog::new(vec![
                LicenseCatalogEntry {
                    id: "MIT".to_string(),
                    name: "MIT License".to_string(),
                    reference_url: "https://spdx.org/licenses/MIT.html".to_string(),
                    details_url: "https://spdx.org/licenses/MIT.json".to_string(),
                },
                LicenseCatalogEntry {
                    id: "Apache-2.0".to_string(),
                    name: "Apache License 2.0".to_string(),
                    reference_url: "https://spdx.org/licenses/Apache-2.0.html".to_string(),
                    details_url: "https://spdx.org/licenses/Apache-2.0.json".to_string(),
                },
            ]))
        }

        async fn fetch_exception_list(&self) -> Result<ExceptionCatalog> {
            Ok(ExceptionCatalog::new(vec![ExceptionCatalogEntry {
                id: "classpath-exception-2.0".to_string(),
                display_id: "Classpath-exception-2.0".to_string(),
                name: "Classpath exception 2.0".to_string(),
                reference_url: "https://spdx.org/licenses/Classpath-exception-2.0.html"
                    .to_string(),
                details_url: "https://spdx.org/licenses/Classpath-exception-2.0.json".to_string(),
            }]))
        }
    }

    #[async_trait]
    impl LicenseTextSource for StaticSpdxSource {
        async fn fetch_text(
            &self,
            _details_url: &str,
            _is_exception: bool,
        ) -> Result<LicenseText> {
            Ok(LicenseText::new("full text", "<p>full text</p>"))
        }
    }

    /// Source whose lists always fail; text fetches still succeed.
    struct UnreachableSpdxSource;

    #[async_trait]
    impl CatalogSource for UnreachableSpdxSource {
        async fn fetch_license_list(&self) -> Result<LicenseCatalog> {
            anyhow::bail!("connection timed out")
        }

        async fn fetch_exception_list(&self) -> Result<ExceptionCatalog> {
            anyhow::bail!("connection timed out")
        }
    }

    #[async_trait]
    impl LicenseTextSource for UnreachableSpdxSource {
        async fn fetch_text(
            &self,
            _details_url: &str,
            _is_exception: bool,
        ) -> Result<LicenseText> {
            anyhow::bail!("connection timed out")
        }
    }

    fn write_sbom(dir: &std::path::Path, name: &str, content: &str) {
        fs::write(dir.join(name), content).unwrap();
    }

    fn request(dir: &TempDir) -> ReportRequest {
        ReportRequest::new(dir.path().to_path_buf(), None, DEFAULT_CONCURRENCY)
    }

    #[tokio::test]
    async fn test_execute_resolves_and_orders_components() {
        let dir = TempDir::new().unwrap();
        write_sbom(
            dir.path(),
            "app.json",
            r#"{"components": [
                {"group": "g", "name": "b", "version": "1.0",
                 "licenses": [{"expression": "MIT OR Apache-2.0"}]},
                {"group": "g", "name": "a", "version": "1.0",
                 "licenses": [{"license": {"id": "MIT"}}]}
            ]}"#,
        );

        let use_case = GenerateReportUseCase::new(StaticSpdxSource, SbomDirectoryReader::new());
        let response = use_case.execute(request(&dir)).await.unwrap();

        // Aggregation (document) order, not alphabetical or completion order.
        assert_eq!(response.rows.len(), 2);
        assert_eq!(response.rows[0].component.key.name, "b");
        assert_eq!(response.rows[1].component.key.name, "a");
        assert_eq!(response.rows[0].licenses.len(), 2);
        assert_eq!(response.rows[0].licenses[0].id, "MIT");
        assert_eq!(response.rows[0].licenses[1].id, "Apache-2.0");
    }

    #[tokio::test]
    async fn test_execute_caches_texts_sorted_by_id() {
        let dir = TempDir::new().unwrap();
        write_sbom(
            dir.path(),
            "app.json",
            r#"{"components": [
                {"name": "lib", "version": "1.0",
                 "licenses": [{"expression": "MIT OR Apache-2.0"}]}
            ]}"#,
        );

        let use_case = GenerateReportUseCase::new(StaticSpdxSource, SbomDirectoryReader::new());
        let response = use_case.execute(request(&dir)).await.unwrap();

        let ids: Vec<&str> = response.texts.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, vec!["Apache-2.0", "MIT"]);
    }

    #[tokio::test]
    async fn test_duplicate_across_files_first_seen_wins() {
        let dir = TempDir::new().unwrap();
        write_sbom(
            dir.path(),
            "a.json",
            r#"{"components": [{"group": "g", "name": "lib", "version": "1.0",
                "licenses": [{"license": {"id": "MIT"}}]}]}"#,
        );
        write_sbom(
            dir.path(),
            "b.json",
            r#"{"components": [
                {"group": "g", "name": "lib", "version": "1.0",
                 "licenses": [{"license": {"id": "Apache-2.0"}}]},
                {"group": "g", "name": "lib", "version": "2.0",
                 "licenses": [{"license": {"id": "Apache-2.0"}}]}
            ]}"#,
        );

        let use_case = GenerateReportUseCase::new(StaticSpdxSource, SbomDirectoryReader::new());
        let response = use_case.execute(request(&dir)).await.unwrap();

        // v1.0 keeps the record from a.json; v2.0 is a distinct component.
        assert_eq!(response.rows.len(), 2);
        assert_eq!(response.rows[0].component.key.version, "1.0");
        assert_eq!(response.rows[0].licenses[0].id, "MIT");
        assert_eq!(response.rows[1].component.key.version, "2.0");
        assert_eq!(response.rows[1].licenses[0].id, "Apache-2.0");
    }

    #[tokio::test]
    async fn test_unreachable_catalogs_degrade_to_unresolved() {
        let dir = TempDir::new().unwrap();
        write_sbom(
            dir.path(),
            "app.json",
            r#"{"components": [{"name": "lib", "version": "1.0",
                "licenses": [{"license": {"id": "MIT"}}]}]}"#,
        );

        let use_case =
            GenerateReportUseCase::new(UnreachableSpdxSource, SbomDirectoryReader::new());
        let response = use_case.execute(request(&dir)).await.unwrap();

        // The run completes; the id stays opaque and no text is cached.
        assert_eq!(response.rows.len(), 1);
        assert_eq!(response.rows[0].licenses[0].id, "MIT");
        assert!(response.rows[0].licenses[0].reference_url.is_none());
        assert!(response.texts.is_empty());
    }

    #[tokio::test]
    async fn test_missing_sbom_directory_is_fatal() {
        let use_case = GenerateReportUseCase::new(StaticSpdxSource, SbomDirectoryReader::new());
        let result = use_case
            .execute(ReportRequest::new(
                PathBuf::from("/nonexistent/sboms"),
                None,
                DEFAULT_CONCURRENCY,
            ))
            .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_mapping_file_applied_to_free_text() {
        let dir = TempDir::new().unwrap();
        write_sbom(
            dir.path(),
            "app.json",
            r#"{"components": [{"name": "lib", "version": "1.0",
                "licenses": [{"license": {"name": "MIT License"}}]}]}"#,
        );
        let mapping_path = dir.path().join("mapping.json");
        fs::write(&mapping_path, r#"{"MIT License": ["MIT"]}"#).unwrap();

        let use_case = GenerateReportUseCase::new(StaticSpdxSource, SbomDirectoryReader::new());
        let response = use_case
            .execute(ReportRequest::new(
                dir.path().to_path_buf(),
                Some(mapping_path),
                DEFAULT_CONCURRENCY,
            ))
            .await
            .unwrap();

        assert_eq!(response.rows[0].licenses[0].id, "MIT");
        assert_eq!(
            response.rows[0].licenses[0].reference_url.as_deref(),
            Some("https://spdx.org/licenses/MIT.html")
        );
    }

    #[tokio::test]
    async fn test_malformed_mapping_degrades_to_empty_map() {
        let dir = TempDir::new().unwrap();
        write_sbom(
            dir.path(),
            "app.json",
            r#"{"components": [{"name": "lib", "version": "1.0",
                "licenses": [{"license": {"name": "MIT License"}}]}]}"#,
        );
        let mapping_path = dir.path().join("mapping.json");
        fs::write(&mapping_path, "not json").unwrap();

        let use_case = GenerateReportUseCase::new(StaticSpdxSource, SbomDirectoryReader::new());
        let response = use_case
            .execute(ReportRequest::new(
                dir.path().to_path_buf(),
                Some(mapping_path),
                DEFAULT_CONCURRENCY,
            ))
            .await
            .unwrap();

        assert_eq!(response.rows[0].licenses[0].id, "Unknown");
        assert_eq!(response.rows[0].licenses[0].name, "MIT License");
    }
}
