use crate::licensing::domain::{ExceptionCatalog, LicenseCatalog};
use crate::shared::Result;
use async_trait::async_trait;

/// CatalogSource port for loading the SPDX license and exception lists
///
/// This port abstracts where the published lists come from - the SPDX
/// endpoints over HTTPS, or local JSON files in tests and offline runs.
///
/// # Async Support
/// All methods are async; implementations must be `Send + Sync` so the
/// orchestrator can share one source across concurrent tasks.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetches and parses the SPDX license list
    ///
    /// # Errors
    /// Returns an error if the list cannot be fetched or parsed. Callers
    /// treat this as recoverable: the run continues with an empty catalog.
    async fn fetch_license_list(&self) -> Result<LicenseCatalog>;

    /// Fetches and parses the SPDX exception list
    ///
    /// Exception entries are normalized at load time: ids lowercased for
    /// case-insensitive matching, and reference/details URLs absolutized
    /// and corrected so `reference_url` is always the human-facing page.
    ///
    /// # Errors
    /// Same recoverable contract as [`fetch_license_list`](Self::fetch_license_list).
    async fn fetch_exception_list(&self) -> Result<ExceptionCatalog>;
}
