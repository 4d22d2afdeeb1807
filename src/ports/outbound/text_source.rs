use crate::licensing::domain::LicenseText;
use crate::shared::Result;
use async_trait::async_trait;

/// LicenseTextSource port for fetching one full license text document
///
/// The SPDX detail endpoints return `{licenseText, licenseTextHtml}` for
/// licenses and `{licenseExceptionText, exceptionTextHtml}` for
/// exceptions; implementations normalize both shapes into [`LicenseText`].
#[async_trait]
pub trait LicenseTextSource: Send + Sync {
    /// Fetches the detail document at `details_url`
    ///
    /// # Arguments
    /// * `details_url` - The catalog entry's raw-text API endpoint
    /// * `is_exception` - Selects which pair of fields to read
    ///
    /// # Returns
    /// The text in both forms; either may be empty if the document omitted
    /// it - callers decide whether a partial result is usable.
    ///
    /// # Errors
    /// Returns an error on network failure or a malformed response. Callers
    /// treat this as "no text available", never as a fatal condition.
    async fn fetch_text(&self, details_url: &str, is_exception: bool) -> Result<LicenseText>;
}
