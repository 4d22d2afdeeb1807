use crate::licensing::domain::{
    absolutize_spdx_url, ExceptionCatalog, ExceptionCatalogEntry, LicenseCatalog,
    LicenseCatalogEntry, LicenseText,
};
use crate::ports::outbound::{CatalogSource, LicenseTextSource};
use crate::shared::Result;
use async_trait::async_trait;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Default location of the published SPDX license list.
pub const DEFAULT_LICENSE_LIST_URL: &str =
    "https://raw.githubusercontent.com/spdx/license-list-data/main/json/licenses.json";

/// Default location of the published SPDX exception list.
pub const DEFAULT_EXCEPTION_LIST_URL: &str =
    "https://raw.githubusercontent.com/spdx/license-list-data/main/json/exceptions.json";

#[derive(Debug, Deserialize)]
struct SpdxLicenseList {
    #[serde(default)]
    licenses: Vec<RawLicenseEntry>,
}

#[derive(Debug, Deserialize)]
struct RawLicenseEntry {
    #[serde(rename = "licenseId")]
    license_id: String,
    name: String,
    #[serde(default)]
    reference: String,
    #[serde(rename = "detailsUrl", default)]
    details_url: String,
}

#[derive(Debug, Deserialize)]
struct SpdxExceptionList {
    #[serde(default)]
    exceptions: Vec<RawExceptionEntry>,
}

#[derive(Debug, Deserialize)]
struct RawExceptionEntry {
    #[serde(rename = "licenseExceptionId")]
    exception_id: String,
    name: String,
    #[serde(default)]
    reference: String,
    #[serde(rename = "detailsUrl", default)]
    details_url: String,
}

/// Per-license detail document. Licenses and exceptions publish the text
/// under different field names, so all four are optional here and the
/// caller selects the pair it needs.
#[derive(Debug, Deserialize)]
struct DetailDocument {
    #[serde(rename = "licenseText", default)]
    license_text: Option<String>,
    #[serde(rename = "licenseTextHtml", default)]
    license_text_html: Option<String>,
    #[serde(rename = "licenseExceptionText", default)]
    exception_text: Option<String>,
    #[serde(rename = "exceptionTextHtml", default)]
    exception_text_html: Option<String>,
}

/// SpdxClient adapter for the SPDX license-list endpoints
///
/// Implements both the CatalogSource and LicenseTextSource ports. A
/// location may be an `http(s)` URL or a local file path; local paths are
/// read directly, which keeps tests and air-gapped runs off the network.
///
/// # Async Support
/// Uses the async reqwest client for non-blocking HTTP requests, enabling
/// parallel text fetching across concurrent resolution tasks.
pub struct SpdxClient {
    client: reqwest::Client,
    license_list_location: String,
    exception_list_location: String,
    max_retries: u32,
}

impl SpdxClient {
    /// Creates a client against the published SPDX endpoints
    pub fn new() -> Result<Self> {
        Self::with_locations(DEFAULT_LICENSE_LIST_URL, DEFAULT_EXCEPTION_LIST_URL)
    }

    /// Creates a client with overridden list locations (URLs or file paths)
    pub fn with_locations(license_list: &str, exception_list: &str) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("sbom-license-report/{}", version);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            license_list_location: license_list.to_string(),
            exception_list_location: exception_list.to_string(),
            max_retries: 3,
        })
    }

    fn is_url(location: &str) -> bool {
        location.starts_with("http://") || location.starts_with("https://")
    }

    /// Fetches the raw document body from a URL or a local file path
    async fn fetch_document(&self, location: &str) -> Result<String> {
        if !Self::is_url(location) {
            let content = tokio::fs::read_to_string(Path::new(location)).await?;
            return Ok(content);
        }
        self.fetch_url_with_retry(location).await
    }

    /// Fetches a URL with retry logic (async)
    async fn fetch_url_with_retry(&self, url: &str) -> Result<String> {
        let mut last_error = None;

        for attempt in 1..=self.max_retries {
            match self.fetch_url(url).await {
                Ok(body) => return Ok(body),
                Err(e) => {
                    last_error = Some(e);
                    if attempt < self.max_retries {
                        // Retry after a short wait (async)
                        tokio::time::sleep(Duration::from_millis(100 * attempt as u64)).await;
                    }
                }
            }
        }

        Err(last_error.unwrap())
    }

    async fn fetch_url(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            anyhow::bail!("SPDX endpoint returned status code {}", response.status());
        }

        Ok(response.text().await?)
    }
}

/// Normalize one raw exception entry into catalog form.
///
/// Both URLs are absolutized against the SPDX base, and the fields are
/// corrected so `reference_url` is the human-facing page and `details_url`
/// the raw JSON endpoint: at least one published variant ships them
/// swapped, which is detectable because only the details endpoint ends in
/// `.json`.
fn normalize_exception(raw: RawExceptionEntry) -> ExceptionCatalogEntry {
    let mut reference_url = absolutize_spdx_url(&raw.reference);
    let mut details_url = absolutize_spdx_url(&raw.details_url);

    if reference_url.ends_with(".json") && !details_url.ends_with(".json") {
        std::mem::swap(&mut reference_url, &mut details_url);
    }

    ExceptionCatalogEntry {
        id: raw.exception_id.to_lowercase(),
        display_id: raw.exception_id,
        name: raw.name,
        reference_url,
        details_url,
    }
}

#[async_trait]
impl CatalogSource for SpdxClient {
    async fn fetch_license_list(&self) -> Result<LicenseCatalog> {
        let body = self.fetch_document(&self.license_list_location).await?;
        let list: SpdxLicenseList = serde_json::from_str(&body)?;

        let entries = list
            .licenses
            .into_iter()
            .map(|raw| LicenseCatalogEntry {
                id: raw.license_id,
                name: raw.name,
                reference_url: absolutize_spdx_url(&raw.reference),
                details_url: absolutize_spdx_url(&raw.details_url),
            })
            .collect();

        Ok(LicenseCatalog::new(entries))
    }

    async fn fetch_exception_list(&self) -> Result<ExceptionCatalog> {
        let body = self.fetch_document(&self.exception_list_location).await?;
        let list: SpdxExceptionList = serde_json::from_str(&body)?;

        let entries = list.exceptions.into_iter().map(normalize_exception).collect();

        Ok(ExceptionCatalog::new(entries))
    }
}

#[async_trait]
impl LicenseTextSource for SpdxClient {
    async fn fetch_text(&self, details_url: &str, is_exception: bool) -> Result<LicenseText> {
        let body = self.fetch_document(details_url).await?;
        let detail: DetailDocument = serde_json::from_str(&body)?;

        let (plain, html) = if is_exception {
            (detail.exception_text, detail.exception_text_html)
        } else {
            (detail.license_text, detail.license_text_html)
        };

        Ok(LicenseText::new(
            plain.unwrap_or_default(),
            html.unwrap_or_default(),
        ))
    }
}
