//! sbom-license-report - license compliance reports from SBOM documents
//!
//! This library aggregates components across CycloneDX SBOM files,
//! resolves their license declarations against the SPDX license and
//! exception catalogs, and renders compliance reports, following
//! hexagonal architecture principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`licensing`): the component/license model, the
//!   resolution engine and the aggregation policy
//! - **Application Layer** (`application`): the report-generation use case
//! - **Ports** (`ports`): interface definitions for infrastructure
//! - **Adapters** (`adapters`): concrete implementations of ports
//! - **Shared** (`shared`): common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use sbom_license_report::prelude::*;
//! use std::path::PathBuf;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! let client = SpdxClient::new()?;
//! let use_case = GenerateReportUseCase::new(client, SbomDirectoryReader::new());
//!
//! let request = ReportRequest::new(PathBuf::from("sboms"), None, DEFAULT_CONCURRENCY);
//! let response = use_case.execute(request).await?;
//!
//! let report = TextReportFormatter::new().format(&response.rows);
//! println!("{}", report);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod licensing;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, SbomDirectoryReader};
    pub use crate::adapters::outbound::formatters::{
        HtmlReportFormatter, LicenseTextFormatter, TextReportFormatter,
    };
    pub use crate::adapters::outbound::network::{SpdxClient, TextCache};
    pub use crate::application::read_models::ResolvedComponent;
    pub use crate::application::use_cases::{
        GenerateReportUseCase, ReportRequest, ReportResponse, DEFAULT_CONCURRENCY,
    };
    pub use crate::licensing::domain::{
        Component, ComponentKey, ExceptionCatalog, LicenseCatalog, LicenseDeclaration,
        LicenseText, NameMap, ResolvedLicense,
    };
    pub use crate::licensing::services::{ComponentAggregator, LicenseResolver};
    pub use crate::ports::outbound::{CatalogSource, LicenseTextSource, OutputPresenter};
    pub use crate::shared::Result;
}
