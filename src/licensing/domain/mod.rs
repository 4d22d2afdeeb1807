/// Domain model for license compliance reporting.
///
/// Pure data types with no I/O: components aggregated from SBOM documents,
/// license declarations in their three shapes, the SPDX catalogs, the
/// user-supplied name map, and resolved license records.
pub mod catalog;
pub mod component;
pub mod declaration;
pub mod name_map;
pub mod resolved;
pub mod text;

pub use catalog::{
    absolutize_spdx_url, ExceptionCatalog, ExceptionCatalogEntry, LicenseCatalog,
    LicenseCatalogEntry, SPDX_LICENSE_BASE,
};
pub use component::{Component, ComponentKey, UNKNOWN};
pub use declaration::LicenseDeclaration;
pub use name_map::NameMap;
pub use resolved::{ResolvedLicense, UNKNOWN_LICENSE_ID};
pub use text::LicenseText;
