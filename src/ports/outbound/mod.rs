/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, network, console, etc.).
pub mod catalog_source;
pub mod output_presenter;
pub mod text_source;

pub use catalog_source::CatalogSource;
pub use output_presenter::OutputPresenter;
pub use text_source::LicenseTextSource;
