/// Domain services - the license-resolution engine and component
/// aggregation policy.
pub mod aggregator;
pub mod resolver;

pub use aggregator::ComponentAggregator;
pub use resolver::LicenseResolver;
