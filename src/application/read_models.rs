use crate::licensing::domain::{Component, ResolvedLicense};

/// One report row: a component together with its resolved license records.
///
/// Rows are assembled in aggregation order, regardless of which resolution
/// task finished first, so all formatters see the same stable order.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedComponent {
    pub component: Component,
    pub licenses: Vec<ResolvedLicense>,
}

impl ResolvedComponent {
    pub fn new(component: Component, licenses: Vec<ResolvedLicense>) -> Self {
        Self {
            component,
            licenses,
        }
    }
}
