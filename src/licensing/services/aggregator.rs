use std::collections::HashSet;

use crate::licensing::domain::Component;

/// ComponentAggregator - deduplication across SBOM documents
///
/// Components arrive in document order (files visited in sorted filename
/// order, entries in file order); identity is `(group, name, version)` and
/// the first occurrence wins. License lists of later duplicates are
/// discarded, never merged.
pub struct ComponentAggregator;

impl ComponentAggregator {
    /// Deduplicates the flattened component stream, preserving first-seen
    /// order. The returned order is the report's row order.
    pub fn aggregate(components: Vec<Component>) -> Vec<Component> {
        let mut seen = HashSet::new();
        let mut unique = Vec::new();

        for component in components {
            if seen.insert(component.key.clone()) {
                unique.push(component);
            }
        }

        unique
    }
}
