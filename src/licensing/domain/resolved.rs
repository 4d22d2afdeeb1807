/// Id assigned to a declaration that carried neither id nor name, or a
/// free-text name absent from the mapping file.
pub const UNKNOWN_LICENSE_ID: &str = "Unknown";

/// One canonical license (or exception) record produced by resolution.
///
/// A single declaration may resolve to zero, one, or many of these: an SPDX
/// expression yields one per identifier, and a name-map entry can fan out to
/// several ids. Invariant: `id` and `name` are never both empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedLicense {
    pub id: String,
    pub name: String,
    pub reference_url: Option<String>,
    pub is_exception: bool,
}

impl ResolvedLicense {
    pub fn license(
        id: impl Into<String>,
        name: impl Into<String>,
        reference_url: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            reference_url,
            is_exception: false,
        }
    }

    pub fn exception(
        id: impl Into<String>,
        name: impl Into<String>,
        reference_url: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            reference_url,
            is_exception: true,
        }
    }

    /// An entry the catalogs could not resolve; keeps whatever literal text
    /// the SBOM supplied, and a url only if the declaration carried one.
    pub fn opaque(
        id: impl Into<String>,
        name: impl Into<String>,
        reference_url: Option<String>,
    ) -> Self {
        let mut id = id.into();
        let name = name.into();
        if id.is_empty() && name.is_empty() {
            id = UNKNOWN_LICENSE_ID.to_string();
        }
        Self {
            id,
            name,
            reference_url,
            is_exception: false,
        }
    }

    /// The label shown in reports: the id when known, otherwise the name.
    pub fn label(&self) -> &str {
        if self.id.is_empty() {
            &self.name
        } else {
            &self.id
        }
    }
}
