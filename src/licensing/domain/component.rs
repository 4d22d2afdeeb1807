use super::declaration::LicenseDeclaration;

/// Fallback used when an SBOM entry omits group, name or version.
pub const UNKNOWN: &str = "Unknown";

/// Identity of a component across all SBOM documents in a run.
///
/// Two entries with the same key are the same component; the first one
/// encountered during aggregation wins and later ones are discarded.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ComponentKey {
    pub group: String,
    pub name: String,
    pub version: String,
}

impl ComponentKey {
    pub fn new(group: impl Into<String>, name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
            version: version.into(),
        }
    }

    /// The `group:name` form used in report rows.
    pub fn qualified_name(&self) -> String {
        format!("{}:{}", self.group, self.name)
    }
}

impl std::fmt::Display for ComponentKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}@{}", self.group, self.name, self.version)
    }
}

/// A deduplicated component extracted from an SBOM document.
///
/// Immutable after aggregation; license declarations are resolved later
/// without mutating the component itself.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    pub key: ComponentKey,
    pub declarations: Vec<LicenseDeclaration>,
    pub vcs_url: Option<String>,
}

impl Component {
    pub fn new(
        key: ComponentKey,
        declarations: Vec<LicenseDeclaration>,
        vcs_url: Option<String>,
    ) -> Self {
        Self {
            key,
            declarations,
            vcs_url,
        }
    }
}
