/// One license declaration attached to an SBOM component.
///
/// CycloneDX allows three shapes inside a component's `licenses` array and
/// they resolve very differently, so the distinction is kept explicit
/// instead of collapsing everything into strings:
///
/// - a `license` object carrying an SPDX `id` (and possibly a name and url),
/// - an SPDX `expression` string such as `"MIT OR Apache-2.0"`,
/// - a `license` object with only a free-text `name` and no SPDX typing.
#[derive(Debug, Clone, PartialEq)]
pub enum LicenseDeclaration {
    /// A single license reference with at least one of id/name present
    /// (both may be absent in degenerate SBOMs; resolution maps that to
    /// the "Unknown" record).
    Explicit {
        id: Option<String>,
        name: Option<String>,
        url: Option<String>,
    },
    /// An SPDX boolean expression string.
    Expression(String),
    /// A bare name with no SPDX typing at all.
    FreeText(String),
}

impl LicenseDeclaration {
    pub fn explicit(
        id: Option<String>,
        name: Option<String>,
        url: Option<String>,
    ) -> Self {
        Self::Explicit { id, name, url }
    }
}
