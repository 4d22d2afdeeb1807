/// Full license (or exception) text in both published forms.
///
/// Cached per canonical id; an instance is only ever stored when both
/// forms are non-empty, so consumers never see a half-fetched entry.
#[derive(Debug, Clone, PartialEq)]
pub struct LicenseText {
    pub plain: String,
    pub html: String,
}

impl LicenseText {
    pub fn new(plain: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            plain: plain.into(),
            html: html.into(),
        }
    }

    /// Both forms present; partial detail documents are never cached.
    pub fn is_complete(&self) -> bool {
        !self.plain.is_empty() && !self.html.is_empty()
    }
}
