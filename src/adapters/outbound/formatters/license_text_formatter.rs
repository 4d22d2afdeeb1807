use crate::licensing::domain::LicenseText;

/// Rule separating sections of the plain-text license document.
const TEXT_RULE: &str =
    "--------------------------------------------------------------------------------";

/// LicenseTextFormatter adapter for the full-text license documents
///
/// Emits one section per cached identifier - the id header, the cached
/// body, then a rule. Input entries are expected in id order (the cache
/// snapshot is sorted), keeping both documents reproducible for a run.
pub struct LicenseTextFormatter;

impl LicenseTextFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn format_plain(&self, entries: &[(String, LicenseText)]) -> String {
        let sections: Vec<String> = entries
            .iter()
            .map(|(id, text)| format!("{}\n\n{}\n\n{}\n", id, text.plain.trim_end(), TEXT_RULE))
            .collect();
        sections.join("\n")
    }

    pub fn format_html(&self, entries: &[(String, LicenseText)]) -> String {
        let sections: Vec<String> = entries
            .iter()
            .map(|(id, text)| {
                format!(
                    "<section>\n<h2>{}</h2>\n{}\n</section>\n<hr>",
                    escape_header(id),
                    text.html
                )
            })
            .collect();

        format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
             <title>License Texts</title>\n</head>\n<body>\n<h1>License Texts</h1>\n{}\n</body>\n</html>\n",
            sections.join("\n")
        )
    }
}

/// Ids are plain SPDX identifiers, but escape anyway since opaque ids can
/// carry arbitrary SBOM text.
fn escape_header(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
