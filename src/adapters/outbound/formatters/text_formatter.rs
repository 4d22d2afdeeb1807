use crate::application::read_models::ResolvedComponent;

/// Placeholder used when a resolved license carries no reference URL.
const NO_URL: &str = "N/A";

/// TextReportFormatter adapter for the plain-text compliance report
///
/// One line per component:
/// `Component: group:name, Version: v, License: id, url; License: ...[, VCS: url]`
/// A component with no license declarations renders `License: None, URL: N/A`.
/// The output is line-parseable, but the HTML report is rendered from the
/// same structured rows, never from these lines.
pub struct TextReportFormatter;

impl TextReportFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn format(&self, rows: &[ResolvedComponent]) -> String {
        let lines: Vec<String> = rows.iter().map(format_row).collect();
        lines.join("\n")
    }
}

fn format_row(row: &ResolvedComponent) -> String {
    let mut line = format!(
        "Component: {}, Version: {}",
        row.component.key.qualified_name(),
        row.component.key.version
    );

    if row.licenses.is_empty() {
        line.push_str(", License: None, URL: N/A");
    } else {
        let parts: Vec<String> = row
            .licenses
            .iter()
            .map(|license| {
                format!(
                    "License: {}, {}",
                    license.label(),
                    license.reference_url.as_deref().unwrap_or(NO_URL)
                )
            })
            .collect();
        line.push_str(", ");
        line.push_str(&parts.join("; "));
    }

    if let Some(vcs) = &row.component.vcs_url {
        line.push_str(&format!(", VCS: {}", vcs));
    }

    line
}
