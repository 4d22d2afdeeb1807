use crate::application::read_models::ResolvedComponent;

/// Page template for the HTML compliance report. The rows are injected
/// into the table body; the filter box hides rows whose visible text does
/// not contain the query substring.
const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>License Compliance Report</title>
<style>
  body { font-family: sans-serif; margin: 2em; }
  h1 { font-size: 1.4em; }
  #filter { width: 24em; padding: 0.4em; margin-bottom: 1em; }
  table { border-collapse: collapse; width: 100%; }
  th, td { border: 1px solid #ccc; padding: 0.4em 0.6em; text-align: left; vertical-align: top; }
  th { background: #f0f0f0; }
  tr:nth-child(even) { background: #fafafa; }
  .generated { color: #666; font-size: 0.85em; }
</style>
</head>
<body>
<h1>License Compliance Report</h1>
<p class="generated">Generated: {{generated}}</p>
<input type="text" id="filter" placeholder="Filter components, versions, licenses..." onkeyup="filterRows()">
<table id="compliance">
<thead>
<tr><th>Component</th><th>Version</th><th>Licenses</th><th>VCS</th></tr>
</thead>
<tbody>
{{rows}}
</tbody>
</table>
<script>
function filterRows() {
  var query = document.getElementById('filter').value.toLowerCase();
  var rows = document.querySelectorAll('#compliance tbody tr');
  for (var i = 0; i < rows.length; i++) {
    var visible = rows[i].textContent.toLowerCase().indexOf(query) !== -1;
    rows[i].style.display = visible ? '' : 'none';
  }
}
</script>
</body>
</html>
"#;

/// HtmlReportFormatter adapter for the searchable HTML compliance report
///
/// Rendered directly from the structured rows - never by re-parsing the
/// plain-text report. All cell content is HTML-escaped; license ids link
/// to their reference URLs when one is known.
pub struct HtmlReportFormatter;

impl HtmlReportFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn format(&self, rows: &[ResolvedComponent]) -> String {
        let body: Vec<String> = rows.iter().map(format_row).collect();
        let generated = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string();
        PAGE_TEMPLATE
            .replace("{{generated}}", &generated)
            .replace("{{rows}}", &body.join("\n"))
    }
}

fn format_row(row: &ResolvedComponent) -> String {
    let licenses = if row.licenses.is_empty() {
        "License: None".to_string()
    } else {
        let cells: Vec<String> = row.licenses.iter().map(format_license).collect();
        cells.join("; ")
    };

    let vcs = match &row.component.vcs_url {
        Some(url) => format!(
            "<a href=\"{}\">{}</a>",
            escape_html(url),
            escape_html(url)
        ),
        None => String::new(),
    };

    format!(
        "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
        escape_html(&row.component.key.qualified_name()),
        escape_html(&row.component.key.version),
        licenses,
        vcs
    )
}

fn format_license(license: &crate::licensing::domain::ResolvedLicense) -> String {
    let label = escape_html(license.label());
    let label = if license.is_exception {
        format!("{} (exception)", label)
    } else {
        label
    };

    match &license.reference_url {
        Some(url) => format!("<a href=\"{}\">{}</a>", escape_html(url), label),
        None => label,
    }
}

/// Minimal HTML escaping for text interpolated into cells and attributes.
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
