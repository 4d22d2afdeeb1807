pub mod html_formatter;
pub mod license_text_formatter;
pub mod text_formatter;

pub use html_formatter::HtmlReportFormatter;
pub use license_text_formatter::LicenseTextFormatter;
pub use text_formatter::TextReportFormatter;
