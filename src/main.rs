use std::path::Path;
use std::process;

use owo_colors::OwoColorize;

use sbom_license_report::adapters::outbound::filesystem::{FileSystemWriter, SbomDirectoryReader};
use sbom_license_report::adapters::outbound::formatters::{
    HtmlReportFormatter, LicenseTextFormatter, TextReportFormatter,
};
use sbom_license_report::adapters::outbound::network::SpdxClient;
use sbom_license_report::application::use_cases::{GenerateReportUseCase, ReportRequest};
use sbom_license_report::cli::{Args, Settings};
use sbom_license_report::config::{discover_config, load_config_from_path};
use sbom_license_report::ports::outbound::OutputPresenter;
use sbom_license_report::shared::error::ExitCode;
use sbom_license_report::shared::Result;

/// Filenames of the four artifacts written to the output directory.
const COMPLIANCE_TXT: &str = "license_compliance.txt";
const COMPLIANCE_HTML: &str = "license_compliance.html";
const LICENSES_TXT: &str = "licenses_text.txt";
const LICENSES_HTML: &str = "licenses_text.html";

fn main() {
    // clap exits with code 2 on invalid arguments
    let args = Args::parse_args();

    if let Err(e) = run(args) {
        eprintln!("\n{}\n", "❌ An error occurred:".red());
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run(args: Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => Some(load_config_from_path(Path::new(path))?),
        None => discover_config(Path::new("."))?,
    };
    let settings = Settings::resolve(&args, config.as_ref());

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(generate(settings))
}

async fn generate(settings: Settings) -> Result<()> {
    let client = SpdxClient::with_locations(&settings.license_list, &settings.exception_list)?;
    let use_case = GenerateReportUseCase::new(client, SbomDirectoryReader::new());

    let request = ReportRequest::new(
        settings.sbom_dir,
        settings.mapping_path,
        settings.concurrency,
    );
    let response = use_case.execute(request).await?;

    eprintln!("📝 Generating compliance reports...");
    let compliance_txt = TextReportFormatter::new().format(&response.rows);
    let compliance_html = HtmlReportFormatter::new().format(&response.rows);

    let text_formatter = LicenseTextFormatter::new();
    let licenses_txt = text_formatter.format_plain(&response.texts);
    let licenses_html = text_formatter.format_html(&response.texts);

    let artifacts = [
        (COMPLIANCE_TXT, compliance_txt),
        (COMPLIANCE_HTML, compliance_html),
        (LICENSES_TXT, licenses_txt),
        (LICENSES_HTML, licenses_html),
    ];

    for (filename, content) in &artifacts {
        let path = settings.output_dir.join(filename);
        FileSystemWriter::new(path).present(content)?;
    }

    eprintln!(
        "{}",
        format!(
            "✅ Wrote {} report files for {} components ({} license texts cached)",
            artifacts.len(),
            response.rows.len(),
            response.texts.len()
        )
        .green()
    );

    Ok(())
}
