use clap::Parser;
use std::path::PathBuf;

use crate::adapters::outbound::network::{DEFAULT_EXCEPTION_LIST_URL, DEFAULT_LICENSE_LIST_URL};
use crate::application::use_cases::DEFAULT_CONCURRENCY;
use crate::config::ConfigFile;

/// Default directory scanned for SBOM documents.
const DEFAULT_SBOM_DIR: &str = "sboms";

/// Generate license compliance reports from CycloneDX SBOM documents
#[derive(Parser, Debug)]
#[command(name = "sbom-license-report")]
#[command(version)]
#[command(about = "Generate license compliance reports from CycloneDX SBOM documents", long_about = None)]
pub struct Args {
    /// Directory containing SBOM JSON documents
    #[arg(short, long)]
    pub sboms: Option<String>,

    /// JSON file mapping free-text license names to SPDX ids
    #[arg(short, long)]
    pub mapping: Option<String>,

    /// Directory the report artifacts are written to
    #[arg(short, long)]
    pub output_dir: Option<String>,

    /// SPDX license list location (URL or local path)
    #[arg(long, value_name = "URL|PATH")]
    pub license_list: Option<String>,

    /// SPDX exception list location (URL or local path)
    #[arg(long, value_name = "URL|PATH")]
    pub exception_list: Option<String>,

    /// Number of components resolved in parallel
    #[arg(short, long)]
    pub concurrency: Option<usize>,

    /// Config file path (defaults to auto-discovering sbom-report.config.yml)
    #[arg(long)]
    pub config: Option<String>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Effective settings for one run: CLI flags win over config values,
/// config values win over the built-in defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub sbom_dir: PathBuf,
    pub mapping_path: Option<PathBuf>,
    pub output_dir: PathBuf,
    pub license_list: String,
    pub exception_list: String,
    pub concurrency: usize,
}

impl Settings {
    pub fn resolve(args: &Args, config: Option<&ConfigFile>) -> Self {
        let pick = |flag: &Option<String>, conf: Option<&String>| -> Option<String> {
            flag.clone().or_else(|| conf.cloned())
        };

        let sbom_dir = pick(&args.sboms, config.and_then(|c| c.sboms.as_ref()))
            .unwrap_or_else(|| DEFAULT_SBOM_DIR.to_string());
        let output_dir = pick(&args.output_dir, config.and_then(|c| c.output_dir.as_ref()))
            .unwrap_or_else(|| ".".to_string());
        let license_list = pick(&args.license_list, config.and_then(|c| c.license_list.as_ref()))
            .unwrap_or_else(|| DEFAULT_LICENSE_LIST_URL.to_string());
        let exception_list = pick(
            &args.exception_list,
            config.and_then(|c| c.exception_list.as_ref()),
        )
        .unwrap_or_else(|| DEFAULT_EXCEPTION_LIST_URL.to_string());

        Self {
            sbom_dir: PathBuf::from(sbom_dir),
            mapping_path: pick(&args.mapping, config.and_then(|c| c.mapping.as_ref()))
                .map(PathBuf::from),
            output_dir: PathBuf::from(output_dir),
            license_list,
            exception_list,
            concurrency: args
                .concurrency
                .or(config.and_then(|c| c.concurrency))
                .unwrap_or(DEFAULT_CONCURRENCY)
                .max(1),
        }
    }
}
