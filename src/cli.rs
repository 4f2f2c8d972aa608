use crate::config::{CliOverrides, Config};
use crate::error::Result;
use crate::ui::PresentationMode;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "jsonld-extract")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Extract JSON-LD structured data from HTML files for validation")]
#[command(
    long_about = "jsonld-extract scans a directory of HTML files for \
                  <script type=\"application/ld+json\"> blocks and prints them as a report, \
                  writes one JSON file per page, or merges them into a single @graph \
                  for schema validators."
)]
#[command(after_help = "EXAMPLES:\n  \
    jsonld-extract                       # Report for all pages\n  \
    jsonld-extract index.html            # Only paths containing index.html\n  \
    jsonld-extract --combined            # Single combined @graph on stdout\n  \
    jsonld-extract --output json         # One JSON file per page\n  \
    jsonld-extract --combined --output json --root public")]
pub struct Cli {
    /// Only scan files whose path contains this text
    pub filter: Option<String>,

    /// Merge every entity into one @graph document
    #[arg(long)]
    pub combined: bool,

    /// Write JSON files instead of printing to stdout
    #[arg(long, value_enum)]
    pub output: Option<OutputTarget>,

    /// Directory to scan (defaults to ./web)
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, help = "Path to TOML configuration file")]
    pub config: Option<PathBuf>,

    /// Verbose output level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress status messages and the spinner; parse warnings still print)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Generate sample configuration file
    #[arg(long, help = "Generate a sample configuration file")]
    pub generate_config: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputTarget {
    /// JSON files on disk
    Json,
}

impl Cli {
    pub fn load_config(&self) -> Result<Config> {
        let mut config = Config::load_with_defaults(self.config.as_ref())?;

        config.merge_with_cli_args(&self.create_cli_overrides());
        config.validate()?;

        Ok(config)
    }

    pub fn create_cli_overrides(&self) -> CliOverrides {
        CliOverrides::new().with_root(self.root.clone())
    }

    pub fn presentation_mode(&self) -> PresentationMode {
        PresentationMode::from_flags(self.combined, self.output == Some(OutputTarget::Json))
    }

    pub fn name_filter(&self) -> Option<&str> {
        self.filter.as_deref().filter(|f| !f.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_invocation() {
        let cli = Cli::try_parse_from(["jsonld-extract"]).unwrap();
        assert!(cli.filter.is_none());
        assert_eq!(cli.presentation_mode(), PresentationMode::Report);
        assert!(cli.create_cli_overrides().root.is_none());
    }

    #[test]
    fn test_mode_flags() {
        let cli = Cli::try_parse_from(["jsonld-extract", "--output", "json"]).unwrap();
        assert_eq!(cli.presentation_mode(), PresentationMode::PerFile);

        let cli = Cli::try_parse_from(["jsonld-extract", "--combined"]).unwrap();
        assert_eq!(
            cli.presentation_mode(),
            PresentationMode::Combined { write_file: false }
        );

        let cli = Cli::try_parse_from(["jsonld-extract", "--combined", "--output=json"]).unwrap();
        assert_eq!(
            cli.presentation_mode(),
            PresentationMode::Combined { write_file: true }
        );
    }

    #[test]
    fn test_filter_and_root() {
        let cli =
            Cli::try_parse_from(["jsonld-extract", "index.html", "--root", "public"]).unwrap();
        assert_eq!(cli.name_filter(), Some("index.html"));
        assert_eq!(cli.create_cli_overrides().root, Some(PathBuf::from("public")));
    }

    #[test]
    fn test_rejects_unknown_output_target() {
        assert!(Cli::try_parse_from(["jsonld-extract", "--output", "yaml"]).is_err());
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["jsonld-extract", "-q", "-v"]).is_err());

        let cli = Cli::try_parse_from(["jsonld-extract", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_load_config_applies_root_override() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config_path = temp_dir.path().join("jsonld.toml");
        std::fs::write(&config_path, "[report]\nsite_url = \"https://example.net\"\n").unwrap();

        let cli = Cli::try_parse_from([
            "jsonld-extract",
            "--config",
            config_path.to_str().unwrap(),
            "--root",
            "site",
        ])
        .unwrap();

        let config = cli.load_config().unwrap();
        assert_eq!(config.scan.root, PathBuf::from("site"));
        assert_eq!(config.report.site_url, "https://example.net");
    }
}
