pub mod cli;
pub mod config;
pub mod error;
pub mod extractor;
pub mod scanner;
pub mod ui;

// Public API re-exports
pub use cli::{Cli, OutputTarget};
pub use config::{CliOverrides, Config, OutputConfig, ReportConfig, ScanConfig};
pub use error::{JsonLdError, Result, UserFriendlyError};

// Core functionality re-exports
pub use extractor::{
    Aggregation, Aggregator, BlockExtractor, CombinedGraph, Extraction, OutputManager, PageResult,
    ParseIssue, Record, ScanEvent, ScanStatistics,
};
pub use scanner::{FileFilter, HtmlLocator};
pub use ui::{OutputFormatter, PresentationMode, ProgressManager};

use std::path::{Path, PathBuf};

/// What a finished run produced.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub files: usize,
    pub entities: usize,
    pub parse_errors: usize,
    pub written: Vec<PathBuf>,
}

/// Main library interface: scan, extract, aggregate, present.
pub struct JsonLdExtract {
    config: Config,
    output_formatter: OutputFormatter,
    progress_manager: ProgressManager,
}

impl JsonLdExtract {
    pub fn new(config: Config, verbose: u8, quiet: bool) -> Self {
        Self {
            config,
            output_formatter: OutputFormatter::new(verbose, quiet),
            progress_manager: ProgressManager::new(!quiet),
        }
    }

    pub fn from_cli(cli_args: &Cli) -> Result<Self> {
        let config = cli_args.load_config()?;
        Ok(Self::new(config, cli_args.verbose, cli_args.quiet))
    }

    /// Runs the whole pipeline once.
    ///
    /// Finding no JSON-LD at all is a successful run; only a missing root or an
    /// I/O failure returns an error. A failed write to stdout counts as I/O failure.
    pub fn run(&self, filter: Option<&str>, mode: PresentationMode) -> Result<RunSummary> {
        let locator = HtmlLocator::new(&self.config.scan).with_name_filter(filter);
        locator.ensure_root()?;

        self.output_formatter
            .info(&format!("Scanning {}", locator.root().display()));

        let aggregation = self.scan_pages(&locator)?;
        self.output_formatter
            .info(aggregation.stats.display_summary().trim_end());

        let pages = aggregation.pages;
        let mut summary = RunSummary {
            files: pages.len(),
            entities: extractor::aggregator::total_records(&pages),
            parse_errors: aggregation.stats.parse_errors,
            written: Vec::new(),
        };

        if pages.is_empty() {
            self.output_formatter.result(ui::report::NOTHING_FOUND)?;
            return Ok(summary);
        }

        match mode {
            PresentationMode::Report => {
                let report = ui::report::render_report(
                    locator.root(),
                    &pages,
                    &self.config.report.site_url,
                )?;
                self.output_formatter.print_block(&report)?;
            }
            PresentationMode::PerFile => {
                let output_manager = OutputManager::from_config(&self.config)?;
                let written_callback = |path: &Path| -> Result<()> {
                    self.output_formatter
                        .result(&format!("Written: {}", path.display()))?;
                    Ok(())
                };

                summary.written = output_manager.write_per_page(&pages, Some(&written_callback))?;

                self.output_formatter.result("")?;
                self.output_formatter.result(&format!(
                    "Extracted {} entities to {}",
                    summary.entities,
                    output_manager.extracted_directory().display()
                ))?;
            }
            PresentationMode::Combined { write_file } => {
                let graph = CombinedGraph::from_pages(&pages);

                if write_file {
                    let output_manager = OutputManager::from_config(&self.config)?;
                    let path = output_manager.write_combined(&graph)?;
                    self.output_formatter
                        .result(&format!("Written to: {}", path.display()))?;
                    summary.written.push(path);
                } else {
                    let text = ui::report::render_combined(&pages, &graph)?;
                    self.output_formatter.print_block(&text)?;
                }
            }
        }

        Ok(summary)
    }

    fn scan_pages(&self, locator: &HtmlLocator) -> Result<Aggregation> {
        let aggregator = Aggregator::new(BlockExtractor::new()?);
        let spinner = self.progress_manager.create_scan_spinner();

        let event_callback = |event: &ScanEvent| match event {
            ScanEvent::Scanning(path) => {
                ui::progress::update_scan_progress(&spinner, path);
                self.progress_manager.suspend(|| {
                    self.output_formatter
                        .debug(&format!("Scanning {}", path.display()))
                });
            }
            ScanEvent::Skipped { path, issue } => {
                self.progress_manager.suspend(|| {
                    self.output_formatter.warning(&format!(
                        "JSON parse error in {}, {}",
                        path.display(),
                        issue
                    ))
                });
            }
        };

        let aggregation = aggregator.collect_pages(locator.paths(), Some(&event_callback));
        ui::progress::finish_scan_progress(&spinner);

        aggregation
    }

    /// Generate sample configuration file
    pub fn generate_sample_config<P: AsRef<Path>>(output_path: P) -> Result<()> {
        let sample_config = Config::create_sample_config();
        std::fs::write(output_path.as_ref(), sample_config).map_err(JsonLdError::Io)?;
        Ok(())
    }

    pub fn handle_error(&self, error: &JsonLdError) {
        self.output_formatter.print_user_friendly_error(error);
    }
}

pub fn version_info() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use std::fs;
    use tempfile::TempDir;

    struct Site {
        _temp_dir: TempDir,
        base: PathBuf,
        root: PathBuf,
    }

    fn site(pages: &[(&str, String)]) -> Site {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().to_path_buf();
        let root = base.join("web");
        fs::create_dir_all(&root).unwrap();

        for (name, html) in pages {
            let path = root.join(name);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(path, html).unwrap();
        }

        Site {
            _temp_dir: temp_dir,
            base,
            root,
        }
    }

    fn page(blocks: &[&str]) -> String {
        let scripts: String = blocks
            .iter()
            .map(|b| format!("<script type=\"application/ld+json\">\n{}\n</script>\n", b))
            .collect();
        format!("<!DOCTYPE html><html><head>{}</head><body></body></html>", scripts)
    }

    fn app(site: &Site) -> JsonLdExtract {
        let mut config = Config::default();
        config.scan.root = site.root.clone();
        JsonLdExtract::new(config, 0, true)
    }

    #[test]
    fn test_report_mode_skips_pages_without_data() {
        let site = site(&[
            ("a.html", page(&[r##"{"@type":"Person","@id":"#p1"}"##])),
            ("b.html", "<html><body>nothing here</body></html>".to_string()),
        ]);

        let summary = app(&site).run(None, PresentationMode::Report).unwrap();
        assert_eq!(summary.files, 1);
        assert_eq!(summary.entities, 1);
        assert!(summary.written.is_empty());
    }

    #[test]
    fn test_invalid_block_excludes_page() {
        let site = site(&[("broken.html", page(&[r#"{"@type": }"#]))]);

        let summary = app(&site).run(None, PresentationMode::Report).unwrap();
        assert_eq!(summary.files, 0);
        assert_eq!(summary.parse_errors, 1);
    }

    #[test]
    fn test_combined_file_mode() {
        let site = site(&[
            ("one.html", page(&[r##"{"@type":"Organization","@id":"#org","_source_file":"one.html"}"##])),
            ("two.html", page(&[r##"{"@type":"WebSite","@id":"#site"}"##])),
        ]);

        let summary = app(&site)
            .run(None, PresentationMode::Combined { write_file: true })
            .unwrap();

        let combined = site.base.join("jsonld_combined.json");
        assert_eq!(summary.written, vec![combined.clone()]);

        let parsed: Value = serde_json::from_str(&fs::read_to_string(combined).unwrap()).unwrap();
        assert_eq!(
            parsed,
            json!({
                "@context": "https://schema.org",
                "@graph": [
                    {"@type": "Organization", "@id": "#org"},
                    {"@type": "WebSite", "@id": "#site"}
                ]
            })
        );
    }

    #[test]
    fn test_per_file_mode() {
        let site = site(&[
            ("index.html", page(&[r#"{"@type":"WebSite"}"#, r#"{"@type":"Organization"}"#])),
            ("blog/post.html", page(&[r#"{"@type":"BlogPosting"}"#])),
            ("empty.html", "<html></html>".to_string()),
        ]);

        let summary = app(&site).run(None, PresentationMode::PerFile).unwrap();

        let dir = site.base.join("jsonld_extracted");
        assert_eq!(summary.written, vec![dir.join("post.json"), dir.join("index.json")]);
        assert!(!dir.join("empty.json").exists());

        let index: Value =
            serde_json::from_str(&fs::read_to_string(dir.join("index.json")).unwrap()).unwrap();
        assert_eq!(index, json!([{"@type": "WebSite"}, {"@type": "Organization"}]));
    }

    #[test]
    fn test_filter_limits_pages() {
        let site = site(&[
            ("index.html", page(&[r#"{"@type":"WebSite"}"#])),
            ("about.html", page(&[r#"{"@type":"AboutPage"}"#])),
        ]);

        let summary = app(&site)
            .run(Some("about"), PresentationMode::Combined { write_file: false })
            .unwrap();
        assert_eq!(summary.files, 1);
        assert!(summary.written.is_empty());
        assert!(!site.base.join("jsonld_combined.json").exists());
    }

    #[test]
    fn test_empty_root_is_success() {
        let site = site(&[]);

        let summary = app(&site).run(None, PresentationMode::PerFile).unwrap();
        assert_eq!(summary.files, 0);
        assert!(!site.base.join("jsonld_extracted").exists());
    }

    #[test]
    fn test_missing_root_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.scan.root = temp_dir.path().join("web");

        let result = JsonLdExtract::new(config, 0, true).run(None, PresentationMode::Report);
        assert!(matches!(result, Err(JsonLdError::RootNotFound { .. })));
    }

    #[test]
    fn test_sample_config_generation() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("jsonld.toml");

        JsonLdExtract::generate_sample_config(&config_path).unwrap();

        let content = fs::read_to_string(&config_path).unwrap();
        assert!(content.contains("[scan]"));
        assert!(content.contains("[report]"));
    }

    #[test]
    fn test_version_info() {
        assert!(!version_info().is_empty());
    }
}
