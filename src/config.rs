use crate::error::{JsonLdError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub scan: ScanConfig,
    pub output: OutputConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ScanConfig {
    pub root: PathBuf,
    pub extensions: Vec<String>,
    pub exclude_dirs: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Where output artifacts land; the parent of `scan.root` when unset.
    pub base_directory: Option<PathBuf>,
    pub extracted_dir: String,
    pub combined_file: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ReportConfig {
    pub site_url: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("web"),
            extensions: vec!["html".to_string()],
            exclude_dirs: Vec::new(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            base_directory: None,
            extracted_dir: "jsonld_extracted".to_string(),
            combined_file: "jsonld_combined.json".to_string(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            site_url: "https://integritystudio.ai".to_string(),
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(JsonLdError::Config {
                message: format!("Configuration file not found: {}", path.display()),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| JsonLdError::Config {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| JsonLdError::Config {
            message: format!("Failed to parse config file {}: {}", path.display(), e),
        })?;

        Ok(config)
    }

    pub fn load_with_defaults<P: AsRef<Path>>(config_path: Option<P>) -> Result<Self> {
        match config_path {
            Some(path) => Self::load_from_file(path),
            None => {
                let default_paths = ["jsonld.toml", "jsonld.config.toml", ".jsonld.toml"];

                for default_path in &default_paths {
                    if Path::new(default_path).exists() {
                        return Self::load_from_file(default_path);
                    }
                }

                Ok(Self::default())
            }
        }
    }

    pub fn merge_with_cli_args(&mut self, cli_args: &CliOverrides) {
        if let Some(ref root) = cli_args.root {
            self.scan.root = root.clone();
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.scan.extensions.iter().all(|e| e.trim().is_empty()) {
            return Err(JsonLdError::Config {
                message: "At least one file extension must be specified".to_string(),
            });
        }

        if self.output.extracted_dir.trim().is_empty() || self.output.combined_file.trim().is_empty() {
            return Err(JsonLdError::Config {
                message: "Output directory and combined file names must not be empty".to_string(),
            });
        }

        let site = Url::parse(&self.report.site_url)?;
        if !matches!(site.scheme(), "http" | "https") {
            return Err(JsonLdError::Config {
                message: format!(
                    "Site URL must use http or https: {}",
                    self.report.site_url
                ),
            });
        }

        Ok(())
    }

    /// Directory that receives `jsonld_extracted/` and `jsonld_combined.json`.
    pub fn output_base(&self) -> PathBuf {
        if let Some(ref base) = self.output.base_directory {
            return base.clone();
        }

        match self.scan.root.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    pub fn create_sample_config() -> String {
        let sample_config = Self::default();
        toml::to_string_pretty(&sample_config).unwrap_or_else(|_| String::new())
    }
}

#[derive(Debug, Default)]
pub struct CliOverrides {
    pub root: Option<PathBuf>,
}

impl CliOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_root(mut self, root: Option<PathBuf>) -> Self {
        self.root = root;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.scan.root, PathBuf::from("web"));
        assert_eq!(config.scan.extensions, vec!["html"]);
        assert_eq!(config.output.extracted_dir, "jsonld_extracted");
        assert_eq!(config.output.combined_file, "jsonld_combined.json");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        config.scan.extensions.clear();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.report.site_url = "ftp://example.com".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.report.site_url = "example.com".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_sample_config_loads_back() {
        let temp_file = NamedTempFile::new().unwrap();
        std::fs::write(temp_file.path(), Config::create_sample_config()).unwrap();

        let loaded_config = Config::load_from_file(temp_file.path()).unwrap();
        assert_eq!(loaded_config.scan.root, PathBuf::from("web"));
        assert_eq!(loaded_config.report.site_url, "https://integritystudio.ai");
        assert!(loaded_config.validate().is_ok());
    }

    #[test]
    fn test_malformed_config_is_a_config_error() {
        let temp_file = NamedTempFile::new().unwrap();
        std::fs::write(temp_file.path(), "[scan\nroot = ").unwrap();

        let result = Config::load_from_file(temp_file.path());
        assert!(matches!(result, Err(JsonLdError::Config { .. })));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let temp_file = NamedTempFile::new().unwrap();
        std::fs::write(temp_file.path(), "[scan]\nroot = \"site/public\"\n").unwrap();

        let config = Config::load_from_file(temp_file.path()).unwrap();
        assert_eq!(config.scan.root, PathBuf::from("site/public"));
        assert_eq!(config.scan.extensions, vec!["html"]);
        assert_eq!(config.output.combined_file, "jsonld_combined.json");
    }

    #[test]
    fn test_missing_config_file() {
        let result = Config::load_from_file("/definitely/not/here/jsonld.toml");
        assert!(matches!(result, Err(JsonLdError::Config { .. })));
    }

    #[test]
    fn test_cli_overrides() {
        let mut config = Config::default();

        config.merge_with_cli_args(&CliOverrides::new());
        assert_eq!(config.scan.root, PathBuf::from("web"));

        let overrides = CliOverrides::new().with_root(Some(PathBuf::from("public")));
        config.merge_with_cli_args(&overrides);

        assert_eq!(config.scan.root, PathBuf::from("public"));
        assert!(config.output.base_directory.is_none());
    }

    #[test]
    fn test_output_base_follows_root_parent() {
        let mut config = Config::default();
        assert_eq!(config.output_base(), PathBuf::from("."));

        config.scan.root = PathBuf::from("/srv/site/web");
        assert_eq!(config.output_base(), PathBuf::from("/srv/site"));

        config.output.base_directory = Some(PathBuf::from("/tmp/out"));
        assert_eq!(config.output_base(), PathBuf::from("/tmp/out"));
    }

    #[test]
    fn test_sample_config_generation() {
        let sample = Config::create_sample_config();
        assert!(sample.contains("[scan]"));
        assert!(sample.contains("[output]"));
        assert!(sample.contains("[report]"));
    }
}
