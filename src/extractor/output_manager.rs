use crate::config::{Config, OutputConfig};
use crate::error::{JsonLdError, Result};
use crate::extractor::aggregator::{CombinedGraph, PageResult};
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Writes extraction results as JSON files below a base directory.
pub struct OutputManager {
    base_path: PathBuf,
    extracted_directory: PathBuf,
    combined_path: PathBuf,
}

impl OutputManager {
    pub fn new(base_path: PathBuf, output: &OutputConfig) -> Result<Self> {
        validate_output_name(&output.extracted_dir)?;
        validate_output_name(&output.combined_file)?;

        Ok(Self {
            extracted_directory: base_path.join(&output.extracted_dir),
            combined_path: base_path.join(&output.combined_file),
            base_path,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.output_base(), &config.output)
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    pub fn extracted_directory(&self) -> &Path {
        &self.extracted_directory
    }

    pub fn combined_path(&self) -> &Path {
        &self.combined_path
    }

    /// Writes each page's records as a JSON array to `<stem>.json`.
    ///
    /// Pages sharing a stem overwrite each other; the last one in scan order wins.
    pub fn write_per_page(
        &self,
        pages: &[PageResult],
        written_callback: Option<&dyn Fn(&Path) -> Result<()>>,
    ) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(&self.extracted_directory).map_err(JsonLdError::Io)?;

        let mut written = Vec::with_capacity(pages.len());
        for page in pages {
            let output_file = self.extracted_directory.join(page_output_name(page)?);
            let content = serde_json::to_string_pretty(&page.records)?;
            fs::write(&output_file, content).map_err(JsonLdError::Io)?;

            if let Some(callback) = written_callback {
                callback(&output_file)?;
            }
            written.push(output_file);
        }

        Ok(written)
    }

    pub fn write_combined(&self, graph: &CombinedGraph) -> Result<PathBuf> {
        if let Some(parent) = self.combined_path.parent() {
            fs::create_dir_all(parent).map_err(JsonLdError::Io)?;
        }

        let content = serde_json::to_string_pretty(graph)?;
        fs::write(&self.combined_path, content).map_err(JsonLdError::Io)?;

        Ok(self.combined_path.clone())
    }
}

fn page_output_name(page: &PageResult) -> Result<String> {
    let stem = page
        .path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| JsonLdError::InvalidPath {
            path: format!("No file name to derive output from: {}", page.path.display()),
        })?;

    Ok(format!("{}.json", stem))
}

// Output names are relative to the base directory and must stay inside it.
fn validate_output_name(name: &str) -> Result<()> {
    let path = Path::new(name);

    if path.is_absolute()
        || path
            .components()
            .any(|c| matches!(c, Component::ParentDir | Component::RootDir | Component::Prefix(_)))
    {
        return Err(JsonLdError::InvalidPath {
            path: format!("Output name must stay inside the output directory: {}", name),
        });
    }

    Ok(())
}
