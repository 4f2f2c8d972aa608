use crate::config::ScanConfig;
use std::path::Path;

/// Decides which walked paths the locator yields.
pub struct FileFilter {
    extensions: Vec<String>,
    exclude_dirs: Vec<String>,
    name_filter: Option<String>,
}

impl FileFilter {
    pub fn new(config: &ScanConfig) -> Self {
        Self {
            extensions: config
                .extensions
                .iter()
                .map(|e| e.trim().trim_start_matches('.').to_string())
                .filter(|e| !e.is_empty())
                .collect(),
            exclude_dirs: config.exclude_dirs.clone(),
            name_filter: None,
        }
    }

    pub fn with_name_filter<S: Into<String>>(mut self, filter: Option<S>) -> Self {
        self.name_filter = filter.map(Into::into).filter(|f| !f.is_empty());
        self
    }

    pub fn is_candidate(&self, path: &Path) -> bool {
        self.has_extension(path) && self.matches_name_filter(path)
    }

    /// Exact, case-sensitive match, the same way `*.html` globbing behaves.
    pub fn has_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|wanted| wanted == ext))
    }

    /// Substring match against the whole path as walked from the root.
    pub fn matches_name_filter(&self, path: &Path) -> bool {
        match self.name_filter {
            Some(ref filter) => path.to_string_lossy().contains(filter.as_str()),
            None => true,
        }
    }

    pub fn should_traverse_directory(&self, path: &Path) -> bool {
        match path.file_name().and_then(|s| s.to_str()) {
            Some(dir_name) => !self.exclude_dirs.iter().any(|exclude| exclude == dir_name),
            None => true,
        }
    }

}
