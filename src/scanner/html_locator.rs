use crate::config::ScanConfig;
use crate::error::{JsonLdError, Result};
use crate::scanner::file_filter::FileFilter;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Enumerates HTML files below a root directory.
///
/// Every call to [`HtmlLocator::paths`] starts a new walk, so the sequence can be
/// consumed more than once. Entries are visited with siblings sorted by file name,
/// which yields the same order as sorting the full paths component by component.
///
/// Symlinked directories are not descended into, but a symlink that resolves to a
/// regular file is yielded like the file itself.
pub struct HtmlLocator {
    root: PathBuf,
    filter: FileFilter,
}

impl HtmlLocator {
    pub fn new(config: &ScanConfig) -> Self {
        Self {
            root: config.root.clone(),
            filter: FileFilter::new(config),
        }
    }

    pub fn with_name_filter(mut self, filter: Option<&str>) -> Self {
        self.filter = self.filter.with_name_filter(filter);
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The only check that aborts a run: the root must be an existing directory.
    pub fn ensure_root(&self) -> Result<()> {
        if !self.root.is_dir() {
            return Err(JsonLdError::RootNotFound {
                path: self.root.clone(),
            });
        }
        Ok(())
    }

    pub fn paths(&self) -> impl Iterator<Item = Result<PathBuf>> + '_ {
        WalkDir::new(&self.root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(move |e| self.should_traverse(e))
            .filter_map(move |entry| match entry {
                Ok(entry) => {
                    if is_regular_file(&entry) && self.filter.is_candidate(entry.path()) {
                        Some(Ok(entry.into_path()))
                    } else {
                        None
                    }
                }
                Err(err) => Some(Err(JsonLdError::from(err))),
            })
    }

    pub fn collect_paths(&self) -> Result<Vec<PathBuf>> {
        self.ensure_root()?;
        self.paths().collect()
    }

    fn should_traverse(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 || !entry.file_type().is_dir() {
            return true;
        }
        self.filter.should_traverse_directory(entry.path())
    }
}

fn is_regular_file(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    file_type.is_file() || (file_type.is_symlink() && entry.path().is_file())
}
