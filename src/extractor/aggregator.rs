use crate::error::{JsonLdError, Result};
use crate::extractor::block_extractor::{BlockExtractor, ParseIssue, Record};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

pub const SCHEMA_ORG_CONTEXT: &str = "https://schema.org";

/// Keys starting with this prefix are internal bookkeeping and never leave the combined graph.
pub const PROVENANCE_PREFIX: char = '_';

/// Records found in a single HTML file, in document order.
#[derive(Debug, Clone, PartialEq)]
pub struct PageResult {
    pub file: String,
    pub path: PathBuf,
    pub records: Vec<Record>,
}

impl PageResult {
    pub fn new(path: PathBuf, records: Vec<Record>) -> Self {
        let file = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        Self {
            file,
            path,
            records,
        }
    }

    pub fn count(&self) -> usize {
        self.records.len()
    }
}

pub fn total_records(pages: &[PageResult]) -> usize {
    pages.iter().map(PageResult::count).sum()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinedGraph {
    #[serde(rename = "@context")]
    pub context: String,
    #[serde(rename = "@graph")]
    pub graph: Vec<Record>,
}

impl CombinedGraph {
    pub fn from_pages(pages: &[PageResult]) -> Self {
        let graph = pages
            .iter()
            .flat_map(|page| page.records.iter())
            .map(strip_provenance)
            .collect();

        Self {
            context: SCHEMA_ORG_CONTEXT.to_string(),
            graph,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.graph.len()
    }
}

/// Copy of `record` without top-level provenance keys. Non-object records are unchanged.
pub fn strip_provenance(record: &Record) -> Record {
    match record {
        Value::Object(map) => Value::Object(
            map.iter()
                .filter(|(key, _)| !key.starts_with(PROVENANCE_PREFIX))
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect(),
        ),
        other => other.clone(),
    }
}

/// What happened while scanning, reported as it happens.
pub enum ScanEvent<'a> {
    Scanning(&'a Path),
    Skipped {
        path: &'a Path,
        issue: &'a ParseIssue,
    },
}

#[derive(Debug, Clone, Default)]
pub struct ScanStatistics {
    pub files_scanned: usize,
    pub files_with_data: usize,
    pub total_records: usize,
    pub parse_errors: usize,
}

impl ScanStatistics {
    pub fn display_summary(&self) -> String {
        let mut summary = format!(
            "Scan Results:\n  Files scanned: {}\n  Files with JSON-LD: {}\n  Entities: {}\n",
            self.files_scanned, self.files_with_data, self.total_records
        );

        if self.parse_errors > 0 {
            summary.push_str(&format!("  Blocks skipped: {}\n", self.parse_errors));
        }

        summary
    }
}

#[derive(Debug, Clone, Default)]
pub struct Aggregation {
    pub pages: Vec<PageResult>,
    pub stats: ScanStatistics,
}

pub struct Aggregator {
    extractor: BlockExtractor,
}

impl Aggregator {
    pub fn new(extractor: BlockExtractor) -> Self {
        Self { extractor }
    }

    /// Reads and extracts every path in order, keeping only pages with at least one record.
    ///
    /// A path that cannot be read aborts the whole collection.
    pub fn collect_pages<I>(
        &self,
        paths: I,
        event_callback: Option<&dyn Fn(&ScanEvent)>,
    ) -> Result<Aggregation>
    where
        I: IntoIterator<Item = Result<PathBuf>>,
    {
        let mut aggregation = Aggregation::default();

        for path in paths {
            let path = path?;

            if let Some(callback) = event_callback {
                callback(&ScanEvent::Scanning(&path));
            }

            let content = fs::read_to_string(&path).map_err(|source| JsonLdError::ReadFile {
                path: path.clone(),
                source,
            })?;
            let extraction = self.extractor.extract(&content);

            aggregation.stats.files_scanned += 1;
            aggregation.stats.parse_errors += extraction.issues.len();

            if let Some(callback) = event_callback {
                for issue in &extraction.issues {
                    callback(&ScanEvent::Skipped {
                        path: &path,
                        issue,
                    });
                }
            }

            if extraction.is_empty() {
                continue;
            }

            aggregation.stats.files_with_data += 1;
            aggregation.stats.total_records += extraction.records.len();
            aggregation
                .pages
                .push(PageResult::new(path, extraction.records));
        }

        Ok(aggregation)
    }
}
