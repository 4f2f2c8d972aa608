//! Text rendering for the report and combined-graph views.

use crate::error::Result;
use crate::extractor::{CombinedGraph, PageResult, Record};
use serde_json::Value;
use std::path::Path;

pub const NOTHING_FOUND: &str = "No JSON-LD found in HTML files.";

const UNKNOWN_TYPE: &str = "Unknown";
const MISSING_ID: &str = "no @id";

/// An empty line, a rule of `=`, and another empty line.
pub fn separator() -> String {
    format!("\n{}\n\n", "=".repeat(70))
}

pub fn render_report(root: &Path, pages: &[PageResult], site_url: &str) -> Result<String> {
    let mut out = String::new();
    let mut total_entities = 0;

    out.push_str("# JSON-LD Extraction Report\n");
    out.push_str(&format!("# Source: {}\n", root.display()));

    for page in pages {
        out.push_str(&separator());
        out.push_str(&format!("## {}\n", page.file));
        out.push_str(&format!("## Path: {}\n", page.path.display()));
        out.push_str(&format!("## Entities: {}\n", page.count()));
        out.push('\n');

        for (index, record) in page.records.iter().enumerate() {
            out.push_str(&format!(
                "### Entity {}: {}\n",
                index + 1,
                label(record, "@type", UNKNOWN_TYPE)
            ));
            out.push_str(&format!("### @id: {}\n", label(record, "@id", MISSING_ID)));
            out.push('\n');
            out.push_str(&serde_json::to_string_pretty(record)?);
            out.push_str("\n\n");
        }

        total_entities += page.count();
    }

    out.push_str(&separator());
    out.push_str(&format!(
        "# TOTAL: {} entities from {} files\n",
        total_entities,
        pages.len()
    ));
    out.push('\n');
    out.push_str("# Validation URLs:\n");
    out.push_str(&format!(
        "# - Google: https://search.google.com/test/rich-results?url={}\n",
        site_url
    ));
    out.push_str(&format!(
        "# - Schema.org: https://validator.schema.org/#url={}\n",
        site_url
    ));

    Ok(out)
}

pub fn render_combined(pages: &[PageResult], graph: &CombinedGraph) -> Result<String> {
    let mut out = String::from("# Combined JSON-LD Graph\n");
    out.push_str(&format!(
        "# {} entities from {} files\n",
        graph.len(),
        pages.len()
    ));
    out.push_str(&separator());
    out.push_str(&serde_json::to_string_pretty(graph)?);
    out.push('\n');
    Ok(out)
}

fn label(record: &Record, key: &str, fallback: &str) -> String {
    match record.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => fallback.to_string(),
    }
}
