use crate::error::Result;
use regex::Regex;
use serde_json::Value;
use std::fmt;

/// One parsed JSON-LD block. Any JSON shape is accepted.
pub type Record = Value;

const JSONLD_SCRIPT_PATTERN: &str =
    r#"(?s)<script(?:\s[^>]*?)?\stype\s*=\s*["']application/ld\+json["'][^>]*>\s*(.*?)\s*</script\s*>"#;

/// A matched block whose body did not decode as JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseIssue {
    /// 1-based position of the block among all matches in the document.
    pub block: usize,
    /// Byte offset of the block body in the document.
    pub offset: usize,
    /// Line of the document where the block body starts.
    pub line: usize,
    /// Decoder message, with line and column relative to the block body.
    pub message: String,
}

impl fmt::Display for ParseIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "block {} (document line {}): {}",
            self.block, self.line, self.message
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct Extraction {
    pub records: Vec<Record>,
    pub issues: Vec<ParseIssue>,
}

impl Extraction {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Finds `<script type="application/ld+json">` blocks with a regular expression.
///
/// Markup that defeats the pattern (nested scripts, a `>` inside an attribute value)
/// yields no match rather than an error.
pub struct BlockExtractor {
    pattern: Regex,
}

impl BlockExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(JSONLD_SCRIPT_PATTERN)?,
        })
    }

    pub fn extract(&self, html: &str) -> Extraction {
        let mut extraction = Extraction::default();

        for (index, captures) in self.pattern.captures_iter(html).enumerate() {
            let Some(body) = captures.get(1) else {
                continue;
            };

            match serde_json::from_str::<Record>(body.as_str()) {
                Ok(record) => extraction.records.push(record),
                Err(err) => extraction.issues.push(ParseIssue {
                    block: index + 1,
                    offset: body.start(),
                    line: line_at(html, body.start()),
                    message: err.to_string(),
                }),
            }
        }

        extraction
    }
}

fn line_at(text: &str, offset: usize) -> usize {
    text[..offset].bytes().filter(|&b| b == b'\n').count() + 1
}
