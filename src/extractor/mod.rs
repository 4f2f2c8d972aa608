pub mod aggregator;
pub mod block_extractor;
pub mod output_manager;

pub use aggregator::{Aggregation, Aggregator, CombinedGraph, PageResult, ScanEvent, ScanStatistics};
pub use block_extractor::{BlockExtractor, Extraction, ParseIssue, Record};
pub use output_manager::OutputManager;
