pub mod output;
pub mod progress;
pub mod report;

pub use output::{OutputFormatter, PresentationMode};
pub use progress::ProgressManager;
