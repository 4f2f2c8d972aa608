pub mod file_filter;
pub mod html_locator;

pub use file_filter::FileFilter;
pub use html_locator::HtmlLocator;
