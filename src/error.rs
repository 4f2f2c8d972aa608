use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum JsonLdError {
    #[error("Web directory not found: {}", path.display())]
    RootNotFound { path: PathBuf },

    #[error("Failed to read {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO operation failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid extraction pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Failed to serialize JSON output: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Path validation failed: {path}")]
    InvalidPath { path: String },
}

pub trait UserFriendlyError {
    fn user_message(&self) -> String;
    fn suggestion(&self) -> Option<String>;
}

impl UserFriendlyError for JsonLdError {
    fn user_message(&self) -> String {
        match self {
            JsonLdError::RootNotFound { path } => {
                format!("Error: Web directory not found: {}", path.display())
            }
            JsonLdError::ReadFile { path, source } => {
                format!("Could not read {}: {}", path.display(), source)
            }
            JsonLdError::Walk(err) => match err.path() {
                Some(path) => format!("Could not scan {}: {}", path.display(), err),
                None => format!("Could not scan directory: {}", err),
            },
            JsonLdError::Config { message } => {
                format!("Configuration error: {}", message)
            }
            JsonLdError::InvalidPath { path } => {
                format!("Invalid file path: {}", path)
            }
            _ => self.to_string(),
        }
    }

    fn suggestion(&self) -> Option<String> {
        match self {
            JsonLdError::RootNotFound { .. } => Some(
                "Run from the directory containing `web/`, pass --root <DIR>, or set `root` under [scan] in jsonld.toml.".to_string()
            ),
            JsonLdError::ReadFile { .. } => Some(
                "Check that the file is readable and contains UTF-8 text.".to_string()
            ),
            JsonLdError::Walk(_) => Some(
                "Ensure you have read permission for every directory under the scan root.".to_string()
            ),
            JsonLdError::Config { .. } => Some(
                "Check your configuration file syntax, or regenerate one with --generate-config.".to_string()
            ),
            JsonLdError::Io(_) => Some(
                "Ensure you have write permission for the output directory.".to_string()
            ),
            _ => None,
        }
    }
}

impl From<url::ParseError> for JsonLdError {
    fn from(error: url::ParseError) -> Self {
        JsonLdError::Config {
            message: format!("Invalid site URL: {}", error),
        }
    }
}

pub type Result<T> = std::result::Result<T, JsonLdError>;
