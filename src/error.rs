use thiserror::Error;

pub type Result<T> = std::result::Result<T, IndexerError>;

#[derive(Error, Debug)]
pub enum IndexerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Front-matter error: {0}")]
    FrontMatter(#[from] serde_yaml::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("File processing error: {message}")]
    FileProcessing { message: String },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Resource not found: {message}")]
    NotFound { message: String },
}

impl IndexerError {
    pub fn file_processing<S: Into<String>>(message: S) -> Self {
        Self::FileProcessing {
            message: message.into(),
        }
    }

    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }
}

impl From<tempfile::PersistError> for IndexerError {
    fn from(err: tempfile::PersistError) -> Self {
        Self::Io(err.error)
    }
}

impl From<walkdir::Error> for IndexerError {
    fn from(err: walkdir::Error) -> Self {
        Self::file_processing(format!("Error walking directory: {err}"))
    }
}
