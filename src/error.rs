use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum PostbuildError {
    #[error("Config file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Invalid config: {message}")]
    ConfigInvalid { message: String },

    #[error("Metadata file not found: {path}")]
    MetadataNotFound { path: PathBuf },

    #[error("Metadata error in {path}: {message}")]
    Metadata { path: PathBuf, message: String },

    #[error("No blog directory entry in {path}")]
    MissingBlogSection { path: PathBuf },

    #[error("Feed error: {0}")]
    Feed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PostbuildError>;
