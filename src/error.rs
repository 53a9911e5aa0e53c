//! Error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading site-level inputs.
///
/// Content scanning never produces these: unreadable or malformed posts are
/// logged and skipped. Only the site configuration and the glossary file are
/// allowed to fail loudly.
#[derive(Error, Debug)]
pub enum FolioError {
    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid site configuration in {path:?}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid glossary in {path:?}: {source}")]
    Glossary {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Post not found: {0}")]
    PostNotFound(String),
}

pub type Result<T> = std::result::Result<T, FolioError>;
