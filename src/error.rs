//! Error types for twig

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Every failure twig can hit. All of them abort the run.
#[derive(Error, Debug)]
pub enum TwigError {
    #[error("invalid arguments: {message}")]
    ArgumentParse { message: String },

    #[error("cannot resolve '{}': {source}", .path.display())]
    PathResolution {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot open directory '{}': {source}", .path.display())]
    DirectoryOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error reading directory '{}': {source}", .path.display())]
    Enumeration {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error writing output: {0}")]
    OutputWrite(#[from] io::Error),
}

impl TwigError {
    pub(crate) fn argument(message: impl Into<String>) -> Self {
        Self::ArgumentParse {
            message: message.into(),
        }
    }
}

/// Result type alias for twig operations
pub type Result<T> = std::result::Result<T, TwigError>;
