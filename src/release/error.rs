//! Release build errors
//!
//! Every variant is fatal to the build; nothing is written once one is raised.

use crate::rdf::{ParseError, RdfError, SerializeError};
use std::path::PathBuf;
use thiserror::Error;

/// Release build errors
#[derive(Debug, Error)]
pub enum ReleaseError {
    /// A source document is not valid RDF
    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    /// A source is unreadable or a destination is unwritable
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The release graph could not be serialized
    #[error("Serialization error: {0}")]
    Serialize(#[from] SerializeError),

    /// A configured or generated IRI is invalid
    #[error("RDF error: {0}")]
    Rdf(#[from] RdfError),

    /// Configuration values are inconsistent
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Configuration file is not valid YAML for [`super::ReleaseConfig`]
    #[error("Invalid config file {}: {source}", path.display())]
    ConfigFile {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

impl ReleaseError {
    /// Classify a parser failure on `path`: unreadable files are I/O errors
    pub(crate) fn from_parse(path: impl Into<PathBuf>, err: ParseError) -> Self {
        let path = path.into();
        match err {
            ParseError::Io(source) => ReleaseError::Io { path, source },
            source => ReleaseError::Parse { path, source },
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ReleaseError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type ReleaseResult<T> = Result<T, ReleaseError>;
