//! Error type shared by the parser, generator and render sinks

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("event #{index} ({event_name}): missing field `{field}`")]
    MissingField {
        index: usize,
        event_name: String,
        field: String,
    },

    #[error("event #{index} ({event_name}): field `{field}` is not {expected}")]
    InvalidField {
        index: usize,
        event_name: String,
        field: String,
        expected: &'static str,
    },

    #[error("event #{index} ({event_name}): json_state is not valid JSON: {source}")]
    InvalidState {
        index: usize,
        event_name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to start {binary}: {source}")]
    Spawn {
        binary: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode script: {0}")]
    Encode(#[source] std::io::Error),

    #[error("remote render failed: {0}")]
    Http(#[from] reqwest::Error),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
