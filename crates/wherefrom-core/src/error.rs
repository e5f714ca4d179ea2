use std::path::PathBuf;
use thiserror::Error;

/// Core error type for wherefrom operations.
///
/// A specifier that does not resolve is *not* an error; it is reported
/// through [`crate::resolve::ResolutionResult`]. These variants cover the
/// fatal environment failures only: a source file outside any package
/// boundary, or a manifest that cannot be read or parsed.
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read manifest at {path}: {source}")]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse manifest at {path}: {source}")]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Package boundary not found above {start}")]
    BoundaryNotFound { start: PathBuf },
}
