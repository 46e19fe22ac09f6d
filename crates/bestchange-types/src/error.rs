//! Error types for bestchange.

use thiserror::Error;

use crate::PipelineState;

/// Result type alias for bestchange operations.
pub type Result<T> = std::result::Result<T, BestChangeError>;

/// Fatal errors that abort a bundle load.
///
/// Row-level problems in the vendor data are never reported here; the parsers
/// skip those rows and count them in [`crate::ParseReport`].
#[derive(Error, Debug)]
pub enum BestChangeError {
    /// The remote source was unreachable, timed out, or returned no data.
    #[error("Fetch failed, bundle source unavailable: {0}")]
    FetchUnavailable(String),

    /// The cached bytes are not a readable archive.
    #[error("Archive error, corrupt or non-archive bundle: {0}")]
    CorruptArchive(String),

    /// A required member is absent from the archive.
    #[error("Archive error, missing member: {0}")]
    MissingMember(String),

    /// The HTTP client could not be built from its configuration.
    #[error("Client setup failed: {0}")]
    ClientSetup(String),

    /// The cache file could not be created, written, or read.
    #[error("Cache error: {0}")]
    Cache(String),

    /// The pipeline was run again after it finished.
    #[error("Pipeline already {0}")]
    InvalidState(PipelineState),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
