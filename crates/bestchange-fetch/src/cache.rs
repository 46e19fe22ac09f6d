//! Filesystem cache for the raw bundle.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};
use tempfile::{NamedTempFile, TempPath};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while reading or writing the cache file.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Failed to create the cache directory.
    #[error("Failed to create directory '{path}': {source}")]
    CreateDir {
        /// The path that could not be created.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to write the staged bundle.
    #[error("Failed to write file '{path}': {source}")]
    WriteFile {
        /// The path being written.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to move the staged bundle over the cache file.
    #[error("Failed to replace file '{path}': {source}")]
    Replace {
        /// The cache path.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to read the cache file.
    #[error("Failed to read file '{path}': {source}")]
    ReadFile {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to allocate the scratch file used when caching is disabled.
    #[error("Failed to create scratch file: {0}")]
    Scratch(#[source] std::io::Error),
}

/// Returns true if a file exists at `path` and was modified less than
/// `max_age` ago.
///
/// File attributes are read from the filesystem on every call, so a bundle
/// replaced by another process is seen immediately.
#[must_use]
pub fn is_fresh(path: &Path, max_age: Duration) -> bool {
    is_fresh_at(path, max_age, SystemTime::now())
}

/// Same as [`is_fresh`], measured against `now`.
///
/// A file written at `T` is fresh for every `now < T + max_age`. A
/// modification time later than `now` counts as age zero.
#[must_use]
pub fn is_fresh_at(path: &Path, max_age: Duration, now: SystemTime) -> bool {
    let Ok(metadata) = fs::metadata(path) else {
        return false;
    };
    if !metadata.is_file() {
        return false;
    }
    let Ok(modified) = metadata.modified() else {
        return false;
    };

    let age = now.duration_since(modified).unwrap_or(Duration::ZERO);
    age < max_age
}

/// Cache file holding the most recent bundle.
///
/// A persistent store lives at a caller-chosen path and is fresh for `ttl`
/// after each write. A disabled store writes to a scratch file unique to this
/// value, is never fresh, and removes the scratch file when dropped.
///
/// Writes are atomic: the bundle is staged next to the cache file and renamed
/// over it, so readers see either the old bundle or the new one. Concurrent
/// writers may still race; the last rename wins.
#[derive(Debug)]
pub struct CacheStore {
    path: PathBuf,
    ttl: Option<Duration>,
    scratch: Option<TempPath>,
}

impl CacheStore {
    /// Creates a store backed by `path`, fresh for `ttl` after each write.
    #[must_use]
    pub fn persistent(path: impl Into<PathBuf>, ttl: Duration) -> Self {
        Self {
            path: path.into(),
            ttl: Some(ttl),
            scratch: None,
        }
    }

    /// Creates a store that never serves cached data.
    ///
    /// # Errors
    ///
    /// Returns an error if the scratch file cannot be created.
    pub fn disabled() -> Result<Self, CacheError> {
        let scratch = tempfile::Builder::new()
            .prefix("bestchange-")
            .suffix(".zip")
            .tempfile()
            .map_err(CacheError::Scratch)?
            .into_temp_path();

        Ok(Self {
            path: scratch.to_path_buf(),
            ttl: None,
            scratch: Some(scratch),
        })
    }

    /// Returns the path of the cache file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the freshness window, or `None` when caching is disabled.
    #[must_use]
    pub const fn ttl(&self) -> Option<Duration> {
        self.ttl
    }

    /// Returns true if cached bundles may be reused.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.scratch.is_none()
    }

    /// Returns true if the cached bundle can be used without fetching.
    #[must_use]
    pub fn is_fresh(&self) -> bool {
        self.ttl.is_some_and(|ttl| is_fresh(&self.path, ttl))
    }

    /// Atomically replaces the cache file with `bytes`.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory, staging file, or rename fails.
    pub fn write(&self, bytes: &[u8]) -> Result<(), CacheError> {
        let dir = self
            .path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        fs::create_dir_all(dir).map_err(|e| CacheError::CreateDir {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let mut staged = NamedTempFile::new_in(dir).map_err(|e| CacheError::WriteFile {
            path: dir.to_path_buf(),
            source: e,
        })?;
        staged
            .write_all(bytes)
            .and_then(|()| staged.as_file().sync_all())
            .map_err(|e| CacheError::WriteFile {
                path: staged.path().to_path_buf(),
                source: e,
            })?;

        staged
            .persist(&self.path)
            .map_err(|e| CacheError::Replace {
                path: self.path.clone(),
                source: e.error,
            })?;

        debug!(path = %self.path.display(), bytes = bytes.len(), "cache file replaced");
        Ok(())
    }

    /// Reads the whole cache file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn read(&self) -> Result<Vec<u8>, CacheError> {
        fs::read(&self.path).map_err(|e| CacheError::ReadFile {
            path: self.path.clone(),
            source: e,
        })
    }
}
