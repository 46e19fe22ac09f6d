//! Fetch, cache, open, and parse, in that order.

use bestchange_fetch::{ArchiveError, BundleArchive, BundleSource, CacheStore, members};
use bestchange_parse::parse_members;
use bestchange_types::{BestChangeError, Dataset, PipelineState, Result};
use tracing::{debug, info, warn};

/// Maps archive failures onto the fatal taxonomy.
fn archive_error(error: ArchiveError) -> BestChangeError {
    match error {
        ArchiveError::MissingMember(name) => BestChangeError::MissingMember(name),
        other => BestChangeError::CorruptArchive(other.to_string()),
    }
}

/// Checks that fetched bytes open as an archive with every required member.
///
/// # Errors
///
/// Returns [`BestChangeError::CorruptArchive`] or
/// [`BestChangeError::MissingMember`].
pub fn validate_bundle(bytes: &[u8]) -> Result<()> {
    BundleArchive::open(bytes)
        .and_then(|archive| archive.check_required())
        .map_err(archive_error)
}

/// Opens bundle bytes and parses every member into a [`Dataset`].
///
/// The currencies, exchangers, and rates members are required. The info
/// member only carries metadata, so a bundle without one still loads with
/// empty metadata.
///
/// # Errors
///
/// Returns [`BestChangeError::CorruptArchive`] if the bytes are not a
/// readable archive, or [`BestChangeError::MissingMember`] if a required
/// member is absent.
pub fn parse_bundle(bytes: Vec<u8>) -> Result<Dataset> {
    let mut archive = BundleArchive::open(bytes).map_err(archive_error)?;
    debug!(members = ?archive.member_names(), "archive opened");

    let currencies = archive
        .read_member(members::CURRENCIES)
        .map_err(archive_error)?;
    let exchangers = archive
        .read_member(members::EXCHANGERS)
        .map_err(archive_error)?;
    let rates = archive.read_member(members::RATES).map_err(archive_error)?;
    let info = match archive.read_member(members::INFO) {
        Ok(info) => info,
        Err(ArchiveError::MissingMember(name)) => {
            warn!(member = %name, "bundle has no info member, metadata left empty");
            Vec::new()
        }
        Err(e) => return Err(archive_error(e)),
    };

    Ok(parse_members(&currencies, &exchangers, &rates, &info))
}

/// A single load of the bundle.
///
/// A pipeline starts [`PipelineState::Idle`] and runs once. A fresh cache
/// goes straight to parsing; otherwise the bundle is fetched, checked, and
/// written to the cache first. A download that is not a usable bundle is never
/// cached. Parsing always reads the bundle back from the cache file.
/// After [`PipelineState::Ready`] or [`PipelineState::Failed`] the pipeline
/// cannot be run again.
#[derive(Debug)]
pub struct Pipeline<S> {
    cache: CacheStore,
    source: S,
    state: PipelineState,
}

impl<S: BundleSource> Pipeline<S> {
    /// Creates an idle pipeline.
    #[must_use]
    pub const fn new(cache: CacheStore, source: S) -> Self {
        Self {
            cache,
            source,
            state: PipelineState::Idle,
        }
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> PipelineState {
        self.state
    }

    /// Returns the cache store.
    #[must_use]
    pub const fn cache(&self) -> &CacheStore {
        &self.cache
    }

    /// Consumes the pipeline, returning the cache store.
    #[must_use]
    pub fn into_cache(self) -> CacheStore {
        self.cache
    }

    /// Runs the pipeline to completion.
    ///
    /// # Errors
    ///
    /// Returns [`BestChangeError::InvalidState`] if the pipeline already ran,
    /// otherwise the error of the stage that failed.
    pub async fn run(&mut self) -> Result<Dataset> {
        if self.state != PipelineState::Idle {
            return Err(BestChangeError::InvalidState(self.state));
        }

        match self.execute().await {
            Ok(dataset) => {
                self.transition(PipelineState::Ready);
                Ok(dataset)
            }
            Err(e) => {
                warn!(stage = %self.state, error = %e, "bundle load failed");
                self.transition(PipelineState::Failed);
                Err(e)
            }
        }
    }

    async fn execute(&mut self) -> Result<Dataset> {
        if self.cache.is_fresh() {
            info!(path = %self.cache.path().display(), "cached bundle is fresh, skipping fetch");
        } else {
            self.transition(PipelineState::Fetching);
            let bytes = self.source.fetch().await.map_err(|e| {
                BestChangeError::FetchUnavailable(format!("{}: {e}", self.source.describe()))
            })?;
            validate_bundle(&bytes)?;
            self.cache
                .write(&bytes)
                .map_err(|e| BestChangeError::Cache(e.to_string()))?;
        }

        self.transition(PipelineState::Parsing);
        let bytes = self
            .cache
            .read()
            .map_err(|e| BestChangeError::Cache(e.to_string()))?;

        tokio::task::spawn_blocking(move || parse_bundle(bytes))
            .await
            .map_err(|e| BestChangeError::Io(std::io::Error::other(e)))?
    }

    fn transition(&mut self, next: PipelineState) {
        debug!(from = %self.state, to = %next, "pipeline transition");
        self.state = next;
    }
}
