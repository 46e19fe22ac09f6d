//! ZIP access for the downloaded bundle.

use std::io::{Cursor, Read};
use thiserror::Error;
use zip::ZipArchive;
use zip::result::ZipError;

/// Member names inside the BestChange bundle.
pub mod members {
    /// Currencies: `id;position;name;...`.
    pub const CURRENCIES: &str = "bm_cy.dat";
    /// Exchangers: `id;name;...`.
    pub const EXCHANGERS: &str = "bm_exch.dat";
    /// Rates: `from;to;exchanger;give;receive;reserve;...`.
    pub const RATES: &str = "bm_rates.dat";
    /// Descriptor: `key=value` lines.
    pub const INFO: &str = "bm_info.dat";

    /// Members a bundle cannot load without.
    pub const REQUIRED: [&str; 3] = [CURRENCIES, EXCHANGERS, RATES];
}

/// Errors that can occur while reading the bundle archive.
#[derive(Error, Debug)]
pub enum ArchiveError {
    /// No bytes to open.
    #[error("Empty input data")]
    Empty,

    /// The bytes are not a ZIP archive.
    #[error("Not a valid ZIP archive: {0}")]
    Corrupt(#[source] ZipError),

    /// The archive has no member with this name.
    #[error("Member '{0}' not found in archive")]
    MissingMember(String),

    /// The member exists but its data cannot be decompressed.
    #[error("Member '{name}' is unreadable: {message}")]
    CorruptMember {
        /// Member name.
        name: String,
        /// What went wrong.
        message: String,
    },
}

/// An opened bundle, held entirely in memory.
pub struct BundleArchive {
    archive: ZipArchive<Cursor<Vec<u8>>>,
}

impl BundleArchive {
    /// Opens `bytes` as a ZIP archive.
    ///
    /// # Errors
    ///
    /// Returns an error if `bytes` is empty or not a ZIP archive.
    pub fn open(bytes: impl Into<Vec<u8>>) -> Result<Self, ArchiveError> {
        let bytes = bytes.into();
        if bytes.is_empty() {
            return Err(ArchiveError::Empty);
        }

        let archive = ZipArchive::new(Cursor::new(bytes)).map_err(ArchiveError::Corrupt)?;
        Ok(Self { archive })
    }

    /// Returns the number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.archive.len()
    }

    /// Returns true if the archive has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.archive.is_empty()
    }

    /// Returns the names of all members.
    #[must_use]
    pub fn member_names(&self) -> Vec<String> {
        self.archive.file_names().map(str::to_owned).collect()
    }

    /// Returns true if the archive has a member called `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.archive.index_for_name(name).is_some()
    }

    /// Checks that every required member is present.
    ///
    /// # Errors
    ///
    /// Returns [`ArchiveError::MissingMember`] for the first absent member.
    pub fn check_required(&self) -> Result<(), ArchiveError> {
        members::REQUIRED
            .iter()
            .find(|name| !self.contains(name))
            .map_or(Ok(()), |name| Err(ArchiveError::MissingMember((*name).to_string())))
    }

    /// Reads the decompressed content of the member called `name`.
    ///
    /// A member that exists but is empty yields an empty vector.
    ///
    /// # Errors
    ///
    /// Returns [`ArchiveError::MissingMember`] if there is no such member, or
    /// [`ArchiveError::CorruptMember`] if its data cannot be decompressed.
    pub fn read_member(&mut self, name: &str) -> Result<Vec<u8>, ArchiveError> {
        let mut file = match self.archive.by_name(name) {
            Ok(file) => file,
            Err(ZipError::FileNotFound) => {
                return Err(ArchiveError::MissingMember(name.to_string()));
            }
            Err(e) => {
                return Err(ArchiveError::CorruptMember {
                    name: name.to_string(),
                    message: e.to_string(),
                });
            }
        };

        let mut data = Vec::with_capacity(usize::try_from(file.size()).unwrap_or_default());
        file.read_to_end(&mut data)
            .map_err(|e| ArchiveError::CorruptMember {
                name: name.to_string(),
                message: e.to_string(),
            })?;
        Ok(data)
    }
}

impl std::fmt::Debug for BundleArchive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BundleArchive")
            .field("members", &self.archive.len())
            .finish()
    }
}
