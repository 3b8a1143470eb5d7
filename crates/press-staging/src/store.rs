use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::error::{StagingError, StagingResult};
use crate::key;
use crate::zone::Zone;

/// Metadata for one artifact held in a zone.
#[derive(Clone, Debug)]
pub struct StagedArtifact {
    pub key: String,
    pub len: u64,
    pub created: DateTime<Utc>,
}

/// Filesystem-backed staging store with one directory per [`Zone`].
///
/// Cheap to clone; clones share the same root namespace.
#[derive(Clone, Debug)]
pub struct StagingStore {
    root: PathBuf,
}

impl StagingStore {
    /// Open a store rooted at `root`, creating both zone directories.
    pub fn open(root: impl Into<PathBuf>) -> StagingResult<Self> {
        let root = root.into();
        for zone in [Zone::Incoming, Zone::Outgoing] {
            fs::create_dir_all(root.join(zone.dir_name()))?;
        }
        Ok(Self { root })
    }

    /// Store root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Write `bytes` into `zone` under a generated key derived from
    /// `key_hint`, and return the key.
    pub fn put(&self, zone: Zone, key_hint: &str, bytes: &[u8]) -> StagingResult<String> {
        let key = key::generate_key(key_hint);
        let path = self.zone_path(zone).join(&key);
        fs::write(&path, bytes)?;
        debug!(%zone, %key, len = bytes.len(), "staged artifact");
        Ok(key)
    }

    /// Read an artifact's bytes. Fails with `NotFound` if absent.
    pub fn get(&self, zone: Zone, key: &str) -> StagingResult<Vec<u8>> {
        let path = self.artifact_path(zone, key)?;
        match fs::read(&path) {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(StagingError::NotFound {
                zone,
                key: key.to_string(),
            }),
            Err(e) => Err(e.into()),
        }
    }

    /// Delete an artifact. Returns `true` if it existed.
    pub fn delete(&self, zone: Zone, key: &str) -> StagingResult<bool> {
        let path = self.artifact_path(zone, key)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!(%zone, %key, "deleted artifact");
                Ok(true)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// Check whether an artifact exists in the zone.
    pub fn exists(&self, zone: Zone, key: &str) -> StagingResult<bool> {
        Ok(self.artifact_path(zone, key)?.is_file())
    }

    /// Metadata for an artifact. Fails with `NotFound` if absent.
    pub fn stat(&self, zone: Zone, key: &str) -> StagingResult<StagedArtifact> {
        let path = self.artifact_path(zone, key)?;
        let meta = match fs::metadata(&path) {
            Ok(meta) => meta,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(StagingError::NotFound {
                    zone,
                    key: key.to_string(),
                })
            }
            Err(e) => return Err(e.into()),
        };
        let created = meta.modified().map(DateTime::<Utc>::from)?;
        Ok(StagedArtifact {
            key: key.to_string(),
            len: meta.len(),
            created,
        })
    }

    fn zone_path(&self, zone: Zone) -> PathBuf {
        self.root.join(zone.dir_name())
    }

    fn artifact_path(&self, zone: Zone, key: &str) -> StagingResult<PathBuf> {
        key::validate(key)?;
        Ok(self.zone_path(zone).join(key))
    }
}
