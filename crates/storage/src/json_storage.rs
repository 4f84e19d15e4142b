//! JSON file storage implementation.
//!
//! Stores the profile as a single JSON file inside a data directory
//! (`.booklet/` by default).

use std::path::{Path, PathBuf};

use booklet_core::ProfileState;
use tokio::fs;
use tracing::debug;

use super::codec::{decode_profile, encode_profile};
use super::{ProfileStore, Result};

/// File name of the persisted blob.
pub const PROFILE_FILE: &str = "pg_booklet_v1.json";

/// File-based JSON storage backend.
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    /// Create storage rooted at `root`, creating the directory if needed.
    pub async fn new(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root).await?;
        Ok(Self {
            path: root.join(PROFILE_FILE),
        })
    }

    /// Path of the profile blob.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait::async_trait]
impl ProfileStore for JsonStorage {
    async fn load(&self) -> Result<ProfileState> {
        match read_blob(&self.path).await? {
            Some(raw) => Ok(decode_profile(&raw)),
            None => {
                debug!("No profile at {}, starting fresh", self.path.display());
                Ok(ProfileState::default())
            }
        }
    }

    async fn save(&mut self, state: &ProfileState) -> Result<()> {
        let json = encode_profile(state)?;
        fs::write(&self.path, json.as_bytes()).await?;
        debug!("Saved profile to {}", self.path.display());
        Ok(())
    }
}

/// Read the blob as text. Missing files are `None`; bytes that are not
/// UTF-8 are treated like any other malformed blob.
async fn read_blob(path: &Path) -> Result<Option<String>> {
    match fs::read(path).await {
        Ok(bytes) => Ok(Some(String::from_utf8_lossy(&bytes).into_owned())),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}
