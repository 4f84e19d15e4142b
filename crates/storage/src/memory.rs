//! In-memory storage, mainly for tests and ephemeral sessions.

use std::sync::{Arc, Mutex};

use booklet_core::ProfileState;

use super::codec::{decode_profile, encode_profile};
use super::{ProfileStore, Result};

/// Keeps the encoded blob in memory.
///
/// Clones share the same blob, so a test can hand one clone to a service
/// and inspect what was written through the other.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    blob: Arc<Mutex<Option<String>>>,
    saves: Arc<Mutex<usize>>,
}

impl MemoryStorage {
    /// Empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with a raw blob, well-formed or not.
    pub fn with_blob(raw: impl Into<String>) -> Self {
        let storage = Self::default();
        *lock(&storage.blob) = Some(raw.into());
        storage
    }

    /// Number of completed saves.
    pub fn save_count(&self) -> usize {
        *lock(&self.saves)
    }
}

fn lock<T>(m: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[async_trait::async_trait]
impl ProfileStore for MemoryStorage {
    async fn load(&self) -> Result<ProfileState> {
        Ok(lock(&self.blob)
            .as_deref()
            .map(decode_profile)
            .unwrap_or_default())
    }

    async fn save(&mut self, state: &ProfileState) -> Result<()> {
        let json = encode_profile(state)?;
        *lock(&self.blob) = Some(json);
        *lock(&self.saves) += 1;
        Ok(())
    }
}
