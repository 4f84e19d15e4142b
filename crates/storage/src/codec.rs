//! Blob encoding for [`ProfileState`].

use booklet_core::ProfileState;
use tracing::warn;

use crate::Result;

/// Decode a persisted blob. Never fails: an empty, unparseable or
/// wrongly shaped blob yields an empty profile.
pub fn decode_profile(raw: &str) -> ProfileState {
    if raw.trim().is_empty() {
        return ProfileState::default();
    }
    match serde_json::from_str(raw) {
        Ok(state) => state,
        Err(e) => {
            warn!("Discarding malformed profile blob: {}", e);
            ProfileState::default()
        }
    }
}

/// Encode a profile as a pretty-printed JSON blob.
pub fn encode_profile(state: &ProfileState) -> Result<String> {
    Ok(serde_json::to_string_pretty(state)?)
}
