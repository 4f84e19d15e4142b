//! Storage abstraction and implementations for Booklet.
//!
//! This crate provides a trait-based storage interface for the single
//! profile blob, with a JSON file implementation and an in-memory one.

#![warn(missing_docs)]

pub mod trait_;
pub mod codec;
pub mod json_storage;
pub mod memory;

pub use trait_::{ProfileStore, StorageError, Result};
pub use codec::{decode_profile, encode_profile};
pub use json_storage::{JsonStorage, PROFILE_FILE};
pub use memory::MemoryStorage;
