//! # Storage Module
//!
//! Best-effort persistence for the card demo.
//!
//! The rest of the crate talks to storage only through [`SafeStorage`], which
//! never raises: reads fall back to a caller-supplied default and writes are
//! dropped when the medium is missing or refuses them. The medium itself is a
//! [`KeyValueStore`], so the same code runs against an in-memory map in tests
//! and a directory of JSON files in the binary.
//!
//! ## Layout
//!
//! - **traits**: the `KeyValueStore` contract and `StorageError`
//! - **memory**: process-local store
//! - **file_store**: one `<key>.json` file per key under a base directory
//! - **safe_storage**: the fallback/no-op shim used by the domain layer

pub mod file_store;
pub mod memory;
pub mod safe_storage;
pub mod traits;

#[cfg(test)]
pub mod test_utils;

pub use file_store::FileStore;
pub use memory::MemoryStore;
pub use safe_storage::SafeStorage;
pub use traits::{KeyValueStore, StorageError};
