//! # Backend
//!
//! Contains all non-UI logic for the card management demo.
//!
//! ## Architecture
//!
//! ```text
//! State distributor (frontend crate)
//!     ↓
//! Domain Layer (mock card API, seeding, demo data generation)
//!     ↓
//! Storage Layer (safe key-value shim over a local store)
//! ```
//!
//! The backend knows nothing about presentation. Everything persisted lives
//! under two keys, `cards` and `transactions`, as JSON arrays.

pub mod config;
pub mod domain;
pub mod storage;

pub use config::{AppConfig, ConfigError};
pub use domain::{CardApi, MockCardApi};
pub use storage::{FileStore, KeyValueStore, MemoryStore, SafeStorage, StorageError};
