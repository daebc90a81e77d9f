//! # Domain Module
//!
//! The mock card API: seeding, reading, creating and updating cards, and
//! generating demo transactions.
//!
//! ## Module Organization
//!
//! - **card_api**: the `CardApi` trait and its storage-backed implementation
//! - **demo_data**: fixed seed records and random record generation
//! - **migrations**: upgrade step applied to stored transactions on read
//!
//! ## Rules
//!
//! - Card and transaction ids are unique and never change
//! - Collections keep insertion order
//! - A transaction always references a card that existed when it was written
//! - Nothing is ever deleted

pub mod card_api;
pub mod demo_data;
pub mod migrations;

pub use card_api::{CardApi, MockCardApi, CARDS_KEY, TRANSACTIONS_KEY};
