//! # Card API
//!
//! The data-access layer behind the card state distributor. `CardApi` is the
//! seam the distributor depends on; `MockCardApi` implements it over
//! [`SafeStorage`] with two JSON collections, `cards` and `transactions`.
//!
//! Every operation is a full read-modify-write of the affected collection.
//! Storage faults are absorbed by the shim, so `MockCardApi` never returns
//! `Err`; the `Result` in the signatures is for implementations that can fail.

use anyhow::Result;
use async_trait::async_trait;
use chrono::{Local, NaiveDate};
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use shared::{Card, Transaction};
use std::sync::Mutex;

use super::demo_data::{random_card, random_transaction, seed_card, seed_transactions};
use super::migrations::upgrade_transactions;
use crate::config::AppConfig;
use crate::storage::{SafeStorage, StorageError};

pub const CARDS_KEY: &str = "cards";
pub const TRANSACTIONS_KEY: &str = "transactions";

#[async_trait]
pub trait CardApi: Send + Sync {
    /// Write the demo card and its transactions if no card exists yet
    async fn seed_initial_data(&self) -> Result<()>;

    /// All cards in insertion order, exactly as stored
    async fn get_cards(&self) -> Result<Vec<Card>>;

    /// All transactions in insertion order, upgraded to the current shape
    async fn get_transactions(&self) -> Result<Vec<Transaction>>;

    /// Create and store a new card plus its random transactions
    async fn create_card(&self, name: &str) -> Result<Card>;

    /// Replace the stored card with the same id. Unknown ids are ignored and
    /// the input is returned unchanged either way.
    async fn update_card(&self, card: Card) -> Result<Card>;

    /// Append `count` random transactions for `card_id`, returning only the
    /// new ones
    async fn add_random_transactions_for_card(
        &self,
        card_id: &str,
        count: usize,
    ) -> Result<Vec<Transaction>>;
}

pub struct MockCardApi {
    storage: SafeStorage,
    rng: Mutex<StdRng>,
    transactions_per_card: usize,
    transaction_days_back: u32,
}

impl MockCardApi {
    pub fn new(storage: SafeStorage) -> Self {
        Self::with_rng(storage, StdRng::from_entropy())
    }

    /// Deterministic generator, for tests
    pub fn with_seed(storage: SafeStorage, seed: u64) -> Self {
        Self::with_rng(storage, StdRng::seed_from_u64(seed))
    }

    fn with_rng(storage: SafeStorage, rng: StdRng) -> Self {
        let defaults = AppConfig::default();
        Self {
            storage,
            rng: Mutex::new(rng),
            transactions_per_card: defaults.transactions_per_card,
            transaction_days_back: defaults.transaction_days_back,
        }
    }

    /// Apply the generation settings from `config`
    pub fn configured(mut self, config: &AppConfig) -> Self {
        self.transactions_per_card = config.transactions_per_card;
        self.transaction_days_back = config.transaction_days_back;
        self
    }

    fn read_cards(&self) -> Vec<Card> {
        self.storage.safe_read(CARDS_KEY, Vec::new())
    }

    fn read_transactions(&self) -> Vec<Transaction> {
        self.storage.safe_read(TRANSACTIONS_KEY, Vec::new())
    }

    fn with_rng_locked<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut *rng)
    }

    fn today() -> NaiveDate {
        Local::now().date_naive()
    }
}

#[async_trait]
impl CardApi for MockCardApi {
    async fn seed_initial_data(&self) -> Result<()> {
        match self.storage.try_read::<Vec<Card>>(CARDS_KEY) {
            Ok(Some(cards)) if !cards.is_empty() => {
                debug!("Cards already present, skipping seed");
                return Ok(());
            }
            Ok(_) | Err(StorageError::Unavailable) => {}
            Err(e) => {
                // leave unreadable content untouched
                warn!("Cards could not be read, skipping seed: {}", e);
                return Ok(());
            }
        }

        let card = seed_card();
        let transactions = seed_transactions(&card.id);
        self.storage.safe_write(CARDS_KEY, &[card.clone()]);
        self.storage.safe_write(TRANSACTIONS_KEY, &transactions);

        info!("Seeded demo card {} with {} transactions", card.id, transactions.len());
        Ok(())
    }

    async fn get_cards(&self) -> Result<Vec<Card>> {
        Ok(self.read_cards())
    }

    async fn get_transactions(&self) -> Result<Vec<Transaction>> {
        let stored = self.read_transactions();
        let (transactions, changed) = upgrade_transactions(stored, || {
            self.read_cards()
                .first()
                .map(|card| card.id.clone())
                .unwrap_or_default()
        });

        if changed {
            info!("Upgraded stored transactions, writing back {} records", transactions.len());
            self.storage.safe_write(TRANSACTIONS_KEY, &transactions);
        }

        Ok(transactions)
    }

    async fn create_card(&self, name: &str) -> Result<Card> {
        let mut cards = self.read_cards();
        let card = self.with_rng_locked(|rng| random_card(rng, name));
        cards.push(card.clone());
        self.storage.safe_write(CARDS_KEY, &cards);
        info!("Created card {} ({})", card.id, card.name);

        self.add_random_transactions_for_card(&card.id, self.transactions_per_card)
            .await?;
        Ok(card)
    }

    async fn update_card(&self, card: Card) -> Result<Card> {
        let mut cards = self.read_cards();
        match cards.iter_mut().find(|stored| stored.id == card.id) {
            Some(stored) => {
                *stored = card.clone();
                self.storage.safe_write(CARDS_KEY, &cards);
                debug!("Updated card {}", card.id);
            }
            None => debug!("Ignoring update for unknown card {}", card.id),
        }
        Ok(card)
    }

    async fn add_random_transactions_for_card(
        &self,
        card_id: &str,
        count: usize,
    ) -> Result<Vec<Transaction>> {
        let mut transactions = self.read_transactions();
        let today = Self::today();
        let days_back = self.transaction_days_back;

        let created: Vec<Transaction> = self.with_rng_locked(|rng| {
            (0..count)
                .map(|_| random_transaction(rng, card_id, today, days_back))
                .collect()
        });

        transactions.extend(created.iter().cloned());
        self.storage.safe_write(TRANSACTIONS_KEY, &transactions);
        debug!("Added {} random transactions for card {}", created.len(), card_id);
        Ok(created)
    }
}
