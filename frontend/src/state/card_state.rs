//! # Card State
//!
//! `CardContext` is the one place card and transaction state lives on the
//! client side. Views borrow it read-only; every change goes through one of
//! its methods, which call the card API and then update the local copy.
//!
//! ## Lifecycle
//!
//! 1. `load` seeds demo data if needed
//! 2. cards and transactions are fetched concurrently
//! 3. `loading` flips to false
//!
//! After `add_card` both collections are fetched again in full; there is no
//! incremental merge. `toggle_freeze` updates the local card first and then
//! persists; a failed persist reverts the local flip.

use aspire_cards_backend::CardApi;
use log::{debug, error, info, warn};
use shared::{Card, Transaction};
use thiserror::Error;

use super::ui_state::UiState;

/// Transactions shown in the feed unless configured otherwise
pub const DEFAULT_FEED_LIMIT: usize = 4;

#[derive(Debug, Error)]
pub enum CardError {
    #[error("card name must not be empty")]
    EmptyName,

    #[error(transparent)]
    Api(#[from] anyhow::Error),
}

pub struct CardContext<A: CardApi> {
    api: A,
    cards: Vec<Card>,
    transactions: Vec<Transaction>,
    /// Raw index as last requested; readers clamp it
    selected_index: usize,
    feed_limit: usize,
    ui: UiState,
}

impl<A: CardApi> CardContext<A> {
    /// Empty context in the loading state. Call [`CardContext::load`] next.
    pub fn new(api: A) -> Self {
        Self {
            api,
            cards: Vec::new(),
            transactions: Vec::new(),
            selected_index: 0,
            feed_limit: DEFAULT_FEED_LIMIT,
            ui: UiState::new(),
        }
    }

    pub fn with_feed_limit(mut self, feed_limit: usize) -> Self {
        self.feed_limit = feed_limit.max(1);
        self
    }

    /// Create a context and run the initial load
    pub async fn mount(api: A) -> Self {
        let mut context = Self::new(api);
        context.load().await;
        context
    }

    /// Seed, then fetch both collections, then clear the loading flag.
    /// Failures are logged and leave the collections as they were.
    pub async fn load(&mut self) {
        self.ui.loading = true;
        if let Err(e) = self.api.seed_initial_data().await {
            error!("Failed to seed initial data: {}", e);
        }
        self.refresh().await;
        self.ui.loading = false;
        info!(
            "Loaded {} cards and {} transactions",
            self.cards.len(),
            self.transactions.len()
        );
    }

    async fn refresh(&mut self) {
        let (cards, transactions) =
            tokio::join!(self.api.get_cards(), self.api.get_transactions());

        match cards {
            Ok(cards) => self.cards = cards,
            Err(e) => error!("Failed to load cards: {}", e),
        }
        match transactions {
            Ok(transactions) => self.transactions = transactions,
            Err(e) => error!("Failed to load transactions: {}", e),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Every transaction across all cards, in stored order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn loading(&self) -> bool {
        self.ui.loading
    }

    pub fn show_numbers(&self) -> bool {
        self.ui.show_numbers
    }

    /// Selected index clamped to `[0, len - 1]`; 0 when there are no cards
    pub fn selected_index(&self) -> usize {
        self.selected_index.min(self.cards.len().saturating_sub(1))
    }

    pub fn selected_card(&self) -> Option<&Card> {
        self.cards.get(self.selected_index())
    }

    /// Store the requested index as-is. Bounds are applied on read.
    pub fn select_card(&mut self, index: usize) {
        self.selected_index = index;
    }

    /// Move one card to the right, stopping at the last card
    pub fn select_next(&mut self) {
        let current = self.selected_index();
        if current + 1 < self.cards.len() {
            self.selected_index = current + 1;
        }
    }

    /// Move one card to the left, stopping at the first card
    pub fn select_previous(&mut self) {
        self.selected_index = self.selected_index().saturating_sub(1);
    }

    pub fn transactions_for<'a>(&'a self, card_id: &'a str) -> impl Iterator<Item = &'a Transaction> + 'a {
        self.transactions.iter().filter(move |t| t.card_id == card_id)
    }

    /// Feed for the selected card: its transactions in stored order, at most
    /// `feed_limit` of them
    pub fn recent_transactions(&self) -> Vec<&Transaction> {
        match self.selected_card() {
            Some(card) => self.transactions_for(&card.id).take(self.feed_limit).collect(),
            None => Vec::new(),
        }
    }

    /// Create a card, reload everything, and select the new card.
    ///
    /// The name is trimmed; an empty result is rejected before the card API
    /// is called.
    pub async fn add_card(&mut self, name: &str) -> Result<Card, CardError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CardError::EmptyName);
        }

        let card = self.api.create_card(name).await?;
        self.refresh().await;
        self.selected_index = self.cards.len().saturating_sub(1);
        info!("Added card {} at index {}", card.id, self.selected_index);
        Ok(card)
    }

    /// Flip the freeze flag locally, then persist the flipped snapshot.
    ///
    /// Unknown ids are a no-op. When persisting fails the local flip is
    /// reverted and the error returned.
    pub async fn toggle_freeze(&mut self, id: &str) -> Result<(), CardError> {
        let Some(position) = self.cards.iter().position(|c| c.id == id) else {
            debug!("toggle_freeze: no card {}", id);
            return Ok(());
        };

        let snapshot = self.cards[position].clone();
        self.cards[position].is_frozen = !snapshot.is_frozen;

        match self.api.update_card(snapshot.with_frozen_toggled()).await {
            Ok(_) => {
                debug!("Card {} frozen = {}", id, !snapshot.is_frozen);
                Ok(())
            }
            Err(e) => {
                warn!("Reverting freeze toggle for card {}: {}", id, e);
                if let Some(card) = self.cards.iter_mut().find(|c| c.id == id) {
                    card.is_frozen = snapshot.is_frozen;
                }
                Err(CardError::Api(e))
            }
        }
    }

    pub fn toggle_show_numbers(&mut self) {
        self.ui.toggle_show_numbers();
    }
}
