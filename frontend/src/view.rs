//! Plain-text rendering of the card state for the headless binary.

use aspire_cards_backend::CardApi;
use shared::{Card, Transaction};

use crate::state::CardContext;

/// One line per card; the selected card is marked with `>`.
pub fn carousel_lines<A: CardApi>(context: &CardContext<A>) -> Vec<String> {
    let selected = context.selected_index();
    context
        .cards()
        .iter()
        .enumerate()
        .map(|(index, card)| {
            let marker = if index == selected { '>' } else { ' ' };
            format!("{} {}", marker, card_line(card, context.show_numbers()))
        })
        .collect()
}

pub fn card_line(card: &Card, show_numbers: bool) -> String {
    let mut line = format!(
        "{}  {}  exp {}  {}",
        card.name,
        card.display_number(show_numbers),
        card.expiry_label(),
        card.brand
    );
    if card.is_frozen {
        line.push_str("  [frozen]");
    }
    line
}

pub fn transaction_line(transaction: &Transaction) -> String {
    let mut line = format!(
        "{:<12} {:<14} {:>10}",
        transaction.merchant,
        transaction.format_date(),
        transaction.format_amount()
    );
    if let Some(note) = &transaction.note {
        line.push_str("  ");
        line.push_str(note);
    }
    line
}

/// Recent transactions of the selected card, one per line
pub fn feed_lines<A: CardApi>(context: &CardContext<A>) -> Vec<String> {
    context
        .recent_transactions()
        .into_iter()
        .map(transaction_line)
        .collect()
}

/// Whole screen: carousel, then the feed
pub fn render<A: CardApi>(context: &CardContext<A>) -> String {
    if context.loading() {
        return "Loading...".to_string();
    }
    if context.cards().is_empty() {
        return "No cards".to_string();
    }

    let mut out = String::from("Cards\n");
    for line in carousel_lines(context) {
        out.push_str(&line);
        out.push('\n');
    }
    out.push_str("\nRecent transactions\n");
    for line in feed_lines(context) {
        out.push_str("  ");
        out.push_str(&line);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use aspire_cards_backend::{MemoryStore, MockCardApi, SafeStorage};
    use std::sync::Arc;

    async fn mounted() -> CardContext<MockCardApi> {
        let api = MockCardApi::with_seed(SafeStorage::new(Arc::new(MemoryStore::new())), 21);
        CardContext::mount(api).await
    }

    #[tokio::test]
    async fn test_carousel_masks_numbers_until_toggled() {
        let mut context = mounted().await;

        let lines = carousel_lines(&context);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("> Mark Henry"));
        assert!(lines[0].contains("•••• •••• •••• 2020"));
        assert!(lines[0].contains("exp 12/20"));

        context.toggle_show_numbers();
        assert!(carousel_lines(&context)[0].contains("4123 4567 8901 2020"));
    }

    #[tokio::test]
    async fn test_frozen_card_is_flagged() {
        let mut context = mounted().await;
        let id = context.cards()[0].id.clone();
        context.toggle_freeze(&id).await.unwrap();
        assert!(carousel_lines(&context)[0].ends_with("[frozen]"));
    }

    #[tokio::test]
    async fn test_feed_renders_seed_transactions() {
        let context = mounted().await;
        let lines = feed_lines(&context);
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("+ S$ 150"));
        assert!(lines[0].contains("20 May 2020"));
        assert!(lines[0].ends_with("Refund on debit card"));
        assert!(lines[1].contains("- S$ 150"));
    }

    #[tokio::test]
    async fn test_render_states() {
        let api = MockCardApi::new(SafeStorage::unavailable());
        let loading = CardContext::new(api);
        assert_eq!(render(&loading), "Loading...");

        let empty = CardContext::mount(MockCardApi::new(SafeStorage::unavailable())).await;
        assert_eq!(render(&empty), "No cards");

        let screen = render(&mounted().await);
        assert!(screen.starts_with("Cards\n> Mark Henry"));
        assert!(screen.contains("Recent transactions"));
    }
}
