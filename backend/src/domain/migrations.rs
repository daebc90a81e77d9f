//! Upgrade step for transaction collections written by older versions.
//!
//! Older data may lack category icons, and the feed expects at least
//! [`MIN_TRANSACTIONS`] records. The upgrade is idempotent: running it on
//! already-upgraded data reports no change, so callers only write back when
//! something actually moved.

use shared::Transaction;

use super::demo_data::{filler_transaction, CATEGORY_ICONS};

pub const MIN_TRANSACTIONS: usize = 4;

/// Bring a stored transaction collection up to the current shape.
///
/// 1. Records without a category icon get one from [`CATEGORY_ICONS`],
///    chosen by their position in the collection.
/// 2. A non-empty collection shorter than [`MIN_TRANSACTIONS`] is padded with
///    filler debits assigned to the card returned by `first_card_id`.
///
/// An empty collection is returned untouched. Returns the upgraded records
/// and whether anything changed.
pub fn upgrade_transactions<F>(
    mut records: Vec<Transaction>,
    first_card_id: F,
) -> (Vec<Transaction>, bool)
where
    F: FnOnce() -> String,
{
    if records.is_empty() {
        return (records, false);
    }

    let mut changed = false;

    for (index, record) in records.iter_mut().enumerate() {
        let missing_icon = record.category_icon.as_deref().map_or(true, str::is_empty);
        if missing_icon {
            record.category_icon = Some(CATEGORY_ICONS[index % CATEGORY_ICONS.len()].to_string());
            changed = true;
        }
    }

    if records.len() < MIN_TRANSACTIONS {
        let card_id = first_card_id();
        let missing = MIN_TRANSACTIONS - records.len();
        records.extend((0..missing).map(|_| filler_transaction(&card_id)));
        changed = true;
    }

    (records, changed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::demo_data::{seed_date, seed_transactions};
    use shared::TransactionType;

    fn without_icons(count: usize) -> Vec<Transaction> {
        seed_transactions("card_1")
            .into_iter()
            .take(count)
            .map(|mut t| {
                t.category_icon = None;
                t
            })
            .collect()
    }

    #[test]
    fn test_empty_collection_is_untouched() {
        let (records, changed) = upgrade_transactions(Vec::new(), || panic!("not needed"));
        assert!(records.is_empty());
        assert!(!changed);
    }

    #[test]
    fn test_two_records_get_icons_and_filler() {
        let (records, changed) = upgrade_transactions(without_icons(2), || "card_first".to_string());

        assert!(changed);
        assert_eq!(records.len(), 4);
        assert_eq!(records[0].category_icon.as_deref(), Some(CATEGORY_ICONS[0]));
        assert_eq!(records[1].category_icon.as_deref(), Some(CATEGORY_ICONS[1]));
        for filler in &records[2..] {
            assert_eq!(filler.merchant, "Hamleys");
            assert_eq!(filler.amount, 150.0);
            assert_eq!(filler.transaction_type, TransactionType::Debit);
            assert_eq!(filler.date_iso, seed_date());
            assert_eq!(filler.card_id, "card_first");
        }
        assert_ne!(records[2].id, records[3].id);
    }

    #[test]
    fn test_icon_rotation_follows_position() {
        let mut records = seed_transactions("card_1");
        records[3].category_icon = None;
        records[1].category_icon = Some(String::new());

        let (records, changed) = upgrade_transactions(records, || panic!("not needed"));
        assert!(changed);
        assert_eq!(records[1].category_icon.as_deref(), Some(CATEGORY_ICONS[1]));
        assert_eq!(records[3].category_icon.as_deref(), Some(CATEGORY_ICONS[3]));
    }

    #[test]
    fn test_upgrade_is_idempotent() {
        let (once, _) = upgrade_transactions(without_icons(1), String::new);
        let (twice, changed) = upgrade_transactions(once.clone(), String::new);
        assert!(!changed);
        assert_eq!(once, twice);
    }
}
