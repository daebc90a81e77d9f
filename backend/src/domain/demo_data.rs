//! Fixed seed records and random demo data generation.

use chrono::{Days, NaiveDate};
use rand::Rng;
use shared::{mask_card_number, Card, CardBrand, Currency, Transaction, TransactionType};
use uuid::Uuid;

/// Category icons, also used as the rotation when repairing stored records.
pub const CATEGORY_ICONS: [&str; 4] = [
    "/file-storage.svg",
    "/flights.svg",
    "/megaphone.svg",
    "/file-storage.svg",
];

pub const MERCHANTS: [&str; 5] = ["Hamleys", "Grab", "Amazon", "Uber", "Starbucks"];

pub const NOTES: [&str; 4] = [
    "Charged to debit card",
    "Refund on debit card",
    "Subscription payment",
    "One-time purchase",
];

pub const SEED_CARD_NAME: &str = "Mark Henry";
pub const SEED_CARD_NUMBER: &str = "4123456789012020";
pub const SEED_MERCHANT: &str = "Hamleys";
pub const SEED_AMOUNT: f64 = 150.0;

const CHARGED_NOTE: &str = "Charged to debit card";
const REFUND_NOTE: &str = "Refund on debit card";

/// Credit share of randomly generated transactions
const CREDIT_PROBABILITY: f64 = 0.25;
const MIN_RANDOM_AMOUNT: u32 = 20;
const MAX_RANDOM_AMOUNT: u32 = 320;

pub fn seed_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 5, 20).unwrap_or_default()
}

/// `<prefix>_<suffix>` where the suffix is the hyphenless form of a v4 UUID.
pub fn generate_id(prefix: &str) -> String {
    format!("{}_{}", prefix, Uuid::new_v4().simple())
}

/// Random 16-digit card number
pub fn generate_card_number<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..16)
        .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
        .collect()
}

/// Uniformly random calendar date among the `days_back` days ending `today`
pub fn random_date<R: Rng + ?Sized>(rng: &mut R, today: NaiveDate, days_back: u32) -> NaiveDate {
    let offset = rng.gen_range(0..days_back.max(1));
    today
        .checked_sub_days(Days::new(u64::from(offset)))
        .unwrap_or(today)
}

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, items: &[&'a str]) -> &'a str {
    items[rng.gen_range(0..items.len())]
}

/// Freshly generated card with a random number and expiry
pub fn random_card<R: Rng + ?Sized>(rng: &mut R, name: &str) -> Card {
    let number = generate_card_number(rng);
    Card {
        id: generate_id("card"),
        name: name.to_string(),
        masked_number: mask_card_number(&number),
        full_number: number,
        expiry_month: rng.gen_range(1..=12),
        expiry_year: 20 + rng.gen_range(1..=5),
        brand: CardBrand::Visa,
        is_frozen: false,
    }
}

pub fn random_transaction<R: Rng + ?Sized>(
    rng: &mut R,
    card_id: &str,
    today: NaiveDate,
    days_back: u32,
) -> Transaction {
    let transaction_type = if rng.gen_bool(CREDIT_PROBABILITY) {
        TransactionType::Credit
    } else {
        TransactionType::Debit
    };
    let amount = f64::from(rng.gen_range(MIN_RANDOM_AMOUNT..MAX_RANDOM_AMOUNT));
    let merchant = pick(rng, &MERCHANTS);
    let date_iso = random_date(rng, today, days_back);
    let note = pick(rng, &NOTES);
    let category_icon = pick(rng, &CATEGORY_ICONS);

    Transaction {
        id: generate_id("tx"),
        merchant: merchant.to_string(),
        date_iso,
        amount,
        currency: Currency::Sgd,
        transaction_type,
        category_icon: Some(category_icon.to_string()),
        note: Some(note.to_string()),
        card_id: card_id.to_string(),
    }
}

/// The single card written on first run
pub fn seed_card() -> Card {
    Card {
        id: generate_id("card"),
        name: SEED_CARD_NAME.to_string(),
        masked_number: mask_card_number(SEED_CARD_NUMBER),
        full_number: SEED_CARD_NUMBER.to_string(),
        expiry_month: 12,
        expiry_year: 20,
        brand: CardBrand::Visa,
        is_frozen: false,
    }
}

/// The four transactions written alongside [`seed_card`]
pub fn seed_transactions(card_id: &str) -> Vec<Transaction> {
    let entries = [
        (TransactionType::Credit, REFUND_NOTE, CATEGORY_ICONS[0]),
        (TransactionType::Debit, CHARGED_NOTE, CATEGORY_ICONS[1]),
        (TransactionType::Debit, CHARGED_NOTE, CATEGORY_ICONS[2]),
        (TransactionType::Debit, CHARGED_NOTE, CATEGORY_ICONS[3]),
    ];

    entries
        .into_iter()
        .map(|(transaction_type, note, icon)| Transaction {
            id: generate_id("tx"),
            merchant: SEED_MERCHANT.to_string(),
            date_iso: seed_date(),
            amount: SEED_AMOUNT,
            currency: Currency::Sgd,
            transaction_type,
            category_icon: Some(icon.to_string()),
            note: Some(note.to_string()),
            card_id: card_id.to_string(),
        })
        .collect()
}

/// Placeholder appended when a stored collection has too few records
pub fn filler_transaction(card_id: &str) -> Transaction {
    Transaction {
        id: generate_id("tx"),
        merchant: SEED_MERCHANT.to_string(),
        date_iso: seed_date(),
        amount: SEED_AMOUNT,
        currency: Currency::Sgd,
        transaction_type: TransactionType::Debit,
        category_icon: Some(CATEGORY_ICONS[0].to_string()),
        note: Some(CHARGED_NOTE.to_string()),
        card_id: card_id.to_string(),
    }
}
