use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Character used in place of hidden card number digits.
pub const MASK_CHAR: char = '•';

/// Payment card record as persisted under the `cards` key.
///
/// `masked_number` is derived from `full_number` once at creation time and
/// stored alongside it; readers never recompute it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: String,
    /// Card holder or custom label
    pub name: String,
    /// e.g. "•••• •••• •••• 2020"
    pub masked_number: String,
    /// 16 digits without spaces
    pub full_number: String,
    /// 1-12
    pub expiry_month: u8,
    /// 2-digit or 4-digit year
    pub expiry_year: u16,
    pub brand: CardBrand,
    pub is_frozen: bool,
}

impl Card {
    /// Number shown on the card face: the full number grouped in fours when
    /// `show_full` is set, otherwise the stored masked form.
    pub fn display_number(&self, show_full: bool) -> String {
        if show_full {
            group_digits(&self.full_number)
        } else {
            self.masked_number.clone()
        }
    }

    /// Expiry in `MM/YY` form; a 4-digit year keeps its last two digits.
    pub fn expiry_label(&self) -> String {
        format!("{:02}/{:02}", self.expiry_month, self.expiry_year % 100)
    }

    /// Copy of this card with the freeze flag flipped.
    pub fn with_frozen_toggled(&self) -> Card {
        Card {
            is_frozen: !self.is_frozen,
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardBrand {
    Visa,
    Mastercard,
}

impl fmt::Display for CardBrand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardBrand::Visa => write!(f, "VISA"),
            CardBrand::Mastercard => write!(f, "Mastercard"),
        }
    }
}

/// Only Singapore Dollar is supported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    #[default]
    #[serde(rename = "SGD")]
    Sgd,
}

impl Currency {
    /// Symbol used when rendering amounts.
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Sgd => "S$",
        }
    }
}

/// Incoming money (credit) or outgoing money (debit). The sign of an amount
/// is decided by this, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Credit,
    Debit,
}

/// Transaction record as persisted under the `transactions` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub merchant: String,
    #[serde(rename = "dateISO")]
    pub date_iso: NaiveDate,
    /// Non-negative magnitude
    pub amount: f64,
    #[serde(default)]
    pub currency: Currency,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Card the transaction was made with
    pub card_id: String,
}

impl Transaction {
    /// Amount with the sign implied by the transaction type.
    pub fn signed_amount(&self) -> f64 {
        match self.transaction_type {
            TransactionType::Credit => self.amount,
            TransactionType::Debit => -self.amount,
        }
    }

    /// Feed rendering of the amount, e.g. `+ S$ 150` or `- S$ 20.5`.
    pub fn format_amount(&self) -> String {
        let sign = match self.transaction_type {
            TransactionType::Credit => '+',
            TransactionType::Debit => '-',
        };
        format!("{} {} {}", sign, self.currency.symbol(), format_number(self.amount))
    }

    /// Feed rendering of the date, e.g. `20 May 2020`.
    pub fn format_date(&self) -> String {
        self.date_iso.format("%d %B %Y").to_string()
    }
}

/// Derive the display form of a card number: every digit except the last
/// four is replaced by [`MASK_CHAR`], and the result is grouped in fours.
///
/// Non-digit characters in the input are dropped.
pub fn mask_card_number(number: &str) -> String {
    let digits: Vec<char> = number.chars().filter(|c| c.is_ascii_digit()).collect();
    let visible_from = digits.len().saturating_sub(4);
    let masked: String = digits
        .iter()
        .enumerate()
        .map(|(i, c)| if i < visible_from { MASK_CHAR } else { *c })
        .collect();
    group_digits(&masked)
}

/// Split a string into space-separated groups of four characters.
pub fn group_digits(number: &str) -> String {
    let chars: Vec<char> = number.chars().filter(|c| !c.is_whitespace()).collect();
    chars
        .chunks(4)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Whole amounts print without a fractional part.
fn format_number(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{:.0}", amount)
    } else {
        format!("{:.2}", amount)
    }
}
