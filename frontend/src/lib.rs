//! Card state distribution for the card management demo.
//!
//! [`state::CardContext`] owns the cards, transactions and UI flags that the
//! views read, and routes every mutation through the backend's `CardApi`.
//! [`view`] renders that state as plain text for the headless binary.

pub mod state;
pub mod view;

pub use state::{CardContext, CardError, UiState};
