//! # State Module
//!
//! - **card_state**: `CardContext`, the single owner of card and transaction
//!   state, and `CardError`
//! - **ui_state**: UI-only flags that are never persisted

pub mod card_state;
pub mod ui_state;

pub use card_state::{CardContext, CardError};
pub use ui_state::UiState;
