//! # UI State
//!
//! Flags that affect presentation only. Nothing here is persisted.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiState {
    /// True until the first load from the card API completes
    pub loading: bool,

    /// Show full card numbers instead of the masked form
    pub show_numbers: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

impl UiState {
    pub fn new() -> Self {
        Self {
            loading: true,
            show_numbers: false,
        }
    }

    pub fn toggle_show_numbers(&mut self) {
        self.show_numbers = !self.show_numbers;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_loading_with_numbers_hidden() {
        let ui = UiState::new();
        assert!(ui.loading);
        assert!(!ui.show_numbers);
    }

    #[test]
    fn test_toggle_show_numbers() {
        let mut ui = UiState::default();
        ui.toggle_show_numbers();
        assert!(ui.show_numbers);
        ui.toggle_show_numbers();
        assert!(!ui.show_numbers);
    }
}
