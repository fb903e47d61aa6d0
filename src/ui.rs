use std::cell::{Cell, RefCell};

/// One-shot message surfaced to the operator after an operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiMessage {
    Success(String),
    Error(String),
}

/// Per-request notification/loading bridge shared by controllers and flows.
///
/// Single message slot: a newer message overwrites the active one, it never
/// queues. Handed explicitly to every operation instead of living in any
/// ambient global state.
#[derive(Debug, Default)]
pub struct UiState {
    is_loading: Cell<bool>,
    message: RefCell<Option<UiMessage>>,
}

impl UiState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_is_loading(&self, loading: bool) {
        self.is_loading.set(loading);
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.is_loading.get()
    }

    pub fn set_success_message(&self, message: impl Into<String>) {
        *self.message.borrow_mut() = Some(UiMessage::Success(message.into()));
    }

    pub fn set_error_message(&self, message: impl Into<String>) {
        *self.message.borrow_mut() = Some(UiMessage::Error(message.into()));
    }

    /// Currently active message, if any.
    #[must_use]
    pub fn message(&self) -> Option<UiMessage> {
        self.message.borrow().clone()
    }

    /// Removes and returns the active message.
    pub fn take_message(&self) -> Option<UiMessage> {
        self.message.borrow_mut().take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_new_message_overwrites_the_active_one() {
        let ui = UiState::new();
        ui.set_success_message("saved");
        ui.set_error_message("boom");
        assert_eq!(ui.message(), Some(UiMessage::Error("boom".to_string())));
    }

    #[test]
    fn take_clears_the_slot() {
        let ui = UiState::new();
        ui.set_success_message("saved");
        assert_eq!(ui.take_message(), Some(UiMessage::Success("saved".to_string())));
        assert_eq!(ui.take_message(), None);
    }

    #[test]
    fn loading_flag_round_trips() {
        let ui = UiState::new();
        assert!(!ui.is_loading());
        ui.set_is_loading(true);
        assert!(ui.is_loading());
        ui.set_is_loading(false);
        assert!(!ui.is_loading());
    }
}
