//! Two-step confirmation gating destructive calls.

use std::future::Future;

use crate::backend::errors::BackendResult;
use crate::controller::ListRefresh;
use crate::ui::UiState;

/// Dialog state for a pending delete. Nothing survives a close.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeleteConfirmation<Id> {
    Closed,
    Open { target: Id },
}

impl<Id> DeleteConfirmation<Id> {
    #[must_use]
    pub fn open(target: Id) -> Self {
        Self::Open { target }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    #[must_use]
    pub fn target(&self) -> Option<&Id> {
        match self {
            Self::Open { target } => Some(target),
            Self::Closed => None,
        }
    }

    /// Dismisses the dialog without touching the backend.
    pub fn cancel(&mut self) -> ListRefresh {
        *self = Self::Closed;
        ListRefresh::NotRequired
    }

    /// Runs the destructive call for the open target, then closes.
    ///
    /// The dialog closes no matter how the call ends, and the caller must
    /// refetch its list in both outcomes. Confirming an already-closed
    /// dialog is a no-op.
    pub async fn confirm<F, Fut>(
        &mut self,
        ui: &UiState,
        success_message: &str,
        delete: F,
    ) -> ListRefresh
    where
        F: FnOnce(Id) -> Fut,
        Fut: Future<Output = BackendResult<()>>,
    {
        let target = match std::mem::replace(self, Self::Closed) {
            Self::Open { target } => target,
            Self::Closed => return ListRefresh::NotRequired,
        };

        ui.set_is_loading(true);

        match delete(target).await {
            Ok(()) => ui.set_success_message(success_message),
            Err(err) => ui.set_error_message(err.message()),
        }

        ui.set_is_loading(false);

        ListRefresh::Required
    }
}
