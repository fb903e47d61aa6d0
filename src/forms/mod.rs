//! Form definitions backing the console routes.

use serde::Deserialize;

pub mod auth;
pub mod clients;
pub mod jobs;
pub mod products;
pub mod wallets;

/// The two buttons of a delete-confirmation dialog.
#[derive(Debug, Deserialize)]
pub struct ConfirmDeleteForm {
    pub action: String,
}

impl ConfirmDeleteForm {
    #[must_use]
    pub fn is_confirmed(&self) -> bool {
        self.action == "confirm"
    }
}
