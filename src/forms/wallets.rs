use serde::Deserialize;
use validator::Validate;

use crate::domain::wallet::{NewWallet, UpdateWallet};

#[derive(Debug, Deserialize, Validate)]
/// Form data for opening a wallet.
pub struct CreateWalletForm {
    #[validate(length(min = 1))]
    pub client_dni: String,
    #[validate(range(min = 0.0))]
    pub balance: f64,
}

#[derive(Debug, Deserialize, Validate)]
/// Form data for adjusting a wallet balance.
pub struct EditWalletForm {
    #[validate(range(min = 0.0))]
    pub balance: f64,
}

impl From<&CreateWalletForm> for NewWallet {
    fn from(form: &CreateWalletForm) -> Self {
        NewWallet::new(form.client_dni.clone(), form.balance)
    }
}

impl From<&EditWalletForm> for UpdateWallet {
    fn from(form: &EditWalletForm) -> Self {
        UpdateWallet {
            balance: form.balance,
        }
    }
}
