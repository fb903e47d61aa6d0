use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A client's prepaid balance.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    pub wallet_id: i32,
    pub client_dni: String,
    pub balance: f64,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWallet {
    pub client_dni: String,
    /// Opening balance credited when the wallet is created.
    pub balance: f64,
}

impl NewWallet {
    #[must_use]
    pub fn new(client_dni: String, balance: f64) -> Self {
        Self {
            client_dni: client_dni.trim().to_string(),
            balance,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWallet {
    pub balance: f64,
}
