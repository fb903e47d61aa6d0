use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An issued invoice. Bills are produced by the API when an order closes;
/// the console never creates or edits them.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    pub bill_id: i32,
    pub order_id: i32,
    pub client_name: String,
    pub subtotal: f64,
    pub discount_amount: f64,
    pub total_cost: f64,
    pub created_at: DateTime<Utc>,
}
