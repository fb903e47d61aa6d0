use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A product sold at the counter.
///
/// `quantity` and `profit` are maintained by the API from stock movements
/// and sales; the console only ever sends name and price.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub product_id: i32,
    pub name: String,
    pub price: f64,
    pub quantity: i32,
    pub profit: f64,
    pub created_at: DateTime<Utc>,
}

/// The writable subset of a product, shared by create and update calls.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    pub name: String,
    pub price: f64,
}

impl ProductPayload {
    #[must_use]
    pub fn new(name: String, price: f64) -> Self {
        Self {
            name: name.trim().to_string(),
            price,
        }
    }
}
