use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A customer of the business.
///
/// Clients are keyed by the national id (DNI) the business registered them
/// under; the API never renumbers a client.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    #[serde(rename = "clientId")]
    pub dni: String,
    pub name: String,
    pub main_phone: String,
    pub secondary_phone: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewClient {
    #[serde(rename = "clientId")]
    pub dni: String,
    pub name: String,
    pub main_phone: String,
    pub secondary_phone: String,
}

impl NewClient {
    #[must_use]
    pub fn new(dni: String, name: String, main_phone: String, secondary_phone: String) -> Self {
        Self {
            dni: dni.trim().to_string(),
            name: name.trim().to_string(),
            main_phone: main_phone.trim().to_string(),
            secondary_phone: secondary_phone.trim().to_string(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClient {
    pub name: String,
    pub main_phone: String,
    pub secondary_phone: String,
}

impl UpdateClient {
    #[must_use]
    pub fn new(name: String, main_phone: String, secondary_phone: String) -> Self {
        Self {
            name: name.trim().to_string(),
            main_phone: main_phone.trim().to_string(),
            secondary_phone: secondary_phone.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_client_trims_every_field() {
        let client = NewClient::new(
            " 12345678 ".into(),
            " Alice ".into(),
            " 04141234567 ".into(),
            String::new(),
        );
        assert_eq!(client.dni, "12345678");
        assert_eq!(client.name, "Alice");
        assert_eq!(client.main_phone, "04141234567");
        assert_eq!(client.secondary_phone, "");
    }

    #[test]
    fn client_uses_wire_field_names() {
        let json = r#"{
            "clientId": "12345678",
            "name": "Alice",
            "mainPhone": "04141234567",
            "secondaryPhone": "",
            "createdAt": "2024-01-15T10:00:00Z"
        }"#;
        let client: Client = serde_json::from_str(json).unwrap();
        assert_eq!(client.dni, "12345678");
        assert_eq!(client.main_phone, "04141234567");
    }
}
