use serde::Deserialize;
use validator::Validate;

use crate::domain::client::{NewClient, UpdateClient};

#[derive(Debug, Deserialize, Validate)]
/// Form data for registering a new client.
pub struct CreateClientForm {
    #[validate(length(min = 1))]
    pub dni: String,
    #[validate(length(min = 1))]
    pub name: String,
    pub main_phone: String,
    pub secondary_phone: String,
}

#[derive(Debug, Deserialize, Validate)]
/// Form data for updating an existing client. The DNI comes from the path.
pub struct EditClientForm {
    #[validate(length(min = 1))]
    pub name: String,
    pub main_phone: String,
    pub secondary_phone: String,
}

impl From<&CreateClientForm> for NewClient {
    fn from(form: &CreateClientForm) -> Self {
        NewClient::new(
            form.dni.clone(),
            form.name.clone(),
            form.main_phone.clone(),
            form.secondary_phone.clone(),
        )
    }
}

impl From<&EditClientForm> for UpdateClient {
    fn from(form: &EditClientForm) -> Self {
        UpdateClient::new(
            form.name.clone(),
            form.main_phone.clone(),
            form.secondary_phone.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn blank_dni_fails_validation() {
        let form = CreateClientForm {
            dni: String::new(),
            name: "Alice".into(),
            main_phone: String::new(),
            secondary_phone: String::new(),
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn conversion_trims_the_payload() {
        let form = CreateClientForm {
            dni: " 12345678 ".into(),
            name: " Alice ".into(),
            main_phone: "04141234567".into(),
            secondary_phone: String::new(),
        };
        let payload = NewClient::from(&form);
        assert_eq!(payload.dni, "12345678");
        assert_eq!(payload.name, "Alice");
    }
}
