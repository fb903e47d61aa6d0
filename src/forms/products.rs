use serde::Deserialize;
use validator::Validate;

use crate::domain::product::ProductPayload;

#[derive(Debug, Deserialize, Validate)]
/// Form data shared by the create and edit product pages; quantity and
/// profit never come from the console.
pub struct ProductForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
}

impl From<&ProductForm> for ProductPayload {
    fn from(form: &ProductForm) -> Self {
        ProductPayload::new(form.name.clone(), form.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn negative_price_fails_validation() {
        let form = ProductForm {
            name: "Cera".into(),
            price: -1.0,
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn payload_carries_only_name_and_price() {
        let form = ProductForm {
            name: " Cera ".into(),
            price: 12.5,
        };
        let payload = ProductPayload::from(&form);
        assert_eq!(payload.name, "Cera");
        assert_eq!(payload.price, 12.5);
    }
}
