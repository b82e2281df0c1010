//! Postal address shared by customer and order payloads.

use serde::{Deserialize, Serialize};

use super::object::ObjectReader;

/// A postal address. Every field is optional; third-party systems send
/// whatever subset they have.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl Address {
    pub(crate) fn read(obj: &mut ObjectReader) -> Self {
        Self {
            street: obj.optional_string("street"),
            city: obj.optional_string("city"),
            state: obj.optional_string("state"),
            zip_code: obj.optional_string("zipCode"),
            country: obj.optional_string("country"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn serializes_declared_fields_in_camel_case() {
        let address = Address {
            street: Some("123 Main St".to_owned()),
            zip_code: Some("90210".to_owned()),
            ..Address::default()
        };

        assert_eq!(
            serde_json::to_value(&address).unwrap(),
            json!({"street": "123 Main St", "zipCode": "90210"})
        );
    }
}
