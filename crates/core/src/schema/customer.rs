//! Customer ingestion contract.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::types::{Email, Timestamp};

use super::address::Address;
use super::error::FieldError;
use super::object::ObjectReader;

/// A customer payload that passed every schema check.
///
/// Declared fields are typed; anything else the integrator sent rides
/// along in [`CustomerRecord::extra`] and is stored verbatim. The `id` is
/// the customer's external identifier and doubles as the document key, so
/// re-ingesting the same id fully replaces the stored record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRecord {
    pub id: String,
    pub name: String,
    pub email: Email,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_date: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login_date: Option<Timestamp>,
    /// Passthrough fields the contract does not declare.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CustomerRecord {
    /// Validate an untrusted payload into a canonical customer record.
    ///
    /// # Errors
    ///
    /// Returns every schema violation found, in field declaration order.
    /// No record is constructed unless the payload is fully valid.
    pub fn from_value(value: Value) -> Result<Self, Vec<FieldError>> {
        let mut obj = ObjectReader::root(value)?;
        let id = obj.required_nonempty_string("id");
        let name = obj.required_string("name");
        let email = obj.required_email("email");
        let phone = obj.optional_string("phone");
        let address = obj.optional_object("address", Address::read);
        let tags = obj.optional_string_array("tags");
        let registration_date = obj.optional_timestamp("registrationDate");
        let last_login_date = obj.optional_timestamp("lastLoginDate");
        let (extra, errors) = obj.finish();

        match (id, name, email) {
            (Some(id), Some(name), Some(email)) if errors.is_empty() => Ok(Self {
                id,
                name,
                email,
                phone,
                address,
                tags,
                registration_date,
                last_login_date,
                extra,
            }),
            _ => Err(errors),
        }
    }
}
