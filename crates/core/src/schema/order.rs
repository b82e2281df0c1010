//! Order ingestion contract.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::types::{CurrencyCode, OrderStatus, Timestamp};

use super::address::Address;
use super::error::FieldError;
use super::object::ObjectReader;

/// One line item on an ingested order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: String,
    pub product_name: String,
    pub quantity: i64,
    pub unit_price: f64,
    pub total_price: f64,
}

impl OrderItem {
    // totalPrice is taken as sent; there is no arithmetic cross-check
    // against quantity * unitPrice.
    fn read(obj: &mut ObjectReader) -> Option<Self> {
        let product_id = obj.required_string("productId");
        let product_name = obj.required_string("productName");
        let quantity = obj.required_integer_min("quantity", 1);
        let unit_price = obj.required_number_min("unitPrice", 0.0);
        let total_price = obj.required_number_min("totalPrice", 0.0);

        Some(Self {
            product_id: product_id?,
            product_name: product_name?,
            quantity: quantity?,
            unit_price: unit_price?,
            total_price: total_price?,
        })
    }
}

/// An order payload that passed every schema check.
///
/// Orders are currently validated and acknowledged without being
/// persisted, but the contract is the full one so integrators exercise
/// the real shape from day one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    pub id: String,
    pub customer_id: String,
    pub order_date: Timestamp,
    pub items: Vec<OrderItem>,
    pub total_amount: f64,
    pub currency: CurrencyCode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_cost: Option<f64>,
    /// Passthrough fields the contract does not declare.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl OrderRecord {
    /// Validate an untrusted payload into a canonical order record.
    ///
    /// # Errors
    ///
    /// Returns every schema violation found, in field declaration order.
    /// No record is constructed unless the payload is fully valid.
    pub fn from_value(value: Value) -> Result<Self, Vec<FieldError>> {
        let mut obj = ObjectReader::root(value)?;
        let id = obj.required_nonempty_string("id");
        let customer_id = obj.required_string("customerId");
        let order_date = obj.required_timestamp("orderDate");
        let items = obj.required_object_array("items", 1, OrderItem::read);
        let total_amount = obj.required_number_min("totalAmount", 0.0);
        let currency = obj.required_currency("currency");
        let status = obj.optional_status("status");
        let shipping_address = obj.optional_object("shippingAddress", Address::read);
        let payment_method = obj.optional_string("paymentMethod");
        let discount_amount = obj.optional_number("discountAmount");
        let shipping_cost = obj.optional_number("shippingCost");
        let (extra, errors) = obj.finish();

        match (id, customer_id, order_date, items, total_amount, currency) {
            (Some(id), Some(customer_id), Some(order_date), Some(items), Some(total_amount), Some(currency))
                if errors.is_empty() =>
            {
                Ok(Self {
                    id,
                    customer_id,
                    order_date,
                    items,
                    total_amount,
                    currency,
                    status,
                    shipping_address,
                    payment_method,
                    discount_amount,
                    shipping_cost,
                    extra,
                })
            }
            _ => Err(errors),
        }
    }
}
