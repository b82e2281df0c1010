//! Status enums for ingested entities.

use serde::{Deserialize, Serialize};

/// Order lifecycle status accepted from third-party systems.
///
/// Wire values are lowercase (`pending`, `processing`, ...). The set is
/// closed: anything else is a validation error, never a silent default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
    Refunded,
}

impl OrderStatus {
    /// All wire values, in declaration order. Used for diagnostics.
    pub const WIRE_VALUES: [&'static str; 6] = [
        "pending",
        "processing",
        "shipped",
        "delivered",
        "cancelled",
        "refunded",
    ];

    /// Parse a status from its wire value.
    #[must_use]
    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "processing" => Some(Self::Processing),
            "shipped" => Some(Self::Shipped),
            "delivered" => Some(Self::Delivered),
            "cancelled" => Some(Self::Cancelled),
            "refunded" => Some(Self::Refunded),
            _ => None,
        }
    }

    /// Get the wire value for this status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
            Self::Refunded => "refunded",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn wire_values_round_trip() {
        for wire in OrderStatus::WIRE_VALUES {
            let status = OrderStatus::from_wire(wire).unwrap();
            assert_eq!(status.as_str(), wire);
        }
    }

    #[test]
    fn rejects_unknown_and_cased_values() {
        assert_eq!(OrderStatus::from_wire("Pending"), None);
        assert_eq!(OrderStatus::from_wire("returned"), None);
        assert_eq!(OrderStatus::from_wire(""), None);
    }

    #[test]
    fn serde_uses_lowercase_wire_values() {
        let json = serde_json::to_string(&OrderStatus::Shipped).unwrap();
        assert_eq!(json, "\"shipped\"");

        let status: OrderStatus = serde_json::from_str("\"refunded\"").unwrap();
        assert_eq!(status, OrderStatus::Refunded);
    }
}
