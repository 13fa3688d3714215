//! Order Record Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{CustomerInfo, LineItem};

/// Immutable snapshot of a completed checkout
///
/// Written once to the local order history and never touched again.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    /// Generated order id (snowflake, see [`crate::util::snowflake_id`])
    pub id: i64,
    pub customer: CustomerInfo,
    /// Cart contents at submission time
    pub items: Vec<LineItem>,
    /// Order total in currency unit
    pub total: f64,
    /// Submission time (ISO-8601 in JSON)
    pub timestamp: DateTime<Utc>,
    /// Always true: submission is refused without a proof of payment
    #[serde(default)]
    pub payment_proof_uploaded: bool,
}

impl OrderRecord {
    /// Total item count (Σ quantity)
    pub fn item_count(&self) -> i32 {
        self.items.iter().map(|i| i.quantity).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_history_written_by_the_page() {
        let json = r#"{
            "customer": {"name": "Thandi", "phone": "0821234567", "address": "12 Main Rd"},
            "items": [{"id": "cupcake1", "name": "Vanilla Cupcake", "price": 25, "quantity": 2}],
            "total": 50,
            "timestamp": "2025-03-01T10:15:00.000Z",
            "id": 1740824100000,
            "paymentProofUploaded": true
        }"#;

        let record: OrderRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, 1740824100000);
        assert_eq!(record.items[0].unit_price, 25.0);
        assert_eq!(record.item_count(), 2);
        assert!(record.payment_proof_uploaded);
    }

    #[test]
    fn test_serializes_camel_case() {
        let record = OrderRecord {
            id: 1,
            customer: CustomerInfo::new("A", "B", "C"),
            items: vec![],
            total: 0.0,
            timestamp: Utc::now(),
            payment_proof_uploaded: true,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["paymentProofUploaded"], true);
        assert!(json["timestamp"].is_string());
    }
}
