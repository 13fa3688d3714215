//! Order summary renderer
//!
//! Renders an [`OrderRecord`] into the plain-text message pre-filled in
//! the chat app.

use chat_message::MessageBuilder;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use shared::OrderRecord;
use shared::money::{format_money, to_decimal};

use crate::core::config::{Config, PaymentDetails};

/// Order time layout (en-ZA locale style)
const TIME_FORMAT: &str = "%Y/%m/%d, %H:%M:%S";

/// Order message renderer
#[derive(Debug, Clone)]
pub struct OrderMessageRenderer {
    store_name: String,
    currency_symbol: String,
    timezone: Tz,
    payment: PaymentDetails,
}

impl OrderMessageRenderer {
    pub fn new(
        store_name: impl Into<String>,
        currency_symbol: impl Into<String>,
        timezone: Tz,
        payment: PaymentDetails,
    ) -> Self {
        Self {
            store_name: store_name.into(),
            currency_symbol: currency_symbol.into(),
            timezone,
            payment,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.store_name.clone(),
            config.currency_symbol.clone(),
            config.timezone,
            config.payment.clone(),
        )
    }

    /// Render the full order summary
    pub fn render_order(&self, order: &OrderRecord) -> String {
        let mut b = MessageBuilder::new();

        // Header
        b.line(&format!("🍰 NEW ORDER - {} 🧁", self.store_name));
        b.newline();

        // Customer
        b.field("👤 Customer", &order.customer.name);
        b.field("📱 Phone", &order.customer.phone);
        b.field("📍 Address", &order.customer.address);
        b.newline();

        // Items
        b.line("🛒 ORDER DETAILS:");
        for item in &order.items {
            b.bullet(&format!(
                "{} x{} - {}",
                item.name,
                item.quantity,
                format_money(&self.currency_symbol, item.line_total())
            ));
        }
        b.newline();

        // Totals
        b.field(
            "💰 TOTAL",
            &format_money(&self.currency_symbol, to_decimal(order.total)),
        );
        b.field("⏰ Order Time", &self.format_time(order.timestamp));
        b.newline();

        // Payment instructions
        b.section(
            "💳 Payment Details:",
            [
                format!("Account Name: {}", self.payment.account_name),
                format!("Account Number: {}", self.payment.account_number),
                format!("Bank: {}", self.payment.bank),
                format!("Branch Code: {}", self.payment.branch_code),
            ],
        );
        b.text("Payment proof will be sent separately.");

        b.build()
    }

    /// Greeting for the "order on chat" button
    pub fn render_enquiry(&self) -> String {
        format!(
            "Hi! I'm interested in ordering from {}. Could you please help me with the menu and pricing?",
            self.store_name
        )
    }

    fn format_time(&self, at: DateTime<Utc>) -> String {
        at.with_timezone(&self.timezone).format(TIME_FORMAT).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use shared::{CustomerInfo, LineItem};

    fn renderer() -> OrderMessageRenderer {
        OrderMessageRenderer::new(
            "Maite Sweet Treats",
            "R",
            chrono_tz::Africa::Johannesburg,
            PaymentDetails::default(),
        )
    }

    fn order() -> OrderRecord {
        let mut cupcake = LineItem::new("cupcake1", "Vanilla Cupcake", 25.0);
        cupcake.quantity = 2;
        OrderRecord {
            id: 1,
            customer: CustomerInfo::new("Thandi", "0821234567", "12 Main Rd, Soweto"),
            items: vec![cupcake, LineItem::new("cake2", "Chocolate Cake", 40.0)],
            total: 90.0,
            timestamp: Utc.with_ymd_and_hms(2025, 3, 1, 10, 15, 0).unwrap(),
            payment_proof_uploaded: true,
        }
    }

    #[test]
    fn test_render_order_full_text() {
        let text = renderer().render_order(&order());
        let expected = "\
🍰 NEW ORDER - Maite Sweet Treats 🧁

👤 Customer: Thandi
📱 Phone: 0821234567
📍 Address: 12 Main Rd, Soweto

🛒 ORDER DETAILS:
• Vanilla Cupcake x2 - R50.00
• Chocolate Cake x1 - R40.00

💰 TOTAL: R90.00
⏰ Order Time: 2025/03/01, 12:15:00

💳 Payment Details:
Account Name: M Mthembu
Account Number: 1234567890
Bank: Capitec Bank
Branch Code: 470010

Payment proof will be sent separately.";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_order_time_uses_store_timezone() {
        let r = OrderMessageRenderer::new("S", "€", chrono_tz::Europe::Madrid, PaymentDetails::default());
        let text = r.render_order(&order());
        assert!(text.contains("⏰ Order Time: 2025/03/01, 11:15:00"));
        assert!(text.contains("💰 TOTAL: €90.00"));
    }

    #[test]
    fn test_render_enquiry() {
        assert_eq!(
            renderer().render_enquiry(),
            "Hi! I'm interested in ordering from Maite Sweet Treats. Could you please help me with the menu and pricing?"
        );
    }
}
