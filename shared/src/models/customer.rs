//! Customer contact details captured at checkout

use serde::{Deserialize, Serialize};

/// Customer contact fields
///
/// Free text. The only check applied is that nothing is left blank.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustomerInfo {
    pub name: String,
    pub phone: String,
    pub address: String,
}

impl CustomerInfo {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            address: address.into(),
        }
    }

    /// First field that is empty after trimming, by form field name
    pub fn first_blank_field(&self) -> Option<&'static str> {
        [
            ("name", &self.name),
            ("phone", &self.phone),
            ("address", &self.address),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_blank_field() {
        let filled = CustomerInfo::new("Thandi", "0821234567", "12 Main Rd");
        assert_eq!(filled.first_blank_field(), None);

        let no_phone = CustomerInfo::new("Thandi", "   ", "12 Main Rd");
        assert_eq!(no_phone.first_blank_field(), Some("phone"));

        assert_eq!(CustomerInfo::default().first_blank_field(), Some("name"));
    }
}
