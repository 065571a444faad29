//! Brazilian phone number value object.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use cadastro_core::{DomainError, DomainResult, ValueObject};

use crate::digits_only;

/// A validated Brazilian phone number, stored as its normalized digits.
///
/// Landlines carry 10 digits (2-digit area code + 8), mobile numbers carry
/// 11 (2-digit area code + 9, leading with the extra `9`). Only the mobile
/// form is eligible for WhatsApp.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    /// Parse a phone number from user input.
    ///
    /// Non-digit characters (parentheses, hyphen, whitespace) are stripped
    /// before validation, so `"(11) 98765-4321"` and `"11987654321"`
    /// construct equal values.
    pub fn new(input: &str) -> DomainResult<Self> {
        Self::rebuild(digits_only(input))
    }

    /// The normalized digits.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The 2-digit area code (DDD).
    pub fn area_code(&self) -> &str {
        &self.0[..2]
    }

    /// Canonical presentation: `(DD) NNNN-NNNN` or `(DD) NNNNN-NNNN`.
    pub fn format(&self) -> String {
        let (ddd, rest) = self.0.split_at(2);
        let split = rest.len() - 4;
        format!("({}) {}-{}", ddd, &rest[..split], &rest[split..])
    }

    /// Whether this number is eligible for WhatsApp (mobile form only).
    pub fn is_whatsapp(&self) -> bool {
        self.0.len() == 11
    }
}

impl ValueObject for Phone {
    type Props = String;

    fn validate(digits: &String) -> DomainResult<()> {
        if digits.len() != 10 && digits.len() != 11 {
            return Err(DomainError::validation_for(
                "phone",
                format!("phone must have 10 or 11 digits, got {}", digits.len()),
            ));
        }
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::validation_for("phone", "phone must contain only digits"));
        }
        Ok(())
    }

    fn rebuild(props: String) -> DomainResult<Self> {
        Self::validate(&props)?;
        Ok(Self(props))
    }

    fn props(&self) -> &String {
        &self.0
    }
}

impl core::fmt::Display for Phone {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Phone {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Phone {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Phone> for String {
    fn from(value: Phone) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_formatted_and_raw_mobile_numbers() {
        let formatted = Phone::new("(11) 98765-4321").unwrap();
        let raw = Phone::new("11987654321").unwrap();

        assert_eq!(formatted, raw);
        assert_eq!(formatted.as_str(), "11987654321");
    }

    #[test]
    fn formats_landline_and_mobile_differently() {
        let landline = Phone::new("1123456789").unwrap();
        assert_eq!(landline.format(), "(11) 2345-6789");

        let mobile = Phone::new("11987654321").unwrap();
        assert_eq!(mobile.format(), "(11) 98765-4321");
    }

    #[test]
    fn exposes_the_area_code() {
        let phone = Phone::new("21987654321").unwrap();
        assert_eq!(phone.area_code(), "21");
    }

    #[test]
    fn whatsapp_eligibility_requires_the_mobile_form() {
        assert!(Phone::new("11987654321").unwrap().is_whatsapp());
        assert!(!Phone::new("1123456789").unwrap().is_whatsapp());
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(Phone::new("119876543").is_err());
        assert!(Phone::new("119876543210").is_err());
        assert!(Phone::new("").is_err());
    }

    #[test]
    fn serde_round_trips_and_revalidates() {
        let phone = Phone::new("(11) 98765-4321").unwrap();
        let json = serde_json::to_string(&phone).unwrap();
        assert_eq!(json, "\"11987654321\"");

        let back: Phone = serde_json::from_str(&json).unwrap();
        assert_eq!(back, phone);

        assert!(serde_json::from_str::<Phone>("\"123\"").is_err());
    }
}
