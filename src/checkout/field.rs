//! Checkout input fields and their rules

use crate::validation;
use rust_i18n::t;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use thiserror::Error;

/// A single named checkout input
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum CheckoutField {
    Name,
    Address,
    City,
    ZipCode,
    CardNumber,
    ExpiryDate,
    Cvc,
}

impl CheckoutField {
    /// Every field in form order
    pub const ALL: [CheckoutField; 7] = [
        CheckoutField::Name,
        CheckoutField::Address,
        CheckoutField::City,
        CheckoutField::ZipCode,
        CheckoutField::CardNumber,
        CheckoutField::ExpiryDate,
        CheckoutField::Cvc,
    ];

    /// Stable key used in submitted payloads
    pub fn key(&self) -> &'static str {
        match self {
            CheckoutField::Name => "name",
            CheckoutField::Address => "address",
            CheckoutField::City => "city",
            CheckoutField::ZipCode => "zipCode",
            CheckoutField::CardNumber => "cardNumber",
            CheckoutField::ExpiryDate => "expiryDate",
            CheckoutField::Cvc => "cvc",
        }
    }

    /// Look a field up by its payload key
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }

    /// Localized input label
    pub fn label(&self) -> Cow<'static, str> {
        match self {
            CheckoutField::Name => t!("field_full_name"),
            CheckoutField::Address => t!("field_address"),
            CheckoutField::City => t!("field_city"),
            CheckoutField::ZipCode => t!("field_zip_code"),
            CheckoutField::CardNumber => t!("field_card_number"),
            CheckoutField::ExpiryDate => t!("field_expiry_date"),
            CheckoutField::Cvc => t!("field_cvc"),
        }
    }

    /// Example shown in an empty input
    pub fn placeholder(&self) -> &'static str {
        match self {
            CheckoutField::Name => "John Doe",
            CheckoutField::Address => "123 Galactic Way",
            CheckoutField::City => "Nebula City",
            CheckoutField::ZipCode => "98765",
            CheckoutField::CardNumber => "**** **** **** ****",
            CheckoutField::ExpiryDate => "MM/YY",
            CheckoutField::Cvc => "123",
        }
    }

    /// Whether the value should be masked when echoed back
    pub fn is_sensitive(&self) -> bool {
        matches!(self, CheckoutField::CardNumber | CheckoutField::Cvc)
    }

    /// Run this field's rule against a value
    pub fn validate(&self, value: &str) -> Result<(), FieldError> {
        let valid = match self {
            CheckoutField::Name => validation::has_min_chars(value, 3),
            CheckoutField::Address => validation::has_min_chars(value, 5),
            CheckoutField::City => validation::has_min_chars(value, 2),
            CheckoutField::ZipCode => validation::is_zip_code(value),
            CheckoutField::CardNumber => validation::is_card_number(value),
            CheckoutField::ExpiryDate => validation::is_expiry_date(value),
            CheckoutField::Cvc => validation::is_cvc(value),
        };

        if valid {
            Ok(())
        } else {
            Err(FieldError::new(*self, self.rule_message()))
        }
    }

    fn rule_message(&self) -> Cow<'static, str> {
        match self {
            CheckoutField::Name => t!("error_name_min"),
            CheckoutField::Address => t!("error_address"),
            CheckoutField::City => t!("error_city"),
            CheckoutField::ZipCode => t!("error_zip_code"),
            CheckoutField::CardNumber => t!("error_card_number"),
            CheckoutField::ExpiryDate => t!("error_expiry_date"),
            CheckoutField::Cvc => t!("error_cvc"),
        }
    }
}

impl fmt::Display for CheckoutField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Validation failure scoped to one field
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{field}: {message}")]
pub struct FieldError {
    /// Field that failed
    pub field: CheckoutField,
    /// Human-readable message shown next to the field
    pub message: String,
}

impl FieldError {
    /// Create a field error
    pub fn new(field: CheckoutField, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_round_trip() {
        for field in CheckoutField::ALL {
            assert_eq!(CheckoutField::from_key(field.key()), Some(field));
        }
        assert_eq!(CheckoutField::from_key("zip"), None);
    }

    #[test]
    fn test_serde_uses_payload_keys() {
        let json = serde_json::to_string(&CheckoutField::ZipCode).unwrap();
        assert_eq!(json, "\"zipCode\"");
        let json = serde_json::to_string(&CheckoutField::ExpiryDate).unwrap();
        assert_eq!(json, "\"expiryDate\"");
    }

    #[test]
    fn test_delivery_rules() {
        assert!(CheckoutField::Name.validate("Ada").is_ok());
        assert!(CheckoutField::Name.validate("Al").is_err());
        assert!(CheckoutField::Address.validate("1 Way").is_ok());
        assert!(CheckoutField::Address.validate("1 Wa").is_err());
        assert!(CheckoutField::City.validate("NY").is_ok());
        assert!(CheckoutField::City.validate("N").is_err());
        assert!(CheckoutField::ZipCode.validate("98765").is_ok());
        assert!(CheckoutField::ZipCode.validate("1234").is_err());
    }

    #[test]
    fn test_payment_rules() {
        assert!(CheckoutField::CardNumber.validate("4111111111111111").is_ok());
        assert!(CheckoutField::CardNumber.validate("1234567890123456").is_err());
        assert!(CheckoutField::ExpiryDate.validate("09/28").is_ok());
        assert!(CheckoutField::ExpiryDate.validate("9/28").is_err());
        assert!(CheckoutField::Cvc.validate("999").is_ok());
        assert!(CheckoutField::Cvc.validate("99").is_err());
    }

    #[test]
    fn test_error_carries_field() {
        let err = CheckoutField::ZipCode.validate("9876").unwrap_err();
        assert_eq!(err.field, CheckoutField::ZipCode);
        assert!(!err.message.is_empty());
    }
}
