//! Checkout form state
//!
//! Holds every field value and its last validation result across all
//! steps, so that moving back and forth never loses input.

use crate::checkout::field::{CheckoutField, FieldError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Snapshot of every checkout field value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CheckoutValues(BTreeMap<CheckoutField, String>);

impl CheckoutValues {
    /// Value set with every field present and empty
    pub fn empty() -> Self {
        Self(
            CheckoutField::ALL
                .into_iter()
                .map(|field| (field, String::new()))
                .collect(),
        )
    }

    /// Value of a field (empty when unset)
    pub fn get(&self, field: CheckoutField) -> &str {
        self.0.get(&field).map(String::as_str).unwrap_or("")
    }

    /// Iterate fields in form order
    pub fn iter(&self) -> impl Iterator<Item = (CheckoutField, &str)> {
        self.0.iter().map(|(field, value)| (*field, value.as_str()))
    }

    /// Number of fields carried
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no fields are carried
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether every field holds a non-empty value
    pub fn is_complete(&self) -> bool {
        CheckoutField::ALL
            .into_iter()
            .all(|field| !self.get(field).is_empty())
    }

    /// Last four characters of the card number
    pub fn card_last_four(&self) -> String {
        let card = self.get(CheckoutField::CardNumber);
        let count = card.chars().count();
        card.chars().skip(count.saturating_sub(4)).collect()
    }

    fn set(&mut self, field: CheckoutField, value: String) {
        self.0.insert(field, value);
    }
}

impl Default for CheckoutValues {
    fn default() -> Self {
        Self::empty()
    }
}

/// Last validation result of one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldStatus {
    /// Passed its rule
    Valid,
    /// Failed with a message
    Invalid(String),
}

/// Field values plus per-field validation state
#[derive(Debug, Clone, Default)]
pub struct CheckoutForm {
    values: CheckoutValues,
    validation: BTreeMap<CheckoutField, FieldStatus>,
}

impl CheckoutForm {
    /// Empty form
    pub fn new() -> Self {
        Self::default()
    }

    /// Form prefilled with the given values
    pub fn with_defaults<I, S>(defaults: I) -> Self
    where
        I: IntoIterator<Item = (CheckoutField, S)>,
        S: Into<String>,
    {
        let mut form = Self::new();
        for (field, value) in defaults {
            form.set_field(field, value);
        }
        form
    }

    /// Overwrite one field without validating it
    pub fn set_field(&mut self, field: CheckoutField, value: impl Into<String>) {
        self.values.set(field, value.into());
    }

    /// Current value of a field
    pub fn value(&self, field: CheckoutField) -> &str {
        self.values.get(field)
    }

    /// Validate the named fields, updating only their status.
    /// Returns true when all of them pass.
    pub fn validate_fields(&mut self, fields: &[CheckoutField]) -> bool {
        let mut all_valid = true;
        for &field in fields {
            let status = match field.validate(self.values.get(field)) {
                Ok(()) => FieldStatus::Valid,
                Err(err) => {
                    all_valid = false;
                    FieldStatus::Invalid(err.message)
                }
            };
            self.validation.insert(field, status);
        }
        all_valid
    }

    /// Last validation status, `None` if never validated
    pub fn status(&self, field: CheckoutField) -> Option<&FieldStatus> {
        self.validation.get(&field)
    }

    /// Visible error message of a field
    pub fn error(&self, field: CheckoutField) -> Option<&str> {
        match self.validation.get(&field) {
            Some(FieldStatus::Invalid(message)) => Some(message.as_str()),
            _ => None,
        }
    }

    /// Visible errors among the given fields
    pub fn errors_for(&self, fields: &[CheckoutField]) -> Vec<FieldError> {
        fields
            .iter()
            .filter_map(|&field| self.error(field).map(|m| FieldError::new(field, m)))
            .collect()
    }

    /// Snapshot of every field regardless of step
    pub fn all_values(&self) -> CheckoutValues {
        self.values.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_field_does_not_validate() {
        let mut form = CheckoutForm::new();
        form.set_field(CheckoutField::ZipCode, "12");
        assert_eq!(form.value(CheckoutField::ZipCode), "12");
        assert!(form.status(CheckoutField::ZipCode).is_none());
    }

    #[test]
    fn test_validate_updates_only_named_fields() {
        let mut form = CheckoutForm::new();
        form.set_field(CheckoutField::Name, "Al");
        form.set_field(CheckoutField::City, "X");

        assert!(!form.validate_fields(&[CheckoutField::Name]));
        assert!(form.error(CheckoutField::Name).is_some());
        assert!(form.status(CheckoutField::City).is_none());

        form.set_field(CheckoutField::Name, "Alice");
        // Stale error stays until revalidated
        assert!(form.error(CheckoutField::Name).is_some());
        assert!(form.validate_fields(&[CheckoutField::Name]));
        assert_eq!(form.status(CheckoutField::Name), Some(&FieldStatus::Valid));
    }

    #[test]
    fn test_all_values_covers_every_field() {
        let form = CheckoutForm::with_defaults([(CheckoutField::City, "Nebula City")]);
        let values = form.all_values();
        assert_eq!(values.len(), CheckoutField::ALL.len());
        assert_eq!(values.get(CheckoutField::City), "Nebula City");
        assert_eq!(values.get(CheckoutField::Cvc), "");
        assert!(!values.is_complete());
    }

    #[test]
    fn test_card_last_four() {
        let form = CheckoutForm::with_defaults([(CheckoutField::CardNumber, "4111111111111234")]);
        assert_eq!(form.all_values().card_last_four(), "1234");
        assert_eq!(CheckoutValues::empty().card_last_four(), "");
    }

    #[test]
    fn test_values_serialize_with_payload_keys() {
        let form = CheckoutForm::with_defaults([(CheckoutField::ZipCode, "98765")]);
        let json = serde_json::to_value(form.all_values()).unwrap();
        assert_eq!(json["zipCode"], "98765");
        assert_eq!(json["cardNumber"], "");
    }
}
