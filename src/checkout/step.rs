//! Checkout step registry

use crate::checkout::field::CheckoutField;
use rust_i18n::t;
use std::borrow::Cow;

/// Static description of one wizard page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepDefinition {
    /// Position in the wizard, starting at 0
    pub sequence_index: usize,
    /// Stable English name
    pub display_name: &'static str,
    /// Fields validated when leaving this step
    pub owned_fields: &'static [CheckoutField],
}

const DELIVERY_FIELDS: &[CheckoutField] = &[
    CheckoutField::Name,
    CheckoutField::Address,
    CheckoutField::City,
    CheckoutField::ZipCode,
];

const PAYMENT_FIELDS: &[CheckoutField] = &[
    CheckoutField::CardNumber,
    CheckoutField::ExpiryDate,
    CheckoutField::Cvc,
];

/// Ordered step registry. The last step owns no fields.
pub static STEPS: [StepDefinition; 3] = [
    StepDefinition {
        sequence_index: 0,
        display_name: "Delivery",
        owned_fields: DELIVERY_FIELDS,
    },
    StepDefinition {
        sequence_index: 1,
        display_name: "Payment",
        owned_fields: PAYMENT_FIELDS,
    },
    StepDefinition {
        sequence_index: 2,
        display_name: "Confirm",
        owned_fields: &[],
    },
];

/// Checkout wizard step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CheckoutStep {
    /// Delivery details
    #[default]
    Delivery,
    /// Card details
    Payment,
    /// Read-only summary with submission
    Confirm,
}

impl CheckoutStep {
    /// All steps in order
    pub const ALL: [CheckoutStep; 3] = [
        CheckoutStep::Delivery,
        CheckoutStep::Payment,
        CheckoutStep::Confirm,
    ];

    /// Number of steps
    pub const COUNT: usize = Self::ALL.len();

    /// Position in the wizard
    pub fn index(self) -> usize {
        self.definition().sequence_index
    }

    /// Step at a position
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Registry entry for this step
    pub fn definition(self) -> &'static StepDefinition {
        match self {
            CheckoutStep::Delivery => &STEPS[0],
            CheckoutStep::Payment => &STEPS[1],
            CheckoutStep::Confirm => &STEPS[2],
        }
    }

    /// Fields this step is responsible for
    pub fn owned_fields(self) -> &'static [CheckoutField] {
        self.definition().owned_fields
    }

    /// The step that only shows a summary
    pub fn is_terminal(self) -> bool {
        self.index() == Self::COUNT - 1
    }

    /// Step owning a field
    pub fn owner_of(field: CheckoutField) -> Self {
        Self::ALL
            .into_iter()
            .find(|step| step.owned_fields().contains(&field))
            .unwrap_or_default()
    }

    /// Localized title
    pub fn title(self) -> Cow<'static, str> {
        match self {
            CheckoutStep::Delivery => t!("step_delivery"),
            CheckoutStep::Payment => t!("step_payment"),
            CheckoutStep::Confirm => t!("step_confirm"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_registry_order() {
        for (i, step) in CheckoutStep::ALL.into_iter().enumerate() {
            assert_eq!(step.index(), i);
            assert_eq!(CheckoutStep::from_index(i), Some(step));
            assert_eq!(STEPS[i].sequence_index, i);
        }
        assert_eq!(CheckoutStep::from_index(3), None);
    }

    #[test]
    fn test_owned_fields_partition() {
        let mut seen = HashSet::new();
        for step in CheckoutStep::ALL {
            for field in step.owned_fields() {
                assert!(seen.insert(*field), "{field} owned twice");
            }
        }
        assert_eq!(seen.len(), CheckoutField::ALL.len());
    }

    #[test]
    fn test_only_last_step_is_terminal_and_fieldless() {
        assert!(!CheckoutStep::Delivery.is_terminal());
        assert!(!CheckoutStep::Payment.is_terminal());
        assert!(CheckoutStep::Confirm.is_terminal());
        assert!(CheckoutStep::Confirm.owned_fields().is_empty());
    }

    #[test]
    fn test_owner_of() {
        assert_eq!(
            CheckoutStep::owner_of(CheckoutField::ZipCode),
            CheckoutStep::Delivery
        );
        assert_eq!(
            CheckoutStep::owner_of(CheckoutField::Cvc),
            CheckoutStep::Payment
        );
    }
}
