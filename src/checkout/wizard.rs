//! Checkout wizard state machine
//!
//! Moves between the steps of [`STEPS`](crate::checkout::STEPS). Leaving a
//! step forward validates only the fields that step owns; going back never
//! validates. Submission is only possible from the terminal step and happens
//! at most once per wizard.

use crate::checkout::field::{CheckoutField, FieldError};
use crate::checkout::form::{CheckoutForm, CheckoutValues};
use crate::checkout::step::CheckoutStep;
use crate::checkout::submit::{OrderSubmitter, SubmitError};
use crate::navigation::{Navigator, Route};
use crate::order::OrderReceipt;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Current and previous step positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WizardCursor {
    /// Visible step
    pub current: usize,
    /// Step shown before the last transition
    pub previous: usize,
}

/// Direction of the most recent transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
    None,
}

/// Result of trying to move forward
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// Moved to the next step
    Advanced {
        from: CheckoutStep,
        to: CheckoutStep,
    },
    /// The departing step has invalid fields
    Blocked {
        step: CheckoutStep,
        errors: Vec<FieldError>,
    },
    /// Already on the terminal step
    AtTerminal,
}

/// Result of a submit request that did not fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Order handed to the submitter
    Submitted(OrderReceipt),
    /// An earlier submission already succeeded; nothing was sent
    AlreadySubmitted(OrderReceipt),
}

impl SubmitOutcome {
    /// Receipt of the order
    pub fn receipt(&self) -> &OrderReceipt {
        match self {
            SubmitOutcome::Submitted(receipt) | SubmitOutcome::AlreadySubmitted(receipt) => receipt,
        }
    }
}

/// Checkout wizard errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckoutError {
    #[error("cannot submit from the {step:?} step")]
    NotAtTerminal { step: CheckoutStep },

    #[error("{step:?} step has {} invalid field(s)", .errors.len())]
    Invalid {
        step: CheckoutStep,
        errors: Vec<FieldError>,
    },

    #[error(transparent)]
    Submission(#[from] SubmitError),
}

/// Read-only view of the values shown on the confirm step
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckoutSummary {
    /// Full name as entered
    pub name: String,
    /// `address, city, zip`
    pub delivery_address: String,
    /// Last four card digits
    pub card_last_four: String,
}

impl CheckoutSummary {
    /// Build a summary from a value snapshot
    pub fn from_values(values: &CheckoutValues) -> Self {
        Self {
            name: values.get(CheckoutField::Name).to_string(),
            delivery_address: format!(
                "{}, {}, {}",
                values.get(CheckoutField::Address),
                values.get(CheckoutField::City),
                values.get(CheckoutField::ZipCode)
            ),
            card_last_four: values.card_last_four(),
        }
    }
}

/// Multi-step checkout
#[derive(Debug, Clone, Default)]
pub struct CheckoutWizard {
    form: CheckoutForm,
    cursor: WizardCursor,
    receipt: Option<OrderReceipt>,
}

impl CheckoutWizard {
    /// Wizard on the first step with an empty form
    pub fn new() -> Self {
        Self::default()
    }

    /// Wizard on the first step with a prefilled form
    pub fn with_form(form: CheckoutForm) -> Self {
        Self {
            form,
            ..Self::default()
        }
    }

    /// Visible step
    pub fn current_step(&self) -> CheckoutStep {
        CheckoutStep::from_index(self.cursor.current).unwrap_or_default()
    }

    /// Cursor positions
    pub fn cursor(&self) -> WizardCursor {
        self.cursor
    }

    /// Form state
    pub fn form(&self) -> &CheckoutForm {
        &self.form
    }

    /// Overwrite one field without validating it
    pub fn set_field(&mut self, field: CheckoutField, value: impl Into<String>) {
        self.form.set_field(field, value);
    }

    /// Direction of the most recent transition
    pub fn direction(&self) -> Direction {
        match self.cursor.current.cmp(&self.cursor.previous) {
            std::cmp::Ordering::Greater => Direction::Forward,
            std::cmp::Ordering::Less => Direction::Backward,
            std::cmp::Ordering::Equal => Direction::None,
        }
    }

    /// Validate the current step and move forward if it passes
    pub fn advance(&mut self) -> AdvanceOutcome {
        let step = self.current_step();
        if step.is_terminal() {
            return AdvanceOutcome::AtTerminal;
        }

        let owned = step.owned_fields();
        if !self.form.validate_fields(owned) {
            let errors = self.form.errors_for(owned);
            debug!(step = ?step, invalid = errors.len(), "Step validation failed");
            return AdvanceOutcome::Blocked { step, errors };
        }

        self.cursor.previous = self.cursor.current;
        self.cursor.current = (self.cursor.current + 1).min(CheckoutStep::COUNT - 1);
        let to = self.current_step();
        debug!(from = ?step, to = ?to, "Checkout advanced");
        AdvanceOutcome::Advanced { from: step, to }
    }

    /// Move back one step. Returns false on the first step.
    pub fn retreat(&mut self) -> bool {
        if self.cursor.current == 0 {
            return false;
        }
        self.cursor.previous = self.cursor.current;
        self.cursor.current -= 1;
        debug!(to = ?self.current_step(), "Checkout retreated");
        true
    }

    /// Summary of the current values, computed on every call
    pub fn summary(&self) -> CheckoutSummary {
        CheckoutSummary::from_values(&self.form.all_values())
    }

    /// Whether an order was already placed
    pub fn is_submitted(&self) -> bool {
        self.receipt.is_some()
    }

    /// Receipt of the placed order
    pub fn receipt(&self) -> Option<&OrderReceipt> {
        self.receipt.as_ref()
    }

    /// Hand all values to the submitter and, on success, navigate to the
    /// confirmation route.
    pub fn submit<S, N>(
        &mut self,
        submitter: &mut S,
        navigator: &mut N,
    ) -> Result<SubmitOutcome, CheckoutError>
    where
        S: OrderSubmitter + ?Sized,
        N: Navigator + ?Sized,
    {
        let step = self.current_step();
        if !step.is_terminal() {
            return Err(CheckoutError::NotAtTerminal { step });
        }

        if let Some(receipt) = &self.receipt {
            debug!(order_number = %receipt.order_number, "Ignoring repeated submission");
            return Ok(SubmitOutcome::AlreadySubmitted(receipt.clone()));
        }

        let values = self.form.all_values();
        let receipt = submitter.submit_order(&values).map_err(|e| {
            warn!(error = %e, "Order submission failed");
            CheckoutError::from(e)
        })?;

        info!(order_number = %receipt.order_number, "Checkout submitted");
        self.receipt = Some(receipt.clone());
        navigator.navigate_to(Route::OrderConfirmation);

        Ok(SubmitOutcome::Submitted(receipt))
    }
}

/// Drive a prefilled form through every step and submit it
pub fn complete_checkout<S, N>(
    form: CheckoutForm,
    submitter: &mut S,
    navigator: &mut N,
) -> Result<OrderReceipt, CheckoutError>
where
    S: OrderSubmitter + ?Sized,
    N: Navigator + ?Sized,
{
    let mut wizard = CheckoutWizard::with_form(form);
    loop {
        match wizard.advance() {
            AdvanceOutcome::Advanced { .. } => {}
            AdvanceOutcome::Blocked { step, errors } => {
                return Err(CheckoutError::Invalid { step, errors });
            }
            AdvanceOutcome::AtTerminal => break,
        }
    }
    wizard
        .submit(submitter, navigator)
        .map(|outcome| outcome.receipt().clone())
}
