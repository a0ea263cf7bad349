//! Multi-step checkout: step registry, form state, navigator and submission

pub mod field;
pub mod form;
pub mod step;
pub mod submit;
pub mod wizard;

pub use field::{CheckoutField, FieldError};
pub use form::{CheckoutForm, CheckoutValues, FieldStatus};
pub use step::{CheckoutStep, STEPS, StepDefinition};
pub use submit::{LocalOrderSubmitter, OrderSubmitter, SubmitError};
pub use wizard::{
    AdvanceOutcome, CheckoutError, CheckoutSummary, CheckoutWizard, Direction, SubmitOutcome,
    WizardCursor, complete_checkout,
};
