//! End-to-end checkout through the public API

use ecliptic_eats::checkout::{AdvanceOutcome, CheckoutValues, SubmitOutcome};
use ecliptic_eats::config::AppConfig;
use ecliptic_eats::tui::{AppState, Screen, TuiEvent};
use ecliptic_eats::{
    Cart, CartStore, Catalog, CheckoutError, CheckoutField, CheckoutForm, CheckoutStep,
    CheckoutWizard, LocalOrderSubmitter, OrderReceipt, OrderSubmitter, Route, RouteHistory,
    SubmitError, complete_checkout,
};

fn valid_form() -> CheckoutForm {
    CheckoutForm::with_defaults([
        (CheckoutField::Name, "Jane Doe"),
        (CheckoutField::Address, "42 Orbit Lane"),
        (CheckoutField::City, "Nebula City"),
        (CheckoutField::ZipCode, "98765"),
        (CheckoutField::CardNumber, "4111111111111111"),
        (CheckoutField::ExpiryDate, "09/28"),
        (CheckoutField::Cvc, "123"),
    ])
}

/// Counts calls and keeps the last payload
#[derive(Default)]
struct CountingSubmitter {
    inner: LocalOrderSubmitter,
    last: Option<CheckoutValues>,
    calls: usize,
}

impl OrderSubmitter for CountingSubmitter {
    fn submit_order(&mut self, values: &CheckoutValues) -> Result<OrderReceipt, SubmitError> {
        self.calls += 1;
        self.last = Some(values.clone());
        self.inner.submit_order(values)
    }
}

#[test]
fn wizard_walks_all_steps_and_submits_once() {
    let mut wizard = CheckoutWizard::with_form(valid_form());
    let mut submitter = CountingSubmitter::default();
    let mut history = RouteHistory::new();

    assert!(matches!(
        wizard.advance(),
        AdvanceOutcome::Advanced {
            from: CheckoutStep::Delivery,
            to: CheckoutStep::Payment
        }
    ));
    assert!(matches!(wizard.advance(), AdvanceOutcome::Advanced { .. }));
    assert_eq!(wizard.current_step(), CheckoutStep::Confirm);

    let summary = wizard.summary();
    assert_eq!(summary.name, "Jane Doe");
    assert_eq!(summary.delivery_address, "42 Orbit Lane, Nebula City, 98765");
    assert_eq!(summary.card_last_four, "1111");

    let first = wizard.submit(&mut submitter, &mut history).unwrap();
    let second = wizard.submit(&mut submitter, &mut history).unwrap();
    assert!(matches!(first, SubmitOutcome::Submitted(_)));
    assert!(matches!(second, SubmitOutcome::AlreadySubmitted(_)));
    assert_eq!(submitter.calls, 1);
    assert!(submitter.last.unwrap().is_complete());
    assert_eq!(history.visited(), &[Route::OrderConfirmation]);
}

#[test]
fn invalid_zip_blocks_headless_checkout() {
    let mut form = valid_form();
    form.set_field(CheckoutField::ZipCode, "1234");
    let mut submitter = CountingSubmitter::default();
    let mut history = RouteHistory::new();

    let err = complete_checkout(form, &mut submitter, &mut history).unwrap_err();
    match err {
        CheckoutError::Invalid { step, errors } => {
            assert_eq!(step, CheckoutStep::Delivery);
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].field, CheckoutField::ZipCode);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(submitter.calls, 0);
    assert!(history.current().is_none());
}

#[test]
fn headless_checkout_returns_receipt() {
    let mut submitter = LocalOrderSubmitter::new("20 minutes");
    let mut history = RouteHistory::new();

    let receipt = complete_checkout(valid_form(), &mut submitter, &mut history).unwrap();
    assert!(receipt.order_number.as_str().starts_with("EE-"));
    assert_eq!(receipt.estimated_delivery, "20 minutes");
    assert_eq!(submitter.placed(), 1);
    assert_eq!(history.current(), Some(Route::OrderConfirmation));
}

#[test]
fn cart_subtotal_follows_catalog_prices() {
    let catalog = Catalog::default();
    let mut cart = Cart::new();
    cart.add_by_id(&catalog, "featured1").unwrap();
    cart.add_by_id(&catalog, "featured2").unwrap();

    let snapshot = cart.cart_snapshot();
    assert_eq!(snapshot.item_count, 2);
    assert_eq!(snapshot.display_subtotal(), "$52.49");

    assert_eq!(cart.undo_last_add().as_deref(), Some("featured2"));
    assert_eq!(cart.cart_snapshot().display_subtotal(), "$29.99");
}

#[test]
fn interface_places_order_from_keys() {
    let mut state = AppState::new(AppConfig::default());
    let total = state.cart.subtotal_cents();

    state.handle_event(TuiEvent::Char('c'));
    state.handle_event(TuiEvent::Enter);
    assert_eq!(state.current_screen, Screen::Checkout);

    for value in ["Jane Doe", "42 Orbit Lane", "Nebula City", "98765"] {
        state.handle_event(TuiEvent::Paste(value.to_string()));
        state.handle_event(TuiEvent::Tab);
    }
    state.handle_event(TuiEvent::Enter);
    assert_eq!(state.checkout.wizard.current_step(), CheckoutStep::Payment);

    for value in ["4111111111111111", "09/28", "123"] {
        state.handle_event(TuiEvent::Paste(value.to_string()));
        state.handle_event(TuiEvent::Tab);
    }
    state.handle_event(TuiEvent::Enter);
    assert_eq!(state.checkout.wizard.current_step(), CheckoutStep::Confirm);

    state.handle_event(TuiEvent::Enter);
    assert_eq!(state.current_screen, Screen::OrderConfirmation);
    assert!(state.cart.is_empty());

    let placed = &state.profile.order_history[0];
    assert_eq!(placed.total_cents, total);
    let receipt = state.last_receipt.clone().unwrap();
    assert_eq!(placed.id, receipt.order_number.to_string());
    assert_eq!(state.into_result().orders, vec![receipt]);
}
