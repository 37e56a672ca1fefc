use std::rc::Rc;

use log::info;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::client::{CalcClient, HttpTransport};
use crate::config::calc_endpoint;
use crate::models::SubmitData;
use crate::state::{FormAction, FormState};

/// Holds the state and callbacks for a numeric input field.
#[derive(Clone)]
pub struct NumberField {
    /// The input's `valueAsNumber`. NaN while the field is empty.
    pub value: f64,
    /// Result of the field's range check, used for the inline hint.
    pub is_valid: bool,
    /// Callback for the input's `oninput` event.
    pub oninput: Callback<InputEvent>,
}

/// Tracks a `type="number"` input on every keystroke.
#[hook]
pub fn use_number_field(validate: fn(f64) -> bool) -> NumberField {
    let value = use_state(|| f64::NAN);

    let oninput = {
        let value = value.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            value.set(input.value_as_number());
        })
    };

    NumberField {
        value: *value,
        is_valid: validate(*value),
        oninput,
    }
}

/// State handle plus the submit callback for the calculator form.
#[derive(Clone)]
pub struct CalculatorHandle {
    pub state: UseReducerHandle<FormState>,
    pub submit: Callback<SubmitData>,
}

/// Wires the form state to the calculation service.
///
/// Each submit dispatches `Submit`, awaits one POST in a local task and then
/// dispatches `Resolve`. Failures of the latest submission raise a blocking
/// alert carrying the user-facing message.
#[hook]
pub fn use_calculator() -> CalculatorHandle {
    let state = use_reducer(FormState::default);
    let client = use_memo((), |_| CalcClient::<HttpTransport>::http(calc_endpoint()));
    // sequence number of the most recently issued request
    let issued = use_mut_ref(|| 0u64);

    let submit = {
        let state = state.clone();
        Callback::from(move |data: SubmitData| {
            let seq = {
                let mut issued = issued.borrow_mut();
                *issued += 1;
                *issued
            };
            info!("Submitting request #{}", seq);
            state.dispatch(FormAction::Submit { seq });

            let state = state.clone();
            let client = Rc::clone(&client);
            let issued = issued.clone();
            spawn_local(async move {
                let outcome = client.calculate(&data).await;
                if *issued.borrow() != seq {
                    info!("Dropping response for superseded request #{}", seq);
                    return;
                }
                let message = outcome.as_ref().err().map(|e| e.user_message());
                state.dispatch(FormAction::Resolve { seq, outcome });
                if let Some(message) = message {
                    alert(&message);
                }
            });
        })
    };

    CalculatorHandle { state, submit }
}

fn alert(message: &str) {
    if gloo_utils::window().alert_with_message(message).is_err() {
        log::warn!("Could not show alert: {}", message);
    }
}
