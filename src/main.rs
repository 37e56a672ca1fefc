//! Main module for the 1RM calculator using Yew.
//! Wires the form fields, the calculator hook and the result view.

use one_rep_max::{
    components::{CalculateButton, FieldHint, Results},
    config::{
        MAX_REPS, MAX_WEIGHT, MIN_REPS, MIN_WEIGHT, PAGE_TITLE, REPS_RANGE_MESSAGE,
        WEIGHT_RANGE_MESSAGE, WEIGHT_STEP,
    },
    hooks::{use_calculator, use_number_field},
    validation::{validate_reps, validate_weight},
    SubmitData,
};
use yew::prelude::*;

/// Primary application component: the form and its results.
#[function_component]
pub fn App() -> Html {
    let weight = use_number_field(validate_weight);
    let reps = use_number_field(validate_reps);
    let calculator = use_calculator();

    let onsubmit = {
        let submit = calculator.submit.clone();
        let (w, r) = (weight.value, reps.value);
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit.emit(SubmitData { weight: w, reps: r });
        })
    };

    html! {
        <div class="container">
            <header>
                <h1>{ PAGE_TITLE }</h1>
            </header>
            <main>
                <form {onsubmit} class="calculator-form">
                    <div class="form-group">
                        <label for="weight">{ "Weight Lifted" }</label>
                        <input
                            required=true
                            id="weight"
                            name="weight"
                            type="number"
                            min={MIN_WEIGHT.to_string()}
                            max={MAX_WEIGHT.to_string()}
                            step={WEIGHT_STEP.to_string()}
                            enterkeyhint="next"
                            aria-describedby="condition-of-weight-value"
                            oninput={weight.oninput.clone()}
                        />
                        <FieldHint
                            id="condition-of-weight-value"
                            valid={weight.is_valid}
                            range_message={WEIGHT_RANGE_MESSAGE}
                        />
                    </div>
                    <div class="form-group">
                        <label for="reps">{ "Reps Performed" }</label>
                        <input
                            required=true
                            id="reps"
                            name="reps"
                            type="number"
                            min={MIN_REPS.to_string()}
                            max={MAX_REPS.to_string()}
                            enterkeyhint="send"
                            aria-describedby="condition-of-reps-value"
                            oninput={reps.oninput.clone()}
                        />
                        <FieldHint
                            id="condition-of-reps-value"
                            valid={reps.is_valid}
                            range_message={REPS_RANGE_MESSAGE}
                        />
                    </div>
                    <CalculateButton clickable={calculator.state.is_button_clickable()} />
                </form>
                <hr />
                <Results result={calculator.state.latest.clone()} />
            </main>
            <footer>{ "© 2022 Hiroki Takeshita" }</footer>
        </div>
    }
}

/// Entry point: installs the panic hook and logger, then renders the App.
fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    yew::Renderer::<App>::new().render();
}
