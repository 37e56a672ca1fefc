//! Pure Yew view components for the calculator page.
//!
//! This module contains stateless components that render based on props,
//! with the text-producing helpers split out so they can be tested natively.

use std::rc::Rc;
use yew::prelude::*;

use crate::config::{
    CALCULATE_BUTTON_LABEL, CALCULATING_TEXT, HINT_OK, PLACEHOLDER_CELL, PLACEHOLDER_MAX,
};
use crate::models::{PercentageWeight, SuccessData};
use crate::validation::hint_text;

/// Numbers render the way the service sent them: `100`, `92.5`.
pub fn format_number(value: f64) -> String {
    value.to_string()
}

/// Text next to "Your 1RM:".
pub fn one_rep_max_text(result: Option<&SuccessData>) -> String {
    match result {
        Some(r) => format_number(r.one_rep_max),
        None => PLACEHOLDER_MAX.to_string(),
    }
}

/// Table cells, one `(percentage, weight)` pair per row, in received order.
/// Before the first success there is a single placeholder row.
pub fn table_rows(result: Option<&SuccessData>) -> Vec<(String, String)> {
    match result {
        Some(r) => r.weights.iter().map(row_cells).collect(),
        None => vec![(PLACEHOLDER_CELL.to_string(), PLACEHOLDER_CELL.to_string())],
    }
}

fn row_cells(row: &PercentageWeight) -> (String, String) {
    (format!("{}%", format_number(row.percentage)), format_number(row.weight))
}

/// Inline hint under a field: bold "ok" or the range message.
#[derive(Properties, PartialEq)]
pub struct FieldHintProps {
    pub id: AttrValue,
    pub valid: bool,
    pub range_message: &'static str,
}

#[function_component(FieldHint)]
pub fn field_hint(props: &FieldHintProps) -> Html {
    let text = hint_text(props.valid, props.range_message);
    html! {
        <p id={props.id.clone()} class="field-hint">
            if text == HINT_OK {
                <span class="hint-ok">{ text }</span>
            } else {
                { text }
            }
        </p>
    }
}

#[derive(Properties, PartialEq)]
pub struct CalculateButtonProps {
    pub clickable: bool,
}

/// Submit control plus the in-flight indicator.
#[function_component(CalculateButton)]
pub fn calculate_button(props: &CalculateButtonProps) -> Html {
    html! {
        <div>
            <button
                id="calculate-button"
                type="submit"
                disabled={!props.clickable}
                aria-label={CALCULATE_BUTTON_LABEL}
            >
                { "Calculate" }
            </button>
            if !props.clickable {
                <p class="calculating">{ CALCULATING_TEXT }</p>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ResultsProps {
    pub result: Option<Rc<SuccessData>>,
}

/// Renders the 1RM heading and the percentage table.
#[function_component(Results)]
pub fn results(props: &ResultsProps) -> Html {
    let result = props.result.as_deref();

    html! {
        <>
            <h2 class="one-rep-max">
                { "Your 1RM:" }
                <span class="one-rep-max-value">{ one_rep_max_text(result) }</span>
            </h2>
            <div class="results">
                <h3>{ "Weights at each percentage of 1RM" }</h3>
                <table class="percentage-table">
                    <thead>
                        <tr>
                            <th>{ "Percentage of 1RM" }</th>
                            <th>{ "Weight" }</th>
                        </tr>
                    </thead>
                    <tbody>
                        { table_rows(result).into_iter().map(|(pct, weight)| html! {
                            <tr>
                                <td>{ pct }</td>
                                <td>{ weight }</td>
                            </tr>
                        }).collect::<Html>() }
                    </tbody>
                </table>
            </div>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SuccessData {
        SuccessData {
            one_rep_max: 100.0,
            weights: vec![
                PercentageWeight { percentage: 90.0, weight: 90.0 },
                PercentageWeight { percentage: 80.0, weight: 80.0 },
            ],
        }
    }

    #[test]
    fn placeholders_before_first_result() {
        assert_eq!(one_rep_max_text(None), "?");
        assert_eq!(table_rows(None), vec![("...".to_string(), "...".to_string())]);
    }

    #[test]
    fn result_rows_follow_received_order() {
        let data = sample();
        assert_eq!(one_rep_max_text(Some(&data)), "100");
        assert_eq!(
            table_rows(Some(&data)),
            vec![
                ("90%".to_string(), "90".to_string()),
                ("80%".to_string(), "80".to_string()),
            ]
        );
    }

    #[test]
    fn fractional_values_keep_their_decimals() {
        assert_eq!(format_number(92.5), "92.5");
        assert_eq!(format_number(116.7), "116.7");
    }
}
