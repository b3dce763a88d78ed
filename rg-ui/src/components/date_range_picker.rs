//! From/To date inputs for reports over specific dates.

use crate::state::FormState;
use dioxus::prelude::*;
use rg_filter::dates::{format_date, parse_optional_date};
use rg_filter::FilterEdit;

#[component]
pub fn DateRangePicker() -> Element {
    let mut state = use_context::<FormState>();
    let filter = state.filter.read().clone();
    let from = filter.from_date().as_ref().map(format_date).unwrap_or_default();
    let to = filter.to_date().as_ref().map(format_date).unwrap_or_default();

    let on_from_change = move |evt: Event<FormData>| {
        state.edit(FilterEdit::SetFromDate(parse_optional_date(&evt.value())));
    };

    let on_to_change = move |evt: Event<FormData>| {
        state.edit(FilterEdit::SetToDate(parse_optional_date(&evt.value())));
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: center;",
            label {
                style: "font-weight: bold;",
                "From Date: "
                input {
                    r#type: "date",
                    value: "{from}",
                    max: "{to}",
                    onchange: on_from_change,
                }
            }
            label {
                style: "font-weight: bold;",
                "To Date: "
                input {
                    r#type: "date",
                    value: "{to}",
                    min: "{from}",
                    onchange: on_to_change,
                }
            }
        }
    }
}
