//! Quarter dropdown, shown for quarterly reports.

use crate::state::FormState;
use dioxus::prelude::*;
use rg_filter::{FilterEdit, Quarter};

#[component]
pub fn QuarterSelector() -> Element {
    let mut state = use_context::<FormState>();
    let current = state.filter.read().quarter();

    let on_change = move |evt: Event<FormData>| {
        state.edit(FilterEdit::SetQuarter(evt.value().parse::<Quarter>().ok()));
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "quarter-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Select Quarter: "
            }
            select {
                id: "quarter-select",
                onchange: on_change,
                option { value: "", selected: current.is_none(), "--" }
                for quarter in Quarter::ALL {
                    option {
                        value: quarter.as_str(),
                        selected: current == Some(quarter),
                        {quarter.as_str()}
                    }
                }
            }
        }
    }
}
