//! Year dropdown for monthly, quarterly and yearly reports.

use crate::state::FormState;
use dioxus::prelude::*;
use rg_filter::FilterEdit;

#[component]
pub fn YearSelector() -> Element {
    let mut state = use_context::<FormState>();
    let years = state.config.read().years.clone();
    let current = state.filter.read().year();

    let on_change = move |evt: Event<FormData>| {
        state.edit(FilterEdit::SetYear(evt.value().parse::<i32>().ok()));
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "year-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Select Year: "
            }
            select {
                id: "year-select",
                onchange: on_change,
                option { value: "", selected: current.is_none(), "--" }
                for year in years {
                    option {
                        value: "{year}",
                        selected: current == Some(year),
                        "{year}"
                    }
                }
            }
        }
    }
}
