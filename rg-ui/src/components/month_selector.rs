//! Month dropdown, shown for monthly reports.

use crate::state::FormState;
use dioxus::prelude::*;
use rg_filter::{FilterEdit, Month};

#[component]
pub fn MonthSelector() -> Element {
    let mut state = use_context::<FormState>();
    let current = state.filter.read().month();

    let on_change = move |evt: Event<FormData>| {
        state.edit(FilterEdit::SetMonth(evt.value().parse::<Month>().ok()));
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "month-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Select Month: "
            }
            select {
                id: "month-select",
                onchange: on_change,
                option { value: "", selected: current.is_none(), "--" }
                for month in Month::ALL {
                    option {
                        value: month.name(),
                        selected: current == Some(month),
                        {month.name()}
                    }
                }
            }
        }
    }
}
