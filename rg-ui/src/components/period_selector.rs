//! Dropdown for the report period kind.

use crate::state::FormState;
use dioxus::prelude::*;
use rg_filter::{FilterEdit, PeriodKind};

/// Always rendered; its value decides which period sub-fields are shown.
#[component]
pub fn PeriodSelector() -> Element {
    let mut state = use_context::<FormState>();
    let current = state.filter.read().period_kind();

    let on_change = move |evt: Event<FormData>| {
        let kind = evt.value().parse::<PeriodKind>().ok();
        state.edit(FilterEdit::SetPeriodKind(kind));
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "period-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Select Period: "
            }
            select {
                id: "period-select",
                onchange: on_change,
                option {
                    value: "",
                    selected: current.is_none(),
                    "--"
                }
                for kind in PeriodKind::ALL {
                    option {
                        value: kind.as_str(),
                        selected: current == Some(kind),
                        {kind.label()}
                    }
                }
            }
        }
    }
}
