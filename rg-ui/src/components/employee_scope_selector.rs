//! All / individual / team switch for the employees a report covers.

use crate::state::FormState;
use dioxus::prelude::*;
use rg_client::LoadStatus;
use rg_filter::{EmployeeScope, FilterEdit};

#[component]
pub fn EmployeeScopeSelector() -> Element {
    let mut state = use_context::<FormState>();
    let current = state.filter.read().employee_scope();
    let directory_failed = matches!(state.session.read().employee_status(), LoadStatus::Failed(_));

    let on_change = move |evt: Event<FormData>| {
        if let Ok(scope) = evt.value().parse::<EmployeeScope>() {
            state.edit(FilterEdit::SetEmployeeScope(scope));
        }
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "scope-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Employee: "
            }
            select {
                id: "scope-select",
                onchange: on_change,
                for scope in EmployeeScope::ALL {
                    option {
                        value: scope.as_str(),
                        selected: current == scope,
                        {scope.label()}
                    }
                }
            }
            if directory_failed {
                span {
                    style: "margin-left: 8px; font-size: 12px; color: #999;",
                    "Employee directory unavailable"
                }
            }
        }
    }
}
