//! Dropdown for a single employee, shown for the individual scope.

use crate::state::FormState;
use dioxus::prelude::*;
use rg_filter::{EmployeeId, FilterEdit};

#[component]
pub fn EmployeePicker() -> Element {
    let mut state = use_context::<FormState>();
    let employees = state.session.read().employees().to_vec();
    let selected = state.filter.read().selected_employee().cloned();

    let on_change = move |evt: Event<FormData>| {
        let id = EmployeeId::new(evt.value());
        state.edit(FilterEdit::SelectEmployee(Some(id)));
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "employee-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Select Employee: "
            }
            select {
                id: "employee-select",
                onchange: on_change,
                option { value: "", selected: selected.is_none(), "--" }
                for employee in employees {
                    option {
                        key: "{employee.id}",
                        value: "{employee.id}",
                        selected: selected.as_ref() == Some(&employee.id),
                        "{employee.name}"
                    }
                }
            }
        }
    }
}
