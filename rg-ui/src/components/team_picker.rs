//! Checkbox list of employees, shown for the team scope.

use crate::state::FormState;
use dioxus::prelude::*;
use rg_filter::FilterEdit;

#[component]
pub fn TeamPicker() -> Element {
    let mut state = use_context::<FormState>();
    let employees = state.session.read().employees().to_vec();
    let filter = state.filter.read().clone();
    let selected_count = filter.team_members().len();

    rsx! {
        fieldset {
            style: "margin: 8px 0; border: 1px solid #DDD; border-radius: 4px; max-height: 180px; overflow-y: auto;",
            legend {
                style: "font-weight: bold;",
                "Team Members ({selected_count} selected)"
            }
            if employees.is_empty() {
                p {
                    style: "margin: 0; font-size: 12px; color: #999;",
                    "No employees available"
                }
            }
            for employee in employees {
                {
                    let id = employee.id.clone();
                    let checked = filter.has_team_member(&id);
                    rsx! {
                        label {
                            key: "{employee.id}",
                            style: "display: block;",
                            input {
                                r#type: "checkbox",
                                checked: checked,
                                onchange: move |_| state.edit(FilterEdit::ToggleTeamMember(id.clone())),
                            }
                            " {employee.name}"
                        }
                    }
                }
            }
        }
    }
}
