//! Multi-select for report categories.
//!
//! Choices come from `ReportConfig::category_catalog`; selections keep the
//! order in which they were picked.

use crate::state::FormState;
use dioxus::prelude::*;
use rg_filter::category::label_for;
use rg_filter::FilterEdit;

#[component]
pub fn CategorySelector() -> Element {
    let mut state = use_context::<FormState>();
    let options = state.config.read().category_catalog();
    let filter = state.filter.read().clone();
    let summary = filter
        .categories()
        .iter()
        .map(|c| label_for(&options, c))
        .collect::<Vec<_>>()
        .join(", ");

    rsx! {
        fieldset {
            style: "margin: 8px 0; border: 1px solid #DDD; border-radius: 4px;",
            legend {
                style: "font-weight: bold;",
                "Select Category"
            }
            for option in options {
                {
                    let category = option.category();
                    let checked = filter.has_category(&category);
                    rsx! {
                        label {
                            key: "{option.value}",
                            style: "margin-right: 12px; white-space: nowrap;",
                            input {
                                r#type: "checkbox",
                                value: "{option.value}",
                                checked: checked,
                                onchange: move |_| state.edit(FilterEdit::ToggleCategory(category.clone())),
                            }
                            " {option.label}"
                        }
                    }
                }
            }
            if !summary.is_empty() {
                p {
                    style: "margin: 4px 0 0 0; font-size: 12px; color: #666;",
                    "Selected: {summary}"
                }
            }
        }
    }
}
