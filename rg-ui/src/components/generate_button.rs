//! Submit button for report generation.

use crate::actions::generate_report;
use crate::state::FormState;
use dioxus::prelude::*;

/// Disabled while a request is in flight.
#[component]
pub fn GenerateButton() -> Element {
    let state = use_context::<FormState>();
    let loading = state.session.read().is_loading();

    rsx! {
        button {
            style: "width: 100%; margin: 12px 0; padding: 10px; font-weight: bold; color: white; background: #1976D2; border: none; border-radius: 4px;",
            disabled: loading,
            onclick: move |_| generate_report(state),
            "Generate Report"
        }
    }
}
