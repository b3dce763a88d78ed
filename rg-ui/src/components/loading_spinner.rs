//! Loading indicator shown while a report request is in flight.

use dioxus::prelude::*;

#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; padding: 20px; color: #666;",
            "Generating report..."
        }
    }
}
