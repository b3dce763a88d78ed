//! Report area: spinner, error, empty message or table.

use crate::components::{ErrorDisplay, LoadingSpinner, ReportTable};
use crate::state::FormState;
use dioxus::prelude::*;
use rg_client::session::NO_REPORTS_MESSAGE;
use rg_client::{ReportBody, ReportListView};

#[component]
pub fn ReportList() -> Element {
    let mut state = use_context::<FormState>();
    let ReportListView { loading, error, body } = state.session.read().view();

    let content = match body {
        ReportBody::Pending => rsx! {},
        ReportBody::Empty => rsx! {
            p {
                style: "margin-top: 16px; text-align: center; color: #666;",
                "{NO_REPORTS_MESSAGE}"
            }
        },
        ReportBody::Table(rows) => rsx! {
            ReportTable { rows }
        },
    };

    rsx! {
        if let Some(message) = error {
            ErrorDisplay {
                title: "Report generation failed".to_string(),
                message,
                on_dismiss: move |_| state.session.write().dismiss_error(),
            }
        }
        if loading {
            LoadingSpinner {}
        }
        {content}
    }
}
