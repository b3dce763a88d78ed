//! Form state managed via Dioxus context.
//!
//! `FormState` bundles the form's signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<FormState>()`.

use dioxus::prelude::*;
use rg_client::{HttpReportClient, ReportSession};
use rg_filter::{FilterEdit, FilterState, ReportConfig};

/// Shared state for one ReportFilterForm instance.
#[derive(Clone, Copy)]
pub struct FormState {
    /// Endpoints, contract and selector choices
    pub config: Signal<ReportConfig>,
    /// Client built from `config`
    pub client: Signal<HttpReportClient>,
    /// The user's current selections
    pub filter: Signal<FilterState>,
    /// Employee snapshot, report list and loading flag
    pub session: Signal<ReportSession>,
}

impl FormState {
    /// Create a new FormState with an empty filter and session.
    pub fn new(config: ReportConfig) -> Self {
        let client = HttpReportClient::from_config(&config);
        let session = ReportSession::new(&config.unknown_employee_label);
        Self {
            config: Signal::new(config),
            client: Signal::new(client),
            filter: Signal::new(FilterState::default()),
            session: Signal::new(session),
        }
    }

    /// Apply a user edit to the filter.
    pub fn edit(&mut self, edit: FilterEdit) {
        self.filter.write().apply(edit);
    }
}
