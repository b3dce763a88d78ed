//! Network actions triggered by the form.
//!
//! Both actions take the loading/ticket bookkeeping out of the session
//! synchronously, then await the request in a spawned task and hand the
//! result back, so no signal borrow is held across the network call.

use crate::state::FormState;
use dioxus::prelude::*;
use rg_client::ReportApi;

/// Load the employee directory. Called once when the form mounts.
pub fn load_employees(mut state: FormState) {
    state.session.write().begin_employee_load();
    let client = state.client.peek().clone();
    spawn(async move {
        let result = client.list_employees().await;
        state.session.write().complete_employee_load(result);
    });
}

/// Serialize the current filter and request a report.
pub fn generate_report(mut state: FormState) {
    let filter = state.filter.peek().clone();
    let request = state.session.peek().request_for(&filter);
    log::info!(
        "Generating report: period={:?} scope={} employees={}",
        request.period,
        request.employee_selection,
        request.employee_ids.len()
    );
    let ticket = state.session.write().begin_generate();
    let client = state.client.peek().clone();
    spawn(async move {
        let result = client.generate_report(&request).await;
        state.session.write().complete_generate(ticket, result);
    });
}
