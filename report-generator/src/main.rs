//! Generate Reports
//!
//! A single form for requesting reports from the report service:
//! 1. On mount: fetch the employee directory once.
//! 2. Every edit re-derives which fields are visible from the filter state.
//! 3. "Generate Report" serializes the filter and replaces the report list
//!    with the backend's answer; failures keep the previous list and show
//!    the error.

use dioxus::prelude::*;
use rg_filter::{resolve_visibility, FormField, ReportConfig};
use rg_ui::actions;
use rg_ui::components::{
    CategorySelector, DateRangePicker, EmployeePicker, EmployeeScopeSelector, FormHeader,
    GenerateButton, MonthSelector, PeriodSelector, QuarterSelector, ReportList, TeamPicker,
    YearSelector,
};
use rg_ui::state::FormState;

// Endpoints, contract and selector choices, embedded at compile time.
const REPORT_CONFIG_JSON: &str = include_str!("../assets/report-config.json");

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("generate-reports-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let state = use_context_provider(|| {
        FormState::new(ReportConfig::from_embedded(REPORT_CONFIG_JSON))
    });

    // Employee directory is fetched once per form instance.
    use_effect(move || {
        log::info!("Loading employee directory");
        actions::load_employees(state);
    });

    let visible = resolve_visibility(&state.filter.read());

    rsx! {
        div {
            style: "max-width: 720px; margin: 0 auto; padding: 16px; font-family: system-ui, -apple-system, sans-serif;",

            FormHeader {
                title: "Generate Reports".to_string(),
                subtitle: "Choose categories, a period and employees".to_string(),
            }

            div {
                style: "padding: 16px; border: 1px solid #E0E0E0; border-radius: 8px; background: white;",

                if visible.contains(FormField::CategorySelector) {
                    CategorySelector {}
                }

                PeriodSelector {}

                if visible.contains(FormField::Month) {
                    MonthSelector {}
                }
                if visible.contains(FormField::Quarter) {
                    QuarterSelector {}
                }
                if visible.contains(FormField::Year) {
                    YearSelector {}
                }
                if visible.contains(FormField::DateRange) {
                    DateRangePicker {}
                }

                if visible.contains(FormField::EmployeeScopeSelector) {
                    EmployeeScopeSelector {}
                }
                if visible.contains(FormField::IndividualEmployee) {
                    EmployeePicker {}
                }
                if visible.contains(FormField::TeamMembers) {
                    TeamPicker {}
                }

                GenerateButton {}
            }

            ReportList {}
        }
    }
}
