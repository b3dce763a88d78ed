//! Request lifecycle for one form instance.
//!
//! `ReportSession` holds the employee snapshot, the current report list and
//! the loading flag. Each generate request moves through
//! `Idle -> Loading -> {Success, Failure} -> Idle`:
//!
//! - [`ReportSession::begin_generate`] acquires the loading flag and hands out
//!   a [`RequestTicket`].
//! - [`ReportSession::complete_generate`] always releases it, whatever the
//!   outcome.
//!
//! Submitting again while a request is in flight is allowed. Tickets carry a
//! sequence number and only a response newer than the last applied one may
//! replace the report list, so a slow early response cannot overwrite a
//! later one.
//!
//! The split begin/complete API lets UI code hold the session in a signal and
//! await the network call outside any borrow; [`ReportSession::generate`]
//! wraps the whole cycle for callers that can hold `&mut self` across it.

use crate::api::ReportApi;
use crate::error::FetchError;
use rg_filter::report_row::resolve_rows;
use rg_filter::{Employee, FilterState, Report, ReportRequest, ReportRow, UNKNOWN_EMPLOYEE};

/// Message shown when a request settled with no reports.
pub const NO_REPORTS_MESSAGE: &str = "No Data/Reports Available";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    NotStarted,
    Loading,
    Loaded,
    Failed(String),
}

/// Proof that a generate request was started; pass it back on completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "a ticket must be passed to complete_generate to release the loading flag"]
pub struct RequestTicket {
    sequence: u64,
}

/// What the report area should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportListView {
    pub loading: bool,
    /// Message from the latest failed request; earlier reports stay visible.
    pub error: Option<String>,
    pub body: ReportBody,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportBody {
    /// A request is in flight and there is nothing to show yet.
    Pending,
    /// No reports; rendered as [`NO_REPORTS_MESSAGE`].
    Empty,
    Table(Vec<ReportRow>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportSession {
    employees: Vec<Employee>,
    employee_status: LoadStatus,
    reports: Vec<Report>,
    last_error: Option<String>,
    in_flight: usize,
    issued: u64,
    applied: u64,
    unknown_label: String,
}

impl Default for ReportSession {
    fn default() -> Self {
        Self::new(UNKNOWN_EMPLOYEE)
    }
}

impl ReportSession {
    /// `unknown_label` is shown for reports whose employee is not in the directory.
    pub fn new(unknown_label: &str) -> Self {
        Self {
            employees: Vec::new(),
            employee_status: LoadStatus::NotStarted,
            reports: Vec::new(),
            last_error: None,
            in_flight: 0,
            issued: 0,
            applied: 0,
            unknown_label: unknown_label.to_string(),
        }
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn employee_status(&self) -> &LoadStatus {
        &self.employee_status
    }

    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Hide the last error without touching the reports.
    pub fn dismiss_error(&mut self) {
        self.last_error = None;
    }

    /// True while at least one generate request is in flight.
    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    // ───────────────────── Employees ─────────────────────

    pub fn begin_employee_load(&mut self) {
        self.employee_status = LoadStatus::Loading;
    }

    /// On failure the snapshot is left as it was (empty on mount) and the
    /// form stays usable with empty employee pickers.
    pub fn complete_employee_load(&mut self, result: Result<Vec<Employee>, FetchError>) {
        match result {
            Ok(employees) => {
                log::info!("Employee snapshot holds {} entries", employees.len());
                self.employees = employees;
                self.employee_status = LoadStatus::Loaded;
            }
            Err(e) => {
                log::error!("Error fetching employees: {}", e);
                self.employee_status = LoadStatus::Failed(e.to_string());
            }
        }
    }

    pub async fn load_employees<A: ReportApi>(&mut self, api: &A) {
        self.begin_employee_load();
        let result = api.list_employees().await;
        self.complete_employee_load(result);
    }

    // ───────────────────── Reports ─────────────────────

    /// The request `filter` serializes to against the current employee snapshot.
    pub fn request_for(&self, filter: &FilterState) -> ReportRequest {
        ReportRequest::from_filter(filter, &self.employees)
    }

    pub fn begin_generate(&mut self) -> RequestTicket {
        self.in_flight += 1;
        self.issued += 1;
        RequestTicket {
            sequence: self.issued,
        }
    }

    /// Release the loading flag for `ticket` and apply its outcome.
    ///
    /// Returns false when the response was superseded by a newer one and
    /// discarded. A failure keeps the previous reports and records the error.
    pub fn complete_generate(
        &mut self,
        ticket: RequestTicket,
        result: Result<Vec<Report>, FetchError>,
    ) -> bool {
        self.in_flight = self.in_flight.saturating_sub(1);

        if ticket.sequence <= self.applied {
            log::info!(
                "Discarding response for request #{} (request #{} already applied)",
                ticket.sequence,
                self.applied
            );
            return false;
        }
        self.applied = ticket.sequence;

        match result {
            Ok(reports) => {
                self.reports = reports;
                self.last_error = None;
            }
            Err(e) => {
                log::error!("Error generating report: {}", e);
                self.last_error = Some(e.to_string());
            }
        }
        true
    }

    /// Run a full generate cycle for `filter`. The loading flag is released
    /// before this returns, on success and failure alike.
    pub async fn generate<A: ReportApi>(
        &mut self,
        api: &A,
        filter: &FilterState,
    ) -> Result<usize, FetchError> {
        let request = self.request_for(filter);
        let ticket = self.begin_generate();
        let result = api.generate_report(&request).await;
        let outcome = result.as_ref().map(Vec::len).map_err(Clone::clone);
        self.complete_generate(ticket, result);
        outcome
    }

    // ───────────────────── Rendering ─────────────────────

    pub fn rows(&self) -> Vec<ReportRow> {
        resolve_rows(&self.reports, &self.employees, &self.unknown_label)
    }

    pub fn view(&self) -> ReportListView {
        let body = if !self.reports.is_empty() {
            ReportBody::Table(self.rows())
        } else if self.is_loading() {
            ReportBody::Pending
        } else {
            ReportBody::Empty
        };
        ReportListView {
            loading: self.is_loading(),
            error: self.last_error.clone(),
            body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rg_filter::{EmployeeId, EmployeeScope, FilterEdit, Month, PeriodKind};
    use std::cell::RefCell;

    fn report(title: &str, reference: i64) -> Report {
        Report {
            title: title.to_string(),
            reference_name: EmployeeId::from(reference),
            created_date: "2024-03-01".to_string(),
            category: Some("webinars".to_string()),
        }
    }

    fn roster() -> Vec<Employee> {
        vec![Employee::new(1, "Asha"), Employee::new(2, "Ben")]
    }

    /// In-memory backend that records requests and replays canned outcomes.
    struct FakeApi {
        employees: Result<Vec<Employee>, FetchError>,
        reports: Result<Vec<Report>, FetchError>,
        requests: RefCell<Vec<ReportRequest>>,
    }

    impl FakeApi {
        fn new(reports: Result<Vec<Report>, FetchError>) -> Self {
            Self {
                employees: Ok(roster()),
                reports,
                requests: RefCell::new(Vec::new()),
            }
        }
    }

    impl ReportApi for FakeApi {
        async fn list_employees(&self) -> Result<Vec<Employee>, FetchError> {
            self.employees.clone()
        }

        async fn generate_report(
            &self,
            request: &ReportRequest,
        ) -> Result<Vec<Report>, FetchError> {
            self.requests.borrow_mut().push(request.clone());
            self.reports.clone()
        }
    }

    fn network_down() -> FetchError {
        FetchError::Transport("connection refused".to_string())
    }

    #[test]
    fn loading_flag_follows_request_lifetime() {
        let mut session = ReportSession::default();
        assert!(!session.is_loading());

        let ticket = session.begin_generate();
        assert!(session.is_loading());

        session.complete_generate(ticket, Ok(vec![report("A", 1)]));
        assert!(!session.is_loading());

        let ticket = session.begin_generate();
        assert!(session.is_loading());
        session.complete_generate(ticket, Err(network_down()));
        assert!(!session.is_loading());
    }

    #[test]
    fn failure_keeps_previous_reports_and_records_error() {
        let mut session = ReportSession::default();
        let ticket = session.begin_generate();
        session.complete_generate(ticket, Ok(vec![report("A", 1)]));

        let ticket = session.begin_generate();
        session.complete_generate(ticket, Err(FetchError::Status { status: 500, url: "x".into() }));

        assert_eq!(session.reports().len(), 1);
        assert_eq!(session.last_error(), Some("x responded with status 500"));

        let ticket = session.begin_generate();
        session.complete_generate(ticket, Ok(vec![]));
        assert_eq!(session.last_error(), None);
        assert!(session.reports().is_empty());
    }

    #[test]
    fn dismissing_an_error_keeps_the_table() {
        let mut session = ReportSession::default();
        let ticket = session.begin_generate();
        session.complete_generate(ticket, Ok(vec![report("A", 1)]));
        let ticket = session.begin_generate();
        session.complete_generate(ticket, Err(FetchError::Transport("refused".into())));
        assert!(session.view().error.is_some());

        session.dismiss_error();
        let view = session.view();
        assert_eq!(view.error, None);
        assert!(matches!(view.body, ReportBody::Table(rows) if rows.len() == 1));
    }

    #[test]
    fn slow_earlier_response_does_not_overwrite_newer_one() {
        let mut session = ReportSession::default();
        let first = session.begin_generate();
        let second = session.begin_generate();

        assert!(session.complete_generate(second, Ok(vec![report("second", 2)])));
        assert!(session.is_loading(), "first request is still in flight");

        assert!(!session.complete_generate(first, Ok(vec![report("first", 1)])));
        assert!(!session.is_loading());
        assert_eq!(session.reports()[0].title, "second");
    }

    #[test]
    fn in_order_responses_apply_in_turn() {
        let mut session = ReportSession::default();
        let first = session.begin_generate();
        let second = session.begin_generate();

        assert!(session.complete_generate(first, Ok(vec![report("first", 1)])));
        assert!(session.complete_generate(second, Ok(vec![report("second", 2)])));
        assert_eq!(session.reports()[0].title, "second");
    }

    #[test]
    fn employee_load_failure_leaves_empty_snapshot() {
        let mut session = ReportSession::default();
        session.begin_employee_load();
        assert_eq!(session.employee_status(), &LoadStatus::Loading);

        session.complete_employee_load(Err(network_down()));
        assert!(session.employees().is_empty());
        assert!(matches!(session.employee_status(), LoadStatus::Failed(_)));

        // The form still serializes; "all" simply resolves to nobody.
        let request = session.request_for(&FilterState::default());
        assert!(request.employee_ids.is_empty());
    }

    #[test]
    fn view_states() {
        let mut session = ReportSession::default();
        assert_eq!(session.view().body, ReportBody::Empty);

        let ticket = session.begin_generate();
        let view = session.view();
        assert!(view.loading);
        assert_eq!(view.body, ReportBody::Pending);

        session.complete_employee_load(Ok(roster()));
        session.complete_generate(ticket, Ok(vec![report("Known", 2), report("Orphan", 42)]));
        let view = session.view();
        assert!(!view.loading);
        match view.body {
            ReportBody::Table(rows) => {
                assert_eq!(rows[0].employee_name, "Ben");
                assert_eq!(rows[1].employee_name, "Unknown");
            }
            other => panic!("expected table, got {other:?}"),
        }
    }

    #[test]
    fn empty_result_shows_no_data_not_table() {
        let mut session = ReportSession::default();
        let ticket = session.begin_generate();
        session.complete_generate(ticket, Ok(vec![]));
        assert_eq!(session.view().body, ReportBody::Empty);
        assert_eq!(NO_REPORTS_MESSAGE, "No Data/Reports Available");
    }

    #[test]
    fn custom_unknown_label() {
        let mut session = ReportSession::new("(former employee)");
        let ticket = session.begin_generate();
        session.complete_generate(ticket, Ok(vec![report("Orphan", 7)]));
        assert_eq!(session.rows()[0].employee_name, "(former employee)");
    }

    #[tokio::test]
    async fn generate_scenario_resolves_all_employees() {
        let api = FakeApi::new(Ok(vec![report("March webinars", 1)]));
        let mut session = ReportSession::default();
        session.load_employees(&api).await;
        assert_eq!(session.employee_status(), &LoadStatus::Loaded);

        let filter = FilterState::default()
            .with(FilterEdit::SetPeriodKind(Some(PeriodKind::Monthly)))
            .with(FilterEdit::SetMonth(Some(Month::March)))
            .with(FilterEdit::SetYear(Some(2024)))
            .with(FilterEdit::SetCategories(vec!["webinars".into()]))
            .with(FilterEdit::SetEmployeeScope(EmployeeScope::All));

        let count = session.generate(&api, &filter).await.unwrap();
        assert_eq!(count, 1);
        assert!(!session.is_loading());

        let sent = api.requests.borrow();
        assert_eq!(sent[0].employee_ids, vec![EmployeeId::from(1), EmployeeId::from(2)]);
        assert_eq!(sent[0].month, Some(Month::March));
    }

    #[tokio::test]
    async fn generate_failure_releases_loading_flag() {
        let api = FakeApi::new(Err(network_down()));
        let mut session = ReportSession::default();

        let err = session
            .generate(&api, &FilterState::default())
            .await
            .unwrap_err();
        assert_eq!(err, network_down());
        assert!(!session.is_loading());
        assert!(session.reports().is_empty());
        assert!(session.last_error().is_some());
    }
}
