//! Serialization of a filter state into the report generation request.
//!
//! [`ReportRequest`] is the JSON body of `POST /api/Reports/generateReport`.
//! [`ReportRequest::query_params`] renders the same request for the older
//! `GET` endpoint that takes everything in the query string.

use crate::category::Category;
use crate::dates::to_iso_timestamp;
use crate::filter_state::{EmployeeScope, FilterState};
use crate::model::{Employee, EmployeeId};
use crate::period::{EffectivePeriod, Month, PeriodKind, Quarter};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRequest {
    pub categories: Vec<Category>,
    pub period: Option<PeriodKind>,
    pub month: Option<Month>,
    pub quarter: Option<Quarter>,
    pub year: Option<i32>,
    pub from_date: Option<String>,
    pub to_date: Option<String>,
    pub employee_selection: EmployeeScope,
    pub employee_ids: Vec<EmployeeId>,
}

impl ReportRequest {
    /// Build the request for `state`, resolving the employee scope against
    /// the current employee snapshot.
    pub fn from_filter(state: &FilterState, employees: &[Employee]) -> Self {
        let period = EffectivePeriod::of(state);
        Self {
            categories: state.categories().to_vec(),
            period: period.kind(),
            month: period.month(),
            quarter: period.quarter(),
            year: period.year(),
            from_date: period.from_date().as_ref().map(to_iso_timestamp),
            to_date: period.to_date().as_ref().map(to_iso_timestamp),
            employee_selection: state.employee_scope(),
            employee_ids: resolve_employee_ids(state, employees),
        }
    }

    /// True when the scope names specific employees but resolved to none:
    /// an individual scope with nothing selected or an empty team.
    pub fn has_empty_selection(&self) -> bool {
        self.employee_selection != EmployeeScope::All && self.employee_ids.is_empty()
    }

    /// Query string pairs for the `GET` contract. Absent values are sent as
    /// empty strings; `employeeId` is empty for "all" and comma-joined for a team.
    ///
    /// The query-string service reads an empty `employeeId` as every employee,
    /// so a request with [`has_empty_selection`](Self::has_empty_selection)
    /// covers everyone under this contract.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let joined_categories = self
            .categories
            .iter()
            .map(Category::as_str)
            .collect::<Vec<_>>()
            .join(",");
        let employee_id = match self.employee_selection {
            EmployeeScope::All => String::new(),
            EmployeeScope::Individual | EmployeeScope::Team => self
                .employee_ids
                .iter()
                .map(EmployeeId::as_str)
                .collect::<Vec<_>>()
                .join(","),
        };

        vec![
            ("category", joined_categories),
            ("employeeId", employee_id),
            ("period", text(self.period.map(|p| p.as_str()))),
            ("month", text(self.month.map(|m| m.name()))),
            ("quarter", text(self.quarter.map(|q| q.as_str()))),
            ("year", self.year.map(|y| y.to_string()).unwrap_or_default()),
            ("fromDate", self.from_date.clone().unwrap_or_default()),
            ("toDate", self.to_date.clone().unwrap_or_default()),
        ]
    }
}

fn text(value: Option<&str>) -> String {
    value.unwrap_or_default().to_string()
}

/// Concrete employee ids covered by the filter's scope.
///
/// `all` expands to every known employee (possibly none), `individual` to the
/// selected employee if there is one, `team` to the selected team members.
pub fn resolve_employee_ids(state: &FilterState, employees: &[Employee]) -> Vec<EmployeeId> {
    match state.employee_scope() {
        EmployeeScope::All => employees.iter().map(|e| e.id.clone()).collect(),
        EmployeeScope::Individual => state.selected_employee().cloned().into_iter().collect(),
        EmployeeScope::Team => state.team_members().to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter_state::FilterEdit;
    use chrono::NaiveDate;
    use serde_json::json;

    fn roster() -> Vec<Employee> {
        vec![Employee::new(1, "Asha"), Employee::new(2, "Ben")]
    }

    fn monthly_march() -> FilterState {
        FilterState::default()
            .with(FilterEdit::SetPeriodKind(Some(PeriodKind::Monthly)))
            .with(FilterEdit::SetMonth(Some(Month::March)))
            .with(FilterEdit::SetYear(Some(2024)))
            .with(FilterEdit::SetCategories(vec!["webinars".into()]))
    }

    #[test]
    fn test_all_scope_expands_to_roster() {
        let request = ReportRequest::from_filter(&monthly_march(), &roster());
        assert_eq!(
            request.employee_ids,
            vec![EmployeeId::from(1), EmployeeId::from(2)]
        );
    }

    #[test]
    fn test_all_scope_with_empty_roster() {
        let request = ReportRequest::from_filter(&monthly_march(), &[]);
        assert!(request.employee_ids.is_empty());
    }

    #[test]
    fn test_individual_without_selection_is_empty() {
        let state = FilterState::default()
            .with(FilterEdit::SetEmployeeScope(EmployeeScope::Individual));
        assert!(resolve_employee_ids(&state, &roster()).is_empty());
    }

    #[test]
    fn test_individual_and_team_resolution() {
        let individual = FilterState::default()
            .with(FilterEdit::SetEmployeeScope(EmployeeScope::Individual))
            .with(FilterEdit::SelectEmployee(Some(EmployeeId::from(2))))
            .with(FilterEdit::ToggleTeamMember(EmployeeId::from(1)));
        assert_eq!(
            resolve_employee_ids(&individual, &roster()),
            vec![EmployeeId::from(2)]
        );

        let team = individual.with(FilterEdit::SetEmployeeScope(EmployeeScope::Team));
        assert_eq!(resolve_employee_ids(&team, &roster()), vec![EmployeeId::from(1)]);
    }

    #[test]
    fn test_monthly_json_body() {
        let request = ReportRequest::from_filter(&monthly_march(), &roster());
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            json!({
                "categories": ["webinars"],
                "period": "monthly",
                "month": "March",
                "quarter": null,
                "year": 2024,
                "fromDate": null,
                "toDate": null,
                "employeeSelection": "all",
                "employeeIds": [1, 2],
            })
        );
    }

    #[test]
    fn test_specific_dates_json_body_drops_stale_year() {
        let state = FilterState::default()
            .with(FilterEdit::SetYear(Some(2023)))
            .with(FilterEdit::SetPeriodKind(Some(PeriodKind::SpecificDates)))
            .with(FilterEdit::SetFromDate(NaiveDate::from_ymd_opt(2024, 1, 1)))
            .with(FilterEdit::SetToDate(NaiveDate::from_ymd_opt(2024, 1, 31)));
        let body = serde_json::to_value(ReportRequest::from_filter(&state, &[])).unwrap();
        assert_eq!(body["period"], "specificDates");
        assert_eq!(body["year"], serde_json::Value::Null);
        assert_eq!(body["fromDate"], "2024-01-01T00:00:00.000Z");
        assert_eq!(body["toDate"], "2024-01-31T00:00:00.000Z");
    }

    #[test]
    fn test_query_params_for_get_contract() {
        let state = FilterState::default()
            .with(FilterEdit::SetCategories(vec!["webinars".into(), "blogs".into()]))
            .with(FilterEdit::SetPeriodKind(Some(PeriodKind::Quarterly)))
            .with(FilterEdit::SetQuarter(Some(Quarter::Q2)))
            .with(FilterEdit::SetYear(Some(2025)))
            .with(FilterEdit::SetEmployeeScope(EmployeeScope::Individual))
            .with(FilterEdit::SelectEmployee(Some(EmployeeId::from(2))));
        let params = ReportRequest::from_filter(&state, &roster()).query_params();
        assert_eq!(
            params,
            vec![
                ("category", "webinars,blogs".to_string()),
                ("employeeId", "2".to_string()),
                ("period", "quarterly".to_string()),
                ("month", String::new()),
                ("quarter", "Q2".to_string()),
                ("year", "2025".to_string()),
                ("fromDate", String::new()),
                ("toDate", String::new()),
            ]
        );
    }

    #[test]
    fn test_query_params_send_empty_employee_for_all() {
        let params = ReportRequest::from_filter(&monthly_march(), &roster()).query_params();
        assert!(params.contains(&("employeeId", String::new())));
        assert!(params.contains(&("period", "monthly".to_string())));
    }

    #[test]
    fn test_empty_individual_or_team_is_flagged() {
        let all = ReportRequest::from_filter(&monthly_march(), &[]);
        assert!(!all.has_empty_selection());

        let nobody = monthly_march().with(FilterEdit::SetEmployeeScope(EmployeeScope::Individual));
        let request = ReportRequest::from_filter(&nobody, &roster());
        assert!(request.has_empty_selection());
        assert!(request.query_params().contains(&("employeeId", String::new())));

        let empty_team = monthly_march().with(FilterEdit::SetEmployeeScope(EmployeeScope::Team));
        assert!(ReportRequest::from_filter(&empty_team, &roster()).has_empty_selection());

        let team = empty_team.with(FilterEdit::ToggleTeamMember(EmployeeId::from(1)));
        assert!(!ReportRequest::from_filter(&team, &roster()).has_empty_selection());
    }
}
