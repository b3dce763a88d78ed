//! Display rows for generated reports.

use crate::dates::format_created_date;
use crate::model::{Employee, EmployeeId, Report};
use serde::Serialize;

/// Shown in place of the employee name when a report references an id that
/// is not in the employee snapshot.
pub const UNKNOWN_EMPLOYEE: &str = "Unknown";

/// Look up an employee's name by id.
pub fn employee_name<'a>(employees: &'a [Employee], id: &EmployeeId) -> Option<&'a str> {
    employees
        .iter()
        .find(|employee| &employee.id == id)
        .map(|employee| employee.name.as_str())
}

/// A report ready for the table: names resolved and dates formatted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub title: String,
    pub employee_name: String,
    pub created_date: String,
    pub category: Option<String>,
}

impl ReportRow {
    pub fn resolve(report: &Report, employees: &[Employee], placeholder: &str) -> Self {
        Self {
            title: report.title.clone(),
            employee_name: employee_name(employees, &report.reference_name)
                .unwrap_or(placeholder)
                .to_string(),
            created_date: format_created_date(&report.created_date),
            category: report.category.clone(),
        }
    }
}

/// Resolve every report; unknown employees fall back to `placeholder` and the
/// remaining rows are still produced.
pub fn resolve_rows(reports: &[Report], employees: &[Employee], placeholder: &str) -> Vec<ReportRow> {
    let rows: Vec<ReportRow> = reports
        .iter()
        .map(|report| ReportRow::resolve(report, employees, placeholder))
        .collect();

    let unresolved = reports
        .iter()
        .filter(|report| employee_name(employees, &report.reference_name).is_none())
        .count();
    if unresolved > 0 {
        log::warn!(
            "{} of {} reports reference employees missing from the directory",
            unresolved,
            reports.len()
        );
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(title: &str, reference: i64) -> Report {
        Report {
            title: title.to_string(),
            reference_name: EmployeeId::from(reference),
            created_date: "2024-03-05T09:30:00".to_string(),
            category: None,
        }
    }

    #[test]
    fn test_known_employee_renders_name() {
        let employees = vec![Employee::new(1, "Asha"), Employee::new(2, "Ben")];
        let row = ReportRow::resolve(&report("Blog roundup", 2), &employees, UNKNOWN_EMPLOYEE);
        assert_eq!(row.employee_name, "Ben");
        assert_eq!(row.created_date, "3/5/2024");
    }

    #[test]
    fn test_unknown_employee_renders_placeholder() {
        let employees = vec![Employee::new(1, "Asha")];
        let rows = resolve_rows(
            &[report("Orphan", 99), report("Owned", 1)],
            &employees,
            UNKNOWN_EMPLOYEE,
        );
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].employee_name, "Unknown");
        assert_eq!(rows[1].employee_name, "Asha");
    }

    #[test]
    fn test_lookup_matches_string_and_numeric_ids() {
        let employees: Vec<Employee> =
            serde_json::from_str(r#"[{"id":"5","name":"Chen"}]"#).unwrap();
        assert_eq!(employee_name(&employees, &EmployeeId::from(5)), Some("Chen"));
    }

    #[test]
    fn test_empty_directory_never_fails() {
        let rows = resolve_rows(&[report("Any", 1)], &[], "n/a");
        assert_eq!(rows[0].employee_name, "n/a");
    }
}
