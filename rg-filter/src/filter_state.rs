//! The user's current report filter selections.
//!
//! `FilterState` stores whatever the user entered, including combinations
//! that are inconsistent for the chosen period (a quarter while the period is
//! monthly). Deciding what is active is left to [`crate::visibility`] and
//! [`crate::period::EffectivePeriod`].

use crate::category::Category;
use crate::error::ParseFilterError;
use crate::model::EmployeeId;
use crate::period::{Month, PeriodKind, Quarter};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which employees a report covers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EmployeeScope {
    #[default]
    All,
    Individual,
    Team,
}

impl EmployeeScope {
    pub const ALL: [EmployeeScope; 3] = [
        EmployeeScope::All,
        EmployeeScope::Individual,
        EmployeeScope::Team,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EmployeeScope::All => "all",
            EmployeeScope::Individual => "individual",
            EmployeeScope::Team => "team",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EmployeeScope::All => "All Employees",
            EmployeeScope::Individual => "Individual Employee",
            EmployeeScope::Team => "Team Members",
        }
    }
}

impl fmt::Display for EmployeeScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmployeeScope {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(EmployeeScope::All),
            "individual" => Ok(EmployeeScope::Individual),
            "team" => Ok(EmployeeScope::Team),
            _ => Err(ParseFilterError::Scope(s.to_string())),
        }
    }
}

/// A single user edit to the filter.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterEdit {
    SetCategories(Vec<Category>),
    ToggleCategory(Category),
    SetPeriodKind(Option<PeriodKind>),
    SetMonth(Option<Month>),
    SetQuarter(Option<Quarter>),
    SetYear(Option<i32>),
    SetFromDate(Option<NaiveDate>),
    SetToDate(Option<NaiveDate>),
    SetEmployeeScope(EmployeeScope),
    SelectEmployee(Option<EmployeeId>),
    ToggleTeamMember(EmployeeId),
    SetTeamMembers(Vec<EmployeeId>),
}

/// Filter selections owned by one form instance.
///
/// Created with defaults when the form mounts and changed only through
/// [`FilterEdit`]s. Editing one field never clears another.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    categories: Vec<Category>,
    period_kind: Option<PeriodKind>,
    month: Option<Month>,
    quarter: Option<Quarter>,
    year: Option<i32>,
    from_date: Option<NaiveDate>,
    to_date: Option<NaiveDate>,
    employee_scope: EmployeeScope,
    selected_employee: Option<EmployeeId>,
    team_members: Vec<EmployeeId>,
}

impl FilterState {
    /// Selected categories in the order they were picked, without duplicates.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn has_category(&self, category: &Category) -> bool {
        self.categories.contains(category)
    }

    pub fn period_kind(&self) -> Option<PeriodKind> {
        self.period_kind
    }

    pub fn month(&self) -> Option<Month> {
        self.month
    }

    pub fn quarter(&self) -> Option<Quarter> {
        self.quarter
    }

    pub fn year(&self) -> Option<i32> {
        self.year
    }

    pub fn from_date(&self) -> Option<NaiveDate> {
        self.from_date
    }

    pub fn to_date(&self) -> Option<NaiveDate> {
        self.to_date
    }

    pub fn employee_scope(&self) -> EmployeeScope {
        self.employee_scope
    }

    pub fn selected_employee(&self) -> Option<&EmployeeId> {
        self.selected_employee.as_ref()
    }

    pub fn team_members(&self) -> &[EmployeeId] {
        &self.team_members
    }

    pub fn has_team_member(&self, id: &EmployeeId) -> bool {
        self.team_members.contains(id)
    }

    /// Apply an edit in place.
    pub fn apply(&mut self, edit: FilterEdit) {
        match edit {
            FilterEdit::SetCategories(categories) => self.categories = dedup(categories),
            FilterEdit::ToggleCategory(category) => toggle(&mut self.categories, category),
            FilterEdit::SetPeriodKind(kind) => self.period_kind = kind,
            FilterEdit::SetMonth(month) => self.month = month,
            FilterEdit::SetQuarter(quarter) => self.quarter = quarter,
            FilterEdit::SetYear(year) => self.year = year,
            FilterEdit::SetFromDate(date) => self.from_date = date,
            FilterEdit::SetToDate(date) => self.to_date = date,
            FilterEdit::SetEmployeeScope(scope) => self.employee_scope = scope,
            FilterEdit::SelectEmployee(id) => {
                self.selected_employee = id.filter(|id| !id.is_empty())
            }
            FilterEdit::ToggleTeamMember(id) => toggle(&mut self.team_members, id),
            FilterEdit::SetTeamMembers(ids) => self.team_members = dedup(ids),
        }
    }

    /// Apply an edit and return the updated state.
    pub fn with(mut self, edit: FilterEdit) -> Self {
        self.apply(edit);
        self
    }
}

fn toggle<T: PartialEq>(items: &mut Vec<T>, item: T) {
    if let Some(index) = items.iter().position(|existing| *existing == item) {
        items.remove(index);
    } else {
        items.push(item);
    }
}

fn dedup<T: PartialEq>(items: Vec<T>) -> Vec<T> {
    let mut unique = Vec::with_capacity(items.len());
    for item in items {
        if !unique.contains(&item) {
            unique.push(item);
        }
    }
    unique
}
