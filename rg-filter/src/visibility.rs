//! Which form fields are shown for a given filter state.
//!
//! No field is ever mandatory: an incomplete filter may be submitted and the
//! backend applies its own defaults. The period-kind selector drives these
//! rules and is always rendered, so it is not part of the resolved set.

use crate::filter_state::{EmployeeScope, FilterState};
use crate::period::PeriodKind;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FormField {
    CategorySelector,
    Month,
    Quarter,
    Year,
    DateRange,
    EmployeeScopeSelector,
    IndividualEmployee,
    TeamMembers,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibleFieldSet(BTreeSet<FormField>);

impl VisibleFieldSet {
    pub fn contains(&self, field: FormField) -> bool {
        self.0.contains(&field)
    }
}

impl FromIterator<FormField> for VisibleFieldSet {
    fn from_iter<I: IntoIterator<Item = FormField>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

pub fn resolve_visibility(state: &FilterState) -> VisibleFieldSet {
    let mut fields = BTreeSet::from([FormField::CategorySelector, FormField::EmployeeScopeSelector]);

    match state.period_kind() {
        Some(PeriodKind::Monthly) => {
            fields.insert(FormField::Month);
        }
        Some(PeriodKind::Quarterly) => {
            fields.insert(FormField::Quarter);
        }
        Some(PeriodKind::SpecificDates) => {
            fields.insert(FormField::DateRange);
        }
        Some(PeriodKind::Yearly) | None => {}
    }
    if state.period_kind().is_some_and(|kind| kind.uses_year()) {
        fields.insert(FormField::Year);
    }

    match state.employee_scope() {
        EmployeeScope::Individual => {
            fields.insert(FormField::IndividualEmployee);
        }
        EmployeeScope::Team => {
            fields.insert(FormField::TeamMembers);
        }
        EmployeeScope::All => {}
    }

    VisibleFieldSet(fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter_state::FilterEdit;
    use crate::period::Quarter;
    use chrono::NaiveDate;

    fn with_period(kind: Option<PeriodKind>) -> FilterState {
        FilterState::default().with(FilterEdit::SetPeriodKind(kind))
    }

    fn set(fields: &[FormField]) -> VisibleFieldSet {
        fields.iter().copied().collect()
    }

    #[test]
    fn test_fields_for_every_period_kind() {
        let always = [FormField::CategorySelector, FormField::EmployeeScopeSelector];
        let with = |extra: &[FormField]| set(&[&always[..], extra].concat());
        let cases = [
            (None, with(&[])),
            (Some(PeriodKind::Monthly), with(&[FormField::Month, FormField::Year])),
            (Some(PeriodKind::Quarterly), with(&[FormField::Quarter, FormField::Year])),
            (Some(PeriodKind::Yearly), with(&[FormField::Year])),
            (Some(PeriodKind::SpecificDates), with(&[FormField::DateRange])),
        ];
        for (kind, expected) in cases {
            assert_eq!(resolve_visibility(&with_period(kind)), expected, "{kind:?}");
        }
    }

    #[test]
    fn test_fields_for_every_scope() {
        let individual = FilterState::default()
            .with(FilterEdit::SetEmployeeScope(EmployeeScope::Individual));
        let team = FilterState::default().with(FilterEdit::SetEmployeeScope(EmployeeScope::Team));

        let visible = resolve_visibility(&individual);
        assert!(visible.contains(FormField::IndividualEmployee));
        assert!(!visible.contains(FormField::TeamMembers));

        let visible = resolve_visibility(&team);
        assert!(visible.contains(FormField::TeamMembers));
        assert!(!visible.contains(FormField::IndividualEmployee));

        let visible = resolve_visibility(&FilterState::default());
        assert!(!visible.contains(FormField::TeamMembers));
        assert!(!visible.contains(FormField::IndividualEmployee));
    }

    #[test]
    fn test_monthly_scenario() {
        let state = FilterState::default()
            .with(FilterEdit::SetPeriodKind(Some(PeriodKind::Monthly)))
            .with(FilterEdit::SetMonth(Some(crate::period::Month::March)))
            .with(FilterEdit::SetYear(Some(2024)))
            .with(FilterEdit::SetCategories(vec!["webinars".into()]));
        assert_eq!(
            resolve_visibility(&state),
            set(&[
                FormField::Month,
                FormField::Year,
                FormField::CategorySelector,
                FormField::EmployeeScopeSelector,
            ])
        );
    }

    #[test]
    fn test_specific_dates_hide_month_quarter_and_year() {
        let state = FilterState::default()
            .with(FilterEdit::SetQuarter(Some(Quarter::Q1)))
            .with(FilterEdit::SetYear(Some(2024)))
            .with(FilterEdit::SetPeriodKind(Some(PeriodKind::SpecificDates)))
            .with(FilterEdit::SetFromDate(NaiveDate::from_ymd_opt(2024, 1, 1)))
            .with(FilterEdit::SetToDate(NaiveDate::from_ymd_opt(2024, 1, 31)));
        let visible = resolve_visibility(&state);
        assert!(visible.contains(FormField::DateRange));
        assert!(!visible.contains(FormField::Month));
        assert!(!visible.contains(FormField::Quarter));
        assert!(!visible.contains(FormField::Year));
    }
}
