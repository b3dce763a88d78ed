//! Report periods: the period kind and its sub-selections.

use crate::error::ParseFilterError;
use crate::filter_state::FilterState;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a report groups time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PeriodKind {
    Monthly,
    Quarterly,
    Yearly,
    SpecificDates,
}

impl PeriodKind {
    pub const ALL: [PeriodKind; 4] = [
        PeriodKind::Monthly,
        PeriodKind::Quarterly,
        PeriodKind::Yearly,
        PeriodKind::SpecificDates,
    ];

    /// Wire value, also used as the `<option>` value.
    pub fn as_str(&self) -> &'static str {
        match self {
            PeriodKind::Monthly => "monthly",
            PeriodKind::Quarterly => "quarterly",
            PeriodKind::Yearly => "yearly",
            PeriodKind::SpecificDates => "specificDates",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PeriodKind::Monthly => "Monthly",
            PeriodKind::Quarterly => "Quarterly",
            PeriodKind::Yearly => "Yearly",
            PeriodKind::SpecificDates => "Specific Dates",
        }
    }

    /// Whether a year sub-selection applies to this kind.
    pub fn uses_year(&self) -> bool {
        matches!(
            self,
            PeriodKind::Monthly | PeriodKind::Quarterly | PeriodKind::Yearly
        )
    }
}

impl fmt::Display for PeriodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PeriodKind {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', '_', ' '], "");
        match normalized.as_str() {
            "monthly" => Ok(PeriodKind::Monthly),
            "quarterly" => Ok(PeriodKind::Quarterly),
            "yearly" => Ok(PeriodKind::Yearly),
            "specificdates" | "dates" => Ok(PeriodKind::SpecificDates),
            _ => Err(ParseFilterError::Period(s.to_string())),
        }
    }
}

/// Calendar month, serialized by its English name ("March").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Month {
    type Err = ParseFilterError;

    /// Accepts full names, three-letter abbreviations and numbers 1-12.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(n) = trimmed.parse::<usize>() {
            return (1..=12)
                .contains(&n)
                .then(|| Month::ALL[n - 1])
                .ok_or_else(|| ParseFilterError::Month(s.to_string()));
        }
        let lowered = trimmed.to_lowercase();
        Month::ALL
            .iter()
            .copied()
            .find(|m| {
                let name = m.name().to_lowercase();
                name == lowered || (lowered.len() == 3 && name.starts_with(&lowered))
            })
            .ok_or_else(|| ParseFilterError::Month(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Quarter {
    Q1,
    Q2,
    Q3,
    Q4,
}

impl Quarter {
    pub const ALL: [Quarter; 4] = [Quarter::Q1, Quarter::Q2, Quarter::Q3, Quarter::Q4];

    pub fn as_str(&self) -> &'static str {
        match self {
            Quarter::Q1 => "Q1",
            Quarter::Q2 => "Q2",
            Quarter::Q3 => "Q3",
            Quarter::Q4 => "Q4",
        }
    }
}

impl fmt::Display for Quarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Quarter {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "Q1" | "1" => Ok(Quarter::Q1),
            "Q2" | "2" => Ok(Quarter::Q2),
            "Q3" | "3" => Ok(Quarter::Q3),
            "Q4" | "4" => Ok(Quarter::Q4),
            _ => Err(ParseFilterError::Quarter(s.to_string())),
        }
    }
}

/// The period sub-fields that are meaningful for the current period kind.
///
/// A [`FilterState`] may hold stale values (a quarter left over after
/// switching to monthly, say). This is the only view of period fields that
/// serialization reads, so stale values never leak into a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectivePeriod {
    Unset,
    Monthly {
        month: Option<Month>,
        year: Option<i32>,
    },
    Quarterly {
        quarter: Option<Quarter>,
        year: Option<i32>,
    },
    Yearly {
        year: Option<i32>,
    },
    SpecificDates {
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    },
}

impl EffectivePeriod {
    pub fn of(state: &FilterState) -> Self {
        match state.period_kind() {
            None => EffectivePeriod::Unset,
            Some(PeriodKind::Monthly) => EffectivePeriod::Monthly {
                month: state.month(),
                year: state.year(),
            },
            Some(PeriodKind::Quarterly) => EffectivePeriod::Quarterly {
                quarter: state.quarter(),
                year: state.year(),
            },
            Some(PeriodKind::Yearly) => EffectivePeriod::Yearly { year: state.year() },
            Some(PeriodKind::SpecificDates) => EffectivePeriod::SpecificDates {
                from: state.from_date(),
                to: state.to_date(),
            },
        }
    }

    pub fn kind(&self) -> Option<PeriodKind> {
        match self {
            EffectivePeriod::Unset => None,
            EffectivePeriod::Monthly { .. } => Some(PeriodKind::Monthly),
            EffectivePeriod::Quarterly { .. } => Some(PeriodKind::Quarterly),
            EffectivePeriod::Yearly { .. } => Some(PeriodKind::Yearly),
            EffectivePeriod::SpecificDates { .. } => Some(PeriodKind::SpecificDates),
        }
    }

    pub fn month(&self) -> Option<Month> {
        match self {
            EffectivePeriod::Monthly { month, .. } => *month,
            _ => None,
        }
    }

    pub fn quarter(&self) -> Option<Quarter> {
        match self {
            EffectivePeriod::Quarterly { quarter, .. } => *quarter,
            _ => None,
        }
    }

    pub fn year(&self) -> Option<i32> {
        match self {
            EffectivePeriod::Monthly { year, .. }
            | EffectivePeriod::Quarterly { year, .. }
            | EffectivePeriod::Yearly { year } => *year,
            _ => None,
        }
    }

    pub fn from_date(&self) -> Option<NaiveDate> {
        match self {
            EffectivePeriod::SpecificDates { from, .. } => *from,
            _ => None,
        }
    }

    pub fn to_date(&self) -> Option<NaiveDate> {
        match self {
            EffectivePeriod::SpecificDates { to, .. } => *to,
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter_state::FilterEdit;

    #[test]
    fn test_period_kind_wire_values() {
        let json = serde_json::to_string(&PeriodKind::ALL).unwrap();
        assert_eq!(json, r#"["monthly","quarterly","yearly","specificDates"]"#);
    }

    #[test]
    fn test_period_kind_parsing() {
        assert_eq!("specificDates".parse::<PeriodKind>(), Ok(PeriodKind::SpecificDates));
        assert_eq!("specific-dates".parse::<PeriodKind>(), Ok(PeriodKind::SpecificDates));
        assert_eq!("Monthly".parse::<PeriodKind>(), Ok(PeriodKind::Monthly));
        assert!("weekly".parse::<PeriodKind>().is_err());
    }

    #[test]
    fn test_month_parsing() {
        assert_eq!("March".parse::<Month>(), Ok(Month::March));
        assert_eq!("mar".parse::<Month>(), Ok(Month::March));
        assert_eq!("3".parse::<Month>(), Ok(Month::March));
        assert!("13".parse::<Month>().is_err());
        assert!("ma".parse::<Month>().is_err());
    }

    #[test]
    fn test_quarter_round_trips_through_text() {
        for quarter in Quarter::ALL {
            assert_eq!(quarter.as_str().parse::<Quarter>(), Ok(quarter));
        }
        assert_eq!(serde_json::to_string(&Quarter::Q3).unwrap(), r#""Q3""#);
    }

    #[test]
    fn test_effective_period_ignores_stale_fields() {
        let state = FilterState::default()
            .with(FilterEdit::SetQuarter(Some(Quarter::Q2)))
            .with(FilterEdit::SetMonth(Some(Month::May)))
            .with(FilterEdit::SetYear(Some(2024)))
            .with(FilterEdit::SetFromDate(NaiveDate::from_ymd_opt(2024, 1, 1)))
            .with(FilterEdit::SetPeriodKind(Some(PeriodKind::Monthly)));

        let period = EffectivePeriod::of(&state);
        assert_eq!(period.month(), Some(Month::May));
        assert_eq!(period.year(), Some(2024));
        assert_eq!(period.quarter(), None);
        assert_eq!(period.from_date(), None);
    }

    #[test]
    fn test_effective_period_dates_drop_year() {
        let state = FilterState::default()
            .with(FilterEdit::SetYear(Some(2023)))
            .with(FilterEdit::SetPeriodKind(Some(PeriodKind::SpecificDates)))
            .with(FilterEdit::SetToDate(NaiveDate::from_ymd_opt(2024, 1, 31)));

        let period = EffectivePeriod::of(&state);
        assert_eq!(period.year(), None);
        assert_eq!(period.from_date(), None);
        assert_eq!(period.to_date(), NaiveDate::from_ymd_opt(2024, 1, 31));
    }

    #[test]
    fn test_unset_period_has_no_fields() {
        let state = FilterState::default().with(FilterEdit::SetYear(Some(2025)));
        assert_eq!(EffectivePeriod::of(&state), EffectivePeriod::Unset);
        assert_eq!(EffectivePeriod::of(&state).year(), None);
    }
}
