//! Errors raised when parsing filter values from text (CLI flags, form values).

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseFilterError {
    #[error("unknown period '{0}' (expected monthly, quarterly, yearly or specificDates)")]
    Period(String),
    #[error("unknown month '{0}'")]
    Month(String),
    #[error("unknown quarter '{0}' (expected Q1, Q2, Q3 or Q4)")]
    Quarter(String),
    #[error("unknown employee scope '{0}' (expected all, individual or team)")]
    Scope(String),
    #[error("unknown report contract '{0}' (expected get or post)")]
    Contract(String),
}
