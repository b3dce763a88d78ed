//! Core types for the Generate Reports form.
//!
//! This crate provides:
//! - `filter_state`: the user's selections and the `FilterEdit` updates applied to them
//! - `visibility`: which form fields are shown for a given filter state
//! - `request`: serialization of a filter state into the report request payload
//! - `report_row`: display rows for generated reports, with employee name lookup
//! - `config`: endpoint, contract and category catalog configuration
//!
//! Nothing here performs I/O; the HTTP side lives in `rg-client`.

pub mod category;
pub mod config;
pub mod dates;
pub mod error;
pub mod filter_state;
pub mod model;
pub mod period;
pub mod report_row;
pub mod request;
pub mod visibility;

pub use category::{Category, CategoryOption};
pub use config::{ReportConfig, ReportContract};
pub use error::ParseFilterError;
pub use filter_state::{EmployeeScope, FilterEdit, FilterState};
pub use model::{Employee, EmployeeId, Report};
pub use period::{EffectivePeriod, Month, PeriodKind, Quarter};
pub use report_row::{ReportRow, UNKNOWN_EMPLOYEE};
pub use request::ReportRequest;
pub use visibility::{resolve_visibility, FormField, VisibleFieldSet};
