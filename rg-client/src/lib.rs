//! HTTP side of the Generate Reports form.
//!
//! - `api`: the [`ReportApi`] seam and its reqwest implementation
//! - `session`: [`ReportSession`], which owns the employee snapshot, the
//!   report list and the loading flag across requests
//!
//! reqwest compiles for both native targets and `wasm32-unknown-unknown`, so
//! the same client serves the CLI and the web form.

pub mod api;
pub mod error;
pub mod session;

pub use api::{HttpReportClient, ReportApi};
pub use error::FetchError;
pub use session::{LoadStatus, ReportBody, ReportListView, ReportSession, RequestTicket};
