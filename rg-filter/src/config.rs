//! Form configuration: service endpoints, request contract and the choices
//! offered by the selectors.
//!
//! Configuration is JSON with camelCase keys; every key is optional.
//!
//! ```rust
//! use rg_filter::config::{ReportConfig, ReportContract};
//!
//! let config = ReportConfig::from_json_str(r#"{"contract": "getQuery", "years": [2024]}"#).unwrap();
//! assert_eq!(config.contract, ReportContract::GetQuery);
//! assert_eq!(config.years, vec![2024]);
//! assert_eq!(config.unknown_employee_label, "Unknown");
//! ```

use crate::category::{default_catalog, legacy_catalog, CategoryOption};
use crate::error::ParseFilterError;
use crate::report_row::UNKNOWN_EMPLOYEE;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

const DEFAULT_EMPLOYEE_API_BASE: &str = "https://localhost:7169";
const DEFAULT_REPORT_API_BASE: &str = "https://localhost:7138";

/// How the report generation request travels to the backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReportContract {
    /// `GET /api/Reports/generateReport?category=...`
    GetQuery,
    /// `POST /api/Reports/generateReport` with a JSON body.
    #[default]
    PostJson,
}

impl FromStr for ReportContract {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', '_'], "").as_str() {
            "get" | "getquery" | "query" => Ok(ReportContract::GetQuery),
            "post" | "postjson" | "json" => Ok(ReportContract::PostJson),
            _ => Err(ParseFilterError::Contract(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReportConfig {
    /// Base URL of the employee directory service.
    pub employee_api_base: String,
    /// Base URL of the report generation service.
    pub report_api_base: String,
    pub contract: ReportContract,
    /// Categories offered by the category selector. Empty means the
    /// catalog of the configured contract, see [`ReportConfig::category_catalog`].
    pub categories: Vec<CategoryOption>,
    /// Years offered by the year selector.
    pub years: Vec<i32>,
    pub unknown_employee_label: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            employee_api_base: DEFAULT_EMPLOYEE_API_BASE.to_string(),
            report_api_base: DEFAULT_REPORT_API_BASE.to_string(),
            contract: ReportContract::default(),
            categories: Vec::new(),
            years: vec![2023, 2024, 2025],
            unknown_employee_label: UNKNOWN_EMPLOYEE.to_string(),
        }
    }
}

impl ReportConfig {
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("invalid report configuration")
    }

    pub fn from_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_json_str(&json)
    }

    /// Categories to offer: the configured list, or else the catalog of the
    /// service behind `contract`.
    pub fn category_catalog(&self) -> Vec<CategoryOption> {
        if !self.categories.is_empty() {
            return self.categories.clone();
        }
        match self.contract {
            ReportContract::GetQuery => legacy_catalog(),
            ReportContract::PostJson => default_catalog(),
        }
    }

    /// Parse embedded configuration, falling back to defaults if it is broken.
    pub fn from_embedded(json: &str) -> Self {
        match Self::from_json_str(json) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Using default report configuration: {:#}", e);
                Self::default()
            }
        }
    }
}
