//! Calls to the employee directory and the report generation service.

use crate::error::FetchError;
use reqwest::{Client, Response};
use rg_filter::config::{ReportConfig, ReportContract};
use rg_filter::{Employee, Report, ReportRequest};
use serde::de::DeserializeOwned;

const EMPLOYEE_PATH: &str = "/api/Employee";
const GENERATE_REPORT_PATH: &str = "/api/Reports/generateReport";

/// The two backend operations the form depends on.
///
/// Implemented over HTTP by [`HttpReportClient`]; tests substitute fakes.
#[allow(async_fn_in_trait)]
pub trait ReportApi {
    /// `GET /api/Employee`
    async fn list_employees(&self) -> Result<Vec<Employee>, FetchError>;

    /// Generate a report for `request`, returning the backend's rows verbatim.
    async fn generate_report(&self, request: &ReportRequest) -> Result<Vec<Report>, FetchError>;
}

/// reqwest-backed [`ReportApi`].
///
/// No timeout or retry is applied; a request settles when the backend (or
/// the network stack) says so.
#[derive(Debug, Clone)]
pub struct HttpReportClient {
    client: Client,
    employee_api_base: String,
    report_api_base: String,
    contract: ReportContract,
}

impl HttpReportClient {
    pub fn new(employee_api_base: &str, report_api_base: &str, contract: ReportContract) -> Self {
        Self {
            client: Client::new(),
            employee_api_base: employee_api_base.trim_end_matches('/').to_string(),
            report_api_base: report_api_base.trim_end_matches('/').to_string(),
            contract,
        }
    }

    pub fn from_config(config: &ReportConfig) -> Self {
        Self::new(
            &config.employee_api_base,
            &config.report_api_base,
            config.contract,
        )
    }

    pub fn contract(&self) -> ReportContract {
        self.contract
    }

    fn employee_url(&self) -> String {
        format!("{}{}", self.employee_api_base, EMPLOYEE_PATH)
    }

    fn report_url(&self) -> String {
        format!("{}{}", self.report_api_base, GENERATE_REPORT_PATH)
    }
}

/// Reject non-success statuses, then decode the JSON body.
async fn decode_json<T: DeserializeOwned>(response: Response, url: &str) -> Result<T, FetchError> {
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }
    Ok(response.json::<T>().await?)
}

impl ReportApi for HttpReportClient {
    async fn list_employees(&self) -> Result<Vec<Employee>, FetchError> {
        let url = self.employee_url();
        let response = self.client.get(&url).send().await?;
        let employees: Vec<Employee> = decode_json(response, &url).await?;
        log::info!("Loaded {} employees from {}", employees.len(), url);
        Ok(employees)
    }

    async fn generate_report(&self, request: &ReportRequest) -> Result<Vec<Report>, FetchError> {
        let url = self.report_url();
        let builder = match self.contract {
            ReportContract::GetQuery => {
                if request.has_empty_selection() {
                    log::warn!(
                        "No employees selected for scope '{}'; the query-string service will report on all employees",
                        request.employee_selection
                    );
                }
                self.client.get(&url).query(&request.query_params())
            }
            ReportContract::PostJson => self.client.post(&url).json(request),
        };
        let response = builder.send().await?;
        let reports: Vec<Report> = decode_json(response, &url).await?;
        log::info!("Report generation returned {} rows", reports.len());
        Ok(reports)
    }
}
