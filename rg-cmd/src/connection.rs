//! Where the services live and how to talk to them.

use clap::Args;
use rg_filter::{ReportConfig, ReportContract};

#[derive(Args, Debug, Clone, Default)]
pub struct ConnectionArgs {
    /// JSON configuration file (same format as the web app's report-config.json)
    #[arg(short = 'c', long)]
    pub config: Option<String>,

    /// Override the employee service base URL
    #[arg(long)]
    pub employee_api: Option<String>,

    /// Override the report service base URL
    #[arg(long)]
    pub report_api: Option<String>,

    /// Override the request contract (get-query or post-json)
    #[arg(long)]
    pub contract: Option<ReportContract>,
}

impl ConnectionArgs {
    /// Load the config file, if any, then apply the flag overrides.
    pub fn resolve(&self) -> anyhow::Result<ReportConfig> {
        let mut config = match &self.config {
            Some(path) => ReportConfig::from_path(path)?,
            None => ReportConfig::default(),
        };
        if let Some(base) = &self.employee_api {
            config.employee_api_base = base.clone();
        }
        if let Some(base) = &self.report_api {
            config.report_api_base = base.clone();
        }
        if let Some(contract) = self.contract {
            config.contract = contract;
        }
        Ok(config)
    }
}
