//! `employees` and `categories` subcommands.

use anyhow::Context;
use log::info;
use rg_client::{HttpReportClient, ReportApi};
use rg_filter::ReportConfig;

pub async fn run_employees(config: &ReportConfig) -> anyhow::Result<()> {
    let client = HttpReportClient::from_config(config);
    let employees = client
        .list_employees()
        .await
        .context("failed to load employees")?;
    info!("{} employees", employees.len());
    for employee in employees {
        println!("{}\t{}", employee.id, employee.name);
    }
    Ok(())
}

pub fn print_categories(config: &ReportConfig) {
    print!("{}", format_categories(config));
}

fn format_categories(config: &ReportConfig) -> String {
    config
        .category_catalog()
        .iter()
        .map(|option| format!("{}\t{}\n", option.value, option.label))
        .collect()
}
