//! `generate` subcommand: build a filter from flags, request the report and
//! print the rows the web form would show.

use anyhow::Context;
use chrono::NaiveDate;
use clap::Args;
use log::{info, warn};
use rg_client::session::NO_REPORTS_MESSAGE;
use rg_client::{HttpReportClient, LoadStatus, ReportBody, ReportSession};
use rg_filter::{
    Category, EmployeeId, EmployeeScope, FilterEdit, FilterState, Month, PeriodKind, Quarter,
    ReportConfig, ReportRow,
};

#[derive(Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Category value to include (repeatable)
    #[arg(long = "category")]
    pub categories: Vec<String>,

    /// monthly, quarterly, yearly or specific-dates
    #[arg(short, long)]
    pub period: Option<PeriodKind>,

    /// Month name, abbreviation or number
    #[arg(short, long)]
    pub month: Option<Month>,

    /// Q1 to Q4
    #[arg(short, long)]
    pub quarter: Option<Quarter>,

    #[arg(short, long)]
    pub year: Option<i32>,

    /// Start date (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<NaiveDate>,

    /// End date (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<NaiveDate>,

    /// all, individual or team
    #[arg(short, long, default_value_t = EmployeeScope::All)]
    pub scope: EmployeeScope,

    /// Employee id for the individual scope
    #[arg(short, long)]
    pub employee: Option<EmployeeId>,

    /// Employee id for the team scope (repeatable)
    #[arg(short, long = "team")]
    pub team: Vec<EmployeeId>,
}

impl GenerateArgs {
    /// The filter state a user would reach by making the same selections in the form.
    pub fn to_filter(&self) -> FilterState {
        let categories = self.categories.iter().map(Category::new).collect();
        FilterState::default()
            .with(FilterEdit::SetCategories(categories))
            .with(FilterEdit::SetPeriodKind(self.period))
            .with(FilterEdit::SetMonth(self.month))
            .with(FilterEdit::SetQuarter(self.quarter))
            .with(FilterEdit::SetYear(self.year))
            .with(FilterEdit::SetFromDate(self.from))
            .with(FilterEdit::SetToDate(self.to))
            .with(FilterEdit::SetEmployeeScope(self.scope))
            .with(FilterEdit::SelectEmployee(self.employee.clone()))
            .with(FilterEdit::SetTeamMembers(self.team.clone()))
    }
}

pub async fn run_generate(
    config: &ReportConfig,
    args: &GenerateArgs,
    csv_path: Option<&str>,
) -> anyhow::Result<()> {
    let client = HttpReportClient::from_config(config);
    let mut session = ReportSession::new(&config.unknown_employee_label);

    session.load_employees(&client).await;
    if let LoadStatus::Failed(e) = session.employee_status() {
        warn!("Continuing without employee directory: {}", e);
    }

    let filter = args.to_filter();
    info!("Requesting report ({:?} contract)", client.contract());
    let count = session
        .generate(&client, &filter)
        .await
        .context("report generation failed")?;
    info!("{} reports generated", count);

    print!("{}", render_body(&session.view().body));

    if let Some(path) = csv_path {
        let rows = session.rows();
        write_csv(path, &rows)?;
        info!("Wrote {} rows to {}", rows.len(), path);
    }
    Ok(())
}

/// Plain-text rendering of the report area.
pub fn render_body(body: &ReportBody) -> String {
    match body {
        ReportBody::Pending => String::new(),
        ReportBody::Empty => format!("{}\n", NO_REPORTS_MESSAGE),
        ReportBody::Table(rows) => render_table(rows),
    }
}

fn render_table(rows: &[ReportRow]) -> String {
    let show_category = rows.iter().any(|row| row.category.is_some());
    let mut header = vec!["Title", "Employee Name", "Created Date"];
    if show_category {
        header.push("Category");
    }

    let cells: Vec<Vec<&str>> = rows
        .iter()
        .map(|row| {
            let mut line = vec![
                row.title.as_str(),
                row.employee_name.as_str(),
                row.created_date.as_str(),
            ];
            if show_category {
                line.push(row.category.as_deref().unwrap_or(""));
            }
            line
        })
        .collect();

    let widths: Vec<usize> = (0..header.len())
        .map(|col| {
            cells
                .iter()
                .map(|line| line[col].chars().count())
                .chain(std::iter::once(header[col].len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let format_line = |line: &[&str]| -> String {
        let padded: Vec<String> = line
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect();
        format!("{}\n", padded.join("  ").trim_end())
    };

    let mut out = format_line(&header);
    let rule: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
    out.push_str(&format!("{}\n", rule.join("  ")));
    for line in &cells {
        out.push_str(&format_line(line));
    }
    out
}

fn write_csv(path: &str, rows: &[ReportRow]) -> anyhow::Result<()> {
    let mut writer =
        csv::Writer::from_path(path).with_context(|| format!("failed to create {}", path))?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
