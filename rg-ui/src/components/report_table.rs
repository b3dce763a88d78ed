//! Table of generated reports.

use dioxus::prelude::*;
use rg_filter::ReportRow;

const CELL_STYLE: &str = "padding: 10px; border-top: 1px solid #dee2e6;";
const HEADER_STYLE: &str = "padding: 12px; text-align: left; font-weight: 600;";

/// Rows arrive with employee names already resolved; the Category column is
/// only shown when the backend sent categories.
#[component]
pub fn ReportTable(rows: Vec<ReportRow>) -> Element {
    let show_category = rows.iter().any(|row| row.category.is_some());

    rsx! {
        div {
            style: "overflow-x: auto; margin-top: 16px;",
            table {
                style: "width: 100%; border-collapse: collapse; background: white; box-shadow: 0 2px 4px rgba(0,0,0,0.1);",
                thead {
                    tr {
                        style: "background: #1976D2; color: white;",
                        th { style: HEADER_STYLE, "Title" }
                        th { style: HEADER_STYLE, "Employee Name" }
                        th { style: HEADER_STYLE, "Created Date" }
                        if show_category {
                            th { style: HEADER_STYLE, "Category" }
                        }
                    }
                }
                tbody {
                    for (idx, row) in rows.into_iter().enumerate() {
                        tr {
                            key: "{idx}",
                            style: if idx % 2 == 0 { "background: #f8f9fa;" } else { "background: white;" },
                            td { style: CELL_STYLE, "{row.title}" }
                            td { style: CELL_STYLE, "{row.employee_name}" }
                            td { style: CELL_STYLE, "{row.created_date}" }
                            if show_category {
                                td { style: CELL_STYLE, {row.category.unwrap_or_default()} }
                            }
                        }
                    }
                }
            }
        }
    }
}
