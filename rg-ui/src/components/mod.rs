//! Reusable Dioxus RSX components for the Generate Reports form.

mod category_selector;
mod date_range_picker;
mod employee_picker;
mod employee_scope_selector;
mod error_display;
mod form_header;
mod generate_button;
mod loading_spinner;
mod month_selector;
mod period_selector;
mod quarter_selector;
mod report_list;
mod report_table;
mod team_picker;
mod year_selector;

pub use category_selector::CategorySelector;
pub use date_range_picker::DateRangePicker;
pub use employee_picker::EmployeePicker;
pub use employee_scope_selector::EmployeeScopeSelector;
pub use error_display::ErrorDisplay;
pub use form_header::FormHeader;
pub use generate_button::GenerateButton;
pub use loading_spinner::LoadingSpinner;
pub use month_selector::MonthSelector;
pub use period_selector::PeriodSelector;
pub use quarter_selector::QuarterSelector;
pub use report_list::ReportList;
pub use report_table::ReportTable;
pub use team_picker::TeamPicker;
pub use year_selector::YearSelector;
