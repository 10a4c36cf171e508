pub mod error_list;
pub mod line_chart;
pub mod param_form;
pub mod run_summary;
pub mod site_header;

pub use error_list::ErrorList;
pub use line_chart::LineChart;
pub use param_form::ParamForm;
pub use run_summary::RunSummaryPanel;
pub use site_header::SiteHeader;
