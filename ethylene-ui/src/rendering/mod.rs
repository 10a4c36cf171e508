pub mod axes;
pub mod canvas_utils;
pub mod chart_renderer;
pub mod plot_data;

pub use axes::{format_tick, nice_ticks, ChartLayout, PlotRect};
pub use canvas_utils::{device_pixel_ratio, get_2d_context, performance_now, yield_to_browser};
pub use chart_renderer::draw_chart;
pub use plot_data::{PlotData, RunSummary};
