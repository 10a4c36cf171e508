//! Chart configuration registry.
//!
//! Defines the two result charts: which series they plot, axis ranges,
//! labels and colours.

/// A quantity the simulation reports over time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesKind {
    Oxygen,
    CarbonDioxide,
    Ethylene,
}

/// One line on a chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeriesSpec {
    pub kind: SeriesKind,
    /// Legend text
    pub label: &'static str,
    /// CSS colour of the line
    pub color: &'static str,
}

/// Configuration for a result chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartSpec {
    /// Unique identifier, used for the canvas element id
    pub id: &'static str,
    pub series: &'static [SeriesSpec],
    pub x_label: &'static str,
    pub y_label: &'static str,
    /// Fixed y-axis range
    pub y_range: (f64, f64),
    /// Plot area background
    pub background: &'static str,
}

const TIME_AXIS_LABEL: &str = "Time, days";
const PLOT_BACKGROUND: &str = "#DFF6FF";

pub static GAS_CHART: ChartSpec = ChartSpec {
    id: "gas-chart",
    series: &[
        SeriesSpec {
            kind: SeriesKind::Oxygen,
            label: "Predicted O₂",
            color: "#1f77b4",
        },
        SeriesSpec {
            kind: SeriesKind::CarbonDioxide,
            label: "Predicted CO₂",
            color: "#ff7f0e",
        },
    ],
    x_label: TIME_AXIS_LABEL,
    y_label: "O₂ and CO₂, %",
    y_range: (0.0, 24.0),
    background: PLOT_BACKGROUND,
};

pub static ETHYLENE_CHART: ChartSpec = ChartSpec {
    id: "ethylene-chart",
    series: &[SeriesSpec {
        kind: SeriesKind::Ethylene,
        label: "Predicted C₂H₄",
        color: "#1f77b4",
    }],
    x_label: TIME_AXIS_LABEL,
    y_label: "C₂H₄, ppm",
    y_range: (0.0, 5.0),
    background: PLOT_BACKGROUND,
};

/// Result charts in page order.
pub static CHARTS: &[&ChartSpec] = &[&GAS_CHART, &ETHYLENE_CHART];

/// Samples kept per series for drawing.
pub const PLOT_MAX_POINTS: usize = 2000;

/// Canvas aspect ratio (height / width), matching a 6×4 inch figure.
pub const CHART_ASPECT: f64 = 4.0 / 6.0;
