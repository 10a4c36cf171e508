//! Chart geometry: plot area, data-to-pixel mapping, tick placement.

/// Space reserved around the plot area for ticks and labels, in CSS pixels.
const MARGIN_LEFT: f64 = 56.0;
const MARGIN_RIGHT: f64 = 16.0;
const MARGIN_TOP: f64 = 16.0;
const MARGIN_BOTTOM: f64 = 44.0;

/// Maps data coordinates onto a canvas of a given size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
}

/// Plot area inside the margins.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotRect {
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

impl ChartLayout {
    pub fn new(width: f64, height: f64, x_range: (f64, f64), y_range: (f64, f64)) -> Self {
        Self {
            width,
            height,
            x_range,
            y_range,
        }
    }

    pub fn plot_rect(&self) -> PlotRect {
        PlotRect {
            left: MARGIN_LEFT,
            top: MARGIN_TOP,
            width: (self.width - MARGIN_LEFT - MARGIN_RIGHT).max(1.0),
            height: (self.height - MARGIN_TOP - MARGIN_BOTTOM).max(1.0),
        }
    }

    pub fn x_to_px(&self, x: f64) -> f64 {
        let rect = self.plot_rect();
        let (min, max) = self.x_range;
        let span = if max > min { max - min } else { 1.0 };
        rect.left + (x - min) / span * rect.width
    }

    pub fn y_to_px(&self, y: f64) -> f64 {
        let rect = self.plot_rect();
        let (min, max) = self.y_range;
        let span = if max > min { max - min } else { 1.0 };
        rect.bottom() - (y - min) / span * rect.height
    }
}

/// Round tick positions covering `[min, max]`, about `target` of them.
///
/// Steps are 1, 2, 2.5 or 5 times a power of ten.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    if !(max > min) || target == 0 || !min.is_finite() || !max.is_finite() {
        return vec![min];
    }

    let raw_step = (max - min) / target as f64;
    let magnitude = 10f64.powf(raw_step.log10().floor());
    let step = [1.0, 2.0, 2.5, 5.0, 10.0]
        .iter()
        .map(|m| m * magnitude)
        .find(|&s| s >= raw_step * (1.0 - 1e-9))
        .unwrap_or(10.0 * magnitude);

    let first = (min / step).ceil() as i64;
    let last = (max / step + 1e-9).floor() as i64;
    (first..=last).map(|k| k as f64 * step).collect()
}

/// Tick label with only as many decimals as the step needs.
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = (0..6)
        .find(|&d| {
            let scaled = step * 10f64.powi(d as i32);
            (scaled - scaled.round()).abs() < 1e-9
        })
        .unwrap_or(6);
    format!("{:.*}", decimals, value)
}
