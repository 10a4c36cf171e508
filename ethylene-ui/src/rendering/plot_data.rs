use ethylene_compute::{decimate, SimulationResult};

use crate::config::SeriesKind;

/// Decimated copy of a simulation result, small enough to keep around and
/// redraw on every resize.
#[derive(Clone, Debug, PartialEq)]
pub struct PlotData {
    pub time_days: Vec<f64>,
    pub o2_pct: Vec<f64>,
    pub co2_pct: Vec<f64>,
    pub ethylene_ppm: Vec<f64>,
    pub x_limit_days: f64,
}

impl PlotData {
    pub fn from_result(result: &SimulationResult, max_points: usize) -> Self {
        let indices = decimate(result.len(), max_points);
        let pick = |series: &[f64]| indices.iter().map(|&i| series[i]).collect::<Vec<_>>();

        Self {
            time_days: pick(&result.time_days),
            o2_pct: pick(&result.o2_pct),
            co2_pct: pick(&result.co2_pct),
            ethylene_ppm: pick(&result.ethylene_ppm),
            x_limit_days: result.x_limit_days,
        }
    }

    pub fn series(&self, kind: SeriesKind) -> &[f64] {
        match kind {
            SeriesKind::Oxygen => &self.o2_pct,
            SeriesKind::CarbonDioxide => &self.co2_pct,
            SeriesKind::Ethylene => &self.ethylene_ppm,
        }
    }

    /// Points of one series as (days, value) pairs.
    pub fn points(&self, kind: SeriesKind) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.time_days
            .iter()
            .copied()
            .zip(self.series(kind).iter().copied())
    }
}

/// Headline numbers shown next to the charts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RunSummary {
    pub final_o2_pct: f64,
    pub final_co2_pct: f64,
    pub final_ethylene_ppm: f64,
    pub peak_ethylene_ppm: f64,
    pub has_scavenger: bool,
    pub scavenger_capacity_ppm: f64,
    pub remaining_scavenger_capacity_ppm: f64,
    pub scavenger_exhausted_day: Option<f64>,
}

impl RunSummary {
    pub fn from_result(result: &SimulationResult) -> Self {
        Self {
            final_o2_pct: result.final_o2_pct().unwrap_or_default(),
            final_co2_pct: result.final_co2_pct().unwrap_or_default(),
            final_ethylene_ppm: result.final_ethylene_ppm().unwrap_or_default(),
            peak_ethylene_ppm: result.peak_ethylene_ppm(),
            has_scavenger: result.scavenger_capacity_ppm > 0.0,
            scavenger_capacity_ppm: result.scavenger_capacity_ppm,
            remaining_scavenger_capacity_ppm: result.remaining_scavenger_capacity_ppm,
            scavenger_exhausted_day: result.scavenger_exhausted_day,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(len: usize) -> SimulationResult {
        SimulationResult {
            time_days: (0..len).map(|i| i as f64).collect(),
            o2_pct: vec![20.9; len],
            co2_pct: (0..len).map(|i| i as f64 * 0.1).collect(),
            ethylene_ppm: (0..len).map(|i| i as f64 * 0.01).collect(),
            x_limit_days: len as f64,
            scavenger_exhausted_day: Some(3.0),
            remaining_scavenger_capacity_ppm: 0.0,
            scavenger_capacity_ppm: 1.5,
        }
    }

    #[test]
    fn decimation_keeps_series_aligned() {
        let plot = PlotData::from_result(&result(10_001), 101);
        assert_eq!(plot.time_days.len(), 101);
        assert_eq!(plot.co2_pct.len(), 101);
        assert_eq!(plot.time_days[100], 10_000.0);
        for (t, co2) in plot.points(SeriesKind::CarbonDioxide) {
            assert!((co2 - t * 0.1).abs() < 1e-9);
        }
    }

    #[test]
    fn summary_reads_final_values() {
        let summary = RunSummary::from_result(&result(11));
        assert!((summary.final_ethylene_ppm - 0.1).abs() < 1e-12);
        assert!((summary.peak_ethylene_ppm - 0.1).abs() < 1e-12);
        assert!(summary.has_scavenger);
        assert_eq!(summary.scavenger_exhausted_day, Some(3.0));
    }
}
