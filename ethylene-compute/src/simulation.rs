//! Headspace gas simulation for a perforated avocado package.
//!
//! Explicit Euler integration of three coupled balances, one step per
//! second of storage:
//! - O₂: consumed by respiration, replenished through perforations
//! - CO₂: produced at the respiratory quotient, vented through perforations
//! - C₂H₄: produced by the fruit, vented through perforations
//!
//! Scavenger removal is applied afterwards to the ethylene series.

use ethylene_core::{PackageParams, ValidationErrors, MODEL};
use serde::{Deserialize, Serialize};

use crate::kinetics::{scavenger_capacity_ppm, RateConstants};
use crate::scavenger::{apply_scavenger, Scavenger};
use crate::transmission::PerforationTransmission;

/// Headspace composition at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeadspaceState {
    /// O₂ volume fraction
    pub o2: f64,
    /// CO₂ volume fraction
    pub co2: f64,
    /// C₂H₄ concentration, ppm
    pub c2h4: f64,
}

impl HeadspaceState {
    /// Freshly sealed package: ambient air, no CO₂ or ethylene.
    pub fn at_packing() -> Self {
        Self {
            o2: MODEL.initial_o2_fraction,
            co2: 0.0,
            c2h4: 0.0,
        }
    }
}

/// Everything needed to advance the headspace by one step.
#[derive(Clone, Copy, Debug)]
pub struct PackageModel {
    pub rates: RateConstants,
    pub transmission: PerforationTransmission,
    pub fruit_mass_kg: f64,
    pub headspace_ml: f64,
    pub step_h: f64,
    /// Outside composition the perforations equilibrate against
    pub ambient: HeadspaceState,
}

impl PackageModel {
    pub fn new(params: &PackageParams) -> Self {
        Self {
            rates: RateConstants::at(params.temperature_k()),
            transmission: PerforationTransmission::for_package(params),
            fruit_mass_kg: params.fruit_mass_kg,
            headspace_ml: params.headspace_ml(),
            step_h: MODEL.time_step_h,
            ambient: HeadspaceState::at_packing(),
        }
    }

    /// One Euler step. Concentrations are clamped at zero.
    pub fn advance(&self, s: HeadspaceState) -> HeadspaceState {
        let dt = self.step_h;
        let v = self.headspace_ml;
        let tr = &self.transmission;

        let o2_consumed = self.rates.respiration_rate(s.o2) * self.fruit_mass_kg * dt / v;
        let o2_in = tr.oxygen * dt * (self.ambient.o2 - s.o2) / v;
        let co2_in = tr.carbon_dioxide * dt * (self.ambient.co2 - s.co2) / v;

        let c2h4_produced =
            self.rates.ethylene_rate(s.o2) * self.fruit_mass_kg * dt / (v / 1000.0);
        let c2h4_in = tr.ethylene * dt * (self.ambient.c2h4 - s.c2h4) / v;

        HeadspaceState {
            o2: (s.o2 - o2_consumed + o2_in).max(0.0),
            co2: (s.co2 + o2_consumed * MODEL.respiratory_quotient + co2_in).max(0.0),
            c2h4: (s.c2h4 + c2h4_produced + c2h4_in).max(0.0),
        }
    }
}

/// Output of one simulation run. Every series has one sample per step.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub time_days: Vec<f64>,
    pub o2_pct: Vec<f64>,
    pub co2_pct: Vec<f64>,
    /// Ethylene after scavenger removal
    pub ethylene_ppm: Vec<f64>,
    /// Chart x-axis extent
    pub x_limit_days: f64,
    /// When the scavenger ran out of capacity, if it did
    pub scavenger_exhausted_day: Option<f64>,
    pub remaining_scavenger_capacity_ppm: f64,
    pub scavenger_capacity_ppm: f64,
}

impl SimulationResult {
    pub fn len(&self) -> usize {
        self.time_days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time_days.is_empty()
    }

    pub fn final_o2_pct(&self) -> Option<f64> {
        self.o2_pct.last().copied()
    }

    pub fn final_co2_pct(&self) -> Option<f64> {
        self.co2_pct.last().copied()
    }

    pub fn final_ethylene_ppm(&self) -> Option<f64> {
        self.ethylene_ppm.last().copied()
    }

    pub fn peak_ethylene_ppm(&self) -> f64 {
        self.ethylene_ppm.iter().copied().fold(0.0, f64::max)
    }
}

/// Number of integration steps for `days` of storage.
pub fn step_count(days: f64, step_h: f64) -> usize {
    (days * 24.0 / step_h) as usize
}

/// Validate `params` and run the package simulation.
pub fn simulate(params: &PackageParams) -> Result<SimulationResult, ValidationErrors> {
    let params = params.validated()?;
    let model = PackageModel::new(&params);
    let steps = step_count(params.test_days, model.step_h);

    let mut o2 = Vec::with_capacity(steps + 1);
    let mut co2 = Vec::with_capacity(steps + 1);
    let mut c2h4 = Vec::with_capacity(steps + 1);

    let mut state = HeadspaceState::at_packing();
    for _ in 0..steps {
        o2.push(state.o2);
        co2.push(state.co2);
        c2h4.push(state.c2h4);
        state = model.advance(state);
    }
    o2.push(state.o2);
    co2.push(state.co2);
    c2h4.push(state.c2h4);

    // Sample i is reported at the end of step i.
    let time_days: Vec<f64> = (1..=steps + 1)
        .map(|i| i as f64 * model.step_h / 24.0)
        .collect();

    let capacity_ppm = scavenger_capacity_ppm(&params);
    let scavenger = params.has_scavenger().then_some(Scavenger {
        uptake_per_h: model.rates.scavenger_uptake,
        capacity_ppm,
    });
    let outcome = apply_scavenger(&c2h4, scavenger, model.step_h);

    Ok(SimulationResult {
        scavenger_exhausted_day: outcome.exhausted_at.map(|k| time_days[k]),
        time_days,
        o2_pct: o2.into_iter().map(|y| y * 100.0).collect(),
        co2_pct: co2.into_iter().map(|y| y * 100.0).collect(),
        ethylene_ppm: outcome.ethylene_ppm,
        x_limit_days: params.test_days,
        remaining_scavenger_capacity_ppm: outcome.remaining_capacity_ppm,
        scavenger_capacity_ppm: capacity_ppm,
    })
}
