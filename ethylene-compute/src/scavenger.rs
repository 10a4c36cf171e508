//! Ethylene removal by a finite-capacity scavenger sachet.
//!
//! The sachet removes free ethylene with first-order kinetics until the
//! cumulative amount removed reaches its capacity. From then on everything
//! the fruit produces stays in the headspace.

/// A scavenger sachet in the package.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scavenger {
    /// First-order uptake rate, h⁻¹
    pub uptake_per_h: f64,
    /// Total ethylene it can hold, headspace ppm
    pub capacity_ppm: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScavengerOutcome {
    /// Headspace ethylene after removal, ppm (never negative)
    pub ethylene_ppm: Vec<f64>,
    pub remaining_capacity_ppm: f64,
    /// First sample at which the removed amount exceeded capacity
    pub exhausted_at: Option<usize>,
}

/// Apply scavenger removal to the ethylene series of an unscavenged package.
///
/// `ethylene` holds one sample per `time_step_h`. Without a scavenger the
/// series passes through unchanged (apart from clamping at zero).
pub fn apply_scavenger(
    ethylene: &[f64],
    scavenger: Option<Scavenger>,
    time_step_h: f64,
) -> ScavengerOutcome {
    let Some(scavenger) = scavenger else {
        return ScavengerOutcome {
            ethylene_ppm: clamp_non_negative(ethylene.to_vec()),
            remaining_capacity_ppm: 0.0,
            exhausted_at: None,
        };
    };

    let Some(last) = ethylene.len().checked_sub(1) else {
        return ScavengerOutcome {
            ethylene_ppm: Vec::new(),
            remaining_capacity_ppm: scavenger.capacity_ppm,
            exhausted_at: None,
        };
    };

    // Free ethylene: each step's new production joins what was left over,
    // then decays by the uptake factor.
    let retention = (-scavenger.uptake_per_h * time_step_h).exp();
    let mut free = vec![0.0_f64; ethylene.len()];
    for i in 1..ethylene.len() {
        free[i] = (ethylene[i] - (ethylene[i - 1] - free[i - 1])) * retention;
    }

    let capacity = scavenger.capacity_ppm;
    let removed_total = ethylene[last] - free[last];

    if removed_total <= capacity {
        return ScavengerOutcome {
            ethylene_ppm: clamp_non_negative(free),
            remaining_capacity_ppm: capacity - removed_total,
            exhausted_at: None,
        };
    }

    let exhausted_at = (0..ethylene.len())
        .find(|&i| ethylene[i] - free[i] > capacity)
        .unwrap_or(last);

    // Once saturated, the level continues from the last scavenged value and
    // follows everything removed beyond capacity.
    let base = exhausted_at.checked_sub(1).map_or(0.0, |k| free[k]);
    let mut result = free;
    for j in exhausted_at..ethylene.len() {
        let removed = ethylene[j] - result[j];
        result[j] = base + removed - capacity;
    }

    ScavengerOutcome {
        ethylene_ppm: clamp_non_negative(result),
        remaining_capacity_ppm: 0.0,
        exhausted_at: Some(exhausted_at),
    }
}

fn clamp_non_negative(mut values: Vec<f64>) -> Vec<f64> {
    for v in values.iter_mut() {
        if *v < 0.0 {
            *v = 0.0;
        }
    }
    values
}
