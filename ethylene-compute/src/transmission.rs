use ethylene_core::{PackageParams, MODEL};
use std::f64::consts::FRAC_PI_4;

/// Gas exchange through all perforations of the film, mL/h per unit
/// concentration difference.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PerforationTransmission {
    pub ethylene: f64,
    pub oxygen: f64,
    pub carbon_dioxide: f64,
}

impl PerforationTransmission {
    /// Sealed package: no exchange with the outside air.
    pub const SEALED: Self = Self {
        ethylene: 0.0,
        oxygen: 0.0,
        carbon_dioxide: 0.0,
    };

    pub fn for_package(params: &PackageParams) -> Self {
        let diameter = params.perforation_diameter_cm();
        if diameter <= 0.0 {
            return Self::SEALED;
        }

        let t = params.temperature_k();
        let velocity = MODEL.air_velocity;
        let area_per_hour = FRAC_PI_4 * diameter.powi(2) * 3600.0;

        let ethylene_per_hole = (0.04 * velocity
            + (2.4382e-6 * t.powf(1.81))
                / (velocity.powf(0.05) * MODEL.film_thickness.powf(0.25) * diameter.powf(0.8)))
            * area_per_hour;
        let oxygen_per_hole = (t.powf(1.724) * 1.00909e-5 / diameter) * area_per_hour;

        let oxygen = params.perforation_count * oxygen_per_hole;
        Self {
            ethylene: params.perforation_count * ethylene_per_hole,
            oxygen,
            carbon_dioxide: MODEL.co2_to_o2_transmission * oxygen,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn package(diameter_um: f64, count: f64) -> PackageParams {
        PackageParams {
            fruit_mass_kg: 1.0,
            storage_temperature_c: 20.0,
            perforation_diameter_um: diameter_um,
            perforation_count: count,
            scavenger_mass_g: 0.0,
            package_volume_l: 2.0,
            test_days: 1.0,
        }
    }

    #[test]
    fn no_holes_means_sealed() {
        assert_eq!(
            PerforationTransmission::for_package(&package(0.0, 50.0)),
            PerforationTransmission::SEALED
        );
    }

    #[test]
    fn zero_count_transmits_nothing() {
        let tr = PerforationTransmission::for_package(&package(500.0, 0.0));
        assert_eq!(tr.oxygen, 0.0);
        assert_eq!(tr.ethylene, 0.0);
    }

    #[test]
    fn co2_is_three_times_o2() {
        let tr = PerforationTransmission::for_package(&package(500.0, 50.0));
        assert!(tr.oxygen > 0.0);
        assert!((tr.carbon_dioxide - 3.0 * tr.oxygen).abs() < 1e-9 * tr.oxygen);
    }

    #[test]
    fn oxygen_exchange_for_500_micron_holes() {
        // One 500 µm hole at 20 °C passes roughly 25.5 mL/h.
        let tr = PerforationTransmission::for_package(&package(500.0, 1.0));
        assert!((tr.oxygen - 25.5).abs() < 0.5, "{}", tr.oxygen);
    }

    #[test]
    fn transmission_scales_with_count() {
        let one = PerforationTransmission::for_package(&package(300.0, 1.0));
        let ten = PerforationTransmission::for_package(&package(300.0, 10.0));
        assert!((ten.oxygen - 10.0 * one.oxygen).abs() < 1e-9);
        assert!((ten.ethylene - 10.0 * one.ethylene).abs() < 1e-9);
    }
}
