use ethylene_core::{ModelConstants, PackageParams, MODEL};

/// Temperature-dependent rate constants for one storage temperature.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RateConstants {
    /// O₂ consumption, mL kg⁻¹ h⁻¹
    pub o2_consumption: f64,
    /// C₂H₄ production, µL kg⁻¹ h⁻¹
    pub c2h4_production: f64,
    /// First-order ethylene uptake by the scavenger, h⁻¹
    pub scavenger_uptake: f64,
    o2_order: f64,
    c2h4_order: f64,
}

impl RateConstants {
    /// Arrhenius rates at `temperature_k`.
    pub fn at(temperature_k: f64) -> Self {
        Self::with_model(&MODEL, temperature_k)
    }

    pub fn with_model(model: &ModelConstants, temperature_k: f64) -> Self {
        let rt = model.gas_constant * temperature_k;
        let o2_consumption = model.o2_rate_ref * (-(model.o2_activation_energy / rt)).exp();
        let c2h4_production = model.c2h4_rate_ref * (-(model.c2h4_activation_energy / rt)).exp();

        let inverse_gap = 1.0 / temperature_k - 1.0 / model.scavenger_ref_temperature;
        let scavenger_uptake = model.scavenger_rate_ref
            * (-(model.scavenger_activation_energy / model.gas_constant) * inverse_gap).exp();

        Self {
            o2_consumption,
            c2h4_production,
            scavenger_uptake,
            o2_order: model.o2_order,
            c2h4_order: model.c2h4_order,
        }
    }

    /// Respiration rate at headspace O₂ fraction `y_o2`, mL kg⁻¹ h⁻¹.
    pub fn respiration_rate(&self, y_o2: f64) -> f64 {
        self.o2_consumption * y_o2.powf(self.o2_order)
    }

    /// Ethylene production rate at headspace O₂ fraction `y_o2`, µL kg⁻¹ h⁻¹.
    pub fn ethylene_rate(&self, y_o2: f64) -> f64 {
        self.c2h4_production * y_o2.powf(self.c2h4_order)
    }
}

/// Ethylene the scavenger can hold, expressed as headspace ppm.
pub fn scavenger_capacity_ppm(params: &PackageParams) -> f64 {
    let scavenger_kg = params.scavenger_mass_g / 1000.0;
    let headspace_l = params.headspace_ml() / 1000.0;
    MODEL.scavenger_capacity * scavenger_kg * 1e6 / headspace_l
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(scavenger_mass_g: f64) -> PackageParams {
        PackageParams {
            fruit_mass_kg: 1.0,
            storage_temperature_c: 20.0,
            perforation_diameter_um: 0.0,
            perforation_count: 0.0,
            scavenger_mass_g,
            package_volume_l: 2.0,
            test_days: 1.0,
        }
    }

    #[test]
    fn scavenger_rate_equals_reference_at_reference_temperature() {
        let rates = RateConstants::at(MODEL.scavenger_ref_temperature);
        assert!((rates.scavenger_uptake - MODEL.scavenger_rate_ref).abs() < 1e-12);
    }

    #[test]
    fn rates_increase_with_temperature() {
        let cold = RateConstants::at(278.15);
        let warm = RateConstants::at(298.15);
        assert!(warm.o2_consumption > cold.o2_consumption);
        assert!(warm.c2h4_production > cold.c2h4_production);
        assert!(warm.scavenger_uptake > cold.scavenger_uptake);
    }

    #[test]
    fn o2_consumption_at_20c() {
        // 5.96e8 * exp(-36275 / (8.314472 * 293.15))
        let rates = RateConstants::at(293.15);
        assert!(
            (rates.o2_consumption - 205.0).abs() < 10.0,
            "{}",
            rates.o2_consumption
        );
    }

    #[test]
    fn rates_vanish_without_oxygen() {
        let rates = RateConstants::at(293.15);
        assert_eq!(rates.respiration_rate(0.0), 0.0);
        assert_eq!(rates.ethylene_rate(0.0), 0.0);
    }

    #[test]
    fn capacity_scales_with_scavenger_mass() {
        // 1 g in 1 L of headspace: 2.842475151 * 0.001 * 1e6 / 1.0
        assert!((scavenger_capacity_ppm(&params(1.0)) - 2842.475151).abs() < 1e-6);
        assert_eq!(scavenger_capacity_ppm(&params(0.0)), 0.0);
    }
}
