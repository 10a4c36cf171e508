//! Model constants and input limits.
//!
//! Every physical constant of the package model lives here so the compute
//! layer and the UI read from a single source of truth.

/// Physical and kinetic constants of the modified-atmosphere package model.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModelConstants {
    /// Avocado density, kg/mL
    pub fruit_density: f64,
    /// Air velocity around the package, cm/s
    pub air_velocity: f64,
    /// Film thickness, cm
    pub film_thickness: f64,
    /// Universal gas constant, J mol⁻¹ K⁻¹
    pub gas_constant: f64,
    /// Offset from °C to K
    pub kelvin_offset: f64,

    /// O₂ consumption rate at reference, mL kg⁻¹ h⁻¹
    pub o2_rate_ref: f64,
    /// Reaction order of O₂ consumption in O₂ fraction
    pub o2_order: f64,
    /// Activation energy of O₂ consumption, J/mol
    pub o2_activation_energy: f64,

    /// C₂H₄ production rate at reference, µL kg⁻¹ h⁻¹
    pub c2h4_rate_ref: f64,
    /// Reaction order of C₂H₄ production in O₂ fraction
    pub c2h4_order: f64,
    /// Activation energy of C₂H₄ production, J/mol
    pub c2h4_activation_energy: f64,

    /// Activation energy of ethylene uptake by the scavenger, J/mol
    pub scavenger_activation_energy: f64,
    /// Scavenger uptake rate constant at `scavenger_ref_temperature`, h⁻¹
    pub scavenger_rate_ref: f64,
    /// Reference temperature of the scavenger rate constant, K
    pub scavenger_ref_temperature: f64,
    /// Scavenger capacity, L of C₂H₄ per kg of scavenger
    pub scavenger_capacity: f64,

    /// Respiratory quotient (CO₂ produced per O₂ consumed)
    pub respiratory_quotient: f64,
    /// O₂ fraction of air, and of the headspace at packing time
    pub initial_o2_fraction: f64,
    /// CO₂ permeates perforations this many times faster than O₂
    pub co2_to_o2_transmission: f64,
    /// Integration step, hours
    pub time_step_h: f64,
}

/// Upper (and lower) bounds accepted for user inputs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InputLimits {
    pub min_headspace_ml: f64,
    pub max_perforations: f64,
    pub max_perforation_diameter_um: f64,
    pub max_fruit_mass_kg: f64,
    pub max_storage_temperature_c: f64,
    pub max_test_days: f64,
    pub max_scavenger_mass_g: f64,
}

pub static MODEL: ModelConstants = ModelConstants {
    fruit_density: 0.001,
    air_velocity: 7.2,
    film_thickness: 0.003,
    gas_constant: 8.314472,
    kelvin_offset: 273.15,

    o2_rate_ref: 5.96e8,
    o2_order: 0.75,
    o2_activation_energy: 36275.0,

    c2h4_rate_ref: 1.19e12,
    c2h4_order: 0.93,
    c2h4_activation_energy: 63836.0,

    scavenger_activation_energy: 22871.97195,
    scavenger_rate_ref: 0.695197,
    scavenger_ref_temperature: 294.81,
    scavenger_capacity: 2.842475151,

    respiratory_quotient: 0.85,
    initial_o2_fraction: 0.209,
    co2_to_o2_transmission: 3.0,
    time_step_h: 1.0 / 3600.0,
};

pub static LIMITS: InputLimits = InputLimits {
    min_headspace_ml: 100.0,
    max_perforations: 200.0,
    max_perforation_diameter_um: 900.0,
    max_fruit_mass_kg: 6.0,
    max_storage_temperature_c: 30.0,
    max_test_days: 15.0,
    max_scavenger_mass_g: 5.0,
};
