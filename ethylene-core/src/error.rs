//! Input error types.

use thiserror::Error;

use crate::config::LIMITS;
use crate::params::Field;

/// A single problem with the user's inputs.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum InputError {
    #[error("{0} is required.")]
    Missing(Field),

    #[error("{field} must be a number (got \"{value}\").")]
    NotANumber { field: Field, value: String },

    #[error("{0} must not be negative.")]
    Negative(Field),

    #[error("Storage temperature must be above absolute zero.")]
    BelowAbsoluteZero,

    #[error("Headspace volume (V) must be at least {} mL.", LIMITS.min_headspace_ml)]
    HeadspaceTooSmall { headspace_ml: f64 },

    #[error("Number of perforations must be ≤ {}.", LIMITS.max_perforations)]
    TooManyPerforations,

    #[error("Perforation diameter must be ≤ {} microns.", LIMITS.max_perforation_diameter_um)]
    PerforationTooWide,

    #[error("Weight of avocados must be ≤ {} kg.", LIMITS.max_fruit_mass_kg)]
    FruitTooHeavy,

    #[error("Storage temperature must be ≤ {}°C.", LIMITS.max_storage_temperature_c)]
    TooWarm,

    #[error("Time must be ≤ {} days.", LIMITS.max_test_days)]
    TooLong,

    #[error("Scavenger mass must be ≤ {} g.", LIMITS.max_scavenger_mass_g)]
    TooMuchScavenger,
}

/// Every problem found in one set of inputs, in reporting order.
#[derive(Clone, Debug, Default, Error, PartialEq)]
#[error("{}", join_messages(.0))]
pub struct ValidationErrors(pub Vec<InputError>);

fn join_messages(errors: &[InputError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

impl ValidationErrors {
    /// User-facing lines, one per error.
    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }
}

impl From<Vec<InputError>> for ValidationErrors {
    fn from(errors: Vec<InputError>) -> Self {
        Self(errors)
    }
}
