//! Package parameters: the seven simulation inputs, raw and parsed.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::{LIMITS, MODEL};
use crate::error::{InputError, ValidationErrors};

/// One of the seven simulation inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    FruitMass,
    StorageTemperature,
    PerforationDiameter,
    PerforationCount,
    ScavengerMass,
    PackageVolume,
    TestDays,
}

impl Field {
    /// Form order.
    pub const ALL: [Field; 7] = [
        Field::FruitMass,
        Field::StorageTemperature,
        Field::PerforationDiameter,
        Field::PerforationCount,
        Field::ScavengerMass,
        Field::PackageVolume,
        Field::TestDays,
    ];

    /// Stable identifier, used as the form input name.
    pub fn key(self) -> &'static str {
        match self {
            Field::FruitMass => "fruit_mass",
            Field::StorageTemperature => "storage_temperature",
            Field::PerforationDiameter => "perforation_diameter",
            Field::PerforationCount => "perforation_count",
            Field::ScavengerMass => "scavenger_mass",
            Field::PackageVolume => "package_volume",
            Field::TestDays => "test_days",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::FruitMass => "Weight of avocados",
            Field::StorageTemperature => "Storage temperature",
            Field::PerforationDiameter => "Perforation diameter",
            Field::PerforationCount => "Number of perforations",
            Field::ScavengerMass => "Scavenger mass",
            Field::PackageVolume => "Package volume",
            Field::TestDays => "Time",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Field::FruitMass => "kg",
            Field::StorageTemperature => "°C",
            Field::PerforationDiameter => "µm",
            Field::PerforationCount => "",
            Field::ScavengerMass => "g",
            Field::PackageVolume => "L",
            Field::TestDays => "days",
        }
    }

    /// Temperature is the only input that may legitimately be negative.
    fn allows_negative(self) -> bool {
        matches!(self, Field::StorageTemperature)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Unparsed form contents, exactly as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawInputs {
    pub fruit_mass: String,
    pub storage_temperature: String,
    pub perforation_diameter: String,
    pub perforation_count: String,
    pub scavenger_mass: String,
    pub package_volume: String,
    pub test_days: String,
}

impl RawInputs {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FruitMass => &self.fruit_mass,
            Field::StorageTemperature => &self.storage_temperature,
            Field::PerforationDiameter => &self.perforation_diameter,
            Field::PerforationCount => &self.perforation_count,
            Field::ScavengerMass => &self.scavenger_mass,
            Field::PackageVolume => &self.package_volume,
            Field::TestDays => &self.test_days,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::FruitMass => &mut self.fruit_mass,
            Field::StorageTemperature => &mut self.storage_temperature,
            Field::PerforationDiameter => &mut self.perforation_diameter,
            Field::PerforationCount => &mut self.perforation_count,
            Field::ScavengerMass => &mut self.scavenger_mass,
            Field::PackageVolume => &mut self.package_volume,
            Field::TestDays => &mut self.test_days,
        };
        *slot = value;
    }

    /// Parse every field, reporting all unparsable fields at once.
    ///
    /// Only parsing happens here; range checks are [`PackageParams::validate`].
    pub fn parse(&self) -> Result<PackageParams, ValidationErrors> {
        let mut errors = Vec::new();
        let mut values = [0.0_f64; 7];

        for (slot, field) in values.iter_mut().zip(Field::ALL) {
            match parse_field(field, self.get(field)) {
                Ok(v) => *slot = v,
                Err(e) => errors.push(e),
            }
        }

        if !errors.is_empty() {
            return Err(errors.into());
        }

        let [
            fruit_mass_kg,
            storage_temperature_c,
            perforation_diameter_um,
            perforation_count,
            scavenger_mass_g,
            package_volume_l,
            test_days,
        ] = values;

        Ok(PackageParams {
            fruit_mass_kg,
            storage_temperature_c,
            perforation_diameter_um,
            perforation_count,
            scavenger_mass_g,
            package_volume_l,
            test_days,
        })
    }
}

fn parse_field(field: Field, raw: &str) -> Result<f64, InputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InputError::Missing(field));
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(InputError::NotANumber {
            field,
            value: trimmed.to_string(),
        }),
    }
}

/// Parsed simulation inputs.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PackageParams {
    /// Avocado mass Wp, kg
    pub fruit_mass_kg: f64,
    pub storage_temperature_c: f64,
    /// Diameter of each perforation, µm
    pub perforation_diameter_um: f64,
    pub perforation_count: f64,
    /// Ethylene scavenger mass, g
    pub scavenger_mass_g: f64,
    /// Package volume, L
    pub package_volume_l: f64,
    pub test_days: f64,
}

impl PackageParams {
    pub fn get(&self, field: Field) -> f64 {
        match field {
            Field::FruitMass => self.fruit_mass_kg,
            Field::StorageTemperature => self.storage_temperature_c,
            Field::PerforationDiameter => self.perforation_diameter_um,
            Field::PerforationCount => self.perforation_count,
            Field::ScavengerMass => self.scavenger_mass_g,
            Field::PackageVolume => self.package_volume_l,
            Field::TestDays => self.test_days,
        }
    }

    /// Package volume, mL
    pub fn package_volume_ml(&self) -> f64 {
        self.package_volume_l * 1000.0
    }

    /// Volume taken up by the fruit, mL
    pub fn fruit_volume_ml(&self) -> f64 {
        self.fruit_mass_kg / MODEL.fruit_density
    }

    /// Free gas volume V, mL
    pub fn headspace_ml(&self) -> f64 {
        self.package_volume_ml() - self.fruit_volume_ml()
    }

    pub fn temperature_k(&self) -> f64 {
        self.storage_temperature_c + MODEL.kelvin_offset
    }

    /// Perforation diameter in cm.
    pub fn perforation_diameter_cm(&self) -> f64 {
        self.perforation_diameter_um / 10_000.0
    }

    pub fn has_perforations(&self) -> bool {
        self.perforation_diameter_cm() > 0.0
    }

    pub fn has_scavenger(&self) -> bool {
        self.scavenger_mass_g > 0.0
    }

    /// Check every limit and return all violations.
    ///
    /// Sign errors come first, then the limits in a fixed order: headspace,
    /// perforation count, perforation diameter, fruit mass, temperature,
    /// duration, scavenger mass. An empty vector means the inputs are usable.
    pub fn validate(&self) -> Vec<InputError> {
        let mut errors: Vec<InputError> = Field::ALL
            .iter()
            .filter(|f| !f.allows_negative() && self.get(**f) < 0.0)
            .map(|&f| InputError::Negative(f))
            .collect();

        if self.temperature_k() <= 0.0 {
            errors.push(InputError::BelowAbsoluteZero);
        }

        let headspace_ml = self.headspace_ml();
        if headspace_ml < LIMITS.min_headspace_ml {
            errors.push(InputError::HeadspaceTooSmall { headspace_ml });
        }
        if self.perforation_count > LIMITS.max_perforations {
            errors.push(InputError::TooManyPerforations);
        }
        if self.perforation_diameter_um > LIMITS.max_perforation_diameter_um {
            errors.push(InputError::PerforationTooWide);
        }
        if self.fruit_mass_kg > LIMITS.max_fruit_mass_kg {
            errors.push(InputError::FruitTooHeavy);
        }
        if self.storage_temperature_c > LIMITS.max_storage_temperature_c {
            errors.push(InputError::TooWarm);
        }
        if self.test_days > LIMITS.max_test_days {
            errors.push(InputError::TooLong);
        }
        if self.scavenger_mass_g > LIMITS.max_scavenger_mass_g {
            errors.push(InputError::TooMuchScavenger);
        }

        errors
    }

    /// [`validate`](Self::validate) as a `Result`.
    pub fn validated(self) -> Result<Self, ValidationErrors> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(errors.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(values: [&str; 7]) -> RawInputs {
        let mut inputs = RawInputs::default();
        for (field, value) in Field::ALL.iter().zip(values) {
            inputs.set(*field, value.to_string());
        }
        inputs
    }

    #[test]
    fn parse_trims_whitespace() {
        let params = raw([" 1 ", "20", "500", "10", "0.5", "2", "3\n"])
            .parse()
            .unwrap();
        assert_eq!(params.fruit_mass_kg, 1.0);
        assert_eq!(params.test_days, 3.0);
    }

    #[test]
    fn parse_reports_every_bad_field() {
        let err = raw(["", "20", "wide", "10", "0.5", "NaN", "3"])
            .parse()
            .unwrap_err();
        assert_eq!(
            err.0,
            vec![
                InputError::Missing(Field::FruitMass),
                InputError::NotANumber {
                    field: Field::PerforationDiameter,
                    value: "wide".to_string()
                },
                InputError::NotANumber {
                    field: Field::PackageVolume,
                    value: "NaN".to_string()
                },
            ]
        );
    }

    #[test]
    fn headspace_subtracts_fruit_volume() {
        let params = raw(["1.5", "20", "0", "0", "0", "2", "1"]).parse().unwrap();
        assert!((params.headspace_ml() - 500.0).abs() < 1e-9);
    }

    #[test]
    fn negative_temperature_is_allowed() {
        let params = raw(["1", "-1", "0", "0", "0", "2", "1"]).parse().unwrap();
        assert!(params.validate().is_empty());
    }

    #[test]
    fn field_lookup_matches_struct_fields() {
        let params = raw(["1", "20", "500", "10", "0.5", "2", "3"]).parse().unwrap();
        assert_eq!(params.get(Field::PerforationCount), 10.0);
        assert_eq!(params.get(Field::ScavengerMass), 0.5);
        assert_eq!(params.get(Field::PackageVolume), 2.0);
    }
}
