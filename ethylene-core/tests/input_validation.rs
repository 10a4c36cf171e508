use ethylene_core::{Field, InputError, PackageParams, RawInputs};

fn typical() -> PackageParams {
    PackageParams {
        fruit_mass_kg: 1.0,
        storage_temperature_c: 20.0,
        perforation_diameter_um: 500.0,
        perforation_count: 10.0,
        scavenger_mass_g: 0.5,
        package_volume_l: 2.0,
        test_days: 5.0,
    }
}

#[test]
fn typical_inputs_are_valid() {
    assert!(typical().validate().is_empty());
    assert!(typical().validated().is_ok());
}

#[test]
fn limits_are_inclusive() {
    let params = PackageParams {
        fruit_mass_kg: 6.0,
        storage_temperature_c: 30.0,
        perforation_diameter_um: 900.0,
        perforation_count: 200.0,
        scavenger_mass_g: 5.0,
        package_volume_l: 7.0,
        test_days: 15.0,
    };
    assert!(params.validate().is_empty(), "{:?}", params.validate());
}

#[test]
fn small_headspace_is_rejected() {
    let params = PackageParams {
        fruit_mass_kg: 1.95,
        package_volume_l: 2.0,
        ..typical()
    };
    assert!((params.headspace_ml() - 50.0).abs() < 1e-6);
    assert!(matches!(
        params.validate().as_slice(),
        [InputError::HeadspaceTooSmall { .. }]
    ));
}

#[test]
fn every_limit_is_reported_in_order() {
    let params = PackageParams {
        fruit_mass_kg: 7.0,
        storage_temperature_c: 35.0,
        perforation_diameter_um: 1000.0,
        perforation_count: 250.0,
        scavenger_mass_g: 6.0,
        package_volume_l: 7.0,
        test_days: 20.0,
    };
    let errors = params.validate();
    assert!(matches!(errors[0], InputError::HeadspaceTooSmall { .. }));
    assert_eq!(
        errors[1..],
        [
            InputError::TooManyPerforations,
            InputError::PerforationTooWide,
            InputError::FruitTooHeavy,
            InputError::TooWarm,
            InputError::TooLong,
            InputError::TooMuchScavenger,
        ]
    );
}

#[test]
fn negative_quantities_are_rejected() {
    let params = PackageParams {
        perforation_count: -1.0,
        test_days: -2.0,
        ..typical()
    };
    let errors = params.validate();
    assert_eq!(
        &errors[..2],
        &[
            InputError::Negative(Field::PerforationCount),
            InputError::Negative(Field::TestDays),
        ]
    );
}

#[test]
fn absolute_zero_is_rejected() {
    let params = PackageParams {
        storage_temperature_c: -273.15,
        ..typical()
    };
    assert_eq!(params.validate(), vec![InputError::BelowAbsoluteZero]);
}

#[test]
fn raw_inputs_serialize_with_field_keys() {
    let mut raw = RawInputs::default();
    raw.set(Field::FruitMass, "1.2".to_string());
    let json = serde_json::to_value(&raw).unwrap();
    for field in Field::ALL {
        assert!(json.get(field.key()).is_some(), "missing {}", field.key());
    }
    assert_eq!(json["fruit_mass"], "1.2");
}
