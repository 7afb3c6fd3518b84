//! Field Validation and Clamping
//!
//! ## Two kinds of out-of-range
//!
//! 1. **Derived values** from the inverse solvers. These are stored as-is
//!    and flagged invalid so the user sees what the slider setting implies.
//! 2. **Committed values** the user typed (or the slider left behind on
//!    release). These are clamped to the nearest bound and an advisory
//!    is raised.
//!
//! Both use the same bounds:
//!
//! | Field        | Unit | Range     |
//! |--------------|------|-----------|
//! | Temperature  | °C   | 12 - 37   |
//! | Temperature  | °F   | 53 - 99   |
//! | Humidity     | %    | 0 - 99    |
//!
//! ## Usage
//!
//! ```rust
//! use vpd_core::{FieldValidator, HumidityField, TemperatureField, TemperatureUnit};
//! use vpd_core::validation::Bound;
//!
//! let clamped = TemperatureField::new(TemperatureUnit::Celsius).clamp(40.0);
//! assert_eq!(clamped.value, 37.0);
//! assert_eq!(clamped.violated, Some(Bound::Maximum));
//!
//! assert!(HumidityField.validate(55.0).is_ok());
//! ```

use crate::{
    constants::limits::{HUMIDITY_MAX_PCT, HUMIDITY_MIN_PCT},
    errors::{EngineError, EngineResult},
    lock::Field,
    units::TemperatureUnit,
    utils,
};

/// Inclusive bounds of a field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldBounds {
    /// Smallest accepted value
    pub min: f64,
    /// Largest accepted value
    pub max: f64,
}

/// Which bound a clamped value was moved to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Bound {
    /// Value was below the minimum
    Minimum,
    /// Value was above the maximum
    Maximum,
}

impl Bound {
    /// Lower-case name used in advisory text
    pub fn name(self) -> &'static str {
        match self {
            Self::Minimum => "minimum",
            Self::Maximum => "maximum",
        }
    }
}

/// Result of clamping a committed value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Clamped {
    /// Value after clamping
    pub value: f64,
    /// Bound that was hit, if any
    pub violated: Option<Bound>,
}

/// Validator for one input field
pub trait FieldValidator {
    /// Field this validator guards
    fn field(&self) -> Field;

    /// Bounds of the field
    fn bounds(&self) -> FieldBounds;

    /// Check a value against the bounds
    fn validate(&self, value: f64) -> EngineResult<()> {
        let FieldBounds { min, max } = self.bounds();
        utils::check_range(value, min, max)
    }

    /// Move a value onto the nearest bound if it lies outside
    ///
    /// Non-finite values are returned unchanged; the input layer never
    /// produces them.
    fn clamp(&self, value: f64) -> Clamped {
        match self.validate(value) {
            Err(EngineError::OutOfRange { value, min, .. }) if value < min => Clamped {
                value: min,
                violated: Some(Bound::Minimum),
            },
            Err(EngineError::OutOfRange { max, .. }) => Clamped {
                value: max,
                violated: Some(Bound::Maximum),
            },
            _ => Clamped { value, violated: None },
        }
    }
}

/// Temperature field in a given unit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureField {
    unit: TemperatureUnit,
}

impl TemperatureField {
    /// Validator for temperatures expressed in `unit`
    pub fn new(unit: TemperatureUnit) -> Self {
        Self { unit }
    }

    /// Unit of the validated values
    pub fn unit(&self) -> TemperatureUnit {
        self.unit
    }
}

impl FieldValidator for TemperatureField {
    fn field(&self) -> Field {
        Field::Temperature
    }

    fn bounds(&self) -> FieldBounds {
        let (min, max) = self.unit.display_range();
        FieldBounds { min, max }
    }
}

/// Relative humidity field
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HumidityField;

impl FieldValidator for HumidityField {
    fn field(&self) -> Field {
        Field::Humidity
    }

    fn bounds(&self) -> FieldBounds {
        FieldBounds { min: HUMIDITY_MIN_PCT, max: HUMIDITY_MAX_PCT }
    }
}

/// Whether a temperature lies in the display range of `unit`
pub fn is_temperature_valid(value: f64, unit: TemperatureUnit) -> bool {
    TemperatureField::new(unit).validate(value).is_ok()
}

/// Whether a humidity lies in [0, 99]
pub fn is_humidity_valid(value: f64) -> bool {
    HumidityField.validate(value).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temperature_bounds_follow_unit() {
        assert!(is_temperature_valid(53.0, TemperatureUnit::Fahrenheit));
        assert!(is_temperature_valid(99.0, TemperatureUnit::Fahrenheit));
        assert!(!is_temperature_valid(52.0, TemperatureUnit::Fahrenheit));
        assert!(!is_temperature_valid(100.0, TemperatureUnit::Fahrenheit));

        assert!(is_temperature_valid(12.0, TemperatureUnit::Celsius));
        assert!(is_temperature_valid(37.0, TemperatureUnit::Celsius));
        assert!(!is_temperature_valid(11.0, TemperatureUnit::Celsius));
        assert!(!is_temperature_valid(38.0, TemperatureUnit::Celsius));
    }

    #[test]
    fn humidity_bounds() {
        assert!(is_humidity_valid(0.0));
        assert!(is_humidity_valid(99.0));
        assert!(!is_humidity_valid(-1.0));
        assert!(!is_humidity_valid(100.0));
    }

    #[test]
    fn clamp_to_nearest_bound() {
        let field = TemperatureField::new(TemperatureUnit::Fahrenheit);
        assert_eq!(field.clamp(40.0), Clamped { value: 53.0, violated: Some(Bound::Minimum) });
        assert_eq!(field.clamp(120.0), Clamped { value: 99.0, violated: Some(Bound::Maximum) });
        assert_eq!(field.clamp(75.0), Clamped { value: 75.0, violated: None });

        assert_eq!(HumidityField.clamp(-8.0).value, 0.0);
        assert_eq!(HumidityField.clamp(112.0).value, 99.0);
    }

    #[test]
    fn out_of_range_carries_bounds() {
        let err = HumidityField.validate(150.0);
        assert_eq!(err, Err(EngineError::OutOfRange { value: 150.0, min: 0.0, max: 99.0 }));
    }

    #[test]
    fn non_finite_is_not_clamped() {
        assert_eq!(HumidityField.validate(f64::INFINITY), Err(EngineError::InvalidValue));
        assert!(HumidityField.clamp(f64::NAN).violated.is_none());
    }
}
