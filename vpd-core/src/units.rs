//! Temperature units and conversion
//!
//! The calculator works in whichever unit the user picked. Internally every
//! formula expects Celsius, so values cross the boundary through
//! [`TemperatureUnit::to_celsius`] (exact) and leave it through
//! [`TemperatureUnit::from_celsius`] (exact) or [`convert_temperature`]
//! (rounded to whole degrees, the granularity of the temperature field).

use core::fmt;
use core::str::FromStr;

use crate::{
    constants::{
        limits::{
            CELSIUS_DISPLAY_MAX_C, CELSIUS_DISPLAY_MIN_C, DEFAULT_TEMPERATURE_C,
            DEFAULT_TEMPERATURE_F, FAHRENHEIT_DISPLAY_MAX_F, FAHRENHEIT_DISPLAY_MIN_F,
        },
        physics::{FAHRENHEIT_OFFSET, FAHRENHEIT_SCALE},
    },
    errors::{EngineError, EngineResult},
    utils::round_half_up,
};

/// Temperature scale selected by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TemperatureUnit {
    /// Degrees Celsius
    Celsius,
    /// Degrees Fahrenheit
    #[default]
    Fahrenheit,
}

impl TemperatureUnit {
    /// Convert a value in this unit to Celsius, unrounded
    pub fn to_celsius(self, value: f64) -> f64 {
        match self {
            Self::Celsius => value,
            Self::Fahrenheit => (value - FAHRENHEIT_OFFSET) / FAHRENHEIT_SCALE,
        }
    }

    /// Convert a Celsius value into this unit, unrounded
    pub fn from_celsius(self, celsius: f64) -> f64 {
        match self {
            Self::Celsius => celsius,
            Self::Fahrenheit => celsius * FAHRENHEIT_SCALE + FAHRENHEIT_OFFSET,
        }
    }

    /// Inclusive range a committed temperature is clamped to
    pub fn display_range(self) -> (f64, f64) {
        match self {
            Self::Celsius => (CELSIUS_DISPLAY_MIN_C, CELSIUS_DISPLAY_MAX_C),
            Self::Fahrenheit => (FAHRENHEIT_DISPLAY_MIN_F, FAHRENHEIT_DISPLAY_MAX_F),
        }
    }

    /// Temperature seeded into an empty field before solving
    pub fn default_temperature(self) -> f64 {
        match self {
            Self::Celsius => DEFAULT_TEMPERATURE_C,
            Self::Fahrenheit => DEFAULT_TEMPERATURE_F,
        }
    }

    /// Single-letter code (`C` / `F`)
    pub fn code(self) -> char {
        match self {
            Self::Celsius => 'C',
            Self::Fahrenheit => 'F',
        }
    }

    /// Display symbol (`°C` / `°F`)
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for TemperatureUnit {
    type Err = EngineError;

    fn from_str(s: &str) -> EngineResult<Self> {
        let code = s.trim();
        let code = code.strip_prefix('°').unwrap_or(code);
        if code.eq_ignore_ascii_case("c") || code.eq_ignore_ascii_case("celsius") {
            Ok(Self::Celsius)
        } else if code.eq_ignore_ascii_case("f") || code.eq_ignore_ascii_case("fahrenheit") {
            Ok(Self::Fahrenheit)
        } else {
            Err(EngineError::UnknownUnit)
        }
    }
}

/// Convert a temperature between units, rounded to the nearest whole degree
///
/// Identity (no rounding) when both units are the same.
pub fn convert_temperature(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    if from == to {
        return value;
    }
    round_half_up(to.from_celsius(from.to_celsius(value)))
}
