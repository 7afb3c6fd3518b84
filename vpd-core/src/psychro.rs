//! Saturation Vapor Pressure and Forward VPD
//!
//! ## Physics Background
//!
//! Air at a given temperature can hold water vapor up to its saturation vapor
//! pressure (SVP). Relative humidity is the fraction of that capacity in use,
//! and the vapor pressure deficit is the unused remainder:
//!
//! ```text
//! VPD = SVP(T) × (1 - RH/100)
//! ```
//!
//! Plants transpire harder as VPD rises. Growers aim for roughly 0.4 - 1.6 kPa
//! depending on growth stage.
//!
//! ## Model
//!
//! SVP uses the Tetens approximation (see [`crate::constants::physics`]).
//! It is accurate to a few tenths of a percent between 0 and 50°C, which covers
//! every temperature the calculator accepts.
//!
//! Humidity is not clamped here. A negative RH or one above 100% yields a
//! mathematically valid, physically meaningless VPD; bounding the input is the
//! job of [`crate::validation`].

use crate::{
    constants::{
        limits::VPD_DECIMALS,
        physics::{PERCENT, TETENS_A_KPA, TETENS_B, TETENS_C_C},
    },
    units::TemperatureUnit,
    utils::round_to,
};

/// Saturation vapor pressure in kPa for a Celsius temperature
///
/// Singular at -237.3°C.
pub fn saturation_vapor_pressure(temp_c: f64) -> f64 {
    TETENS_A_KPA * libm::exp(TETENS_B * temp_c / (temp_c + TETENS_C_C))
}

/// VPD in kPa for a Celsius temperature and relative humidity, unrounded
pub fn vapor_pressure_deficit(temp_c: f64, rh_percent: f64) -> f64 {
    (1.0 - rh_percent / PERCENT) * saturation_vapor_pressure(temp_c)
}

/// Forward VPD for a temperature in `unit`, rounded to 3 decimals
pub fn compute_vpd(temperature: f64, unit: TemperatureUnit, rh_percent: f64) -> f64 {
    round_to(vapor_pressure_deficit(unit.to_celsius(temperature), rh_percent), VPD_DECIMALS)
}
