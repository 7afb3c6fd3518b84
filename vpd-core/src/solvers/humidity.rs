//! Humidity for a target VPD at a fixed temperature

use crate::{
    constants::physics::PERCENT,
    psychro::saturation_vapor_pressure,
    units::TemperatureUnit,
    utils::round_half_up,
};

/// Relative humidity (%) that yields `target_vpd` at `temperature`
///
/// Rounded to the nearest whole percent. May fall outside [0, 99]: a target
/// above the SVP gives a negative humidity, a negative target gives more than
/// 100%.
pub fn solve_humidity(temperature: f64, unit: TemperatureUnit, target_vpd: f64) -> f64 {
    let svp = saturation_vapor_pressure(unit.to_celsius(temperature));
    round_half_up((1.0 - target_vpd / svp) * PERCENT)
}
