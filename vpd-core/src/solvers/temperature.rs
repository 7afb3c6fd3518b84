//! Temperature for a target VPD at a fixed humidity
//!
//! ## Search
//!
//! ```text
//! t = initial_guess
//! loop:
//!     vpd = (1 - rh/100) × svp(t)
//!     t  += step   if vpd < target
//!     t  -= step   otherwise
//! until |vpd - target| <= tolerance  or  iterations == cap
//! ```
//!
//! The VPD is evaluated *before* the step, so a converged search returns the
//! temperature one step past the one that met the tolerance. Results stay
//! reproducible bit-for-bit only if that order is kept.
//!
//! With a 0.1°C step the computed VPD moves by ~0.01 kPa per step near room
//! temperature, ten times the tolerance. Many targets therefore sit between
//! two steps and the search oscillates until the cap. The last temperature is
//! still within one step of the answer, which is finer than the whole degree
//! the result is rounded to.

use crate::{
    psychro::vapor_pressure_deficit,
    units::TemperatureUnit,
    utils::round_half_up,
};

use super::SolverConfig;

/// Outcome of a temperature search
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureSearch {
    /// Last temperature visited (°C), unrounded
    pub celsius: f64,

    /// Iterations performed
    pub iterations: u32,

    /// Whether the final evaluated VPD was inside the tolerance
    pub converged: bool,
}

impl TemperatureSearch {
    /// Result in `unit`, rounded to the nearest whole degree
    pub fn rounded(&self, unit: TemperatureUnit) -> f64 {
        round_half_up(unit.from_celsius(self.celsius))
    }
}

/// Run the fixed-step search and report how it ended
pub fn search_temperature(rh_percent: f64, target_vpd: f64, config: &SolverConfig) -> TemperatureSearch {
    let mut temp_c = config.initial_guess_c;
    let mut iterations = 0;

    loop {
        let vpd = vapor_pressure_deficit(temp_c, rh_percent);
        if vpd < target_vpd {
            temp_c += config.step_c;
        } else {
            temp_c -= config.step_c;
        }
        iterations += 1;

        let converged = libm::fabs(vpd - target_vpd) <= config.tolerance_kpa;
        if converged || iterations >= config.max_iterations {
            if !converged {
                log_warn!(
                    "Temperature search hit {} iterations (rh={}, target={}), returning {}°C",
                    iterations, rh_percent, target_vpd, temp_c
                );
            }
            return TemperatureSearch { celsius: temp_c, iterations, converged };
        }
    }
}

/// Temperature in `unit` that yields `target_vpd` at `rh_percent`, using
/// a custom search configuration
pub fn solve_temperature_with(
    rh_percent: f64,
    unit: TemperatureUnit,
    target_vpd: f64,
    config: &SolverConfig,
) -> f64 {
    search_temperature(rh_percent, target_vpd, config).rounded(unit)
}

/// Temperature in `unit` that yields `target_vpd` at `rh_percent`
///
/// Rounded to a whole degree. Non-convergence is not reported; see
/// [`search_temperature`] for the diagnostics.
pub fn solve_temperature(rh_percent: f64, unit: TemperatureUnit, target_vpd: f64) -> f64 {
    solve_temperature_with(rh_percent, unit, target_vpd, &SolverConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converges_to_room_temperature() {
        let search = search_temperature(50.0, 1.584, &SolverConfig::default());
        assert!(search.converged);
        assert!(search.iterations < 1000);
        assert!((search.celsius - 25.0).abs() <= 0.2);
        assert_eq!(search.rounded(TemperatureUnit::Fahrenheit), 77.0);
    }

    #[test]
    fn solve_in_both_units() {
        assert_eq!(solve_temperature(50.0, TemperatureUnit::Fahrenheit, 1.584), 77.0);
        assert_eq!(solve_temperature(50.0, TemperatureUnit::Celsius, 1.584), 25.0);
    }

    #[test]
    fn oscillation_stops_at_cap() {
        // 6.0 kPa of saturation lies between two 0.1°C steps near 36.2°C
        let search = search_temperature(50.0, 3.0, &SolverConfig::default());
        assert!(!search.converged);
        assert_eq!(search.iterations, 1000);
        assert!((search.celsius - 36.2).abs() <= 0.2);
    }

    #[test]
    fn custom_cap_is_honoured() {
        let config = SolverConfig { max_iterations: 10, ..SolverConfig::default() };
        let search = search_temperature(50.0, 1.584, &config);
        assert_eq!(search.iterations, 10);
        assert!(!search.converged);
        assert!((search.celsius - 2.0).abs() < 1e-9);
    }

    #[test]
    fn finer_step_gets_closer() {
        let config = SolverConfig { max_iterations: 100_000, ..SolverConfig::new_with_step(0.01, 0.0005) };
        let search = search_temperature(50.0, 1.584, &config);
        assert!(search.converged);
        assert!((search.celsius - 25.0).abs() < 0.05);
    }
}
