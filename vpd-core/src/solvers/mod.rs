//! Inverse VPD Solvers
//!
//! The slider sets a target VPD; one of the two inputs is held fixed and the
//! other is derived.
//!
//! | Held fixed   | Derived      | Method                                |
//! |--------------|--------------|---------------------------------------|
//! | Temperature  | Humidity     | closed form, `RH = (1 - VPD/SVP)×100` |
//! | Humidity     | Temperature  | fixed-step search, no closed form     |
//!
//! Temperature appears both linearly and inside the exponential of the Tetens
//! equation, so it cannot be isolated algebraically. The search walks in
//! 0.1°C steps from 1°C toward the target and stops inside 0.001 kPa or
//! after 1000 steps.
//!
//! Neither solver clamps its answer. A result outside the field's bounds is
//! returned as-is and the caller raises the field's invalid flag, so the user
//! sees what the requested combination implies.

mod humidity;
mod temperature;

pub use humidity::solve_humidity;
pub use temperature::{search_temperature, solve_temperature, solve_temperature_with, TemperatureSearch};

use crate::constants::limits::{
    SOLVER_INITIAL_GUESS_C, SOLVER_MAX_ITERATIONS, SOLVER_STEP_C, SOLVER_TOLERANCE_KPA,
};

/// Parameters of the fixed-step temperature search
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig {
    /// Starting temperature (°C)
    pub initial_guess_c: f64,

    /// Step applied every iteration (°C)
    pub step_c: f64,

    /// Stop once the computed VPD is this close to the target (kPa)
    pub tolerance_kpa: f64,

    /// Iteration cap; reaching it returns the last temperature visited
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            initial_guess_c: SOLVER_INITIAL_GUESS_C,
            step_c: SOLVER_STEP_C,
            tolerance_kpa: SOLVER_TOLERANCE_KPA,
            max_iterations: SOLVER_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Create a config with a custom step and tolerance, keeping the default
    /// starting point and iteration cap
    pub fn new_with_step(step_c: f64, tolerance_kpa: f64) -> Self {
        Self {
            step_c: libm::fabs(step_c),
            tolerance_kpa: libm::fabs(tolerance_kpa),
            ..Self::default()
        }
    }
}
