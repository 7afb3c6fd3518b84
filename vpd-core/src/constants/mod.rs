//! Constants for the VPD engine
//!
//! Every numeric value the engine depends on is defined here, named with its
//! unit, so the solver and slider behave identically across hosts.
//!
//! ## Organization
//!
//! - **Physics**: Tetens coefficients and temperature scale conversion
//! - **Limits**: display bounds, slider breakpoints, solver parameters,
//!   default seeds and advisory timing
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of magic numbers
//! 2. Include the unit in the name (`_C`, `_F`, `_PCT`, `_KPA`, `_MS`)
//! 3. Changing a solver constant changes results bit-for-bit; treat them as
//!    part of the public behavior

/// Physical constants for saturation vapor pressure and temperature scales.
pub mod physics;

/// Display ranges, slider scale, solver parameters and UI timings.
pub mod limits;

// Re-export commonly used constants for convenience
pub use physics::{
    TETENS_A_KPA, TETENS_B, TETENS_C_C,
    FAHRENHEIT_OFFSET, FAHRENHEIT_SCALE,
};

pub use limits::{
    CELSIUS_DISPLAY_MIN_C, CELSIUS_DISPLAY_MAX_C,
    FAHRENHEIT_DISPLAY_MIN_F, FAHRENHEIT_DISPLAY_MAX_F,
    HUMIDITY_MIN_PCT, HUMIDITY_MAX_PCT,
    SOLVER_STEP_C, SOLVER_TOLERANCE_KPA, SOLVER_MAX_ITERATIONS,
};
