//! Shared numeric helpers
//!
//! ## Rounding
//!
//! Displayed values follow half-up rounding: `x.5` goes toward positive
//! infinity, so `-2.5` rounds to `-2` and `2.5` to `3`. `f64::round` rounds
//! half away from zero, which would shift negative humidities produced by the
//! inverse solver, so the engine rounds through [`round_half_up`] instead.
//!
//! ## Range checks
//!
//! [`check_range`] is inclusive on both ends and returns the bounds inside the
//! error so callers can clamp to the violated one.

use crate::errors::{EngineError, EngineResult};

/// Round to the nearest integer, ties toward positive infinity
pub fn round_half_up(value: f64) -> f64 {
    libm::floor(value + 0.5)
}

/// Round to a fixed number of decimal places, ties toward positive infinity
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = libm::pow(10.0, decimals as f64);
    round_half_up(value * scale) / scale
}

/// Check if a value is within the specified inclusive range
pub fn check_range(value: f64, min: f64, max: f64) -> EngineResult<()> {
    if !value.is_finite() {
        Err(EngineError::InvalidValue)
    } else if value < min || value > max {
        Err(EngineError::OutOfRange { value, min, max })
    } else {
        Ok(())
    }
}

/// Whether a value lies inside an inclusive range
pub fn in_range(value: f64, min: f64, max: f64) -> bool {
    check_range(value, min, max).is_ok()
}
