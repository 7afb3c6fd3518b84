//! Vapor Pressure Deficit engine
//!
//! Computes VPD from temperature and relative humidity, and runs the
//! calculation backwards: fix temperature and get the humidity that hits a
//! target VPD, or fix humidity and get the temperature.
//!
//! Layers, leaf to root:
//! - [`units`]: Celsius/Fahrenheit conversion
//! - [`psychro`]: saturation vapor pressure (Tetens) and forward VPD
//! - [`solvers`]: closed-form humidity solver, fixed-step temperature search
//! - [`slider`]: piecewise-linear slider position <-> VPD scale
//! - [`lock`]: which field the slider drives
//! - [`state`]: the `(state, event) -> state` reducer tying it together
//!
//! Every operation is synchronous and bounded (the temperature search stops
//! after 1000 steps). The crate is `no_std` without the `std` feature.
//!
//! ```rust
//! use vpd_core::{compute_vpd, solve_humidity, solve_temperature, TemperatureUnit};
//!
//! let vpd = compute_vpd(77.0, TemperatureUnit::Fahrenheit, 50.0);
//! assert_eq!(vpd, 1.584);
//!
//! assert_eq!(solve_humidity(77.0, TemperatureUnit::Fahrenheit, vpd), 50.0);
//! assert_eq!(solve_temperature(50.0, TemperatureUnit::Fahrenheit, vpd), 77.0);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

// Macros for optional logging
#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

pub mod advisory;
pub mod calculator;
pub mod constants;
pub mod errors;
pub mod input;
pub mod lock;
pub mod psychro;
pub mod slider;
pub mod solvers;
pub mod state;
pub mod time;
pub mod units;
pub mod utils;
pub mod validation;

// Public API
pub use advisory::{Advisory, Visibility};
pub use calculator::Calculator;
pub use errors::{EngineError, EngineResult};
pub use input::parse_field;
pub use lock::{toggle_lock, Field, LockAffordance, LockState};
pub use psychro::{compute_vpd, saturation_vapor_pressure};
pub use slider::{slider_position_to_vpd, vpd_to_slider_position, SliderScale};
pub use solvers::{search_temperature, solve_humidity, solve_temperature, SolverConfig, TemperatureSearch};
pub use state::{update, CalculatorState, EngineConfig, InputEvent};
pub use time::{FixedTime, TimeSource, Timestamp};
pub use units::{convert_temperature, TemperatureUnit};
pub use validation::{FieldValidator, HumidityField, TemperatureField};

#[cfg(feature = "std")]
pub use time::SystemTime;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
