//! Error Types for Input Validation and Parsing
//!
//! ## Scope
//!
//! The VPD math itself never fails. Every formula accepts any finite number
//! and an out-of-range *result* (a humidity of 112%, a temperature of 104°F)
//! is reported through the invalid flags on [`CalculatorState`], not through
//! `Err`. Errors exist only at the edges:
//!
//! - `OutOfRange`: a committed field value lies outside its bounds. The
//!   reducer turns this into a clamp plus an advisory.
//! - `InvalidValue`: a validator was handed NaN or infinity.
//! - `UnknownUnit`: a host passed a unit code other than `C` or `F`.
//!
//! Like the rest of the crate the enum is `Copy` with no heap payloads, so it
//! works unchanged in `no_std` builds.
//!
//! ```rust
//! use vpd_core::{EngineError, TemperatureField, FieldValidator, TemperatureUnit};
//!
//! let field = TemperatureField::new(TemperatureUnit::Fahrenheit);
//! match field.validate(104.0) {
//!     Ok(()) => {}
//!     Err(EngineError::OutOfRange { max, .. }) => assert_eq!(max, 99.0),
//!     Err(other) => panic!("unexpected {other:?}"),
//! }
//! ```
//!
//! [`CalculatorState`]: crate::state::CalculatorState

use thiserror_no_std::Error;

/// Result type for validation and parsing operations
pub type EngineResult<T> = Result<T, EngineError>;

/// Engine errors - small and `Copy`
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum EngineError {
    /// Value outside the accepted bounds of its field
    #[error("Value {value} outside range [{min}, {max}]")]
    OutOfRange {
        /// The offending value
        value: f64,
        /// Lower bound of the field
        min: f64,
        /// Upper bound of the field
        max: f64,
    },

    /// Value makes no numeric sense (NaN, infinity)
    #[error("Invalid value: not a finite number")]
    InvalidValue,

    /// Unit code was neither Celsius nor Fahrenheit
    #[error("Unknown temperature unit, expected C or F")]
    UnknownUnit,
}

#[cfg(feature = "defmt")]
impl defmt::Format for EngineError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::OutOfRange { value, min, max } =>
                defmt::write!(fmt, "Value {} outside [{}, {}]", value, min, max),
            Self::InvalidValue =>
                defmt::write!(fmt, "Invalid value"),
            Self::UnknownUnit =>
                defmt::write!(fmt, "Unknown unit"),
        }
    }
}
