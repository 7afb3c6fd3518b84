//! Physical Constants for Vapor Pressure Calculations
//!
//! The engine models saturation vapor pressure with the Tetens approximation:
//!
//! ```text
//! svp(T) = A × exp(B × T / (T + C))
//!
//! Where:
//! - T = air temperature (°C)
//! - A = 0.6108 kPa
//! - B = 17.27
//! - C = 237.3 °C
//! ```
//!
//! The expression is singular at T = -C (-237.3 °C). That point lies far
//! outside any greenhouse or room temperature, so no guard is applied.

// ===== TETENS APPROXIMATION =====

/// Saturation vapor pressure at 0°C (kPa).
///
/// Leading coefficient of the Tetens equation.
///
/// Source: Tetens (1930), as tabulated in FAO Irrigation and Drainage Paper 56
pub const TETENS_A_KPA: f64 = 0.6108;

/// Dimensionless exponent coefficient of the Tetens equation.
///
/// Source: FAO-56, Eq. 11
pub const TETENS_B: f64 = 17.27;

/// Temperature offset of the Tetens equation (°C).
///
/// The denominator `T + TETENS_C_C` vanishes at -237.3°C.
///
/// Source: FAO-56, Eq. 11
pub const TETENS_C_C: f64 = 237.3;

// ===== TEMPERATURE SCALES =====

/// Offset between the Fahrenheit and Celsius zero points (°F).
pub const FAHRENHEIT_OFFSET: f64 = 32.0;

/// Size of one Celsius degree in Fahrenheit degrees.
pub const FAHRENHEIT_SCALE: f64 = 1.8;

/// Relative humidity expressed as a fraction uses this divisor (%).
pub const PERCENT: f64 = 100.0;
