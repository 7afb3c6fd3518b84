//! Operating Limits and Tunables
//!
//! Bounds the calculator enforces on committed input, the fixed slider scale,
//! and the parameters of the iterative temperature search.

// ===== TEMPERATURE DISPLAY RANGE =====

/// Lowest temperature accepted on commit when working in Celsius (°C).
///
/// Below this, VPD targets become unreachable for most crops and the
/// calculator clamps the field.
pub const CELSIUS_DISPLAY_MIN_C: f64 = 12.0;

/// Highest temperature accepted on commit when working in Celsius (°C).
pub const CELSIUS_DISPLAY_MAX_C: f64 = 37.0;

/// Lowest temperature accepted on commit when working in Fahrenheit (°F).
///
/// Whole-degree Fahrenheit counterpart of [`CELSIUS_DISPLAY_MIN_C`].
pub const FAHRENHEIT_DISPLAY_MIN_F: f64 = 53.0;

/// Highest temperature accepted on commit when working in Fahrenheit (°F).
pub const FAHRENHEIT_DISPLAY_MAX_F: f64 = 99.0;

// ===== HUMIDITY RANGE =====

/// Lowest relative humidity accepted on commit (%).
pub const HUMIDITY_MIN_PCT: f64 = 0.0;

/// Highest relative humidity accepted on commit (%).
///
/// 100% is excluded: saturated air has zero VPD and the two-digit field
/// cannot show it.
pub const HUMIDITY_MAX_PCT: f64 = 99.0;

// ===== SLIDER SCALE =====

/// Smallest VPD the slider can express (kPa), at position 0.
pub const SLIDER_MIN_VPD_KPA: f64 = 0.01;

/// Largest VPD the slider can express (kPa), at position 100.
///
/// Roughly the VPD of 0% RH air at the 37°C display ceiling.
pub const SLIDER_MAX_VPD_KPA: f64 = 6.36;

/// Upper edge of the horticulturally useful VPD band (kPa).
pub const SLIDER_BREAKPOINT_VPD_KPA: f64 = 1.6;

/// Slider position of [`SLIDER_BREAKPOINT_VPD_KPA`].
///
/// 70% of the travel covers 0.01 - 1.6 kPa; the remaining 30% covers the
/// sparse high range.
pub const SLIDER_BREAKPOINT_POSITION: f64 = 70.0;

/// Lowest slider position.
pub const SLIDER_POSITION_MIN: f64 = 0.0;

/// Highest slider position.
pub const SLIDER_POSITION_MAX: f64 = 100.0;

/// Slider position before any VPD has been computed (midpoint of travel).
pub const SLIDER_DEFAULT_POSITION: f64 = 50.0;

// ===== TEMPERATURE SEARCH =====

/// Starting guess for the temperature search (°C).
pub const SOLVER_INITIAL_GUESS_C: f64 = 1.0;

/// Fixed step of the temperature search (°C).
///
/// Bounds the achievable precision; the search can oscillate between two
/// neighbouring steps without meeting [`SOLVER_TOLERANCE_KPA`].
pub const SOLVER_STEP_C: f64 = 0.1;

/// Acceptable distance between computed and target VPD (kPa).
pub const SOLVER_TOLERANCE_KPA: f64 = 0.001;

/// Hard cap on search iterations. Reaching it is not an error.
pub const SOLVER_MAX_ITERATIONS: u32 = 1000;

// ===== ROUNDING =====

/// Decimal places of a forward-computed VPD.
pub const VPD_DECIMALS: u32 = 3;

/// Decimal places of a slider-derived VPD.
pub const SLIDER_VPD_DECIMALS: u32 = 2;

// ===== DEFAULT SEEDS =====

/// Temperature seeded into an empty field when the slider moves (°C).
pub const DEFAULT_TEMPERATURE_C: f64 = 25.0;

/// Temperature seeded into an empty field when the slider moves (°F).
pub const DEFAULT_TEMPERATURE_F: f64 = 77.0;

// ===== ADVISORY TIMING =====

/// How long a clamping advisory stays fully visible (ms).
pub const ADVISORY_DISPLAY_MS: u64 = 1500;

/// Length of the fade-out that follows the visible period (ms).
pub const ADVISORY_FADE_MS: u64 = 300;

/// Capacity of an advisory message buffer (bytes).
pub const ADVISORY_MESSAGE_CAPACITY: usize = 64;
