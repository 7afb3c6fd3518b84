//! Shared fixtures for integration tests
//!
//! - Reference conditions with independently computed VPDs
//! - Approximate-equality assertion helper
//! - A bisection solver used as the analytic reference for the
//!   fixed-step temperature search

#![allow(dead_code)]

use vpd_core::{saturation_vapor_pressure, TemperatureUnit};

/// One reference condition
pub struct Condition {
    pub name: &'static str,
    pub temperature: f64,
    pub unit: TemperatureUnit,
    pub humidity: f64,
    pub expected_vpd: f64,
}

/// Greenhouse conditions across the growth stages, VPDs from the Tetens
/// equation evaluated at full precision
pub fn reference_conditions() -> Vec<Condition> {
    vec![
        Condition {
            name: "room_77f_50pct",
            temperature: 77.0,
            unit: TemperatureUnit::Fahrenheit,
            humidity: 50.0,
            expected_vpd: 1.584,
        },
        Condition {
            name: "room_25c_50pct",
            temperature: 25.0,
            unit: TemperatureUnit::Celsius,
            humidity: 50.0,
            expected_vpd: 1.584,
        },
        Condition {
            name: "seedling_20c_70pct",
            temperature: 20.0,
            unit: TemperatureUnit::Celsius,
            humidity: 70.0,
            expected_vpd: 0.701,
        },
        Condition {
            name: "flower_80f_55pct",
            temperature: 80.0,
            unit: TemperatureUnit::Fahrenheit,
            humidity: 55.0,
            expected_vpd: 1.573,
        },
        Condition {
            name: "saturated",
            temperature: 30.0,
            unit: TemperatureUnit::Celsius,
            humidity: 100.0,
            expected_vpd: 0.0,
        },
    ]
}

/// Assert two values differ by at most `tolerance`
pub fn assert_close(actual: f64, expected: f64, tolerance: f64, what: &str) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "{what}: expected {expected} ± {tolerance}, got {actual}"
    );
}

/// Celsius temperature with `(1 - rh/100) × svp(t) == vpd`, by bisection
pub fn reference_temperature_c(rh_percent: f64, vpd: f64) -> f64 {
    let deficit = |t: f64| (1.0 - rh_percent / 100.0) * saturation_vapor_pressure(t) - vpd;
    let (mut lo, mut hi) = (-40.0_f64, 80.0_f64);
    for _ in 0..200 {
        let mid = 0.5 * (lo + hi);
        if deficit(mid) < 0.0 {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    0.5 * (lo + hi)
}
