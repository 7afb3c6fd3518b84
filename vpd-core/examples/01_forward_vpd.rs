//! Forward and Inverse VPD Example
//!
//! Computes VPD for a few greenhouse conditions, then solves back for the
//! humidity and temperature that would produce each one.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_forward_vpd
//! ```

use vpd_core::{
    compute_vpd, saturation_vapor_pressure, search_temperature, solve_humidity,
    SolverConfig, TemperatureUnit,
};

fn main() {
    println!("VPD Forward / Inverse Example");
    println!("=============================\n");

    let conditions = [
        (68.0, TemperatureUnit::Fahrenheit, 70.0, "seedling"),
        (77.0, TemperatureUnit::Fahrenheit, 60.0, "vegetative"),
        (26.0, TemperatureUnit::Celsius, 50.0, "flower"),
        (24.0, TemperatureUnit::Celsius, 45.0, "late flower"),
    ];

    for (temperature, unit, humidity, stage) in conditions {
        let temp_c = unit.to_celsius(temperature);
        let vpd = compute_vpd(temperature, unit, humidity);

        println!("{stage}:");
        println!("  {temperature}{unit} / {humidity}% RH");
        println!("  SVP: {:.3} kPa", saturation_vapor_pressure(temp_c));
        println!("  VPD: {vpd} kPa");

        let rh = solve_humidity(temperature, unit, vpd);
        println!("  Humidity for {vpd} kPa at {temperature}{unit}: {rh}%");

        let search = search_temperature(humidity, vpd, &SolverConfig::default());
        println!(
            "  Temperature for {vpd} kPa at {humidity}% RH: {}{unit} ({} iterations, {})",
            search.rounded(unit),
            search.iterations,
            if search.converged { "converged" } else { "stopped at cap" },
        );
        println!();
    }
}
