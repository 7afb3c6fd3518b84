//! Calculator State and Event Reducer
//!
//! ## Model
//!
//! The whole calculator is one [`CalculatorState`] value. Every user action
//! is an [`InputEvent`], and [`update`] maps `(state, event)` to the next
//! state in one synchronous step. There is no ambient state and nothing runs
//! between events, so any sequence of events can be replayed in a test.
//!
//! ```text
//!   text edits ──┐
//!   blur/commit ─┤                    ┌─▶ forward VPD ─▶ slider position
//!   slider drag ─┼─▶ update(state) ───┼─▶ inverse solver (per lock)
//!   unit switch ─┤                    └─▶ clamp + advisory
//!   lock toggle ─┘
//! ```
//!
//! ## Event semantics
//!
//! | Event                 | Effect                                              |
//! |-----------------------|-----------------------------------------------------|
//! | `TemperatureEdited`   | store value, recompute VPD forward                  |
//! | `HumidityEdited`      | store value, recompute VPD forward                  |
//! | `TemperatureCommitted`| clamp to unit range (+ advisory), recompute forward |
//! | `HumidityCommitted`   | clamp to [0, 99] (+ advisory), recompute forward    |
//! | `SliderMoved`         | target VPD from position, solve the driven field    |
//! | `SliderReleased`      | commit the driven field, recompute, clear flags     |
//! | `UnitChanged`         | convert temperature, recompute forward              |
//! | `LockToggled`         | flip the lock                                       |
//!
//! ## Slider drags with missing input
//!
//! A drag always produces a result:
//! 1. Both fields empty: temperature is seeded with 25°C / 77°F.
//! 2. The locked field is empty but the other one is not: the lock flips so
//!    the filled field becomes the fixed one.
//!
//! After that the driven field is solved and flagged invalid when outside its
//! range. Direct edits ignore the lock entirely.

use core::fmt;

use crate::{
    advisory::{Advisory, AdvisoryTiming},
    constants::limits::{SLIDER_DEFAULT_POSITION, SLIDER_POSITION_MAX, SLIDER_POSITION_MIN},
    input::parse_field,
    lock::{Field, LockAffordance, LockState},
    psychro::compute_vpd,
    slider::SliderScale,
    solvers::{solve_humidity, solve_temperature_with, SolverConfig},
    time::Timestamp,
    units::{convert_temperature, TemperatureUnit},
    validation::{is_humidity_valid, is_temperature_valid, FieldValidator, HumidityField, TemperatureField},
};

/// Tunable parameters of the calculator
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    /// Temperature search parameters
    pub solver: SolverConfig,
    /// Slider scale
    pub slider: SliderScale,
    /// Advisory display and fade durations
    pub advisory: AdvisoryTiming,
}

/// One user action
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InputEvent {
    /// Temperature text changed; `None` when the text holds no number
    TemperatureEdited(Option<f64>),
    /// Humidity text changed; `None` when the text holds no number
    HumidityEdited(Option<f64>),
    /// Temperature field lost focus or was otherwise finalized
    TemperatureCommitted,
    /// Humidity field lost focus or was otherwise finalized
    HumidityCommitted,
    /// Slider dragged to a position in [0, 100]
    SliderMoved(f64),
    /// Slider let go
    SliderReleased,
    /// Unit selection changed
    UnitChanged(TemperatureUnit),
    /// A lock icon was clicked
    LockToggled(LockAffordance),
}

impl InputEvent {
    /// Temperature edit from raw field text
    pub fn temperature_text(text: &str) -> Self {
        Self::TemperatureEdited(parse_field(text))
    }

    /// Humidity edit from raw field text
    pub fn humidity_text(text: &str) -> Self {
        Self::HumidityEdited(parse_field(text))
    }
}

/// Complete calculator state
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalculatorState {
    /// Selected temperature unit
    pub unit: TemperatureUnit,
    /// Which field the slider leaves alone
    pub lock: LockState,
    /// Temperature in `unit`, `None` when the field is empty
    pub temperature: Option<f64>,
    /// Relative humidity (%), `None` when the field is empty
    pub humidity: Option<f64>,
    /// Current VPD (kPa), `None` while either input is missing
    pub vpd: Option<f64>,
    /// Slider position in [0, 100]
    pub slider_position: f64,
    /// Temperature was derived outside its range by the last drag
    pub temperature_invalid: bool,
    /// Humidity was derived outside its range by the last drag
    pub humidity_invalid: bool,
    /// Latest clamping notice for the temperature field
    pub temperature_advisory: Option<Advisory>,
    /// Latest clamping notice for the humidity field
    pub humidity_advisory: Option<Advisory>,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            unit: TemperatureUnit::default(),
            lock: LockState::default(),
            temperature: None,
            humidity: None,
            vpd: None,
            slider_position: SLIDER_DEFAULT_POSITION,
            temperature_invalid: false,
            humidity_invalid: false,
            temperature_advisory: None,
            humidity_advisory: None,
        }
    }
}

/// Compute the state that follows `event`
pub fn update(
    state: CalculatorState,
    event: InputEvent,
    now: Timestamp,
    config: &EngineConfig,
) -> CalculatorState {
    state.apply_with(event, now, config)
}

impl CalculatorState {
    /// Empty calculator in `unit`
    pub fn new(unit: TemperatureUnit) -> Self {
        Self { unit, ..Self::default() }
    }

    /// Apply an event with the default configuration
    pub fn apply(self, event: InputEvent, now: Timestamp) -> Self {
        self.apply_with(event, now, &EngineConfig::default())
    }

    /// Apply an event with a custom configuration
    pub fn apply_with(mut self, event: InputEvent, now: Timestamp, config: &EngineConfig) -> Self {
        match event {
            InputEvent::TemperatureEdited(value) => {
                self.temperature = value;
                self.refresh_vpd(config);
            }
            InputEvent::HumidityEdited(value) => {
                self.humidity = value;
                self.refresh_vpd(config);
            }
            InputEvent::TemperatureCommitted => {
                self.commit(Field::Temperature, now, config);
                self.refresh_vpd(config);
            }
            InputEvent::HumidityCommitted => {
                self.commit(Field::Humidity, now, config);
                self.refresh_vpd(config);
            }
            InputEvent::SliderMoved(position) => self.drag_slider(position, config),
            InputEvent::SliderReleased => {
                self.commit(self.lock.driven_field(), now, config);
                self.refresh_vpd(config);
                self.temperature_invalid = false;
                self.humidity_invalid = false;
            }
            InputEvent::UnitChanged(unit) => self.switch_unit(unit, config),
            InputEvent::LockToggled(affordance) => {
                self.lock = self.lock.on_toggle(affordance);
            }
        }
        self
    }

    /// Current value of a field
    pub fn value(&self, field: Field) -> Option<f64> {
        match field {
            Field::Temperature => self.temperature,
            Field::Humidity => self.humidity,
        }
    }

    /// Whether a field is flagged invalid
    pub fn is_invalid(&self, field: Field) -> bool {
        match field {
            Field::Temperature => self.temperature_invalid,
            Field::Humidity => self.humidity_invalid,
        }
    }

    /// Advisory text for a field if it is still on screen at `now`
    pub fn visible_advisory(&self, field: Field, now: Timestamp) -> Option<&str> {
        let advisory = match field {
            Field::Temperature => self.temperature_advisory.as_ref(),
            Field::Humidity => self.humidity_advisory.as_ref(),
        };
        advisory
            .filter(|advisory| advisory.is_visible(now))
            .map(Advisory::message)
    }

    /// VPD label for display (`VPD: 1.584` or `VPD: -`)
    pub fn vpd_label(&self) -> VpdLabel {
        VpdLabel(self.vpd)
    }

    fn refresh_vpd(&mut self, config: &EngineConfig) {
        match (self.temperature, self.humidity) {
            (Some(temperature), Some(humidity)) => {
                let vpd = compute_vpd(temperature, self.unit, humidity);
                self.vpd = Some(vpd);
                self.slider_position = config.slider.to_position(vpd);
            }
            _ => self.vpd = None,
        }
    }

    fn commit(&mut self, field: Field, now: Timestamp, config: &EngineConfig) {
        let Some(value) = self.value(field) else {
            return;
        };
        let clamped = match field {
            Field::Temperature => TemperatureField::new(self.unit).clamp(value),
            Field::Humidity => HumidityField.clamp(value),
        };
        let advisory = clamped.violated.map(|bound| {
            log_debug!("Clamped {:?} {} to {} bound {}", field, value, bound.name(), clamped.value);
            Advisory::clamped(field, self.unit, bound, clamped.value, now, config.advisory)
        });
        match field {
            Field::Temperature => {
                self.temperature = Some(clamped.value);
                self.temperature_advisory = advisory;
            }
            Field::Humidity => {
                self.humidity = Some(clamped.value);
                self.humidity_advisory = advisory;
            }
        }
    }

    fn drag_slider(&mut self, position: f64, config: &EngineConfig) {
        if position.is_nan() {
            return;
        }
        let target = config.slider.to_vpd(position);
        self.slider_position = position.clamp(SLIDER_POSITION_MIN, SLIDER_POSITION_MAX);

        if self.temperature.is_none() && self.humidity.is_none() {
            self.temperature = Some(self.unit.default_temperature());
        }
        if self.value(self.lock.locked_field()).is_none() {
            log_debug!("Locked field {:?} is empty, flipping lock", self.lock.locked_field());
            self.lock = self.lock.toggled();
        }

        match self.lock {
            LockState::TemperatureLocked => {
                if let Some(temperature) = self.temperature {
                    let humidity = solve_humidity(temperature, self.unit, target);
                    self.humidity = Some(humidity);
                    self.humidity_invalid = !is_humidity_valid(humidity);
                }
            }
            LockState::HumidityLocked => {
                if let Some(humidity) = self.humidity {
                    let temperature = solve_temperature_with(humidity, self.unit, target, &config.solver);
                    self.temperature = Some(temperature);
                    self.temperature_invalid = !is_temperature_valid(temperature, self.unit);
                }
            }
        }

        self.vpd = Some(target);
    }

    fn switch_unit(&mut self, unit: TemperatureUnit, config: &EngineConfig) {
        if unit == self.unit {
            return;
        }
        log_debug!("Switching unit {} -> {}", self.unit, unit);
        self.temperature = self
            .temperature
            .map(|temperature| convert_temperature(temperature, self.unit, unit));
        self.unit = unit;
        self.refresh_vpd(config);
    }
}

/// Display form of the current VPD
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VpdLabel(pub Option<f64>);

impl fmt::Display for VpdLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(vpd) => write!(f, "VPD: {}", vpd),
            None => f.write_str("VPD: -"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(temperature: f64, humidity: f64) -> CalculatorState {
        CalculatorState::default()
            .apply(InputEvent::TemperatureEdited(Some(temperature)), 0)
            .apply(InputEvent::HumidityEdited(Some(humidity)), 0)
    }

    #[test]
    fn starts_empty_and_temperature_locked() {
        let state = CalculatorState::default();
        assert_eq!(state.lock, LockState::TemperatureLocked);
        assert_eq!(state.unit, TemperatureUnit::Fahrenheit);
        assert_eq!(state.vpd, None);
        assert_eq!(state.vpd_label().to_string(), "VPD: -");
    }

    #[test]
    fn edits_compute_forward() {
        let state = filled(77.0, 50.0);
        assert_eq!(state.vpd, Some(1.584));
        assert_eq!(state.vpd_label().to_string(), "VPD: 1.584");
        assert!((state.slider_position - 69.3).abs() < 0.1);
    }

    #[test]
    fn clearing_a_field_blanks_vpd() {
        let state = filled(77.0, 50.0).apply(InputEvent::humidity_text(""), 0);
        assert_eq!(state.humidity, None);
        assert_eq!(state.vpd, None);
    }

    #[test]
    fn drag_solves_humidity_when_temperature_locked() {
        let state = filled(77.0, 50.0).apply(InputEvent::SliderMoved(43.59), 0);
        assert_eq!(state.vpd, Some(1.0));
        assert_eq!(state.temperature, Some(77.0));
        assert_eq!(state.humidity, Some(68.0));
        assert!(!state.humidity_invalid);
    }

    #[test]
    fn drag_solves_temperature_when_humidity_locked() {
        let state = filled(77.0, 50.0)
            .apply(InputEvent::LockToggled(LockAffordance::HumidityIcon), 0)
            .apply(InputEvent::SliderMoved(69.7), 0);
        assert_eq!(state.lock, LockState::HumidityLocked);
        assert_eq!(state.humidity, Some(50.0));
        let temperature = state.temperature.unwrap_or_default();
        assert!((temperature - 77.0).abs() <= 1.0);
    }

    #[test]
    fn drag_with_empty_fields_seeds_temperature() {
        let state = CalculatorState::default().apply(InputEvent::SliderMoved(43.59), 0);
        assert_eq!(state.temperature, Some(77.0));
        assert_eq!(state.humidity, Some(68.0));
        assert_eq!(state.lock, LockState::TemperatureLocked);
    }

    #[test]
    fn drag_with_empty_fields_in_celsius_seeds_25() {
        let state = CalculatorState::new(TemperatureUnit::Celsius)
            .apply(InputEvent::LockToggled(LockAffordance::TemperatureIcon), 0)
            .apply(InputEvent::SliderMoved(43.59), 0);
        assert_eq!(state.temperature, Some(25.0));
        assert!(state.humidity.is_some());
        assert_eq!(state.lock, LockState::TemperatureLocked);
    }

    #[test]
    fn drag_flips_lock_when_temperature_missing() {
        let state = CalculatorState::default()
            .apply(InputEvent::HumidityEdited(Some(60.0)), 0)
            .apply(InputEvent::SliderMoved(35.0), 0);
        assert_eq!(state.lock, LockState::HumidityLocked);
        assert_eq!(state.humidity, Some(60.0));
        assert!(state.temperature.is_some());
    }

    #[test]
    fn drag_flags_unreachable_humidity() {
        // 6.36 kPa at 77°F needs negative humidity
        let state = filled(77.0, 50.0).apply(InputEvent::SliderMoved(100.0), 0);
        assert!(state.humidity.unwrap_or_default() < 0.0);
        assert!(state.humidity_invalid);

        let released = state.apply(InputEvent::SliderReleased, 10);
        assert_eq!(released.humidity, Some(0.0));
        assert!(!released.humidity_invalid);
        assert_eq!(released.vpd, Some(compute_vpd(77.0, TemperatureUnit::Fahrenheit, 0.0)));
        assert_eq!(
            released.visible_advisory(Field::Humidity, 10),
            Some("0% is the minimum humidity value")
        );
    }

    #[test]
    fn commit_clamps_temperature_with_advisory() {
        let state = CalculatorState::default()
            .apply(InputEvent::temperature_text("40"), 0)
            .apply(InputEvent::TemperatureCommitted, 1000);
        assert_eq!(state.temperature, Some(53.0));
        assert_eq!(
            state.visible_advisory(Field::Temperature, 1200),
            Some("53°F is the minimum temperature value")
        );
        assert_eq!(state.visible_advisory(Field::Temperature, 3000), None);

        let fixed = state
            .apply(InputEvent::temperature_text("70"), 1300)
            .apply(InputEvent::TemperatureCommitted, 1300);
        assert!(fixed.temperature_advisory.is_none());
    }

    #[test]
    fn nan_slider_position_is_ignored() {
        let state = filled(77.0, 50.0);
        assert_eq!(state.clone().apply(InputEvent::SliderMoved(f64::NAN), 0), state);
    }

    #[test]
    fn commit_of_empty_field_is_noop() {
        let state = CalculatorState::default().apply(InputEvent::HumidityCommitted, 0);
        assert_eq!(state, CalculatorState::default());
    }

    #[test]
    fn unit_switch_converts_temperature() {
        let state = filled(77.0, 50.0).apply(InputEvent::UnitChanged(TemperatureUnit::Celsius), 0);
        assert_eq!(state.unit, TemperatureUnit::Celsius);
        assert_eq!(state.temperature, Some(25.0));
        assert_eq!(state.vpd, Some(1.584));

        let same = state.clone().apply(InputEvent::UnitChanged(TemperatureUnit::Celsius), 0);
        assert_eq!(same, state);
    }

    #[test]
    fn edits_ignore_lock() {
        let locked = filled(77.0, 50.0).apply(InputEvent::LockToggled(LockAffordance::TemperatureIcon), 0);
        let edited = locked.apply(InputEvent::HumidityEdited(Some(60.0)), 0);
        assert_eq!(edited.temperature, Some(77.0));
        assert_eq!(edited.vpd, Some(compute_vpd(77.0, TemperatureUnit::Fahrenheit, 60.0)));
    }
}
