//! Event dispatch shell
//!
//! [`Calculator`] owns a [`CalculatorState`], an [`EngineConfig`] and a clock,
//! and feeds events through [`update`]. It is the piece a UI binds to: one
//! call per DOM/widget event, then read the fields back out.
//!
//! ```rust
//! use vpd_core::{Calculator, InputEvent, FixedTime};
//!
//! let mut calc = Calculator::new(FixedTime::new(0));
//! calc.handle(InputEvent::temperature_text("77"));
//! calc.handle(InputEvent::humidity_text("50"));
//! assert_eq!(calc.state().vpd_label().to_string(), "VPD: 1.584");
//! ```

use crate::{
    lock::{Field, LockState},
    state::{update, CalculatorState, EngineConfig, InputEvent},
    time::TimeSource,
    units::TemperatureUnit,
};

/// Calculator bound to a clock
#[derive(Debug, Clone)]
pub struct Calculator<T: TimeSource> {
    state: CalculatorState,
    config: EngineConfig,
    clock: T,
}

impl<T: TimeSource> Calculator<T> {
    /// Empty calculator with the default configuration
    pub fn new(clock: T) -> Self {
        Self::with_config(clock, EngineConfig::default())
    }

    /// Empty calculator with a custom configuration
    pub fn with_config(clock: T, config: EngineConfig) -> Self {
        Self {
            state: CalculatorState::default(),
            config,
            clock,
        }
    }

    /// Start from an existing state
    pub fn with_state(mut self, state: CalculatorState) -> Self {
        self.state = state;
        self
    }

    /// Process one event
    pub fn handle(&mut self, event: InputEvent) -> &CalculatorState {
        let now = self.clock.now();
        let state = core::mem::take(&mut self.state);
        self.state = update(state, event, now, &self.config);
        &self.state
    }

    /// Flip the lock and return the new state of it
    pub fn toggle_lock(&mut self) -> LockState {
        self.state.lock = self.state.lock.toggled();
        self.state.lock
    }

    /// Switch units
    pub fn set_unit(&mut self, unit: TemperatureUnit) -> &CalculatorState {
        self.handle(InputEvent::UnitChanged(unit))
    }

    /// Advisory for `field` if still visible now
    pub fn advisory(&self, field: Field) -> Option<&str> {
        self.state.visible_advisory(field, self.clock.now())
    }

    /// Current state
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Active configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Clock, mutable so tests can advance it
    pub fn clock_mut(&mut self) -> &mut T {
        &mut self.clock
    }

    /// Give up the clock and return the state
    pub fn into_state(self) -> CalculatorState {
        self.state
    }
}
