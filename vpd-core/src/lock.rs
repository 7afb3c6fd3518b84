//! Lock state: which input the VPD slider is allowed to overwrite
//!
//! Exactly one of temperature and humidity is held fixed while the slider
//! moves. The other is derived by the matching inverse solver.
//!
//! ```text
//!            toggle (either icon)
//!   ┌──────────────────┐ ───────────▶ ┌───────────────┐
//!   │ TemperatureLocked│              │ HumidityLocked│
//!   └──────────────────┘ ◀─────────── └───────────────┘
//!            toggle (either icon)
//! ```
//!
//! Direct edits to either field always recompute VPD forward; the lock only
//! matters for slider drags.

/// Which input is held fixed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LockState {
    /// Temperature fixed, slider derives humidity
    #[default]
    TemperatureLocked,
    /// Humidity fixed, slider derives temperature
    HumidityLocked,
}

/// Input field of the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Field {
    /// Air temperature
    Temperature,
    /// Relative humidity
    Humidity,
}

/// Lock icon the user clicked
///
/// Both icons flip the same state; the distinction is kept for hosts that
/// animate the clicked icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LockAffordance {
    /// Icon beside the temperature field
    TemperatureIcon,
    /// Icon beside the humidity field
    HumidityIcon,
}

impl LockState {
    /// The other state
    pub fn toggled(self) -> Self {
        match self {
            Self::TemperatureLocked => Self::HumidityLocked,
            Self::HumidityLocked => Self::TemperatureLocked,
        }
    }

    /// Field held fixed while the slider moves
    pub fn locked_field(self) -> Field {
        match self {
            Self::TemperatureLocked => Field::Temperature,
            Self::HumidityLocked => Field::Humidity,
        }
    }

    /// Field the slider writes
    pub fn driven_field(self) -> Field {
        match self {
            Self::TemperatureLocked => Field::Humidity,
            Self::HumidityLocked => Field::Temperature,
        }
    }

    /// State reached by clicking either lock icon
    pub fn on_toggle(self, _affordance: LockAffordance) -> Self {
        self.toggled()
    }
}

/// Flip the lock
pub fn toggle_lock(state: LockState) -> LockState {
    state.toggled()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_temperature_locked() {
        assert_eq!(LockState::default(), LockState::TemperatureLocked);
        assert_eq!(LockState::default().driven_field(), Field::Humidity);
    }

    #[test]
    fn toggle_is_an_involution() {
        let state = LockState::TemperatureLocked;
        assert_eq!(toggle_lock(state), LockState::HumidityLocked);
        assert_eq!(toggle_lock(toggle_lock(state)), state);
    }

    #[test]
    fn both_icons_toggle_the_same_state() {
        let state = LockState::HumidityLocked;
        assert_eq!(
            state.on_toggle(LockAffordance::TemperatureIcon),
            state.on_toggle(LockAffordance::HumidityIcon),
        );
    }

    #[test]
    fn locked_and_driven_fields_differ() {
        for state in [LockState::TemperatureLocked, LockState::HumidityLocked] {
            assert_ne!(state.locked_field(), state.driven_field());
        }
    }
}
