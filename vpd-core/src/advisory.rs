//! Transient advisory messages
//!
//! When a committed value is clamped the user gets a short message such as
//! `53°F is the minimum temperature value`. It is shown for 1.5 s, fades for
//! 0.3 s, then disappears. Raising a new advisory on the same field replaces
//! the old one; committing an in-range value hides it immediately.
//!
//! An [`Advisory`] is plain data. Visibility is a function of the time it was
//! raised and the time the host asks, so nothing needs to be scheduled.

use core::fmt::Write;

use heapless::String;

use crate::{
    constants::limits::{ADVISORY_DISPLAY_MS, ADVISORY_FADE_MS, ADVISORY_MESSAGE_CAPACITY},
    lock::Field,
    time::Timestamp,
    units::TemperatureUnit,
    validation::Bound,
};

/// Advisory text buffer
pub type AdvisoryText = String<ADVISORY_MESSAGE_CAPACITY>;

/// Visibility phase of an advisory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Visibility {
    /// Fully shown
    Shown,
    /// Fading out
    Fading,
    /// Gone
    Hidden,
}

/// Display and fade durations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdvisoryTiming {
    /// Time fully shown (ms)
    pub display_ms: u64,
    /// Fade-out after the shown period (ms)
    pub fade_ms: u64,
}

impl Default for AdvisoryTiming {
    fn default() -> Self {
        Self {
            display_ms: ADVISORY_DISPLAY_MS,
            fade_ms: ADVISORY_FADE_MS,
        }
    }
}

/// A clamping notice attached to one field
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Advisory {
    message: AdvisoryText,
    raised_at: Timestamp,
    timing: AdvisoryTiming,
}

impl Advisory {
    /// Advisory for a value clamped to `bound_value`
    pub fn clamped(
        field: Field,
        unit: TemperatureUnit,
        bound: Bound,
        bound_value: f64,
        raised_at: Timestamp,
        timing: AdvisoryTiming,
    ) -> Self {
        let mut message = AdvisoryText::new();
        let written = match field {
            Field::Temperature => write!(
                message,
                "{}{} is the {} temperature value",
                bound_value,
                unit.symbol(),
                bound.name()
            ),
            Field::Humidity => write!(
                message,
                "{}% is the {} humidity value",
                bound_value,
                bound.name()
            ),
        };
        if written.is_err() {
            log_warn!(
                "advisory text truncated to {} bytes: {}",
                ADVISORY_MESSAGE_CAPACITY,
                message.as_str()
            );
        }
        debug_assert!(written.is_ok(), "advisory text overflows its buffer");
        Self { message, raised_at, timing }
    }

    /// Message text
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// When the advisory was raised
    pub fn raised_at(&self) -> Timestamp {
        self.raised_at
    }

    /// Visibility at `now`
    pub fn visibility(&self, now: Timestamp) -> Visibility {
        let elapsed = now.saturating_sub(self.raised_at);
        if elapsed < self.timing.display_ms {
            Visibility::Shown
        } else if elapsed < self.timing.display_ms + self.timing.fade_ms {
            Visibility::Fading
        } else {
            Visibility::Hidden
        }
    }

    /// Whether any part of the advisory is still on screen at `now`
    pub fn is_visible(&self, now: Timestamp) -> bool {
        self.visibility(now) != Visibility::Hidden
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn min_temp_advisory(at: Timestamp) -> Advisory {
        Advisory::clamped(
            Field::Temperature,
            TemperatureUnit::Fahrenheit,
            Bound::Minimum,
            53.0,
            at,
            AdvisoryTiming::default(),
        )
    }

    #[test]
    fn temperature_message() {
        assert_eq!(min_temp_advisory(0).message(), "53°F is the minimum temperature value");
    }

    #[test]
    fn humidity_message() {
        let advisory = Advisory::clamped(
            Field::Humidity,
            TemperatureUnit::Celsius,
            Bound::Maximum,
            99.0,
            0,
            AdvisoryTiming::default(),
        );
        assert_eq!(advisory.message(), "99% is the maximum humidity value");
    }

    #[test]
    fn visibility_phases() {
        let advisory = min_temp_advisory(1000);
        assert_eq!(advisory.visibility(1000), Visibility::Shown);
        assert_eq!(advisory.visibility(2499), Visibility::Shown);
        assert_eq!(advisory.visibility(2500), Visibility::Fading);
        assert_eq!(advisory.visibility(2799), Visibility::Fading);
        assert_eq!(advisory.visibility(2800), Visibility::Hidden);
        assert!(!advisory.is_visible(5000));
    }

    #[test]
    fn every_display_bound_fits_the_buffer() {
        for unit in [TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit] {
            let (min, max) = unit.display_range();
            for (bound, value) in [(Bound::Minimum, min), (Bound::Maximum, max)] {
                let advisory = Advisory::clamped(
                    Field::Temperature,
                    unit,
                    bound,
                    value,
                    0,
                    AdvisoryTiming::default(),
                );
                assert!(advisory.message().ends_with("temperature value"));
            }
        }
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "advisory text overflows its buffer")]
    fn oversized_message_is_not_silently_truncated() {
        Advisory::clamped(
            Field::Humidity,
            TemperatureUnit::Celsius,
            Bound::Maximum,
            f64::MAX,
            0,
            AdvisoryTiming::default(),
        );
    }

    #[test]
    fn clock_before_raise_counts_as_shown() {
        assert_eq!(min_temp_advisory(1000).visibility(10), Visibility::Shown);
    }
}
