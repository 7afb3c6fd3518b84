//! Slider Position <-> VPD Mapping
//!
//! The VPD slider is a linear control over positions 0 - 100, but the useful
//! VPD band is narrow. The scale is two linear segments joined at a
//! breakpoint:
//!
//! ```text
//! position   0 ──────────────────── 70 ────────── 100
//! VPD (kPa)  0.01 ───────────────── 1.6 ───────── 6.36
//!            |<-- 70% of travel -->|<--- 30% --->|
//! ```
//!
//! 0.01 - 1.6 kPa is where nearly every crop lives, so it gets 70% of the
//! travel. 1.6 - 6.36 kPa only matters for showing how far off a setting is.
//!
//! The scale is independent of the temperature unit.
//!
//! Positions are clamped to [0, 100] before mapping and derived positions are
//! clamped into the same range, matching a bounded range control. Slider VPDs
//! are rounded to 2 decimals; derived positions are left unrounded.

use crate::{
    constants::limits::{
        SLIDER_BREAKPOINT_POSITION, SLIDER_BREAKPOINT_VPD_KPA, SLIDER_MAX_VPD_KPA,
        SLIDER_MIN_VPD_KPA, SLIDER_POSITION_MAX, SLIDER_POSITION_MIN, SLIDER_VPD_DECIMALS,
    },
    utils::round_to,
};

/// Piecewise-linear slider scale
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SliderScale {
    /// VPD at position 0 (kPa)
    pub min_vpd: f64,
    /// VPD at position 100 (kPa)
    pub max_vpd: f64,
    /// VPD where the dense segment ends (kPa)
    pub breakpoint_vpd: f64,
    /// Position of the breakpoint
    pub breakpoint_position: f64,
}

impl Default for SliderScale {
    fn default() -> Self {
        Self {
            min_vpd: SLIDER_MIN_VPD_KPA,
            max_vpd: SLIDER_MAX_VPD_KPA,
            breakpoint_vpd: SLIDER_BREAKPOINT_VPD_KPA,
            breakpoint_position: SLIDER_BREAKPOINT_POSITION,
        }
    }
}

impl SliderScale {
    fn lower_span(&self) -> f64 {
        self.breakpoint_vpd - self.min_vpd
    }

    fn upper_span(&self) -> f64 {
        self.max_vpd - self.breakpoint_vpd
    }

    fn upper_travel(&self) -> f64 {
        SLIDER_POSITION_MAX - self.breakpoint_position
    }

    /// VPD (kPa, 2 decimals) at a slider position
    pub fn to_vpd(&self, position: f64) -> f64 {
        let position = if position.is_nan() {
            SLIDER_POSITION_MIN
        } else {
            position.clamp(SLIDER_POSITION_MIN, SLIDER_POSITION_MAX)
        };
        let vpd = if position <= self.breakpoint_position {
            self.min_vpd + (position / self.breakpoint_position) * self.lower_span()
        } else {
            let past_breakpoint = position - self.breakpoint_position;
            self.breakpoint_vpd + (past_breakpoint / self.upper_travel()) * self.upper_span()
        };
        round_to(vpd, SLIDER_VPD_DECIMALS)
    }

    /// Slider position for a VPD (kPa), unrounded
    ///
    /// The lower segment is offset by `min_vpd` in position units, so a VPD of
    /// exactly 1.6 maps to 70.01. [`to_vpd`](Self::to_vpd) still rounds that
    /// back to 1.6.
    pub fn to_position(&self, vpd: f64) -> f64 {
        let position = if vpd <= self.breakpoint_vpd {
            self.min_vpd + ((vpd - self.min_vpd) / self.lower_span()) * self.breakpoint_position
        } else {
            self.breakpoint_position + ((vpd - self.breakpoint_vpd) / self.upper_span()) * self.upper_travel()
        };
        if position.is_nan() {
            return SLIDER_POSITION_MIN;
        }
        position.clamp(SLIDER_POSITION_MIN, SLIDER_POSITION_MAX)
    }
}

/// VPD at a slider position using the default scale
pub fn slider_position_to_vpd(position: f64) -> f64 {
    SliderScale::default().to_vpd(position)
}

/// Slider position for a VPD using the default scale
pub fn vpd_to_slider_position(vpd: f64) -> f64 {
    SliderScale::default().to_position(vpd)
}
