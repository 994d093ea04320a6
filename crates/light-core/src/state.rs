//! Light state and the gesture-to-state mapping.
//!
//! Everything here is pure: the frontends own a [`LightState`], feed it
//! [`GestureSample`]s as the pointer moves and hand the result to a surface.

use crate::constants::*;
use crate::gesture::{Axis, GestureSample};

/// Brightness and warmth of the light, both kept inside their ranges.
///
/// Fields are private so a state can only be produced through [`LightState::new`]
/// or [`apply_gesture`], both of which clamp.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightState {
    brightness: f64,
    warmth: f64,
}

impl Default for LightState {
    fn default() -> Self {
        Self {
            brightness: DEFAULT_BRIGHTNESS,
            warmth: DEFAULT_WARMTH,
        }
    }
}

impl LightState {
    /// Build a state, clamping both values. NaN falls back to the default.
    pub fn new(brightness: f64, warmth: f64) -> Self {
        let brightness = if brightness.is_nan() {
            DEFAULT_BRIGHTNESS
        } else {
            clamp_brightness(brightness)
        };
        let warmth = if warmth.is_nan() {
            DEFAULT_WARMTH
        } else {
            clamp_warmth(warmth)
        };
        Self { brightness, warmth }
    }

    /// Normalized brightness in \[0.1, 1.0\].
    pub fn brightness(&self) -> f64 {
        self.brightness
    }

    /// Normalized warmth in \[0.0, 1.0\].
    pub fn warmth(&self) -> f64 {
        self.warmth
    }

    pub fn readout(&self) -> Readout {
        Readout {
            brightness_percent: percent(self.brightness),
            warmth_percent: percent(self.warmth),
        }
    }
}

/// Whole-number percentages shown in the instruction overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Readout {
    pub brightness_percent: u32,
    pub warmth_percent: u32,
}

// Truncates, so 0.999 reads as 99%
#[inline]
fn percent(value: f64) -> u32 {
    (value * 100.0) as u32
}

#[inline]
fn clamp_brightness(value: f64) -> f64 {
    value.clamp(BRIGHTNESS_MIN, BRIGHTNESS_MAX)
}

#[inline]
fn clamp_warmth(value: f64) -> f64 {
    value.clamp(WARMTH_MIN, WARMTH_MAX)
}

/// Apply one drag sample using the default [`SENSITIVITY`].
pub fn apply_gesture(state: LightState, sample: GestureSample) -> LightState {
    apply_gesture_with(state, sample, SENSITIVITY)
}

/// Apply one drag sample.
///
/// The dominant axis of the sample picks the parameter: a vertical drag moves
/// brightness (up is brighter), a horizontal drag moves warmth (right is
/// warmer). Only one parameter changes per call. The sample is the translation
/// accumulated since the drag began, not a per-frame delta.
///
/// Non-finite samples and a non-positive sensitivity leave the state unchanged.
pub fn apply_gesture_with(state: LightState, sample: GestureSample, sensitivity: f64) -> LightState {
    if !sample.is_finite() || !(sensitivity.is_finite() && sensitivity > 0.0) {
        return state;
    }
    match sample.dominant_axis() {
        Axis::Vertical => LightState {
            brightness: clamp_brightness(state.brightness - sample.dy / sensitivity),
            ..state
        },
        Axis::Horizontal => LightState {
            warmth: clamp_warmth(state.warmth + sample.dx / sensitivity),
            ..state
        },
    }
}
