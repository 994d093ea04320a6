//! State-to-color mapping.
//!
//! Rendering is split in two stages: warmth picks the hue mix ([`derive_color`])
//! and brightness is applied afterwards as a uniform shift on every channel
//! ([`Paint::resolve`]). Folding brightness into the hue mix would change the
//! visible result at partial brightness, so surfaces always receive both parts.

use crate::constants::{WARM_BLUE, WARM_GREEN, WARM_RED};
use crate::state::LightState;

/// Color with channels in the \[0, 1\] range, sRGB encoded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(1.0, 1.0, 1.0);

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    pub fn to_array(self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// 8-bit channels, rounded.
    pub fn to_u8(self) -> [u8; 3] {
        self.to_array().map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8)
    }

    /// CSS `rgb()` string for 2D canvas fills.
    pub fn to_css(self) -> String {
        let [r, g, b] = self.to_u8();
        format!("rgb({r}, {g}, {b})")
    }

    /// Decode to linear light for surfaces that expect linear input (sRGB
    /// swapchain formats).
    pub fn to_linear(self) -> Rgb {
        let [r, g, b] = self.to_array().map(srgb_to_linear);
        Rgb::new(r, g, b)
    }
}

#[inline]
fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Hue mix for a state: white at zero warmth, pale yellow at full warmth.
/// Brightness does not take part.
pub fn derive_color(state: LightState) -> Rgb {
    let cool = 1.0 - state.warmth();
    Rgb {
        r: WARM_RED + (1.0 - WARM_RED) * cool,
        g: WARM_GREEN + (1.0 - WARM_GREEN) * cool,
        b: WARM_BLUE + (1.0 - WARM_BLUE) * cool,
    }
}

/// What a surface paints: the hue mix plus the brightness shift on top.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Paint {
    pub base: Rgb,
    /// `brightness - 1.0`; zero at full brightness, negative below it.
    pub brightness_shift: f64,
}

impl Paint {
    pub fn from_state(state: LightState) -> Self {
        Self {
            base: derive_color(state),
            brightness_shift: state.brightness() - 1.0,
        }
    }

    /// Final on-screen color: the shift is added to every channel, then clamped.
    pub fn resolve(&self) -> Rgb {
        let shift = |c: f64| (c + self.brightness_shift).clamp(0.0, 1.0);
        Rgb {
            r: shift(self.base.r),
            g: shift(self.base.g),
            b: shift(self.base.b),
        }
    }
}
