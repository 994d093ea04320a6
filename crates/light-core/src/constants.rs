// Shared light tuning constants used by both web and native frontends.

// Gesture mapping
pub const SENSITIVITY: f64 = 600.0; // drag distance for a full 0..1 swing

// Value ranges (the brightness floor keeps the screen from going fully dark)
pub const BRIGHTNESS_MIN: f64 = 0.1;
pub const BRIGHTNESS_MAX: f64 = 1.0;
pub const WARMTH_MIN: f64 = 0.0;
pub const WARMTH_MAX: f64 = 1.0;

// Session defaults
pub const DEFAULT_BRIGHTNESS: f64 = 1.0;
pub const DEFAULT_WARMTH: f64 = 0.0;

// Base color at full warmth (pale yellow); zero warmth is pure white
pub const WARM_RED: f64 = 1.0;
pub const WARM_GREEN: f64 = 0.95;
pub const WARM_BLUE: f64 = 0.8;
