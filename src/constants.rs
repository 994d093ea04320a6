// Web front-end constants: element ids of the host page and keyboard tuning.
// Host page elements
pub const CANVAS_ID: &str = "app-canvas";
pub const HINT_ID: &str = "hint";
pub const READOUT_BRIGHTNESS_ID: &str = "readout-brightness";
pub const READOUT_WARMTH_ID: &str = "readout-warmth";
pub const INFO_PANEL_ID: &str = "info-panel";
pub const INFO_BUTTON_ID: &str = "info-button";
pub const INFO_CLOSE_ID: &str = "info-close";

// Keyboard nudges act like a drag of this many CSS pixels (5% per press at the default sensitivity)
pub const KEY_NUDGE_PX: f64 = 30.0;
