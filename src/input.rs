use crate::constants::KEY_NUDGE_PX;
use glam::DVec2;
use light_core::{DragTracker, GestureSample};
use web_sys as web;

// ---------------- Pointer helpers ----------------

/// Pointer position in CSS pixels. Drags are measured in CSS pixels so the
/// response does not depend on devicePixelRatio.
#[inline]
pub fn pointer_client_pos(ev: &web::PointerEvent) -> DVec2 {
    DVec2::new(ev.client_x() as f64, ev.client_y() as f64)
}

#[inline]
pub fn is_primary_button(ev: &web::PointerEvent) -> bool {
    // Touch and pen report 0 as well; only mouse uses other buttons
    ev.button() == 0
}

/// One drag at a time, owned by the pointer that started it. Presses and
/// moves from other pointers (a second finger) are ignored until it lifts.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerDrag {
    pointer_id: Option<i32>,
    tracker: DragTracker,
}

impl PointerDrag {
    /// Returns false when another pointer already owns the drag.
    pub fn press(&mut self, pointer_id: i32, position: DVec2) -> bool {
        if self.pointer_id.is_some() {
            return false;
        }
        self.pointer_id = Some(pointer_id);
        self.tracker.begin(position);
        true
    }

    pub fn motion(&self, pointer_id: i32, position: DVec2) -> Option<GestureSample> {
        if self.pointer_id != Some(pointer_id) {
            return None;
        }
        self.tracker.update(position)
    }

    /// Returns whether this ended the active drag.
    pub fn release(&mut self, pointer_id: i32) -> bool {
        if self.pointer_id != Some(pointer_id) {
            return false;
        }
        self.pointer_id = None;
        self.tracker.end()
    }
}

// ---------------- Keyboard helpers ----------------

/// Synthetic drag sample for an arrow key. Up brightens, right warms.
#[inline]
pub fn nudge_for_key(key: &str) -> Option<GestureSample> {
    match key {
        "ArrowUp" => Some(GestureSample::new(0.0, -KEY_NUDGE_PX)),
        "ArrowDown" => Some(GestureSample::new(0.0, KEY_NUDGE_PX)),
        "ArrowRight" => Some(GestureSample::new(KEY_NUDGE_PX, 0.0)),
        "ArrowLeft" => Some(GestureSample::new(-KEY_NUDGE_PX, 0.0)),
        _ => None,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyCommand {
    ToggleInfo,
    ToggleFullscreen,
    Dismiss,
}

#[inline]
pub fn command_for_key(key: &str) -> Option<KeyCommand> {
    match key {
        "i" | "I" | "h" | "H" => Some(KeyCommand::ToggleInfo),
        "f" | "F" | "Enter" => Some(KeyCommand::ToggleFullscreen),
        "Escape" => Some(KeyCommand::Dismiss),
        _ => None,
    }
}
