//! Model-update-render loop for one light session.
//!
//! A [`Session`] owns the light state and a host [`Surface`]. Every mutation
//! goes through a method here and is followed by exactly one
//! [`Surface::present`] call with the new [`View`].

use crate::color::Paint;
use crate::config::LightConfig;
use crate::gesture::GestureSample;
use crate::state::{apply_gesture_with, LightState, Readout};

/// Everything a surface needs to draw one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct View {
    pub paint: Paint,
    pub readout: Readout,
    pub info_visible: bool,
}

/// Host rendering target.
pub trait Surface {
    fn present(&mut self, view: &View);
}

pub struct Session<S: Surface> {
    state: LightState,
    config: LightConfig,
    info_visible: bool,
    surface: S,
}

impl<S: Surface> Session<S> {
    /// Start a session and present its first frame.
    pub fn new(config: LightConfig, surface: S) -> Self {
        let mut session = Self {
            state: config.initial,
            config,
            info_visible: false,
            surface,
        };
        log::info!(
            "[session] start brightness={:.2} warmth={:.2}",
            session.state.brightness(),
            session.state.warmth()
        );
        session.render();
        session
    }

    pub fn state(&self) -> LightState {
        self.state
    }

    pub fn info_visible(&self) -> bool {
        self.info_visible
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn view(&self) -> View {
        View {
            paint: Paint::from_state(self.state),
            readout: self.state.readout(),
            info_visible: self.info_visible,
        }
    }

    /// Feed one drag sample. Ignored while the info panel covers the light;
    /// returns whether the sample was applied.
    pub fn drag_changed(&mut self, sample: GestureSample) -> bool {
        if self.info_visible {
            return false;
        }
        self.state = apply_gesture_with(self.state, sample, self.config.sensitivity);
        log::trace!(
            "[drag] dx={:.1} dy={:.1} -> brightness={:.3} warmth={:.3}",
            sample.dx,
            sample.dy,
            self.state.brightness(),
            self.state.warmth()
        );
        self.render();
        true
    }

    /// The sample stream stopped. State is already up to date.
    pub fn drag_ended(&self) {
        let r = self.state.readout();
        log::info!(
            "[drag] end brightness={}% warmth={}%",
            r.brightness_percent,
            r.warmth_percent
        );
    }

    pub fn toggle_info(&mut self) {
        self.set_info_visible(!self.info_visible);
    }

    pub fn set_info_visible(&mut self, visible: bool) {
        if self.info_visible == visible {
            return;
        }
        self.info_visible = visible;
        log::info!("[info] visible={}", visible);
        self.render();
    }

    /// Present again without changing state, e.g. after the surface resized.
    pub fn refresh(&mut self) {
        self.render();
    }

    fn render(&mut self) {
        let view = self.view();
        self.surface.present(&view);
    }
}
