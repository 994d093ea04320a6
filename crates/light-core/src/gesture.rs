use glam::DVec2;

/// Pointer translation accumulated since the current drag began.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GestureSample {
    pub dx: f64,
    pub dy: f64,
}

/// Axis a drag sample is classified on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Vertical,
    Horizontal,
}

impl GestureSample {
    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// Vertical only when |dy| strictly exceeds |dx|; ties are horizontal.
    #[inline]
    pub fn dominant_axis(&self) -> Axis {
        if self.dy.abs() > self.dx.abs() {
            Axis::Vertical
        } else {
            Axis::Horizontal
        }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.dx.is_finite() && self.dy.is_finite()
    }
}

impl From<DVec2> for GestureSample {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

/// Turns raw pointer positions into [`GestureSample`]s relative to the point
/// where the drag started.
#[derive(Clone, Copy, Debug, Default)]
pub struct DragTracker {
    origin: Option<DVec2>,
}

impl DragTracker {
    /// Start a drag at `position`, replacing any drag already in progress.
    pub fn begin(&mut self, position: DVec2) {
        self.origin = Some(position);
    }

    /// Translation from the drag origin, or `None` when no drag is active.
    pub fn update(&self, position: DVec2) -> Option<GestureSample> {
        self.origin.map(|origin| GestureSample::from(position - origin))
    }

    /// Finish the drag. Returns whether one was active.
    pub fn end(&mut self) -> bool {
        self.origin.take().is_some()
    }

    pub fn is_active(&self) -> bool {
        self.origin.is_some()
    }
}
