use std::cell::RefCell;
use std::rc::Rc;

use yew::Reducible;

use crate::config::{MAX_SCALE, MIN_SCALE};

/// Pan offset (CSS px) and zoom scale shared by the canvas and the marker layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub pan_x: f64,
    pub pan_y: f64,
    pub scale: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            pan_x: 0.0,
            pan_y: 0.0,
            scale: 1.0,
        }
    }
}

impl Camera {
    /// Pan is unbounded. Non-finite deltas are ignored.
    pub fn pan(&mut self, dx: f64, dy: f64) {
        if !dx.is_finite() || !dy.is_finite() {
            return;
        }
        self.pan_x += dx;
        self.pan_y += dy;
    }

    /// Adds `delta` to the scale, then clamps to `[MIN_SCALE, MAX_SCALE]`.
    pub fn zoom(&mut self, delta: f64) {
        if !delta.is_finite() {
            return;
        }
        self.scale = (self.scale + delta).clamp(MIN_SCALE, MAX_SCALE);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// CSS transform for the marker container; must mirror the canvas transform.
    pub fn css_transform(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            self.pan_x, self.pan_y, self.scale
        )
    }
}

/// The one camera cell. Handlers write through it; the frame loop reads it
/// every frame, so nothing holds a stale copy.
#[derive(Clone, Debug, Default)]
pub struct SharedCamera(Rc<RefCell<Camera>>);

impl PartialEq for SharedCamera {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl SharedCamera {
    pub fn get(&self) -> Camera {
        *self.0.borrow()
    }

    pub fn update(&self, f: impl FnOnce(&mut Camera)) {
        f(&mut self.0.borrow_mut());
    }
}

/// Bumped after every camera write so the marker layer re-renders.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CameraRevision(pub u64);

impl Reducible for CameraRevision {
    type Action = ();

    fn reduce(self: Rc<Self>, _: ()) -> Rc<Self> {
        Rc::new(CameraRevision(self.0.wrapping_add(1)))
    }
}
