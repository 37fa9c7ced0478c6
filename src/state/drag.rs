use super::Camera;
use crate::config::WHEEL_SENSITIVITY;

/// Pointer gesture state. Only this controller writes to the camera.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    /// Last pointer position seen during the drag, in client px.
    Dragging { last_x: f64, last_y: f64 },
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }

    pub fn pointer_down(&mut self, x: f64, y: f64) {
        *self = DragState::Dragging { last_x: x, last_y: y };
    }

    /// Pans by the movement since the last event. Returns true if the camera moved.
    pub fn pointer_move(&mut self, x: f64, y: f64, camera: &mut Camera) -> bool {
        let DragState::Dragging { last_x, last_y } = *self else {
            return false;
        };
        camera.pan(x - last_x, y - last_y);
        *self = DragState::Dragging { last_x: x, last_y: y };
        true
    }

    pub fn pointer_up(&mut self) {
        *self = DragState::Idle;
    }

    /// Leaving the surface ends the drag like a release.
    pub fn pointer_leave(&mut self) {
        self.pointer_up();
    }
}

/// Wheel zoom, independent of drag state.
pub fn wheel_zoom(delta_y: f64, camera: &mut Camera) {
    camera.zoom(-delta_y * WHEEL_SENSITIVITY);
}
