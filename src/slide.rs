//! Portrait slide navigation: a horizontal drag scrubbing the camera along
//! the segment between two fixed end poses.

use crate::view::{Pose, ViewCatalog};

/// Which navigation scheme owns the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavMode {
    /// Landscape: clamped free orbiting.
    Orbit,
    /// Portrait: drag-driven slide between the two end poses.
    Slide,
}

#[derive(Debug, Clone, Copy)]
struct Drag {
    start_x: f32,
    start_t: f32,
}

/// The slide parameter and any drag in progress.
///
/// Drags scrub `t` directly: `Δt = -(x - start_x) / viewport_width ×
/// sensitivity`, clamped to [0, 1], with the pose applied 1:1 (no easing).
/// Dragging right moves toward the left end pose.
#[derive(Debug)]
pub struct SlideController {
    t: f32,
    drag: Option<Drag>,
}

impl SlideController {
    /// Create a controller resting at `rest_t`.
    #[must_use]
    pub const fn new(rest_t: f32) -> Self {
        Self {
            t: rest_t,
            drag: None,
        }
    }

    /// Current slide parameter in [0, 1].
    #[must_use]
    pub const fn t(&self) -> f32 {
        self.t
    }

    /// Overwrite the slide parameter (overlay-close restore).
    pub fn set_t(&mut self, t: f32) {
        self.t = t.clamp(0.0, 1.0);
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// The camera pose for the current parameter.
    #[must_use]
    pub fn pose(&self, catalog: &ViewCatalog) -> Pose {
        Pose::lerp(catalog.slide_left(), catalog.slide_right(), self.t)
    }

    /// Start a drag at pointer x.
    pub fn begin_drag(&mut self, x: f32) {
        self.drag = Some(Drag {
            start_x: x,
            start_t: self.t,
        });
    }

    /// Update an in-progress drag. Returns whether `t` changed.
    pub fn drag_to(
        &mut self,
        x: f32,
        viewport_width: f32,
        sensitivity: f32,
    ) -> bool {
        let Some(drag) = self.drag else {
            return false;
        };
        if viewport_width <= 0.0 {
            return false;
        }
        let delta = -(x - drag.start_x) / viewport_width * sensitivity;
        let t = (drag.start_t + delta).clamp(0.0, 1.0);
        if (t - self.t).abs() < f32::EPSILON {
            return false;
        }
        self.t = t;
        true
    }

    /// Finish any drag in progress.
    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    /// Abandon any drag and snap back to the rest parameter (mode exit).
    pub fn reset(&mut self, rest_t: f32) {
        self.drag = None;
        self.t = rest_t.clamp(0.0, 1.0);
    }
}
