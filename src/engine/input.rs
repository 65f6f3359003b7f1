//! Event dispatch: pointer, orbit deltas, resize.

use log::debug;
use web_time::Instant;

use super::Walkthrough;
use crate::effect::HostEffect;
use crate::input::InputEvent;
use crate::scene::ClickAction;
use crate::slide::NavMode;
use crate::view::Viewport;

impl Walkthrough {
    /// Handle one host input event. Returns the effects it produced.
    ///
    /// Events mutate state between ticks; anything visual (hover emphasis,
    /// cursor) still only changes inside [`advance`](Self::advance).
    pub fn handle_event(
        &mut self,
        event: InputEvent,
        now: Instant,
    ) -> Vec<HostEffect> {
        match event {
            InputEvent::PointerMoved { x, y } => self.on_pointer_moved(x, y, now),
            InputEvent::PointerPressed { x, .. } => self.on_pointer_pressed(x),
            InputEvent::PointerReleased { .. } => self.slide.end_drag(),
            InputEvent::Clicked { x, y } => {
                // Browsers fire a synthetic click right after a tap;
                // swallow it once.
                if self.touch_happened {
                    self.touch_happened = false;
                } else {
                    self.on_click(x, y, now);
                }
            }
            InputEvent::TouchEnded { x, y } => {
                self.touch_happened = true;
                self.on_click(x, y, now);
            }
            InputEvent::OrbitRotated { d_azimuth, d_polar } => {
                self.director.rig_mut().rotate_by(d_azimuth, d_polar);
            }
            InputEvent::OrbitZoomed { d_distance } => {
                self.director.rig_mut().zoom_by(d_distance);
            }
            InputEvent::Resized { width, height } => {
                self.pending_viewport = Some(Viewport { width, height });
                self.resize_debounce.trigger(now);
            }
        }
        std::mem::take(&mut self.effects)
    }

    fn on_pointer_moved(&mut self, x: f32, y: f32, now: Instant) {
        self.pointer = Some((x, y));

        // A move after the suppression deadline re-arms hover.
        if !self.state.hover_armed
            && self
                .state
                .suppress_hover_until
                .is_none_or(|deadline| now >= deadline)
        {
            self.state.hover_armed = true;
        }

        if self.nav_mode == NavMode::Slide
            && self.slide.is_dragging()
            && self.state.can_slide()
            && self.slide.drag_to(
                x,
                self.viewport.width,
                self.options.slide.sensitivity,
            )
        {
            let pose = self.slide.pose(&self.catalog);
            self.director.rig_mut().set_pose(pose);
        }
    }

    fn on_pointer_pressed(&mut self, x: f32) {
        if self.nav_mode == NavMode::Slide && self.state.can_slide() {
            self.slide.begin_drag(x);
        }
    }

    /// Resolve a click/tap against the scene.
    ///
    /// An open menu owns focus, so scene clicks (link objects included)
    /// are absorbed while it is up.
    fn on_click(&mut self, x: f32, y: f32, now: Instant) {
        if !self.state.can_click()
            || self.state.menu_open
            || !self.viewport.is_measured()
        {
            return;
        }
        let ray = self.pointer_ray(x, y);
        let hits = self.raycaster.intersect(ray, &self.registry);
        // Only the nearest hit can act; a closer raycastable occludes any
        // station behind it.
        let action = hits.first().and_then(|hit| {
            self.registry
                .get(hit.object)
                .and_then(|obj| obj.tags.action.clone())
        });
        match action {
            Some(ClickAction::Work(category)) => {
                self.open_inner(crate::overlay::OverlayKind::Work(category), now);
            }
            Some(ClickAction::About) => {
                self.open_inner(crate::overlay::OverlayKind::About, now);
            }
            Some(ClickAction::Contact) => {
                self.open_inner(crate::overlay::OverlayKind::Contact, now);
            }
            Some(ClickAction::Link(url)) => {
                debug!("opening external link {url}");
                self.effects.push(HostEffect::OpenUrl(url));
            }
            None => {}
        }
    }
}
