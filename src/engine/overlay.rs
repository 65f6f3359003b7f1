//! Overlay orchestration: opens, closes, and the fly-to continuations that
//! stitch camera flights and overlay fades together.

use log::{debug, warn};
use web_time::{Duration, Instant};

use super::Walkthrough;
use crate::camera::AfterFly;
use crate::effect::HostEffect;
use crate::overlay::{OverlayEvent, OverlayKind, OverlayPhase, SavedSlidePose};
use crate::slide::NavMode;
use crate::view::ViewKey;

impl Walkthrough {
    /// Open an overlay. Work modals and the about panel fly to their view
    /// first and fade in on arrival; contact and the menu fade in place.
    ///
    /// Ignored while another overlay is active or the relevant guard does
    /// not hold.
    pub fn open(&mut self, kind: OverlayKind, now: Instant) -> Vec<HostEffect> {
        self.open_inner(kind, now);
        std::mem::take(&mut self.effects)
    }

    /// Close the active overlay: fade out, then (for overlays that flew)
    /// return the camera to where it belongs.
    pub fn close(&mut self, now: Instant) -> Vec<HostEffect> {
        self.close_inner(now);
        std::mem::take(&mut self.effects)
    }

    pub(super) fn open_inner(&mut self, kind: OverlayKind, now: Instant) {
        if self.overlay.is_active() {
            debug!("overlay {kind:?} ignored; one is already active");
            return;
        }
        match kind {
            OverlayKind::Menu => {
                if !self.state.can_open_menu() {
                    return;
                }
                self.state.menu_open = true;
                self.director.rig_mut().lock();
                self.overlay.begin_open(kind, None, now);
                self.effects.push(HostEffect::ShowOverlay(kind));
            }
            OverlayKind::Contact => {
                if !self.state.can_click() {
                    return;
                }
                self.state.modal_open = true;
                self.director.rig_mut().lock();
                self.overlay.begin_open(kind, None, now);
                self.effects.push(HostEffect::ShowOverlay(kind));
            }
            OverlayKind::Work(_) | OverlayKind::About => {
                if !self.state.can_click() {
                    return;
                }
                let key = match kind {
                    OverlayKind::Work(category) => {
                        ViewKey::for_category(category)
                    }
                    _ => ViewKey::About,
                };
                let Some(pose) = self.catalog.get(key) else {
                    warn!("no pose registered for view {key:?}; open ignored");
                    return;
                };
                self.state.modal_open = true;
                // Snapshot before the flight moves anything; consumed by
                // the close-time restore.
                self.pending_saved = if self.state.portrait_mode {
                    Some(SavedSlidePose {
                        pose: self.director.pose(),
                        t: self.slide.t(),
                    })
                } else {
                    None
                };
                self.director.fly_to(
                    &mut self.state,
                    pose,
                    &self.options.camera,
                    now,
                    Some(AfterFly::OpenOverlay(kind)),
                );
            }
        }
    }

    pub(super) fn close_inner(&mut self, now: Instant) {
        if !matches!(
            self.overlay.phase(),
            OverlayPhase::Opening | OverlayPhase::Open
        ) {
            return;
        }
        debug!("closing overlay {:?}", self.overlay.kind());
        self.state.suppress_hover(
            now + Duration::from_millis(
                self.options.hover.suppress_after_close_ms,
            ),
        );
        if self.state.portrait_mode {
            // Block late drag events from stomping the upcoming restore
            // flight.
            self.state.suppress_slide = true;
        }
        self.overlay.begin_close(now);
    }

    /// Interpret a landed flight's continuation.
    pub(super) fn apply_after_fly(&mut self, after: AfterFly, now: Instant) {
        match after {
            AfterFly::OpenOverlay(kind) => {
                let saved = self.pending_saved.take();
                self.overlay.begin_open(kind, saved, now);
                // Landing re-enabled the rig; the overlay owns focus now.
                self.director.rig_mut().lock();
                self.effects.push(HostEffect::ShowOverlay(kind));
                if let Some(category) = kind.category() {
                    self.effects.push(HostEffect::RenderContent {
                        category,
                        items: self.content.items(category).to_vec(),
                    });
                }
            }
            AfterFly::FinishClose => {
                self.state.suppress_slide = false;
                self.director.rig_mut().pan_enabled =
                    self.options.camera.pan_after_close;
                self.state.suppress_hover(
                    now + Duration::from_millis(
                        self.options.hover.suppress_after_settle_ms,
                    ),
                );
            }
            AfterFly::RestoreSlide => {
                if let Some(t) = self.restore_t.take() {
                    self.slide.set_t(t);
                }
                self.state.suppress_slide = false;
                self.state.suppress_hover(
                    now + Duration::from_millis(
                        self.options.hover.suppress_after_settle_ms,
                    ),
                );
            }
        }
    }

    /// Interpret an overlay phase completion.
    pub(super) fn apply_overlay_event(
        &mut self,
        event: OverlayEvent,
        now: Instant,
    ) {
        match event {
            OverlayEvent::Opened(kind) => debug!("overlay {kind:?} open"),
            OverlayEvent::Closed(record) => {
                self.effects.push(HostEffect::HideOverlay(record.kind));
                self.state.modal_open = false;
                self.state.menu_open = false;
                match record.kind {
                    OverlayKind::Menu | OverlayKind::Contact => {
                        // Never moved the camera; just hand focus back.
                        self.state.suppress_slide = false;
                        if !self.state.portrait_mode {
                            let pan = self.options.camera.pan_after_close;
                            let rig = self.director.rig_mut();
                            rig.rotate_enabled = true;
                            rig.zoom_enabled = true;
                            rig.pan_enabled = pan;
                            rig.damping_enabled = true;
                        }
                    }
                    OverlayKind::Work(_) | OverlayKind::About => {
                        if self.state.portrait_mode {
                            let target = record.saved.map_or_else(
                                || self.slide.pose(&self.catalog),
                                |saved| saved.pose,
                            );
                            self.restore_t = record.saved.map(|saved| saved.t);
                            self.director.fly_to(
                                &mut self.state,
                                target,
                                &self.options.camera,
                                now,
                                Some(AfterFly::RestoreSlide),
                            );
                        } else {
                            let home = self.catalog.home();
                            self.director.fly_to(
                                &mut self.state,
                                home,
                                &self.options.camera,
                                now,
                                Some(AfterFly::FinishClose),
                            );
                        }
                    }
                }
            }
        }
    }

    /// Portrait entered: slide navigation takes the camera.
    pub(super) fn enter_slide_mode(&mut self) {
        debug!("portrait viewport; slide navigation");
        self.nav_mode = NavMode::Slide;
        self.pending_home_restore = false;
        let pose = self.slide.pose(&self.catalog);
        let busy = self.state.camera_moving || self.overlay.is_active();
        let rig = self.director.rig_mut();
        rig.rotate_enabled = false;
        rig.pan_enabled = false;
        rig.release_limits();
        if !busy {
            rig.set_pose(pose);
        }
    }

    /// Landscape entered: clamped orbiting takes the camera back.
    ///
    /// If a flight or overlay currently owns the camera, the home restore
    /// is deferred; the tick performs it once they let go.
    pub(super) fn exit_slide_mode(&mut self) {
        debug!("landscape viewport; orbit navigation");
        self.nav_mode = NavMode::Orbit;
        self.slide.reset(self.options.slide.rest_t);
        // Any slide restore in flight is moot once the mode is gone.
        self.restore_t = None;
        if self.state.camera_moving || self.overlay.is_active() {
            self.pending_home_restore = true;
            return;
        }
        self.restore_home_orbit();
    }

    /// Park the camera at home with normal landscape orbiting.
    pub(super) fn restore_home_orbit(&mut self) {
        let home = self.catalog.home();
        let pan = self.options.camera.pan_after_close;
        let rig = self.director.rig_mut();
        rig.set_pose(home);
        rig.rotate_enabled = true;
        rig.zoom_enabled = true;
        rig.pan_enabled = pan;
        rig.damping_enabled = true;
        rig.clamp_around_current(&self.options.camera);
    }
}
