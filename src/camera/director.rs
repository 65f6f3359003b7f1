//! Camera flights: cancellable pose interpolations with structured
//! continuations.

use log::{debug, warn};
use web_time::{Duration, Instant};

use super::rig::OrbitRig;
use crate::interaction::InteractionState;
use crate::options::CameraOptions;
use crate::overlay::OverlayKind;
use crate::util::easing::EasingFunction;
use crate::view::{Pose, ViewCatalog, ViewKey};

/// What the engine should do once a flight lands.
///
/// Continuations are data, not callbacks: the engine interprets the variant
/// on the tick that observes completion, so a superseded flight's
/// continuation simply never surfaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AfterFly {
    /// The approach flight landed; reveal the overlay.
    OpenOverlay(OverlayKind),
    /// The return-home flight landed; finish the landscape close.
    FinishClose,
    /// The restore flight landed; hand the camera back to slide mode.
    RestoreSlide,
}

#[derive(Debug, Clone)]
struct Flight {
    from: Pose,
    to: Pose,
    start: Instant,
    duration: Duration,
    easing: EasingFunction,
    after: Option<AfterFly>,
}

/// Owns the orbit rig and any in-flight camera transition.
///
/// Last-writer-wins: starting a flight while one is active drops the old
/// one (and its continuation) on the spot. Limits are released and inputs
/// locked for the duration of a flight; on landscape completion the rig is
/// re-enabled and, after a short settle delay, re-clamped around the
/// arrival pose.
#[derive(Debug)]
pub struct CameraDirector {
    rig: OrbitRig,
    flight: Option<Flight>,
    settle_deadline: Option<Instant>,
}

impl CameraDirector {
    /// Create a director parked at the given pose.
    #[must_use]
    pub fn new(pose: Pose) -> Self {
        Self {
            rig: OrbitRig::from_pose(pose),
            flight: None,
            settle_deadline: None,
        }
    }

    /// The orbit rig.
    #[must_use]
    pub const fn rig(&self) -> &OrbitRig {
        &self.rig
    }

    /// Mutable access to the orbit rig.
    pub fn rig_mut(&mut self) -> &mut OrbitRig {
        &mut self.rig
    }

    /// The current camera pose.
    #[must_use]
    pub fn pose(&self) -> Pose {
        self.rig.pose()
    }

    /// Whether a flight is in progress.
    #[must_use]
    pub const fn is_flying(&self) -> bool {
        self.flight.is_some()
    }

    /// Start a flight toward `to`, superseding any active one.
    ///
    /// The rig is locked and its limits released for the duration;
    /// `state.camera_moving` is set until the flight lands.
    pub fn fly_to(
        &mut self,
        state: &mut InteractionState,
        to: Pose,
        opts: &CameraOptions,
        now: Instant,
        after: Option<AfterFly>,
    ) {
        if let Some(prev) = self.flight.take() {
            debug!("flight superseded; pending continuation dropped: {:?}", prev.after);
        }
        let from = self.rig.pose();
        self.rig.lock();
        self.rig.release_limits();
        self.settle_deadline = None;
        state.camera_moving = true;
        self.flight = Some(Flight {
            from,
            to,
            start: now,
            duration: Duration::from_secs_f32(opts.fly_duration_secs),
            easing: EasingFunction::DEFAULT,
            after,
        });
    }

    /// Fly to a cataloged view. An unregistered key logs a warning and
    /// changes nothing.
    pub fn fly_to_view(
        &mut self,
        state: &mut InteractionState,
        catalog: &ViewCatalog,
        key: ViewKey,
        opts: &CameraOptions,
        now: Instant,
        after: Option<AfterFly>,
    ) {
        if let Some(pose) = catalog.get(key) {
            self.fly_to(state, pose, opts, now, after);
        } else {
            warn!("no pose registered for view {key:?}; fly-to ignored");
        }
    }

    /// Step the active flight (or pending settle re-clamp).
    ///
    /// Returns the landed flight's continuation on the completing tick.
    /// On landscape completion, rotation/zoom are re-enabled and a settle
    /// deadline is armed; the re-clamp itself runs once that deadline
    /// passes, so the host's damping has a beat to come to rest first. In
    /// portrait mode rotation stays off and limits stay released; slide
    /// mode owns the camera there, with zoom still available.
    pub fn advance(
        &mut self,
        state: &mut InteractionState,
        opts: &CameraOptions,
        now: Instant,
    ) -> Option<AfterFly> {
        if let Some(flight) = &self.flight {
            let elapsed = now.duration_since(flight.start);
            if elapsed >= flight.duration {
                let Some(flight) = self.flight.take() else {
                    return None;
                };
                self.rig.set_pose(flight.to);
                state.camera_moving = false;
                if state.portrait_mode {
                    // Rotation belongs to the slide in portrait; zoom and
                    // damping come back like any other landing.
                    self.rig.zoom_enabled = true;
                    self.rig.damping_enabled = true;
                } else {
                    self.rig.rotate_enabled = true;
                    self.rig.zoom_enabled = true;
                    self.rig.damping_enabled = true;
                    self.settle_deadline = Some(
                        now + Duration::from_secs_f32(opts.settle_delay_secs),
                    );
                }
                return flight.after;
            }
            let t = elapsed.as_secs_f32() / flight.duration.as_secs_f32();
            self.rig
                .set_pose(Pose::lerp(flight.from, flight.to, flight.easing.evaluate(t)));
        } else if let Some(deadline) = self.settle_deadline {
            if now >= deadline {
                self.settle_deadline = None;
                if !state.portrait_mode {
                    self.rig.clamp_around_current(opts);
                }
            }
        }
        None
    }
}
