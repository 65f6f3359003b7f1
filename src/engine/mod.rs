//! The coordinator that ties camera, hover, overlays, and slide navigation
//! to one update tick.

mod input;
mod overlay;

use log::debug;
use web_time::{Duration, Instant};

use crate::camera::CameraDirector;
use crate::effect::{Cursor, HostEffect};
use crate::hover::HoverArbiter;
use crate::interaction::InteractionState;
use crate::options::Options;
use crate::overlay::{ContentStore, OverlayController, OverlayPhase};
use crate::scene::{Ray, RayHit, Raycaster, SceneRegistry, SphereRaycaster};
use crate::slide::{NavMode, SlideController};
use crate::util::debounce::Debounce;
use crate::view::{ViewCatalog, Viewport};

/// The walk-through coordinator.
///
/// Owns every piece of interaction state. The host calls
/// [`advance`](Self::advance) once per frame, forwards platform events
/// through [`handle_event`](Self::handle_event), and executes whatever
/// [`HostEffect`]s come back. All camera output is read through
/// [`camera_pose`](Self::camera_pose); object transforms through the
/// [`registry`](Self::registry).
pub struct Walkthrough {
    options: Options,
    catalog: ViewCatalog,
    registry: SceneRegistry,
    content: ContentStore,
    state: InteractionState,
    director: CameraDirector,
    overlay: OverlayController,
    hover: HoverArbiter,
    slide: SlideController,
    raycaster: Box<dyn Raycaster>,
    nav_mode: NavMode,
    viewport: Viewport,
    pointer: Option<(f32, f32)>,
    last_hits: Vec<RayHit>,
    last_cursor: Cursor,
    resize_debounce: Debounce,
    pending_viewport: Option<Viewport>,
    pending_home_restore: bool,
    pending_saved: Option<crate::overlay::SavedSlidePose>,
    restore_t: Option<f32>,
    touch_happened: bool,
    effects: Vec<HostEffect>,
}

impl Walkthrough {
    /// Create a coordinator parked at the catalog's home pose, picking with
    /// the built-in sphere raycaster.
    #[must_use]
    pub fn new(catalog: ViewCatalog, options: Options) -> Self {
        let rest_t = options.slide.rest_t;
        let resize_debounce = Debounce::new(Duration::from_millis(
            options.overlay.resize_debounce_ms,
        ));
        let director = CameraDirector::new(catalog.home());
        Self {
            options,
            catalog,
            registry: SceneRegistry::new(),
            content: ContentStore::new(),
            state: InteractionState::default(),
            director,
            overlay: OverlayController::new(),
            hover: HoverArbiter::new(),
            slide: SlideController::new(rest_t),
            raycaster: Box::new(SphereRaycaster),
            nav_mode: NavMode::Orbit,
            viewport: Viewport {
                width: 0.0,
                height: 0.0,
            },
            pointer: None,
            last_hits: Vec::new(),
            last_cursor: Cursor::Default,
            resize_debounce,
            pending_viewport: None,
            pending_home_restore: false,
            pending_saved: None,
            restore_t: None,
            touch_happened: false,
            effects: Vec::new(),
        }
    }

    /// Replace the raycaster with the host's own intersection math.
    #[must_use]
    pub fn with_raycaster(mut self, raycaster: Box<dyn Raycaster>) -> Self {
        self.raycaster = raycaster;
        self
    }

    /// The scene registry, for registering objects after asset load.
    pub fn registry_mut(&mut self) -> &mut SceneRegistry {
        &mut self.registry
    }

    /// The scene registry.
    #[must_use]
    pub const fn registry(&self) -> &SceneRegistry {
        &self.registry
    }

    /// The content store, for pushing fetched items.
    pub fn content_mut(&mut self) -> &mut ContentStore {
        &mut self.content
    }

    /// Current tuning options.
    #[must_use]
    pub const fn options(&self) -> &Options {
        &self.options
    }

    /// The interaction flags.
    #[must_use]
    pub const fn interaction(&self) -> &InteractionState {
        &self.state
    }

    /// The current camera pose.
    #[must_use]
    pub fn camera_pose(&self) -> crate::view::Pose {
        self.director.pose()
    }

    /// The camera director (rig access, flight status).
    #[must_use]
    pub const fn director(&self) -> &CameraDirector {
        &self.director
    }

    /// Which navigation scheme currently owns the camera.
    #[must_use]
    pub const fn nav_mode(&self) -> NavMode {
        self.nav_mode
    }

    /// The active overlay's phase.
    #[must_use]
    pub const fn overlay_phase(&self) -> OverlayPhase {
        self.overlay.phase()
    }

    /// The active overlay's fade opacity.
    #[must_use]
    pub const fn overlay_opacity(&self) -> f32 {
        self.overlay.opacity()
    }

    /// The current slide parameter.
    #[must_use]
    pub const fn slide_t(&self) -> f32 {
        self.slide.t()
    }

    /// Start the intro: enables interaction and plays the staggered reveal
    /// on reveal-tagged objects.
    pub fn on_reveal(&mut self, now: Instant) {
        if self.state.interaction_enabled {
            return;
        }
        debug!("reveal started; interaction enabled");
        self.state.interaction_enabled = true;
        self.registry.begin_reveal(&self.options.reveal, now);
    }

    /// Fly to a cataloged view (menu navigation).
    ///
    /// Closes the menu if it is up. Ignored before the reveal, while a
    /// modal is open, or in portrait mode, where the slide owns the
    /// camera.
    pub fn navigate_to(
        &mut self,
        key: crate::view::ViewKey,
        now: Instant,
    ) -> Vec<HostEffect> {
        if self.state.interaction_enabled
            && !self.state.modal_open
            && !self.state.portrait_mode
        {
            if self.state.menu_open {
                self.close_inner(now);
            }
            self.director.fly_to_view(
                &mut self.state,
                &self.catalog,
                key,
                &self.options.camera,
                now,
                None,
            );
        }
        std::mem::take(&mut self.effects)
    }

    /// Advance one frame. Returns the effects the host must execute.
    pub fn advance(&mut self, now: Instant) -> Vec<HostEffect> {
        self.poll_resize(now);

        let was_flying = self.director.is_flying();
        if let Some(after) =
            self.director.advance(&mut self.state, &self.options.camera, now)
        {
            self.apply_after_fly(after, now);
        } else if was_flying && !self.director.is_flying() {
            // A plain navigation flight landed. Hold hover down for the
            // settle window so the object now under the parked pointer
            // does not flare on the landing tick.
            self.state.suppress_hover(
                now + Duration::from_millis(
                    self.options.hover.suppress_after_settle_ms,
                ),
            );
        }

        if let Some(event) = self.overlay.advance(self.options.overlay.fade_secs, now)
        {
            self.apply_overlay_event(event, now);
        }

        if self.pending_home_restore
            && !self.state.camera_moving
            && !self.overlay.is_active()
        {
            // A portrait-to-landscape switch landed while a flight or
            // overlay owned the camera; finish it now that they let go.
            self.pending_home_restore = false;
            if !self.state.portrait_mode {
                self.restore_home_orbit();
            }
        }

        let _ = self.registry.advance(now);

        self.evaluate_hover(now);

        self.director.rig_mut().update();

        std::mem::take(&mut self.effects)
    }

    /// Raycast the latest pointer position and run hover arbitration.
    fn evaluate_hover(&mut self, now: Instant) {
        self.last_hits.clear();
        if let Some((x, y)) = self.pointer {
            if self.viewport.is_measured() {
                let ray = self.pointer_ray(x, y);
                self.last_hits = self.raycaster.intersect(ray, &self.registry);
            }
        }
        let cursor = self.hover.evaluate(
            &self.state,
            &self.last_hits,
            &mut self.registry,
            &self.options.hover,
            now,
        );
        if cursor != self.last_cursor {
            self.last_cursor = cursor;
            self.effects.push(HostEffect::SetCursor(cursor));
        }
    }

    /// Build the pick ray through a pointer position in CSS pixels.
    fn pointer_ray(&self, x: f32, y: f32) -> Ray {
        let ndc_x = (x / self.viewport.width) * 2.0 - 1.0;
        let ndc_y = 1.0 - (y / self.viewport.height) * 2.0;
        Ray::from_pointer(
            ndc_x,
            ndc_y,
            self.director.pose(),
            self.options.camera.fovy,
            self.viewport.width / self.viewport.height,
        )
    }

    /// Apply a debounced resize once its quiet period has elapsed.
    fn poll_resize(&mut self, now: Instant) {
        if !self.resize_debounce.fire(now) {
            return;
        }
        let Some(viewport) = self.pending_viewport else {
            return;
        };
        if !viewport.is_measured() {
            // Layout has not produced a usable size yet; try again next
            // tick.
            self.resize_debounce.retry(now);
            return;
        }
        self.pending_viewport = None;
        self.viewport = viewport;

        let portrait = viewport.is_portrait();
        if portrait != self.state.portrait_mode {
            self.state.portrait_mode = portrait;
            if portrait {
                self.enter_slide_mode();
            } else {
                self.exit_slide_mode();
            }
        }

        if self.overlay.is_active()
            && self.overlay.kind().and_then(crate::overlay::OverlayKind::category).is_some()
        {
            self.effects.push(HostEffect::RelayoutContent);
        }
    }
}
