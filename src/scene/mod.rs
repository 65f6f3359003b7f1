//! Registry of interactive scene objects and the ray-intersection seam.
//!
//! The host registers every pickable object once after its assets finish
//! loading, tagging each with the explicit capability set that drives hover
//! and click behavior. The registry also owns the objects' transform
//! animations (hover emphasis, intro reveal); the host reads back
//! [`SceneObject::current`] each frame to drive its own renderer.

mod emphasis;

use glam::Vec3;
pub use emphasis::TransformAnim;
use rustc_hash::FxHashMap;
use web_time::{Duration, Instant};

use crate::options::{HoverOptions, RevealOptions};
use crate::util::easing::EasingFunction;
use crate::view::{Category, Pose};

/// Stable handle for a registered scene object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId(u32);

/// What clicking an object does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickAction {
    /// Fly to the category's station and open its work modal.
    Work(Category),
    /// Fly to the about framing and open the about panel.
    About,
    /// Open the contact panel in place (no camera move).
    Contact,
    /// Open an external URL in the host.
    Link(String),
}

/// Explicit capability set for a scene object.
///
/// Every behavior an object participates in is an opt-in flag here; nothing
/// is inferred from object names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct Tags {
    /// Participates in pointer raycasts at all.
    pub raycastable: bool,
    /// Receives hover emphasis when it is the nearest hit.
    pub hoverable: bool,
    /// Shows the pointer cursor while hovered.
    pub pointer: bool,
    /// Participates in the staggered intro reveal.
    pub reveal: bool,
    /// Click behavior, if any.
    pub action: Option<ClickAction>,
}

impl Tags {
    /// Tags for a work station: pickable, hover-emphasized, opens the
    /// category's modal.
    #[must_use]
    pub const fn station(category: Category) -> Self {
        Self {
            raycastable: true,
            hoverable: true,
            pointer: true,
            reveal: true,
            action: Some(ClickAction::Work(category)),
        }
    }

    /// Tags for an external-link object (social icons and the like).
    #[must_use]
    pub const fn link(url: String) -> Self {
        Self {
            raycastable: true,
            hoverable: true,
            pointer: true,
            reveal: true,
            action: Some(ClickAction::Link(url)),
        }
    }

    /// Tags for the about station.
    #[must_use]
    pub const fn about() -> Self {
        Self {
            raycastable: true,
            hoverable: true,
            pointer: true,
            reveal: true,
            action: Some(ClickAction::About),
        }
    }
}

/// Position / euler rotation / scale of a scene object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// World-space position.
    pub position: Vec3,
    /// Euler rotation in radians.
    pub rotation: Vec3,
    /// Per-axis scale.
    pub scale: Vec3,
}

impl Transform {
    /// Identity transform at the origin.
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Vec3::ZERO,
        scale: Vec3::ONE,
    };

    /// Component-wise linear interpolation.
    #[must_use]
    pub fn lerp(a: Self, b: Self, t: f32) -> Self {
        Self {
            position: a.position.lerp(b.position, t),
            rotation: a.rotation.lerp(b.rotation, t),
            scale: a.scale.lerp(b.scale, t),
        }
    }
}

/// A registered interactive object.
#[derive(Debug, Clone)]
pub struct SceneObject {
    /// Host-side name, used only for logging.
    pub name: String,
    /// Capability flags.
    pub tags: Tags,
    /// Transform snapshot taken at registration. Emphasis and reveal both
    /// resolve against this, never against an animated value.
    pub initial: Transform,
    /// Transform as of the last tick; what the host should render.
    pub current: Transform,
    /// Bounding radius for the built-in sphere raycaster.
    pub radius: f32,
    anim: Option<TransformAnim>,
}

/// All registered objects, keyed by id, iterated in registration order.
#[derive(Debug, Default)]
pub struct SceneRegistry {
    objects: FxHashMap<ObjectId, SceneObject>,
    order: Vec<ObjectId>,
    next_id: u32,
}

impl SceneRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an object and return its handle.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        tags: Tags,
        transform: Transform,
        radius: f32,
    ) -> ObjectId {
        let id = ObjectId(self.next_id);
        self.next_id += 1;
        let _ = self.objects.insert(
            id,
            SceneObject {
                name: name.into(),
                tags,
                initial: transform,
                current: transform,
                radius,
                anim: None,
            },
        );
        self.order.push(id);
        id
    }

    /// Look up an object.
    #[must_use]
    pub fn get(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.get(&id)
    }

    /// Number of registered objects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether nothing has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Objects in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, &SceneObject)> {
        self.order
            .iter()
            .filter_map(|id| self.objects.get(id).map(|obj| (*id, obj)))
    }

    /// Start the hover emphasis animation on an object.
    ///
    /// The animation departs from the object's current (possibly mid-flight)
    /// transform and lands on the emphasized version of its initial one, so
    /// rapid hover flips never snap.
    pub fn begin_emphasis(
        &mut self,
        id: ObjectId,
        opts: &HoverOptions,
        now: Instant,
    ) {
        if let Some(obj) = self.objects.get_mut(&id) {
            let mut to = obj.initial;
            to.scale *= opts.emphasis_scale;
            to.rotation.x *= opts.emphasis_rotation;
            obj.anim = Some(TransformAnim::new(
                obj.current,
                to,
                now,
                Duration::from_secs_f32(opts.emphasis_in_secs),
                EasingFunction::BackOut {
                    overshoot: opts.emphasis_overshoot,
                },
            ));
        }
    }

    /// Reverse the hover emphasis, returning the object to its initial
    /// transform.
    pub fn end_emphasis(
        &mut self,
        id: ObjectId,
        opts: &HoverOptions,
        now: Instant,
    ) {
        if let Some(obj) = self.objects.get_mut(&id) {
            if obj.anim.is_none() && obj.current == obj.initial {
                return;
            }
            obj.anim = Some(TransformAnim::new(
                obj.current,
                obj.initial,
                now,
                Duration::from_secs_f32(opts.emphasis_out_secs),
                EasingFunction::QuadraticOut,
            ));
        }
    }

    /// Kick off the staggered intro reveal on every reveal-tagged object.
    ///
    /// Objects scale up from zero in registration order; each starts
    /// `duration - overlap` after the previous one.
    pub fn begin_reveal(&mut self, opts: &RevealOptions, now: Instant) {
        let step =
            Duration::from_secs_f32((opts.duration_secs - opts.overlap_secs).max(0.0));
        let mut start = now;
        for id in &self.order {
            let Some(obj) = self.objects.get_mut(id) else {
                continue;
            };
            if !obj.tags.reveal {
                continue;
            }
            let mut from = obj.initial;
            from.scale = Vec3::ZERO;
            obj.current = from;
            obj.anim = Some(TransformAnim::new(
                from,
                obj.initial,
                start,
                Duration::from_secs_f32(opts.duration_secs),
                EasingFunction::BackOut {
                    overshoot: opts.overshoot,
                },
            ));
            start += step;
        }
    }

    /// Step every active animation; returns whether any is still running.
    pub fn advance(&mut self, now: Instant) -> bool {
        let mut active = false;
        for id in &self.order {
            let Some(obj) = self.objects.get_mut(id) else {
                continue;
            };
            if let Some(anim) = &obj.anim {
                let (transform, done) = anim.sample(now);
                obj.current = transform;
                if done {
                    obj.anim = None;
                } else {
                    active = true;
                }
            }
        }
        active
    }
}

/// A world-space ray.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Ray origin.
    pub origin: Vec3,
    /// Normalized direction.
    pub direction: Vec3,
}

impl Ray {
    /// Build the pick ray through a pointer position.
    ///
    /// `ndc_x`/`ndc_y` are normalized device coordinates in [-1, 1] with +y
    /// up; `fovy` is the vertical field of view in radians.
    #[must_use]
    pub fn from_pointer(
        ndc_x: f32,
        ndc_y: f32,
        pose: Pose,
        fovy: f32,
        aspect: f32,
    ) -> Self {
        let forward = (pose.target - pose.position).normalize_or(Vec3::NEG_Z);
        let right = forward.cross(Vec3::Y).normalize_or(Vec3::X);
        let up = right.cross(forward);
        let half_h = (fovy * 0.5).tan();
        let direction = (forward
            + right * (ndc_x * half_h * aspect)
            + up * (ndc_y * half_h))
            .normalize_or(forward);
        Self {
            origin: pose.position,
            direction,
        }
    }
}

/// One raycast intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// The object hit.
    pub object: ObjectId,
    /// Distance from the ray origin.
    pub distance: f32,
}

/// Seam to the host's intersection math.
///
/// Implementations return hits sorted nearest-first and only consider
/// objects tagged `raycastable`. Hosts with real mesh geometry implement
/// this against their own acceleration structures; [`SphereRaycaster`]
/// covers tests and simple scenes.
pub trait Raycaster {
    /// Intersect a ray against the registry's raycastable objects.
    fn intersect(&self, ray: Ray, registry: &SceneRegistry) -> Vec<RayHit>;
}

/// Raycaster against each object's bounding sphere (current position +
/// registered radius).
#[derive(Debug, Clone, Copy, Default)]
pub struct SphereRaycaster;

impl Raycaster for SphereRaycaster {
    fn intersect(&self, ray: Ray, registry: &SceneRegistry) -> Vec<RayHit> {
        let mut hits = Vec::new();
        for (id, obj) in registry.iter() {
            if !obj.tags.raycastable {
                continue;
            }
            let oc = ray.origin - obj.current.position;
            let b = oc.dot(ray.direction);
            let c = oc.length_squared() - obj.radius * obj.radius;
            let disc = b * b - c;
            if disc < 0.0 {
                continue;
            }
            let sqrt_disc = disc.sqrt();
            let mut t = -b - sqrt_disc;
            if t < 0.0 {
                t = -b + sqrt_disc;
            }
            if t >= 0.0 {
                hits.push(RayHit {
                    object: id,
                    distance: t,
                });
            }
        }
        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits
    }
}
