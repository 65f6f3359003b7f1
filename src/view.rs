//! Named camera poses and the catalog that maps view keys onto them.

use glam::Vec3;
use rustc_hash::FxHashMap;

/// A camera position plus look-at target.
///
/// Poses are plain values: the catalog hands out copies, transient poses
/// are cloned into flights, and nothing holds a live reference into the
/// catalog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// Camera eye position in world space.
    pub position: Vec3,
    /// Look-at target in world space.
    pub target: Vec3,
}

impl Pose {
    /// Build a pose from eye and target points.
    #[must_use]
    pub const fn new(position: Vec3, target: Vec3) -> Self {
        Self { position, target }
    }

    /// Interpolate position and target together.
    ///
    /// Both components move on the same parameter so the framing never
    /// shears apart mid-transition.
    #[must_use]
    pub fn lerp(a: Self, b: Self, t: f32) -> Self {
        Self {
            position: a.position.lerp(b.position, t),
            target: a.target.lerp(b.target, t),
        }
    }
}

/// The modal content categories — each corresponds to one interactive
/// station in the room and one column of the content store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// The work desk station.
    Desk,
    /// The camera/photography station.
    Studio,
    /// The live-event station.
    Stage,
}

/// Keys for the named camera poses of the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKey {
    /// The default pose the experience starts at and returns to.
    Home,
    /// Close-up of the desk station.
    Desk,
    /// Close-up of the studio station.
    Studio,
    /// Close-up of the stage station.
    Stage,
    /// The about panel's framing.
    About,
}

impl ViewKey {
    /// The view key a content category flies to.
    #[must_use]
    pub const fn for_category(category: Category) -> Self {
        match category {
            Category::Desk => Self::Desk,
            Category::Studio => Self::Studio,
            Category::Stage => Self::Stage,
        }
    }
}

/// Static table of named camera poses, populated once after scene assets
/// finish loading.
///
/// The table may be sparse: a key the host never registered simply has no
/// pose, and flying to it is a logged no-op. The two slide end poses for
/// portrait mode are carried here as well so hosts tune them alongside the
/// named views.
#[derive(Debug, Clone)]
pub struct ViewCatalog {
    poses: FxHashMap<ViewKey, Pose>,
    slide_left: Pose,
    slide_right: Pose,
}

impl ViewCatalog {
    /// Create a catalog with the given home pose and slide end poses.
    ///
    /// The home pose is registered immediately; further views are added
    /// with [`insert`](Self::insert).
    #[must_use]
    pub fn new(home: Pose, slide_left: Pose, slide_right: Pose) -> Self {
        let mut poses = FxHashMap::default();
        let _ = poses.insert(ViewKey::Home, home);
        Self {
            poses,
            slide_left,
            slide_right,
        }
    }

    /// Register (or replace) the pose for a view key.
    pub fn insert(&mut self, key: ViewKey, pose: Pose) {
        let _ = self.poses.insert(key, pose);
    }

    /// Look up a pose. `None` means the view was never registered.
    #[must_use]
    pub fn get(&self, key: ViewKey) -> Option<Pose> {
        self.poses.get(&key).copied()
    }

    /// The home pose. Always present.
    #[must_use]
    pub fn home(&self) -> Pose {
        self.poses.get(&ViewKey::Home).copied().unwrap_or(Pose {
            position: Vec3::Z,
            target: Vec3::ZERO,
        })
    }

    /// Left end pose of the portrait slide.
    #[must_use]
    pub const fn slide_left(&self) -> Pose {
        self.slide_left
    }

    /// Right end pose of the portrait slide.
    #[must_use]
    pub const fn slide_right(&self) -> Pose {
        self.slide_right
    }
}

/// Current viewport dimensions in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

impl Viewport {
    /// Portrait iff strictly taller than wide.
    #[must_use]
    pub fn is_portrait(&self) -> bool {
        self.height > self.width
    }

    /// Whether the viewport has a usable measured size.
    #[must_use]
    pub fn is_measured(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}
