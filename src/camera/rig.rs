//! Orbit-control state: spherical pose, clamp windows, enable flags.
//!
//! The rig is the storage-and-clamping half of an orbit control. The host
//! owns the damping/inertia math and feeds resulting deltas in through
//! [`OrbitRig::rotate_by`] / [`OrbitRig::zoom_by`] / [`OrbitRig::pan_by`];
//! the rig enforces the enable flags and the active limit windows.

use glam::Vec3;

use crate::options::CameraOptions;
use crate::view::Pose;

/// Clamp windows for the orbit angles and distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitLimits {
    /// Minimum polar (tilt) angle, radians.
    pub min_polar: f32,
    /// Maximum polar angle, radians.
    pub max_polar: f32,
    /// Minimum azimuth angle, radians.
    pub min_azimuth: f32,
    /// Maximum azimuth angle, radians.
    pub max_azimuth: f32,
    /// Minimum orbit distance.
    pub min_distance: f32,
    /// Maximum orbit distance.
    pub max_distance: f32,
}

impl OrbitLimits {
    /// Fully released limits: the whole sphere, any distance.
    pub const RELEASED: Self = Self {
        min_polar: 0.0,
        max_polar: std::f32::consts::PI,
        min_azimuth: f32::NEG_INFINITY,
        max_azimuth: f32::INFINITY,
        min_distance: 0.0,
        max_distance: f32::INFINITY,
    };
}

impl Default for OrbitLimits {
    fn default() -> Self {
        Self::RELEASED
    }
}

/// Orbit camera state in spherical coordinates around a look-at target.
#[derive(Debug, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub struct OrbitRig {
    target: Vec3,
    polar: f32,
    azimuth: f32,
    distance: f32,
    limits: OrbitLimits,
    /// Whether host rotation deltas are accepted.
    pub rotate_enabled: bool,
    /// Whether host zoom deltas are accepted.
    pub zoom_enabled: bool,
    /// Whether host pan deltas are accepted.
    pub pan_enabled: bool,
    /// Whether the host should run its damping pass.
    pub damping_enabled: bool,
}

impl OrbitRig {
    /// Create a rig looking along the given pose, with released limits and
    /// rotation/zoom enabled.
    #[must_use]
    pub fn from_pose(pose: Pose) -> Self {
        let mut rig = Self {
            target: Vec3::ZERO,
            polar: std::f32::consts::FRAC_PI_2,
            azimuth: 0.0,
            distance: 1.0,
            limits: OrbitLimits::RELEASED,
            rotate_enabled: true,
            zoom_enabled: true,
            pan_enabled: false,
            damping_enabled: true,
        };
        rig.set_pose(pose);
        rig
    }

    /// Overwrite the spherical state from a world-space pose.
    pub fn set_pose(&mut self, pose: Pose) {
        let offset = pose.position - pose.target;
        self.target = pose.target;
        self.distance = offset.length().max(1e-6);
        self.polar = (offset.y / self.distance).clamp(-1.0, 1.0).acos();
        self.azimuth = offset.x.atan2(offset.z);
    }

    /// The world-space pose implied by the current spherical state.
    #[must_use]
    pub fn pose(&self) -> Pose {
        let sin_polar = self.polar.sin();
        let offset = Vec3::new(
            sin_polar * self.azimuth.sin(),
            self.polar.cos(),
            sin_polar * self.azimuth.cos(),
        ) * self.distance;
        Pose::new(self.target + offset, self.target)
    }

    /// Current polar (tilt) angle, radians.
    #[must_use]
    pub const fn polar(&self) -> f32 {
        self.polar
    }

    /// Current azimuth angle, radians.
    #[must_use]
    pub const fn azimuth(&self) -> f32 {
        self.azimuth
    }

    /// Current orbit distance.
    #[must_use]
    pub const fn distance(&self) -> f32 {
        self.distance
    }

    /// Current look-at target.
    #[must_use]
    pub const fn target(&self) -> Vec3 {
        self.target
    }

    /// The active limit windows.
    #[must_use]
    pub const fn limits(&self) -> OrbitLimits {
        self.limits
    }

    /// Apply a host rotation delta. Ignored while rotation is disabled;
    /// clamping happens in [`update`](Self::update).
    pub fn rotate_by(&mut self, d_azimuth: f32, d_polar: f32) {
        if self.rotate_enabled {
            self.azimuth += d_azimuth;
            self.polar += d_polar;
        }
    }

    /// Apply a host zoom delta (added to the distance). Ignored while zoom
    /// is disabled.
    pub fn zoom_by(&mut self, d_distance: f32) {
        if self.zoom_enabled {
            self.distance += d_distance;
        }
    }

    /// Apply a host pan delta to the target. Ignored while pan is disabled.
    pub fn pan_by(&mut self, delta: Vec3) {
        if self.pan_enabled {
            self.target += delta;
        }
    }

    /// Install symmetric clamp windows centered on the current state.
    ///
    /// Polar and azimuth get `current ± limit`; distance gets
    /// `current + [zoom_in_offset, zoom_out_offset]` with the lower edge
    /// floored at `min_distance`. The state is clamped immediately.
    pub fn clamp_around_current(&mut self, opts: &CameraOptions) {
        self.limits = OrbitLimits {
            min_polar: self.polar - opts.polar_limit,
            max_polar: self.polar + opts.polar_limit,
            min_azimuth: self.azimuth - opts.azimuth_limit,
            max_azimuth: self.azimuth + opts.azimuth_limit,
            min_distance: (self.distance + opts.zoom_in_offset)
                .max(opts.min_distance),
            max_distance: self.distance + opts.zoom_out_offset,
        };
        self.update();
    }

    /// Widen all limits to their maximal range. Transient, used while a
    /// flight owns the camera.
    pub fn release_limits(&mut self) {
        self.limits = OrbitLimits::RELEASED;
    }

    /// Disable every input path at once (overlay focus lock).
    pub fn lock(&mut self) {
        self.rotate_enabled = false;
        self.zoom_enabled = false;
        self.pan_enabled = false;
        self.damping_enabled = false;
    }

    /// Clamp the spherical state into the active limit windows.
    pub fn update(&mut self) {
        self.polar = self
            .polar
            .clamp(self.limits.min_polar, self.limits.max_polar);
        self.azimuth = self
            .azimuth
            .clamp(self.limits.min_azimuth, self.limits.max_azimuth);
        self.distance = self
            .distance
            .clamp(self.limits.min_distance, self.limits.max_distance);
    }
}
