use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera flight and orbit-clamp parameters.
pub struct CameraOptions {
    /// Vertical field of view in radians, used to build pick rays.
    #[schemars(skip)]
    pub fovy: f32,
    /// Duration of a fly-to transition in seconds.
    #[schemars(title = "Fly Duration", range(min = 0.1, max = 3.0), extend("step" = 0.05))]
    pub fly_duration_secs: f32,
    /// Delay after a flight lands before orbit limits are re-installed,
    /// letting control damping settle first.
    #[schemars(skip)]
    pub settle_delay_secs: f32,
    /// Half-width of the polar (tilt) clamp window, radians.
    #[schemars(title = "Polar Limit", range(min = 0.01, max = 1.5), extend("step" = 0.01))]
    pub polar_limit: f32,
    /// Half-width of the azimuth (pan) clamp window, radians.
    #[schemars(title = "Azimuth Limit", range(min = 0.01, max = 3.0), extend("step" = 0.01))]
    pub azimuth_limit: f32,
    /// Zoom-in allowance relative to the settled distance (negative).
    #[schemars(skip)]
    pub zoom_in_offset: f32,
    /// Zoom-out allowance relative to the settled distance (positive).
    #[schemars(skip)]
    pub zoom_out_offset: f32,
    /// Absolute floor for the orbit distance window.
    #[schemars(skip)]
    pub min_distance: f32,
    /// Orbit control damping factor.
    #[schemars(title = "Damping", range(min = 0.0, max = 0.2), extend("step" = 0.005))]
    pub damping_factor: f32,
    /// Whether panning comes back when landscape orbiting resumes after an
    /// overlay closes. Tuning drafts disagree on this; it stays a knob.
    #[schemars(skip)]
    pub pan_after_close: bool,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 35.0_f32.to_radians(),
            fly_duration_secs: 0.7,
            settle_delay_secs: 0.05,
            polar_limit: std::f32::consts::PI / 30.0,
            azimuth_limit: std::f32::consts::PI / 15.0,
            zoom_in_offset: -0.5,
            zoom_out_offset: 0.5,
            min_distance: 0.1,
            damping_factor: 0.03,
            pan_after_close: true,
        }
    }
}
