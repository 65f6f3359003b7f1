use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Hover", inline)]
#[serde(default)]
/// Hover emphasis and suppression-window parameters.
pub struct HoverOptions {
    /// Scale multiplier applied to a hovered object.
    #[schemars(title = "Emphasis Scale", range(min = 1.0, max = 2.0), extend("step" = 0.05))]
    pub emphasis_scale: f32,
    /// Rotation multiplier applied to a hovered object's initial x-rotation.
    #[schemars(title = "Emphasis Rotation", range(min = 1.0, max = 2.0), extend("step" = 0.05))]
    pub emphasis_rotation: f32,
    /// Emphasis apply duration, seconds.
    #[schemars(skip)]
    pub emphasis_in_secs: f32,
    /// Emphasis reversal duration, seconds.
    #[schemars(skip)]
    pub emphasis_out_secs: f32,
    /// Overshoot amount of the emphasis ease.
    #[schemars(skip)]
    pub emphasis_overshoot: f32,
    /// Hover suppression window right after an overlay closes, milliseconds.
    #[schemars(title = "Close Suppression", range(min = 0.0, max = 2000.0), extend("step" = 50.0))]
    pub suppress_after_close_ms: u64,
    /// Hover suppression window after the camera settles, milliseconds.
    #[schemars(title = "Settle Suppression", range(min = 0.0, max = 2000.0), extend("step" = 50.0))]
    pub suppress_after_settle_ms: u64,
}

impl Default for HoverOptions {
    fn default() -> Self {
        Self {
            emphasis_scale: 1.2,
            emphasis_rotation: 1.2,
            emphasis_in_secs: 0.5,
            emphasis_out_secs: 0.3,
            emphasis_overshoot: 1.8,
            suppress_after_close_ms: 800,
            suppress_after_settle_ms: 300,
        }
    }
}
