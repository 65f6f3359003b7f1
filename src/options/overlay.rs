use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Overlay", inline)]
#[serde(default)]
/// Overlay fade and layout-recompute parameters.
pub struct OverlayOptions {
    /// Opacity fade duration for overlay open/close, seconds.
    #[schemars(title = "Fade Duration", range(min = 0.1, max = 2.0), extend("step" = 0.05))]
    pub fade_secs: f32,
    /// Trailing-edge debounce for resize-driven layout recomputation,
    /// milliseconds.
    #[schemars(skip)]
    pub resize_debounce_ms: u64,
}

impl Default for OverlayOptions {
    fn default() -> Self {
        Self {
            fade_secs: 0.5,
            resize_debounce_ms: 150,
        }
    }
}
