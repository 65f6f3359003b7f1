use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Reveal", inline)]
#[serde(default)]
/// First-run reveal animation parameters.
pub struct RevealOptions {
    /// Per-object scale-up duration, seconds.
    #[schemars(skip)]
    pub duration_secs: f32,
    /// How much consecutive objects' animations overlap, seconds.
    #[schemars(skip)]
    pub overlap_secs: f32,
    /// Overshoot amount of the reveal ease.
    #[schemars(skip)]
    pub overshoot: f32,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            duration_secs: 0.8,
            overlap_secs: 0.4,
            overshoot: 1.8,
        }
    }
}
