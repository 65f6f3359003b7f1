use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Slide", inline)]
#[serde(default)]
/// Portrait slide-mode parameters.
pub struct SlideOptions {
    /// Drag sensitivity: fraction of the slide range traversed per full
    /// viewport width of horizontal drag.
    #[schemars(title = "Sensitivity", range(min = 0.2, max = 4.0), extend("step" = 0.1))]
    pub sensitivity: f32,
    /// Slide position the mode resets to when entered or left.
    #[schemars(skip)]
    pub rest_t: f32,
}

impl Default for SlideOptions {
    fn default() -> Self {
        Self {
            sensitivity: 1.7,
            rest_t: 0.5,
        }
    }
}
