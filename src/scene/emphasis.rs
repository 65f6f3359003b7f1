//! Timed transform animations: hover emphasis and the intro reveal.

use web_time::{Duration, Instant};

use super::Transform;
use crate::util::easing::EasingFunction;

/// An in-flight interpolation between two transforms.
///
/// Sampling is pure: the animation holds its endpoints and start time, and
/// [`sample`](Self::sample) maps any `now` onto the curve. Overshooting
/// eases may briefly take the transform past `to` before settling.
#[derive(Debug, Clone)]
pub struct TransformAnim {
    from: Transform,
    to: Transform,
    start: Instant,
    duration: Duration,
    easing: EasingFunction,
}

impl TransformAnim {
    /// Start an animation at `start`, landing on `to` after `duration`.
    #[must_use]
    pub const fn new(
        from: Transform,
        to: Transform,
        start: Instant,
        duration: Duration,
        easing: EasingFunction,
    ) -> Self {
        Self {
            from,
            to,
            start,
            duration,
            easing,
        }
    }

    /// The transform at `now`, plus whether the animation has finished.
    ///
    /// Before `start` (a staggered animation not yet begun) this returns
    /// the `from` transform unchanged.
    #[must_use]
    pub fn sample(&self, now: Instant) -> (Transform, bool) {
        if now < self.start {
            return (self.from, false);
        }
        let elapsed = now.duration_since(self.start);
        if elapsed >= self.duration {
            return (self.to, true);
        }
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        (
            Transform::lerp(self.from, self.to, self.easing.evaluate(t)),
            false,
        )
    }

    /// The endpoint this animation lands on.
    #[must_use]
    pub const fn to(&self) -> Transform {
        self.to
    }
}
