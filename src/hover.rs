//! Pointer-hover arbitration over the scene registry.
//!
//! Evaluated in exactly one place, the engine tick, so hover never flips
//! mid-callback. The arbiter decides which object (if any) carries the
//! emphasis animation and which cursor the host should show; the gating
//! itself lives in [`InteractionState::hover_allowed`].

use log::debug;
use web_time::Instant;

use crate::effect::Cursor;
use crate::interaction::InteractionState;
use crate::options::HoverOptions;
use crate::scene::{ObjectId, RayHit, SceneRegistry};

/// Tracks the currently hovered object and applies emphasis flips.
#[derive(Debug, Default)]
pub struct HoverArbiter {
    current: Option<ObjectId>,
}

impl HoverArbiter {
    /// Create an arbiter with nothing hovered.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently hovered object.
    #[must_use]
    pub const fn current(&self) -> Option<ObjectId> {
        self.current
    }

    /// Evaluate hover for this tick against the latest raycast hits.
    ///
    /// When gated out (overlay open, camera moving, unarmed, or inside a
    /// suppression window) any held hover is reversed and the cursor goes
    /// back to default. Otherwise the nearest hit wins if it carries the
    /// `hoverable` tag (a closer raycastable occludes whatever is behind
    /// it); a change of winner reverses the old emphasis and starts the
    /// new one.
    pub fn evaluate(
        &mut self,
        state: &InteractionState,
        hits: &[RayHit],
        registry: &mut SceneRegistry,
        opts: &HoverOptions,
        now: Instant,
    ) -> Cursor {
        if !state.hover_allowed(now) {
            self.clear(registry, opts, now);
            return Cursor::Default;
        }

        // Only the nearest hit counts: a raycastable wall in front of a
        // station occludes it.
        let candidate = hits.first().and_then(|hit| {
            registry
                .get(hit.object)
                .and_then(|obj| obj.tags.hoverable.then_some(hit.object))
        });

        if candidate != self.current {
            if let Some(old) = self.current {
                registry.end_emphasis(old, opts, now);
            }
            if let Some(new) = candidate {
                if let Some(obj) = registry.get(new) {
                    debug!("hover -> {}", obj.name);
                }
                registry.begin_emphasis(new, opts, now);
            }
            self.current = candidate;
        }

        let pointer = hits.first().is_some_and(|hit| {
            registry
                .get(hit.object)
                .is_some_and(|obj| obj.tags.pointer)
        });
        if pointer {
            Cursor::Pointer
        } else {
            Cursor::Default
        }
    }

    /// Drop any held hover, reversing its emphasis.
    pub fn clear(
        &mut self,
        registry: &mut SceneRegistry,
        opts: &HoverOptions,
        now: Instant,
    ) {
        if let Some(old) = self.current.take() {
            registry.end_emphasis(old, opts, now);
        }
    }
}
