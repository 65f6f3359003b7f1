//! Overlay lifecycle: which surface is up, its fade, and the pose snapshot
//! taken when one opens out of portrait slide mode.
//!
//! The controller owns only the phase machine and the fade clock. The
//! engine drives it: flights that precede a modal, the interaction-flag
//! bookkeeping, and the close-time camera restore all live in
//! `engine/overlay.rs` and arrive here as `begin_open` / `begin_close`
//! calls.

mod content;

pub use content::{ContentStore, PostItem};
use web_time::Instant;

use crate::view::{Category, Pose};

/// The overlay surfaces the experience can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKind {
    /// A work-content modal for one station.
    Work(Category),
    /// The about panel.
    About,
    /// The contact panel (opens in place, no camera move).
    Contact,
    /// The menu. Never moves the camera; mutually exclusive with the
    /// modals like everything else.
    Menu,
}

impl OverlayKind {
    /// The content category this overlay renders, if any.
    #[must_use]
    pub const fn category(self) -> Option<Category> {
        match self {
            Self::Work(category) => Some(category),
            Self::About | Self::Contact | Self::Menu => None,
        }
    }
}

/// Lifecycle phase of the active overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayPhase {
    /// No overlay; the scene has focus.
    #[default]
    Closed,
    /// Fading in.
    Opening,
    /// Fully visible.
    Open,
    /// Fading out.
    Closing,
}

/// Camera snapshot taken when an overlay opens from portrait slide mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SavedSlidePose {
    /// The exact pose at open time.
    pub pose: Pose,
    /// The slide parameter at open time.
    pub t: f32,
}

/// The active overlay plus its restore snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayRecord {
    /// Which surface is up.
    pub kind: OverlayKind,
    /// Present only when opened from portrait slide mode; consumed by the
    /// close-time restore.
    pub saved: Option<SavedSlidePose>,
}

/// Something the phase machine finished this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OverlayEvent {
    /// Fade-in finished; the overlay is fully open.
    Opened(OverlayKind),
    /// Fade-out finished; the record (with any saved pose) is handed back
    /// for the close continuation.
    Closed(OverlayRecord),
}

/// Phase machine and fade clock for the single active overlay.
#[derive(Debug, Default)]
pub struct OverlayController {
    record: Option<OverlayRecord>,
    phase: OverlayPhase,
    fade_start: Option<Instant>,
    opacity: f32,
    /// Opacity at the moment the closing fade started. Closing mid-open
    /// tweens down from wherever the fade-in got to, never jumping to 1.
    fade_from: f32,
}

impl OverlayController {
    /// Create a controller with nothing open.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> OverlayPhase {
        self.phase
    }

    /// The active overlay's kind, if any phase other than `Closed`.
    #[must_use]
    pub fn kind(&self) -> Option<OverlayKind> {
        self.record.map(|r| r.kind)
    }

    /// Current fade opacity in [0, 1].
    #[must_use]
    pub const fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Whether any overlay is up (in any non-closed phase).
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !matches!(self.phase, OverlayPhase::Closed)
    }

    /// Start fading an overlay in. No-op if one is already active.
    pub fn begin_open(
        &mut self,
        kind: OverlayKind,
        saved: Option<SavedSlidePose>,
        now: Instant,
    ) {
        if self.is_active() {
            return;
        }
        self.record = Some(OverlayRecord { kind, saved });
        self.phase = OverlayPhase::Opening;
        self.fade_start = Some(now);
        self.opacity = 0.0;
    }

    /// Start fading the active overlay out. No-op unless opening or open.
    pub fn begin_close(&mut self, now: Instant) {
        match self.phase {
            OverlayPhase::Opening | OverlayPhase::Open => {
                self.phase = OverlayPhase::Closing;
                self.fade_start = Some(now);
                self.fade_from = self.opacity;
            }
            OverlayPhase::Closed | OverlayPhase::Closing => {}
        }
    }

    /// Step the fade; reports a phase completion at most once per call.
    pub fn advance(
        &mut self,
        fade_secs: f32,
        now: Instant,
    ) -> Option<OverlayEvent> {
        let start = self.fade_start?;
        let t = (now.duration_since(start).as_secs_f32()
            / fade_secs.max(f32::EPSILON))
        .clamp(0.0, 1.0);
        match self.phase {
            OverlayPhase::Opening => {
                self.opacity = t;
                if t >= 1.0 {
                    self.phase = OverlayPhase::Open;
                    self.fade_start = None;
                    return self.record.map(|r| OverlayEvent::Opened(r.kind));
                }
            }
            OverlayPhase::Closing => {
                self.opacity = self.fade_from * (1.0 - t);
                if t >= 1.0 {
                    self.phase = OverlayPhase::Closed;
                    self.fade_start = None;
                    return self.record.take().map(OverlayEvent::Closed);
                }
            }
            OverlayPhase::Closed | OverlayPhase::Open => {}
        }
        None
    }
}
