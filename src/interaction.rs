//! The shared interaction flags and the pure guard predicates over them.
//!
//! Every component reads and writes one [`InteractionState`] owned by the
//! engine. The guards are plain functions of the current flags; actions
//! whose guard does not hold must short-circuit to a no-op.

use web_time::Instant;

/// Session-wide interaction flags.
///
/// At most one overlay is open at a time (`modal_open` and `menu_open` are
/// never both set); while either is set, hover arbitration reports no
/// hover.
#[derive(Debug, Clone, Copy, PartialEq)]
#[allow(clippy::struct_excessive_bools)]
pub struct InteractionState {
    /// Set once the intro reveal starts; nothing responds before that.
    pub interaction_enabled: bool,
    /// A work/about/contact overlay is open (or fading).
    pub modal_open: bool,
    /// The menu is open (or fading).
    pub menu_open: bool,
    /// A camera flight is in progress.
    pub camera_moving: bool,
    /// Viewport is portrait; slide navigation substitutes for orbiting.
    pub portrait_mode: bool,
    /// Hover was re-armed by a pointer move since the last suppression.
    pub hover_armed: bool,
    /// Hover stays cleared until this deadline passes.
    pub suppress_hover_until: Option<Instant>,
    /// Slide writes to the camera are blocked (close-and-restore race
    /// guard).
    pub suppress_slide: bool,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            interaction_enabled: false,
            modal_open: false,
            menu_open: false,
            camera_moving: false,
            portrait_mode: false,
            hover_armed: true,
            suppress_hover_until: None,
            suppress_slide: false,
        }
    }
}

impl InteractionState {
    /// Whether clicking/touching scene objects may act.
    #[must_use]
    pub const fn can_click(&self) -> bool {
        self.interaction_enabled && !self.modal_open && !self.camera_moving
    }

    /// Whether the menu may be opened.
    #[must_use]
    pub const fn can_open_menu(&self) -> bool {
        self.interaction_enabled && !self.modal_open
    }

    /// Whether a slide drag may move the camera.
    ///
    /// `suppress_slide` covers the close-and-restore window, where a late
    /// drag event would otherwise stomp the return flight.
    #[must_use]
    pub const fn can_slide(&self) -> bool {
        self.interaction_enabled
            && self.portrait_mode
            && !self.menu_open
            && !self.modal_open
            && !self.camera_moving
            && !self.suppress_slide
    }

    /// Whether hover arbitration may report a hover at `now`.
    ///
    /// Overlays, camera motion, an unarmed pointer, or an active
    /// suppression window all force the no-hover outcome.
    #[must_use]
    pub fn hover_allowed(&self, now: Instant) -> bool {
        self.interaction_enabled
            && !self.modal_open
            && !self.menu_open
            && !self.camera_moving
            && self.hover_armed
            && self
                .suppress_hover_until
                .is_none_or(|deadline| now >= deadline)
    }

    /// Record a hover suppression window ending at `deadline`.
    ///
    /// An already-pending later deadline wins; suppressions never shorten
    /// each other.
    pub fn suppress_hover(&mut self, deadline: Instant) {
        let deadline = match self.suppress_hover_until {
            Some(existing) if existing > deadline => existing,
            _ => deadline,
        };
        self.suppress_hover_until = Some(deadline);
        self.hover_armed = false;
    }
}
