//! Commands the coordinator hands back to the host.
//!
//! The engine never touches the DOM, window, or renderer directly; every
//! outward action is one of these values, returned from
//! [`advance`](crate::engine::Walkthrough::advance) or
//! [`handle_event`](crate::engine::Walkthrough::handle_event) for the host
//! to execute.

use crate::overlay::{OverlayKind, PostItem};
use crate::view::Category;

/// Pointer cursor styles the host can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    /// The default arrow.
    Default,
    /// The hand/pointer cursor over clickable objects.
    Pointer,
}

/// One outward command.
#[derive(Debug, Clone, PartialEq)]
pub enum HostEffect {
    /// Switch the pointer cursor.
    SetCursor(Cursor),
    /// Open an external URL (social links).
    OpenUrl(String),
    /// Make an overlay's surface visible; opacity then follows
    /// [`overlay_opacity`](crate::engine::Walkthrough::overlay_opacity).
    ShowOverlay(OverlayKind),
    /// Remove an overlay's surface after its fade-out finished.
    HideOverlay(OverlayKind),
    /// Lay out a category's content inside its modal. `items` may be
    /// empty; the host renders its empty-state then.
    RenderContent {
        /// Which station's modal.
        category: Category,
        /// The items currently known for it.
        items: Vec<PostItem>,
    },
    /// Recompute content layout after a viewport change while a modal is
    /// open.
    RelayoutContent,
}
