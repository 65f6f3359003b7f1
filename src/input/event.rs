//! The input event vocabulary.
//!
//! The host (browser page or native shell) translates its raw events into
//! these and forwards them between ticks. Pointer coordinates arrive in CSS
//! pixels with the origin at the top-left; conversion to pick rays happens
//! inside the engine against the current viewport.

/// One host input event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// The pointer moved. Re-arms hover if a suppression deadline has
    /// passed.
    PointerMoved {
        /// Pointer x in CSS pixels.
        x: f32,
        /// Pointer y in CSS pixels.
        y: f32,
    },
    /// Primary button / touch went down.
    PointerPressed {
        /// Pointer x in CSS pixels.
        x: f32,
        /// Pointer y in CSS pixels.
        y: f32,
    },
    /// Primary button / touch came up.
    PointerReleased {
        /// Pointer x in CSS pixels.
        x: f32,
        /// Pointer y in CSS pixels.
        y: f32,
    },
    /// A completed mouse click.
    ///
    /// Browsers synthesize one of these right after a tap; the engine
    /// swallows it when a [`TouchEnded`](Self::TouchEnded) was just
    /// handled.
    Clicked {
        /// Pointer x in CSS pixels.
        x: f32,
        /// Pointer y in CSS pixels.
        y: f32,
    },
    /// A touch lifted; acts as the tap interaction.
    TouchEnded {
        /// Pointer x in CSS pixels.
        x: f32,
        /// Pointer y in CSS pixels.
        y: f32,
    },
    /// Host orbit-control rotation delta (already damped), radians.
    OrbitRotated {
        /// Azimuth delta.
        d_azimuth: f32,
        /// Polar delta.
        d_polar: f32,
    },
    /// Host orbit-control zoom delta (added to the orbit distance).
    OrbitZoomed {
        /// Distance delta.
        d_distance: f32,
    },
    /// The viewport was resized or rotated.
    Resized {
        /// New width in CSS pixels.
        width: f32,
        /// New height in CSS pixels.
        height: f32,
    },
}
