// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Unused / redundant code
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Camera-view and interaction-state coordinator for walk-through 3D scenes.
//!
//! Vantage drives the "first-person room" style of single-page experience:
//! the camera flies between a catalog of named poses, free orbiting is
//! clamped to a narrow window around whichever pose it last settled on,
//! pointer hover is arbitrated against a registry of tagged scene objects,
//! and overlays (work modals, an about panel, a menu) own interaction focus
//! while open. On narrow portrait viewports, free orbiting is replaced by a
//! drag-driven slide between two fixed end poses.
//!
//! The crate deliberately owns *coordination only*. Rendering, asset
//! loading, ray/geometry intersection math, and content fetching live in
//! the host; they meet this crate at small seams ([`scene::Raycaster`],
//! [`overlay::ContentStore`], [`effect::HostEffect`]).
//!
//! # Key entry points
//!
//! - [`engine::Walkthrough`] - the coordinator; call
//!   [`advance`](engine::Walkthrough::advance) once per frame and forward
//!   input as [`input::InputEvent`] values
//! - [`view::ViewCatalog`] - the named camera poses
//! - [`options::Options`] - runtime tuning (orbit clamp window, hover
//!   suppression, slide sensitivity, fade timing)
//!
//! # Concurrency model
//!
//! Single logical thread. Every time-dependent API takes an explicit
//! `Instant`, so the host's frame loop is the only clock and tests can
//! drive time deterministically. Camera transitions are cancellable
//! interpolations with last-writer-wins semantics; hover is evaluated only
//! inside the tick.

pub mod camera;
pub mod effect;
pub mod engine;
pub mod error;
pub mod hover;
pub mod input;
pub mod interaction;
pub mod options;
pub mod overlay;
pub mod scene;
pub mod slide;
pub mod util;
pub mod view;
