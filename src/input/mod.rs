//! Platform-agnostic input events forwarded by the host shell.

mod event;

pub use event::InputEvent;
