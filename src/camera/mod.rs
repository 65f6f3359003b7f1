//! Camera state: the orbit rig primitive and the flight director above it.

mod director;
mod rig;

pub use director::{AfterFly, CameraDirector};
pub use rig::{OrbitLimits, OrbitRig};
