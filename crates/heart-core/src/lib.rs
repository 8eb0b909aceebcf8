//! Platform-free animation logic for the heart glow effect.
//!
//! Frontends supply a [`Surface`] implementation and call
//! [`HeartAnimation::tick`] once per display frame; everything else (trail
//! history, particle lifetimes, draw ordering) is handled here and is
//! testable on the host.

pub mod constants;
pub mod curve;
pub mod frame;
pub mod particle;
pub mod surface;
pub mod trail;

pub use constants::*;
pub use curve::*;
pub use frame::*;
pub use particle::*;
pub use surface::*;
pub use trail::*;
