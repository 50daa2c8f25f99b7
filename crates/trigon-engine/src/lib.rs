//! Trigon engine crate.
//!
//! Animated-transform core ([`math`], [`anim`]) plus the platform and GPU
//! runtime that presents it ([`device`], [`window`], [`core`], [`render`]).

pub mod anim;
pub mod core;
pub mod device;
pub mod logging;
pub mod math;
pub mod render;
pub mod time;
pub mod window;
