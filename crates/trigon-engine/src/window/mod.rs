//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and the session window, and wires them to the
//! GPU layer. Redraws are requested continuously, one frame after another.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
