//! Core engine-facing contracts.
//!
//! The interface between the runtime (platform loop) and the application: a
//! callback trait plus the context handed to it each frame.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::FrameCtx;
