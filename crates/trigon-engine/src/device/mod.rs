//! GPU device + surface management.
//!
//! This module is responsible for:
//! - creating the wgpu Instance/Adapter/Device/Queue
//! - creating & configuring the Surface (swapchain)
//! - acquiring frames and providing encoders/views for rendering
//!
//! Startup failures surface as [`InitError`] attached to the returned
//! `anyhow::Error`; use `downcast_ref::<InitError>()` to classify them.

mod context;
mod error;
mod init;
mod surface;

pub use context::{Gpu, GpuFrame};
pub use error::{InitError, SurfaceErrorAction};
pub use init::GpuInit;
