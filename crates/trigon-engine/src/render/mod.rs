//! GPU rendering subsystem.
//!
//! Each renderer owns its GPU resources (pipelines, buffers) and caches them
//! across frames. Renderers record into a [`RenderTarget`] that already holds
//! the cleared frame.

mod ctx;
pub mod triangle;

pub use ctx::{RenderCtx, RenderTarget};
pub use triangle::TriangleRenderer;
