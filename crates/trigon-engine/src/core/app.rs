use winit::event::WindowEvent;

use crate::device::Gpu;

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract driven by [`Runtime`](crate::window::Runtime).
///
/// Call order: `on_start` once after the GPU is ready, then `on_frame` once per
/// redraw, interleaved with `on_window_event`. Returning `Exit` from any
/// callback ends the session.
pub trait App {
    /// Called once with the freshly initialized GPU, before the first frame.
    fn on_start(&mut self, gpu: &Gpu<'_>) -> AppControl {
        let _ = gpu;
        AppControl::Continue
    }

    fn on_window_event(&mut self, event: &WindowEvent) -> AppControl {
        let _ = event;
        AppControl::Continue
    }

    /// Called once per presented frame.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
