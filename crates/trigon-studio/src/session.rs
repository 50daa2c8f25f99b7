use trigon_engine::anim::{AnimationMode, TransformAnimator};
use trigon_engine::core::{App, AppControl, FrameCtx};
use trigon_engine::device::Gpu;
use trigon_engine::render::TriangleRenderer;
use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::config::StudioConfig;

/// Frames between transform trace logs.
const TRACE_EVERY: u64 = 600;

/// One animation session: the animator plus the GPU objects it drives.
///
/// Device and queue stay owned by the runtime and are lent in each frame;
/// everything created here lives exactly as long as the session.
pub struct RenderSession {
    animator: TransformAnimator,
    renderer: TriangleRenderer,
    clear: wgpu::Color,
}

impl RenderSession {
    pub fn new(config: &StudioConfig) -> Self {
        Self {
            animator: TransformAnimator::new(config.mode),
            renderer: TriangleRenderer::new(),
            clear: config.clear,
        }
    }

    pub fn animator(&self) -> &TransformAnimator {
        &self.animator
    }

    /// Keyboard controls:
    /// - `Escape` ends the session
    /// - `Space` switches between bounce and rotate (restarting the animation)
    /// - `R` restarts the current animation
    pub fn handle_key(&mut self, key: KeyCode) -> AppControl {
        match key {
            KeyCode::Escape => return AppControl::Exit,
            KeyCode::Space => {
                let next = match self.animator.mode() {
                    AnimationMode::Bounce => AnimationMode::Rotate,
                    AnimationMode::Rotate => AnimationMode::Bounce,
                };
                log::info!("animation mode: {next}");
                self.animator.set_mode(next);
            }
            KeyCode::KeyR => {
                log::info!("animation reset");
                self.animator.reset();
            }
            _ => {}
        }
        AppControl::Continue
    }
}

impl App for RenderSession {
    fn on_start(&mut self, gpu: &Gpu<'_>) -> AppControl {
        self.renderer.prepare(gpu.device(), gpu.surface_format());
        log::info!(
            "session started: mode {}, surface {:?}",
            self.animator.mode(),
            gpu.surface_format()
        );
        AppControl::Continue
    }

    fn on_window_event(&mut self, event: &WindowEvent) -> AppControl {
        let WindowEvent::KeyboardInput { event, .. } = event else {
            return AppControl::Continue;
        };
        if event.state != ElementState::Pressed || event.repeat {
            return AppControl::Continue;
        }
        match event.physical_key {
            PhysicalKey::Code(code) => self.handle_key(code),
            PhysicalKey::Unidentified(_) => AppControl::Continue,
        }
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let frame_index = ctx.time.frame_index;
        let (animator, renderer) = (&mut self.animator, &mut self.renderer);

        // Ticked inside `draw` so skipped frames leave the animation where it was.
        ctx.render(self.clear, |rctx, target| {
            let transform = animator.tick();
            if frame_index % TRACE_EVERY == 0 {
                log::trace!("frame {frame_index} transform {transform:?}");
            }
            renderer.render(rctx, target, &transform);
        })
    }
}
