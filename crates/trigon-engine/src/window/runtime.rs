use anyhow::{anyhow, Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::{App as CoreApp, AppControl, FrameCtx};
use crate::device::{Gpu, GpuInit};
use crate::time::{FrameClock, FrameTime};

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "trigon".to_string(),
            initial_size: LogicalSize::new(960.0, 720.0),
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens one window, initializes the GPU against it and drives `app` until
    /// it exits or the window closes.
    ///
    /// A GPU initialization failure ends the session before the first frame and
    /// is returned here.
    pub fn run<A>(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Result<()>
    where
        A: 'static + CoreApp,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, gpu_init, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.startup_error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

#[self_referencing]
struct SessionEntry {
    clock: FrameClock,

    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

struct AppState<A>
where
    A: CoreApp + 'static,
{
    config: RuntimeConfig,
    gpu_init: GpuInit,
    app: A,

    session: Option<SessionEntry>,
    startup_error: Option<anyhow::Error>,
    exit_requested: bool,
}

impl<A> AppState<A>
where
    A: CoreApp + 'static,
{
    fn new(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Self {
        Self {
            config,
            gpu_init,
            app,
            session: None,
            startup_error: None,
            exit_requested: false,
        }
    }

    fn request_exit(&mut self, event_loop: &ActiveEventLoop) {
        self.exit_requested = true;
        event_loop.exit();
    }

    fn start_session(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let gpu_init = self.gpu_init.clone();

        let session = SessionEntryTryBuilder {
            clock: FrameClock::default(),
            window,
            gpu_builder: |w| pollster::block_on(Gpu::new(w, gpu_init)),
        }
        .try_build()?;

        let control = session.with_gpu(|gpu| self.app.on_start(gpu));
        if control == AppControl::Exit {
            return Err(anyhow!("application declined to start"));
        }

        session.with_window(|w| w.request_redraw());
        self.session = Some(session);
        Ok(())
    }

    fn redraw(&mut self) -> AppControl {
        let (app, session) = (&mut self.app, &mut self.session);
        let Some(session) = session.as_mut() else {
            return AppControl::Continue;
        };

        session.with_mut(|fields| {
            let ft: FrameTime = fields.clock.tick();
            if ft.frame_index > 0 && ft.frame_index % 600 == 0 {
                log::debug!(
                    "frame {} ({:.1} fps over last frame, {:.1?} elapsed)",
                    ft.frame_index,
                    1.0 / ft.dt,
                    fields.clock.elapsed()
                );
            }

            let mut ctx = FrameCtx {
                window: fields.window,
                gpu: fields.gpu,
                time: ft,
            };
            app.on_frame(&mut ctx)
        })
    }
}

impl<A> ApplicationHandler for AppState<A>
where
    A: CoreApp + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.session.is_some() || self.exit_requested {
            return;
        }

        if let Err(e) = self.start_session(event_loop) {
            log::debug!("session failed to start: {e:#}");
            self.startup_error = Some(e);
            self.request_exit(event_loop);
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        // Continuous animation: re-arm the next frame after each one.
        event_loop.set_control_flow(ControlFlow::Wait);
        if let Some(session) = self.session.as_ref() {
            session.with_window(|w| w.request_redraw());
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        if self.app.on_window_event(&event) == AppControl::Exit {
            self.request_exit(event_loop);
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                log::info!("window closed; ending session");
                self.session = None;
                self.request_exit(event_loop);
            }

            WindowEvent::Resized(new_size) => {
                if let Some(session) = self.session.as_mut() {
                    session.with_gpu_mut(|gpu| gpu.resize(new_size));
                    session.with_window(|w| w.request_redraw());
                }
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(session) = self.session.as_mut() {
                    let new_size = session.with_window(|w| w.inner_size());
                    session.with_gpu_mut(|gpu| gpu.resize(new_size));
                    session.with_window(|w| w.request_redraw());
                }
            }

            WindowEvent::Occluded(false) => {
                if let Some(session) = self.session.as_mut() {
                    session.with_clock_mut(|c| c.reset());
                }
            }

            WindowEvent::RedrawRequested => {
                if self.redraw() == AppControl::Exit {
                    self.session = None;
                    self.request_exit(event_loop);
                }
            }

            _ => {}
        }
    }
}
