mod config;
mod session;

use anyhow::{Context, Result};
use trigon_engine::device::{GpuInit, InitError};
use trigon_engine::logging::{init_logging, LoggingConfig};
use trigon_engine::window::{Runtime, RuntimeConfig};

use config::StudioConfig;
use session::RenderSession;

fn main() {
    init_logging(LoggingConfig::default());

    let config = StudioConfig::from_env();
    log::info!("starting trigon-studio in {} mode", config.mode);

    if let Err(e) = run(&config) {
        log::error!("{}: {e:#}", failure_summary(&e));
        std::process::exit(1);
    }
}

fn run(config: &StudioConfig) -> Result<()> {
    let runtime_config = RuntimeConfig {
        title: config.title.clone(),
        initial_size: config.size,
    };
    let session = RenderSession::new(config);

    Runtime::run(runtime_config, GpuInit::default(), session)
        .with_context(|| format!("{} session ended abnormally", config.mode))
}

/// One-line reason shown ahead of the error chain.
fn failure_summary(err: &anyhow::Error) -> &'static str {
    match err.downcast_ref::<InitError>() {
        Some(InitError::UnsupportedBackend) => "this platform offers no supported graphics backend",
        Some(InitError::NoCompatibleDevice) => "no compatible GPU adapter or device found",
        None => "trigon runtime error",
    }
}
