use std::fmt;

/// Fatal startup failure. Reported once; the session does not start.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum InitError {
    /// The platform exposes no graphics API wgpu can present through.
    UnsupportedBackend,
    /// A backend exists but no adapter/device satisfying the requirements
    /// could be acquired.
    NoCompatibleDevice,
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitError::UnsupportedBackend => f.write_str("no supported graphics backend"),
            InitError::NoCompatibleDevice => f.write_str("no compatible GPU device"),
        }
    }
}

impl std::error::Error for InitError {}

/// High-level response after a surface error.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Surface was reconfigured; rendering may resume next frame.
    Reconfigured,
    /// Transient error; skip the current frame.
    SkipFrame,
    /// Fatal error (commonly OOM); terminate gracefully.
    Fatal,
}

#[cfg(test)]
mod tests {
    use anyhow::Context;

    use super::*;

    #[test]
    fn display_is_human_readable() {
        assert_eq!(InitError::UnsupportedBackend.to_string(), "no supported graphics backend");
        assert_eq!(InitError::NoCompatibleDevice.to_string(), "no compatible GPU device");
    }

    #[test]
    fn recoverable_from_anyhow_context() {
        let res: std::result::Result<(), std::io::Error> =
            Err(std::io::Error::other("adapter request failed"));
        let err = res.context(InitError::NoCompatibleDevice).unwrap_err();

        assert_eq!(err.downcast_ref::<InitError>(), Some(&InitError::NoCompatibleDevice));
        assert!(format!("{err:#}").contains("adapter request failed"));
    }
}
