use trigon_engine::anim::AnimationMode;
use winit::dpi::LogicalSize;

/// Environment variable selecting the animation mode.
pub const MODE_VAR: &str = "TRIGON_MODE";

/// Studio settings. Read from the environment; there are no CLI flags.
#[derive(Debug, Clone)]
pub struct StudioConfig {
    pub title: String,
    pub size: LogicalSize<f64>,
    pub mode: AnimationMode,
    pub clear: wgpu::Color,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            title: "trigon".to_string(),
            size: LogicalSize::new(960.0, 720.0),
            mode: AnimationMode::default(),
            clear: wgpu::Color::BLACK,
        }
    }
}

impl StudioConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable lookup.
    ///
    /// An unrecognized mode is logged and replaced by the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(MODE_VAR) {
            match raw.parse::<AnimationMode>() {
                Ok(mode) => config.mode = mode,
                Err(e) => log::warn!("{MODE_VAR}: {e}; using {}", config.mode),
            }
        }

        config.title = format!("trigon ({})", config.mode);
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(value: Option<&'static str>) -> impl Fn(&str) -> Option<String> {
        move |key: &str| {
            assert_eq!(key, MODE_VAR);
            value.map(str::to_string)
        }
    }

    #[test]
    fn defaults_to_bounce() {
        let c = StudioConfig::from_lookup(lookup(None));
        assert_eq!(c.mode, AnimationMode::Bounce);
        assert_eq!(c.title, "trigon (bounce)");
    }

    #[test]
    fn reads_rotate_mode() {
        let c = StudioConfig::from_lookup(lookup(Some("ROTATE")));
        assert_eq!(c.mode, AnimationMode::Rotate);
        assert_eq!(c.title, "trigon (rotate)");
    }

    #[test]
    fn unknown_mode_falls_back() {
        let c = StudioConfig::from_lookup(lookup(Some("wobble")));
        assert_eq!(c.mode, AnimationMode::Bounce);
    }
}
