use std::f32::consts::TAU;
use std::fmt;
use std::str::FromStr;

use crate::math::{multiply, translation_x, uniform_scale, Mat4};

use super::state::{
    TransformState, BOUNCE_HIGH, BOUNCE_LOW, GROW_FACTOR, SHRINK_FACTOR, TRANSLATE_STEP,
};

/// Animation strategy applied once per frame.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum AnimationMode {
    /// X translation bounce followed by uniform scale bounce, both composed
    /// onto the accumulated matrix.
    #[default]
    Bounce,
    /// Absolute rotation about Z written into the top-left 2×2 block.
    Rotate,
}

impl AnimationMode {
    /// Advances `state` by one frame and returns the matrix to upload.
    pub fn tick(self, state: &mut TransformState) -> Mat4 {
        match self {
            AnimationMode::Bounce => bounce(state),
            AnimationMode::Rotate => rotate(state),
        }
        state.current
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AnimationMode::Bounce => "bounce",
            AnimationMode::Rotate => "rotate",
        }
    }
}

/// Bound checks read the matrix as it stands before each composition, so the
/// sign flip lags by one tick and values overshoot the bounds slightly.
fn bounce(state: &mut TransformState) {
    let tx = state.current[12];
    if tx >= BOUNCE_HIGH {
        state.translate_value = -TRANSLATE_STEP;
    }
    if tx <= BOUNCE_LOW {
        state.translate_value = TRANSLATE_STEP;
    }
    state.current = multiply(&translation_x(state.translate_value), &state.current);

    let sx = state.current[0];
    if sx >= BOUNCE_HIGH {
        state.scale_value = SHRINK_FACTOR;
    }
    if sx <= BOUNCE_LOW {
        state.scale_value = GROW_FACTOR;
    }
    state.current = multiply(&uniform_scale(state.scale_value), &state.current);
}

fn rotate(state: &mut TransformState) {
    let angle = (state.angle + state.rotate_value).rem_euclid(TAU);
    // `rem_euclid` rounds up to exactly `TAU` for tiny negative sums.
    state.angle = if angle >= TAU { 0.0 } else { angle };

    let (sin, cos) = state.angle.sin_cos();
    let m = &mut state.current;
    m[0] = cos;
    m[1] = -sin;
    m[4] = sin;
    m[5] = cos;
}

impl fmt::Display for AnimationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a mode name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseModeError {
    pub input: String,
}

impl fmt::Display for ParseModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown animation mode {:?} (expected \"bounce\" or \"rotate\")",
            self.input
        )
    }
}

impl std::error::Error for ParseModeError {}

impl FromStr for AnimationMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bounce" => Ok(AnimationMode::Bounce),
            "rotate" => Ok(AnimationMode::Rotate),
            _ => Err(ParseModeError { input: s.to_string() }),
        }
    }
}
