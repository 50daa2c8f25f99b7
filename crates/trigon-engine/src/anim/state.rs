use crate::math::{Mat4, IDENTITY};

/// Translation step magnitude per tick (NDC units).
pub const TRANSLATE_STEP: f32 = 0.001;

/// Rotation step per tick, in radians.
pub const ROTATE_STEP: f32 = 0.001;

/// Scale factor applied per tick while shrinking.
pub const SHRINK_FACTOR: f32 = 0.999;

/// Scale factor applied per tick while growing.
pub const GROW_FACTOR: f32 = 1.001;

/// Upper bound checked against the accumulated matrix.
pub const BOUNCE_HIGH: f32 = 0.8;

/// Lower bound checked against the accumulated matrix.
pub const BOUNCE_LOW: f32 = 0.2;

/// Mutable animation state, exclusively owned by one animator.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TransformState {
    /// Accumulated transform uploaded each frame.
    pub current: Mat4,

    /// Per-tick scale factor. Overwritten by the first bound check before use.
    pub scale_value: f32,

    /// Signed per-tick X translation.
    pub translate_value: f32,

    /// Signed per-tick angular step.
    pub rotate_value: f32,

    /// Accumulated rotation angle in `[0, 2π)`.
    pub angle: f32,
}

impl TransformState {
    pub fn new() -> Self {
        Self {
            current: IDENTITY,
            scale_value: -0.001,
            translate_value: -TRANSLATE_STEP,
            rotate_value: ROTATE_STEP,
            angle: 0.0,
        }
    }
}

impl Default for TransformState {
    fn default() -> Self {
        Self::new()
    }
}
