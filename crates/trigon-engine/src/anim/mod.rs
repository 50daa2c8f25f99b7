//! Per-frame transform animation.
//!
//! A [`TransformAnimator`] owns the accumulated transform plus the oscillation
//! parameters, and produces one matrix per frame according to its
//! [`AnimationMode`]:
//! - `Bounce` composes an X translation step and a uniform scale step onto the
//!   running matrix, flipping each step's direction at fixed bounds
//! - `Rotate` writes an absolute Z rotation into the matrix
//!
//! Ticking is pure in-memory arithmetic and cannot fail.

mod animator;
mod mode;
mod state;

pub use animator::TransformAnimator;
pub use mode::{AnimationMode, ParseModeError};
pub use state::{
    TransformState, BOUNCE_HIGH, BOUNCE_LOW, GROW_FACTOR, ROTATE_STEP, SHRINK_FACTOR,
    TRANSLATE_STEP,
};
