use crate::math::Mat4;

use super::mode::AnimationMode;
use super::state::TransformState;

/// Per-frame transform driver.
///
/// Owns the animation state for one session. Call [`tick`](Self::tick) exactly
/// once per presented frame; the returned matrix is the uniform payload for
/// that frame.
#[derive(Debug, Clone)]
pub struct TransformAnimator {
    mode: AnimationMode,
    state: TransformState,
}

impl TransformAnimator {
    pub fn new(mode: AnimationMode) -> Self {
        Self {
            mode,
            state: TransformState::new(),
        }
    }

    /// Advances one frame and returns the updated transform.
    pub fn tick(&mut self) -> Mat4 {
        self.mode.tick(&mut self.state)
    }

    pub fn mode(&self) -> AnimationMode {
        self.mode
    }

    pub fn state(&self) -> &TransformState {
        &self.state
    }

    /// Transform produced by the most recent tick (identity before the first).
    pub fn current(&self) -> &Mat4 {
        &self.state.current
    }

    /// Restores the initial state without changing the mode.
    pub fn reset(&mut self) {
        self.state = TransformState::new();
    }

    /// Switches strategy. State is reset because the two modes interpret the
    /// accumulated matrix differently.
    pub fn set_mode(&mut self, mode: AnimationMode) {
        self.mode = mode;
        self.reset();
    }
}

impl Default for TransformAnimator {
    fn default() -> Self {
        Self::new(AnimationMode::default())
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::TAU;

    use super::*;
    use crate::anim::state::{
        BOUNCE_HIGH, BOUNCE_LOW, GROW_FACTOR, ROTATE_STEP, SHRINK_FACTOR, TRANSLATE_STEP,
    };
    use crate::math::{approx_eq, uniform_scale, IDENTITY};

    fn bounce() -> TransformAnimator {
        TransformAnimator::new(AnimationMode::Bounce)
    }

    fn rotate() -> TransformAnimator {
        TransformAnimator::new(AnimationMode::Rotate)
    }

    // ── bounce ────────────────────────────────────────────────────────────

    #[test]
    fn starts_at_identity() {
        let a = bounce();
        assert_eq!(*a.current(), IDENTITY);
        assert_eq!(a.state().translate_value, -TRANSLATE_STEP);
        assert_eq!(a.state().rotate_value, ROTATE_STEP);
        assert_eq!(a.state().angle, 0.0);
    }

    #[test]
    fn first_bounce_tick_from_identity() {
        let mut a = bounce();
        let m = a.tick();

        // current[12] == 0.0 <= 0.2 flips the initial negative step.
        assert_eq!(a.state().translate_value, TRANSLATE_STEP);
        // current[0] == 1.0 >= 0.8 selects the shrink factor.
        assert_eq!(a.state().scale_value, SHRINK_FACTOR);

        assert_eq!(m[0], SHRINK_FACTOR);
        assert_eq!(m[5], SHRINK_FACTOR);
        assert_eq!(m[10], SHRINK_FACTOR);
        assert_eq!(m[15], 1.0);
        assert_eq!(m[12], TRANSLATE_STEP * SHRINK_FACTOR);
        assert_eq!(m, *a.current());
    }

    #[test]
    fn scale_above_high_bound_shrinks_next_tick() {
        let mut a = bounce();
        a.state.current = uniform_scale(0.85);
        a.state.scale_value = GROW_FACTOR;

        a.tick();
        assert_eq!(a.state().scale_value, SHRINK_FACTOR);
        assert_eq!(a.current()[0], 0.85 * SHRINK_FACTOR);
    }

    #[test]
    fn scale_below_low_bound_grows_next_tick() {
        let mut a = bounce();
        a.state.current = uniform_scale(0.15);
        a.state.scale_value = SHRINK_FACTOR;

        a.tick();
        assert_eq!(a.state().scale_value, GROW_FACTOR);
        assert_eq!(a.current()[0], 0.15 * GROW_FACTOR);
    }

    #[test]
    fn scale_between_bounds_keeps_direction() {
        let mut a = bounce();
        a.state.current = uniform_scale(0.5);
        a.state.scale_value = GROW_FACTOR;

        a.tick();
        assert_eq!(a.state().scale_value, GROW_FACTOR);
    }

    #[test]
    fn translation_bounces_with_lag() {
        let mut a = bounce();
        let mut flipped_down = false;
        let mut flipped_up_after_down = false;

        for _ in 0..20_000 {
            let before = a.current()[12];
            let step_before = a.state().translate_value;
            a.tick();
            let step_after = a.state().translate_value;

            if before >= BOUNCE_HIGH {
                assert_eq!(step_after, -TRANSLATE_STEP);
            } else if before <= BOUNCE_LOW {
                assert_eq!(step_after, TRANSLATE_STEP);
            } else {
                assert_eq!(step_after, step_before, "sign changed between bounds");
            }

            if step_before > 0.0 && step_after < 0.0 {
                // The flip only happens once the bound has been reached.
                assert!(before >= BOUNCE_HIGH);
                flipped_down = true;
            }
            if flipped_down && step_before < 0.0 && step_after > 0.0 {
                assert!(before <= BOUNCE_LOW);
                flipped_up_after_down = true;
                break;
            }
        }

        assert!(flipped_down, "translation never reached the high bound");
        assert!(flipped_up_after_down, "translation never came back down");
    }

    #[test]
    fn scale_oscillates_between_bounds() {
        let mut a = bounce();
        let mut min = f32::MAX;
        let mut max = f32::MIN;

        for _ in 0..10_000 {
            let m = a.tick();
            min = min.min(m[0]);
            max = max.max(m[0]);
        }

        // Lag lets the value overshoot by at most one step.
        assert!(min <= BOUNCE_LOW && min > BOUNCE_LOW * SHRINK_FACTOR - 1e-4, "min = {min}");
        assert!(max <= 1.0 && max >= BOUNCE_HIGH, "max = {max}");
    }

    #[test]
    fn bounce_preserves_affine_last_row() {
        let mut a = bounce();
        for _ in 0..5_000 {
            let m = a.tick();
            assert_eq!([m[3], m[7], m[11], m[15]], [0.0, 0.0, 0.0, 1.0]);
        }
    }

    // ── rotate ────────────────────────────────────────────────────────────

    #[test]
    fn rotate_tick_writes_rotation_block() {
        let mut a = rotate();
        let m = a.tick();

        let angle = ROTATE_STEP;
        assert_eq!(a.state().angle, angle);
        assert_eq!(m[0], angle.cos());
        assert_eq!(m[1], -angle.sin());
        assert_eq!(m[4], angle.sin());
        assert_eq!(m[5], angle.cos());
    }

    #[test]
    fn rotate_leaves_other_entries_alone() {
        let mut a = rotate();
        for _ in 0..100 {
            a.tick();
        }
        let m = a.current();
        for i in [2, 3, 6, 7, 8, 9, 11, 12, 13, 14] {
            assert_eq!(m[i], 0.0, "index {i}");
        }
        assert_eq!(m[10], 1.0);
        assert_eq!(m[15], 1.0);
    }

    #[test]
    fn rotation_is_periodic() {
        let mut a = rotate();
        let mut b = rotate();
        a.state.angle = 0.3;
        b.state.angle = 0.3 + TAU;

        let ma = a.tick();
        let mb = b.tick();
        assert!(approx_eq(&ma, &mb, 1e-5), "{ma:?} != {mb:?}");
    }

    #[test]
    fn small_negative_step_wraps_below_full_turn() {
        let mut a = rotate();
        a.state.rotate_value = -1e-9;
        a.tick();
        let angle = a.state().angle;
        assert!((0.0..TAU).contains(&angle), "angle = {angle}");
        assert!(approx_eq(a.current(), &IDENTITY, 1e-6));
    }

    #[test]
    fn angle_stays_wrapped() {
        let mut a = rotate();
        a.state.rotate_value = 0.5;
        for _ in 0..1_000 {
            a.tick();
            let angle = a.state().angle;
            assert!((0.0..TAU).contains(&angle), "angle = {angle}");
        }
    }

    #[test]
    fn rotate_does_not_compose() {
        let mut a = rotate();
        a.tick();
        a.tick();
        let once = {
            let mut b = rotate();
            b.state.angle = ROTATE_STEP;
            b.tick()
        };
        assert!(approx_eq(a.current(), &once, 1e-6));
    }

    // ── lifecycle ─────────────────────────────────────────────────────────

    #[test]
    fn reset_restores_initial_state() {
        let mut a = bounce();
        for _ in 0..10 {
            a.tick();
        }
        a.reset();
        assert_eq!(*a.state(), TransformState::new());
        assert_eq!(a.mode(), AnimationMode::Bounce);
    }

    #[test]
    fn set_mode_switches_and_resets() {
        let mut a = bounce();
        a.tick();
        a.set_mode(AnimationMode::Rotate);
        assert_eq!(a.mode(), AnimationMode::Rotate);
        assert_eq!(*a.current(), IDENTITY);
    }

    #[test]
    fn mode_parses_case_insensitively() {
        assert_eq!("bounce".parse::<AnimationMode>(), Ok(AnimationMode::Bounce));
        assert_eq!(" Rotate ".parse::<AnimationMode>(), Ok(AnimationMode::Rotate));
        let err = "spin".parse::<AnimationMode>().unwrap_err();
        assert_eq!(err.input, "spin");
        assert!(err.to_string().contains("spin"));
    }

    #[test]
    fn mode_display_round_trips() {
        for mode in [AnimationMode::Bounce, AnimationMode::Rotate] {
            assert_eq!(mode.to_string().parse::<AnimationMode>(), Ok(mode));
        }
    }
}
