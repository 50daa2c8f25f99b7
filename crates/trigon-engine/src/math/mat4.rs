/// 4×4 column-major matrix stored as `[f32; 16]`.
///
/// Layout matches WGSL `mat4x4<f32>`: element `(row, col)` lives at
/// `col * 4 + row`, so the translation column occupies indices 12..15.
pub type Mat4 = [f32; 16];

/// Identity matrix.
pub const IDENTITY: Mat4 = [
    1.0, 0.0, 0.0, 0.0, // col 0
    0.0, 1.0, 0.0, 0.0, // col 1
    0.0, 0.0, 1.0, 0.0, // col 2
    0.0, 0.0, 0.0, 1.0, // col 3
];

/// Returns `a * b`.
///
/// Read as successive transforms, `b` is applied first and `a` after it.
/// Inputs are never modified; NaN and infinity propagate unchecked.
pub fn multiply(a: &Mat4, b: &Mat4) -> Mat4 {
    let mut out = [0.0f32; 16];

    for row in 0..4 {
        let a0 = a[row];
        let a1 = a[row + 4];
        let a2 = a[row + 8];
        let a3 = a[row + 12];

        for col in 0..4 {
            let c = col * 4;
            out[c + row] = a0 * b[c] + a1 * b[c + 1] + a2 * b[c + 2] + a3 * b[c + 3];
        }
    }

    out
}

/// Translation along X by `dx`.
pub fn translation_x(dx: f32) -> Mat4 {
    let mut m = IDENTITY;
    m[12] = dx;
    m
}

/// Uniform scale on X/Y/Z; `w` is left at 1.
pub fn uniform_scale(s: f32) -> Mat4 {
    let mut m = IDENTITY;
    m[0] = s;
    m[5] = s;
    m[10] = s;
    m
}

/// Element-wise comparison with absolute tolerance `eps`.
pub fn approx_eq(a: &Mat4, b: &Mat4, eps: f32) -> bool {
    a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() <= eps)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Mat4 {
        [
            2.0, 0.5, -1.0, 0.0, //
            0.25, 3.0, 0.0, 0.0, //
            1.5, -0.75, 4.0, 0.0, //
            5.0, 6.0, 7.0, 1.0,
        ]
    }

    // ── identity ──────────────────────────────────────────────────────────

    #[test]
    fn identity_left_is_noop() {
        let m = sample();
        assert_eq!(multiply(&IDENTITY, &m), m);
    }

    #[test]
    fn identity_right_is_noop() {
        let m = sample();
        assert_eq!(multiply(&m, &IDENTITY), m);
    }

    #[test]
    fn identity_left_keeps_scale_translate_operand() {
        let b: Mat4 = [
            2.0, 0.0, 0.0, 0.0, //
            0.0, 3.0, 0.0, 0.0, //
            0.0, 0.0, 4.0, 0.0, //
            5.0, 6.0, 7.0, 1.0,
        ];
        assert_eq!(multiply(&IDENTITY, &b), b);
    }

    // ── composition ───────────────────────────────────────────────────────

    #[test]
    fn associative_within_tolerance() {
        let a = sample();
        let b = multiply(&uniform_scale(0.999), &translation_x(-0.3));
        let c: Mat4 = [
            0.0, 1.0, 0.0, 0.0, //
            -1.0, 0.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.1, 0.2, 0.3, 1.0,
        ];

        let left = multiply(&multiply(&a, &b), &c);
        let right = multiply(&a, &multiply(&b, &c));
        assert!(approx_eq(&left, &right, 1e-5), "{left:?} != {right:?}");
    }

    #[test]
    fn left_operand_applies_last() {
        // scale(2) * translate(1): the translation is scaled too.
        let m = multiply(&uniform_scale(2.0), &translation_x(1.0));
        assert_eq!(m[12], 2.0);

        // translate(1) * scale(2): the translation is untouched.
        let m = multiply(&translation_x(1.0), &uniform_scale(2.0));
        assert_eq!(m[12], 1.0);
        assert_eq!(m[0], 2.0);
    }

    #[test]
    fn does_not_touch_inputs() {
        let a = sample();
        let b = translation_x(0.5);
        let (a0, b0) = (a, b);
        let _ = multiply(&a, &b);
        assert_eq!(a, a0);
        assert_eq!(b, b0);
    }

    #[test]
    fn nan_propagates() {
        let mut a = IDENTITY;
        a[0] = f32::NAN;
        let m = multiply(&a, &IDENTITY);
        assert!(m[0].is_nan());
    }

    // ── builders ──────────────────────────────────────────────────────────

    #[test]
    fn translation_x_only_sets_column_three() {
        let m = translation_x(-0.001);
        let mut expected = IDENTITY;
        expected[12] = -0.001;
        assert_eq!(m, expected);
    }

    #[test]
    fn uniform_scale_keeps_w() {
        let m = uniform_scale(1.001);
        assert_eq!([m[0], m[5], m[10], m[15]], [1.001, 1.001, 1.001, 1.0]);
    }
}
