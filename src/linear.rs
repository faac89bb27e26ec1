//! Homogeneous 3-vector arithmetic shared by targets and weights.

/// Coefficients `(a, b, c)` of `a·x + b·y + c`, or an augmented point
/// `(x, y, 1.0)`.
pub type Vector3 = [f64; 3];

/// Zero hypothesis every training run starts from.
pub const ZERO: Vector3 = [0.0; 3];

/// # Overview
///
/// Dot product of two 3-vectors.
#[inline(always)]
pub fn dot(a: &Vector3, b: &Vector3) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

/// # Overview
///
/// Three-way sign: `-1`, `0` or `1`.
///
/// Unlike [`f64::signum`], an exact zero (of either sign) maps to `0`, so a
/// point lying on a boundary gets its own label class. NaN also maps to `0`.
#[inline(always)]
pub fn sign(v: f64) -> i8 {
    if v > 0.0 {
        1
    } else if v < 0.0 {
        -1
    } else {
        0
    }
}

/// # Overview
///
/// Label of `point` under the linear function `w`: `sign(w · point)`.
#[inline(always)]
pub fn classify(w: &Vector3, point: &Vector3) -> i8 {
    sign(dot(w, point))
}

/// # Overview
///
/// In-place `w += scale * v`.
#[inline]
pub fn add_scaled(w: &mut Vector3, scale: f64, v: &Vector3) {
    for (wi, vi) in w.iter_mut().zip(v) {
        *wi += scale * vi;
    }
}
