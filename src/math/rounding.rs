//! Cell-unit rounding primitives shared by the snapping algorithm
//!
//! Every helper operates in cell-unit space, where integers are grid lines.
//! The tolerant variants absorb float noise left over from dividing world
//! coordinates by the cell size.

use num_traits::Float;

/// Wrap `t` into `[0, length)`
///
/// Unlike `%`, the result is never negative: `repeat(-0.25, 1.0) == 0.75`.
pub fn repeat<T: Float>(t: T, length: T) -> T {
    let wrapped = t - (t / length).floor() * length;
    // Tiny negative inputs round up to exactly `length`
    if wrapped >= length {
        T::zero()
    } else {
        wrapped.max(T::zero())
    }
}

/// Signed offset that moves `t` onto its nearest integer
///
/// Computed from the fractional part in `[0, 1)`. A fraction of exactly one
/// half rounds down to zero, matching round-half-to-even on that interval.
pub fn snap_correction<T: Float>(t: T) -> T {
    let frac = repeat(t, T::one());
    let half = T::one() / (T::one() + T::one());
    let rounded = if frac > half { T::one() } else { T::zero() };
    rounded - frac
}

/// Floor that treats values within `epsilon` of an integer as that integer
pub fn tolerant_floor<T: Float>(t: T, epsilon: T) -> T {
    let nearest = t.round();
    if (t - nearest).abs() <= epsilon {
        nearest
    } else {
        t.floor()
    }
}

/// Ceil that treats values within `epsilon` of an integer as that integer
pub fn tolerant_ceil<T: Float>(t: T, epsilon: T) -> T {
    let nearest = t.round();
    if (t - nearest).abs() <= epsilon {
        nearest
    } else {
        t.ceil()
    }
}
