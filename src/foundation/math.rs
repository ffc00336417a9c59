use crate::foundation::core::Point;

/// Ranges narrower than this are treated as a single value by [`lerp`].
pub const EPSILON: f64 = 1e-6;

/// Linear interpolation from `min` to `max` with `t` clamped to `[0, 1]`.
///
/// Returns `min` unchanged when the two ends are effectively equal, so callers never see the
/// rounding noise of `min + 0 * t`.
pub fn lerp(min: f64, max: f64, t: f64) -> f64 {
    let t = clamp(t, 0.0, 1.0);
    if (max - min).abs() < EPSILON {
        return min;
    }
    min + (max - min) * t
}

/// Component-wise [`lerp`] of two points.
pub fn lerp_point(from: Point, to: Point, t: f64) -> Point {
    Point::new(lerp(from.x, to.x, t), lerp(from.y, to.y, t))
}

/// Clamp `v` to `[lo, hi]`. NaN passes through as `lo`.
pub fn clamp(v: f64, lo: f64, hi: f64) -> f64 {
    if v.is_nan() {
        return lo;
    }
    v.max(lo).min(hi)
}

pub fn distance_squared(a: Point, b: Point) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    dx * dx + dy * dy
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
