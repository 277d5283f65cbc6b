//! Distance travelled along a trajectory.

use super::{sample_range, Trajectory};
use crate::math::Line;

/// Length of the curve between `from` and `to`, by composite Simpson's rule on
/// `√(1 + f'(x)²)`.
///
/// `segments` is rounded up to an even count of at least 2. The result does not
/// depend on the order of `from` and `to`.
pub fn arc_length(trajectory: &impl Trajectory, from: f64, to: f64, segments: usize) -> f64 {
    let n = segments.max(2).saturating_add(1) & !1;
    let h = (to - from) / n as f64;
    let speed = |x: f64| trajectory.get_slope(x).hypot(1.);

    let inner: f64 = (1..n)
        .map(|i| {
            let weight = if i % 2 == 1 { 4. } else { 2. };
            weight * speed(h.mul_add(i as f64, from))
        })
        .sum();
    (h / 3. * (speed(from) + inner + speed(to))).abs()
}

/// Length of the polyline joining `segments + 1` evenly spaced samples, which
/// approximates the arc length from below.
pub fn chord_length(trajectory: &impl Trajectory, from: f64, to: f64, segments: usize) -> f64 {
    sample_range(trajectory, from, to, segments)
        .windows(2)
        .map(|w| Line::new(w[0], w[1]).length())
        .sum()
}
