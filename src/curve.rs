//! Cubic Bézier evaluation.
//!
//! Two ways to get the same point: the Bernstein polynomial and
//! de Casteljau's repeated interpolation. The rasterizer uses one per mode.

use crate::types::ControlPoint;

/// Point on the segment a→b at parameter `t` (`a` at 0, `b` at 1).
#[inline]
pub fn lerp(a: ControlPoint, b: ControlPoint, t: f32) -> ControlPoint {
    a + (b - a) * t
}

/// Bernstein form: (1−t)³p0 + 3t(1−t)²p1 + 3t²(1−t)p2 + t³p3.
pub fn eval_direct(points: &[ControlPoint; 4], t: f32) -> ControlPoint {
    let [p0, p1, p2, p3] = *points;
    let mt = 1.0 - t;
    let mt2 = mt * mt;
    let t2 = t * t;

    p0 * (mt2 * mt) + p1 * (3.0 * t * mt2) + p2 * (3.0 * t2 * mt) + p3 * (t2 * t)
}

/// de Casteljau: blend neighbours until one point is left.
///
/// Works for any non-empty list; n points take n−1 passes, so a cubic
/// is three. Returns `None` for an empty list.
pub fn eval_casteljau(points: &[ControlPoint], t: f32) -> Option<ControlPoint> {
    let mut work: Vec<ControlPoint> = points.to_vec();
    while work.len() > 1 {
        // Each pass shrinks the list by one, in place.
        for i in 0..work.len() - 1 {
            work[i] = lerp(work[i], work[i + 1], t);
        }
        work.pop();
    }
    work.first().copied()
}

/// de Casteljau for a cubic, on a stack copy. Same passes as `eval_casteljau`.
pub fn eval_casteljau_cubic(points: &[ControlPoint; 4], t: f32) -> ControlPoint {
    let mut work = *points;
    for len in (2..=4).rev() {
        for i in 0..len - 1 {
            work[i] = lerp(work[i], work[i + 1], t);
        }
    }
    work[0]
}
