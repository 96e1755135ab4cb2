// Curve rasterization: walk t from 0 to 1 and turn curve samples into pixels.
// Visual outcomes:
// - Naive mode: a hard red 1-pixel line (channel A) from the polynomial form.
// - Anti-aliased mode: a soft green line (channel B) from de Casteljau, each sample
//   spread over its four neighbouring pixels by distance.

use crate::config::{Config, MIN_T_STEP, T_STEP};
use crate::curve::{eval_casteljau_cubic, eval_direct};
use crate::types::{Channel, ControlPoint, FrameBuffer};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Which renderer runs this session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    /// Polynomial evaluation, nearest pixel, channel A.
    Naive,
    /// de Casteljau evaluation, 4-neighbour coverage splat, channel B.
    #[default]
    AntiAliased,
}

impl RenderMode {
    /// Short label for the HUD.
    pub fn label(self) -> &'static str {
        match self {
            RenderMode::Naive => "NAIVE",
            RenderMode::AntiAliased => "AA",
        }
    }
}

/// Parameter values 0, step, 2*step, ..., 1 (both ends included).
/// Computed from an integer counter so rounding never drifts past 1.
/// Steps finer than `MIN_T_STEP` are raised to it.
pub fn sample_params(step: f32) -> impl Iterator<Item = f32> {
    let step = if step.is_finite() && step > 0.0 { step.clamp(MIN_T_STEP, 1.0) } else { T_STEP };
    // Slack keeps 1/0.001 from rounding up to an extra, duplicate sample.
    let n = ((1.0 / step) - 1e-3).ceil().max(1.0) as usize;
    (0..=n).map(move |i| (i as f32 * step).min(1.0))
}

/// Mode plus t increment; borrows the framebuffer only for one pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rasterizer {
    pub mode: RenderMode,
    pub t_step: f32,
}

impl Rasterizer {
    pub fn new(mode: RenderMode, t_step: f32) -> Self {
        Self { mode, t_step }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(cfg.render_mode, cfg.t_step)
    }

    /// Draw the curve. Taking exactly four points means an incomplete
    /// point set cannot reach the evaluators at all.
    pub fn render(&self, fb: &mut FrameBuffer, points: &[ControlPoint; 4]) {
        match self.mode {
            RenderMode::Naive => draw_naive(fb, points, self.t_step),
            RenderMode::AntiAliased => draw_antialiased(fb, points, self.t_step),
        }
    }
}

/// Set channel A of the pixel nearest each polynomial sample to 255.
/// Visual: a crisp, slightly jagged curve. Re-running it changes nothing.
pub fn draw_naive(fb: &mut FrameBuffer, points: &[ControlPoint; 4], step: f32) {
    for t in sample_params(step) {
        let p = eval_direct(points, t);
        fb.set(p.x.round() as i64, p.y.round() as i64, Channel::A, 255);
    }
}

/// Splat every de Casteljau sample into channel B.
/// Visual: a smooth curve whose brightness falls off across its width.
pub fn draw_antialiased(fb: &mut FrameBuffer, points: &[ControlPoint; 4], step: f32) {
    for t in sample_params(step) {
        splat_coverage(fb, eval_casteljau_cubic(points, t), Channel::B);
    }
}

/// Add 255 * max(0, 1 - distance) to each of the four integer corners around `p`.
///
/// Corners are (floor, ceil) combinations per axis. A corner landing exactly
/// one past the last row/column is pulled back onto it; anything else outside
/// the frame is skipped.
pub fn splat_coverage(fb: &mut FrameBuffer, p: Vec2, ch: Channel) {
    let xs = [p.x.floor(), p.x.ceil()];
    let ys = [p.y.floor(), p.y.ceil()];

    for (cx, cy) in [(xs[0], ys[0]), (xs[0], ys[1]), (xs[1], ys[0]), (xs[1], ys[1])] {
        let (Some(x), Some(y)) = (clamp_corner(cx, fb.width), clamp_corner(cy, fb.height)) else {
            continue;
        };
        let corner = Vec2::new(x as f32, y as f32);
        let w = (1.0 - corner.distance(p)).max(0.0);
        if w > 0.0 {
            fb.add_saturating(x, y, ch, 255.0 * w);
        }
    }
}

#[inline]
fn clamp_corner(c: f32, len: usize) -> Option<i64> {
    if !c.is_finite() || len == 0 {
        return None;
    }
    let c = c as i64;
    let len = len as i64;
    if c == len {
        Some(len - 1)
    } else if (0..len).contains(&c) {
        Some(c)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s_bend() -> [ControlPoint; 4] {
        [
            Vec2::new(50.0, 50.0),
            Vec2::new(50.0, 250.0),
            Vec2::new(250.0, 250.0),
            Vec2::new(250.0, 50.0),
        ]
    }

    #[test]
    fn params_cover_both_ends() {
        let ts: Vec<f32> = sample_params(0.001).collect();
        assert_eq!(ts.len(), 1001);
        assert_eq!(ts[0], 0.0);
        assert_eq!(*ts.last().unwrap(), 1.0);
        assert!(ts.windows(2).all(|w| w[1] > w[0]));

        // Step that does not divide 1 still ends exactly on 1.
        let ts: Vec<f32> = sample_params(0.3).collect();
        assert_eq!(ts.len(), 5);
        assert_eq!(*ts.last().unwrap(), 1.0);
    }

    #[test]
    fn bad_step_falls_back() {
        assert_eq!(sample_params(0.0).count(), sample_params(T_STEP).count());
        assert_eq!(sample_params(f32::NAN).count(), sample_params(T_STEP).count());
    }

    #[test]
    fn tiny_step_is_capped() {
        assert_eq!(sample_params(1e-9).count(), sample_params(MIN_T_STEP).count());
        assert!(sample_params(1e-9).count() <= 10_001);
    }

    #[test]
    fn naive_is_idempotent_and_only_touches_a() {
        let mut first = FrameBuffer::new(300, 300);
        let mut second = FrameBuffer::new(300, 300);
        draw_naive(&mut first, &s_bend(), T_STEP);
        draw_naive(&mut second, &s_bend(), T_STEP);
        assert_eq!(first, second);

        // Drawing again on top is a no-op too.
        let snapshot = first.clone();
        draw_naive(&mut first, &s_bend(), T_STEP);
        assert_eq!(first, snapshot);

        assert!(first.pixels().iter().all(|p| p.b == 0 && p.overlay == 0));
        assert!(first.pixels().iter().all(|p| p.a == 0 || p.a == 255));
        assert_eq!(first.get(50, 50).unwrap().a, 255);
        assert_eq!(first.get(250, 50).unwrap().a, 255);
    }

    #[test]
    fn antialiased_only_touches_b() {
        let mut fb = FrameBuffer::new(300, 300);
        draw_antialiased(&mut fb, &s_bend(), T_STEP);
        assert!(fb.pixels().iter().all(|p| p.a == 0 && p.overlay == 0));
        assert_eq!(fb.get(50, 50).unwrap().b, 255);
        assert_eq!(fb.get(250, 50).unwrap().b, 255);
        // Far from the curve stays dark.
        assert_eq!(fb.get(150, 120).unwrap().b, 0);
    }

    #[test]
    fn splat_weights_by_distance() {
        let mut fb = FrameBuffer::new(10, 10);
        splat_coverage(&mut fb, Vec2::new(2.25, 4.0), Channel::B);
        // y is integral: floor == ceil, so each x corner is hit twice.
        assert_eq!(fb.get(2, 4).unwrap().b, 255); // 191 + 191.25, saturated
        assert_eq!(fb.get(3, 4).unwrap().b, 126); // 63.75 truncated, twice
    }

    #[test]
    fn splat_saturates_and_never_goes_negative() {
        let mut fb = FrameBuffer::new(4, 4);
        for _ in 0..100 {
            splat_coverage(&mut fb, Vec2::new(1.5, 1.5), Channel::B);
        }
        for y in 0..4 {
            for x in 0..4 {
                let b = fb.get(x, y).unwrap().b;
                if (1..=2).contains(&x) && (1..=2).contains(&y) {
                    assert_eq!(b, 255);
                } else {
                    assert_eq!(b, 0);
                }
            }
        }
    }

    #[test]
    fn corner_one_past_edge_is_clamped() {
        let mut fb = FrameBuffer::new(10, 10);
        // ceil(9.5) == 10 == width: must land on column 9, not out of bounds.
        splat_coverage(&mut fb, Vec2::new(9.5, 9.5), Channel::B);
        assert!(fb.get(9, 9).unwrap().b > 0);
        assert_eq!(fb.pixels().iter().filter(|p| p.b > 0).count(), 1);
    }

    #[test]
    fn far_off_screen_samples_are_skipped() {
        let mut fb = FrameBuffer::new(10, 10);
        splat_coverage(&mut fb, Vec2::new(60.0, 5.0), Channel::B);
        splat_coverage(&mut fb, Vec2::new(-3.5, 5.0), Channel::B);
        splat_coverage(&mut fb, Vec2::new(f32::NAN, 5.0), Channel::B);
        assert!(fb.pixels().iter().all(|p| p.b == 0));
    }

    #[test]
    fn render_dispatches_on_mode() {
        let mut fb = FrameBuffer::new(300, 300);
        Rasterizer::new(RenderMode::Naive, T_STEP).render(&mut fb, &s_bend());
        assert!(fb.pixels().iter().any(|p| p.a > 0));
        assert!(fb.pixels().iter().all(|p| p.b == 0));

        fb.clear();
        Rasterizer::new(RenderMode::AntiAliased, T_STEP).render(&mut fb, &s_bend());
        assert!(fb.pixels().iter().all(|p| p.a == 0));
        assert!(fb.pixels().iter().any(|p| p.b > 0));
    }
}
