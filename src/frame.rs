// One frame of the sketch, minus the window: clear, markers, curve.
// Visual: what you see each tick before the crosshair and HUD go on top.

use crate::draw::draw_markers;
use crate::editor::Editor;
use crate::raster::Rasterizer;
use crate::types::FrameBuffer;

/// Redraw `fb` from scratch. Returns true when a curve was rasterized,
/// which only happens once all four control points exist.
pub fn draw_frame(fb: &mut FrameBuffer, editor: &Editor, raster: &Rasterizer, marker_radius: f32) -> bool {
    fb.clear();
    draw_markers(fb, editor.points().points(), marker_radius, editor.selection().index);

    match editor.points().as_cubic() {
        Some(points) => {
            raster.render(fb, &points);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MIN_SEPARATION, PICK_RADIUS, POINT_RADIUS, T_STEP};
    use crate::editor::{PointerEvent, PointerKind};
    use crate::raster::RenderMode;
    use crate::types::Channel;

    fn place(ed: &mut Editor, x: i32, y: i32) {
        ed.apply(PointerEvent::new(PointerKind::Down, x, y));
        ed.apply(PointerEvent::new(PointerKind::Up, x, y));
    }

    #[test]
    fn no_curve_until_four_points() {
        let mut ed = Editor::new(PICK_RADIUS, MIN_SEPARATION);
        let raster = Rasterizer::new(RenderMode::AntiAliased, T_STEP);
        let mut fb = FrameBuffer::new(120, 120);

        for (x, y) in [(10, 10), (10, 100), (100, 100)] {
            place(&mut ed, x, y);
            assert!(!draw_frame(&mut fb, &ed, &raster, POINT_RADIUS));
        }
        // Only markers so far: no green away from them.
        assert_eq!(fb.get(55, 90).unwrap().b, 0);

        place(&mut ed, 100, 10);
        assert!(draw_frame(&mut fb, &ed, &raster, POINT_RADIUS));
        // B(0.5) = (55, 77.5): both neighbours get half coverage.
        assert!(fb.get(55, 77).unwrap().b > 0);
        assert!(fb.get(55, 78).unwrap().b > 0);
    }

    #[test]
    fn frame_starts_from_black() {
        let ed = Editor::new(PICK_RADIUS, MIN_SEPARATION);
        let raster = Rasterizer::new(RenderMode::Naive, T_STEP);
        let mut fb = FrameBuffer::new(8, 8);
        fb.set(3, 3, Channel::A, 255);
        draw_frame(&mut fb, &ed, &raster, POINT_RADIUS);
        assert_eq!(fb, FrameBuffer::new(8, 8));
    }
}
