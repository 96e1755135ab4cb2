// Window + software drawing utilities.
// Visual effects provided here:
// 1) A window that shows the framebuffer (red = naive curve, green = anti-aliased curve).
// 2) Round markers on each control point, the selected one highlighted.
// 3) A crosshair that follows your mouse.
// 4) A tiny 5x7 bitmap font to render HUD text on top of the curve.

use crate::error::Error;
use crate::types::{Channel, ControlPoint, FrameBuffer};
use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

pub struct Drawer {
    window: Window, // the on-screen window you see
    packed: Vec<u32>, // 0x00RRGGBB scratch reused every frame
}

impl Drawer {
    /// Create a window sized to the framebuffer, paced to `fps` updates per second.
    /// Visual: a new black window appears with your chosen title.
    pub fn new(title: &str, width: usize, height: usize, fps: usize) -> Result<Self, Error> {
        let mut window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        window.set_target_fps(fps);
        Ok(Self {
            window,
            packed: Vec::with_capacity(width * height),
        })
    }

    /// Push the pixels for this frame to the screen.
    /// Visual: the window immediately displays the new image.
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        framebuffer.pack_rgb_into(&mut self.packed);
        self.window
            .update_with_buffer(&self.packed, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// True while ESC is held down (we’ll exit when this is pressed).
    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    /// Mouse position in framebuffer pixels. Not clamped: a drag may leave the window.
    pub fn mouse_pos(&self) -> Option<(i32, i32)> {
        self.window
            .get_mouse_pos(MouseMode::Pass)
            .map(|(x, y)| (x.floor() as i32, y.floor() as i32))
    }

    pub fn left_mouse_down(&self) -> bool {
        self.window.get_mouse_down(MouseButton::Left)
    }

    pub fn right_mouse_down(&self) -> bool {
        self.window.get_mouse_down(MouseButton::Right)
    }

    /// Visual: when pressed, every point disappears and editing starts over.
    pub fn c_pressed_once(&self) -> bool {
        self.window.is_key_pressed(Key::C, KeyRepeat::No)
    }

    // Snapshot on demand.
    pub fn s_pressed_once(&self) -> bool {
        self.window.is_key_pressed(Key::S, KeyRepeat::No)
    }
}

/* ---------- Software drawing: pixels, markers, crosshair, tiny bitmap font ---------- */

/// Light the overlay channel at (x,y) if inside bounds.
#[inline]
fn put_pixel(fb: &mut FrameBuffer, x: i32, y: i32) {
    fb.set(x as i64, y as i64, Channel::Overlay, 255);
}

/// Draw a thin line between (x0,y0) and (x1,y1) using Bresenham.
/// Visual: a straight 1-pixel blue line appears on top of the curve.
fn draw_line(fb: &mut FrameBuffer, x0: i32, y0: i32, x1: i32, y1: i32) {
    let (mut x0, mut y0) = (x0, y0);
    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        put_pixel(fb, x0, y0);
        if x0 == x1 && y0 == y1 { break; }
        let e2 = 2 * err;
        if e2 >= dy { err += dy; x0 += sx; }
        if e2 <= dx { err += dx; y0 += sy; }
    }
}

/// Draw a small crosshair centered at (cx,cy).
/// Visual: a “+” shape (with a tiny gap at the center) follows your mouse.
pub fn draw_crosshair(fb: &mut FrameBuffer, cx: i32, cy: i32, size: i32) {
    draw_line(fb, cx - size, cy, cx - 2, cy);
    draw_line(fb, cx + 2, cy, cx + size, cy);
    draw_line(fb, cx, cy - size, cx, cy - 2);
    draw_line(fb, cx, cy + 2, cx, cy + size);
    put_pixel(fb, cx, cy);
}

/// Filled disc of `radius` around a control point.
/// Visual: plain points are white, the selected one is blue.
pub fn draw_marker(fb: &mut FrameBuffer, center: ControlPoint, radius: f32, selected: bool) {
    let r = radius.max(0.0).ceil() as i64;
    let r2 = radius * radius;
    let (cx, cy) = (center.x.round() as i64, center.y.round() as i64);

    for y in (cy - r)..=(cy + r) {
        for x in (cx - r)..=(cx + r) {
            let dx = (x - cx) as f32;
            let dy = (y - cy) as f32;
            if dx * dx + dy * dy > r2 { continue; }
            fb.set(x, y, Channel::Overlay, 255);
            if !selected {
                fb.set(x, y, Channel::A, 255);
                fb.set(x, y, Channel::B, 255);
            }
        }
    }
}

/// Markers for every point, in insertion order.
pub fn draw_markers(fb: &mut FrameBuffer, points: &[ControlPoint], radius: f32, selected: Option<usize>) {
    for (i, p) in points.iter().enumerate() {
        draw_marker(fb, *p, radius, selected == Some(i));
    }
}

/* ---------- 5x7 bitmap font (ASCII subset for "AA | PTS: 4/4 | FPS: 50.0 | C: RESET  S: SAVE") ---------- */

/// Return a 5x7 glyph bitmap for a limited character set.
/// Each u8 is a row; the low 5 bits are the pixels (bit 4 = leftmost).
fn glyph5x7(ch: char) -> Option<[u8; 7]> {
    // Helper macro to define a glyph quickly
    macro_rules! g { ($a:expr,$b:expr,$c:expr,$d:expr,$e:expr,$f:expr,$g:expr) => {
        Some([$a,$b,$c,$d,$e,$f,$g])
    }; }

    match ch {
        // Digits 0..9
        '0' => g!(0b01110,0b10001,0b10011,0b10101,0b11001,0b10001,0b01110),
        '1' => g!(0b00100,0b01100,0b00100,0b00100,0b00100,0b00100,0b01110),
        '2' => g!(0b01110,0b10001,0b00001,0b00010,0b00100,0b01000,0b11111),
        '3' => g!(0b11110,0b00001,0b00001,0b01110,0b00001,0b00001,0b11110),
        '4' => g!(0b00010,0b00110,0b01010,0b10010,0b11111,0b00010,0b00010),
        '5' => g!(0b11111,0b10000,0b11110,0b00001,0b00001,0b10001,0b01110),
        '6' => g!(0b00110,0b01000,0b10000,0b11110,0b10001,0b10001,0b01110),
        '7' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b01000,0b01000),
        '8' => g!(0b01110,0b10001,0b10001,0b01110,0b10001,0b10001,0b01110),
        '9' => g!(0b01110,0b10001,0b10001,0b01111,0b00001,0b00010,0b01100),

        // Uppercase letters we need: A C E F I N P R S T V
        'A' => g!(0b01110,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'C' => g!(0b01110,0b10001,0b10000,0b10000,0b10000,0b10001,0b01110),
        'E' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b11111),
        'F' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b10000),
        'I' => g!(0b01110,0b00100,0b00100,0b00100,0b00100,0b00100,0b01110),
        'N' => g!(0b10001,0b11001,0b10101,0b10011,0b10001,0b10001,0b10001),
        'P' => g!(0b11110,0b10001,0b10001,0b11110,0b10000,0b10000,0b10000),
        'R' => g!(0b11110,0b10001,0b10001,0b11110,0b10100,0b10010,0b10001),
        'S' => g!(0b01111,0b10000,0b10000,0b01110,0b00001,0b00001,0b11110),
        'T' => g!(0b11111,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        'V' => g!(0b10001,0b10001,0b10001,0b10001,0b10001,0b01010,0b00100),

        // Punctuation: space, vertical bar, colon, dot, slash
        ' ' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00000,0b00000),
        '|' => g!(0b00100,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        ':' => g!(0b00000,0b00100,0b00000,0b00000,0b00100,0b00000,0b00000),
        '.' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00100,0b00000),
        '/' => g!(0b00001,0b00010,0b00010,0b00100,0b01000,0b01000,0b10000),

        _ => None,
    }
}

/// Draw a single 5x7 character at (x,y) into the overlay channel.
fn draw_char_5x7(fb: &mut FrameBuffer, x: i32, y: i32, ch: char) {
    if let Some(rows) = glyph5x7(ch) {
        for (ry, rowbits) in rows.iter().enumerate() {
            for rx in 0..5 {
                if (rowbits & (1 << (4 - rx))) != 0 {
                    put_pixel(fb, x + rx, y + ry as i32);
                }
            }
        }
    }
}

/// Draw a text string using 5x7 glyphs.
/// Visual: a compact HUD string appears; each glyph is 5x7 with 1-pixel spacing.
pub fn draw_text_5x7(fb: &mut FrameBuffer, mut x: i32, y: i32, text: &str) {
    for ch in text.chars() {
        draw_char_5x7(fb, x, y, ch);
        x += 6; // 5 pixels glyph width + 1 pixel spacing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn lit(fb: &FrameBuffer) -> usize {
        fb.pixels().iter().filter(|p| p.overlay > 0).count()
    }

    #[test]
    fn hud_charset_is_complete() {
        for ch in "AA NAIVE | PTS: 4/4 | FPS: 50.0 | C: RESET  S: SAVE".chars() {
            assert!(glyph5x7(ch).is_some(), "missing glyph {ch:?}");
        }
    }

    #[test]
    fn text_only_uses_overlay() {
        let mut fb = FrameBuffer::new(64, 16);
        draw_text_5x7(&mut fb, 2, 2, "PTS");
        assert!(lit(&fb) > 0);
        assert!(fb.pixels().iter().all(|p| p.a == 0 && p.b == 0));
    }

    #[test]
    fn crosshair_clips_at_edges() {
        let mut fb = FrameBuffer::new(20, 20);
        draw_crosshair(&mut fb, 0, 19, 12);
        draw_crosshair(&mut fb, -100, -100, 12);
        assert_eq!(fb.get(0, 19).unwrap().overlay, 255);
        assert_eq!(fb.get(1, 19).unwrap().overlay, 0); // center gap
        assert_eq!(fb.get(5, 19).unwrap().overlay, 255);
    }

    #[test]
    fn selected_marker_is_overlay_only() {
        let mut fb = FrameBuffer::new(20, 20);
        let pts = [Vec2::new(5.0, 5.0), Vec2::new(14.0, 14.0)];
        draw_markers(&mut fb, &pts, 3.0, Some(1));

        let plain = fb.get(5, 5).unwrap();
        assert_eq!((plain.a, plain.b, plain.overlay), (255, 255, 255));
        let sel = fb.get(14, 14).unwrap();
        assert_eq!((sel.a, sel.b, sel.overlay), (0, 0, 255));
        assert_eq!(fb.get(5, 9).unwrap().overlay, 0);
    }

    #[test]
    fn off_screen_marker_is_harmless() {
        let mut fb = FrameBuffer::new(10, 10);
        draw_marker(&mut fb, Vec2::new(750.0, -20.0), 3.0, false);
        assert_eq!(lit(&fb), 0);
    }
}
