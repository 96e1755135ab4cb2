// Core types shared by the editor, the rasterizer and the window.

use glam::Vec2;

/// A user-placed control point in framebuffer pixel space.
/// No clamping: it may sit outside the visible window.
pub type ControlPoint = Vec2;

/// One framebuffer cell.
/// Visual: `a` shows as red, `b` as green, `overlay` as blue.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pixel {
    pub a: u8,       // channel A: direct (naive) curve render
    pub b: u8,       // channel B: anti-aliased curve render
    pub overlay: u8, // markers, crosshair, HUD text
}

/// Which plane of a `Pixel` a write goes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    A,
    B,
    Overlay,
}

impl Pixel {
    #[inline]
    fn channel_mut(&mut self, ch: Channel) -> &mut u8 {
        match ch {
            Channel::A => &mut self.a,
            Channel::B => &mut self.b,
            Channel::Overlay => &mut self.overlay,
        }
    }

    /// Pack as 0x00RRGGBB for minifb.
    #[inline]
    pub fn to_rgb_u32(self) -> u32 {
        ((self.a as u32) << 16) | ((self.b as u32) << 8) | self.overlay as u32
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FrameBuffer {
    pub width: usize,       // how wide the frame is on screen (pixels)
    pub height: usize,      // how tall the frame is on screen (pixels)
    pixels: Vec<Pixel>,     // row-major, length = width * height
}

impl FrameBuffer {
    /// A black frame of the given size.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Pixel::default(); width * height],
        }
    }

    /// Zero every channel of every pixel (start of each frame).
    pub fn clear(&mut self) {
        self.pixels.fill(Pixel::default());
    }

    #[inline]
    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    /// Pixel at (x,y), or None outside the frame.
    #[inline]
    pub fn get(&self, x: i64, y: i64) -> Option<Pixel> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Overwrite one channel at (x,y). Out-of-range writes are skipped;
    /// the return value says whether anything was written.
    #[inline]
    pub fn set(&mut self, x: i64, y: i64, ch: Channel, value: u8) -> bool {
        match self.index(x, y) {
            Some(i) => {
                *self.pixels[i].channel_mut(ch) = value;
                true
            }
            None => false,
        }
    }

    /// Additive write with saturation at 255.
    /// Visual: repeated adds brighten the pixel until it is fully lit.
    #[inline]
    pub fn add_saturating(&mut self, x: i64, y: i64, ch: Channel, amount: f32) -> bool {
        match self.index(x, y) {
            Some(i) => {
                let c = self.pixels[i].channel_mut(ch);
                let sum = (*c as f32 + amount.max(0.0)).min(255.0);
                *c = sum as u8;
                true
            }
            None => false,
        }
    }

    /// Read-only view of all pixels in row-major order.
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Fill `out` with 0x00RRGGBB words ready for the window.
    pub fn pack_rgb_into(&self, out: &mut Vec<u32>) {
        out.clear();
        out.extend(self.pixels.iter().map(|p| p.to_rgb_u32()));
    }
}
