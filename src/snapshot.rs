// Writes the current framebuffer to a PNG so the comparison can be kept.
// Visual: the file looks exactly like the window (red = A, green = B, blue = overlay).

use crate::error::Error;
use crate::types::FrameBuffer;
use image::{ImageFormat, RgbImage};
use std::path::Path;

/// Copy the framebuffer into an RGB8 image.
pub fn to_rgb_image(fb: &FrameBuffer) -> Result<RgbImage, Error> {
    let size_err = || Error::SnapshotSize { width: fb.width, height: fb.height };
    let w = u32::try_from(fb.width).map_err(|_| size_err())?;
    let h = u32::try_from(fb.height).map_err(|_| size_err())?;

    let mut bytes = Vec::with_capacity(fb.width * fb.height * 3);
    for p in fb.pixels() {
        bytes.extend_from_slice(&[p.a, p.b, p.overlay]);
    }
    RgbImage::from_raw(w, h, bytes).ok_or_else(size_err)
}

/// Encode `fb` as PNG at `path`, replacing any previous file.
pub fn save_png(fb: &FrameBuffer, path: &Path) -> Result<(), Error> {
    let img = to_rgb_image(fb)?;
    img.save_with_format(path, ImageFormat::Png)?;
    log::info!("Snapshot written to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Channel;
    use image::Rgb;

    /// Pixel of a snapshot as (A, B, overlay).
    fn channels_at(img: &RgbImage, x: u32, y: u32) -> Option<(u8, u8, u8)> {
        img.get_pixel_checked(x, y).map(|Rgb([r, g, b])| (*r, *g, *b))
    }

    #[test]
    fn channels_map_to_rgb() {
        let mut fb = FrameBuffer::new(3, 2);
        fb.set(2, 1, Channel::A, 200);
        fb.set(2, 1, Channel::B, 100);
        fb.set(0, 0, Channel::Overlay, 7);

        let img = to_rgb_image(&fb).unwrap();
        assert_eq!(img.dimensions(), (3, 2));
        assert_eq!(channels_at(&img, 2, 1), Some((200, 100, 0)));
        assert_eq!(channels_at(&img, 0, 0), Some((0, 0, 7)));
        assert_eq!(channels_at(&img, 3, 0), None);
    }

    #[test]
    fn png_round_trips_through_disk() {
        let mut fb = FrameBuffer::new(8, 8);
        fb.set(4, 4, Channel::B, 255);
        let path = std::env::temp_dir().join(format!("bezier_sketch_{}.png", std::process::id()));

        save_png(&fb, &path).unwrap();
        let back = image::open(&path).unwrap().to_rgb8();
        let _ = std::fs::remove_file(&path);

        assert_eq!(channels_at(&back, 4, 4), Some((0, 255, 0)));
        assert_eq!(back, to_rgb_image(&fb).unwrap());
    }

    #[test]
    fn unwritable_path_is_an_error() {
        let fb = FrameBuffer::new(2, 2);
        let path = Path::new("no/such/dir/at/all/out.png");
        assert!(matches!(save_png(&fb, path), Err(Error::Snapshot(_))));
    }
}
