// Errors from the outer boundary: window, snapshot file, config file.
// The curve editor and rasterizer never fail; they report bool/Option instead.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Window init error: {0}")]
    WindowInit(String), // Creating the window failed

    #[error("Window update error: {0}")]
    WindowUpdate(String), // Pushing the frame to the window failed

    #[error("Snapshot error: {0}")]
    Snapshot(#[from] image::ImageError), // Encoding/writing the PNG failed

    #[error("Snapshot error: framebuffer {width}x{height} does not fit an image")]
    SnapshotSize { width: usize, height: usize },

    #[error("Config error: {0}")]
    Config(String), // bezier_sketch.toml could not be parsed
}
