//! Interactive cubic Bézier sketch.
//!
//! Place four control points with the mouse, drag them around, and compare
//! the curve drawn from the Bernstein polynomial (red) with the one drawn
//! by de Casteljau plus a coverage splat (green).

pub mod config;
pub mod curve;
pub mod draw;
pub mod editor;
pub mod error;
pub mod frame;
pub mod input;
pub mod raster;
pub mod snapshot;
pub mod types;

pub use config::Config;
pub use editor::{EditOutcome, Editor, PointSet, PointerEvent, PointerKind};
pub use error::Error;
pub use raster::{Rasterizer, RenderMode};
pub use types::{Channel, ControlPoint, FrameBuffer, Pixel};
