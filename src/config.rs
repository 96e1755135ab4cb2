//! Tunables for the sketch.
//!
//! The `const` values are the defaults; `Config` lets a `bezier_sketch.toml`
//! in the working directory override them for one run.

use crate::error::Error;
use crate::raster::RenderMode;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Framebuffer width in pixels.
pub const WIDTH: usize = 700;
/// Framebuffer height in pixels.
pub const HEIGHT: usize = 700;
/// Radius of the ring drawn around each control point.
pub const POINT_RADIUS: f32 = 3.0;
/// Pick radius as a multiple of the marker radius.
pub const PICK_SCALE: f32 = 1.5;
/// Minimum separation as a multiple of the marker radius.
pub const SEPARATION_SCALE: f32 = 2.0;
/// Pointer-down within this distance of a point grabs it.
pub const PICK_RADIUS: f32 = POINT_RADIUS * PICK_SCALE;
/// New points closer than this to an existing one are rejected.
pub const MIN_SEPARATION: f32 = POINT_RADIUS * SEPARATION_SCALE;
/// Parameter increment used when walking t from 0 to 1.
pub const T_STEP: f32 = 0.001;
/// Finest accepted increment: 10 000 samples per curve.
pub const MIN_T_STEP: f32 = 1e-4;
/// A cubic curve has exactly four control points. Not configurable.
pub const MAX_POINTS: usize = 4;
/// Frame budget while idle (about 50 fps).
pub const FRAME_BUDGET: Duration = Duration::from_millis(20);
/// Where snapshots go unless the config says otherwise.
pub const SNAPSHOT_PATH: &str = "my_bezier_curve.png";
/// Config file looked up in the working directory.
pub const CONFIG_FILE: &str = "bezier_sketch.toml";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub width: usize,
    pub height: usize,
    pub point_radius: f32,
    pub pick_radius: f32,
    pub min_separation: f32,
    pub t_step: f32,
    pub render_mode: RenderMode,
    pub snapshot_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            point_radius: POINT_RADIUS,
            pick_radius: PICK_RADIUS,
            min_separation: MIN_SEPARATION,
            t_step: T_STEP,
            render_mode: RenderMode::default(),
            snapshot_path: PathBuf::from(SNAPSHOT_PATH),
        }
    }
}

impl Config {
    /// Parse a TOML document; missing keys keep their defaults.
    ///
    /// `pick_radius` and `min_separation` follow `point_radius` unless the
    /// document sets them.
    pub fn from_toml_str(content: &str) -> Result<Self, Error> {
        let table: toml::Table = toml::from_str(content).map_err(|e| Error::Config(e.to_string()))?;
        let pick_set = table.contains_key("pick_radius");
        let separation_set = table.contains_key("min_separation");

        let cfg: Config = toml::Value::Table(table)
            .try_into()
            .map_err(|e: toml::de::Error| Error::Config(e.to_string()))?;
        let mut cfg = cfg.validate();
        if !pick_set {
            cfg.pick_radius = cfg.point_radius * PICK_SCALE;
        }
        if !separation_set {
            cfg.min_separation = cfg.point_radius * SEPARATION_SCALE;
        }
        Ok(cfg)
    }

    /// Load from `path`, falling back to defaults when the file is absent or broken.
    pub fn load_from_file(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_toml_str(&content) {
                Ok(cfg) => {
                    log::info!("Config loaded from {}", path.display());
                    cfg
                }
                Err(e) => {
                    log::warn!("{e}; using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("No {} found, using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Replace values that cannot work (empty frame, non-positive step, ...) with defaults.
    pub fn validate(mut self) -> Self {
        let d = Self::default();
        if self.width == 0 || self.height == 0 {
            log::warn!("Framebuffer {}x{} is empty, using {}x{}", self.width, self.height, d.width, d.height);
            self.width = d.width;
            self.height = d.height;
        }
        if !self.t_step.is_finite() || self.t_step < MIN_T_STEP || self.t_step > 1.0 {
            log::warn!("t_step {} out of [{MIN_T_STEP}, 1], using {}", self.t_step, d.t_step);
            self.t_step = d.t_step;
        }
        if !non_negative(self.point_radius) {
            self.point_radius = d.point_radius;
        }
        if !non_negative(self.pick_radius) {
            self.pick_radius = d.pick_radius;
        }
        if !non_negative(self.min_separation) {
            self.min_separation = d.min_separation;
        }
        self
    }
}

fn non_negative(v: f32) -> bool {
    v.is_finite() && v >= 0.0
}
