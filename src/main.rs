// What you SEE:
// • Left click on empty space places a control point (up to four).
// • Press on a point and drag to move it. Right click deselects.
// • With four points the curve appears: red = naive, green = anti-aliased
//   (pick one with render_mode in bezier_sketch.toml).
// • C starts over, S saves a PNG, ESC quits. Placing the 4th point also saves.

use bezier_sketch::config::{Config, CONFIG_FILE, FRAME_BUDGET, MAX_POINTS};
use bezier_sketch::draw::{draw_crosshair, draw_text_5x7, Drawer};
use bezier_sketch::frame::draw_frame;
use bezier_sketch::input::PointerTracker;
use bezier_sketch::{snapshot, EditOutcome, Editor, Error, FrameBuffer, Rasterizer};
use std::path::Path;
use std::time::{Duration, Instant};

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("bezier-sketch v{} starting", env!("CARGO_PKG_VERSION"));

    /* --- Config + window ---
       Visual: a black window opens at the configured size. */
    let cfg = Config::load_from_file(Path::new(CONFIG_FILE));
    let fps = (1000 / FRAME_BUDGET.as_millis().max(1)) as usize;
    let mut drawer = Drawer::new("Bezier Curve", cfg.width, cfg.height, fps)?;
    log::info!(
        "{}x{}, mode {:?}, t step {}, pick radius {}, min separation {}",
        cfg.width, cfg.height, cfg.render_mode, cfg.t_step, cfg.pick_radius, cfg.min_separation
    );

    /* --- Reusable screen buffer ---
       Visual: this is the image you actually see each frame. */
    let mut screen = FrameBuffer::new(cfg.width, cfg.height);

    let mut editor = Editor::from_config(&cfg);
    let raster = Rasterizer::from_config(&cfg);
    let mut pointer = PointerTracker::new();

    /* --- HUD / FPS --- */
    let mut last_fps_time = Instant::now();
    let mut frames_this_second: u32 = 0;
    let mut hud_fps_text = String::from("FPS: 0.0");

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() && !drawer.esc_pressed() {
        let now = Instant::now();

        /* 1) Inputs. Every event is applied before this frame is drawn. */
        if drawer.c_pressed_once() {
            editor = Editor::from_config(&cfg); // visual: all points vanish
            log::info!("Restarted: point set cleared");
        }
        let mut save_now = drawer.s_pressed_once();
        let events = pointer.poll(drawer.mouse_pos(), drawer.left_mouse_down(), drawer.right_mouse_down());
        for ev in events {
            if let EditOutcome::Added(i) = editor.apply(ev) {
                log::info!("Point {} placed at ({}, {})", i, ev.x, ev.y);
                if i + 1 == MAX_POINTS {
                    save_now = true; // curve just became complete
                }
            }
        }

        /* 2) Clear, markers, curve (only with four points). */
        draw_frame(&mut screen, &editor, &raster, cfg.point_radius);

        /* 3) Snapshot before the HUD so the PNG shows only the curve and points. */
        if save_now {
            if let Err(e) = snapshot::save_png(&screen, &cfg.snapshot_path) {
                log::warn!("{e}");
            }
        }

        /* 4) Crosshair + HUD on top */
        if let Some((mx, my)) = drawer.mouse_pos() {
            draw_crosshair(&mut screen, mx, my, 12);
        }
        let hud = format!(
            "{} | PTS: {}/{} | {} | C: RESET  S: SAVE",
            raster.mode.label(),
            editor.points().len(),
            MAX_POINTS,
            hud_fps_text
        );
        draw_text_5x7(&mut screen, 8, 8, &hud);

        /* 5) Present (this is when the on-screen image updates). */
        drawer.present(&screen)?;

        /* 6) FPS counter, refreshed once per second */
        frames_this_second += 1;
        let elapsed = now.duration_since(last_fps_time);
        if elapsed >= Duration::from_secs(1) {
            let fps = frames_this_second as f32 / elapsed.as_secs_f32();
            log::debug!("FPS: {:.1}", fps);
            hud_fps_text = format!("FPS: {:.1}", fps);
            frames_this_second = 0;
            last_fps_time = now;
        }
    }

    log::info!("Window closed, {} of {} points placed", editor.points().len(), MAX_POINTS);
    Ok(())
}
