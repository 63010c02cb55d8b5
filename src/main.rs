use std::cell::Cell;
use std::path::PathBuf;
use std::rc::Rc;
use anyhow::{Result, bail};
use clap::Parser;
use futures::executor::block_on;
use rand::seq::SliceRandom;
use raylib::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod constants;
mod slide;
mod texture_loader;
mod view;

use crate::constants::*;
use carousel::{Event, Key, KeyPress, ListenerRegistry, Navigator};
use crate::slide::Slide;
use crate::texture_loader::{load_sorted_image_paths, load_texture_with_exif_rotation};
use crate::view::{Layout, draw_carousel};

const WHEEL_STEP: f32 = 48.0;       // Page scroll per mouse wheel notch (pixels)
const KEY_SCROLL_STEP: f32 = 40.0;  // Page scroll per unhandled arrow key (pixels)

#[derive(Parser, Debug)]
#[command(name = "carousel", about = "Browse a directory of images as a carousel")]
struct Args {
    /// Directory holding the slides (png, jpg, jpeg, bmp, gif)
    image_directory: PathBuf,

    /// Window width
    #[arg(long, default_value_t = RENDER_WIDTH)]
    width: i32,

    /// Window height
    #[arg(long, default_value_t = RENDER_HEIGHT)]
    height: i32,

    /// Show the slides in random order
    #[arg(long)]
    shuffle: bool,

    /// Slide to open on; ignored when out of range
    #[arg(long, allow_negative_numbers = true)]
    start: Option<i64>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

/// Frame-time driven ease-out tween, finished once `duration` has elapsed.
struct Animation {
    tween: ease::Tween,
    elapsed: f32,
    duration: f32,
}

impl Animation {
    fn new(from: f32, to: f32, duration: f32) -> Self {
        Self {
            tween: ease::Tween::new(ease::cubic_out, from, to, duration),
            elapsed: 0.0,
            duration,
        }
    }

    fn update(&mut self, dt: f32) -> f32 {
        self.elapsed += dt;
        self.tween.apply(dt)
    }

    fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

fn arrow_keys() -> [(KeyboardKey, Key); 4] {
    [
        (KeyboardKey::KEY_RIGHT, Key::ArrowRight),
        (KeyboardKey::KEY_UP, Key::ArrowUp),
        (KeyboardKey::KEY_LEFT, Key::ArrowLeft),
        (KeyboardKey::KEY_DOWN, Key::ArrowDown),
    ]
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut image_paths = load_sorted_image_paths(&args.image_directory)?;
    if args.shuffle {
        image_paths.shuffle(&mut rand::rng());
    }
    info!("Loading {} images from {}", image_paths.len(), args.image_directory.display());

    let (mut rl, thread) = raylib::init()
        .size(args.width, args.height)
        .title("Carousel")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let mut slides: Vec<Slide> = Vec::new();
    for path in &image_paths {
        match load_texture_with_exif_rotation(&mut rl, &thread, path) {
            Ok(texture) => slides.push(Slide::new(texture)),
            Err(e) => warn!("Skipping {}: {:#}", path.display(), e),
        }
    }
    if slides.is_empty() {
        bail!("No slides were loaded from {}", args.image_directory.display());
    }

    // Set by the navigator each time a slide change starts
    let center_requested = Rc::new(Cell::new(false));
    let request = center_requested.clone();
    let registry = Rc::new(ListenerRegistry::new());
    let mut navigator = Navigator::new(slides.len(), registry.clone())
        .on_center_view(move || request.set(true));

    if let Some(start) = args.start {
        navigator.send(Event::ChangeSlide(start));
    }

    let mut layout = Layout::new(slides.len(), rl.get_screen_width());
    let mut scroll = 0.0_f32;
    let mut scroll_animation: Option<Animation> = None;
    let mut strip_offset = 0.0_f32;
    let mut strip_animation: Option<Animation> = None;
    let mut shown_slide = navigator.snapshot().current_slide;
    let mut hovering = false;

    while !rl.window_should_close() {
        let dt = rl.get_frame_time();

        if rl.get_screen_width() != layout.screen_width() {
            layout = Layout::new(slides.len(), rl.get_screen_width());
        }
        let max_scroll = (layout.page_height() - rl.get_screen_height() as f32).max(0.0);

        // --- Pointer: hover focuses, clicks focus or pick a thumbnail ---
        let mouse = rl.get_mouse_position();
        let page_point = Vector2::new(mouse.x, mouse.y + scroll);
        let inside = layout.contains(page_point);
        if inside != hovering {
            navigator.send(if inside { Event::Focus } else { Event::Blur });
            hovering = inside;
        }
        if inside && rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            navigator.send(Event::Focus);
            if let Some(index) = layout.thumbnail_at(page_point) {
                navigator.send(Event::ChangeSlide(index as i64));
            }
        }

        let wheel = rl.get_mouse_wheel_move();
        if wheel != 0.0 {
            scroll_animation = None;
            scroll -= wheel * WHEEL_STEP;
        }

        // --- Keyboard: arrows go to the navigator first, page scroll otherwise ---
        let shift = rl.is_key_down(KeyboardKey::KEY_LEFT_SHIFT) || rl.is_key_down(KeyboardKey::KEY_RIGHT_SHIFT);
        for (raylib_key, key) in arrow_keys() {
            if !rl.is_key_pressed(raylib_key) {
                continue;
            }
            let outcome = navigator.key_down(KeyPress { key, shift });
            if !outcome.prevent_default {
                match key {
                    Key::ArrowUp => scroll -= KEY_SCROLL_STEP,
                    Key::ArrowDown => scroll += KEY_SCROLL_STEP,
                    _ => {}
                }
            }
        }

        if let Err(e) = block_on(navigator.run()) {
            warn!("Dropped navigation event: {}", e);
        }

        // --- Effects requested by the navigator ---
        if center_requested.replace(false) {
            let target = (layout.viewport.y - PAGE_MARGIN as f32 * 0.25).clamp(0.0, max_scroll);
            scroll_animation = Some(Animation::new(scroll, target, CENTER_VIEW_DURATION));
        }
        if let Some(animation) = scroll_animation.as_mut() {
            scroll = animation.update(dt);
            if animation.is_finished() {
                scroll_animation = None;
            }
        }
        scroll = scroll.clamp(0.0, max_scroll);

        let snapshot = navigator.snapshot();
        if snapshot.current_slide != shown_slide {
            shown_slide = snapshot.current_slide;
            let target = shown_slide.unwrap_or(0) as f32;
            strip_animation = Some(Animation::new(strip_offset, target, SLIDE_TRANSITION_DURATION));
        }
        if let Some(animation) = strip_animation.as_mut() {
            strip_offset = animation.update(dt);
            if animation.is_finished() {
                strip_animation = None;
            }
        }

        // --- Render ---
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);
        draw_carousel(&mut d, &layout, &slides, strip_offset, scroll, shown_slide);
        d.draw_text(
            &format!("{} / {}", shown_slide.map_or(0, |i| i + 1), slides.len()),
            10,
            10,
            20,
            if navigator.is_listening() { Color::RAYWHITE } else { Color::GRAY },
        );
    }

    Ok(())
}
