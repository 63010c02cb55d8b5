use raylib::prelude::*;
use crate::constants::*;
use crate::slide::Slide;

const SIDE_PADDING: f32 = 20.0;
const THUMBNAIL_GAP: f32 = 8.0;

/// Largest rectangle with a `width`:`height` aspect ratio centered in `frame`.
pub fn fit_rect(width: f32, height: f32, frame: Rectangle) -> Rectangle {
    let scale = (frame.width / width).min(frame.height / height);
    let fitted_width = width * scale;
    let fitted_height = height * scale;
    Rectangle::new(
        frame.x + (frame.width - fitted_width) * 0.5,
        frame.y + (frame.height - fitted_height) * 0.5,
        fitted_width,
        fitted_height,
    )
}

pub fn intersect(a: Rectangle, b: Rectangle) -> Option<Rectangle> {
    let left = a.x.max(b.x);
    let top = a.y.max(b.y);
    let right = (a.x + a.width).min(b.x + b.width);
    let bottom = (a.y + a.height).min(b.y + b.height);
    (right > left && bottom > top).then(|| Rectangle::new(left, top, right - left, bottom - top))
}

fn contains(rect: Rectangle, point: Vector2) -> bool {
    point.x >= rect.x
        && point.x < rect.x + rect.width
        && point.y >= rect.y
        && point.y < rect.y + rect.height
}

/// Carousel geometry in page coordinates (y grows down the scrolled page).
#[derive(Debug, Clone)]
pub struct Layout {
    pub viewport: Rectangle,
    pub thumbnails: Vec<Rectangle>,
    screen_width: i32,
}

impl Layout {
    pub fn new(slide_count: usize, screen_width: i32) -> Self {
        let width = (SLIDE_WIDTH as f32).min(screen_width as f32 - 2.0 * SIDE_PADDING).max(1.0);
        let height = width * SLIDE_HEIGHT as f32 / SLIDE_WIDTH as f32;
        let viewport = Rectangle::new(
            (screen_width as f32 - width) * 0.5,
            PAGE_MARGIN as f32,
            width,
            height,
        );

        // The thumbnail row only makes sense with something to pick from
        let mut thumbnails = Vec::new();
        if slide_count > 1 {
            let count = slide_count as f32;
            let thumb_width = (THUMBNAIL_MAX_WIDTH as f32)
                .min((width - THUMBNAIL_GAP * (count - 1.0)) / count)
                .max(1.0);
            let thumb_height = thumb_width * SLIDE_HEIGHT as f32 / SLIDE_WIDTH as f32;
            let row_width = thumb_width * count + THUMBNAIL_GAP * (count - 1.0);
            let row_x = viewport.x + (width - row_width) * 0.5;
            let row_y = viewport.y + height + THUMBNAIL_GAP;
            for index in 0..slide_count {
                thumbnails.push(Rectangle::new(
                    row_x + index as f32 * (thumb_width + THUMBNAIL_GAP),
                    row_y,
                    thumb_width,
                    thumb_height,
                ));
            }
        }

        Self { viewport, thumbnails, screen_width }
    }

    pub fn screen_width(&self) -> i32 {
        self.screen_width
    }

    /// Whole carousel area: viewport plus thumbnail row.
    pub fn bounds(&self) -> Rectangle {
        let bottom = self
            .thumbnails
            .first()
            .map_or(self.viewport.y + self.viewport.height, |t| t.y + t.height);
        Rectangle::new(self.viewport.x, self.viewport.y, self.viewport.width, bottom - self.viewport.y)
    }

    pub fn contains(&self, point: Vector2) -> bool {
        contains(self.bounds(), point)
    }

    pub fn thumbnail_at(&self, point: Vector2) -> Option<usize> {
        self.thumbnails.iter().position(|rect| contains(*rect, point))
    }

    pub fn page_height(&self) -> f32 {
        let bounds = self.bounds();
        bounds.y + bounds.height + PAGE_MARGIN as f32 * 2.0
    }
}

fn to_screen(rect: Rectangle, scroll: f32) -> Rectangle {
    Rectangle::new(rect.x, rect.y - scroll, rect.width, rect.height)
}

/// Draws the slide strip translated by `strip_offset` slides, and the
/// thumbnail row with `current` outlined.
pub fn draw_carousel(
    d: &mut RaylibDrawHandle,
    layout: &Layout,
    slides: &[Slide],
    strip_offset: f32,
    scroll: f32,
    current: Option<usize>,
) {
    let viewport = to_screen(layout.viewport, scroll);
    d.draw_rectangle_rec(viewport, Color::new(24, 24, 24, 255));

    for (index, slide) in slides.iter().enumerate() {
        let frame = Rectangle::new(
            viewport.x + (index as f32 - strip_offset) * viewport.width,
            viewport.y,
            viewport.width,
            viewport.height,
        );
        slide.draw(d, frame, viewport);
    }

    for (index, (slide, rect)) in slides.iter().zip(&layout.thumbnails).enumerate() {
        let rect = to_screen(*rect, scroll);
        slide.draw(d, rect, rect);
        if current == Some(index) {
            d.draw_rectangle_lines_ex(rect, THUMBNAIL_BORDER as f32, Color::RAYWHITE);
        }
    }
}
