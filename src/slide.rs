use raylib::prelude::*;
use crate::view::{fit_rect, intersect};

pub struct Slide {
    image: Texture2D,
}

impl Slide {
    pub fn new(image: Texture2D) -> Self {
        Self { image }
    }

    fn size(&self) -> (f32, f32) {
        (self.image.width() as f32, self.image.height() as f32)
    }

    /// Draws the image letterboxed into `frame`, cut to `clip`.
    pub fn draw(&self, d: &mut RaylibDrawHandle, frame: Rectangle, clip: Rectangle) {
        let (tex_width, tex_height) = self.size();
        if tex_width <= 0.0 || tex_height <= 0.0 {
            return;
        }

        let dest = fit_rect(tex_width, tex_height, frame);
        let Some(visible) = intersect(dest, clip) else {
            return;
        };

        // Source rectangle covering the same fraction of the texture as
        // `visible` covers of `dest`
        let source = Rectangle::new(
            (visible.x - dest.x) / dest.width * tex_width,
            (visible.y - dest.y) / dest.height * tex_height,
            visible.width / dest.width * tex_width,
            visible.height / dest.height * tex_height,
        );

        d.draw_texture_pro(
            &self.image,
            source,
            visible,
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );
    }
}
