pub const RENDER_WIDTH: i32 = 1280;           // Default window width
pub const RENDER_HEIGHT: i32 = 960;           // Default window height
pub const FPS: u32 = 60;                      // Frames per second

pub const CENTER_VIEW_DURATION: f32 = 0.3;    // Page scroll toward the carousel (seconds)
pub const SLIDE_TRANSITION_DURATION: f32 = 0.3; // Slide strip translation (seconds)

pub const SLIDE_WIDTH: i32 = 800;             // Viewport size, 4:3 like the source assets
pub const SLIDE_HEIGHT: i32 = 600;
pub const THUMBNAIL_MAX_WIDTH: i32 = 120;     // Thumbnails flex up to this width
pub const THUMBNAIL_BORDER: i32 = 2;
pub const PAGE_MARGIN: i32 = 240;             // Blank page above the carousel, so there is something to scroll
