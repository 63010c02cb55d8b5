use thiserror::Error;

use crate::event::Event;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ResolveError {
    #[error("unknown event: {0}")]
    UnknownEvent(Event),

    #[error("cannot navigate an empty slide collection")]
    NoSlides,

    #[error("slide index {0} is negative")]
    InvalidTarget(i64),

    #[error("resolved slide {index} is out of range for {slide_count} slides")]
    OutOfRange { index: usize, slide_count: usize },
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum CarouselError {
    #[error("slide resolution failed: {0}")]
    Resolve(#[from] ResolveError),

    #[error("no slide change is in flight")]
    NotChanging,
}

pub type Result<T> = std::result::Result<T, CarouselError>;
