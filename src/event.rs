use std::fmt;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Event {
    Focus,
    Blur,
    NextSlide,
    PrevSlide,
    FirstSlide,
    LastSlide,
    /// Jump to an index chosen by the user, e.g. a thumbnail click.
    ChangeSlide(i64),
}

impl Event {
    /// Navigation events drive the activity region, the rest drive focus.
    pub fn is_navigation(&self) -> bool {
        !matches!(self, Event::Focus | Event::Blur)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Focus => write!(f, "FOCUS"),
            Event::Blur => write!(f, "BLUR"),
            Event::NextSlide => write!(f, "NEXT_SLIDE"),
            Event::PrevSlide => write!(f, "PREV_SLIDE"),
            Event::FirstSlide => write!(f, "FIRST_SLIDE"),
            Event::LastSlide => write!(f, "LAST_SLIDE"),
            Event::ChangeSlide(target) => write!(f, "CHANGE_SLIDE({})", target),
        }
    }
}
