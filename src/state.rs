/// Focus region: whether the navigator reacts to keyboard input.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum FocusState {
    #[default]
    Blurred,
    Focused,
}

/// Activity region: whether a slide change is in flight.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum ActivityState {
    #[default]
    Idle,
    Changing,
}

/// Both regions are active at the same time.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct NavigatorState {
    pub focus: FocusState,
    pub activity: ActivityState,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct NavigatorContext {
    pub slide_count: usize,
    /// `None` only when there are no slides.
    pub current_slide: Option<usize>,
}

impl NavigatorContext {
    pub fn new(slide_count: usize) -> Self {
        Self {
            slide_count,
            current_slide: (slide_count > 0).then_some(0),
        }
    }
}

/// What a renderer needs after each processed event.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Snapshot {
    pub focus: FocusState,
    pub activity: ActivityState,
    pub current_slide: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_starts_on_first_slide() {
        assert_eq!(NavigatorContext::new(4).current_slide, Some(0));
        assert_eq!(NavigatorContext::new(0).current_slide, None);
    }

    #[test]
    fn regions_start_blurred_and_idle() {
        let state = NavigatorState::default();
        assert_eq!(state.focus, FocusState::Blurred);
        assert_eq!(state.activity, ActivityState::Idle);
    }
}
