//! Pure transition function of the slide navigator.
//!
//! The machine never performs side effects itself. Every call returns the
//! effects the caller has to run, so the same table drives the navigator, the
//! viewer and the tests.

use tracing::debug;

use crate::error::{CarouselError, ResolveError};
use crate::event::Event;
use crate::state::{ActivityState, FocusState, NavigatorContext, NavigatorState, Snapshot};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Effect {
    /// Entering `Focused`: register a keyboard listener.
    BindKeyboard,
    /// Leaving `Focused`: release the keyboard listener.
    UnbindKeyboard,
    /// Entering `Changing`: fire-and-forget scroll toward the carousel.
    CenterView,
    /// Entering `Changing`: resolve the next slide for this event.
    Resolve(Event),
}

#[derive(Debug, Clone)]
pub struct Machine {
    context: NavigatorContext,
    state: NavigatorState,
    pending: Option<Event>,
}

impl Machine {
    pub fn new(slide_count: usize) -> Self {
        Self {
            context: NavigatorContext::new(slide_count),
            state: NavigatorState::default(),
            pending: None,
        }
    }

    pub fn context(&self) -> NavigatorContext {
        self.context
    }

    pub fn state(&self) -> NavigatorState {
        self.state
    }

    /// Event whose resolution is in flight, if any.
    pub fn pending(&self) -> Option<Event> {
        self.pending
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            focus: self.state.focus,
            activity: self.state.activity,
            current_slide: self.context.current_slide,
        }
    }

    /// Guard for `ChangeSlide`: the target must name an existing slide.
    pub fn in_boundaries(&self, target: i64) -> bool {
        usize::try_from(target).is_ok_and(|index| index < self.context.slide_count)
    }

    pub fn transition(&mut self, event: Event) -> Vec<Effect> {
        match event {
            Event::Focus => self.focus(),
            Event::Blur => self.blur(),
            _ => self.navigate(event),
        }
    }

    fn focus(&mut self) -> Vec<Effect> {
        match self.state.focus {
            FocusState::Focused => Vec::new(),
            FocusState::Blurred => {
                debug!("carousel: blurred -> focused");
                self.state.focus = FocusState::Focused;
                vec![Effect::BindKeyboard]
            }
        }
    }

    fn blur(&mut self) -> Vec<Effect> {
        match self.state.focus {
            FocusState::Blurred => Vec::new(),
            FocusState::Focused => {
                debug!("carousel: focused -> blurred");
                self.state.focus = FocusState::Blurred;
                vec![Effect::UnbindKeyboard]
            }
        }
    }

    fn navigate(&mut self, event: Event) -> Vec<Effect> {
        if self.state.activity == ActivityState::Changing {
            return Vec::new();
        }
        if let Event::ChangeSlide(target) = event {
            if !self.in_boundaries(target) {
                return Vec::new();
            }
        }

        debug!(%event, "carousel: idle -> changing");
        self.state.activity = ActivityState::Changing;
        self.pending = Some(event);
        vec![Effect::CenterView, Effect::Resolve(event)]
    }

    /// Completes the in-flight slide change. Whatever the outcome, the
    /// activity region is back to `Idle` afterwards.
    pub fn settle(
        &mut self,
        outcome: std::result::Result<usize, ResolveError>,
    ) -> crate::error::Result<usize> {
        if self.state.activity != ActivityState::Changing {
            return Err(CarouselError::NotChanging);
        }
        self.state.activity = ActivityState::Idle;
        self.pending = None;

        let index = outcome?;
        if index >= self.context.slide_count {
            return Err(ResolveError::OutOfRange {
                index,
                slide_count: self.context.slide_count,
            }
            .into());
        }

        debug!(slide = index, "carousel: changing -> idle");
        self.context.current_slide = Some(index);
        Ok(index)
    }
}
