use std::collections::VecDeque;
use std::rc::Rc;

use tracing::{debug, error};

use crate::error::Result;
use crate::event::Event;
use crate::keyboard::{KeyOutcome, KeyPress, KeyboardBinding, KeyboardSurface, map_key};
use crate::machine::{Effect, Machine};
use crate::resolve::{ArithmeticResolver, SlideResolver};
use crate::state::{NavigatorContext, NavigatorState, Snapshot};

/// Runs the navigator machine: queues events, performs the effects the
/// transitions ask for and awaits slide resolution.
pub struct Navigator<R = ArithmeticResolver> {
    machine: Machine,
    resolver: R,
    surface: Rc<dyn KeyboardSurface>,
    binding: Option<KeyboardBinding>,
    center_view: Option<Box<dyn FnMut()>>,
    queue: VecDeque<Event>,
}

impl Navigator<ArithmeticResolver> {
    pub fn new(slide_count: usize, surface: Rc<dyn KeyboardSurface>) -> Self {
        Self {
            machine: Machine::new(slide_count),
            resolver: ArithmeticResolver,
            surface,
            binding: None,
            center_view: None,
            queue: VecDeque::new(),
        }
    }
}

impl<R: SlideResolver> Navigator<R> {
    pub fn with_resolver<T: SlideResolver>(self, resolver: T) -> Navigator<T> {
        Navigator {
            machine: self.machine,
            resolver,
            surface: self.surface,
            binding: self.binding,
            center_view: self.center_view,
            queue: self.queue,
        }
    }

    /// Callback run on every entry into `Changing`. Its completion is not
    /// awaited.
    pub fn on_center_view(mut self, callback: impl FnMut() + 'static) -> Self {
        self.center_view = Some(Box::new(callback));
        self
    }

    pub fn context(&self) -> NavigatorContext {
        self.machine.context()
    }

    pub fn state(&self) -> NavigatorState {
        self.machine.state()
    }

    pub fn snapshot(&self) -> Snapshot {
        self.machine.snapshot()
    }

    /// True while a keyboard listener is registered on the surface.
    pub fn is_listening(&self) -> bool {
        self.binding.is_some()
    }

    pub fn pending_events(&self) -> usize {
        self.queue.len()
    }

    pub fn send(&mut self, event: Event) {
        self.queue.push_back(event);
    }

    /// Delivers a key press from the surface. Keys only reach the machine
    /// while the listener is bound.
    pub fn key_down(&mut self, press: KeyPress) -> KeyOutcome {
        if self.binding.is_none() {
            return KeyOutcome::ignored();
        }
        let outcome = map_key(press);
        if let Some(event) = outcome.event {
            self.send(event);
        }
        outcome
    }

    /// Processes queued events in order, one at a time. Stops at the first
    /// failure and leaves the remaining events queued.
    pub async fn run(&mut self) -> Result<Vec<Snapshot>> {
        let mut snapshots = Vec::with_capacity(self.queue.len());
        while let Some(event) = self.queue.pop_front() {
            snapshots.push(self.dispatch(event).await?);
        }
        Ok(snapshots)
    }

    /// Processes a single event to completion, including its slide
    /// resolution.
    pub async fn dispatch(&mut self, event: Event) -> Result<Snapshot> {
        for effect in self.machine.transition(event) {
            match effect {
                Effect::BindKeyboard => {
                    // Replacing an old binding drops it, so at most one
                    // listener is ever registered.
                    self.binding = Some(KeyboardBinding::bind(self.surface.clone()));
                }
                Effect::UnbindKeyboard => {
                    self.binding = None;
                }
                Effect::CenterView => {
                    if let Some(center_view) = self.center_view.as_mut() {
                        center_view();
                    }
                }
                Effect::Resolve(event) => {
                    let outcome = self.resolver.resolve(self.machine.context(), event).await;
                    if let Err(e) = self.machine.settle(outcome) {
                        error!(%event, error = %e, "carousel: slide change failed");
                        return Err(e);
                    }
                }
            }
        }

        let snapshot = self.machine.snapshot();
        debug!(?snapshot, %event, "carousel: processed");
        Ok(snapshot)
    }
}
