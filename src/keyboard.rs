use std::cell::{Cell, RefCell};
use std::collections::BTreeSet;
use std::rc::Rc;

use crate::event::Event;

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct ListenerId(pub u64);

/// The input surface key listeners are attached to (a window, a terminal...).
pub trait KeyboardSurface {
    fn add_listener(&self) -> ListenerId;
    fn remove_listener(&self, id: ListenerId);
}

/// A registered listener. Dropping the binding removes it from the surface,
/// whichever transition caused the drop.
pub struct KeyboardBinding {
    surface: Rc<dyn KeyboardSurface>,
    id: ListenerId,
}

impl KeyboardBinding {
    pub fn bind(surface: Rc<dyn KeyboardSurface>) -> Self {
        let id = surface.add_listener();
        Self { surface, id }
    }

    pub fn id(&self) -> ListenerId {
        self.id
    }
}

impl Drop for KeyboardBinding {
    fn drop(&mut self) {
        self.surface.remove_listener(self.id);
    }
}

/// In-process surface that only keeps track of live listeners.
#[derive(Debug, Default)]
pub struct ListenerRegistry {
    next_id: Cell<u64>,
    active: RefCell<BTreeSet<ListenerId>>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> usize {
        self.active.borrow().len()
    }

    pub fn is_registered(&self, id: ListenerId) -> bool {
        self.active.borrow().contains(&id)
    }
}

impl KeyboardSurface for ListenerRegistry {
    fn add_listener(&self) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.active.borrow_mut().insert(id);
        id
    }

    fn remove_listener(&self, id: ListenerId) {
        self.active.borrow_mut().remove(&id);
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Other,
}

impl Key {
    /// Accepts DOM `KeyboardEvent.key` names.
    pub fn from_name(name: &str) -> Self {
        match name {
            "ArrowUp" => Key::ArrowUp,
            "ArrowDown" => Key::ArrowDown,
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            _ => Key::Other,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct KeyPress {
    pub key: Key,
    pub shift: bool,
}

impl KeyPress {
    pub fn new(key: Key) -> Self {
        Self { key, shift: false }
    }

    pub fn with_shift(key: Key) -> Self {
        Self { key, shift: true }
    }
}

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct KeyOutcome {
    pub event: Option<Event>,
    /// The surface should suppress its default action for this key.
    pub prevent_default: bool,
}

impl KeyOutcome {
    pub fn ignored() -> Self {
        Self::default()
    }
}

pub fn map_key(press: KeyPress) -> KeyOutcome {
    let event = match (press.key, press.shift) {
        (Key::ArrowRight | Key::ArrowUp, true) => Event::LastSlide,
        (Key::ArrowRight | Key::ArrowUp, false) => Event::NextSlide,
        (Key::ArrowLeft | Key::ArrowDown, true) => Event::FirstSlide,
        (Key::ArrowLeft | Key::ArrowDown, false) => Event::PrevSlide,
        (Key::Other, _) => return KeyOutcome::ignored(),
    };
    KeyOutcome {
        event: Some(event),
        prevent_default: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_map_to_navigation() {
        assert_eq!(map_key(KeyPress::new(Key::ArrowRight)).event, Some(Event::NextSlide));
        assert_eq!(map_key(KeyPress::new(Key::ArrowUp)).event, Some(Event::NextSlide));
        assert_eq!(map_key(KeyPress::new(Key::ArrowLeft)).event, Some(Event::PrevSlide));
        assert_eq!(map_key(KeyPress::new(Key::ArrowDown)).event, Some(Event::PrevSlide));
    }

    #[test]
    fn shift_jumps_to_the_ends() {
        assert_eq!(
            map_key(KeyPress::with_shift(Key::ArrowRight)).event,
            Some(Event::LastSlide)
        );
        assert_eq!(
            map_key(KeyPress::with_shift(Key::ArrowUp)).event,
            Some(Event::LastSlide)
        );
        assert_eq!(
            map_key(KeyPress::with_shift(Key::ArrowLeft)).event,
            Some(Event::FirstSlide)
        );
        assert_eq!(
            map_key(KeyPress::with_shift(Key::ArrowDown)).event,
            Some(Event::FirstSlide)
        );
    }

    #[test]
    fn arrows_suppress_default_other_keys_do_not() {
        assert!(map_key(KeyPress::new(Key::ArrowLeft)).prevent_default);
        let other = map_key(KeyPress::with_shift(Key::Other));
        assert_eq!(other, KeyOutcome::ignored());
        assert!(!other.prevent_default);
    }

    #[test]
    fn key_names() {
        assert_eq!(Key::from_name("ArrowRight"), Key::ArrowRight);
        assert_eq!(Key::from_name("ArrowDown"), Key::ArrowDown);
        assert_eq!(Key::from_name("Enter"), Key::Other);
    }

    #[test]
    fn binding_is_released_on_drop() {
        let registry = Rc::new(ListenerRegistry::new());
        let binding = KeyboardBinding::bind(registry.clone());
        let id = binding.id();
        assert!(registry.is_registered(id));
        assert_eq!(registry.active(), 1);
        drop(binding);
        assert!(!registry.is_registered(id));
        assert_eq!(registry.active(), 0);
    }

    #[test]
    fn listener_ids_are_unique() {
        let registry = ListenerRegistry::new();
        let a = registry.add_listener();
        let b = registry.add_listener();
        assert_ne!(a, b);
        assert_eq!(registry.active(), 2);
    }
}
