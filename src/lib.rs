//! Slide navigator for carousels.
//!
//! Two orthogonal regions (focus and activity) are driven by a pure
//! transition table in [`machine`]; [`Navigator`] runs that table against a
//! keyboard surface, a center-view callback and a [`SlideResolver`].

pub mod error;
pub mod event;
pub mod keyboard;
pub mod machine;
pub mod navigator;
pub mod resolve;
pub mod state;

pub use error::{CarouselError, ResolveError};
pub use event::Event;
pub use keyboard::{Key, KeyOutcome, KeyPress, KeyboardBinding, KeyboardSurface, ListenerRegistry};
pub use machine::{Effect, Machine};
pub use navigator::Navigator;
pub use resolve::{ArithmeticResolver, SlideResolver};
pub use state::{ActivityState, FocusState, NavigatorContext, NavigatorState, Snapshot};
