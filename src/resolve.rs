use std::future::{self, Future};

use crate::error::ResolveError;
use crate::event::Event;
use crate::state::NavigatorContext;

/// Computes the slide a navigation event lands on.
///
/// Resolution is a suspension point: the navigator stays `Changing` until the
/// returned future settles, so an implementation may ask something remote
/// before answering.
pub trait SlideResolver {
    fn resolve(
        &self,
        context: NavigatorContext,
        event: Event,
    ) -> impl Future<Output = Result<usize, ResolveError>>;
}

/// Wrapping arithmetic over the slide collection.
#[derive(Debug, Default, Clone, Copy)]
pub struct ArithmeticResolver;

impl SlideResolver for ArithmeticResolver {
    fn resolve(
        &self,
        context: NavigatorContext,
        event: Event,
    ) -> impl Future<Output = Result<usize, ResolveError>> {
        future::ready(resolve_slide(context, event))
    }
}

pub fn resolve_slide(context: NavigatorContext, event: Event) -> Result<usize, ResolveError> {
    if !event.is_navigation() {
        return Err(ResolveError::UnknownEvent(event));
    }

    let count = context.slide_count;
    if count == 0 {
        return Err(ResolveError::NoSlides);
    }
    let current = context.current_slide.unwrap_or(0);

    match event {
        Event::NextSlide => Ok((current + 1) % count),
        Event::PrevSlide => Ok(if current == 0 { count - 1 } else { current - 1 }),
        Event::FirstSlide => Ok(0),
        Event::LastSlide => Ok(count - 1),
        Event::ChangeSlide(target) => match usize::try_from(target) {
            Ok(index) if index < count => Ok(index),
            Ok(index) => Err(ResolveError::OutOfRange {
                index,
                slide_count: count,
            }),
            Err(_) => Err(ResolveError::InvalidTarget(target)),
        },
        Event::Focus | Event::Blur => Err(ResolveError::UnknownEvent(event)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn at(slide_count: usize, current: usize) -> NavigatorContext {
        NavigatorContext {
            slide_count,
            current_slide: Some(current),
        }
    }

    #[test]
    fn next_wraps_to_first() {
        assert_eq!(resolve_slide(at(3, 1), Event::NextSlide), Ok(2));
        assert_eq!(resolve_slide(at(3, 2), Event::NextSlide), Ok(0));
    }

    #[test]
    fn prev_wraps_to_last() {
        assert_eq!(resolve_slide(at(3, 0), Event::PrevSlide), Ok(2));
        assert_eq!(resolve_slide(at(3, 2), Event::PrevSlide), Ok(1));
    }

    #[test]
    fn wrapping_does_not_overflow_huge_collections() {
        assert_eq!(resolve_slide(at(usize::MAX, usize::MAX - 1), Event::PrevSlide), Ok(usize::MAX - 2));
        assert_eq!(resolve_slide(at(usize::MAX, 0), Event::PrevSlide), Ok(usize::MAX - 1));
        assert_eq!(resolve_slide(at(usize::MAX, usize::MAX - 1), Event::NextSlide), Ok(0));
    }

    #[test]
    fn single_slide_stays_put() {
        assert_eq!(resolve_slide(at(1, 0), Event::NextSlide), Ok(0));
        assert_eq!(resolve_slide(at(1, 0), Event::PrevSlide), Ok(0));
    }

    #[test]
    fn first_last_and_change() {
        assert_eq!(resolve_slide(at(5, 3), Event::FirstSlide), Ok(0));
        assert_eq!(resolve_slide(at(5, 1), Event::LastSlide), Ok(4));
        assert_eq!(resolve_slide(at(5, 1), Event::ChangeSlide(3)), Ok(3));
    }

    #[test]
    fn change_slide_outside_the_collection() {
        assert_eq!(
            resolve_slide(at(5, 1), Event::ChangeSlide(5)),
            Err(ResolveError::OutOfRange {
                index: 5,
                slide_count: 5
            })
        );
        assert_eq!(
            resolve_slide(at(5, 1), Event::ChangeSlide(-2)),
            Err(ResolveError::InvalidTarget(-2))
        );
    }

    #[test]
    fn focus_events_are_unknown() {
        assert_eq!(
            resolve_slide(at(5, 0), Event::Blur),
            Err(ResolveError::UnknownEvent(Event::Blur))
        );
        assert_eq!(
            resolve_slide(at(5, 0), Event::Focus),
            Err(ResolveError::UnknownEvent(Event::Focus))
        );
    }

    #[test]
    fn empty_collection_cannot_resolve() {
        assert_eq!(
            resolve_slide(NavigatorContext::new(0), Event::NextSlide),
            Err(ResolveError::NoSlides)
        );
    }

    #[test]
    fn arithmetic_resolver_is_ready_immediately() {
        let resolved =
            futures::executor::block_on(ArithmeticResolver.resolve(at(4, 3), Event::NextSlide));
        assert_eq!(resolved, Ok(0));
    }

    proptest! {
        #[test]
        fn next_then_prev_is_identity((count, current) in (1usize..64).prop_flat_map(|n| (Just(n), 0..n))) {
            let next = resolve_slide(at(count, current), Event::NextSlide).unwrap();
            prop_assert!(next < count);
            let back = resolve_slide(at(count, next), Event::PrevSlide).unwrap();
            prop_assert_eq!(back, current);
        }

        #[test]
        fn first_and_last_are_fixed((count, current) in (1usize..64).prop_flat_map(|n| (Just(n), 0..n))) {
            prop_assert_eq!(resolve_slide(at(count, current), Event::FirstSlide), Ok(0));
            prop_assert_eq!(resolve_slide(at(count, current), Event::LastSlide), Ok(count - 1));
        }
    }
}
