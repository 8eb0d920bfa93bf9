//! The surface a listener is registered on.
//!
//! A [`SwipeSurface`] is the host's side of the contract: it receives the
//! swipe events and is told which native input it needs to forward. Hosts
//! with their own event system implement the trait directly; everyone else
//! can use [`SignalSurface`] and connect closures to its signals.

use swipe_listener_core::Signal;
use swipe_listener_core::logging::targets;

use crate::events::{SwipeCompletion, SwipeDetail, SwipeEvent};

/// Which native input kinds a listener consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct InputSources {
    /// Touch move and release.
    pub touch: bool,
    /// Mouse press, move and release.
    pub mouse: bool,
}

/// Target of swipe events.
pub trait SwipeSurface {
    /// Dispatches a named event on the surface.
    fn emit(&self, event: &SwipeEvent);

    /// Called once at registration. The host should start forwarding the
    /// enabled input kinds to the listener. `passive` is true when the
    /// listener will never prevent the default action of a touch move.
    fn attach(&self, sources: InputSources, passive: bool) {
        let _ = (sources, passive);
    }

    /// Called once when the listener is turned off. The host should stop
    /// forwarding input.
    fn detach(&self, sources: InputSources) {
        let _ = sources;
    }
}

/// A surface that re-emits swipe events through [`Signal`]s.
///
/// ```
/// use std::sync::Arc;
/// use swipe_listener::{PointerEvent, PointerPhase, SignalSurface, SwipeConfig, SwipeListener};
///
/// let surface = Arc::new(SignalSurface::new());
/// surface.swipe().connect(|completion| {
///     println!("swiped {:?}", completion.directions);
/// });
///
/// let mut listener = SwipeListener::register(Some(surface), SwipeConfig::default()).unwrap();
/// for x in [0.0, 5.0, 12.0] {
///     listener.handle(&mut PointerEvent::touch(PointerPhase::Moved, x, 0.0));
/// }
/// listener.handle(&mut PointerEvent::touch(PointerPhase::Released, 12.0, 0.0));
/// ```
#[derive(Debug, Default)]
pub struct SignalSurface {
    swiping: Signal<SwipeDetail>,
    swipe_release: Signal<SwipeDetail>,
    swipe: Signal<SwipeCompletion>,
    swipe_cancel: Signal<SwipeDetail>,
    any: Signal<SwipeEvent>,
}

impl SignalSurface {
    /// Creates a surface with no connections.
    pub fn new() -> Self {
        Self::default()
    }

    /// Emitted for every progress event (`swiping`).
    pub fn swiping(&self) -> &Signal<SwipeDetail> {
        &self.swiping
    }

    /// Emitted when a gesture with more than one sample ends (`swiperelease`).
    pub fn swipe_release(&self) -> &Signal<SwipeDetail> {
        &self.swipe_release
    }

    /// Emitted for completed swipes (`swipe`).
    pub fn swipe(&self) -> &Signal<SwipeCompletion> {
        &self.swipe
    }

    /// Emitted for cancelled gestures (`swipecancel`).
    pub fn swipe_cancel(&self) -> &Signal<SwipeDetail> {
        &self.swipe_cancel
    }

    /// Emitted for every event, after the event-specific signal.
    pub fn any(&self) -> &Signal<SwipeEvent> {
        &self.any
    }
}

impl SwipeSurface for SignalSurface {
    fn emit(&self, event: &SwipeEvent) {
        match *event {
            SwipeEvent::Progress(detail) => self.swiping.emit(detail),
            SwipeEvent::Release(detail) => self.swipe_release.emit(detail),
            SwipeEvent::Completed(completion) => self.swipe.emit(completion),
            SwipeEvent::Cancelled(detail) => self.swipe_cancel.emit(detail),
        };
        self.any.emit(*event);
    }

    fn detach(&self, _sources: InputSources) {
        tracing::trace!(target: targets::LISTENER, "signal surface detached");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{Directions, PointerKind, TargetId};
    use parking_lot::Mutex;
    use std::sync::Arc;
    use swipe_listener_core::Point;

    fn detail() -> SwipeDetail {
        SwipeDetail::new(
            Point::ZERO,
            Point::new(20.0, 0.0),
            PointerKind::Touch,
            TargetId(1),
        )
    }

    #[test]
    fn test_routes_to_named_signals() {
        let surface = SignalSurface::new();
        let names = Arc::new(Mutex::new(Vec::new()));

        for (signal_name, signal) in [
            ("swiping", surface.swiping()),
            ("swiperelease", surface.swipe_release()),
            ("swipecancel", surface.swipe_cancel()),
        ] {
            let names = names.clone();
            signal.connect(move |_| names.lock().push(signal_name));
        }
        let names_clone = names.clone();
        surface.swipe().connect(move |c| {
            assert!(c.directions.right);
            names_clone.lock().push("swipe");
        });

        surface.emit(&SwipeEvent::Progress(detail()));
        surface.emit(&SwipeEvent::Release(detail()));
        surface.emit(&SwipeEvent::Completed(SwipeCompletion {
            directions: Directions {
                right: true,
                ..Directions::NONE
            },
            detail: detail(),
        }));
        surface.emit(&SwipeEvent::Cancelled(detail()));

        assert_eq!(
            *names.lock(),
            vec!["swiping", "swiperelease", "swipe", "swipecancel"]
        );
    }

    #[test]
    fn test_any_receives_everything() {
        let surface = SignalSurface::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let seen_clone = seen.clone();
        surface
            .any()
            .connect(move |event| seen_clone.lock().push(event.name()));

        surface.emit(&SwipeEvent::Progress(detail()));
        surface.emit(&SwipeEvent::Cancelled(detail()));

        assert_eq!(*seen.lock(), vec!["swiping", "swipecancel"]);
    }
}
