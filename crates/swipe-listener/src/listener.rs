//! Swipe listener: gesture sessions and event emission.
//!
//! A [`SwipeListener`] owns one gesture session for one surface. The host
//! forwards every pointer signal to [`SwipeListener::handle`]; the listener
//! records samples, emits progress while the pointer moves and classifies the
//! gesture when it is released.
//!
//! # Event order
//!
//! For a gesture with `n` recorded samples:
//!
//! - every move from the second sample on emits `swiping`
//! - release with `n > 1` emits `swiperelease`, then `swipe` or `swipecancel`
//! - release with `n == 1` emits `swipecancel` only
//! - release with `n == 0` emits nothing
//!
//! # Usage
//!
//! ```
//! use std::sync::Arc;
//! use swipe_listener::{PointerEvent, PointerPhase, SignalSurface, SwipeConfig, SwipeListener};
//!
//! let surface = Arc::new(SignalSurface::new());
//! let mut listener = SwipeListener::register(Some(surface.clone()), SwipeConfig::default())
//!     .expect("surface given");
//!
//! listener.handle(&mut PointerEvent::mouse(PointerPhase::Pressed, 0.0, 0.0));
//! listener.handle(&mut PointerEvent::mouse(PointerPhase::Moved, 0.0, 0.0));
//! listener.handle(&mut PointerEvent::mouse(PointerPhase::Moved, 0.0, 40.0));
//! listener.handle(&mut PointerEvent::mouse(PointerPhase::Released, 0.0, 40.0));
//!
//! listener.off();
//! ```

use std::sync::Arc;

use swipe_listener_core::Point;
use swipe_listener_core::logging::{span_names, targets};

use crate::classifier::classify;
use crate::config::SwipeConfig;
use crate::events::{PointerEvent, PointerKind, SwipeDetail, SwipeEvent, TargetId};
use crate::mouse::{GestureInput, MouseDragAdapter};
use crate::sample::SampleBuffer;
use crate::surface::{InputSources, SwipeSurface};

/// Recognizes swipes on one surface.
///
/// At most one gesture is open at a time. Dropping the listener turns it off.
pub struct SwipeListener<S: SwipeSurface + ?Sized> {
    surface: Arc<S>,
    config: SwipeConfig,
    sources: InputSources,
    samples: SampleBuffer,
    mouse: MouseDragAdapter,
    attached: bool,
}

impl<S: SwipeSurface + ?Sized> SwipeListener<S> {
    /// Registers a listener on `surface`.
    ///
    /// Returns `None` when no surface is given. Otherwise the surface's
    /// [`attach`](SwipeSurface::attach) hook is called with the enabled input
    /// kinds and the passive hint.
    pub fn register(surface: Option<Arc<S>>, config: SwipeConfig) -> Option<Self> {
        let Some(surface) = surface else {
            tracing::debug!(target: targets::LISTENER, "no surface given, listener not registered");
            return None;
        };

        let sources = InputSources {
            touch: config.touch,
            mouse: config.mouse,
        };
        let passive = config.passive_hint();
        surface.attach(sources, passive);
        tracing::debug!(target: targets::LISTENER, ?sources, passive, "swipe listener registered");

        Some(Self {
            surface,
            config,
            sources,
            samples: SampleBuffer::new(),
            mouse: MouseDragAdapter::new(),
            attached: true,
        })
    }

    /// The configuration this listener was registered with.
    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    /// The surface events are dispatched on.
    pub fn surface(&self) -> &Arc<S> {
        &self.surface
    }

    /// The input kinds this listener consumes.
    pub fn sources(&self) -> InputSources {
        self.sources
    }

    /// Whether [`off`](Self::off) has not been called yet.
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Number of samples recorded in the open gesture.
    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    /// Whether a mouse button is held.
    pub fn is_dragging(&self) -> bool {
        self.mouse.is_dragging()
    }

    /// Processes one pointer signal.
    ///
    /// Signals of a disabled input kind, and all signals after
    /// [`off`](Self::off), are ignored. A move may call
    /// [`PointerEvent::prevent_default`] according to the scroll policy.
    pub fn handle(&mut self, event: &mut PointerEvent) {
        if !self.attached {
            return;
        }
        let _span = tracing::trace_span!(target: targets::LISTENER, span_names::HANDLE).entered();

        let input = match event.kind {
            PointerKind::Touch if self.sources.touch => {
                GestureInput::from_touch(event.phase, event.position)
            }
            PointerKind::Mouse if self.sources.mouse => {
                self.mouse.translate(event.phase, event.position)
            }
            _ => None,
        };

        match input {
            Some(GestureInput::Move(position)) => self.record_move(position, event),
            Some(GestureInput::Release) => self.finish(event.kind, event.target),
            None => {}
        }
    }

    /// Detaches the listener from its surface.
    ///
    /// An open gesture is abandoned without emitting anything. Calling this
    /// again has no effect.
    pub fn off(&mut self) {
        if !self.attached {
            return;
        }
        self.attached = false;
        self.samples.clear();
        self.mouse.reset();
        self.surface.detach(self.sources);
        tracing::debug!(target: targets::LISTENER, "swipe listener detached");
    }

    fn record_move(&mut self, position: Point, event: &mut PointerEvent) {
        self.samples.record(position);
        tracing::trace!(
            target: targets::LISTENER,
            x = position.x,
            y = position.y,
            samples = self.samples.len(),
            "recorded sample"
        );

        if self.samples.len() < 2 {
            return;
        }
        let (Some(start), Some(end)) = (self.samples.first(), self.samples.last()) else {
            return;
        };

        let progress = SwipeEvent::Progress(SwipeDetail::new(start, end, event.kind, event.target));
        if self.config.prevent_scroll.should_prevent(&progress) {
            event.prevent_default();
        }
        self.dispatch(&progress);
    }

    fn finish(&mut self, kind: PointerKind, target: TargetId) {
        let samples = self.samples.drain();
        let (Some(&start), Some(&end)) = (samples.first(), samples.last()) else {
            tracing::trace!(target: targets::LISTENER, "release without samples");
            return;
        };
        if samples.len() > 1 {
            self.dispatch(&SwipeEvent::Release(SwipeDetail::new(start, end, kind, target)));
        }
        if let Some(classification) = classify(&samples, &self.config) {
            self.dispatch(&classification.into_event(kind, target));
        }
    }

    fn dispatch(&self, event: &SwipeEvent) {
        tracing::trace!(target: targets::LISTENER, name = event.name(), "emitting swipe event");
        self.surface.emit(event);
    }
}

impl<S: SwipeSurface + ?Sized> Drop for SwipeListener<S> {
    fn drop(&mut self) {
        self.off();
    }
}

impl<S: SwipeSurface + ?Sized> std::fmt::Debug for SwipeListener<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwipeListener")
            .field("config", &self.config)
            .field("sources", &self.sources)
            .field("samples", &self.samples.len())
            .field("dragging", &self.mouse.is_dragging())
            .field("attached", &self.attached)
            .finish()
    }
}
