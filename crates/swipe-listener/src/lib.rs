//! Swipe gesture recognition for touch and mouse input.
//!
//! A [`SwipeListener`] is registered on a [`SwipeSurface`] with a
//! [`SwipeConfig`]. The host forwards pointer press/move/release signals to
//! the listener, which emits four kinds of [`SwipeEvent`] back on the surface:
//!
//! | Event | Name | When |
//! |---|---|---|
//! | [`SwipeEvent::Progress`] | `swiping` | each move once two samples are recorded |
//! | [`SwipeEvent::Release`] | `swiperelease` | release after more than one sample |
//! | [`SwipeEvent::Completed`] | `swipe` | release that matched a direction |
//! | [`SwipeEvent::Cancelled`] | `swipecancel` | release that matched none |
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use parking_lot::Mutex;
//! use swipe_listener::{PointerEvent, PointerPhase, SignalSurface, SwipeConfig, SwipeListener};
//!
//! let surface = Arc::new(SignalSurface::new());
//! let swiped = Arc::new(Mutex::new(None));
//!
//! let swiped_clone = swiped.clone();
//! surface.swipe().connect(move |completion| {
//!     *swiped_clone.lock() = Some(completion.directions);
//! });
//!
//! let mut listener = SwipeListener::register(Some(surface), SwipeConfig::default()).unwrap();
//! for (x, y) in [(0.0, 0.0), (5.0, 0.0), (12.0, 1.0)] {
//!     listener.handle(&mut PointerEvent::touch(PointerPhase::Moved, x, y));
//! }
//! listener.handle(&mut PointerEvent::touch(PointerPhase::Released, 12.0, 1.0));
//!
//! let directions = swiped.lock().expect("swipe emitted");
//! assert!(directions.right);
//! assert!(!directions.top && !directions.bottom && !directions.left);
//! ```

pub mod classifier;
pub mod config;
mod error;
pub mod events;
pub mod listener;
pub mod mouse;
pub mod sample;
pub mod surface;

pub use classifier::{Classification, classify};
pub use config::{PreventScroll, SwipeConfig};
pub use error::{Error, Result};
pub use events::{
    Directions, PointerEvent, PointerKind, PointerPhase, SwipeCompletion, SwipeDetail,
    SwipeDirection, SwipeEvent, TargetId,
};
pub use listener::SwipeListener;
pub use mouse::{GestureInput, MouseDragAdapter};
pub use sample::SampleBuffer;
pub use surface::{InputSources, SignalSurface, SwipeSurface};

pub use swipe_listener_core::{ConnectionGuard, ConnectionId, Point, Signal};
