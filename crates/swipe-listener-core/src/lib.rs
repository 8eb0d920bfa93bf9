//! Core utilities for swipe-listener.
//!
//! This crate provides the pieces of the swipe listener that carry no gesture
//! logic of their own:
//!
//! - **Geometry**: the [`Point`] type used for every recorded sample
//! - **Signal/Slot System**: type-safe event fan-out to connected callbacks
//! - **Logging**: `tracing` targets and span names for filtering
//!
//! # Signal/Slot Example
//!
//! ```
//! use swipe_listener_core::{Point, Signal};
//!
//! let moved = Signal::<Point>::new();
//!
//! let conn_id = moved.connect(|p| {
//!     println!("Pointer at ({}, {})", p.x, p.y);
//! });
//!
//! moved.emit(Point::new(12.0, 1.0));
//! moved.disconnect(conn_id);
//! ```

pub mod geometry;
pub mod logging;
pub mod signal;

pub use geometry::Point;
pub use signal::{ConnectionGuard, ConnectionId, Signal};
