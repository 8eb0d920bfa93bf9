//! Input and output event types for the swipe listener.
//!
//! The host feeds [`PointerEvent`]s in; the listener hands [`SwipeEvent`]s to
//! its [`SwipeSurface`](crate::SwipeSurface).

use std::fmt;

use swipe_listener_core::Point;

/// Opaque reference to the element that originated a pointer signal.
///
/// The listener never interprets it; it is copied into every payload so
/// handlers can tell which child of the surface was touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TargetId(pub u64);

/// The input device a pointer signal came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerKind {
    /// Finger or stylus on a touch surface.
    Touch,
    /// Mouse button drag.
    Mouse,
}

impl PointerKind {
    /// Whether this is touch input.
    pub fn is_touch(self) -> bool {
        matches!(self, Self::Touch)
    }
}

/// Phase of a pointer signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerPhase {
    /// Finger down or mouse button pressed.
    Pressed,
    /// Pointer moved.
    Moved,
    /// Finger lifted or mouse button released.
    Released,
}

/// A raw press/move/release signal delivered by the host.
#[derive(Debug, Clone)]
pub struct PointerEvent {
    /// The input device.
    pub kind: PointerKind,
    /// Press, move or release.
    pub phase: PointerPhase,
    /// Client coordinates of the pointer.
    pub position: Point,
    /// The element under the pointer.
    pub target: TargetId,
    default_prevented: bool,
}

impl PointerEvent {
    /// Create a new pointer event.
    pub fn new(kind: PointerKind, phase: PointerPhase, position: Point, target: TargetId) -> Self {
        Self {
            kind,
            phase,
            position,
            target,
            default_prevented: false,
        }
    }

    /// Create a touch event.
    pub fn touch(phase: PointerPhase, x: f32, y: f32) -> Self {
        Self::new(PointerKind::Touch, phase, Point::new(x, y), TargetId::default())
    }

    /// Create a mouse event.
    pub fn mouse(phase: PointerPhase, x: f32, y: f32) -> Self {
        Self::new(PointerKind::Mouse, phase, Point::new(x, y), TargetId::default())
    }

    /// Set the originating element.
    pub fn with_target(mut self, target: TargetId) -> Self {
        self.target = target;
        self
    }

    /// Ask the host to suppress the platform default action (scrolling).
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Whether the default action should be suppressed.
    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// A single compass direction of a swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    /// Toward smaller y.
    Top,
    /// Toward larger x.
    Right,
    /// Toward larger y.
    Bottom,
    /// Toward smaller x.
    Left,
}

impl fmt::Display for SwipeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
        };
        f.write_str(name)
    }
}

/// The set of directions a gesture satisfied.
///
/// Several flags may be set at once unless axis locking keeps only one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Directions {
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
}

impl Directions {
    /// No direction set.
    pub const NONE: Self = Self {
        top: false,
        right: false,
        bottom: false,
        left: false,
    };

    /// Whether no flag is set.
    pub fn is_empty(&self) -> bool {
        !(self.horizontal() || self.vertical())
    }

    /// Whether `left` or `right` is set.
    pub fn horizontal(&self) -> bool {
        self.left || self.right
    }

    /// Whether `top` or `bottom` is set.
    pub fn vertical(&self) -> bool {
        self.top || self.bottom
    }

    /// Whether the given direction is set.
    pub fn contains(&self, direction: SwipeDirection) -> bool {
        match direction {
            SwipeDirection::Top => self.top,
            SwipeDirection::Right => self.right,
            SwipeDirection::Bottom => self.bottom,
            SwipeDirection::Left => self.left,
        }
    }

    /// Set the given direction.
    pub fn insert(&mut self, direction: SwipeDirection) {
        match direction {
            SwipeDirection::Top => self.top = true,
            SwipeDirection::Right => self.right = true,
            SwipeDirection::Bottom => self.bottom = true,
            SwipeDirection::Left => self.left = true,
        }
    }

    /// Iterate the set directions in top, right, bottom, left order.
    pub fn iter(&self) -> impl Iterator<Item = SwipeDirection> + '_ {
        [
            SwipeDirection::Top,
            SwipeDirection::Right,
            SwipeDirection::Bottom,
            SwipeDirection::Left,
        ]
        .into_iter()
        .filter(|d| self.contains(*d))
    }
}

impl FromIterator<SwipeDirection> for Directions {
    fn from_iter<I: IntoIterator<Item = SwipeDirection>>(iter: I) -> Self {
        let mut directions = Self::NONE;
        for d in iter {
            directions.insert(d);
        }
        directions
    }
}

/// Coordinates and origin shared by every swipe event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeDetail {
    /// Horizontal `[start, end]` coordinates.
    pub x: [f32; 2],
    /// Vertical `[start, end]` coordinates.
    pub y: [f32; 2],
    /// Whether the gesture came from touch input rather than the mouse.
    pub touch: bool,
    /// The element that received the signal ending this event.
    pub target: TargetId,
}

impl SwipeDetail {
    /// Build a detail from the first and latest sample.
    pub fn new(start: Point, end: Point, kind: PointerKind, target: TargetId) -> Self {
        Self {
            x: [start.x, end.x],
            y: [start.y, end.y],
            touch: kind.is_touch(),
            target,
        }
    }

    /// The first recorded sample.
    pub fn start(&self) -> Point {
        Point::new(self.x[0], self.y[0])
    }

    /// The latest recorded sample.
    pub fn end(&self) -> Point {
        Point::new(self.x[1], self.y[1])
    }
}

/// Payload of a completed swipe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeCompletion {
    /// The recognized directions; never empty.
    pub directions: Directions,
    /// Endpoints and origin.
    pub detail: SwipeDetail,
}

/// A named event dispatched on the target surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SwipeEvent {
    /// The pointer moved with at least two samples recorded.
    Progress(SwipeDetail),
    /// The gesture ended with more than one sample recorded.
    Release(SwipeDetail),
    /// The gesture ended and matched at least one direction.
    Completed(SwipeCompletion),
    /// The gesture ended without matching any direction.
    Cancelled(SwipeDetail),
}

impl SwipeEvent {
    /// The event name used on the surface.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Progress(_) => "swiping",
            Self::Release(_) => "swiperelease",
            Self::Completed(_) => "swipe",
            Self::Cancelled(_) => "swipecancel",
        }
    }

    /// The coordinates and origin carried by every variant.
    pub fn detail(&self) -> &SwipeDetail {
        match self {
            Self::Progress(d) | Self::Release(d) | Self::Cancelled(d) => d,
            Self::Completed(c) => &c.detail,
        }
    }

    /// The recognized directions, for completed swipes only.
    pub fn directions(&self) -> Option<Directions> {
        match self {
            Self::Completed(c) => Some(c.directions),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directions_flags() {
        let mut d = Directions::NONE;
        assert!(d.is_empty());

        d.insert(SwipeDirection::Left);
        assert!(d.horizontal());
        assert!(!d.vertical());
        assert!(!d.is_empty());

        d.insert(SwipeDirection::Bottom);
        let collected: Vec<_> = d.iter().collect();
        assert_eq!(collected, vec![SwipeDirection::Bottom, SwipeDirection::Left]);
    }

    #[test]
    fn test_directions_from_iter() {
        let d: Directions = [SwipeDirection::Top, SwipeDirection::Right]
            .into_iter()
            .collect();
        assert!(d.top && d.right && !d.bottom && !d.left);
    }

    #[test]
    fn test_event_names() {
        let detail = SwipeDetail::new(
            Point::ZERO,
            Point::new(12.0, 1.0),
            PointerKind::Touch,
            TargetId(7),
        );
        let completed = SwipeEvent::Completed(SwipeCompletion {
            directions: Directions {
                right: true,
                ..Directions::NONE
            },
            detail,
        });

        assert_eq!(SwipeEvent::Progress(detail).name(), "swiping");
        assert_eq!(SwipeEvent::Release(detail).name(), "swiperelease");
        assert_eq!(completed.name(), "swipe");
        assert_eq!(SwipeEvent::Cancelled(detail).name(), "swipecancel");
        assert_eq!(completed.detail().target, TargetId(7));
        assert!(completed.directions().is_some_and(|d| d.right));
        assert_eq!(SwipeEvent::Cancelled(detail).directions(), None);
    }

    #[test]
    fn test_detail_endpoints() {
        let detail = SwipeDetail::new(
            Point::new(1.0, 2.0),
            Point::new(3.0, 4.0),
            PointerKind::Mouse,
            TargetId::default(),
        );
        assert_eq!(detail.x, [1.0, 3.0]);
        assert_eq!(detail.y, [2.0, 4.0]);
        assert!(!detail.touch);
        assert_eq!(detail.start(), Point::new(1.0, 2.0));
        assert_eq!(detail.end(), Point::new(3.0, 4.0));
    }

    #[test]
    fn test_prevent_default() {
        let mut event = PointerEvent::touch(PointerPhase::Moved, 0.0, 0.0);
        assert!(!event.is_default_prevented());
        event.prevent_default();
        assert!(event.is_default_prevented());
        assert_eq!(SwipeDirection::Left.to_string(), "left");
    }
}
