//! Direction classification for a finished gesture.
//!
//! Each axis is judged on its own: the net travel between the first and last
//! sample must reach the axis minimum, and the last sample must lie within the
//! axis delta of the furthest sample in the direction of travel. The delta
//! check rejects gestures that went far and then came back part of the way.

use swipe_listener_core::Point;
use swipe_listener_core::logging::targets;

use crate::config::SwipeConfig;
use crate::events::{
    Directions, PointerKind, SwipeCompletion, SwipeDetail, SwipeDirection, SwipeEvent, TargetId,
};

/// Outcome of classifying one gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    /// The surviving directions; empty means the gesture is cancelled.
    pub directions: Directions,
    /// First sample.
    pub start: Point,
    /// Last sample.
    pub end: Point,
}

impl Classification {
    /// Whether no direction threshold was met.
    pub fn is_cancelled(&self) -> bool {
        self.directions.is_empty()
    }

    /// The terminal event for this outcome: a completion when any direction
    /// survived, a cancellation otherwise.
    pub fn into_event(self, kind: PointerKind, target: TargetId) -> SwipeEvent {
        let detail = SwipeDetail::new(self.start, self.end, kind, target);
        if self.is_cancelled() {
            SwipeEvent::Cancelled(detail)
        } else {
            SwipeEvent::Completed(SwipeCompletion {
                directions: self.directions,
                detail,
            })
        }
    }
}

/// Thresholds for one axis.
#[derive(Debug, Clone, Copy)]
struct AxisRule {
    min_travel: f32,
    max_delta: f32,
    /// Direction for travel toward smaller coordinates.
    decreasing: SwipeDirection,
    /// Direction for travel toward larger coordinates (and for no travel).
    increasing: SwipeDirection,
}

impl AxisRule {
    /// Judges the projection of the samples onto this axis.
    fn judge(
        &self,
        coords: impl Iterator<Item = f32>,
        start: f32,
        end: f32,
    ) -> Option<SwipeDirection> {
        let diff = start - end;
        if diff.abs() < self.min_travel {
            return None;
        }

        let (direction, extreme) = if diff > 0.0 {
            (self.decreasing, coords.fold(f32::INFINITY, f32::min))
        } else {
            (self.increasing, coords.fold(f32::NEG_INFINITY, f32::max))
        };

        ((extreme - end).abs() <= self.max_delta).then_some(direction)
    }
}

/// Classifies the samples of a finished gesture.
///
/// Returns `None` when `samples` is empty.
pub fn classify(samples: &[Point], config: &SwipeConfig) -> Option<Classification> {
    let start = *samples.first()?;
    let end = *samples.last()?;

    let horizontal = AxisRule {
        min_travel: config.min_horizontal,
        max_delta: config.delta_horizontal,
        decreasing: SwipeDirection::Left,
        increasing: SwipeDirection::Right,
    };
    let vertical = AxisRule {
        min_travel: config.min_vertical,
        max_delta: config.delta_vertical,
        decreasing: SwipeDirection::Top,
        increasing: SwipeDirection::Bottom,
    };

    let mut directions: Directions = [
        horizontal.judge(samples.iter().map(|p| p.x), start.x, end.x),
        vertical.judge(samples.iter().map(|p| p.y), start.y, end.y),
    ]
    .into_iter()
    .flatten()
    .collect();

    if config.lock_axis {
        lock_axis(&mut directions, start, end);
    }

    tracing::debug!(
        target: targets::CLASSIFIER,
        samples = samples.len(),
        ?directions,
        "classified gesture"
    );

    Some(Classification {
        directions,
        start,
        end,
    })
}

/// Keeps only the axis with strictly greater net travel.
///
/// An axis is only dropped in favour of one that actually matched, so a
/// non-empty set stays non-empty. Equal travel keeps both axes.
fn lock_axis(directions: &mut Directions, start: Point, end: Point) {
    let travel = start.delta_to(end);
    let (travel_x, travel_y) = (travel.x.abs(), travel.y.abs());

    if directions.horizontal() && travel_x > travel_y {
        directions.top = false;
        directions.bottom = false;
    } else if directions.vertical() && travel_x < travel_y {
        directions.left = false;
        directions.right = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(coords: &[(f32, f32)]) -> Vec<Point> {
        coords.iter().copied().map(Point::from).collect()
    }

    fn directions_of(coords: &[(f32, f32)], config: &SwipeConfig) -> Directions {
        classify(&points(coords), config).unwrap().directions
    }

    #[test]
    fn test_empty_samples() {
        assert_eq!(classify(&[], &SwipeConfig::default()), None);
    }

    #[test]
    fn test_right_swipe() {
        let d = directions_of(&[(0.0, 0.0), (5.0, 0.0), (12.0, 1.0)], &SwipeConfig::default());
        assert_eq!(
            d,
            Directions {
                right: true,
                ..Directions::NONE
            }
        );
    }

    #[test]
    fn test_left_swipe() {
        let d = directions_of(&[(100.0, 50.0), (70.0, 51.0), (40.0, 50.0)], &SwipeConfig::default());
        assert!(d.left);
        assert!(!d.right && !d.top && !d.bottom);
    }

    #[test]
    fn test_vertical_swipes() {
        let config = SwipeConfig::default();
        assert!(directions_of(&[(0.0, 100.0), (0.0, 60.0)], &config).top);
        assert!(directions_of(&[(0.0, 0.0), (1.0, 30.0)], &config).bottom);
    }

    #[test]
    fn test_below_minimum_is_cancel() {
        let c = classify(&points(&[(0.0, 0.0), (9.0, 9.0)]), &SwipeConfig::default()).unwrap();
        assert!(c.is_cancelled());
        assert_eq!(c.start, Point::ZERO);
        assert_eq!(c.end, Point::new(9.0, 9.0));
    }

    #[test]
    fn test_identical_points_cancel() {
        let c = classify(&points(&[(0.0, 0.0), (0.0, 0.0)]), &SwipeConfig::default()).unwrap();
        assert!(c.is_cancelled());
    }

    #[test]
    fn test_minimum_is_inclusive() {
        let d = directions_of(&[(0.0, 0.0), (10.0, 0.0)], &SwipeConfig::default());
        assert!(d.right);
    }

    #[test]
    fn test_wandering_gesture_rejected() {
        // Travelled to 40, came back to 20: net travel is enough, straightness is not.
        let d = directions_of(&[(0.0, 0.0), (40.0, 0.0), (20.0, 0.0)], &SwipeConfig::default());
        assert!(d.is_empty());

        // Within the delta of the furthest excursion.
        let d = directions_of(&[(0.0, 0.0), (23.0, 0.0), (20.0, 0.0)], &SwipeConfig::default());
        assert!(d.right);
    }

    #[test]
    fn test_vertical_delta_is_separate() {
        // 4px back on y passes the default vertical delta of 5.
        let d = directions_of(&[(0.0, 0.0), (0.0, 34.0), (0.0, 30.0)], &SwipeConfig::default());
        assert!(d.bottom);

        let config = SwipeConfig::default().with_delta_vertical(3.0);
        assert!(directions_of(&[(0.0, 0.0), (0.0, 34.0), (0.0, 30.0)], &config).is_empty());
    }

    #[test]
    fn test_axis_lock_prefers_larger_travel() {
        let config = SwipeConfig::default();
        let d = directions_of(&[(0.0, 0.0), (30.0, 20.0)], &config);
        assert_eq!(
            d,
            Directions {
                right: true,
                ..Directions::NONE
            }
        );

        let d = directions_of(&[(0.0, 0.0), (-20.0, -30.0)], &config);
        assert_eq!(
            d,
            Directions {
                top: true,
                ..Directions::NONE
            }
        );
    }

    #[test]
    fn test_axis_lock_tie_keeps_both() {
        let d = directions_of(&[(0.0, 0.0), (20.0, 20.0)], &SwipeConfig::default());
        assert!(d.right && d.bottom);
        assert!(!d.left && !d.top);
    }

    #[test]
    fn test_axis_lock_disabled() {
        let config = SwipeConfig::default().with_lock_axis(false);
        let d = directions_of(&[(0.0, 0.0), (30.0, 20.0)], &config);
        assert!(d.right && d.bottom);
    }

    #[test]
    fn test_axis_lock_never_empties_result() {
        // Horizontal travel is larger but fails straightness; vertical survives.
        let d = directions_of(
            &[(0.0, 0.0), (60.0, 10.0), (40.0, 20.0)],
            &SwipeConfig::default(),
        );
        assert_eq!(
            d,
            Directions {
                bottom: true,
                ..Directions::NONE
            }
        );
    }

    #[test]
    fn test_into_event() {
        let c = classify(&points(&[(0.0, 0.0), (12.0, 1.0)]), &SwipeConfig::default()).unwrap();
        let event = c.into_event(PointerKind::Mouse, TargetId(3));
        assert_eq!(event.name(), "swipe");
        assert_eq!(event.detail().x, [0.0, 12.0]);
        assert_eq!(event.detail().y, [0.0, 1.0]);
        assert!(!event.detail().touch);

        let c = classify(&points(&[(0.0, 0.0), (1.0, 1.0)]), &SwipeConfig::default()).unwrap();
        let event = c.into_event(PointerKind::Touch, TargetId(3));
        assert_eq!(event.name(), "swipecancel");
        assert_eq!(event.directions(), None);
    }
}
