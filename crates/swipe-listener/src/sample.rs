//! Sample buffer for one in-flight gesture.

use swipe_listener_core::Point;

/// Ordered pointer samples recorded between press and release.
///
/// Every move signal records exactly one point; nothing is deduplicated or
/// capped.
#[derive(Debug, Clone, Default)]
pub struct SampleBuffer {
    points: Vec<Point>,
}

impl SampleBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a sample.
    pub fn record(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Takes every recorded sample in arrival order, leaving the buffer empty.
    pub fn drain(&mut self) -> Vec<Point> {
        std::mem::take(&mut self.points)
    }

    /// Drops all samples.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The first recorded sample.
    pub fn first(&self) -> Option<Point> {
        self.points.first().copied()
    }

    /// The most recent sample.
    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }
}
