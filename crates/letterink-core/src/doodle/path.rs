//! Incremental freehand path construction with quadratic smoothing.

use kurbo::{BezPath, Point};

/// Builds a smoothed freehand path as pointer samples arrive.
///
/// The first sample emits a MoveTo. Once more than three samples have been
/// recorded, each new one appends a quadratic segment whose control point is
/// the second-to-last sample and whose endpoint is the midpoint between the
/// last two samples. This trails slightly behind the pointer but turns a
/// jagged polyline into a smooth curve.
#[derive(Debug, Clone)]
pub struct SmoothPathBuilder {
    points: Vec<Point>,
    path: BezPath,
}

impl SmoothPathBuilder {
    /// Start a path at the anchor point.
    pub fn new(anchor: Point) -> Self {
        let mut path = BezPath::new();
        path.move_to(anchor);
        Self {
            points: vec![anchor],
            path,
        }
    }

    /// Record the next pointer sample.
    pub fn add_point(&mut self, point: Point) {
        self.points.push(point);

        if self.points.len() > 3 {
            let last = self.points[self.points.len() - 1];
            let control = self.points[self.points.len() - 2];
            let end = Point::new((control.x + last.x) / 2.0, (control.y + last.y) / 2.0);
            self.path.quad_to(control, end);
        }
    }

    /// Number of recorded samples.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if only the anchor has been recorded.
    pub fn is_empty(&self) -> bool {
        self.points.len() <= 1
    }

    /// The smoothed path built so far.
    pub fn path(&self) -> &BezPath {
        &self.path
    }

    /// Consume the builder and return the smoothed path.
    pub fn finish(self) -> BezPath {
        self.path
    }
}
