use crate::foundation::core::Point;

/// Axis-aligned bounding box of a tracked element, in viewport coordinates.
///
/// All eight fields are stored so per-frame readers never recompute them; construct through
/// [`TrackedRect::from_ltwh`] or [`TrackedRect::from_edges`] to keep them consistent.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackedRect {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
    pub center_x: f64,
    pub center_y: f64,
    pub width: f64,
    pub height: f64,
}

impl TrackedRect {
    pub fn from_ltwh(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            bottom: top + height,
            right: left + width,
            center_x: left + width / 2.0,
            center_y: top + height / 2.0,
            width,
            height,
        }
    }

    pub fn from_edges(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self::from_ltwh(left, top, right - left, bottom - top)
    }

    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    pub fn center(&self) -> Point {
        Point::new(self.center_x, self.center_y)
    }

    /// Inclusive point-in-rectangle test.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left && p.x <= self.right && p.y >= self.top && p.y <= self.bottom
    }

    /// Whether the square `center ± radius` overlaps the rectangle.
    pub fn overlaps_circle(&self, center: Point, radius: f64) -> bool {
        center.x + radius > self.left
            && center.x - radius < self.right
            && center.y + radius > self.top
            && center.y - radius < self.bottom
    }

    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.left, self.top),
            Point::new(self.right, self.top),
            Point::new(self.right, self.bottom),
            Point::new(self.left, self.bottom),
        ]
    }

    /// Distance from `origin` to whichever corner is farthest away.
    pub fn farthest_corner_distance(&self, origin: Point) -> f64 {
        self.corners()
            .into_iter()
            .map(|c| c.distance(origin))
            .fold(0.0, f64::max)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/rect.rs"]
mod tests;
