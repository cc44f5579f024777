//! Core geometry types for vpad.
//!
//! `Point` and `Rect` are the coordinate vocabulary for hit testing.
//! The coordinate system is caller-defined (screen points, terminal cells);
//! regions and touches just have to live in the same space.

// =============================================================================
// Point
// =============================================================================

/// A position in the touch coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a point.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

// =============================================================================
// Rect
// =============================================================================

/// An axis-aligned rectangle described by its center and extent.
///
/// Containment is min-inclusive and max-exclusive on both axes, so two
/// rectangles that share an edge never both claim a point on it.
///
/// # Examples
///
/// ```
/// use vpad::types::{Point, Rect};
///
/// let up = Rect::centered_at(0.0, 120.0, 40.0, 40.0);
/// assert!(up.contains(Point::new(0.0, 120.0)));
/// assert!(up.contains(Point::new(-19.0, 101.0)));
/// assert!(!up.contains(Point::new(0.0, 80.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub center: Point,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Create a rectangle from its center point and extent.
    #[inline]
    pub const fn new(center: Point, width: f32, height: f32) -> Self {
        Self {
            center,
            width,
            height,
        }
    }

    /// Create a rectangle centered at `(x, y)`.
    #[inline]
    pub const fn centered_at(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(Point::new(x, y), width, height)
    }

    /// Left edge.
    #[inline]
    pub fn min_x(&self) -> f32 {
        self.center.x - self.width / 2.0
    }

    /// Right edge (exclusive).
    #[inline]
    pub fn max_x(&self) -> f32 {
        self.center.x + self.width / 2.0
    }

    /// Bottom edge.
    #[inline]
    pub fn min_y(&self) -> f32 {
        self.center.y - self.height / 2.0
    }

    /// Top edge (exclusive).
    #[inline]
    pub fn max_y(&self) -> f32 {
        self.center.y + self.height / 2.0
    }

    /// Point-in-rectangle test. Pure: no side effects, depends only on
    /// the point and the current bounds.
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min_x()
            && point.x < self.max_x()
            && point.y >= self.min_y()
            && point.y < self.max_y()
    }

    /// The same rectangle with its extent multiplied by `factor`.
    /// The center does not move.
    #[inline]
    pub fn scaled(&self, factor: f32) -> Rect {
        Rect {
            center: self.center,
            width: self.width * factor,
            height: self.height * factor,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_new() {
        let p = Point::new(3.0, -4.5);
        assert_eq!(p.x, 3.0);
        assert_eq!(p.y, -4.5);
        assert_eq!(Point::default(), Point::new(0.0, 0.0));
    }

    #[test]
    fn test_rect_edges() {
        let r = Rect::centered_at(10.0, -20.0, 40.0, 60.0);
        assert_eq!(r.min_x(), -10.0);
        assert_eq!(r.max_x(), 30.0);
        assert_eq!(r.min_y(), -50.0);
        assert_eq!(r.max_y(), 10.0);
    }

    #[test]
    fn test_contains_center_and_interior() {
        let r = Rect::centered_at(0.0, 120.0, 40.0, 40.0);
        assert!(r.contains(Point::new(0.0, 120.0)));
        assert!(r.contains(Point::new(19.9, 139.9)));
        assert!(r.contains(Point::new(-19.9, 100.1)));
    }

    #[test]
    fn test_contains_edge_semantics() {
        let r = Rect::centered_at(0.0, 0.0, 40.0, 40.0);

        // Min edges are inside, max edges are not.
        assert!(r.contains(Point::new(-20.0, 0.0)));
        assert!(r.contains(Point::new(0.0, -20.0)));
        assert!(!r.contains(Point::new(20.0, 0.0)));
        assert!(!r.contains(Point::new(0.0, 20.0)));
    }

    #[test]
    fn test_contains_outside() {
        let r = Rect::centered_at(0.0, 0.0, 40.0, 40.0);
        assert!(!r.contains(Point::new(100.0, 0.0)));
        assert!(!r.contains(Point::new(0.0, -100.0)));
        assert!(!r.contains(Point::new(-21.0, 21.0)));
    }

    #[test]
    fn test_zero_extent_contains_nothing() {
        let r = Rect::centered_at(5.0, 5.0, 0.0, 0.0);
        assert!(!r.contains(Point::new(5.0, 5.0)));
    }

    #[test]
    fn test_adjacent_rects_share_no_point() {
        let left = Rect::centered_at(-20.0, 0.0, 40.0, 40.0);
        let right = Rect::centered_at(20.0, 0.0, 40.0, 40.0);

        // The shared edge at x=0 belongs to the right rect only.
        let on_edge = Point::new(0.0, 0.0);
        assert!(!left.contains(on_edge));
        assert!(right.contains(on_edge));
    }

    #[test]
    fn test_scaled_keeps_center() {
        let r = Rect::centered_at(10.0, 20.0, 40.0, 40.0).scaled(2.0);
        assert_eq!(r.center, Point::new(10.0, 20.0));
        assert_eq!(r.width, 80.0);
        assert_eq!(r.height, 80.0);
        assert!(r.contains(Point::new(-25.0, 20.0)));
    }
}
