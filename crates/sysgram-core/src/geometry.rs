//! Geometric primitives used by the layout engine.
//!
//! - [`Point`] - A 2D coordinate
//! - [`Size`] - Width and height of a rectangular area
//! - [`Bounds`] - An axis-aligned rectangle given by its minimum and maximum corners
//! - [`Insets`] - Spacing on the four sides of a rectangle
//!
//! All coordinates follow the SVG convention: the origin is the top-left
//! corner and y grows downwards.

/// A 2D point.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point.
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point.
    pub fn y(self) -> f32 {
        self.y
    }

    /// Adds another point to this point, returning a new point.
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another point from this point, returning a new point.
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Calculates the midpoint between this point and another point.
    pub fn midpoint(self, other: Point) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }

    /// Multiplies both coordinates by the given factor.
    pub fn scale(self, factor: f32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    /// Euclidean distance from the origin.
    pub fn hypot(self) -> f32 {
        self.x.hypot(self.y)
    }
}

/// Dimensions of a rectangular area.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size.
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size.
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns a new size with the insets added on every side.
    pub fn add_padding(self, insets: Insets) -> Self {
        Self {
            width: self.width + insets.horizontal_sum(),
            height: self.height + insets.vertical_sum(),
        }
    }
}

/// An axis-aligned rectangle described by its minimum and maximum corners.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates bounds from the top-left corner and a size.
    pub fn from_origin(origin: Point, size: Size) -> Self {
        Self {
            min_x: origin.x,
            min_y: origin.y,
            max_x: origin.x + size.width,
            max_y: origin.y + size.height,
        }
    }

    /// Returns the minimum x-coordinate of the bounds.
    pub fn min_x(self) -> f32 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds.
    pub fn min_y(self) -> f32 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds.
    pub fn max_x(self) -> f32 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds.
    pub fn max_y(self) -> f32 {
        self.max_y
    }

    /// Returns the width of the bounds.
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds.
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Returns the center of the rectangle.
    pub fn center(self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Point where the ray from the center towards `target` leaves the rectangle.
    ///
    /// Returns the center itself when `target` coincides with it.
    pub fn boundary_point_towards(self, target: Point) -> Point {
        let center = self.center();
        let direction = target.sub_point(center);
        if direction.hypot() < 0.001 {
            return center;
        }

        let half_width = self.width() / 2.0;
        let half_height = self.height() / 2.0;

        let scale_x = if direction.x() == 0.0 {
            f32::INFINITY
        } else {
            half_width / direction.x().abs()
        };
        let scale_y = if direction.y() == 0.0 {
            f32::INFINITY
        } else {
            half_height / direction.y().abs()
        };

        center.add_point(direction.scale(scale_x.min(scale_y)))
    }
}

/// Spacing on each side of a rectangle.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Insets {
    top: f32,
    right: f32,
    bottom: f32,
    left: f32,
}

impl Insets {
    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Horizontal spacing on both sides, vertical spacing on top and bottom.
    pub fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    pub fn top(self) -> f32 {
        self.top
    }

    pub fn right(self) -> f32 {
        self.right
    }

    pub fn bottom(self) -> f32 {
        self.bottom
    }

    pub fn left(self) -> f32 {
        self.left
    }

    /// Left plus right spacing.
    pub fn horizontal_sum(self) -> f32 {
        self.left + self.right
    }

    /// Top plus bottom spacing.
    pub fn vertical_sum(self) -> f32 {
        self.top + self.bottom
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;

    use super::*;

    #[test]
    fn test_point_midpoint() {
        let p1 = Point::new(0.0, 0.0);
        let p2 = Point::new(10.0, 20.0);
        let mid = p1.midpoint(p2);
        assert_eq!(mid, Point::new(5.0, 10.0));
    }

    #[test]
    fn test_point_add_sub_roundtrip() {
        let p1 = Point::new(3.0, 4.0);
        let p2 = Point::new(1.0, 2.0);
        assert_eq!(p1.add_point(p2).sub_point(p2), p1);
        assert!(approx_eq!(f32, p1.hypot(), 5.0, ulps = 2));
    }

    #[test]
    fn test_size_add_padding() {
        let size = Size::new(100.0, 50.0).add_padding(Insets::symmetric(10.0, 5.0));
        assert_eq!(size.width(), 120.0);
        assert_eq!(size.height(), 60.0);
    }

    #[test]
    fn test_bounds_from_origin() {
        let bounds = Bounds::from_origin(Point::new(36.0, 64.0), Size::new(220.0, 88.0));
        assert_eq!(bounds.min_x(), 36.0);
        assert_eq!(bounds.min_y(), 64.0);
        assert_eq!(bounds.max_x(), 256.0);
        assert_eq!(bounds.max_y(), 152.0);
        assert_eq!(bounds.center(), Point::new(146.0, 108.0));
        assert_eq!(bounds.width(), 220.0);
        assert_eq!(bounds.height(), 88.0);
    }

    #[test]
    fn test_boundary_point_horizontal() {
        let bounds = Bounds::from_origin(Point::new(0.0, 0.0), Size::new(100.0, 40.0));
        let exit = bounds.boundary_point_towards(Point::new(500.0, 20.0));
        assert!(approx_eq!(f32, exit.x(), 100.0, ulps = 2));
        assert!(approx_eq!(f32, exit.y(), 20.0, ulps = 2));
    }

    #[test]
    fn test_boundary_point_vertical() {
        let bounds = Bounds::from_origin(Point::new(0.0, 0.0), Size::new(100.0, 40.0));
        let exit = bounds.boundary_point_towards(Point::new(50.0, -300.0));
        assert!(approx_eq!(f32, exit.x(), 50.0, ulps = 2));
        assert!(approx_eq!(f32, exit.y(), 0.0, ulps = 2));
    }

    #[test]
    fn test_boundary_point_diagonal_hits_nearest_edge() {
        let bounds = Bounds::from_origin(Point::new(0.0, 0.0), Size::new(100.0, 40.0));
        // Direction (100, 100) from center (50, 20) leaves through the bottom edge.
        let exit = bounds.boundary_point_towards(Point::new(150.0, 120.0));
        assert!(approx_eq!(f32, exit.x(), 70.0, ulps = 4));
        assert!(approx_eq!(f32, exit.y(), 40.0, ulps = 4));
    }

    #[test]
    fn test_boundary_point_degenerate() {
        let bounds = Bounds::from_origin(Point::new(0.0, 0.0), Size::new(100.0, 40.0));
        assert_eq!(bounds.boundary_point_towards(bounds.center()), bounds.center());
    }
}
