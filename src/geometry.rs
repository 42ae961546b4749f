//! Geometry primitives for chart layout.
//!
//! Charts position everything in relative coordinates (x and y in [0, 1],
//! y measured bottom-up) and map into an absolute target rect at the last
//! moment. [`Rect::relative_to_absolute`] is the single place the Y axis
//! flips from chart space (up) to SVG space (down).

use glam::DVec2;

use crate::svg::fmt_num;

/// A 2D point, in either relative ([0,1]×[0,1]) or absolute SVG user units.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Point {
        Point { x, y }
    }

    /// Coordinate pair for SVG path data: `"x,y "`.
    ///
    /// The trailing space is part of the wire format: path strings are
    /// assembled by concatenating point strings without extra separators.
    pub fn to_path_string(self) -> String {
        format!("{},{} ", fmt_num(self.x), fmt_num(self.y))
    }

    #[inline]
    pub fn to_vec2(self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<DVec2> for Point {
    fn from(v: DVec2) -> Point {
        Point { x: v.x, y: v.y }
    }
}

/// An axis-aligned rectangle in the same unit space as [`Point`].
///
/// Width and height may be zero but must not be negative for valid
/// rendering; chart constructors validate this and [`Rect::shrunk`] clamps
/// rather than going negative.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Rect {
        Rect { x, y, width, height }
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn top_right(&self) -> Point {
        Point::new(self.x + self.width, self.y)
    }

    pub fn bottom_left(&self) -> Point {
        Point::new(self.x, self.y + self.height)
    }

    pub fn bottom_right(&self) -> Point {
        Point::new(self.x + self.width, self.y + self.height)
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite()
    }

    /// Inset all four sides by `padding`, clamping the size at zero.
    pub fn shrunk(&self, padding: f64) -> Rect {
        Rect {
            x: self.x + padding,
            y: self.y + padding,
            width: (self.width - padding * 2.0).max(0.0),
            height: (self.height - padding * 2.0).max(0.0),
        }
    }

    /// Map a relative point (x, y in [0, 1], y bottom-up) into this rect.
    ///
    /// `y = 0` lands on the bottom edge and `y = 1` on the top edge: chart
    /// values grow upward while SVG y grows downward, and this mapping is
    /// where that flip happens.
    pub fn relative_to_absolute(&self, rel: Point) -> Point {
        let origin = DVec2::new(self.x, self.y);
        let offset = DVec2::new(self.width * rel.x, self.height * (1.0 - rel.y));
        Point::from(origin + offset)
    }

    /// Map a relative sub-rect into this rect with the same Y flip, so
    /// rects stacked bottom-up in relative space stay stacked bottom-up
    /// in the output.
    pub fn relative_to_absolute_rect(&self, rel: Rect) -> Rect {
        let height = rel.height * self.height;
        Rect {
            x: self.x + rel.x * self.width,
            y: self.y + self.height - rel.y * self.height - height,
            width: rel.width * self.width,
            height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn rect_corners_and_center() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);

        assert_eq!(rect.top_left(), pt(10.0, 20.0));
        assert_eq!(rect.top_right(), pt(110.0, 20.0));
        assert_eq!(rect.bottom_left(), pt(10.0, 70.0));
        assert_eq!(rect.bottom_right(), pt(110.0, 70.0));
        assert_eq!(rect.center(), pt(60.0, 45.0));
    }

    #[test]
    fn point_path_string_has_trailing_space() {
        assert_eq!(pt(1.5, 2.0).to_path_string(), "1.5,2 ");
        assert_eq!(pt(0.0, 100.0).to_path_string(), "0,100 ");
    }

    #[test]
    fn relative_to_absolute_flips_y() {
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);

        // y = 0 is the bottom edge, y = 1 the top edge
        assert_eq!(rect.relative_to_absolute(pt(0.0, 0.0)), pt(0.0, 100.0));
        assert_eq!(rect.relative_to_absolute(pt(1.0, 1.0)), pt(100.0, 0.0));
        assert_eq!(rect.relative_to_absolute(pt(0.5, 0.5)), pt(50.0, 50.0));
    }

    #[test]
    fn relative_to_absolute_with_offset_rect() {
        let rect = Rect::new(10.0, 20.0, 100.0, 200.0);

        assert_eq!(rect.relative_to_absolute(pt(0.0, 0.0)), pt(10.0, 220.0));
        assert_eq!(rect.relative_to_absolute(pt(1.0, 1.0)), pt(110.0, 20.0));
    }

    #[test]
    fn relative_rect_maps_bottom_up() {
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);

        // Bottom quarter of the rect
        let abs = rect.relative_to_absolute_rect(Rect::new(0.0, 0.0, 1.0, 0.25));
        assert_eq!(abs, Rect::new(0.0, 75.0, 100.0, 25.0));

        // The next quarter up sits directly on top of it
        let above = rect.relative_to_absolute_rect(Rect::new(0.0, 0.25, 1.0, 0.25));
        assert_eq!(above, Rect::new(0.0, 50.0, 100.0, 25.0));
    }

    #[test]
    fn shrunk_insets_all_sides() {
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert_eq!(rect.shrunk(10.0), Rect::new(10.0, 10.0, 80.0, 80.0));
    }

    #[test]
    fn shrunk_clamps_to_zero_size() {
        let rect = Rect::new(0.0, 0.0, 100.0, 40.0);
        let inner = rect.shrunk(60.0);

        assert_eq!(inner.width, 0.0);
        assert_eq!(inner.height, 0.0);
    }

    #[test]
    fn rect_is_finite() {
        assert!(Rect::new(0.0, 0.0, 1.0, 1.0).is_finite());
        assert!(!Rect::new(0.0, 0.0, f64::NAN, 1.0).is_finite());
        assert!(!Rect::new(f64::INFINITY, 0.0, 1.0, 1.0).is_finite());
    }
}
