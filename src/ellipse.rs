//! Ellipses and Circles

use log::debug;

use crate::clip::Rectangle;
use crate::coords::{Coords, Shape};
use crate::math::{iceil, ifloor};

/// Check if (`row`,`col`) lies strictly inside the ellipse
///
/// The ellipse is centered on (`r`,`c`) with semi-axes `ry` along rows and
/// `rx` along columns. Points on the boundary are outside.
pub fn ellipse_contains(row: f64, col: f64, r: f64, c: f64, ry: f64, rx: f64) -> bool {
    let dr = (row - r) / ry;
    let dc = (col - c) / rx;
    dr * dr + dc * dc < 1.0
}

/// Smallest integer rectangle holding the ellipse
///
/// If a shape is given the rectangle is reduced to the pixels of the image.
/// The result may be empty, with `r1 > r2` or `c1 > c2`.
pub fn ellipse_bounds(r: f64, c: f64, ry: f64, rx: f64, shape: Option<Shape>) -> Rectangle<i64> {
    let mut b = Rectangle {
        r1: iceil(r - ry),
        c1: iceil(c - rx),
        r2: ifloor(r + ry),
        c2: ifloor(c + rx),
    };
    if let Some(shape) = shape {
        b.r1 = b.r1.max(0);
        b.c1 = b.c1.max(0);
        b.r2 = b.r2.min(shape.height as i64 - 1);
        b.c2 = b.c2.min(shape.width as i64 - 1);
    }
    b
}

/// Generate coordinates of pixels within an ellipse
///
/// Returns every pixel whose center satisfies
/// `((row-r)/yradius)^2 + ((col-c)/xradius)^2 < 1`, in row-major order.
///
/// With a `shape`, pixels outside the image are left out; ellipses that
/// extend past the image are truncated. A zero or negative radius gives no
/// pixels.
///
///     use pixdraw::ellipse;
///
///     let c = ellipse(5.0, 5.0, 3.0, 4.0, None);
///     assert_eq!(c.len(), 31);
///     assert_eq!(c.iter().next(), Some((3, 3)));
///
///     let c = ellipse(0.0, 0.0, 3.0, 4.0, Some((10,10).into()));
///     assert!(c.iter().all(|(r,c)| r >= 0 && c >= 0));
///
pub fn ellipse(r: f64, c: f64, yradius: f64, xradius: f64, shape: Option<Shape>) -> Coords {
    let b = ellipse_bounds(r, c, yradius, xradius, shape);
    debug!("ELLIPSE ({},{}) radii ({},{}) box {:?}", r, c, yradius, xradius, b);
    if b.r2 < b.r1 || b.c2 < b.c1 {
        return Coords::new();
    }
    // Evaluate relative to the upper left corner of the box
    let (sr, sc) = (r - b.r1 as f64, c - b.c1 as f64);
    let (h, w) = (b.r2 - b.r1 + 1, b.c2 - b.c1 + 1);
    let mut out = Coords::new();
    for i in 0 .. h {
        for j in 0 .. w {
            if ellipse_contains(i as f64, j as f64, sr, sc, yradius, xradius) {
                out.push(i + b.r1, j + b.c1);
            }
        }
    }
    out
}

/// Generate coordinates of pixels within a circle
///
/// Identical to an [ellipse](fn.ellipse.html) with both radii set to `radius`
///
///     use pixdraw::{circle, ellipse};
///
///     assert_eq!(circle(4.0, 4.0, 5.0, None), ellipse(4.0, 4.0, 5.0, 5.0, None));
///
pub fn circle(r: f64, c: f64, radius: f64, shape: Option<Shape>) -> Coords {
    ellipse(r, c, radius, radius, shape)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_is_excluded() {
        assert!(ellipse_contains(0.0, 0.0, 0.0, 0.0, 1.0, 1.0));
        assert!(!ellipse_contains(1.0, 0.0, 0.0, 0.0, 1.0, 1.0));
        assert!(!ellipse_contains(0.0, -1.0, 0.0, 0.0, 1.0, 1.0));
        assert!(ellipse_contains(0.5, 0.5, 0.0, 0.0, 1.0, 1.0));
    }

    #[test]
    fn bounds_clamped_to_shape() {
        let b = ellipse_bounds(1.5, 8.2, 3.0, 4.0, None);
        assert_eq!(b, Rectangle { r1: -1, c1: 5, r2: 4, c2: 12 });
        let b = ellipse_bounds(1.5, 8.2, 3.0, 4.0, Some(Shape::new(10, 10)));
        assert_eq!(b, Rectangle { r1: 0, c1: 5, r2: 4, c2: 9 });
    }

    #[test]
    fn unit_radius_is_single_pixel() {
        let c = ellipse(3.0, 4.0, 1.0, 1.0, None);
        assert_eq!(c.iter().collect::<Vec<_>>(), vec![(3, 4)]);
    }

    #[test]
    fn degenerate_radii_are_empty() {
        assert!(ellipse(3.0, 3.0, 0.0, 0.0, None).is_empty());
        assert!(ellipse(3.0, 3.0, 0.0, 2.0, None).is_empty());
        assert!(ellipse(3.0, 3.0, -2.0, -2.0, None).is_empty());
        assert!(circle(3.5, 3.5, 0.0, None).is_empty());
        assert!(ellipse(f64::NAN, 3.0, 2.0, 2.0, None).is_empty());
    }

    #[test]
    fn outside_shape_is_empty() {
        let s = Some(Shape::new(10, 10));
        assert!(ellipse(-10.0, -10.0, 3.0, 3.0, s).is_empty());
        assert!(ellipse(30.0, 5.0, 3.0, 3.0, s).is_empty());
        assert!(ellipse(5.0, 5.0, 3.0, 3.0, Some(Shape::new(0, 0))).is_empty());
    }

    #[test]
    fn symmetric_about_center() {
        let c = ellipse(10.0, 20.0, 4.5, 7.0, None);
        let pts: std::collections::HashSet<_> = c.iter().collect();
        for &(r, c) in &pts {
            assert!(pts.contains(&(20 - r, c)));
            assert!(pts.contains(&(r, 40 - c)));
        }
    }
}
