//! Polygon perimeters

use log::{debug, trace};

use crate::clip::{polygon_clip, Rectangle};
use crate::coords::{Coords, Shape};
use crate::error::DrawError;
use crate::line::line;
use crate::math::iround;

/// Generate polygon perimeter coordinates
///
/// `cy` and `cx` are the row and column of each vertex. The polygon is
/// closed automatically. Coordinates are returned in drawing order, one line
/// segment after another; the shared end points of consecutive segments
/// are repeated.
///
/// With `clip` the polygon is first clipped to `shape` so that the drawn
/// figure is always a closed polygon with all edges visible; `clip` without
/// a `shape` is an error. Without `clip`, a `shape` only drops coordinates
/// falling outside of the image.
///
///     use pixdraw::{polygon_perimeter, Image, set_color};
///
///     let mut img = Image::<u8>::gray(10, 10);
///     let c = polygon_perimeter(&[5.0, -1.0, 5.0, 10.0],
///                               &[-1.0, 5.0, 11.0, 5.0],
///                               Some(img.shape()), true).unwrap();
///     set_color(&mut img, &c, 1.0, 1.0).unwrap();
///     assert_eq!(&img.as_raw()[..10], &[0, 0, 0, 0, 1, 1, 1, 0, 0, 0]);
///
///     assert!(polygon_perimeter(&[1.0, 2.0], &[1.0, 2.0], None, true).is_err());
///
pub fn polygon_perimeter(cy: &[f64], cx: &[f64], shape: Option<Shape>, clip: bool) -> Result<Coords, DrawError> {
    let clip_box = if clip {
        let shape = shape.ok_or(DrawError::MissingClipShape)?;
        Some(Rectangle::new(0.0, 0.0, shape.height as f64 - 1.0, shape.width as f64 - 1.0))
    } else {
        None
    };
    if cy.len() != cx.len() {
        return Err(DrawError::VertexMismatch { rows: cy.len(), cols: cx.len() });
    }
    let clip_box = match clip_box.or_else(|| Rectangle::bounding(cy, cx)) {
        Some(b) => b,
        None => return Ok(Coords::new()),
    };

    // Clip even when not asked to, the result is always closed
    let (ry, rx) = polygon_clip(cy, cx, &clip_box);
    let ry: Vec<i64> = ry.into_iter().map(iround).collect();
    let rx: Vec<i64> = rx.into_iter().map(iround).collect();
    debug!("POLYGON PERIMETER: {} vertices, {} after clipping to {:?}", cy.len(), ry.len(), clip_box);

    let mut out = Coords::new();
    for i in 1 .. ry.len() {
        trace!("POLYGON SEGMENT ({},{}) -> ({},{})", ry[i-1], rx[i-1], ry[i], rx[i]);
        let mut seg = line(ry[i-1], rx[i-1], ry[i], rx[i]);
        out.append(&mut seg);
    }
    // A lone vertex still covers a pixel
    if ry.len() == 1 {
        out.push(ry[0], rx[0]);
    }

    match shape {
        Some(shape) => Ok(out.inside(shape)),
        None => Ok(out),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clip_needs_shape() {
        match polygon_perimeter(&[1.0, 5.0, 3.0], &[1.0, 1.0, 4.0], None, true) {
            Err(DrawError::MissingClipShape) => {}
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn vertex_lengths_must_match() {
        match polygon_perimeter(&[1.0, 5.0, 3.0], &[1.0, 1.0], None, false) {
            Err(DrawError::VertexMismatch { rows: 3, cols: 2 }) => {}
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn square_in_drawing_order() {
        let c = polygon_perimeter(&[2., 2., 7., 7.], &[2., 7., 7., 2.], None, false).unwrap();
        let pts: Vec<_> = c.iter().collect();
        // Four segments of six points each, shared corners repeated
        assert_eq!(pts.len(), 24);
        assert_eq!(pts[0], (2, 2));
        assert_eq!(pts[5], (2, 7));
        assert_eq!(pts[6], (2, 7));
        assert_eq!(pts[11], (7, 7));
        assert_eq!(pts[17], (7, 2));
        assert_eq!(pts[23], (2, 2));
    }

    #[test]
    fn path_is_connected_and_closed() {
        let c = polygon_perimeter(&[1., 1., 8.], &[1., 8., 4.], None, false).unwrap();
        let pts: Vec<_> = c.iter().collect();
        assert_eq!(pts.first(), pts.last());
        for w in pts.windows(2) {
            assert!((w[0].0 - w[1].0).abs() <= 1 && (w[0].1 - w[1].1).abs() <= 1);
        }
    }

    #[test]
    fn vertices_round_half_to_even() {
        let c = polygon_perimeter(&[0.5, 0.5, 2.5], &[1.5, 3.5, 3.5], None, false).unwrap();
        let pts: Vec<_> = c.iter().collect();
        assert_eq!(pts[0], (0, 2));
        assert!(pts.contains(&(0, 4)));
        assert!(pts.contains(&(2, 4)));
    }

    #[test]
    fn degenerate_polygons() {
        assert!(polygon_perimeter(&[], &[], None, false).unwrap().is_empty());
        let c = polygon_perimeter(&[3.0], &[4.0], None, false).unwrap();
        assert_eq!(c.iter().collect::<Vec<_>>(), vec![(3, 4)]);
        let c = polygon_perimeter(&[0.0, 0.0], &[0.0, 2.0], None, false).unwrap();
        assert_eq!(c.iter().collect::<Vec<_>>(), vec![(0, 0), (0, 1), (0, 2), (0, 2), (0, 1), (0, 0)]);
    }

    #[test]
    fn outside_clip_shape_is_empty() {
        let s = Some(Shape::new(10, 10));
        let c = polygon_perimeter(&[20., 20., 30.], &[20., 30., 30.], s, true).unwrap();
        assert!(c.is_empty());
    }

    #[test]
    fn shape_without_clip_filters() {
        let s = Some(Shape::new(5, 5));
        let c = polygon_perimeter(&[1., 1., 8.], &[1., 8., 4.], s, false).unwrap();
        assert!(!c.is_empty());
        assert!(c.iter().all(|(r, c)| s.unwrap().contains(r, c)));
        let full = polygon_perimeter(&[1., 1., 8.], &[1., 8., 4.], None, false).unwrap();
        assert_eq!(c, full.inside(Shape::new(5, 5)));
    }
}
