//! Clipping Region

use log::trace;

/// Rectangle in (row, col) space
///
/// Bounds are inclusive on both ends
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Rectangle<T: std::cmp::PartialOrd + Copy> {
    /// Minimum row
    pub r1: T,
    /// Minimum column
    pub c1: T,
    /// Maximum row
    pub r2: T,
    /// Maximum column
    pub c2: T,
}

impl<T> Rectangle<T> where T: std::cmp::PartialOrd + Copy {
    /// Create a new Rectangle
    ///
    /// Values are sorted before storing
    pub fn new(r1: T, c1: T, r2: T, c2: T) -> Self {
        let (r1, r2) = if r1 > r2 { (r2, r1) } else { (r1, r2) };
        let (c1, c2) = if c1 > c2 { (c2, c1) } else { (c1, c2) };
        Self { r1, c1, r2, c2 }
    }
    /// Get location of point relative to rectangle
    ///
    /// Returned is an a u8 made up of the following bits:
    /// - [INSIDE](constant.INSIDE.html)
    /// - [LEFT](constant.LEFT.html)
    /// - [RIGHT](constant.RIGHT.html)
    /// - [BOTTOM](constant.BOTTOM.html)
    /// - [TOP](constant.TOP.html)
    ///
    pub fn clip_flags(&self, row: T, col: T) -> u8 {
        clip_flags(&row, &col, &self.r1, &self.c1, &self.r2, &self.c2)
    }
    /// Check if the point (row, col) is inside or on the border
    pub fn contains(&self, row: T, col: T) -> bool {
        self.clip_flags(row, col) == INSIDE
    }
    /// Expand if the point (row, col) is outside
    pub fn expand(&mut self, row: T, col: T) {
        if row < self.r1 { self.r1 = row; }
        if row > self.r2 { self.r2 = row; }
        if col < self.c1 { self.c1 = col; }
        if col > self.c2 { self.c2 = col; }
    }
    /// Expand if the rectangle is outside
    pub fn expand_rect(&mut self, r: &Rectangle<T>) {
        self.expand(r.r1, r.c1);
        self.expand(r.r2, r.c2);
    }
}

impl Rectangle<f64> {
    /// Smallest rectangle holding every vertex
    ///
    /// Returns None if there are no vertices
    pub fn bounding(rows: &[f64], cols: &[f64]) -> Option<Self> {
        let mut pts = rows.iter().zip(cols.iter());
        let (&r, &c) = pts.next()?;
        let mut rect = Rectangle::new(r, c, r, c);
        for (&r, &c) in pts {
            rect.expand(r, c);
        }
        Some(rect)
    }
}

/// Inside Region
pub const INSIDE : u8 = 0b0000;
/// Left of Region, column below minimum
pub const LEFT   : u8 = 0b0000_0001;
/// Right of Region, column above maximum
pub const RIGHT  : u8 = 0b0000_0010;
/// Below Region, row above maximum
pub const BOTTOM : u8 = 0b0000_0100;
/// Above Region, row below minimum
pub const TOP    : u8 = 0b0000_1000;

/// Determine the location of a point to a broken-down rectangle or range
///
/// Rows grow downward, so a row smaller than `r1` is [TOP](constant.TOP.html)
fn clip_flags<T: std::cmp::PartialOrd>(row: &T, col: &T, r1: &T, c1: &T, r2: &T, c2: &T) -> u8 {
    let mut code = INSIDE;
    if col < c1 { code |= LEFT; }
    if col > c2 { code |= RIGHT; }
    if row > r2 { code |= BOTTOM; }
    if row < r1 { code |= TOP; }
    code
}

/// One boundary of the clip rectangle
#[derive(Debug, Copy, Clone)]
enum Edge {
    RowMax(f64),
    RowMin(f64),
    ColMax(f64),
    ColMin(f64),
}

impl Edge {
    fn inside(&self, (r, c): (f64, f64)) -> bool {
        match *self {
            Edge::RowMax(m) => r <= m,
            Edge::RowMin(m) => r >= m,
            Edge::ColMax(m) => c <= m,
            Edge::ColMin(m) => c >= m,
        }
    }
    /// Point where the segment s -> p crosses this boundary
    fn intersect(&self, s: (f64, f64), p: (f64, f64)) -> (f64, f64) {
        match *self {
            Edge::RowMax(m) | Edge::RowMin(m) => {
                (m, s.1 + (p.1 - s.1) * ((m - s.0) / (p.0 - s.0)))
            }
            Edge::ColMax(m) | Edge::ColMin(m) => {
                (s.0 + (p.0 - s.0) * ((m - s.1) / (p.1 - s.1)), m)
            }
        }
    }
    /// Clip a closed polygon against this boundary
    ///
    /// Walking starts with the closing edge, last -> first
    fn clip(&self, poly: &[(f64, f64)]) -> Vec<(f64, f64)> {
        let mut out = Vec::with_capacity(poly.len() + 2);
        let mut s = match poly.last() {
            Some(&s) => s,
            None => return out,
        };
        for &p in poly {
            let s_in = self.inside(s);
            let p_in = self.inside(p);
            if s_in != p_in {
                out.push(self.intersect(s, p));
            }
            if p_in {
                out.push(p);
            }
            s = p;
        }
        trace!("CLIP {:?}: {} -> {} vertices", self, poly.len(), out.len());
        out
    }
}

/// Clip a polygon to a rectangle
///
/// Uses the [Sutherland–Hodgman](https://en.wikipedia.org/wiki/Sutherland%E2%80%93Hodgman_algorithm)
/// algorithm, clipping against the maximum row, minimum row, maximum column
/// and minimum column in turn. Points on the rectangle border are inside.
///
/// The returned polygon is closed: the first vertex is repeated at the end.
/// A polygon completely outside the rectangle returns empty sequences.
///
///     use pixdraw::{polygon_clip, Rectangle};
///
///     let rect = Rectangle::new(0.0, 0.0, 4.0, 4.0);
///     let (r, c) = polygon_clip(&[1.0, 1.0, 8.0], &[1.0, 3.0, 2.0], &rect);
///     assert_eq!(r, vec![4.0, 1.0, 1.0, 4.0, 4.0]);
///     assert_eq!(c.len(), 5);
///     assert_eq!(c[0], c[4]);
///
pub fn polygon_clip(rows: &[f64], cols: &[f64], rect: &Rectangle<f64>) -> (Vec<f64>, Vec<f64>) {
    let poly: Vec<(f64, f64)> = rows.iter().copied().zip(cols.iter().copied()).collect();
    let edges = [
        Edge::RowMax(rect.r2),
        Edge::RowMin(rect.r1),
        Edge::ColMax(rect.c2),
        Edge::ColMin(rect.c1),
    ];
    let mut poly = edges.iter().fold(poly, |poly, e| e.clip(&poly));
    if let (Some(&first), Some(&last)) = (poly.first(), poly.last()) {
        if first != last {
            poly.push(first);
        }
    }
    poly.into_iter().unzip()
}
