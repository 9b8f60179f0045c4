//! Pixel coordinate sets and image shapes

use crate::error::DrawError;

/// Extent of a raster image, in pixels
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Shape {
    /// Number of rows
    pub height: usize,
    /// Number of columns
    pub width: usize,
}

impl Shape {
    /// Create a new shape of `height` rows and `width` columns
    pub fn new(height: usize, width: usize) -> Self {
        Self { height, width }
    }
    /// Check if (`row`,`col`) lies within `[0,height) x [0,width)`
    pub fn contains(&self, row: i64, col: i64) -> bool {
        row >= 0 && col >= 0 && (row as u64) < self.height as u64 && (col as u64) < self.width as u64
    }
}

impl From<(usize, usize)> for Shape {
    fn from((height, width): (usize, usize)) -> Self {
        Self::new(height, width)
    }
}

/// Row and column pixel coordinates
///
/// Rows and columns are stored as two parallel sequences which always have
/// the same length. Order is kept as produced: for a perimeter it is the
/// drawing order around the polygon.
///
///     use pixdraw::Coords;
///
///     let mut c = Coords::new();
///     c.push(1, 2);
///     c.push(3, 4);
///     assert_eq!(c.rows(), &[1, 3]);
///     assert_eq!(c.cols(), &[2, 4]);
///     assert!(Coords::from_parts(vec![1, 2], vec![1]).is_err());
///
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Coords {
    rows: Vec<i64>,
    cols: Vec<i64>,
}

impl Coords {
    /// Create an empty coordinate set
    pub fn new() -> Self {
        Self { rows: vec![], cols: vec![] }
    }
    /// Create an empty coordinate set with room for `n` points
    pub fn with_capacity(n: usize) -> Self {
        Self { rows: Vec::with_capacity(n), cols: Vec::with_capacity(n) }
    }
    /// Build from separate row and column sequences
    ///
    /// Fails if the sequences differ in length
    pub fn from_parts(rows: Vec<i64>, cols: Vec<i64>) -> Result<Self, DrawError> {
        if rows.len() != cols.len() {
            return Err(DrawError::CoordsMismatch { rows: rows.len(), cols: cols.len() });
        }
        Ok(Self { rows, cols })
    }
    /// Split into row and column sequences
    pub fn into_parts(self) -> (Vec<i64>, Vec<i64>) {
        (self.rows, self.cols)
    }
    /// Append the point (`row`,`col`)
    pub fn push(&mut self, row: i64, col: i64) {
        self.rows.push(row);
        self.cols.push(col);
    }
    /// Append all points from `other`, keeping their order
    pub fn append(&mut self, other: &mut Coords) {
        self.rows.append(&mut other.rows);
        self.cols.append(&mut other.cols);
    }
    pub fn rows(&self) -> &[i64] {
        &self.rows
    }
    pub fn cols(&self) -> &[i64] {
        &self.cols
    }
    /// Number of points
    pub fn len(&self) -> usize {
        self.rows.len()
    }
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
    /// Iterate over (row, col) pairs in order
    pub fn iter(&self) -> impl Iterator<Item = (i64, i64)> + '_ {
        self.rows.iter().copied().zip(self.cols.iter().copied())
    }
    /// Keep only the points within `shape`
    ///
    /// Relative order of the remaining points is unchanged
    pub fn inside(&self, shape: Shape) -> Coords {
        self.iter().filter(|&(r, c)| shape.contains(r, c)).collect()
    }
    /// Keep only the points within `shape`, together with their values
    ///
    /// `vals` runs parallel to the coordinates; an entry is dropped exactly
    /// when its point is. Values beyond the number of points are ignored.
    ///
    ///     use pixdraw::{Coords, Shape};
    ///
    ///     let c: Coords = vec![(-1, 0), (0, 0), (5, 5), (1, 1)].into_iter().collect();
    ///     let (c, v) = c.inside_with(Shape::new(2, 2), &[0.1, 0.2, 0.3, 0.4]);
    ///     assert_eq!(c.rows(), &[0, 1]);
    ///     assert_eq!(v, vec![0.2, 0.4]);
    ///
    pub fn inside_with<V: Copy>(&self, shape: Shape, vals: &[V]) -> (Coords, Vec<V>) {
        let mut out = Coords::with_capacity(self.len());
        let mut kept = Vec::with_capacity(vals.len());
        for ((r, c), &v) in self.iter().zip(vals.iter()) {
            if shape.contains(r, c) {
                out.push(r, c);
                kept.push(v);
            }
        }
        (out, kept)
    }
}

impl FromIterator<(i64, i64)> for Coords {
    fn from_iter<I: IntoIterator<Item = (i64, i64)>>(iter: I) -> Self {
        let mut c = Coords::new();
        c.extend(iter);
        c
    }
}

impl Extend<(i64, i64)> for Coords {
    fn extend<I: IntoIterator<Item = (i64, i64)>>(&mut self, iter: I) {
        for (r, c) in iter {
            self.push(r, c);
        }
    }
}
