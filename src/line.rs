//! Line rasterizer

use crate::coords::Coords;

/// Integer line from (`r0`,`c0`) to (`r1`,`c1`)
///
/// Walks the major axis one pixel at a time and steps the minor axis using
/// an integer decision variable,
/// [Bresenham's line drawing algorithm](https://en.wikipedia.org/wiki/Bresenham%27s_line_algorithm).
/// Both end points are included and the final point is always exactly
/// (`r1`,`c1`).
///
///     use pixdraw::BresenhamLine;
///
///     let pts: Vec<_> = BresenhamLine::new(0, 0, 2, 4).collect();
///     assert_eq!(pts, vec![(0,0), (1,1), (1,2), (2,3), (2,4)]);
///
#[derive(Debug, Clone)]
pub struct BresenhamLine {
    /// Position along the major axis
    major: i64,
    /// Position along the minor axis
    minor: i64,
    /// Step of the major axis, +1 or -1
    inc_major: i64,
    /// Step of the minor axis, +1 or -1
    inc_minor: i64,
    /// Absolute delta of the major axis
    len: i64,
    /// Absolute delta of the minor axis
    dminor: i64,
    /// Decision variable
    d: i64,
    /// Line is primarily vertical (rows are the major axis)
    ver: bool,
    /// Pixels emitted so far, not counting the end point
    step: i64,
    /// End point
    end: (i64, i64),
    done: bool,
}

impl BresenhamLine {
    pub fn new(r0: i64, c0: i64, r1: i64, c1: i64) -> Self {
        let dr = (r1 - r0).abs();
        let dc = (c1 - c0).abs();
        let sr = if r1 - r0 > 0 { 1 } else { -1 };
        let sc = if c1 - c0 > 0 { 1 } else { -1 };
        let ver = dr > dc;
        let (major, minor, inc_major, inc_minor, len, dminor) = if ver {
            (r0, c0, sr, sc, dr, dc)
        } else {
            (c0, r0, sc, sr, dc, dr)
        };
        Self {
            major, minor, inc_major, inc_minor, len, dminor,
            d: 2 * dminor - len,
            ver,
            step: 0,
            end: (r1, c1),
            done: false,
        }
    }
    /// Number of pixels on the line
    pub fn num_points(&self) -> usize {
        self.len as usize + 1
    }
    fn point(&self) -> (i64, i64) {
        if self.ver {
            (self.major, self.minor)
        } else {
            (self.minor, self.major)
        }
    }
    fn inc(&mut self) {
        while self.d >= 0 {
            self.minor += self.inc_minor;
            self.d -= 2 * self.len;
        }
        self.major += self.inc_major;
        self.d += 2 * self.dminor;
    }
}

impl Iterator for BresenhamLine {
    type Item = (i64, i64);
    fn next(&mut self) -> Option<(i64, i64)> {
        if self.done {
            return None;
        }
        if self.step < self.len {
            let p = self.point();
            self.inc();
            self.step += 1;
            Some(p)
        } else {
            self.done = true;
            Some(self.end)
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = if self.done { 0 } else { (self.len - self.step) as usize + 1 };
        (n, Some(n))
    }
}

/// Generate the pixel coordinates of a line from (`r0`,`c0`) to (`r1`,`c1`)
///
/// Points are returned in drawing order, from start to end inclusive
///
///     use pixdraw::line;
///
///     let c = line(1, 1, 4, 2);
///     assert_eq!(c.rows(), &[1, 2, 3, 4]);
///     assert_eq!(c.cols(), &[1, 1, 2, 2]);
///
pub fn line(r0: i64, c0: i64, r1: i64, c1: i64) -> Coords {
    BresenhamLine::new(r0, c0, r1, c1).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(r0: i64, c0: i64, r1: i64, c1: i64) -> Vec<(i64, i64)> {
        line(r0, c0, r1, c1).iter().collect()
    }

    #[test]
    fn single_point() {
        assert_eq!(pts(3, 4, 3, 4), vec![(3, 4)]);
    }

    #[test]
    fn horizontal_and_vertical() {
        assert_eq!(pts(2, 0, 2, 3), vec![(2, 0), (2, 1), (2, 2), (2, 3)]);
        assert_eq!(pts(2, 3, 2, 0), vec![(2, 3), (2, 2), (2, 1), (2, 0)]);
        assert_eq!(pts(0, 1, 3, 1), vec![(0, 1), (1, 1), (2, 1), (3, 1)]);
        assert_eq!(pts(3, 1, 0, 1), vec![(3, 1), (2, 1), (1, 1), (0, 1)]);
    }

    #[test]
    fn diagonal() {
        let p = pts(1, 1, 20, 20);
        assert_eq!(p.len(), 20);
        for (i, &(r, c)) in p.iter().enumerate() {
            assert_eq!(r, i as i64 + 1);
            assert_eq!(c, i as i64 + 1);
        }
        assert_eq!(pts(0, 3, 3, 0), vec![(0, 3), (1, 2), (2, 1), (3, 0)]);
    }

    #[test]
    fn shallow_and_steep() {
        assert_eq!(pts(1, 1, 1, 8).len(), 8);
        assert_eq!(pts(1, 8, 8, 4), vec![(1, 8), (2, 7), (3, 7), (4, 6), (5, 6), (6, 5), (7, 5), (8, 4)]);
        assert_eq!(pts(8, 4, 1, 1), vec![(8, 4), (7, 4), (6, 3), (5, 3), (4, 2), (3, 2), (2, 1), (1, 1)]);
        assert_eq!(pts(9, 4, 6, 0), vec![(9, 4), (8, 3), (7, 2), (7, 1), (6, 0)]);
    }

    #[test]
    fn connected_and_counted() {
        for &(r0, c0, r1, c1) in &[(0, 0, 7, 3), (5, -2, -4, 9), (-3, -3, -10, 4), (0, 0, 1, 9)] {
            let it = BresenhamLine::new(r0, c0, r1, c1);
            let n = it.num_points();
            let p = pts(r0, c0, r1, c1);
            assert_eq!(p.len(), n);
            assert_eq!(p[0], (r0, c0));
            assert_eq!(p[p.len() - 1], (r1, c1));
            for w in p.windows(2) {
                assert!((w[0].0 - w[1].0).abs() <= 1);
                assert!((w[0].1 - w[1].1).abs() <= 1);
            }
        }
    }

    #[test]
    fn size_hint_is_exact() {
        let mut it = BresenhamLine::new(0, 0, 3, 5);
        assert_eq!(it.size_hint(), (6, Some(6)));
        it.next();
        assert_eq!(it.size_hint(), (5, Some(5)));
        let rest: Vec<_> = it.by_ref().collect();
        assert_eq!(rest.len(), 5);
        assert_eq!(it.size_hint(), (0, Some(0)));
    }
}
