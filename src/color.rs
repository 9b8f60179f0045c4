//! Colors

use std::ops::Deref;

/// Color as one value per image channel
///
/// A single value is a gray level for a one channel image; three values
/// are red, green and blue for an RGB image, and so on. Values are in the
/// units of the image components, e.g. 0 to 255 for `u8` images.
///
///     use pixdraw::Color;
///
///     assert_eq!(Color::from(1.0).channels(), 1);
///     assert_eq!(Color::from([255u8, 0, 0]).channels(), 3);
///     assert_eq!(Color::rgba(1.0, 0.5, 0.25, 1.0)[1], 0.5);
///
#[derive(Debug, Clone, PartialEq)]
pub struct Color(Vec<f64>);

impl Color {
    /// Create a new color from channel values
    pub fn new(values: Vec<f64>) -> Self {
        Color(values)
    }
    /// Single channel gray value
    pub fn gray(v: f64) -> Self {
        Color(vec![v])
    }
    /// Red, Green and Blue
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Color(vec![r, g, b])
    }
    /// Red, Green, Blue and Alpha
    ///
    /// The alpha component here is a channel value like any other,
    /// blending uses [Alpha](enum.Alpha.html)
    pub fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Color(vec![r, g, b, a])
    }
    /// Number of channels
    pub fn channels(&self) -> usize {
        self.0.len()
    }
}

impl Deref for Color {
    type Target = [f64];
    fn deref(&self) -> &[f64] {
        &self.0
    }
}

impl From<f64> for Color {
    fn from(v: f64) -> Self {
        Color::gray(v)
    }
}
impl From<u8> for Color {
    fn from(v: u8) -> Self {
        Color::gray(f64::from(v))
    }
}
impl From<Vec<f64>> for Color {
    fn from(v: Vec<f64>) -> Self {
        Color(v)
    }
}
impl<'a> From<&'a [f64]> for Color {
    fn from(v: &[f64]) -> Self {
        Color(v.to_vec())
    }
}
impl<const N: usize> From<[f64; N]> for Color {
    fn from(v: [f64; N]) -> Self {
        Color(v.to_vec())
    }
}
impl<const N: usize> From<[u8; N]> for Color {
    fn from(v: [u8; N]) -> Self {
        Color(v.iter().map(|&x| f64::from(x)).collect())
    }
}

/// Opacity used when blending a color into an image
///
/// 0 is transparent, 1 is opaque. Values outside [0,1] are accepted and
/// extrapolate the blend.
#[derive(Debug, Clone, PartialEq)]
pub enum Alpha {
    /// Same opacity for every coordinate
    Uniform(f64),
    /// One opacity per coordinate, in coordinate order
    PerPixel(Vec<f64>),
}

impl Default for Alpha {
    fn default() -> Alpha {
        Alpha::Uniform(1.0)
    }
}

impl Alpha {
    /// Opacity of each of `n` coordinates
    ///
    /// Returns None if a per-pixel alpha does not have `n` values
    pub fn expand(&self, n: usize) -> Option<Vec<f64>> {
        match self {
            Alpha::Uniform(a) => Some(vec![*a; n]),
            Alpha::PerPixel(v) if v.len() == n => Some(v.clone()),
            Alpha::PerPixel(_) => None,
        }
    }
    /// Number of values, None if uniform
    pub fn len(&self) -> Option<usize> {
        match self {
            Alpha::Uniform(_) => None,
            Alpha::PerPixel(v) => Some(v.len()),
        }
    }
}

impl From<f64> for Alpha {
    fn from(a: f64) -> Self {
        Alpha::Uniform(a)
    }
}
impl From<Vec<f64>> for Alpha {
    fn from(v: Vec<f64>) -> Self {
        Alpha::PerPixel(v)
    }
}
impl<'a> From<&'a [f64]> for Alpha {
    fn from(v: &[f64]) -> Self {
        Alpha::PerPixel(v.to_vec())
    }
}
