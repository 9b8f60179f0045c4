//! Image buffer

use std::ops::Index;
use std::ops::IndexMut;

use crate::coords::Shape;
use crate::error::DrawError;

/// Numeric type of a single color component
///
/// Blending is done in `f64`; integer components convert back by truncating
/// toward zero, saturating at the type bounds.
pub trait Component: Copy + Default + std::fmt::Debug {
    fn to_f64(self) -> f64;
    fn from_f64(v: f64) -> Self;
}

macro_rules! component {
    ($($t:ty),*) => {
        $(
            impl Component for $t {
                fn to_f64(self) -> f64 { self as f64 }
                fn from_f64(v: f64) -> Self { v as $t }
            }
        )*
    }
}
component!(u8, u16, i32, f32, f64);

/// Image
///
/// Data is stored as row-major order (C-format) with the channels of a pixel
/// stored together (channel last). A single-channel image is a plain 2D
/// array.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Image<T> {
    /// Pixel / Component level data of Image
    data: Vec<T>,
    /// Image Height in pixels
    height: usize,
    /// Image Width in pixels
    width: usize,
    /// Number of color components per pixel
    channels: usize,
}

impl<T: Component> Image<T> {
    /// Create a new image of height, width, and channels
    ///
    /// All components start at zero
    pub fn new(height: usize, width: usize, channels: usize) -> Self {
        Image {
            height, width, channels, data: vec![T::default(); height * width * channels]
        }
    }
    /// Create a new single-channel image
    pub fn gray(height: usize, width: usize) -> Self {
        Self::new(height, width, 1)
    }
    /// Wrap existing component data
    ///
    /// Fails if `data` does not hold exactly `height * width * channels` values
    pub fn from_vec(height: usize, width: usize, channels: usize, data: Vec<T>) -> Result<Self, DrawError> {
        let expected = height * width * channels;
        if data.len() != expected {
            return Err(DrawError::BufferSize { expected, actual: data.len() });
        }
        Ok(Image { data, height, width, channels })
    }
    pub(crate) fn from_raw(height: usize, width: usize, channels: usize, data: Vec<T>) -> Self {
        debug_assert_eq!(data.len(), height * width * channels);
        Image { data, height, width, channels }
    }
    pub fn height(&self) -> usize {
        self.height
    }
    pub fn width(&self) -> usize {
        self.width
    }
    /// Number of color components per pixel
    pub fn channels(&self) -> usize {
        self.channels
    }
    /// Height and width
    pub fn shape(&self) -> Shape {
        Shape::new(self.height, self.width)
    }
    /// Size of underlying data in components
    pub fn len(&self) -> usize {
        self.data.len()
    }
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
    /// Set every component to `v`
    pub fn fill(&mut self, v: T) {
        self.data.iter_mut().for_each(|x| *x = v);
    }
    /// Component data
    pub fn as_raw(&self) -> &[T] {
        &self.data
    }
    /// Consume the image, returning the component data
    pub fn into_raw(self) -> Vec<T> {
        self.data
    }
    /// Pixel at (row, col), None if outside the image
    pub fn get(&self, row: usize, col: usize) -> Option<&[T]> {
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(&self[(row, col)])
    }
    fn offset(&self, row: usize, col: usize) -> usize {
        ((row * self.width) + col) * self.channels
    }
}

impl<T: Component> Index<(usize, usize)> for Image<T> {
    type Output = [T];
    fn index(&self, index: (usize, usize)) -> &[T] {
        assert!(index.0 < self.height, "request {} >= {} height :: index", index.0, self.height);
        assert!(index.1 < self.width, "request {} >= {} width :: index", index.1, self.width);
        let i = self.offset(index.0, index.1);
        &self.data[i .. i + self.channels]
    }
}
impl<T: Component> IndexMut<(usize, usize)> for Image<T> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut [T] {
        assert!(index.0 < self.height, "request {} >= {} height :: index_mut", index.0, self.height);
        assert!(index.1 < self.width, "request {} >= {} width :: index_mut", index.1, self.width);
        let i = self.offset(index.0, index.1);
        let n = self.channels;
        &mut self.data[i .. i + n]
    }
}
