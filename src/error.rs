//! Errors

use thiserror::Error;

/// Failures reported by the drawing routines
///
/// Every check happens before any coordinate is produced or any pixel is
/// written, so an `Err` never leaves an image partially modified.
#[derive(Debug, Error)]
pub enum DrawError {
    /// Clipping to a shape was requested without a shape
    #[error("must specify clipping shape")]
    MissingClipShape,
    /// Row and column vertex sequences differ in length
    #[error("vertex rows ({rows}) and columns ({cols}) differ in length")]
    VertexMismatch { rows: usize, cols: usize },
    /// Row and column coordinate sequences differ in length
    #[error("coordinate rows ({rows}) and columns ({cols}) differ in length")]
    CoordsMismatch { rows: usize, cols: usize },
    /// Color does not have one value per image channel
    #[error("color shape ({color}) must match last image dimension ({channels})")]
    ShapeMismatch { color: usize, channels: usize },
    /// Per-pixel alpha does not have one value per coordinate
    #[error("alpha length ({alpha}) must match number of coordinates ({coords})")]
    AlphaMismatch { alpha: usize, coords: usize },
    /// Pixel data does not fill height * width * channels
    #[error("image data has {actual} components, expected {expected}")]
    BufferSize { expected: usize, actual: usize },
    /// Image files hold 1 to 4 channels
    #[error("cannot save image with {0} channels")]
    Channels(usize),
    /// Reading, writing or decoding an image file failed
    #[error(transparent)]
    Image(#[from] image::ImageError),
}
