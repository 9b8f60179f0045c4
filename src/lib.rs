//! Drawing primitives for raster images
//!
//! Shapes are turned into integer pixel coordinates, which are then blended
//! into an image with a color and an opacity.
//!
//! How does this work
//!
//!    coords = ellipse(r, c, yradius, xradius, shape)
//!      ellipse_bounds()       -- bounding box, clamped to shape
//!      ellipse_contains()     -- strict interior test, per pixel
//!    coords = polygon_perimeter(cy, cx, shape, clip)
//!      polygon_clip()         -- to shape or to the vertex bounding box
//!      iround()               -- vertices to pixels, ties to even
//!      line()                 -- one Bresenham segment per edge
//!      Coords::inside()       -- drop pixels outside shape
//!    set_color(img, coords, color, alpha)
//!      Coords::inside_with()  -- drop pixels and alpha outside image
//!      blend()                -- pixel * (1 - alpha) + color * alpha
//!
//! ```
//! use pixdraw::{ellipse, set_color, Image};
//!
//! let mut img = Image::<u8>::gray(10, 10);
//! let coords = ellipse(5.0, 5.0, 3.0, 4.0, Some(img.shape()));
//! set_color(&mut img, &coords, 1.0, 1.0).unwrap();
//! assert_eq!(&img.as_raw()[30..40], &[0, 0, 0, 1, 1, 1, 1, 1, 0, 0]);
//! ```

pub mod error;
pub mod coords;
pub mod math;
pub mod clip;
pub mod line;
pub mod ellipse;
pub mod polygon;
pub mod color;
pub mod buffer;
pub mod render;
pub mod io;

pub use error::*;
pub use coords::*;
pub use math::*;
pub use clip::*;
pub use line::*;
pub use ellipse::*;
pub use polygon::*;
pub use color::*;
pub use buffer::*;
pub use render::*;
pub use io::*;
