//! Renderer

use log::debug;

use crate::buffer::{Component, Image};
use crate::color::{Alpha, Color};
use crate::coords::Coords;
use crate::error::DrawError;
use crate::math::blend;

/// Set pixel color in the image at the given coordinates
///
/// Each channel becomes `pixel * (1 - alpha) + color * alpha`. Coordinates
/// outside the image are ignored, along with their alpha values.
///
/// Pixels are blended in coordinate order; a coordinate listed twice is
/// blended twice, the second time against the already blended pixel.
///
/// The color must have one value per image channel and a per-pixel alpha
/// one value per coordinate. Both are checked before the image is touched.
///
///     use pixdraw::{line, set_color, Image};
///
///     let mut img = Image::<u8>::gray(10, 10);
///     set_color(&mut img, &line(1, 1, 20, 20), 1.0, 1.0).unwrap();
///     for i in 0 .. 10 {
///         assert_eq!(img[(i,i)][0], if i == 0 { 0 } else { 1 });
///     }
///
pub fn set_color<T, C, A>(img: &mut Image<T>, coords: &Coords, color: C, alpha: A) -> Result<(), DrawError>
    where T: Component,
          C: Into<Color>,
          A: Into<Alpha>,
{
    let color = color.into();
    let alpha = alpha.into();
    if color.channels() != img.channels() {
        return Err(DrawError::ShapeMismatch { color: color.channels(), channels: img.channels() });
    }
    let n = coords.len();
    let alpha = alpha.expand(n).ok_or_else(|| DrawError::AlphaMismatch {
        alpha: alpha.len().unwrap_or(0),
        coords: n,
    })?;
    let (coords, alpha) = coords.inside_with(img.shape(), &alpha);
    debug!("SET COLOR: {} of {} coordinates inside {:?}", coords.len(), n, img.shape());
    for ((r, c), a) in coords.iter().zip(alpha) {
        let pix = &mut img[(r as usize, c as usize)];
        for (p, &q) in pix.iter_mut().zip(color.iter()) {
            *p = T::from_f64(blend(p.to_f64(), q, a));
        }
    }
    Ok(())
}
