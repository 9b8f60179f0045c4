//! Reading, writing and comparing image files
//!
//! Format is chosen from the file extension, see [image](https://docs.rs/image)
//!
use std::path::Path;

use log::debug;

use crate::buffer::Image;
use crate::error::DrawError;

/// Read an image file as 8-bit RGB
pub fn read_file<P: AsRef<Path>>(filename: P) -> Result<Image<u8>, DrawError> {
    let img = image::open(filename)?.to_rgb8();
    Ok(img.into())
}

impl Image<u8> {
    /// Write an 8-bit image to a file
    ///
    /// Single channel images are saved as gray scale, three channel images as
    /// RGB and four channel images as RGBA.
    pub fn to_file<P: AsRef<Path>>(&self, filename: P) -> Result<(), DrawError> {
        let color = match self.channels() {
            1 => image::ExtendedColorType::L8,
            2 => image::ExtendedColorType::La8,
            3 => image::ExtendedColorType::Rgb8,
            4 => image::ExtendedColorType::Rgba8,
            n => return Err(DrawError::Channels(n)),
        };
        image::save_buffer(filename, self.as_raw(), self.width() as u32, self.height() as u32, color)?;
        Ok(())
    }
}

/// Compare two image files pixel by pixel
///
/// Returns false on a size mismatch or any differing component
pub fn img_diff<P: AsRef<Path>>(f1: P, f2: P) -> Result<bool, DrawError> {
    let d1 = read_file(f1)?;
    let d2 = read_file(f2)?;
    if d1.shape() != d2.shape() {
        debug!("IMG DIFF: shapes differ {:?} {:?}", d1.shape(), d2.shape());
        return Ok(false);
    }
    let mut flag = true;
    let w = d1.width();
    for (i, (v1, v2)) in d1.as_raw().iter().zip(d2.as_raw().iter()).enumerate() {
        if v1 != v2 {
            debug!("IMG DIFF: {} [{},{},{}]: {} {}", i, (i/3)/w, (i/3)%w, i%3, v1, v2);
            flag = false;
        }
    }
    Ok(flag)
}

impl From<image::GrayImage> for Image<u8> {
    fn from(img: image::GrayImage) -> Self {
        let (w, h) = img.dimensions();
        Image::from_raw(h as usize, w as usize, 1, img.into_raw())
    }
}

impl From<image::RgbImage> for Image<u8> {
    fn from(img: image::RgbImage) -> Self {
        let (w, h) = img.dimensions();
        Image::from_raw(h as usize, w as usize, 3, img.into_raw())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gray_image_conversion() {
        let g = image::GrayImage::from_fn(3, 2, |x, y| image::Luma([(x + 10 * y) as u8]));
        let img = Image::from(g);
        assert_eq!(img.height(), 2);
        assert_eq!(img.width(), 3);
        assert_eq!(img.channels(), 1);
        assert_eq!(img[(1, 2)][0], 12);
    }

    #[test]
    fn rgb_image_conversion() {
        let g = image::RgbImage::from_fn(2, 2, |x, y| image::Rgb([x as u8, y as u8, 7]));
        let img = Image::from(g);
        assert_eq!(img.channels(), 3);
        assert_eq!(&img[(1, 0)], &[0, 1, 7]);
    }

    #[test]
    fn unsupported_channels() {
        let img = Image::<u8>::new(2, 2, 5);
        let path = std::env::temp_dir().join("pixdraw_unsupported_channels.png");
        assert!(matches!(img.to_file(&path), Err(DrawError::Channels(5))));
    }
}
