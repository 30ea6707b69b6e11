use crate::RenderError;
use std::collections::HashMap;

/// Images keyed by the `src` the layout carries.
pub type ResolvedImages = HashMap<String, DecodedImage>;

/// An 8-bit RGB raster ready to become an image XObject.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub rgb: Vec<u8>,
}

impl DecodedImage {
    /// Decodes PNG, JPEG or GIF bytes. Transparent pixels are composited
    /// onto white.
    pub fn decode(src: &str, bytes: &[u8]) -> Result<Self, RenderError> {
        let decoded = image::load_from_memory(bytes).map_err(|e| RenderError::Image {
            src: src.to_string(),
            message: e.to_string(),
        })?;
        let rgba = decoded.to_rgba8();
        let (width, height) = rgba.dimensions();
        let mut rgb = Vec::with_capacity(width as usize * height as usize * 3);
        for pixel in rgba.pixels() {
            let [r, g, b, a] = pixel.0;
            let alpha = a as u32;
            for channel in [r, g, b] {
                rgb.push(((channel as u32 * alpha + 255 * (255 - alpha)) / 255) as u8);
            }
        }
        log::debug!("Decoded image {}x{} from {} bytes.", width, height, bytes.len());
        Ok(Self { width, height, rgb })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    fn png(pixel: Rgba<u8>) -> Vec<u8> {
        let img = RgbaImage::from_pixel(2, 3, pixel);
        let mut bytes = Cursor::new(Vec::new());
        img.write_to(&mut bytes, ImageFormat::Png).unwrap();
        bytes.into_inner()
    }

    #[test]
    fn decodes_png_to_rgb() {
        let img = DecodedImage::decode("p", &png(Rgba([10, 20, 30, 255]))).unwrap();
        assert_eq!((img.width, img.height), (2, 3));
        assert_eq!(img.rgb.len(), 18);
        assert_eq!(&img.rgb[..3], &[10, 20, 30]);
    }

    #[test]
    fn transparent_pixels_become_white() {
        let img = DecodedImage::decode("p", &png(Rgba([0, 0, 0, 0]))).unwrap();
        assert!(img.rgb.iter().all(|&c| c == 255));
    }

    #[test]
    fn garbage_is_an_error() {
        let err = DecodedImage::decode("photo", b"not an image").unwrap_err();
        assert!(matches!(err, RenderError::Image { ref src, .. } if src == "photo"));
    }
}
