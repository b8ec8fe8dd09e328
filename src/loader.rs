// Copyright 2022 Spanfile
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Turning encoded payloads into the fixed-size sampling grid.

use crate::{
    error::{DecodeError, Result},
    settings::Settings,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::{ImageBuffer, RgbImage};

const DATA_URL_SCHEME: &str = "data:";
const BASE64_MARKER: &str = ";base64";

/// Decode raw image bytes (PNG, JPEG, ...) into an 8-bit RGB raster. Alpha is dropped.
pub fn decode(bytes: &[u8]) -> Result<RgbImage> {
    if bytes.is_empty() {
        return Err(DecodeError::Empty);
    }

    let image = image::load_from_memory(bytes)?.to_rgb8();
    log::debug!("decoded {}x{} image", image.width(), image.height());

    Ok(image)
}

/// Decode a base64 payload, either bare or wrapped in a `data:<mime>;base64,` URL.
pub fn decode_base64(payload: &str) -> Result<RgbImage> {
    let bytes = STANDARD.decode(strip_data_url(payload)?)?;
    decode(&bytes)
}

fn strip_data_url(payload: &str) -> Result<String> {
    let payload = payload.trim();

    let encoded = match payload.strip_prefix(DATA_URL_SCHEME) {
        Some(rest) => {
            let (header, encoded) = rest.split_once(',').ok_or(DecodeError::DataUrl {
                reason: "missing payload separator",
            })?;

            if !header.ends_with(BASE64_MARKER) {
                return Err(DecodeError::DataUrl {
                    reason: "not base64 encoded",
                });
            }

            encoded
        }
        None => payload,
    };

    let encoded: String = encoded.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    if encoded.is_empty() {
        return Err(DecodeError::Empty);
    }

    Ok(encoded)
}

/// Crop the central region of the image and resample it, nearest neighbour, to a square grid of
/// `settings.sample_size` pixels per side.
///
/// The photographed garment is assumed to fill the middle of the frame, so the crop keeps most of the backdrop
/// out of the histogram. Degenerate crops produce an empty grid rather than an error.
pub fn sample_region(image: &RgbImage, settings: &Settings) -> RgbImage {
    let (width, height) = image.dimensions();
    let (x0, span_x) = crop_axis(width, settings.crop_offset, settings.crop_span);
    let (y0, span_y) = crop_axis(height, settings.crop_offset, settings.crop_span);
    let size = settings.sample_size;

    if span_x == 0 || span_y == 0 || size == 0 {
        log::debug!("crop of {}x{} image is empty", width, height);
        return RgbImage::new(0, 0);
    }

    ImageBuffer::from_fn(size, size, |x, y| {
        let src_x = x0 + nearest(x, size, span_x);
        let src_y = y0 + nearest(y, size, span_y);
        *image.get_pixel(src_x, src_y)
    })
}

// offset and length of the crop along one axis, clamped to the image
fn crop_axis(length: u32, offset: f64, span: f64) -> (u32, u32) {
    let start = ((length as f64 * offset).floor().max(0.0) as u32).min(length);
    let span = ((length as f64 * span).round().max(0.0) as u32).min(length - start);

    (start, span)
}

// source index of the pixel whose center is closest to the center of destination pixel `index`
fn nearest(index: u32, dst_len: u32, src_len: u32) -> u32 {
    let src = ((index as f64 + 0.5) * src_len as f64 / dst_len as f64).floor() as u32;
    src.min(src_len - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine as _;
    use image::{DynamicImage, ImageOutputFormat, Rgb};
    use std::io::Cursor;

    fn png_bytes(image: RgbImage) -> Vec<u8> {
        let mut cursor = Cursor::new(Vec::new());
        DynamicImage::ImageRgb8(image)
            .write_to(&mut cursor, ImageOutputFormat::Png)
            .unwrap();
        cursor.into_inner()
    }

    #[test]
    fn test_decode_png() {
        let bytes = png_bytes(RgbImage::from_pixel(7, 3, Rgb([10, 20, 30])));
        let image = decode(&bytes).unwrap();

        assert_eq!(image.dimensions(), (7, 3));
        assert_eq!(*image.get_pixel(6, 2), Rgb([10, 20, 30]));
    }

    #[test]
    fn test_decode_garbage() {
        assert!(matches!(decode(b"definitely not an image"), Err(DecodeError::Image { .. })));
        assert!(matches!(decode(&[]), Err(DecodeError::Empty)));
    }

    #[test]
    fn test_decode_data_url() {
        let bytes = png_bytes(RgbImage::from_pixel(4, 4, Rgb([200, 0, 0])));
        let url = format!("data:image/png;base64,{}", STANDARD.encode(&bytes));

        let image = decode_base64(&url).unwrap();
        assert_eq!(*image.get_pixel(0, 0), Rgb([200, 0, 0]));

        let bare = decode_base64(&STANDARD.encode(&bytes)).unwrap();
        assert_eq!(image, bare);
    }

    #[test]
    fn test_decode_base64_ignores_line_breaks() {
        let encoded = STANDARD.encode(png_bytes(RgbImage::from_pixel(2, 2, Rgb([1, 2, 3]))));
        let (head, tail) = encoded.split_at(encoded.len() / 2);

        assert!(decode_base64(&format!("{}\n{}\n", head, tail)).is_ok());
    }

    #[test]
    fn test_malformed_data_urls() {
        assert!(matches!(
            decode_base64("data:image/png;base64"),
            Err(DecodeError::DataUrl { .. })
        ));
        assert!(matches!(
            decode_base64("data:text/plain,hello"),
            Err(DecodeError::DataUrl { .. })
        ));
        assert!(matches!(decode_base64("data:image/png;base64,"), Err(DecodeError::Empty)));
        assert!(matches!(decode_base64("@@@not base64@@@"), Err(DecodeError::Base64 { .. })));
    }

    #[test]
    fn test_sample_region_is_square() {
        let image = RgbImage::from_pixel(640, 480, Rgb([5, 5, 5]));
        let grid = sample_region(&image, &Settings::default());

        assert_eq!(grid.dimensions(), (128, 128));
        assert!(grid.pixels().all(|p| *p == Rgb([5, 5, 5])));
    }

    #[test]
    fn test_sample_region_drops_border() {
        // a 10 px frame of red around a green center; the 20% crop of 100 px skips 20 px on each side
        let image = RgbImage::from_fn(100, 100, |x, y| {
            if x < 10 || y < 10 || x >= 90 || y >= 90 {
                Rgb([255, 0, 0])
            } else {
                Rgb([0, 255, 0])
            }
        });
        let grid = sample_region(&image, &Settings::default());

        assert!(grid.pixels().all(|p| *p == Rgb([0, 255, 0])));
    }

    #[test]
    fn test_sample_region_keeps_halves_symmetric() {
        let image = RgbImage::from_fn(100, 100, |x, _| if x < 50 { Rgb([0, 0, 255]) } else { Rgb([255, 255, 0]) });
        let grid = sample_region(&image, &Settings::default());

        let blue_columns = (0..128).filter(|&x| *grid.get_pixel(x, 0) == Rgb([0, 0, 255])).count();
        assert_eq!(blue_columns, 64);
        assert_eq!(*grid.get_pixel(63, 0), Rgb([0, 0, 255]));
        assert_eq!(*grid.get_pixel(64, 0), Rgb([255, 255, 0]));
    }

    #[test]
    fn test_tiny_image_still_samples() {
        let image = RgbImage::from_pixel(1, 1, Rgb([9, 9, 9]));
        let grid = sample_region(&image, &Settings::default());

        assert_eq!(grid.dimensions(), (128, 128));
    }

    #[test]
    fn test_degenerate_crop_is_empty() {
        let image = RgbImage::from_pixel(10, 10, Rgb([9, 9, 9]));
        let settings = Settings {
            crop_span: 0.0,
            ..Settings::default()
        };

        assert_eq!(sample_region(&image, &settings).dimensions(), (0, 0));
    }
}
