//! Decoding and re-encoding of downloaded cover images.

use std::io::Cursor;

use bytes::Bytes;
use catalog::cover_storage::CoverFormat;
use image::{ColorType, DynamicImage, ImageFormat, codecs::jpeg::JpegEncoder};
use thiserror::Error;
use tracing::{info, warn};

const JPEG_QUALITY: u8 = 85;

#[derive(Debug, Error)]
pub enum CoverImageError {
    #[error("Image decode failed: {0}")]
    Decode(#[source] image::ImageError),
    #[error("Image encode failed (jpeg: {jpeg}; png: {png})")]
    Encode {
        jpeg: image::ImageError,
        png: image::ImageError,
    },
}

/// A cover ready to be stored.
#[derive(Debug, Clone)]
pub struct EncodedCover {
    pub bytes: Bytes,
    pub format: CoverFormat,
}

/// Decodes `raw`, converts it to three-channel RGB when needed, and encodes
/// it as a quality-85 JPEG, or as PNG if JPEG encoding fails.
pub fn normalize_cover(raw: &[u8]) -> Result<EncodedCover, CoverImageError> {
    let decoded = image::load_from_memory(raw).map_err(CoverImageError::Decode)?;
    let rgb = into_rgb(decoded);
    let jpeg = encode_jpeg(&rgb);
    with_png_fallback(&rgb, jpeg)
}

/// Keeps a successful JPEG encoding, otherwise re-encodes `rgb` as PNG.
fn with_png_fallback(
    rgb: &DynamicImage,
    jpeg: Result<Bytes, image::ImageError>,
) -> Result<EncodedCover, CoverImageError> {
    let jpeg = match jpeg {
        Ok(bytes) => {
            return Ok(EncodedCover {
                bytes,
                format: CoverFormat::Jpeg,
            });
        }
        Err(e) => e,
    };

    warn!("  JPEG encoding failed ({jpeg}), saving as PNG");
    match encode_png(rgb) {
        Ok(bytes) => Ok(EncodedCover {
            bytes,
            format: CoverFormat::Png,
        }),
        Err(png) => Err(CoverImageError::Encode { jpeg, png }),
    }
}

fn into_rgb(image: DynamicImage) -> DynamicImage {
    if image.color() == ColorType::Rgb8 {
        return image;
    }
    info!("  Converting image from {:?} to Rgb8", image.color());
    DynamicImage::ImageRgb8(image.to_rgb8())
}

fn encode_jpeg(image: &DynamicImage) -> Result<Bytes, image::ImageError> {
    let mut encoded = Vec::new();
    image.write_with_encoder(JpegEncoder::new_with_quality(&mut encoded, JPEG_QUALITY))?;
    Ok(Bytes::from(encoded))
}

fn encode_png(image: &DynamicImage) -> Result<Bytes, image::ImageError> {
    let mut cursor = Cursor::new(Vec::new());
    image.write_to(&mut cursor, ImageFormat::Png)?;
    Ok(Bytes::from(cursor.into_inner()))
}
