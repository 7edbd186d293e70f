//! JPEG decoding

use crate::types::*;
use image::codecs::jpeg::JpegDecoder;
use image::{DynamicImage, ImageError, RgbImage};
use printpdf::{RawImage, RawImageData, RawImageFormat};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// A fully decoded JPEG, ready to be embedded in a page
pub(crate) struct DecodedJpeg {
    pub(crate) dimensions: Dimensions,
    pixels: RgbImage,
}

impl DecodedJpeg {
    /// Decode the JPEG at `path`.
    ///
    /// The whole image is decoded, so truncated scan data is caught here
    /// and not later when the page is composed.
    pub(crate) fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let decoder = JpegDecoder::new(BufReader::new(file)).map_err(decode_error)?;
        let image = DynamicImage::from_decoder(decoder).map_err(decode_error)?;

        let dimensions = Dimensions::new(image.width() as f32, image.height() as f32);
        if dimensions.is_degenerate() {
            return Err(MergeError::Decode(format!(
                "image has no area ({}x{})",
                image.width(),
                image.height()
            )));
        }

        Ok(Self {
            dimensions,
            pixels: image.into_rgb8(),
        })
    }

    /// Convert to RGB8 for printpdf
    pub(crate) fn into_raw_image(self) -> RawImage {
        let width = self.pixels.width() as usize;
        let height = self.pixels.height() as usize;
        RawImage {
            pixels: RawImageData::U8(self.pixels.into_raw()),
            width,
            height,
            data_format: RawImageFormat::RGB8,
            tag: Vec::new(),
        }
    }
}

/// Read the pixel dimensions of a JPEG file
pub fn read_dimensions(path: impl AsRef<Path>) -> Result<Dimensions> {
    Ok(DecodedJpeg::open(path.as_ref())?.dimensions)
}

fn decode_error(err: ImageError) -> MergeError {
    match err {
        ImageError::IoError(e) => MergeError::Io(e),
        other => MergeError::Decode(other.to_string()),
    }
}
