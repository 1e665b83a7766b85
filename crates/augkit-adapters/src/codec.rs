//! Image codec adapter backed by the `image` crate.

use anyhow::{Context, Result};
use augkit_core::{ImageArray, ImageReader, ReadFlags};
use image::{DynamicImage, GrayImage, ImageBuffer, Pixel};
use ndarray::{Array2, Array3};
use tracing::debug;

/// Decodes image files from disk.
///
/// Channels come out in the decoder's order (RGB, RGBA, luma + alpha).
#[derive(Debug, Clone, Copy, Default)]
pub struct CodecImageReader;

impl CodecImageReader {
    /// Creates a new codec reader.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ImageReader for CodecImageReader {
    fn imread(&self, path: &str, flags: ReadFlags) -> Result<ImageArray> {
        debug!("Decoding image {path} with {flags:?}");

        let image = image::open(path).with_context(|| format!("Failed to open image: {path}"))?;
        to_image_array(image, flags).with_context(|| format!("Failed to convert image: {path}"))
    }
}

/// Converts a decoded image into an 8-bit array laid out as `flags` asks.
///
/// # Errors
///
/// Returns an error if the pixel buffer does not match the image dimensions.
pub fn to_image_array(image: DynamicImage, flags: ReadFlags) -> Result<ImageArray> {
    match flags {
        ReadFlags::Grayscale => gray_array(image.into_luma8()),
        ReadFlags::Color => channels_array(image.into_rgb8()),
        ReadFlags::Unchanged => match image.color().channel_count() {
            1 => gray_array(image.into_luma8()),
            2 => channels_array(image.into_luma_alpha8()),
            3 => channels_array(image.into_rgb8()),
            _ => channels_array(image.into_rgba8()),
        },
    }
}

fn gray_array(buffer: GrayImage) -> Result<ImageArray> {
    let (width, height) = buffer.dimensions();
    let array = Array2::from_shape_vec((height as usize, width as usize), buffer.into_raw())?;
    Ok(ImageArray::Gray(array))
}

fn channels_array<P>(buffer: ImageBuffer<P, Vec<u8>>) -> Result<ImageArray>
where
    P: Pixel<Subpixel = u8>,
{
    let (width, height) = buffer.dimensions();
    let shape = (
        height as usize,
        width as usize,
        usize::from(P::CHANNEL_COUNT),
    );
    let array = Array3::from_shape_vec(shape, buffer.into_raw())?;
    Ok(ImageArray::Channels(array))
}
