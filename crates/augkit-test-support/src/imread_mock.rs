//! Mock of the image-decode primitive.

use std::collections::HashMap;
use std::fmt;

use augkit_adapters::CodecImageReader;
use augkit_core::{ImageArray, ImageReader, ReadFlags};
use ndarray::{Array2, Array3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::config::TestSupportConfig;

/// Mock implementation of `ImageReader` for testing.
///
/// Four template names resolve to random 8-bit images generated once at
/// construction; any other name is forwarded to the fallback reader, which
/// decodes real files by default.
pub struct ImreadMock<R = CodecImageReader> {
    images: HashMap<&'static str, ImageArray>,
    fallback: R,
}

impl ImreadMock {
    /// 100×100 single-channel template.
    pub const IMG_100_8UC1: &'static str = "template_100_u8c1.png";
    /// 224×224 single-channel template.
    pub const IMG_224_8UC1: &'static str = "template_224_u8c1.png";
    /// 512×512 single-channel template.
    pub const IMG_512_8UC1: &'static str = "template_512_u8c1.png";
    /// 512×512 three-channel template.
    pub const IMG_512_8UC3: &'static str = "template_512_u8c3.png";

    /// Every template name, in generation order.
    pub const KEYS: [&'static str; 4] = [
        Self::IMG_100_8UC1,
        Self::IMG_224_8UC1,
        Self::IMG_512_8UC1,
        Self::IMG_512_8UC3,
    ];

    /// Creates a mock with freshly randomized templates.
    #[must_use]
    pub fn new() -> Self {
        Self::from_rng(&mut StdRng::from_entropy())
    }

    /// Creates a mock whose templates are reproducible for `seed`.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(&mut StdRng::seed_from_u64(seed))
    }

    /// Creates a mock honoring the `[imread]` section of `config`.
    #[must_use]
    pub fn from_config(config: &TestSupportConfig) -> Self {
        match config.imread.seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::new(),
        }
    }

    fn from_rng(rng: &mut StdRng) -> Self {
        let images = HashMap::from([
            (Self::IMG_100_8UC1, random_gray(rng, 100)),
            (Self::IMG_224_8UC1, random_gray(rng, 224)),
            (Self::IMG_512_8UC1, random_gray(rng, 512)),
            (Self::IMG_512_8UC3, random_channels(rng, 512, 3)),
        ]);
        Self {
            images,
            fallback: CodecImageReader,
        }
    }
}

impl Default for ImreadMock {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: ImageReader> ImreadMock<R> {
    /// Replaces the reader used for names that are not templates.
    #[must_use]
    pub fn with_fallback<F: ImageReader>(self, fallback: F) -> ImreadMock<F> {
        ImreadMock {
            images: self.images,
            fallback,
        }
    }

    /// Returns the template stored under `file`, or decodes `file` with the
    /// fallback reader.
    ///
    /// # Errors
    ///
    /// Propagates whatever the fallback reader returns for non-template names.
    pub fn call(&self, file: &str, flags: ReadFlags) -> anyhow::Result<ImageArray> {
        if let Some(image) = self.images.get(file) {
            return Ok(image.clone());
        }

        debug!("No template named {file}, falling back to real decoding");
        self.fallback.imread(file, flags)
    }

    /// Borrows the template stored under `file`.
    #[must_use]
    pub fn get(&self, file: &str) -> Option<&ImageArray> {
        self.images.get(file)
    }

    /// Returns whether `file` names a template.
    #[must_use]
    pub fn contains(&self, file: &str) -> bool {
        self.images.contains_key(file)
    }

    /// Borrows the fallback reader.
    #[must_use]
    pub const fn fallback(&self) -> &R {
        &self.fallback
    }
}

impl<R: fmt::Debug> fmt::Debug for ImreadMock<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImreadMock")
            .field("templates", &self.images.len())
            .field("fallback", &self.fallback)
            .finish()
    }
}

impl<R: ImageReader> ImageReader for ImreadMock<R> {
    fn imread(&self, path: &str, flags: ReadFlags) -> anyhow::Result<ImageArray> {
        self.call(path, flags)
    }
}

fn random_gray(rng: &mut StdRng, size: usize) -> ImageArray {
    ImageArray::Gray(Array2::from_shape_simple_fn((size, size), || rng.gen()))
}

fn random_channels(rng: &mut StdRng, size: usize, channels: usize) -> ImageArray {
    ImageArray::Channels(Array3::from_shape_simple_fn(
        (size, size, channels),
        || rng.gen(),
    ))
}
