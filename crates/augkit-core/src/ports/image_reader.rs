//! Image-decode port.

use std::sync::Arc;

use crate::domain::{ImageArray, ReadFlags};

/// Port for reading an image by name into an array.
pub trait ImageReader: Send + Sync {
    /// Decodes the image stored under `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the image cannot be found or decoded.
    fn imread(&self, path: &str, flags: ReadFlags) -> anyhow::Result<ImageArray>;
}

impl<R: ImageReader + ?Sized> ImageReader for Box<R> {
    fn imread(&self, path: &str, flags: ReadFlags) -> anyhow::Result<ImageArray> {
        (**self).imread(path, flags)
    }
}

impl<R: ImageReader + ?Sized> ImageReader for Arc<R> {
    fn imread(&self, path: &str, flags: ReadFlags) -> anyhow::Result<ImageArray> {
        (**self).imread(path, flags)
    }
}
