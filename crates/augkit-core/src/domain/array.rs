//! Decoded image arrays.

use ndarray::{Array2, Array3, ArrayD};

/// An 8-bit image as produced by an image decoder.
///
/// Single-channel images are two-dimensional `(H, W)`; everything else is
/// three-dimensional `(H, W, C)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageArray {
    /// Single-channel `(H, W)` image.
    Gray(Array2<u8>),
    /// Multi-channel `(H, W, C)` image.
    Channels(Array3<u8>),
}

impl ImageArray {
    /// Returns the array shape, `[H, W]` or `[H, W, C]`.
    #[must_use]
    pub fn shape(&self) -> &[usize] {
        match self {
            Self::Gray(a) => a.shape(),
            Self::Channels(a) => a.shape(),
        }
    }

    /// Returns the number of axes (2 or 3).
    #[must_use]
    pub fn ndim(&self) -> usize {
        self.shape().len()
    }

    /// Image height in pixels.
    #[must_use]
    pub fn height(&self) -> usize {
        self.shape()[0]
    }

    /// Image width in pixels.
    #[must_use]
    pub fn width(&self) -> usize {
        self.shape()[1]
    }

    /// Number of channels; a 2-D image has one.
    #[must_use]
    pub fn channels(&self) -> usize {
        match self {
            Self::Gray(_) => 1,
            Self::Channels(a) => a.dim().2,
        }
    }

    /// Borrows the inner array if this is a single-channel image.
    #[must_use]
    pub const fn as_gray(&self) -> Option<&Array2<u8>> {
        match self {
            Self::Gray(a) => Some(a),
            Self::Channels(_) => None,
        }
    }

    /// Borrows the inner array if this is a multi-channel image.
    #[must_use]
    pub const fn as_channels(&self) -> Option<&Array3<u8>> {
        match self {
            Self::Gray(_) => None,
            Self::Channels(a) => Some(a),
        }
    }

    /// Converts into a dynamically-dimensioned array.
    #[must_use]
    pub fn into_dyn(self) -> ArrayD<u8> {
        match self {
            Self::Gray(a) => a.into_dyn(),
            Self::Channels(a) => a.into_dyn(),
        }
    }
}

impl From<Array2<u8>> for ImageArray {
    fn from(array: Array2<u8>) -> Self {
        Self::Gray(array)
    }
}

impl From<Array3<u8>> for ImageArray {
    fn from(array: Array3<u8>) -> Self {
        Self::Channels(array)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gray_shape() {
        let img = ImageArray::from(Array2::<u8>::zeros((4, 6)));
        assert_eq!(img.shape(), &[4, 6]);
        assert_eq!(img.ndim(), 2);
        assert_eq!(img.height(), 4);
        assert_eq!(img.width(), 6);
        assert_eq!(img.channels(), 1);
        assert!(img.as_gray().is_some());
        assert!(img.as_channels().is_none());
    }

    #[test]
    fn test_channels_shape() {
        let img = ImageArray::from(Array3::<u8>::zeros((5, 7, 3)));
        assert_eq!(img.shape(), &[5, 7, 3]);
        assert_eq!(img.ndim(), 3);
        assert_eq!(img.channels(), 3);
        assert!(img.as_channels().is_some());
    }

    #[test]
    fn test_into_dyn_keeps_shape() {
        let img = ImageArray::from(Array3::<u8>::ones((2, 3, 4)));
        let dyn_array = img.into_dyn();
        assert_eq!(dyn_array.shape(), &[2, 3, 4]);
        assert!(dyn_array.iter().all(|&v| v == 1));
    }
}
