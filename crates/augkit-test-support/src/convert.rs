//! Shape conversion helpers.
//!
//! Used by assertions to turn 2-D fixtures into the layout a transform is
//! expected to produce.

use augkit_core::{Batch, Error, Result, TargetFormat};
use ndarray::{Array2, Array3, ArrayBase, ArrayD, Data, Ix2};

/// Channel count used when none is given.
pub const DEFAULT_NUM_CHANNELS: usize = 3;

/// Output of [`convert_2d_to_target_format`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Converted<T> {
    /// The `mask` target: arrays stay 2-D.
    Mask(Batch<Array2<T>>),
    /// The `image` targets: arrays broadcast to 3-D.
    Image(Batch<Array3<T>>),
}

impl<T> Converted<T> {
    /// Borrows the 2-D arrays of a mask conversion.
    #[must_use]
    pub const fn as_mask(&self) -> Option<&Batch<Array2<T>>> {
        match self {
            Self::Mask(batch) => Some(batch),
            Self::Image(_) => None,
        }
    }

    /// Borrows the 3-D arrays of an image conversion.
    #[must_use]
    pub const fn as_image(&self) -> Option<&Batch<Array3<T>>> {
        match self {
            Self::Mask(_) => None,
            Self::Image(batch) => Some(batch),
        }
    }

    /// Takes the 2-D arrays of a mask conversion.
    #[must_use]
    pub fn into_mask(self) -> Option<Batch<Array2<T>>> {
        match self {
            Self::Mask(batch) => Some(batch),
            Self::Image(_) => None,
        }
    }

    /// Takes the 3-D arrays of an image conversion.
    #[must_use]
    pub fn into_image(self) -> Option<Batch<Array3<T>>> {
        match self {
            Self::Mask(_) => None,
            Self::Image(batch) => Some(batch),
        }
    }

    /// Number of converted arrays.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Mask(batch) => batch.len(),
            Self::Image(batch) => batch.len(),
        }
    }

    /// Always false for a successful conversion.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Erases the dimensionality so both variants compare alike.
    #[must_use]
    pub fn into_dyn(self) -> Batch<ArrayD<T>> {
        match self {
            Self::Mask(batch) => batch.map(Array2::into_dyn),
            Self::Image(batch) => batch.map(Array3::into_dyn),
        }
    }
}

/// Broadcasts each `(H, W)` array to `(H, W, num_channels)` by repeating its
/// values along a new trailing axis.
///
/// A single input comes back as [`Batch::One`], several as [`Batch::Many`] in
/// the same order.
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] for an empty slice and
/// [`Error::ZeroChannels`] when `num_channels` is zero.
pub fn convert_2d_to_3d<S, T>(
    arrays: &[ArrayBase<S, Ix2>],
    num_channels: usize,
) -> Result<Batch<Array3<T>>>
where
    S: Data<Elem = T>,
    T: Clone,
{
    if arrays.is_empty() {
        return Err(Error::EmptyInput);
    }
    if num_channels == 0 {
        return Err(Error::ZeroChannels);
    }

    let converted = arrays
        .iter()
        .map(|array| repeat_channels(array, num_channels))
        .collect();
    Ok(Batch::from_vec(converted))
}

/// [`convert_2d_to_3d`] with [`DEFAULT_NUM_CHANNELS`].
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] for an empty slice.
pub fn convert_2d_to_rgb<S, T>(arrays: &[ArrayBase<S, Ix2>]) -> Result<Batch<Array3<T>>>
where
    S: Data<Elem = T>,
    T: Clone,
{
    convert_2d_to_3d(arrays, DEFAULT_NUM_CHANNELS)
}

/// Converts 2-D arrays into the layout `target` describes.
///
/// `mask` returns copies of the inputs, `image` broadcasts to three channels
/// and `image_4_channels` to four.
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] for an empty slice.
pub fn convert_2d_to_target_format<S, T>(
    arrays: &[ArrayBase<S, Ix2>],
    target: TargetFormat,
) -> Result<Converted<T>>
where
    S: Data<Elem = T>,
    T: Clone,
{
    match target {
        TargetFormat::Mask => {
            if arrays.is_empty() {
                return Err(Error::EmptyInput);
            }
            let masks = arrays.iter().map(ArrayBase::to_owned).collect();
            Ok(Converted::Mask(Batch::from_vec(masks)))
        }
        TargetFormat::Image => convert_2d_to_3d(arrays, 3).map(Converted::Image),
        TargetFormat::Image4Channels => convert_2d_to_3d(arrays, 4).map(Converted::Image),
    }
}

/// [`convert_2d_to_target_format`] taking the target by name.
///
/// # Errors
///
/// Returns [`Error::UnknownTarget`] carrying `target` when it is not one of
/// `mask`, `image` or `image_4_channels`.
pub fn convert_2d_to_target_format_str<S, T>(
    arrays: &[ArrayBase<S, Ix2>],
    target: &str,
) -> Result<Converted<T>>
where
    S: Data<Elem = T>,
    T: Clone,
{
    convert_2d_to_target_format(arrays, target.parse()?)
}

fn repeat_channels<S, T>(array: &ArrayBase<S, Ix2>, num_channels: usize) -> Array3<T>
where
    S: Data<Elem = T>,
    T: Clone,
{
    let (height, width) = array.dim();
    Array3::from_shape_fn((height, width, num_channels), |(y, x, _)| {
        array[[y, x]].clone()
    })
}
