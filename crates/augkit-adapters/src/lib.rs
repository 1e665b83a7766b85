//! Augkit Adapters - Real implementations of the augkit ports.
//!
//! This crate provides the image decoder that mocks fall back to, reading
//! files through the `image` crate into `ndarray` arrays.

pub mod codec;

pub use codec::{to_image_array, CodecImageReader};
