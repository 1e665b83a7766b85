//! Test support utilities for image-augmentation code.
//!
//! Provides shape conversion helpers for building expected values, and mocks
//! standing in for the file-open and image-decode primitives so tests run
//! without a real filesystem or image codec.
//!
//! # Example
//!
//! ```
//! use std::io::{Read, Write};
//!
//! use augkit_test_support::{convert_2d_to_3d, OpenMock};
//! use ndarray::array;
//!
//! let mask = array![[0u8, 1], [2, 3]];
//! let image = convert_2d_to_3d(&[mask], 3).unwrap().into_one().unwrap();
//! assert_eq!(image.dim(), (2, 2, 3));
//!
//! let open = OpenMock::new();
//! let mut file = open.call("a.txt");
//! file.write_all(b"hello").unwrap();
//! file.close();
//!
//! let mut content = String::new();
//! open.call("a.txt").read_to_string(&mut content).unwrap();
//! assert_eq!(content, "hello");
//! ```

mod config;
mod convert;
mod imread_mock;
mod memfile;
mod open_mock;

pub use config::{
    find_config_in_parents, ImreadConfig, OpenConfig, TestSupportConfig, CONFIG_FILE_NAME,
};
pub use convert::{
    convert_2d_to_3d, convert_2d_to_rgb, convert_2d_to_target_format,
    convert_2d_to_target_format_str, Converted, DEFAULT_NUM_CHANNELS,
};
pub use imread_mock::ImreadMock;
pub use memfile::{InMemoryFile, SaveFn};
pub use open_mock::OpenMock;

pub use augkit_core::{Batch, Error, ImageArray, OpenMode, ReadFlags, TargetFormat};
