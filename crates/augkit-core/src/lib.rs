//! Augkit Core - Domain types and ports
//!
//! This crate contains the array and batch types the test utilities pass around,
//! the target-format and open-mode enums, the shared error type, and the port
//! traits standing in for the file-open and image-decode primitives.

pub mod domain;
pub mod error;
pub mod ports;

pub use domain::{Batch, ImageArray, OpenMode, ReadFlags, TargetFormat};
pub use error::{Error, Result};
pub use ports::{FileOpener, ImageReader};
