//! Port definitions for the primitives tests replace.
//!
//! Code under test takes these traits instead of calling the filesystem or an
//! image codec directly, so a test can inject a mock.

mod file_opener;
mod image_reader;

pub use file_opener::FileOpener;
pub use image_reader::ImageReader;
