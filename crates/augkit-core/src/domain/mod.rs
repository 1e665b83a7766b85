//! Core domain types for augkit.

mod array;
mod batch;
mod mode;
mod target;

pub use array::ImageArray;
pub use batch::Batch;
pub use mode::{OpenMode, ReadFlags};
pub use target::TargetFormat;
