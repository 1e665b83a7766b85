//! File-open port.

use std::io::{Read, Seek, Write};

use crate::domain::OpenMode;

/// Port for opening a file by name.
pub trait FileOpener: Send + Sync {
    /// Stream handed back by [`FileOpener::open`].
    type File: Read + Write + Seek;

    /// Opens `path` with the given mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    fn open(&self, path: &str, mode: OpenMode) -> anyhow::Result<Self::File>;
}
