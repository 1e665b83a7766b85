//! Arguments accepted by the file-open and image-decode primitives.

/// How a file is opened, mirroring the usual `r`/`w`/`a` modes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OpenMode {
    /// `r`: read an existing file.
    #[default]
    Read,
    /// `w`: create or truncate, then write.
    Write,
    /// `a`: create if needed, write at the end.
    Append,
    /// `r+`: read and write an existing file.
    ReadUpdate,
    /// `w+`: create or truncate, then read and write.
    WriteUpdate,
    /// `a+`: create if needed, read anywhere, write at the end.
    AppendUpdate,
}

/// Decode flags forwarded to an image reader.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ReadFlags {
    /// Keep the stored layout: single-channel images stay 2-D.
    Unchanged,
    /// Force a single-channel 2-D result.
    Grayscale,
    /// Force a three-channel result.
    #[default]
    Color,
}
