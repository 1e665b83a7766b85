//! In-memory text file that writes back on close.

use std::fmt;
use std::io::{self, BufRead, Read, Seek, SeekFrom, Write};

use tracing::trace;

/// Callback receiving `(contents, key)` when an [`InMemoryFile`] closes.
pub type SaveFn = Box<dyn FnOnce(String, String) + Send>;

/// A readable, writable, seekable text buffer.
///
/// Closing the file, either through [`InMemoryFile::close`] or by dropping
/// it, hands the full final contents to the save callback exactly once and
/// then releases the buffer. The cursor starts at the beginning, so writes
/// into a seeded buffer overwrite from the start.
///
/// Positions are byte offsets into UTF-8 text. Seeking inside a character,
/// writing there, or writing bytes that are not UTF-8 fails with
/// [`io::ErrorKind::InvalidInput`] and leaves the buffer untouched.
pub struct InMemoryFile {
    buffer: String,
    position: usize,
    key: String,
    save: Option<SaveFn>,
}

impl InMemoryFile {
    /// Creates a file seeded with `value`, or empty for `None`.
    #[must_use]
    pub fn new(value: Option<String>, save: SaveFn, key: impl Into<String>) -> Self {
        Self {
            buffer: value.unwrap_or_default(),
            position: 0,
            key: key.into(),
            save: Some(save),
        }
    }

    /// Key passed to the save callback.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the whole buffer regardless of the cursor position.
    #[must_use]
    pub fn contents(&self) -> &str {
        &self.buffer
    }

    /// Current cursor position in bytes.
    #[must_use]
    pub fn position(&self) -> u64 {
        self.position as u64
    }

    /// Writes `text` at the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`io::ErrorKind::InvalidInput`] if the cursor sits inside a
    /// character.
    pub fn write_text(&mut self, text: &str) -> io::Result<()> {
        self.check_boundary(self.position)?;

        if self.position > self.buffer.len() {
            let padding = self.position - self.buffer.len();
            self.buffer.extend(std::iter::repeat('\0').take(padding));
        }

        // A character partly covered by the write is replaced whole.
        let mut end = (self.position + text.len()).min(self.buffer.len());
        while !self.buffer.is_char_boundary(end) {
            end += 1;
        }
        self.buffer.replace_range(self.position..end, text);
        self.position += text.len();
        Ok(())
    }

    /// Saves the contents and releases the buffer.
    pub fn close(mut self) {
        self.seal();
    }

    fn check_boundary(&self, position: usize) -> io::Result<()> {
        if position <= self.buffer.len() && !self.buffer.is_char_boundary(position) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("position {position} is inside a character"),
            ));
        }
        Ok(())
    }

    fn remaining(&self) -> &[u8] {
        self.buffer
            .as_bytes()
            .get(self.position..)
            .unwrap_or_default()
    }

    fn seal(&mut self) {
        let Some(save) = self.save.take() else {
            return;
        };
        let contents = std::mem::take(&mut self.buffer);
        trace!("Closing in-memory file {} ({} bytes)", self.key, contents.len());
        save(contents, std::mem::take(&mut self.key));
    }
}

impl Drop for InMemoryFile {
    fn drop(&mut self) {
        self.seal();
    }
}

impl fmt::Debug for InMemoryFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryFile")
            .field("key", &self.key)
            .field("len", &self.buffer.len())
            .field("position", &self.position)
            .field("open", &self.save.is_some())
            .finish()
    }
}

impl Read for InMemoryFile {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.remaining().read(buf)?;
        self.position += n;
        Ok(n)
    }
}

impl BufRead for InMemoryFile {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        Ok(self.remaining())
    }

    fn consume(&mut self, amt: usize) {
        self.position += amt.min(self.remaining().len());
    }
}

impl Write for InMemoryFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let text = std::str::from_utf8(buf)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
        self.write_text(text)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Seek for InMemoryFile {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        let (base, offset) = match pos {
            SeekFrom::Start(n) => (0, i64::try_from(n).unwrap_or(i64::MAX)),
            SeekFrom::End(n) => (self.buffer.len(), n),
            SeekFrom::Current(n) => (self.position, n),
        };
        let target = i64::try_from(base)
            .ok()
            .and_then(|base| base.checked_add(offset))
            .and_then(|target| usize::try_from(target).ok())
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "invalid seek to a negative or overflowing position",
                )
            })?;

        self.check_boundary(target)?;
        self.position = target;
        Ok(target as u64)
    }
}
