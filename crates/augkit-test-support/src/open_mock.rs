//! Mock of the file-open primitive.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use augkit_core::{FileOpener, OpenMode};
use tracing::debug;

use crate::config::TestSupportConfig;
use crate::memfile::InMemoryFile;

/// Mock implementation of `FileOpener` for testing.
///
/// Every call returns an [`InMemoryFile`] seeded with whatever was last saved
/// under the same key. Closing that file saves its contents back here, so a
/// write followed by a re-open observes the write. Clones share the same
/// storage.
#[derive(Debug, Clone, Default)]
pub struct OpenMock {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl OpenMock {
    /// Creates a mock with no stored files.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mock pre-seeded with the `[open.files]` table of `config`.
    #[must_use]
    pub fn from_config(config: &TestSupportConfig) -> Self {
        let mock = Self::new();
        for (file, value) in &config.open.files {
            mock.save_value(value.clone(), file.clone());
        }
        mock
    }

    /// Opens `file`, seeding the buffer with its last saved content.
    ///
    /// Unknown keys start empty.
    #[must_use]
    pub fn call(&self, file: &str) -> InMemoryFile {
        let value = self.value(file);
        debug!(
            "Opening mock file {file} ({})",
            if value.is_some() { "existing" } else { "new" }
        );

        let mock = self.clone();
        InMemoryFile::new(
            value,
            Box::new(move |value, file| mock.save_value(value, file)),
            file,
        )
    }

    /// Stores `value` under `file`, replacing any earlier value.
    pub fn save_value(&self, value: impl Into<String>, file: impl Into<String>) {
        let file = file.into();
        debug!("Saving mock file {file}");
        self.lock().insert(file, value.into());
    }

    /// Returns the last saved content of `file`.
    #[must_use]
    pub fn value(&self, file: &str) -> Option<String> {
        self.lock().get(file).cloned()
    }

    /// Returns a snapshot of every stored file.
    #[must_use]
    pub fn values(&self) -> HashMap<String, String> {
        self.lock().clone()
    }

    /// Returns whether anything was saved under `file`.
    #[must_use]
    pub fn contains(&self, file: &str) -> bool {
        self.lock().contains_key(file)
    }

    /// Number of stored files.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns true when nothing has been saved yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.values.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl FileOpener for OpenMock {
    type File = InMemoryFile;

    /// The mode is accepted for signature compatibility and ignored.
    fn open(&self, path: &str, _mode: OpenMode) -> anyhow::Result<InMemoryFile> {
        Ok(self.call(path))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::{Read, Seek, SeekFrom, Write};

    fn read_all(mock: &OpenMock, file: &str) -> String {
        let mut content = String::new();
        mock.call(file).read_to_string(&mut content).unwrap();
        content
    }

    #[test]
    fn test_new_key_opens_empty() {
        let mock = OpenMock::new();
        assert!(mock.is_empty());
        assert_eq!(read_all(&mock, "never.txt"), "");
        // Closing saves even an untouched buffer
        assert_eq!(mock.value("never.txt").as_deref(), Some(""));
    }

    #[test]
    fn test_write_close_reopen() {
        let mock = OpenMock::new();

        let mut file = mock.call("a.txt");
        file.write_all(b"hello").unwrap();
        file.close();

        assert_eq!(read_all(&mock, "a.txt"), "hello");
        assert_eq!(mock.value("a.txt").as_deref(), Some("hello"));
    }

    #[test]
    fn test_unknown_key_write_then_reopen() {
        let mock = OpenMock::new();

        let mut file = mock.call("b.txt");
        assert_eq!(file.contents(), "");
        file.write_text("x").unwrap();
        drop(file);

        assert_eq!(mock.call("b.txt").contents(), "x");
    }

    #[test]
    fn test_non_ascii_round_trip() {
        let mock = OpenMock::new();

        let mut file = mock.call("unicode.txt");
        file.write_text("héllo wörld ✓\n").unwrap();
        file.write_all("日本語".as_bytes()).unwrap();
        file.close();

        assert_eq!(read_all(&mock, "unicode.txt"), "héllo wörld ✓\n日本語");

        let mut file = mock.call("unicode.txt");
        file.seek(SeekFrom::End(0)).unwrap();
        file.write_text("é").unwrap();
        drop(file);

        assert_eq!(
            mock.value("unicode.txt").as_deref(),
            Some("héllo wörld ✓\n日本語é")
        );
    }

    #[test]
    fn test_last_close_wins() {
        let mock = OpenMock::new();
        let mut first = mock.call("c.txt");
        let mut second = mock.call("c.txt");

        second.write_text("second").unwrap();
        first.write_text("first").unwrap();
        second.close();
        first.close();

        assert_eq!(mock.value("c.txt").as_deref(), Some("first"));
    }

    #[test]
    fn test_save_value_overwrites() {
        let mock = OpenMock::new();
        mock.save_value("one", "d.txt");
        mock.save_value("two", "d.txt");

        assert_eq!(mock.len(), 1);
        assert!(mock.contains("d.txt"));
        assert_eq!(mock.values().get("d.txt").map(String::as_str), Some("two"));
    }

    #[test]
    fn test_clones_share_storage() {
        let mock = OpenMock::new();
        let clone = mock.clone();
        clone.save_value("shared", "e.txt");
        assert_eq!(mock.value("e.txt").as_deref(), Some("shared"));
    }

    #[test]
    fn test_open_ignores_mode() {
        let mock = OpenMock::new();
        mock.save_value("kept", "f.txt");

        let file = mock.open("f.txt", OpenMode::Write).unwrap();
        assert_eq!(file.contents(), "kept");
    }

    #[test]
    fn test_from_config_seeds_files() {
        let config = TestSupportConfig::from_toml_str(
            r#"
[open.files]
"fixture.txt" = "seeded"
"#,
        )
        .unwrap();
        let mock = OpenMock::from_config(&config);
        assert_eq!(read_all(&mock, "fixture.txt"), "seeded");
    }
}
