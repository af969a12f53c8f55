//! Transient storage handing Markdown to the preview surface.

use indexmap::IndexMap;

use super::HostError;

/// Storage key the preview surface reads
pub const PREVIEW_STORAGE_KEY: &str = "tempMarkdown";

/// Key-value storage whose entries are read once.
pub trait TransientStore {
    /// Store a value, replacing any previous one
    fn put(&mut self, key: &str, value: &str) -> Result<(), HostError>;

    /// Read a value and delete it
    fn take(&mut self, key: &str) -> Result<Option<String>, HostError>;
}

/// In-memory [`TransientStore`]
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: IndexMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Peek at a value without consuming it
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TransientStore for MemoryStore {
    fn put(&mut self, key: &str, value: &str) -> Result<(), HostError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn take(&mut self, key: &str) -> Result<Option<String>, HostError> {
        Ok(self.entries.shift_remove(key))
    }
}
