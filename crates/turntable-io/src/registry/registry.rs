//! Format registry for managing readers.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use indexmap::IndexMap;
use turntable_core::{LoadError, ParseError, UnsupportedFileError};

use super::traits::{FormatReader, ReadOptions};
use crate::scene::SceneGraph;
use crate::Result;

/// Registry of format readers.
///
/// The registry maps file extensions to readers and provides content-based
/// auto-detection. Cloning is cheap: readers are shared.
#[derive(Clone, Default)]
pub struct FormatRegistry {
    readers: IndexMap<String, Arc<dyn FormatReader>>,
    extension_to_reader: IndexMap<String, String>,
}

impl fmt::Debug for FormatRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormatRegistry")
            .field("readers", &self.readers.keys().collect::<Vec<_>>())
            .field("extensions", &self.extension_to_reader)
            .finish()
    }
}

impl FormatRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the built-in readers.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        #[cfg(feature = "gltf")]
        registry.register_reader(crate::formats::gltf::GltfReader::new());

        #[cfg(feature = "object-json")]
        registry.register_reader(crate::formats::object_json::ObjectJsonReader::new());

        registry
    }

    /// Register a format reader.
    pub fn register_reader<R: FormatReader + 'static>(&mut self, reader: R) {
        let name = reader.name().to_lowercase();

        // Map extensions to this reader
        for ext in reader.extensions() {
            self.extension_to_reader
                .insert(ext.to_lowercase(), name.clone());
        }

        self.readers.insert(name, Arc::new(reader));
    }

    /// Get a reader by format name.
    pub fn get_reader(&self, format: &str) -> Option<&dyn FormatReader> {
        self.readers.get(&format.to_lowercase()).map(|r| r.as_ref())
    }

    /// Get a reader by file extension.
    pub fn reader_for_extension(&self, ext: &str) -> Option<&dyn FormatReader> {
        let ext_lower = ext.trim_start_matches('.').to_lowercase();
        let format = self.extension_to_reader.get(&ext_lower)?;
        self.get_reader(format)
    }

    /// Get the reader responsible for a file name, judged by its extension.
    pub fn reader_for_file(
        &self,
        file_name: &str,
    ) -> std::result::Result<&dyn FormatReader, UnsupportedFileError> {
        Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| self.reader_for_extension(ext))
            .ok_or_else(|| UnsupportedFileError::new(file_name, self.extensions()))
    }

    /// List every accepted file extension, in registration order.
    pub fn extensions(&self) -> impl Iterator<Item = &str> {
        self.extension_to_reader.keys().map(String::as_str)
    }

    /// Read data with auto-detection.
    ///
    /// Tries each registered reader's `can_read` method to find a compatible format.
    pub fn read(&self, data: &[u8], options: &ReadOptions) -> Result<SceneGraph> {
        for reader in self.readers.values() {
            if reader.can_read(data) {
                return reader.read(data, options);
            }
        }

        Err(ParseError::Unsupported {
            what: "format".into(),
            detail: "no reader recognized this data".into(),
        })
    }

    /// Read a file's contents, choosing the reader from the file name.
    ///
    /// Unknown extensions are rejected before any decoding is attempted.
    pub fn read_file(
        &self,
        file_name: &str,
        data: &[u8],
        options: &ReadOptions,
    ) -> std::result::Result<SceneGraph, LoadError> {
        let reader = self.reader_for_file(file_name)?;
        Ok(reader.read(data, options)?)
    }
}
