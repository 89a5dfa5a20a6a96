//! Asynchronous scene loading.

use std::future::Future;
use std::io;

use log::{info, warn};
use turntable_core::LoadError;
use turntable_io::{FormatRegistry, ReadOptions, SceneData};

/// Decodes scene files for a [`ViewerSession`](crate::ViewerSession).
///
/// A loader is a snapshot of the session's registry and options, so several
/// loads can be in flight without borrowing the session. Commit each result
/// with [`ViewerSession::finish_load`](crate::ViewerSession::finish_load).
#[derive(Debug, Clone)]
pub struct SceneLoader {
    registry: FormatRegistry,
    read_options: ReadOptions,
    aspect: f32,
}

impl SceneLoader {
    pub fn new(registry: FormatRegistry, read_options: ReadOptions, aspect: f32) -> Self {
        Self {
            registry,
            read_options,
            aspect,
        }
    }

    /// Load `file_name` once `contents` yields its bytes.
    ///
    /// The extension is checked first; an unsupported file is rejected
    /// without polling `contents`.
    pub async fn load<F>(&self, file_name: &str, contents: F) -> Result<SceneData, LoadError>
    where
        F: Future<Output = io::Result<Vec<u8>>>,
    {
        if let Err(err) = self.registry.reader_for_file(file_name) {
            warn!("{err}");
            return Err(err.into());
        }
        let bytes = contents.await?;
        self.load_bytes(file_name, &bytes)
    }

    /// Load a file whose bytes are already in memory.
    pub fn load_bytes(&self, file_name: &str, bytes: &[u8]) -> Result<SceneData, LoadError> {
        let reader = self.registry.reader_for_file(file_name).map_err(|err| {
            warn!("{err}");
            err
        })?;
        let graph = reader.read(bytes, &self.read_options)?;
        let scene = SceneData::new(graph, self.aspect).with_source(file_name, reader.name());
        info!(
            "loaded {file_name} as {}: {} nodes, {} cameras",
            reader.name(),
            scene.graph().node_count(),
            scene.cameras().len()
        );
        Ok(scene)
    }
}
