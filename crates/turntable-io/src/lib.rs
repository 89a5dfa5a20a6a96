//! turntable-io: scene ingestion for the Turntable viewer.
//!
//! Decodes scene files into a normalized [`SceneGraph`] and discovers the
//! cameras a viewer can switch between.
//!
//! # Supported Formats
//!
//! | Format | Extensions | Notes |
//! |--------|------------|-------|
//! | glTF 2.0 | .gltf, .glb | hierarchy and cameras; geometry is not decoded |
//! | Object JSON | .json | wrapped (`object`/`scene` key) or bare root object |
//!
//! # Quick Start
//!
//! ```ignore
//! use turntable_io::{read_file, ReadOptions, SceneData};
//!
//! let graph = read_file("robot.glb", &bytes, &ReadOptions::default())?;
//! let scene = SceneData::new(graph, 16.0 / 9.0);
//! println!("{} cameras", scene.cameras().len());
//! ```
//!
//! # Architecture
//!
//! ```text
//! .gltf/.glb ─┐                             ┌─> cameras
//!             ├─> SceneGraph ─> discover() ─┤
//! .json ──────┘                             └─> SceneData
//! ```

pub mod discovery;
pub mod formats;
pub mod registry;
pub mod scene;

pub use discovery::{discover, SceneCamera, SceneData, SceneSource};
pub use registry::{FormatReader, FormatRegistry, ReadOptions};
pub use scene::{CameraParams, NodeKind, Projection, SceneGraph, SceneNode, Transform};
pub use turntable_core::{LoadError, ParseError, UnsupportedFileError};

/// Result type for scene decoding.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Read data with auto-detection of format.
pub fn read(data: &[u8], options: &ReadOptions) -> Result<SceneGraph> {
    FormatRegistry::with_defaults().read(data, options)
}

/// Read a file's contents, choosing the format from its extension.
///
/// # Example
///
/// ```ignore
/// use turntable_io::{read_file, ReadOptions};
///
/// let graph = read_file("scene.json", &bytes, &ReadOptions::default())?;
/// ```
pub fn read_file(
    file_name: &str,
    data: &[u8],
    options: &ReadOptions,
) -> std::result::Result<SceneGraph, LoadError> {
    FormatRegistry::with_defaults().read_file(file_name, data, options)
}
