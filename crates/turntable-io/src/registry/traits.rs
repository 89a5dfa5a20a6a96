//! Format reader trait and read options.

use serde::{Deserialize, Serialize};

use crate::scene::{SceneGraph, DEFAULT_FAR, DEFAULT_FOV_DEGREES, DEFAULT_NEAR};
use crate::Result;

/// Trait for format readers.
///
/// Implement this trait to add support for reading a new scene format.
pub trait FormatReader: Send + Sync {
    /// Get the format name (e.g., "gltf", "object-json").
    fn name(&self) -> &'static str;

    /// Get supported file extensions (e.g., ["gltf", "glb"]).
    fn extensions(&self) -> &[&'static str];

    /// Check if this reader can handle the given data.
    ///
    /// This should be a fast check (e.g., magic bytes) without parsing the whole file.
    fn can_read(&self, data: &[u8]) -> bool;

    /// Decode the data into a scene graph.
    fn read(&self, data: &[u8], options: &ReadOptions) -> Result<SceneGraph>;
}

/// Options for reading scene files.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadOptions {
    /// Field of view given to perspective cameras that omit one, in degrees.
    pub default_fov_degrees: f32,
    /// Near plane given to cameras that omit one.
    pub default_near: f32,
    /// Far plane given to cameras that omit one.
    pub default_far: f32,
    /// Deepest node nesting accepted before the document is rejected.
    pub max_depth: usize,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            default_fov_degrees: DEFAULT_FOV_DEGREES,
            default_near: DEFAULT_NEAR,
            default_far: DEFAULT_FAR,
            max_depth: 256,
        }
    }
}

impl ReadOptions {
    /// Create default read options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the camera defaults used when a camera omits its projection.
    pub fn with_camera_defaults(mut self, fov_degrees: f32, near: f32, far: f32) -> Self {
        self.default_fov_degrees = fov_degrees;
        self.default_near = near;
        self.default_far = far;
        self
    }

    /// Set the maximum nesting depth.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
