//! The subset of the glTF 2.0 JSON schema needed to rebuild the hierarchy.

use serde::Deserialize;
use serde_json::Value;

/// Root glTF object.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gltf {
    /// Asset information; required by glTF.
    pub asset: Asset,
    /// Default scene index.
    pub scene: Option<usize>,
    #[serde(default)]
    pub scenes: Vec<Scene>,
    #[serde(default)]
    pub nodes: Vec<Node>,
    /// Meshes are only referenced, never decoded.
    #[serde(default)]
    pub meshes: Vec<Value>,
    #[serde(default)]
    pub cameras: Vec<Camera>,
}

/// Asset metadata.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub version: String,
    pub generator: Option<String>,
}

/// A scene listing its root nodes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Scene {
    pub name: Option<String>,
    #[serde(default)]
    pub nodes: Vec<usize>,
}

/// A node in the glTF hierarchy.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub name: Option<String>,
    #[serde(default)]
    pub children: Vec<usize>,
    pub mesh: Option<usize>,
    pub camera: Option<usize>,
    /// Local transformation matrix (column-major).
    pub matrix: Option<[f32; 16]>,
    pub translation: Option<[f32; 3]>,
    /// Rotation quaternion as `[x, y, z, w]`.
    pub rotation: Option<[f32; 4]>,
    pub scale: Option<[f32; 3]>,
}

/// A camera definition referenced by nodes.
#[derive(Debug, Clone, Deserialize)]
pub struct Camera {
    pub name: Option<String>,
    /// "perspective" or "orthographic".
    #[serde(rename = "type")]
    pub camera_type: String,
    pub perspective: Option<PerspectiveCamera>,
    pub orthographic: Option<OrthographicCamera>,
}

/// Perspective camera properties.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerspectiveCamera {
    pub aspect_ratio: Option<f32>,
    /// Vertical FOV in radians.
    pub yfov: f32,
    pub znear: f32,
    /// Absent for infinite projections.
    pub zfar: Option<f32>,
}

/// Orthographic camera properties.
#[derive(Debug, Clone, Deserialize)]
pub struct OrthographicCamera {
    /// Half the horizontal extent.
    pub xmag: f32,
    /// Half the vertical extent.
    pub ymag: f32,
    pub znear: f32,
    pub zfar: f32,
}
