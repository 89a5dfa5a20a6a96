//! glTF 2.0 format reader.
//!
//! Supports both JSON (.gltf) and binary (.glb) variants. Only the node
//! hierarchy and cameras are decoded; geometry buffers are left untouched.

mod reader;
mod schema;

pub use reader::GltfReader;
