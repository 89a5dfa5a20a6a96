//! Format handlers for the supported scene files.

#[cfg(feature = "gltf")]
pub mod gltf;

#[cfg(feature = "object-json")]
pub mod object_json;
