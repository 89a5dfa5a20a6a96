//! glTF reader implementation.

use glam::{Mat4, Quat, Vec3};
use log::{debug, trace};
use turntable_core::ParseError;

use super::schema::{self, Gltf};
use crate::registry::{FormatReader, ReadOptions};
use crate::scene::{CameraParams, NodeKind, SceneGraph, SceneNode, Transform};
use crate::Result;

/// GLB magic number.
const GLB_MAGIC: u32 = 0x46546C67; // "glTF" in little-endian
/// GLB version 2.
const GLB_VERSION: u32 = 2;
/// JSON chunk type.
const GLB_CHUNK_JSON: u32 = 0x4E4F534A; // "JSON" in little-endian
/// Binary chunk type.
const GLB_CHUNK_BIN: u32 = 0x004E4942; // "BIN\0" in little-endian

/// Reader for glTF 2.0 files.
pub struct GltfReader;

impl GltfReader {
    /// Create a new glTF reader.
    pub fn new() -> Self {
        Self
    }
}

impl Default for GltfReader {
    fn default() -> Self {
        Self::new()
    }
}

impl FormatReader for GltfReader {
    fn name(&self) -> &'static str {
        "gltf"
    }

    fn extensions(&self) -> &[&'static str] {
        &["gltf", "glb"]
    }

    fn can_read(&self, data: &[u8]) -> bool {
        if read_u32(data, 0) == Some(GLB_MAGIC) {
            return true;
        }

        if let Ok(text) = std::str::from_utf8(data) {
            let trimmed = text.trim_start();
            if trimmed.starts_with('{') && trimmed.contains("\"asset\"") {
                return true;
            }
        }

        false
    }

    fn read(&self, data: &[u8], options: &ReadOptions) -> Result<SceneGraph> {
        let gltf: Gltf = if read_u32(data, 0) == Some(GLB_MAGIC) {
            serde_json::from_slice(glb_json_chunk(data)?)?
        } else {
            serde_json::from_slice(data)?
        };

        debug!(
            "glTF {} ({}): {} nodes, {} cameras",
            gltf.asset.version,
            gltf.asset.generator.as_deref().unwrap_or("unknown generator"),
            gltf.nodes.len(),
            gltf.cameras.len()
        );

        HierarchyBuilder::new(&gltf, options).build()
    }
}

fn read_u32(data: &[u8], offset: usize) -> Option<u32> {
    let bytes = data.get(offset..offset + 4)?;
    Some(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}

/// Locate the JSON chunk of a GLB container.
fn glb_json_chunk(data: &[u8]) -> Result<&[u8]> {
    if data.len() < 12 {
        return Err(ParseError::container("GLB file too short"));
    }

    let version = read_u32(data, 4).unwrap_or_default();
    let length = read_u32(data, 8).unwrap_or_default() as usize;

    if version != GLB_VERSION {
        return Err(ParseError::Unsupported {
            what: "GLB version".into(),
            detail: version.to_string(),
        });
    }
    if length > data.len() {
        return Err(ParseError::container(format!(
            "header declares {length} bytes but only {} are present",
            data.len()
        )));
    }

    // Parse chunks
    let mut offset = 12;
    let mut json_chunk = None;

    while offset + 8 <= length {
        let chunk_length = read_u32(data, offset).unwrap_or_default() as usize;
        let chunk_type = read_u32(data, offset + 4).unwrap_or_default();
        offset += 8;

        let end = offset
            .checked_add(chunk_length)
            .filter(|&end| end <= length)
            .ok_or_else(|| ParseError::container("GLB chunk extends past end of file"))?;

        match chunk_type {
            GLB_CHUNK_JSON if json_chunk.is_none() => json_chunk = Some(&data[offset..end]),
            GLB_CHUNK_BIN => trace!("skipping {chunk_length}-byte binary chunk"),
            other => trace!("skipping unknown chunk type {other:#010x}"),
        }

        // Chunks are 4-byte aligned
        offset = (end + 3) & !3;
    }

    json_chunk.ok_or_else(|| ParseError::container("GLB missing JSON chunk"))
}

/// Rebuilds the glTF node hierarchy under a single scene root.
struct HierarchyBuilder<'a> {
    gltf: &'a Gltf,
    options: &'a ReadOptions,
    claimed: Vec<bool>,
}

impl<'a> HierarchyBuilder<'a> {
    fn new(gltf: &'a Gltf, options: &'a ReadOptions) -> Self {
        Self {
            gltf,
            options,
            claimed: vec![false; gltf.nodes.len()],
        }
    }

    fn build(mut self) -> Result<SceneGraph> {
        let (name, roots) = self.root_nodes()?;
        let mut graph = SceneGraph::new(SceneNode::new(NodeKind::Scene, "Scene").named(name));
        let root = graph.root();

        for node_idx in roots {
            self.convert_node(&mut graph, root, node_idx, 1)?;
        }
        Ok(graph)
    }

    /// Name of the scene root and the top-level node indices.
    ///
    /// Uses the default scene (or the first one). Files without scenes
    /// expose every node that is not some other node's child.
    fn root_nodes(&self) -> Result<(String, Vec<usize>)> {
        let gltf = self.gltf;

        if gltf.scenes.is_empty() {
            if let Some(index) = gltf.scene {
                return Err(ParseError::dangling("scene", index, 0));
            }
            let mut has_parent = vec![false; gltf.nodes.len()];
            for node in &gltf.nodes {
                for &child in &node.children {
                    if let Some(flag) = has_parent.get_mut(child) {
                        *flag = true;
                    }
                }
            }
            let roots = (0..gltf.nodes.len()).filter(|&i| !has_parent[i]).collect();
            return Ok((String::new(), roots));
        }

        let index = gltf.scene.unwrap_or(0);
        let scene: &schema::Scene = gltf
            .scenes
            .get(index)
            .ok_or_else(|| ParseError::dangling("scene", index, gltf.scenes.len()))?;
        Ok((scene.name.clone().unwrap_or_default(), scene.nodes.clone()))
    }

    fn convert_node(
        &mut self,
        graph: &mut SceneGraph,
        parent: usize,
        node_idx: usize,
        depth: usize,
    ) -> Result<()> {
        let gltf = self.gltf;
        let gltf_node = gltf
            .nodes
            .get(node_idx)
            .ok_or_else(|| ParseError::dangling("node", node_idx, gltf.nodes.len()))?;

        if depth > self.options.max_depth {
            return Err(ParseError::TooDeep {
                max_depth: self.options.max_depth,
            });
        }
        if std::mem::replace(&mut self.claimed[node_idx], true) {
            return Err(ParseError::NodeCycle { index: node_idx });
        }

        let (kind, source_type) = self.node_kind(gltf_node)?;
        let name = gltf_node
            .name
            .clone()
            .or_else(|| self.mesh_name(gltf_node))
            .unwrap_or_default();

        let node = SceneNode::new(kind, source_type)
            .named(name)
            .transformed(node_transform(gltf_node));
        let index = graph.add_child(parent, node);

        for &child_idx in &gltf_node.children {
            self.convert_node(graph, index, child_idx, depth + 1)?;
        }
        Ok(())
    }

    fn node_kind(&self, node: &schema::Node) -> Result<(NodeKind, &'static str)> {
        let gltf = self.gltf;

        if let Some(camera_idx) = node.camera {
            let camera = gltf
                .cameras
                .get(camera_idx)
                .ok_or_else(|| ParseError::dangling("camera", camera_idx, gltf.cameras.len()))?;
            return self.convert_camera(camera_idx, camera);
        }

        if let Some(mesh_idx) = node.mesh {
            if mesh_idx >= gltf.meshes.len() {
                return Err(ParseError::dangling("mesh", mesh_idx, gltf.meshes.len()));
            }
            return Ok((NodeKind::Mesh, "Mesh"));
        }

        Ok((NodeKind::Group, "Object3D"))
    }

    fn convert_camera(
        &self,
        index: usize,
        camera: &schema::Camera,
    ) -> Result<(NodeKind, &'static str)> {
        let context = format!("camera {index}");

        match (camera.camera_type.as_str(), &camera.perspective, &camera.orthographic) {
            ("perspective", Some(p), _) => Ok((
                NodeKind::Camera(CameraParams::perspective(
                    p.yfov.to_degrees(),
                    p.aspect_ratio,
                    p.znear,
                    p.zfar.unwrap_or(self.options.default_far),
                )),
                "PerspectiveCamera",
            )),
            ("orthographic", _, Some(o)) => Ok((
                NodeKind::Camera(CameraParams::orthographic(
                    -o.xmag, o.xmag, o.ymag, -o.ymag, o.znear, o.zfar,
                )),
                "OrthographicCamera",
            )),
            ("perspective", None, _) => Err(ParseError::missing("perspective", context)),
            ("orthographic", _, None) => Err(ParseError::missing("orthographic", context)),
            (other, _, _) => Err(ParseError::invalid(
                "type",
                context,
                format!("unknown camera type '{other}'"),
            )),
        }
    }

    fn mesh_name(&self, node: &schema::Node) -> Option<String> {
        let mesh = self.gltf.meshes.get(node.mesh?)?;
        mesh.get("name")?.as_str().map(str::to_string)
    }
}

fn node_transform(node: &schema::Node) -> Transform {
    if let Some(matrix) = &node.matrix {
        return Transform::from_matrix(Mat4::from_cols_array(matrix));
    }

    Transform {
        translation: node.translation.map(Vec3::from).unwrap_or(Vec3::ZERO),
        rotation: node
            .rotation
            .map(|r| Quat::from_xyzw(r[0], r[1], r[2], r[3]))
            .unwrap_or(Quat::IDENTITY),
        scale: node.scale.map(Vec3::from).unwrap_or(Vec3::ONE),
    }
}
