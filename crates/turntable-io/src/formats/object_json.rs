//! Object-JSON scene reader.
//!
//! Reads the nested object format written by scene editors: each object has
//! a `type`, an optional `name`, a local transform and a `children` array.
//! Two layouts are accepted:
//!
//! - *wrapped*: top-level metadata with the root object under `object` (or
//!   `scene`), alongside sibling tables such as `geometries` that are ignored
//! - *bare*: the root object itself
//!
//! The wrapped layout is tried first.

use glam::{EulerRot, Mat4, Quat, Vec3};
use log::debug;
use serde_json::{Map, Value};
use turntable_core::settings::json_type_name;
use turntable_core::ParseError;

use crate::registry::{FormatReader, ReadOptions};
use crate::scene::{CameraParams, NodeKind, SceneGraph, SceneNode, Transform};
use crate::Result;

/// Keys under which the wrapped layout stores its root object.
const WRAPPER_KEYS: [&str; 2] = ["object", "scene"];

const MESH_TYPES: [&str; 9] = [
    "Mesh",
    "SkinnedMesh",
    "InstancedMesh",
    "BatchedMesh",
    "Points",
    "Line",
    "LineSegments",
    "LineLoop",
    "Sprite",
];

/// Reader for object-JSON scene documents.
pub struct ObjectJsonReader;

impl ObjectJsonReader {
    /// Create a new object-JSON reader.
    pub fn new() -> Self {
        Self
    }
}

impl Default for ObjectJsonReader {
    fn default() -> Self {
        Self::new()
    }
}

impl FormatReader for ObjectJsonReader {
    fn name(&self) -> &'static str {
        "object-json"
    }

    fn extensions(&self) -> &[&'static str] {
        &["json"]
    }

    fn can_read(&self, data: &[u8]) -> bool {
        match std::str::from_utf8(data) {
            Ok(text) => text.trim_start().starts_with('{'),
            Err(_) => false,
        }
    }

    fn read(&self, data: &[u8], options: &ReadOptions) -> Result<SceneGraph> {
        let document: Value = serde_json::from_slice(data)?;
        decode_document(&document, options)
    }
}

/// Decode an already-parsed object-JSON document.
pub fn decode_document(document: &Value, options: &ReadOptions) -> Result<SceneGraph> {
    let decoder = Decoder { options };

    let wrapped = document.as_object().and_then(|map| {
        WRAPPER_KEYS
            .iter()
            .find_map(|&key| map.get(key).map(|inner| (key, inner)))
    });

    match wrapped {
        Some((key, inner)) => match decoder.decode_root(inner, &format!("/{key}")) {
            Ok(graph) => Ok(graph),
            Err(wrapped_err) => {
                debug!("wrapped interpretation failed ({wrapped_err}); trying bare layout");
                decoder.decode_root(document, "").map_err(|_| wrapped_err)
            }
        },
        None => decoder.decode_root(document, ""),
    }
}

struct Decoder<'a> {
    options: &'a ReadOptions,
}

impl Decoder<'_> {
    fn decode_root(&self, value: &Value, path: &str) -> Result<SceneGraph> {
        let root = self.decode_node(value, path)?;
        let mut graph = SceneGraph::new(root);
        let root_index = graph.root();
        self.decode_children(&mut graph, root_index, value, path, 0)?;
        Ok(graph)
    }

    fn decode_children(
        &self,
        graph: &mut SceneGraph,
        parent: usize,
        value: &Value,
        path: &str,
        depth: usize,
    ) -> Result<()> {
        let Some(children) = value.get("children") else {
            return Ok(());
        };
        let children = children.as_array().ok_or_else(|| {
            ParseError::invalid("children", describe(path), "expected an array")
        })?;

        if !children.is_empty() && depth + 1 > self.options.max_depth {
            return Err(ParseError::TooDeep {
                max_depth: self.options.max_depth,
            });
        }

        for (i, child) in children.iter().enumerate() {
            let child_path = format!("{path}/children/{i}");
            let node = self.decode_node(child, &child_path)?;
            let index = graph.add_child(parent, node);
            self.decode_children(graph, index, child, &child_path, depth + 1)?;
        }
        Ok(())
    }

    fn decode_node(&self, value: &Value, path: &str) -> Result<SceneNode> {
        let context = describe(path);
        let map = value.as_object().ok_or_else(|| {
            ParseError::invalid(
                "object",
                &context,
                format!("expected an object, found {}", json_type_name(value)),
            )
        })?;

        let type_name = match map.get("type") {
            Some(Value::String(name)) => name.as_str(),
            Some(_) => return Err(ParseError::invalid("type", &context, "expected a string")),
            None => return Err(ParseError::missing("type", &context)),
        };

        let name = match map.get("name") {
            Some(Value::String(name)) => name.clone(),
            Some(Value::Null) | None => String::new(),
            Some(_) => return Err(ParseError::invalid("name", &context, "expected a string")),
        };

        let kind = self.classify(type_name, map, &context)?;
        let transform = decode_transform(map, &context)?;

        Ok(SceneNode::new(kind, type_name)
            .named(name)
            .transformed(transform))
    }

    fn classify(
        &self,
        type_name: &str,
        map: &Map<String, Value>,
        context: &str,
    ) -> Result<NodeKind> {
        let options = self.options;
        let kind = match type_name {
            "Scene" => NodeKind::Scene,
            "Group" | "Object3D" | "Bone" | "LOD" => NodeKind::Group,
            "PerspectiveCamera" | "ArrayCamera" | "Camera" => {
                let mut params = CameraParams::perspective(
                    number(map, "fov", context)?.unwrap_or(options.default_fov_degrees),
                    number(map, "aspect", context)?,
                    number(map, "near", context)?.unwrap_or(options.default_near),
                    number(map, "far", context)?.unwrap_or(options.default_far),
                );
                params.zoom = number(map, "zoom", context)?.unwrap_or(1.0);
                NodeKind::Camera(params)
            }
            "OrthographicCamera" => {
                let mut params = CameraParams::orthographic(
                    number(map, "left", context)?.unwrap_or(-1.0),
                    number(map, "right", context)?.unwrap_or(1.0),
                    number(map, "top", context)?.unwrap_or(1.0),
                    number(map, "bottom", context)?.unwrap_or(-1.0),
                    number(map, "near", context)?.unwrap_or(options.default_near),
                    number(map, "far", context)?.unwrap_or(options.default_far),
                );
                params.zoom = number(map, "zoom", context)?.unwrap_or(1.0);
                NodeKind::Camera(params)
            }
            t if MESH_TYPES.contains(&t) => NodeKind::Mesh,
            t if t.ends_with("Light") => NodeKind::Light,
            other => {
                debug!("keeping unknown node type '{other}' as a generic node");
                NodeKind::Generic
            }
        };
        Ok(kind)
    }
}

/// Read the local transform: a column-major `matrix` wins over the separate
/// `position`, `quaternion`/`rotation` and `scale` fields.
fn decode_transform(map: &Map<String, Value>, context: &str) -> Result<Transform> {
    if let Some(matrix) = numbers::<16>(map, "matrix", context)? {
        return Ok(Transform::from_matrix(Mat4::from_cols_array(&matrix)));
    }

    let translation = numbers::<3>(map, "position", context)?
        .map(Vec3::from_array)
        .unwrap_or(Vec3::ZERO);
    let scale = numbers::<3>(map, "scale", context)?
        .map(Vec3::from_array)
        .unwrap_or(Vec3::ONE);
    let rotation = match numbers::<4>(map, "quaternion", context)? {
        Some(q) => Quat::from_array(q).normalize(),
        None => euler(map, context)?.unwrap_or(Quat::IDENTITY),
    };

    Ok(Transform {
        translation,
        rotation,
        scale,
    })
}

/// `rotation` as `[x, y, z]` or `[x, y, z, order]`, in radians.
fn euler(map: &Map<String, Value>, context: &str) -> Result<Option<Quat>> {
    let Some(value) = map.get("rotation") else {
        return Ok(None);
    };
    let invalid =
        || ParseError::invalid("rotation", context, "expected [x, y, z] or [x, y, z, order]");
    let items = value.as_array().ok_or_else(invalid)?;
    if items.len() != 3 && items.len() != 4 {
        return Err(invalid());
    }

    let mut angles = [0.0f32; 3];
    for (slot, item) in angles.iter_mut().zip(items) {
        *slot = item.as_f64().ok_or_else(invalid)? as f32;
    }
    let order = match items.get(3) {
        Some(Value::String(order)) => order.as_str(),
        Some(_) => return Err(invalid()),
        None => "XYZ",
    };

    let [x, y, z] = angles;
    let (rot, a, b, c) = match order {
        "XYZ" => (EulerRot::XYZ, x, y, z),
        "XZY" => (EulerRot::XZY, x, z, y),
        "YXZ" => (EulerRot::YXZ, y, x, z),
        "YZX" => (EulerRot::YZX, y, z, x),
        "ZXY" => (EulerRot::ZXY, z, x, y),
        "ZYX" => (EulerRot::ZYX, z, y, x),
        other => {
            return Err(ParseError::invalid(
                "rotation",
                context,
                format!("unknown rotation order '{other}'"),
            ))
        }
    };
    Ok(Some(Quat::from_euler(rot, a, b, c)))
}

fn number(map: &Map<String, Value>, key: &str, context: &str) -> Result<Option<f32>> {
    match map.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value
            .as_f64()
            .map(|n| Some(n as f32))
            .ok_or_else(|| ParseError::invalid(key, context, "expected a number")),
    }
}

fn numbers<const N: usize>(
    map: &Map<String, Value>,
    key: &str,
    context: &str,
) -> Result<Option<[f32; N]>> {
    let Some(value) = map.get(key) else {
        return Ok(None);
    };
    let invalid = || ParseError::invalid(key, context, format!("expected an array of {N} numbers"));
    let items = value.as_array().ok_or_else(invalid)?;
    if items.len() != N {
        return Err(invalid());
    }

    let mut out = [0.0f32; N];
    for (slot, item) in out.iter_mut().zip(items) {
        *slot = item.as_f64().ok_or_else(invalid)? as f32;
    }
    Ok(Some(out))
}

fn describe(path: &str) -> String {
    if path.is_empty() {
        "root object".to_string()
    } else {
        format!("object at {path}")
    }
}
