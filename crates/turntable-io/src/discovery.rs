//! Camera discovery and the loaded-scene aggregate.

use glam::{Mat4, Quat, Vec3};
use log::{debug, warn};
use serde::Serialize;
use turntable_core::SelectionError;

use crate::scene::{CameraParams, SceneGraph, Transform, DEFAULT_FOV_DEGREES, DEFAULT_NEAR};

/// Position of the camera synthesized for scenes without one.
pub const FALLBACK_CAMERA_POSITION: Vec3 = Vec3::splat(5.0);
/// Far plane of the synthesized camera.
pub const FALLBACK_CAMERA_FAR: f32 = 1000.0;

/// A camera available for selection, posed in world space.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneCamera {
    /// Name of the camera node, if it had a non-empty one.
    pub name: Option<String>,
    pub params: CameraParams,
    pub position: Vec3,
    pub rotation: Quat,
    /// Arena index of the camera node; `None` when synthesized.
    pub node: Option<usize>,
}

impl SceneCamera {
    /// The default camera: at (5, 5, 5) looking at the origin.
    pub fn fallback(aspect: f32) -> Self {
        let view = Mat4::look_at_rh(FALLBACK_CAMERA_POSITION, Vec3::ZERO, Vec3::Y);
        Self {
            name: None,
            params: CameraParams::perspective(
                DEFAULT_FOV_DEGREES,
                Some(aspect),
                DEFAULT_NEAR,
                FALLBACK_CAMERA_FAR,
            ),
            position: FALLBACK_CAMERA_POSITION,
            rotation: Quat::from_mat4(&view.inverse()),
            node: None,
        }
    }

    /// Whether this camera was synthesized rather than found in the scene.
    pub fn is_synthesized(&self) -> bool {
        self.node.is_none()
    }

    /// Display label for the camera at 1-based position `number`.
    pub fn label(&self, number: usize) -> String {
        match &self.name {
            Some(name) => format!("Camera {number} ({name})"),
            None => format!("Camera {number}"),
        }
    }
}

/// Collect every camera of `graph` in pre-order.
///
/// Returns the cameras and the index to select by default. The list is never
/// empty: a scene without cameras gets [`SceneCamera::fallback`].
pub fn discover(graph: &SceneGraph, aspect: f32) -> (Vec<SceneCamera>, usize) {
    let mut cameras: Vec<SceneCamera> = graph
        .traverse()
        .filter_map(|(index, node, world)| {
            let params = *node.camera()?;
            let (position, rotation) = world_pose(world);
            debug!("found camera node {index} '{}' at {position}", node.name);
            Some(SceneCamera {
                name: (!node.name.is_empty()).then(|| node.name.clone()),
                params,
                position,
                rotation,
                node: Some(index),
            })
        })
        .collect();

    if cameras.is_empty() {
        warn!("scene has no cameras; using the default view");
        cameras.push(SceneCamera::fallback(aspect));
    }

    (cameras, 0)
}

fn world_pose(world: Mat4) -> (Vec3, Quat) {
    let transform = Transform::from_matrix(world);
    (transform.translation, transform.rotation)
}

/// Where a scene came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SceneSource {
    pub file_name: String,
    /// Name of the reader that decoded the file.
    pub format: String,
}

/// A decoded scene with its cameras and the current selection.
///
/// The camera list is never empty and the active index always points into
/// it.
#[derive(Debug, Clone, Serialize)]
pub struct SceneData {
    graph: SceneGraph,
    cameras: Vec<SceneCamera>,
    active: usize,
    source: Option<SceneSource>,
}

impl SceneData {
    /// Discover the cameras of `graph` and select the default one.
    pub fn new(graph: SceneGraph, aspect: f32) -> Self {
        let (cameras, active) = discover(&graph, aspect);
        Self {
            graph,
            cameras,
            active,
            source: None,
        }
    }

    /// Record where the scene was loaded from.
    pub fn with_source(mut self, file_name: impl Into<String>, format: impl Into<String>) -> Self {
        self.source = Some(SceneSource {
            file_name: file_name.into(),
            format: format.into(),
        });
        self
    }

    pub fn graph(&self) -> &SceneGraph {
        &self.graph
    }

    pub fn cameras(&self) -> &[SceneCamera] {
        &self.cameras
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_camera(&self) -> &SceneCamera {
        &self.cameras[self.active]
    }

    pub fn source(&self) -> Option<&SceneSource> {
        self.source.as_ref()
    }

    /// Select the camera at `index`.
    ///
    /// An out-of-range index is rejected and the selection is kept.
    pub fn set_active_camera(&mut self, index: usize) -> Result<(), SelectionError> {
        if index >= self.cameras.len() {
            return Err(SelectionError::CameraOutOfRange {
                index,
                count: self.cameras.len(),
            });
        }
        self.active = index;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{NodeKind, SceneNode};

    fn camera(name: &str) -> SceneNode {
        SceneNode::new(NodeKind::Camera(CameraParams::default()), "PerspectiveCamera").named(name)
    }

    fn group() -> SceneNode {
        SceneNode::new(NodeKind::Group, "Group")
    }

    #[test]
    fn test_no_cameras_synthesizes_fallback() {
        let mut graph = SceneGraph::new(SceneNode::new(NodeKind::Scene, "Scene"));
        graph.add_child(0, SceneNode::new(NodeKind::Mesh, "Mesh"));

        let (cameras, default) = discover(&graph, 1.6);
        assert_eq!(cameras.len(), 1);
        assert_eq!(default, 0);

        let fallback = &cameras[0];
        assert!(fallback.is_synthesized());
        assert_eq!(fallback.position, Vec3::splat(5.0));
        assert_eq!(fallback.params.fov_degrees(), Some(50.0));
        assert_eq!(fallback.params.aspect(), Some(1.6));
        assert_eq!(fallback.params.near, 0.1);
        assert_eq!(fallback.params.far, 1000.0);
    }

    #[test]
    fn test_fallback_looks_at_origin() {
        let fallback = SceneCamera::fallback(1.0);
        let forward = fallback.rotation * Vec3::NEG_Z;
        let expected = (Vec3::ZERO - fallback.position).normalize();
        assert!(forward.abs_diff_eq(expected, 1e-5));
    }

    #[test]
    fn test_cameras_in_pre_order() {
        let mut graph = SceneGraph::new(SceneNode::new(NodeKind::Scene, "Scene"));
        let rig = graph.add_child(0, group());
        graph.add_child(rig, camera("inner"));
        graph.add_child(0, camera("outer"));

        let (cameras, default) = discover(&graph, 1.0);
        let names: Vec<_> = cameras.iter().map(|c| c.name.as_deref()).collect();
        assert_eq!(names, vec![Some("inner"), Some("outer")]);
        assert_eq!(default, 0);
    }

    #[test]
    fn test_root_camera_is_found() {
        let graph = SceneGraph::new(camera(""));
        let (cameras, _) = discover(&graph, 1.0);
        assert_eq!(cameras.len(), 1);
        assert_eq!(cameras[0].node, Some(0));
        assert_eq!(cameras[0].name, None);
    }

    #[test]
    fn test_world_pose_accumulates_parents() {
        let mut graph = SceneGraph::new(
            group().transformed(Transform::from_translation(Vec3::new(0.0, 2.0, 0.0))),
        );
        let spun = Transform {
            rotation: Quat::from_rotation_y(std::f32::consts::FRAC_PI_2),
            ..Transform::IDENTITY
        };
        let pivot = graph.add_child(0, group().transformed(spun));
        graph.add_child(
            pivot,
            camera("cam").transformed(Transform::from_translation(Vec3::new(0.0, 0.0, 3.0))),
        );

        let (cameras, _) = discover(&graph, 1.0);
        assert!(cameras[0].position.abs_diff_eq(Vec3::new(3.0, 2.0, 0.0), 1e-5));
        assert!(cameras[0].rotation.abs_diff_eq(spun.rotation, 1e-5));
    }

    #[test]
    fn test_labels() {
        let mut graph = SceneGraph::new(camera("Front"));
        graph.add_child(0, camera(""));
        let (cameras, _) = discover(&graph, 1.0);
        assert_eq!(cameras[0].label(1), "Camera 1 (Front)");
        assert_eq!(cameras[1].label(2), "Camera 2");
    }

    #[test]
    fn test_set_active_camera() {
        let mut graph = SceneGraph::new(camera("a"));
        graph.add_child(0, camera("b"));
        let mut data = SceneData::new(graph, 1.0);

        assert_eq!(data.active_index(), 0);
        data.set_active_camera(1).unwrap();
        assert_eq!(data.active_camera().name.as_deref(), Some("b"));

        let err = data.set_active_camera(2).unwrap_err();
        assert!(matches!(err, SelectionError::CameraOutOfRange { index: 2, count: 2 }));
        assert_eq!(data.active_index(), 1);
    }

    #[test]
    fn test_source_info() {
        let data = SceneData::new(SceneGraph::new(group()), 1.0).with_source("robot.glb", "gltf");
        let source = data.source().unwrap();
        assert_eq!(source.file_name, "robot.glb");
        assert_eq!(source.format, "gltf");
    }
}
