//! Read-only values handed to the UI.

use glam::{Quat, Vec3};
use serde::Serialize;
use turntable_core::{OrbitLimits, Settings};
use turntable_engine::TransformState;
use turntable_io::{CameraParams, SceneCamera};

/// Live transform values next to the raw orbit limits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplaySnapshot {
    pub rotation_x: f64,
    pub rotation_y: f64,
    pub scale: f64,
    #[serde(flatten)]
    pub limits: OrbitLimits,
}

impl DisplaySnapshot {
    pub fn new(state: TransformState, settings: &Settings) -> Self {
        Self {
            rotation_x: state.rotation_x,
            rotation_y: state.rotation_y,
            scale: state.scale,
            limits: settings.orbit_limits(),
        }
    }
}

/// One row of the camera list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraEntry {
    /// 1-based position in the list.
    pub number: usize,
    pub label: String,
    /// Vertical field of view; `None` for orthographic cameras.
    pub fov_degrees: Option<f32>,
    pub active: bool,
}

impl CameraEntry {
    pub(crate) fn new(index: usize, camera: &SceneCamera, active: bool) -> Self {
        Self {
            number: index + 1,
            label: camera.label(index + 1),
            fov_degrees: camera.params.fov_degrees(),
            active,
        }
    }
}

/// The pose and projection the render camera should adopt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CameraView {
    /// Index of the camera in the list.
    pub index: usize,
    pub position: Vec3,
    pub rotation: Quat,
    pub params: CameraParams,
}

impl CameraView {
    pub(crate) fn new(index: usize, camera: &SceneCamera) -> Self {
        Self {
            index,
            position: camera.position,
            rotation: camera.rotation,
            params: camera.params,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_json() {
        let state = TransformState {
            rotation_x: 0.25,
            rotation_y: -1.5,
            scale: 2.0,
        };
        let snapshot = DisplaySnapshot::new(state, &Settings::default());
        insta::assert_snapshot!(serde_json::to_string_pretty(&snapshot).unwrap(), @r###"
        {
          "rotationX": 0.25,
          "rotationY": -1.5,
          "scale": 2.0,
          "minDistance": 1.0,
          "maxDistance": 100.0,
          "minPolarAngle": 0.0,
          "maxPolarAngle": 3.141592653589793,
          "minAzimuthAngle": null,
          "maxAzimuthAngle": null
        }
        "###);
    }

    #[test]
    fn test_camera_entry_numbering() {
        let camera = SceneCamera::fallback(1.0);
        let entry = CameraEntry::new(0, &camera, true);
        assert_eq!(entry.number, 1);
        assert_eq!(entry.label, "Camera 1");
        assert_eq!(entry.fov_degrees, Some(50.0));
        assert!(entry.active);
    }
}
