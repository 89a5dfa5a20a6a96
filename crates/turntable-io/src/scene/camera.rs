//! Camera parameters attached to camera nodes.

use serde::Serialize;

/// Default vertical field of view for perspective cameras, in degrees.
pub const DEFAULT_FOV_DEGREES: f32 = 50.0;
/// Default near clipping plane.
pub const DEFAULT_NEAR: f32 = 0.1;
/// Default far clipping plane for cameras decoded without one.
pub const DEFAULT_FAR: f32 = 2000.0;

/// Projection and clipping parameters of a camera node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CameraParams {
    pub projection: Projection,
    pub near: f32,
    pub far: f32,
    /// Zoom factor applied on top of the projection.
    pub zoom: f32,
}

/// Camera projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Projection {
    Perspective {
        /// Vertical field of view in degrees.
        fov_degrees: f32,
        /// Fixed aspect ratio; `None` follows the viewport.
        aspect: Option<f32>,
    },
    Orthographic {
        left: f32,
        right: f32,
        top: f32,
        bottom: f32,
    },
}

impl Default for CameraParams {
    fn default() -> Self {
        Self::perspective(DEFAULT_FOV_DEGREES, None, DEFAULT_NEAR, DEFAULT_FAR)
    }
}

impl CameraParams {
    /// A perspective camera.
    pub fn perspective(fov_degrees: f32, aspect: Option<f32>, near: f32, far: f32) -> Self {
        Self {
            projection: Projection::Perspective {
                fov_degrees,
                aspect,
            },
            near,
            far,
            zoom: 1.0,
        }
    }

    /// An orthographic camera with the given frustum extents.
    pub fn orthographic(left: f32, right: f32, top: f32, bottom: f32, near: f32, far: f32) -> Self {
        Self {
            projection: Projection::Orthographic {
                left,
                right,
                top,
                bottom,
            },
            near,
            far,
            zoom: 1.0,
        }
    }

    /// Vertical field of view in degrees, for perspective cameras only.
    pub fn fov_degrees(&self) -> Option<f32> {
        match self.projection {
            Projection::Perspective { fov_degrees, .. } => Some(fov_degrees),
            Projection::Orthographic { .. } => None,
        }
    }

    /// Fixed aspect ratio, if the camera declares one.
    pub fn aspect(&self) -> Option<f32> {
        match self.projection {
            Projection::Perspective { aspect, .. } => aspect,
            Projection::Orthographic { .. } => None,
        }
    }
}
