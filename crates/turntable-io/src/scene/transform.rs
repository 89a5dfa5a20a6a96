//! Local node transforms.

use glam::{Mat4, Quat, Vec3};
use serde::Serialize;

/// Translation, rotation and scale of a node relative to its parent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    /// A pure translation.
    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Self::IDENTITY
        }
    }

    /// Decompose an affine matrix.
    ///
    /// A singular matrix has no rotation to recover. It keeps its
    /// translation and axis lengths and gets an identity rotation.
    pub fn from_matrix(matrix: Mat4) -> Self {
        if matrix.determinant() != 0.0 {
            let (scale, rotation, translation) = matrix.to_scale_rotation_translation();
            if rotation.is_finite() {
                return Self {
                    translation,
                    rotation,
                    scale,
                };
            }
        }

        Self {
            translation: matrix.w_axis.truncate(),
            rotation: Quat::IDENTITY,
            scale: Vec3::new(
                matrix.x_axis.truncate().length(),
                matrix.y_axis.truncate().length(),
                matrix.z_axis.truncate().length(),
            ),
        }
    }

    /// The equivalent 4x4 matrix.
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_matrix() {
        assert_eq!(Transform::IDENTITY.matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn test_from_matrix_recovers_components() {
        let original = Transform {
            translation: Vec3::new(1.0, -2.0, 3.0),
            rotation: Quat::from_rotation_y(0.5),
            scale: Vec3::splat(2.0),
        };
        let decoded = Transform::from_matrix(original.matrix());
        assert!(decoded.translation.abs_diff_eq(original.translation, 1e-5));
        assert!(decoded.rotation.abs_diff_eq(original.rotation, 1e-5));
        assert!(decoded.scale.abs_diff_eq(original.scale, 1e-5));
    }

    #[test]
    fn test_singular_matrix_keeps_translation() {
        let matrix = Mat4::from_cols_array(&[
            0.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            1.0, 2.0, 3.0, 1.0,
        ]);
        let decoded = Transform::from_matrix(matrix);
        assert_eq!(decoded.translation, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(decoded.rotation, Quat::IDENTITY);
        assert_eq!(decoded.scale, Vec3::new(0.0, 1.0, 1.0));
        assert!(decoded.matrix().is_finite());
    }
}
