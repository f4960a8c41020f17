/// Oriented bounding box reconstruction from raw segmentation transforms
use nalgebra::{Matrix3, Matrix4, Vector3};

use crate::axes::{self, FILE_AXIS_ORDER, FILE_POSITION_ORDER, FLIPPED_POSITION_AXIS};

/// The vectors of one record exactly as they appear in the file
///
/// `axes` holds the three scaled axis vectors in file order (see
/// [`FILE_AXIS_ORDER`]) and `translation` the position values in file order
/// (see [`FILE_POSITION_ORDER`]). The padding scalar after each vector is not
/// kept.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawTransform {
    pub axes: [Vector3<f32>; 3],
    pub translation: Vector3<f32>,
}

impl RawTransform {
    pub fn new(axes: [Vector3<f32>; 3], translation: Vector3<f32>) -> Self {
        Self { axes, translation }
    }

    /// Scaled local axes in X, Y, Z order
    pub fn local_axes(&self) -> [Vector3<f32>; 3] {
        axes::unpermute(self.axes, FILE_AXIS_ORDER)
    }

    /// Box center in X, Y, Z order with the flipped component negated
    pub fn position(&self) -> Vector3<f32> {
        let mut position = axes::unpermute_vector(&self.translation, FILE_POSITION_ORDER);
        position[FLIPPED_POSITION_AXIS.index()] *= -1.0;
        position
    }
}

/// A box defined by its center, per-axis extents and rotation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientedBox {
    pub position: Vector3<f32>,
    pub scale: Vector3<f32>,
    /// Columns are the unit local X, Y and Z axes.
    pub rotation: Matrix3<f32>,
}

impl OrientedBox {
    /// Build a box from the rows of its rotation matrix.
    pub fn from_axis_rows(
        position: Vector3<f32>,
        scale: Vector3<f32>,
        rows: [Vector3<f32>; 3],
    ) -> Self {
        Self {
            position,
            scale,
            rotation: Matrix3::from_rows(&[
                rows[0].transpose(),
                rows[1].transpose(),
                rows[2].transpose(),
            ]),
        }
    }

    /// Reconstruct the box described by a raw transform.
    ///
    /// The scale is the length of each local axis vector and the rotation
    /// holds the normalized axes as columns. An axis that cannot be
    /// normalized contributes a zero column.
    pub fn from_raw(raw: &RawTransform) -> Self {
        let [x, y, z] = raw.local_axes();

        Self {
            position: raw.position(),
            scale: Vector3::new(x.norm(), y.norm(), z.norm()),
            rotation: Matrix3::from_columns(&[unit_or_zero(&x), unit_or_zero(&y), unit_or_zero(&z)]),
        }
    }

    /// Row `i` of the rotation matrix
    pub fn axis(&self, i: usize) -> Vector3<f32> {
        self.rotation.row(i).transpose()
    }

    /// All three rotation rows
    pub fn axes(&self) -> [Vector3<f32>; 3] {
        [self.axis(0), self.axis(1), self.axis(2)]
    }

    /// Matrix placing the cube `[-1, 1]^3` onto this box
    pub fn model_matrix(&self) -> Matrix4<f32> {
        let translation = Matrix4::new_translation(&self.position);
        let rotation = self.rotation.to_homogeneous();
        let scale = Matrix4::new_nonuniform_scaling(&self.scale);

        // Scale first, then rotate, then move into place
        translation * rotation * scale
    }
}

fn unit_or_zero(v: &Vector3<f32>) -> Vector3<f32> {
    match v.try_normalize(0.0) {
        Some(unit) if unit.iter().all(|c| c.is_finite()) => unit,
        _ => {
            tracing::warn!("Degenerate axis vector {:?}, using zero axis", v);
            Vector3::zeros()
        }
    }
}
