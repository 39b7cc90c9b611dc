//! 4x4 homogeneous transform.

use crate::{Position3D, Rotation};

/// A homogeneous transform, element of SE(3).
///
/// ```text
/// ┌                          ┐
/// │ r1_c1  r1_c2  r1_c3  r1_c4 │
/// │ r2_c1  r2_c2  r2_c3  r2_c4 │
/// │ r3_c1  r3_c2  r3_c3  r3_c4 │
/// │   0      0      0      1   │
/// └                          ┘
/// ```
///
/// The top-left 3x3 block is the rotation, the last column the translation. The bottom
/// row is not stored: it is always `(0, 0, 0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Row 1, column 1.
    pub r1_c1: f32,
    /// Row 1, column 2.
    pub r1_c2: f32,
    /// Row 1, column 3.
    pub r1_c3: f32,
    /// Translation along x.
    pub r1_c4: f32,
    /// Row 2, column 1.
    pub r2_c1: f32,
    /// Row 2, column 2.
    pub r2_c2: f32,
    /// Row 2, column 3.
    pub r2_c3: f32,
    /// Translation along y.
    pub r2_c4: f32,
    /// Row 3, column 1.
    pub r3_c1: f32,
    /// Row 3, column 2.
    pub r3_c2: f32,
    /// Row 3, column 3.
    pub r3_c3: f32,
    /// Translation along z.
    pub r3_c4: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        r1_c1: 1.0,
        r1_c2: 0.0,
        r1_c3: 0.0,
        r1_c4: 0.0,
        r2_c1: 0.0,
        r2_c2: 1.0,
        r2_c3: 0.0,
        r2_c4: 0.0,
        r3_c1: 0.0,
        r3_c2: 0.0,
        r3_c3: 1.0,
        r3_c4: 0.0,
    };

    /// Create a transform from a rotation and a translation.
    #[inline]
    pub fn new(rotation: &Rotation, translation: &Position3D) -> Self {
        let mut t = Self::IDENTITY;
        t.set_rotation(rotation);
        t.set_translation(translation);
        t
    }

    /// Create a transform from the first three rows, row-major.
    #[inline]
    pub fn from_array(arr: [f32; 12]) -> Self {
        let [r1_c1, r1_c2, r1_c3, r1_c4, r2_c1, r2_c2, r2_c3, r2_c4, r3_c1, r3_c2, r3_c3, r3_c4] =
            arr;
        Self {
            r1_c1,
            r1_c2,
            r1_c3,
            r1_c4,
            r2_c1,
            r2_c2,
            r2_c3,
            r2_c4,
            r3_c1,
            r3_c2,
            r3_c3,
            r3_c4,
        }
    }

    /// Convert to the first three rows, row-major.
    #[inline]
    pub fn to_array(self) -> [f32; 12] {
        [
            self.r1_c1, self.r1_c2, self.r1_c3, self.r1_c4, //
            self.r2_c1, self.r2_c2, self.r2_c3, self.r2_c4, //
            self.r3_c1, self.r3_c2, self.r3_c3, self.r3_c4, //
        ]
    }

    /// Create a transform from a row-major slice.
    ///
    /// Both the 12 values of the first three rows and the full 16 values are accepted;
    /// in the latter case the bottom row is ignored. Any other length yields the identity.
    pub fn from_slice(values: &[f32]) -> Self {
        match values.len() {
            12 | 16 => {
                let mut arr = [0.0; 12];
                arr.copy_from_slice(&values[..12]);
                Self::from_array(arr)
            }
            n => {
                log::debug!("Transform: expected 12 or 16 components, got {n}; using identity");
                Self::IDENTITY
            }
        }
    }

    /// Convert to a row-major vector of 16 values, bottom row included.
    pub fn to_vec(self) -> Vec<f32> {
        let mut v = self.to_array().to_vec();
        v.extend_from_slice(&[0.0, 0.0, 0.0, 1.0]);
        v
    }

    /// Convert to a (column-major) glam matrix.
    #[inline]
    pub fn to_mat4(&self) -> glam::Mat4 {
        glam::Mat4::from_cols(
            glam::Vec4::new(self.r1_c1, self.r2_c1, self.r3_c1, 0.0),
            glam::Vec4::new(self.r1_c2, self.r2_c2, self.r3_c2, 0.0),
            glam::Vec4::new(self.r1_c3, self.r2_c3, self.r3_c3, 0.0),
            glam::Vec4::new(self.r1_c4, self.r2_c4, self.r3_c4, 1.0),
        )
    }

    /// Create a transform from a (column-major) glam matrix. The bottom row is ignored.
    #[inline]
    pub fn from_mat4(mat: &glam::Mat4) -> Self {
        Self::from_array([
            mat.x_axis.x,
            mat.y_axis.x,
            mat.z_axis.x,
            mat.w_axis.x,
            mat.x_axis.y,
            mat.y_axis.y,
            mat.z_axis.y,
            mat.w_axis.y,
            mat.x_axis.z,
            mat.y_axis.z,
            mat.z_axis.z,
            mat.w_axis.z,
        ])
    }

    /// The rotation block.
    #[inline]
    pub fn rotation(&self) -> Rotation {
        Rotation::from_array([
            self.r1_c1, self.r1_c2, self.r1_c3, //
            self.r2_c1, self.r2_c2, self.r2_c3, //
            self.r3_c1, self.r3_c2, self.r3_c3, //
        ])
    }

    /// The translation column.
    #[inline]
    pub fn translation(&self) -> Position3D {
        Position3D::new(self.r1_c4, self.r2_c4, self.r3_c4)
    }

    /// Overwrite the rotation block, keeping the translation.
    #[inline]
    pub fn set_rotation(&mut self, rot: &Rotation) {
        self.r1_c1 = rot.r1_c1;
        self.r1_c2 = rot.r1_c2;
        self.r1_c3 = rot.r1_c3;
        self.r2_c1 = rot.r2_c1;
        self.r2_c2 = rot.r2_c2;
        self.r2_c3 = rot.r2_c3;
        self.r3_c1 = rot.r3_c1;
        self.r3_c2 = rot.r3_c2;
        self.r3_c3 = rot.r3_c3;
    }

    /// Overwrite the translation column, keeping the rotation.
    #[inline]
    pub fn set_translation(&mut self, pos: &Position3D) {
        self.r1_c4 = pos.x;
        self.r2_c4 = pos.y;
        self.r3_c4 = pos.z;
    }

    /// The inverse transform `(Rᵗ, -Rᵗ·t)`.
    ///
    /// Relies on the rotation block being orthonormal; no general matrix inversion is done.
    pub fn inverse(&self) -> Self {
        let rt = self.rotation().transpose();
        Self::new(&rt, &-(rt * self.translation()))
    }

    /// Determinant of the rotation block (and of the whole homogeneous matrix).
    #[inline]
    pub fn determinant(&self) -> f32 {
        self.rotation().determinant()
    }

    /// Norm of the translation.
    #[inline]
    pub fn norm(&self) -> f32 {
        self.translation().norm()
    }

    /// Squared distance between the translations of two transforms.
    #[inline]
    pub fn distance_squared(&self, other: &Self) -> f32 {
        self.translation().distance_squared(&other.translation())
    }

    /// Distance between the translations of two transforms.
    #[inline]
    pub fn distance(&self, other: &Self) -> f32 {
        self.distance_squared(other).sqrt()
    }

    /// [`is_near`](Self::is_near) with [`DEFAULT_EPSILON`](crate::DEFAULT_EPSILON).
    #[inline]
    pub fn is_near_default(&self, other: &Self) -> bool {
        self.is_near(other, crate::DEFAULT_EPSILON)
    }

    /// Check that every stored entry is within `epsilon` of the other transform.
    pub fn is_near(&self, other: &Self, epsilon: f32) -> bool {
        self.to_array()
            .iter()
            .zip(other.to_array().iter())
            .all(|(a, b)| (a - b).abs() <= epsilon)
    }

    /// Check that the rotation block is a proper rotation, up to `epsilon`.
    #[inline]
    pub fn is_transform(&self, epsilon: f32) -> bool {
        self.rotation().is_rotation(epsilon)
    }
}

/// Composition `self · rhs`.
impl std::ops::Mul<Transform> for Transform {
    type Output = Transform;

    #[inline]
    fn mul(self, rhs: Transform) -> Self::Output {
        let r = self.rotation();
        Transform::new(
            &(r * rhs.rotation()),
            &(r * rhs.translation() + self.translation()),
        )
    }
}

impl std::ops::MulAssign<Transform> for Transform {
    #[inline]
    fn mul_assign(&mut self, rhs: Transform) {
        *self = *self * rhs;
    }
}

/// Apply the transform to a point: `R·p + t`.
impl std::ops::Mul<Position3D> for Transform {
    type Output = Position3D;

    #[inline]
    fn mul(self, rhs: Position3D) -> Self::Output {
        self.rotation() * rhs + self.translation()
    }
}

/// Translate the transform by `rhs`, expressed in the reference frame.
impl std::ops::AddAssign<Position3D> for Transform {
    #[inline]
    fn add_assign(&mut self, rhs: Position3D) {
        self.r1_c4 += rhs.x;
        self.r2_c4 += rhs.y;
        self.r3_c4 += rhs.z;
    }
}

#[cfg(feature = "approx")]
impl approx::AbsDiffEq for Transform {
    type Epsilon = f32;

    #[inline]
    fn default_epsilon() -> Self::Epsilon {
        <f32 as approx::AbsDiffEq>::default_epsilon()
    }

    #[inline]
    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.to_array()
            .iter()
            .zip(other.to_array().iter())
            .all(|(a, b)| approx::AbsDiffEq::abs_diff_eq(a, b, epsilon))
    }
}

#[cfg(feature = "approx")]
impl approx::RelativeEq for Transform {
    #[inline]
    fn default_max_relative() -> Self::Epsilon {
        <f32 as approx::RelativeEq>::default_max_relative()
    }

    #[inline]
    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.to_array()
            .iter()
            .zip(other.to_array().iter())
            .all(|(a, b)| approx::RelativeEq::relative_eq(a, b, epsilon, max_relative))
    }
}
