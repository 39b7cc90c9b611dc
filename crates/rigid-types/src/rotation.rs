//! 3x3 rotation matrix.

use crate::{MathError, Position3D};

/// A 3x3 rotation matrix, element of SO(3).
///
/// Components are stored row by row: `rI_cJ` is the entry at row `I`, column `J`.
///
/// # Important
///
/// The matrix is expected to stay orthonormal with determinant +1. Nothing enforces it
/// at construction time; use [`Rotation::is_rotation`] to check a matrix coming from
/// an untrusted source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    /// Row 1, column 1.
    pub r1_c1: f32,
    /// Row 1, column 2.
    pub r1_c2: f32,
    /// Row 1, column 3.
    pub r1_c3: f32,
    /// Row 2, column 1.
    pub r2_c1: f32,
    /// Row 2, column 2.
    pub r2_c2: f32,
    /// Row 2, column 3.
    pub r2_c3: f32,
    /// Row 3, column 1.
    pub r3_c1: f32,
    /// Row 3, column 2.
    pub r3_c2: f32,
    /// Row 3, column 3.
    pub r3_c3: f32,
}

impl Default for Rotation {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Rotation {
    /// The identity rotation.
    pub const IDENTITY: Self = Self {
        r1_c1: 1.0,
        r1_c2: 0.0,
        r1_c3: 0.0,
        r2_c1: 0.0,
        r2_c2: 1.0,
        r2_c3: 0.0,
        r3_c1: 0.0,
        r3_c2: 0.0,
        r3_c3: 1.0,
    };

    /// Create a rotation from a row-major array.
    #[inline]
    pub fn from_array(arr: [f32; 9]) -> Self {
        let [r1_c1, r1_c2, r1_c3, r2_c1, r2_c2, r2_c3, r3_c1, r3_c2, r3_c3] = arr;
        Self {
            r1_c1,
            r1_c2,
            r1_c3,
            r2_c1,
            r2_c2,
            r2_c3,
            r3_c1,
            r3_c2,
            r3_c3,
        }
    }

    /// Convert to a row-major array.
    #[inline]
    pub fn to_array(self) -> [f32; 9] {
        [
            self.r1_c1, self.r1_c2, self.r1_c3, //
            self.r2_c1, self.r2_c2, self.r2_c3, //
            self.r3_c1, self.r3_c2, self.r3_c3, //
        ]
    }

    /// Create a rotation from a row-major slice.
    ///
    /// A slice that does not hold exactly 9 values yields the identity.
    pub fn from_slice(values: &[f32]) -> Self {
        match <[f32; 9]>::try_from(values) {
            Ok(arr) => Self::from_array(arr),
            Err(_) => {
                log::debug!(
                    "Rotation: expected 9 components, got {}; using identity",
                    values.len()
                );
                Self::IDENTITY
            }
        }
    }

    /// Convert to a row-major vector.
    pub fn to_vec(self) -> Vec<f32> {
        self.to_array().to_vec()
    }

    /// Convert to a (column-major) glam matrix.
    #[inline]
    pub fn to_mat3(&self) -> glam::Mat3 {
        glam::Mat3::from_cols(
            glam::Vec3::new(self.r1_c1, self.r2_c1, self.r3_c1),
            glam::Vec3::new(self.r1_c2, self.r2_c2, self.r3_c2),
            glam::Vec3::new(self.r1_c3, self.r2_c3, self.r3_c3),
        )
    }

    /// Create a rotation from a (column-major) glam matrix.
    #[inline]
    pub fn from_mat3(mat: &glam::Mat3) -> Self {
        Self {
            r1_c1: mat.x_axis.x,
            r1_c2: mat.y_axis.x,
            r1_c3: mat.z_axis.x,
            r2_c1: mat.x_axis.y,
            r2_c2: mat.y_axis.y,
            r2_c3: mat.z_axis.y,
            r3_c1: mat.x_axis.z,
            r3_c2: mat.y_axis.z,
            r3_c3: mat.z_axis.z,
        }
    }

    /// Convert to a double precision glam matrix.
    #[inline]
    pub fn to_dmat3(&self) -> glam::DMat3 {
        self.to_mat3().as_dmat3()
    }

    /// Create a rotation from a double precision glam matrix.
    #[inline]
    pub fn from_dmat3(mat: &glam::DMat3) -> Self {
        Self::from_mat3(&mat.as_mat3())
    }

    /// Rotation of `angle` radians about the x axis.
    pub fn from_rot_x(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_array([
            1.0, 0.0, 0.0, //
            0.0, c, -s, //
            0.0, s, c, //
        ])
    }

    /// Rotation of `angle` radians about the y axis.
    pub fn from_rot_y(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_array([
            c, 0.0, s, //
            0.0, 1.0, 0.0, //
            -s, 0.0, c, //
        ])
    }

    /// Rotation of `angle` radians about the z axis.
    pub fn from_rot_z(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_array([
            c, -s, 0.0, //
            s, c, 0.0, //
            0.0, 0.0, 1.0, //
        ])
    }

    /// Rotation of `angle` radians about `direction` (Rodrigues' formula).
    ///
    /// The direction does not need to be normalized.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::DivisionByZero`] if `direction` has zero length.
    pub fn from_angle_direction(angle: f32, direction: &Position3D) -> Result<Self, MathError> {
        let n = direction.normalize()?;
        let (x, y, z) = (n.x, n.y, n.z);

        let (s, c) = angle.sin_cos();
        let t = 1.0 - c;

        Ok(Self::from_array([
            c + x * x * t,
            x * y * t - z * s,
            x * z * t + y * s,
            x * y * t + z * s,
            c + y * y * t,
            y * z * t - x * s,
            x * z * t - y * s,
            y * z * t + x * s,
            c + z * z * t,
        ]))
    }

    /// The transposed matrix, which is also the inverse rotation.
    #[inline]
    pub fn transpose(&self) -> Self {
        Self::from_array([
            self.r1_c1, self.r2_c1, self.r3_c1, //
            self.r1_c2, self.r2_c2, self.r3_c2, //
            self.r1_c3, self.r2_c3, self.r3_c3, //
        ])
    }

    /// Determinant of the matrix.
    #[inline]
    pub fn determinant(&self) -> f32 {
        self.to_mat3().determinant()
    }

    /// Trace of the matrix.
    #[inline]
    pub fn trace(&self) -> f32 {
        self.r1_c1 + self.r2_c2 + self.r3_c3
    }

    /// [`is_near`](Self::is_near) with [`DEFAULT_EPSILON`](crate::DEFAULT_EPSILON).
    #[inline]
    pub fn is_near_default(&self, other: &Self) -> bool {
        self.is_near(other, crate::DEFAULT_EPSILON)
    }

    /// Check that every entry is within `epsilon` of the other rotation.
    pub fn is_near(&self, other: &Self, epsilon: f32) -> bool {
        self.to_array()
            .iter()
            .zip(other.to_array().iter())
            .all(|(a, b)| (a - b).abs() <= epsilon)
    }

    /// Check that the matrix is orthonormal with determinant +1, up to `epsilon`.
    pub fn is_rotation(&self, epsilon: f32) -> bool {
        let m = self.to_mat3();
        let rrt = Self::from_mat3(&(m * m.transpose()));
        rrt.is_near(&Self::IDENTITY, epsilon) && (m.determinant() - 1.0).abs() <= epsilon
    }
}

impl std::ops::Mul<Rotation> for Rotation {
    type Output = Rotation;

    #[inline]
    fn mul(self, rhs: Rotation) -> Self::Output {
        Rotation::from_mat3(&(self.to_mat3() * rhs.to_mat3()))
    }
}

impl std::ops::MulAssign<Rotation> for Rotation {
    #[inline]
    fn mul_assign(&mut self, rhs: Rotation) {
        *self = *self * rhs;
    }
}

impl std::ops::Mul<Position3D> for Rotation {
    type Output = Position3D;

    #[inline]
    fn mul(self, rhs: Position3D) -> Self::Output {
        Position3D::from(self.to_mat3() * glam::Vec3::from(rhs))
    }
}

#[cfg(feature = "approx")]
impl approx::AbsDiffEq for Rotation {
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
impl approx::RelativeEq for Rotation {
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

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    const EPSILON: f32 = 1e-6;

    #[test]
    fn test_identity() {
        assert_eq!(Rotation::default(), Rotation::IDENTITY);
        assert!(Rotation::IDENTITY.is_rotation(EPSILON));
        assert_relative_eq!(Rotation::IDENTITY.determinant(), 1.0);
        assert_relative_eq!(Rotation::IDENTITY.trace(), 3.0);
    }

    #[test]
    fn test_from_slice() {
        let arr = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
        assert_eq!(Rotation::from_slice(&arr).to_array(), arr);
        assert_eq!(Rotation::from_slice(&arr[..8]), Rotation::IDENTITY);
    }

    #[test]
    fn test_glam_layout() {
        let r = Rotation::from_array([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        let m = r.to_mat3();
        // glam stores columns
        assert_eq!(m.x_axis, glam::Vec3::new(1.0, 4.0, 7.0));
        assert_eq!(Rotation::from_mat3(&m), r);
    }

    #[test]
    fn test_rot_z_applied_to_x() {
        let r = Rotation::from_rot_z(FRAC_PI_2);
        let p = r * Position3D::X;
        assert!(p.is_near(&Position3D::Y, EPSILON));
    }

    #[test]
    fn test_rot_x_and_y() {
        let p = Rotation::from_rot_x(FRAC_PI_2) * Position3D::Y;
        assert!(p.is_near(&Position3D::Z, EPSILON));
        let p = Rotation::from_rot_y(FRAC_PI_2) * Position3D::Z;
        assert!(p.is_near(&Position3D::X, EPSILON));
    }

    #[test]
    fn test_angle_direction_matches_principal_axes() -> Result<(), MathError> {
        let angle = 0.7;
        let r = Rotation::from_angle_direction(angle, &Position3D::new(0.0, 0.0, 3.0))?;
        assert!(r.is_near(&Rotation::from_rot_z(angle), EPSILON));
        let r = Rotation::from_angle_direction(angle, &Position3D::X)?;
        assert!(r.is_near(&Rotation::from_rot_x(angle), EPSILON));
        Ok(())
    }

    #[test]
    fn test_angle_direction_zero_axis() {
        let res = Rotation::from_angle_direction(1.0, &Position3D::default());
        assert_eq!(res, Err(MathError::DivisionByZero("Position3D")));
    }

    #[test]
    fn test_transpose_is_inverse() -> Result<(), MathError> {
        let r = Rotation::from_angle_direction(1.2, &Position3D::new(1.0, -2.0, 0.5))?;
        assert!(r.is_rotation(1e-5));
        let id = r * r.transpose();
        assert!(id.is_near(&Rotation::IDENTITY, 1e-5));

        let mut s = r;
        s *= r.transpose();
        assert!(s.is_near(&Rotation::IDENTITY, 1e-5));
        Ok(())
    }

    #[test]
    fn test_is_rotation_rejects_scaled() {
        let mut r = Rotation::IDENTITY;
        r.r1_c1 = 2.0;
        assert!(!r.is_rotation(1e-3));
    }

    #[test]
    fn test_near_default() {
        let r = Rotation::from_rot_z(0.3) * Rotation::from_rot_z(-0.3);
        assert!(r.is_near_default(&Rotation::IDENTITY));
        assert!(!Rotation::from_rot_z(0.1).is_near_default(&Rotation::IDENTITY));
    }

    #[cfg(feature = "approx")]
    #[test]
    fn test_approx_traits() {
        let r = Rotation::from_rot_x(FRAC_PI_2) * Rotation::from_rot_x(FRAC_PI_2);
        assert_relative_eq!(r, Rotation::from_rot_x(2.0 * FRAC_PI_2), epsilon = EPSILON);
        approx::assert_abs_diff_eq!(r * r.transpose(), Rotation::IDENTITY, epsilon = EPSILON);
        approx::assert_relative_ne!(r, Rotation::IDENTITY, epsilon = EPSILON);
    }
}
