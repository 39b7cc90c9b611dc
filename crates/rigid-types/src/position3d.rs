//! Position (or free vector) in space.

define_vector_type!(
    /// A position in a 3-dimensional space.
    ///
    /// Also used as a free vector, for instance as a rotation axis or a rotation vector.
    Position3D,
    3,
    [
        /// Coordinate along the x axis.
        x,
        /// Coordinate along the y axis.
        y,
        /// Coordinate along the z axis.
        z
    ]
);

impl Position3D {
    /// Unit vector along x.
    pub const X: Self = Self {
        x: 1.0,
        y: 0.0,
        z: 0.0,
    };

    /// Unit vector along y.
    pub const Y: Self = Self {
        x: 0.0,
        y: 1.0,
        z: 0.0,
    };

    /// Unit vector along z.
    pub const Z: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 1.0,
    };

    /// The cross product `self × other`.
    #[inline]
    pub fn cross_product(&self, other: &Self) -> Self {
        Self::from(glam::Vec3::from(*self).cross(glam::Vec3::from(*other)))
    }
}

impl From<glam::Vec3> for Position3D {
    #[inline]
    fn from(v: glam::Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Position3D> for glam::Vec3 {
    #[inline]
    fn from(p: Position3D) -> Self {
        glam::Vec3::new(p.x, p.y, p.z)
    }
}

impl From<glam::DVec3> for Position3D {
    #[inline]
    fn from(v: glam::DVec3) -> Self {
        Self::new(v.x as f32, v.y as f32, v.z as f32)
    }
}

impl From<Position3D> for glam::DVec3 {
    #[inline]
    fn from(p: Position3D) -> Self {
        glam::DVec3::new(p.x as f64, p.y as f64, p.z as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MathError;
    use approx::assert_relative_eq;

    #[test]
    fn test_cross_product() {
        let c = Position3D::X.cross_product(&Position3D::Y);
        assert_eq!(c, Position3D::Z);

        let a = Position3D::new(1.0, 2.0, 3.0);
        assert!(a.cross_product(&a).is_near(&Position3D::default(), 1e-6));
    }

    #[test]
    fn test_dot_and_norm() {
        let a = Position3D::new(1.0, 2.0, 2.0);
        assert_relative_eq!(a.norm(), 3.0);
        assert_relative_eq!(a.dot(&Position3D::new(1.0, 0.0, -1.0)), -1.0);
    }

    #[test]
    fn test_normalize() -> Result<(), MathError> {
        let n = Position3D::new(0.0, 3.0, 4.0).normalize()?;
        assert_relative_eq!(n.y, 0.6, epsilon = 1e-6);
        assert_relative_eq!(n.z, 0.8, epsilon = 1e-6);
        assert_eq!(
            Position3D::default().normalize(),
            Err(MathError::DivisionByZero("Position3D"))
        );
        Ok(())
    }

    #[test]
    fn test_from_slice() {
        assert_eq!(
            Position3D::from_slice(&[1.0, 2.0, 3.0]),
            Position3D::new(1.0, 2.0, 3.0)
        );
        assert_eq!(Position3D::from_slice(&[1.0, 2.0]), Position3D::default());
        assert_eq!(Position3D::new(1.0, 2.0, 3.0).to_vec(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_glam_conversion() {
        let p = Position3D::new(1.0, -2.0, 0.5);
        let v: glam::Vec3 = p.into();
        let back: Position3D = v.into();
        assert_eq!(p, back);
    }
}
