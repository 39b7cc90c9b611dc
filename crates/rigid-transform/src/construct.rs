use std::f32::consts::PI;

use rigid_types::{Pose2D, Position3D, Position6D, Rotation, Rotation3D, Transform};

use crate::error::TransformError;
use crate::lie::rotation_exponential;

/// Headings within this distance (radians) of -π are reported as π.
const HEADING_TIE_EPSILON: f32 = 1.0e-6;

/// A principal axis of the reference frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// The x axis.
    X,
    /// The y axis.
    Y,
    /// The z axis.
    Z,
}

impl Axis {
    /// Unit vector along the axis.
    pub fn unit(self) -> Position3D {
        match self {
            Axis::X => Position3D::X,
            Axis::Y => Position3D::Y,
            Axis::Z => Position3D::Z,
        }
    }
}

/// Create a transform from a translation `(x, y, z)` and a rotation.
///
/// ```text
/// ┌                                    ┐
/// │ rot.r1_c1  rot.r1_c2  rot.r1_c3  x │
/// │ rot.r2_c1  rot.r2_c2  rot.r2_c3  y │
/// │ rot.r3_c1  rot.r3_c2  rot.r3_c3  z │
/// │     0          0          0      1 │
/// └                                    ┘
/// ```
pub fn transform_from_xyz_and_rotation(x: f32, y: f32, z: f32, rot: &Rotation) -> Transform {
    Transform::new(rot, &Position3D::new(x, y, z))
}

/// Create a transform from a translation and a rotation.
pub fn transform_from_position3d_and_rotation(pos: &Position3D, rot: &Rotation) -> Transform {
    Transform::new(rot, pos)
}

/// Create a pure translation.
pub fn transform_from_position3d(pos: &Position3D) -> Transform {
    Transform::new(&Rotation::IDENTITY, pos)
}

/// Create a pure rotation.
pub fn rotation_to_transform(rot: &Rotation) -> Transform {
    Transform::new(rot, &Position3D::default())
}

/// Extract the rotation block, dropping the translation.
pub fn rotation_from_transform(t: &Transform) -> Rotation {
    t.rotation()
}

/// Extract the translation column.
pub fn position3d_from_transform(t: &Transform) -> Position3D {
    t.translation()
}

/// Extract the translation column. Same as [`position3d_from_transform`].
#[inline]
pub fn transform_to_position3d(t: &Transform) -> Position3D {
    position3d_from_transform(t)
}

/// Extract the translation and the roll, pitch and yaw of a transform.
pub fn position6d_from_transform(t: &Transform) -> Position6D {
    let rpy = Rotation3D::from_rotation(&t.rotation());
    Position6D::from_parts(&t.translation(), &Position3D::new(rpy.wx, rpy.wy, rpy.wz))
}

/// Create a transform from a translation and roll, pitch and yaw angles.
pub fn transform_from_position6d(pos: &Position6D) -> Transform {
    let rpy = Rotation3D::new(pos.wx, pos.wy, pos.wz);
    Transform::new(&Rotation::from_rotation3d(&rpy), &pos.position())
}

/// Extract roll, pitch and yaw of the rotation block.
pub fn rotation3d_from_transform(t: &Transform) -> Rotation3D {
    rotation3d_from_rotation(&t.rotation())
}

/// Extract roll, pitch and yaw of a rotation.
pub fn rotation3d_from_rotation(rot: &Rotation) -> Rotation3D {
    Rotation3D::from_rotation(rot)
}

/// Create a pure rotation from roll, pitch and yaw angles.
pub fn transform_from_rotation3d(rot: &Rotation3D) -> Transform {
    rotation_to_transform(&Rotation::from_rotation3d(rot))
}

/// Embed a planar pose: translation `(x, y, 0)` and rotation of `theta` about z.
pub fn transform_from_pose2d(pose: &Pose2D) -> Transform {
    Transform::new(
        &Rotation::from_rot_z(pose.theta),
        &Position3D::new(pose.x, pose.y, 0.0),
    )
}

/// Project a transform on the horizontal plane.
///
/// The heading is `atan2(r2_c1, r1_c1)`, in `(-π, π]`. The z translation and any
/// rotation out of the plane are dropped.
pub fn pose2d_from_transform(t: &Transform) -> Pose2D {
    let mut theta = t.r2_c1.atan2(t.r1_c1);
    // sin(π) rounds to a tiny negative value in f32, which sends atan2 to -π
    if theta <= -PI + HEADING_TIE_EPSILON {
        theta = PI;
    }
    Pose2D::new(t.r1_c4, t.r2_c4, theta)
}

/// Create a transform rotating by `theta` radians about a principal axis, followed by
/// the translation `pos`.
pub fn transform_from_axis_rotation(axis: Axis, theta: f32, pos: &Position3D) -> Transform {
    let rot = match axis {
        Axis::X => Rotation::from_rot_x(theta),
        Axis::Y => Rotation::from_rot_y(theta),
        Axis::Z => Rotation::from_rot_z(theta),
    };
    Transform::new(&rot, pos)
}

/// Create a pure rotation from a rotation vector: angle `|w|` about the direction of `w`.
pub fn transform_from_rotation_vector(w: &Position3D) -> Transform {
    rotation_to_transform(&rotation_exponential(w))
}

/// Create a transform rotating by `angle` radians about `direction`, followed by the
/// translation `pos`.
///
/// # Errors
///
/// [`TransformError::Math`] if `direction` has zero length.
pub fn transform_from_angle_direction(
    angle: f32,
    direction: &Position3D,
    pos: &Position3D,
) -> Result<Transform, TransformError> {
    let rot = Rotation::from_angle_direction(angle, direction)?;
    Ok(Transform::new(&rot, pos))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    const EPSILON: f32 = 1e-5;

    fn sample_rotation() -> Rotation {
        Rotation::from_rotation3d(&Rotation3D::new(0.4, -0.3, 2.1))
    }

    #[test]
    fn test_position_and_rotation_roundtrip() {
        let rot = sample_rotation();
        let pos = Position3D::new(1.0, -2.0, 3.5);
        let t = transform_from_position3d_and_rotation(&pos, &rot);
        assert_eq!(rotation_from_transform(&t), rot);
        assert_eq!(transform_to_position3d(&t), pos);
        assert_eq!(position3d_from_transform(&t), pos);
        assert_eq!(transform_from_xyz_and_rotation(1.0, -2.0, 3.5, &rot), t);
    }

    #[test]
    fn test_pure_parts() {
        let pos = Position3D::new(1.0, 2.0, 3.0);
        let t = transform_from_position3d(&pos);
        assert_eq!(t.rotation(), Rotation::IDENTITY);
        assert_eq!(t.translation(), pos);

        let rot = sample_rotation();
        let t = rotation_to_transform(&rot);
        assert_eq!(t.rotation(), rot);
        assert_eq!(t.translation(), Position3D::default());
    }

    #[test]
    fn test_position6d_roundtrip() {
        let p = Position6D::new(0.1, -0.2, 0.3, 0.5, -0.7, 1.9);
        let back = position6d_from_transform(&transform_from_position6d(&p));
        assert!(back.is_near(&p, EPSILON));

        let pos = Position3D::new(1.0, 0.0, -1.0);
        let t = transform_from_position3d_and_rotation(&pos, &sample_rotation());
        let back = transform_from_position6d(&position6d_from_transform(&t));
        assert_relative_eq!(back, t, epsilon = EPSILON);
    }

    #[test]
    fn test_rotation3d_roundtrip() {
        let rpy = Rotation3D::new(-1.0, 0.25, 3.0);
        let t = transform_from_rotation3d(&rpy);
        assert_eq!(t.translation(), Position3D::default());
        assert!(rotation3d_from_transform(&t).is_near(&rpy, EPSILON));
        assert!(rotation3d_from_rotation(&t.rotation()).is_near(&rpy, EPSILON));
    }

    #[test]
    fn test_pose2d_roundtrip() {
        let pose = Pose2D::new(1.0, 2.0, FRAC_PI_2);
        let back = pose2d_from_transform(&transform_from_pose2d(&pose));
        assert!(back.is_near(&pose, EPSILON));

        for theta in [-3.0, -FRAC_PI_2, 0.0, 0.7, 2.5, 3.1] {
            let pose = Pose2D::new(-0.5, 0.25, theta);
            let back = pose2d_from_transform(&transform_from_pose2d(&pose));
            assert!(back.is_near(&pose, EPSILON), "{theta}: {back:?}");
        }
    }

    #[test]
    fn test_pose2d_heading_at_pi() {
        let pose = Pose2D::new(0.0, 0.0, PI);
        let back = pose2d_from_transform(&transform_from_pose2d(&pose));
        assert!(back.is_near(&pose, EPSILON), "{back:?}");
        assert_eq!(back.theta, PI);

        // -π is the same heading and is reported on the closed end of the range
        let pose = Pose2D::new(1.0, -1.0, -PI);
        let back = pose2d_from_transform(&transform_from_pose2d(&pose));
        assert_relative_eq!(back, Pose2D::new(1.0, -1.0, PI), epsilon = EPSILON);

        // just inside the open end stays negative
        let pose = Pose2D::new(0.0, 0.0, -3.14);
        let back = pose2d_from_transform(&transform_from_pose2d(&pose));
        assert!(back.is_near(&pose, EPSILON), "{back:?}");
    }

    #[test]
    fn test_pose2d_heading_range() {
        // headings outside (-π, π] come back wrapped
        let pose = Pose2D::new(0.0, 0.0, 3.0 * FRAC_PI_2);
        let back = pose2d_from_transform(&transform_from_pose2d(&pose));
        assert_relative_eq!(back.theta, -FRAC_PI_2, epsilon = EPSILON);
    }

    #[test]
    fn test_axis_rotation() {
        let pos = Position3D::new(0.0, 1.0, 0.0);
        let t = transform_from_axis_rotation(Axis::Y, 0.3, &pos);
        assert!(t.rotation().is_near(&Rotation::from_rot_y(0.3), EPSILON));
        assert_eq!(t.translation(), pos);
        assert_eq!(Axis::Z.unit(), Position3D::Z);
    }

    #[test]
    fn test_angle_direction() -> Result<(), Box<dyn std::error::Error>> {
        let pos = Position3D::new(1.0, 2.0, 3.0);
        let t = transform_from_angle_direction(0.4, &Position3D::new(0.0, 0.0, 2.0), &pos)?;
        assert!(t.is_near(&transform_from_axis_rotation(Axis::Z, 0.4, &pos), EPSILON));

        let err = transform_from_angle_direction(0.4, &Position3D::default(), &pos);
        assert!(matches!(err, Err(TransformError::Math(_))));
        Ok(())
    }

    #[test]
    fn test_rotation_vector() {
        let t = transform_from_rotation_vector(&Position3D::new(0.0, 0.0, FRAC_PI_2));
        let expected = rotation_to_transform(&Rotation::from_rot_z(FRAC_PI_2));
        assert!(t.is_near(&expected, EPSILON));
        let t = transform_from_rotation_vector(&Position3D::default());
        assert_eq!(t, Transform::IDENTITY);
    }
}
