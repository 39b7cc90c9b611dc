use glam::DVec3;
use rigid_types::{Position3D, Rotation, Transform};

use crate::error::TransformError;
use crate::lie::{so3_exp, so3_log};

fn unit_axis(axis: &Position3D) -> Result<DVec3, TransformError> {
    DVec3::from(*axis)
        .try_normalize()
        .ok_or(TransformError::ZeroAxis)
}

/// Keep the component of the rotation vector of `rot` along the unit axis `n`.
pub(crate) fn project_on_unit_axis(rot: &Rotation, n: DVec3) -> Rotation {
    let angle = so3_log(&rot.to_dmat3()).dot(n);
    Rotation::from_dmat3(&so3_exp(n * angle))
}

/// Project a rotation onto the rotations about `axis`.
///
/// The rotation vector `θ·u` of `rot` is projected on the normalized axis `n`, and the
/// result is the rotation of angle `⟨θ·u, n⟩` about `n`. The axis needs not be unit length
/// but must not be zero.
///
/// # Errors
///
/// [`TransformError::ZeroAxis`] if `axis` has no length.
pub fn rotation_axis_projection(
    rot: &Rotation,
    axis: &Position3D,
) -> Result<Rotation, TransformError> {
    let n = unit_axis(axis)?;
    Ok(project_on_unit_axis(rot, n))
}

/// In-place version of [`rotation_axis_projection`]. `rot` is left untouched on error.
pub fn rotation_axis_projection_in_place(
    rot: &mut Rotation,
    axis: &Position3D,
) -> Result<(), TransformError> {
    *rot = rotation_axis_projection(rot, axis)?;
    Ok(())
}

/// Project the rotation block of a transform onto the rotations about `axis`, keeping the
/// translation. See [`rotation_axis_projection`].
pub fn axis_rotation_projection(
    t: &Transform,
    axis: &Position3D,
) -> Result<Transform, TransformError> {
    let rot = rotation_axis_projection(&t.rotation(), axis)?;
    Ok(Transform::new(&rot, &t.translation()))
}

/// In-place version of [`axis_rotation_projection`]. `t` is left untouched on error.
pub fn axis_rotation_projection_in_place(
    t: &mut Transform,
    axis: &Position3D,
) -> Result<(), TransformError> {
    let rot = rotation_axis_projection(&t.rotation(), axis)?;
    t.set_rotation(&rot);
    Ok(())
}
