//! Frame changes.
//!
//! Every function takes the transform `T = (R, t)` that maps coordinates of frame B into
//! frame A. The plain variant re-expresses a quantity given in B in A; the `transpose`
//! variant goes the other way, using `Rᵗ` in place of a general inverse.

use rigid_types::{Position3D, Position6D, Transform, Velocity6D};

/// Adjoint of `T` applied to the pair `(linear, angular)`.
fn adjoint(t: &Transform, linear: &Position3D, angular: &Position3D) -> (Position3D, Position3D) {
    let rot = t.rotation();
    let angular = rot * *angular;
    let linear = rot * *linear + t.translation().cross_product(&angular);
    (linear, angular)
}

/// Adjoint of `T⁻¹` applied to the pair `(linear, angular)`.
fn adjoint_transpose(
    t: &Transform,
    linear: &Position3D,
    angular: &Position3D,
) -> (Position3D, Position3D) {
    let rt = t.rotation().transpose();
    let moment = t.translation().cross_product(angular);
    (rt * (*linear - moment), rt * *angular)
}

/// Express a point of frame B in frame A: `R·p + t`.
#[inline]
pub fn change_repere_position3d(t: &Transform, p: &Position3D) -> Position3D {
    *t * *p
}

/// Express a point of frame A in frame B: `Rᵗ·(p - t)`.
pub fn change_repere_transpose_position3d(t: &Transform, p: &Position3D) -> Position3D {
    t.rotation().transpose() * (*p - t.translation())
}

/// Express a pose given in frame B in frame A: `T·Tin`.
#[inline]
pub fn change_repere_transform(t: &Transform, t_in: &Transform) -> Transform {
    *t * *t_in
}

/// Express a pose given in frame A in frame B: `T⁻¹·Tin`.
pub fn change_repere_transpose_transform(t: &Transform, t_in: &Transform) -> Transform {
    let rt = t.rotation().transpose();
    Transform::new(
        &(rt * t_in.rotation()),
        &(rt * (t_in.translation() - t.translation())),
    )
}

/// Express a twist given in frame B in frame A.
///
/// ```text
/// ω' = R·ω
/// v' = R·v + t × ω'
/// ```
pub fn change_repere_velocity6d(t: &Transform, vel: &Velocity6D) -> Velocity6D {
    let (linear, angular) = adjoint(t, &vel.linear(), &vel.angular());
    Velocity6D::from_parts(&linear, &angular)
}

/// Express a twist given in frame A in frame B.
///
/// ```text
/// ω' = Rᵗ·ω
/// v' = Rᵗ·(v - t × ω)
/// ```
pub fn change_repere_transpose_velocity6d(t: &Transform, vel: &Velocity6D) -> Velocity6D {
    let (linear, angular) = adjoint_transpose(t, &vel.linear(), &vel.angular());
    Velocity6D::from_parts(&linear, &angular)
}

/// Express a differential motion given in frame B in frame A.
///
/// The position is transported like a twist, see [`change_repere_velocity6d`].
pub fn change_repere_position6d(t: &Transform, pos: &Position6D) -> Position6D {
    let (linear, angular) = adjoint(t, &pos.position(), &pos.orientation());
    Position6D::from_parts(&linear, &angular)
}

/// Express a differential motion given in frame A in frame B.
pub fn change_repere_transpose_position6d(t: &Transform, pos: &Position6D) -> Position6D {
    let (linear, angular) = adjoint_transpose(t, &pos.position(), &pos.orientation());
    Position6D::from_parts(&linear, &angular)
}
