//! # Logarithm and exponential maps between SE(3) and se(3)
//!
//! A twist `ξ = (v, ω)` ([`Velocity6D`]) is mapped to a homogeneous transform by
//!
//! ```text
//! R = I + A·[ω]× + B·[ω]×²
//! t = V·v,   V = I + B·[ω]× + C·[ω]×²
//!
//! A = sin θ / θ,   B = (1 - cos θ) / θ²,   C = (θ - sin θ) / θ³,   θ = |ω|
//! ```
//!
//! and back by extracting θ and ω from the rotation block and solving `v = V⁻¹·t` with
//!
//! ```text
//! V⁻¹ = I - ½·[ω]× + D·[ω]×²,   D = (1 - θ·sin θ / (2·(1 - cos θ))) / θ²
//! ```
//!
//! ## Numerical domain
//!
//! - Below [`SMALL_ANGLE_EPSILON`] every ratio above is replaced by its Taylor expansion
//!   (second order in θ), so nothing is divided by a vanishing angle.
//! - The logarithm is guaranteed for θ ≤ π - [`LOG_DOMAIN_MARGIN`]. Past that bound the
//!   rotation axis is taken from the symmetric part of R, which keeps the result finite,
//!   but a warning is logged: at exactly θ = π both `ω` and `-ω` are valid logarithms and
//!   the returned sign is arbitrary.
//!
//! Everything is evaluated in double precision and rounded back to `f32`.

use glam::{DMat3, DVec3};
use rigid_types::{Position3D, Rotation, Transform, Velocity6D};

/// Angle (radians) under which the maps switch to their Taylor expansions.
pub const SMALL_ANGLE_EPSILON: f64 = 1.0e-3;

/// Distance (radians) to π beyond which the logarithm is no longer guaranteed.
pub const LOG_DOMAIN_MARGIN: f64 = 1.0e-3;

/// Vector space -> skew-symmetric matrix, `hat(a) · b = a × b`.
#[inline]
pub(crate) fn hat(v: DVec3) -> DMat3 {
    DMat3::from_cols_array(&[0.0, v.z, -v.y, -v.z, 0.0, v.x, v.y, -v.x, 0.0])
}

/// SO(3) logarithm: rotation matrix -> rotation vector `θ·n`.
pub(crate) fn so3_log(r: &DMat3) -> DVec3 {
    // skew part: sin θ · n
    let s = 0.5
        * DVec3::new(
            r.y_axis.z - r.z_axis.y,
            r.z_axis.x - r.x_axis.z,
            r.x_axis.y - r.y_axis.x,
        );
    let cos_theta = ((r.x_axis.x + r.y_axis.y + r.z_axis.z - 1.0) * 0.5).clamp(-1.0, 1.0);
    let sin_theta = s.length();
    let theta = sin_theta.atan2(cos_theta);

    if theta < SMALL_ANGLE_EPSILON {
        // θ / sin θ ≈ 1 + θ²/6
        return s * (1.0 + theta * theta / 6.0);
    }

    if cos_theta > -0.5 {
        return s * (theta / sin_theta);
    }

    if theta > std::f64::consts::PI - LOG_DOMAIN_MARGIN {
        log::warn!(
            "rotation angle {theta} is beyond the guaranteed logarithm domain [0, π - {LOG_DOMAIN_MARGIN}]"
        );
    }

    // sin θ vanishes near π: read the axis from (R + Rᵗ)/2 - cos θ·I = (1 - cos θ)·n·nᵗ
    let sym = (*r + r.transpose()) * 0.5 - DMat3::from_diagonal(DVec3::splat(cos_theta));
    let diag = DVec3::new(sym.x_axis.x, sym.y_axis.y, sym.z_axis.z);
    let column = if diag.x >= diag.y && diag.x >= diag.z {
        sym.x_axis
    } else if diag.y >= diag.z {
        sym.y_axis
    } else {
        sym.z_axis
    };

    let mut axis = column.normalize_or_zero();
    if axis.dot(s) < 0.0 {
        axis = -axis;
    }
    axis * theta
}

/// SO(3) exponential: rotation vector -> rotation matrix (Rodrigues' formula).
pub(crate) fn so3_exp(w: DVec3) -> DMat3 {
    let theta_sq = w.length_squared();
    let theta = theta_sq.sqrt();
    let skew = hat(w);

    let (a, b) = if theta < SMALL_ANGLE_EPSILON {
        (1.0 - theta_sq / 6.0, 0.5 - theta_sq / 24.0)
    } else {
        (theta.sin() / theta, (1.0 - theta.cos()) / theta_sq)
    };

    DMat3::IDENTITY + skew * a + (skew * skew) * b
}

/// Compute the logarithm of a transform: the twist `ξ` such that `exp(ξ̂) = T`.
///
/// The rotation angle must lie in `[0, π - 0.001]` for the result to be unique; see the
/// [module-level documentation](self) for the behavior past that bound.
pub fn transform_logarithme(t: &Transform) -> Velocity6D {
    let omega = so3_log(&t.rotation().to_dmat3());
    let theta_sq = omega.length_squared();
    let theta = theta_sq.sqrt();
    let skew = hat(omega);

    let d = if theta < SMALL_ANGLE_EPSILON {
        1.0 / 12.0 + theta_sq / 720.0
    } else {
        (1.0 - theta * theta.sin() / (2.0 * (1.0 - theta.cos()))) / theta_sq
    };

    let v_inv = DMat3::IDENTITY - skew * 0.5 + (skew * skew) * d;
    let upsilon = v_inv * DVec3::from(t.translation());

    Velocity6D::from_parts(&upsilon.into(), &omega.into())
}

/// Compute the transform `exp(ξ̂)` reached by following the twist `ξ` for a unit time.
///
/// Scale the twist by `dt` beforehand to integrate a velocity over a time step.
pub fn velocity_exponential(vel: &Velocity6D) -> Transform {
    let upsilon = DVec3::from(vel.linear());
    let omega = DVec3::from(vel.angular());
    let theta_sq = omega.length_squared();
    let theta = theta_sq.sqrt();
    let skew = hat(omega);
    let skew_sq = skew * skew;

    let (a, b, c) = if theta < SMALL_ANGLE_EPSILON {
        (
            1.0 - theta_sq / 6.0,
            0.5 - theta_sq / 24.0,
            1.0 / 6.0 - theta_sq / 120.0,
        )
    } else {
        let (sin, cos) = theta.sin_cos();
        (
            sin / theta,
            (1.0 - cos) / theta_sq,
            (theta - sin) / (theta_sq * theta),
        )
    };

    let rotation = DMat3::IDENTITY + skew * a + skew_sq * b;
    let v_mat = DMat3::IDENTITY + skew * b + skew_sq * c;

    Transform::new(
        &Rotation::from_dmat3(&rotation),
        &Position3D::from(v_mat * upsilon),
    )
}

/// Compute the logarithm of a rotation: its rotation vector `θ·n`.
pub fn rotation_logarithme(rot: &Rotation) -> Position3D {
    so3_log(&rot.to_dmat3()).into()
}

/// Compute the rotation `exp([w]×)` of angle `|w|` about `w`.
pub fn rotation_exponential(w: &Position3D) -> Rotation {
    Rotation::from_dmat3(&so3_exp(DVec3::from(*w)))
}
