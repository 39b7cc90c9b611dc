#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Rigid value types
//!
//! Plain `Copy` values used by the transform algebra:
//!
//! | Type | Components | Meaning |
//! |------|------------|---------|
//! | [`Position2D`] | x, y | point in a plane |
//! | [`Position3D`] | x, y, z | point or free vector in space |
//! | [`Position6D`] | x, y, z, wx, wy, wz | position and orientation |
//! | [`Velocity6D`] | xd, yd, zd, wxd, wyd, wzd | twist, element of se(3) |
//! | [`Rotation`] | 3x3 matrix | element of SO(3) |
//! | [`Rotation3D`] | wx, wy, wz | roll, pitch, yaw |
//! | [`Pose2D`] | x, y, theta | planar pose |
//! | [`Transform`] | 3x4 matrix | element of SE(3) |
//! | [`AxisMask`] | 6 bits | selection of degrees of freedom |
//!
//! Divisions and normalizations return [`MathError`] instead of producing `inf`/`NaN`.
//! Building a value from a slice of the wrong length falls back to the zero value (or the
//! identity for [`Rotation`] and [`Transform`]).

#[macro_use]
mod vector;

mod axis_mask;
mod error;
mod pose2d;
mod position2d;
mod position3d;
mod position6d;
mod rotation;
mod rotation3d;
mod transform;
mod velocity6d;

pub use axis_mask::AxisMask;
pub use error::MathError;
pub use pose2d::Pose2D;
pub use position2d::Position2D;
pub use position3d::Position3D;
pub use position6d::Position6D;
pub use rotation::Rotation;
pub use rotation3d::Rotation3D;
pub use transform::Transform;
pub use velocity6d::Velocity6D;

/// Tolerance of the `is_near_default` comparisons.
pub const DEFAULT_EPSILON: f32 = 1.0e-4;
