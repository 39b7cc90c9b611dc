#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! Every operation is a free function over the `Copy` value types of [`rigid_types`].
//! Transforms compose with `*` and apply to points with `*`; the functions below cover
//! what the operators do not.

/// Error types for the transform algebra.
pub mod error;

/// Construction of transforms and extraction of their parts.
pub mod construct;

/// Expression of points, transforms and velocities in another frame.
pub mod repere;

/// Logarithm and exponential maps between SE(3) and se(3).
pub mod lie;

/// Interpolation between poses.
pub mod interpolate;

/// Projection of rotations onto a single axis.
pub mod projection;

/// Degree-of-freedom selection on transforms.
pub mod axis_mask;

pub use axis_mask::{
    axis_mask_to_transform_on, compute_mix_transform_with_axis_mask, filter_transform,
};
pub use construct::*;
pub use error::TransformError;
pub use interpolate::{transform_diff_to_position, transform_mean, transform_midpoint};
pub use lie::{
    rotation_exponential, rotation_logarithme, transform_logarithme, velocity_exponential,
    LOG_DOMAIN_MARGIN, SMALL_ANGLE_EPSILON,
};
pub use projection::{
    axis_rotation_projection, axis_rotation_projection_in_place, rotation_axis_projection,
    rotation_axis_projection_in_place,
};
pub use repere::*;
