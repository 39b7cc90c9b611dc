use rigid_types::{Position6D, Transform};

use crate::lie::{transform_logarithme, velocity_exponential};

/// Interpolate between two poses along the SE(3) geodesic joining them.
///
/// Returns `T1 · exp(dist · log(T1⁻¹ · T2))`: `dist = 0` gives `T1`, `dist = 1` gives
/// `T2`. Values outside `[0, 1]` extrapolate along the same screw motion.
///
/// The relative rotation between the two poses must stay below π for the path to be
/// unique, see [`transform_logarithme`].
pub fn transform_mean(t1: &Transform, t2: &Transform, dist: f32) -> Transform {
    let delta = transform_logarithme(&(t1.inverse() * *t2));
    *t1 * velocity_exponential(&(delta * dist))
}

/// The pose halfway between `t1` and `t2`.
#[inline]
pub fn transform_midpoint(t1: &Transform, t2: &Transform) -> Transform {
    transform_mean(t1, t2, 0.5)
}

/// Twist, expressed in the frame of `current`, that moves `current` onto `target` in unit
/// time.
pub fn transform_diff_to_position(current: &Transform, target: &Transform) -> Position6D {
    let delta = transform_logarithme(&(current.inverse() * *target));
    Position6D::from_array(delta.to_array())
}
