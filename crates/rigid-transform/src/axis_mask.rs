//! Degree-of-freedom selection on transforms.
//!
//! A controller that only acts on some axes keeps the selected components of a pose and
//! neutralizes the others: unselected translations are zeroed and the rotation is reduced
//! to the rotations about the selected axes.

use glam::DVec3;
use rigid_types::{AxisMask, Position3D, Rotation, Rotation3D, Transform};

use crate::projection::project_on_unit_axis;

fn select(mask: AxisMask, bit: AxisMask, value: f32) -> f32 {
    if mask.contains(bit) {
        value
    } else {
        0.0
    }
}

fn pick(mask: AxisMask, bit: AxisMask, desired: f32, reference: f32) -> f32 {
    if mask.contains(bit) {
        desired
    } else {
        reference
    }
}

fn masked_rotation(rot: &Rotation, mask: AxisMask) -> Rotation {
    match mask.rotation() {
        AxisMask::ROT => *rot,
        AxisMask::NONE => Rotation::IDENTITY,
        AxisMask::WX => project_on_unit_axis(rot, DVec3::X),
        AxisMask::WY => project_on_unit_axis(rot, DVec3::Y),
        AxisMask::WZ => project_on_unit_axis(rot, DVec3::Z),
        // two axes
        bits => {
            let rpy = Rotation3D::from_rotation(rot);
            Rotation::from_rotation3d(&Rotation3D::new(
                select(bits, AxisMask::WX, rpy.wx),
                select(bits, AxisMask::WY, rpy.wy),
                select(bits, AxisMask::WZ, rpy.wz),
            ))
        }
    }
}

/// Restrict a transform to the degrees of freedom selected by `mask`.
///
/// - Unselected translation components are set to zero.
/// - The rotation is kept when every rotation bit is set and replaced by the identity when
///   none is.
/// - With a single rotation bit, the rotation is projected onto that axis (see
///   [`rotation_axis_projection`](crate::projection::rotation_axis_projection)).
/// - With two rotation bits, the roll, pitch and yaw of the rotation are extracted, the
///   unselected angle is zeroed and the rotation is rebuilt.
///
/// Applying the same mask twice gives the same result as applying it once.
pub fn axis_mask_to_transform_on(t: &Transform, mask: AxisMask) -> Transform {
    let pos = t.translation();
    let translation = Position3D::new(
        select(mask, AxisMask::X, pos.x),
        select(mask, AxisMask::Y, pos.y),
        select(mask, AxisMask::Z, pos.z),
    );
    Transform::new(&masked_rotation(&t.rotation(), mask), &translation)
}

/// Merge two poses degree of freedom by degree of freedom.
///
/// Each component selected by `mask` is taken from `desired`, the others from `reference`.
/// Rotations are mixed on their roll, pitch and yaw angles, unless all or none of the
/// rotation bits are set, in which case the whole rotation block of `desired`, respectively
/// `reference`, is copied as is.
pub fn compute_mix_transform_with_axis_mask(
    desired: &Transform,
    reference: &Transform,
    mask: AxisMask,
) -> Transform {
    let (d, r) = (desired.translation(), reference.translation());
    let translation = Position3D::new(
        pick(mask, AxisMask::X, d.x, r.x),
        pick(mask, AxisMask::Y, d.y, r.y),
        pick(mask, AxisMask::Z, d.z, r.z),
    );

    let rotation = match mask.rotation() {
        AxisMask::ROT => desired.rotation(),
        AxisMask::NONE => reference.rotation(),
        bits => {
            let d = Rotation3D::from_rotation(&desired.rotation());
            let r = Rotation3D::from_rotation(&reference.rotation());
            Rotation::from_rotation3d(&Rotation3D::new(
                pick(bits, AxisMask::WX, d.wx, r.wx),
                pick(bits, AxisMask::WY, d.wy, r.wy),
                pick(bits, AxisMask::WZ, d.wz, r.wz),
            ))
        }
    };

    Transform::new(&rotation, &translation)
}

/// Apply [`axis_mask_to_transform_on`] to every transform of a sequence.
pub fn filter_transform(transforms: &[Transform], mask: AxisMask) -> Vec<Transform> {
    transforms
        .iter()
        .map(|t| axis_mask_to_transform_on(t, mask))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPSILON: f32 = 1e-5;

    fn sample() -> Transform {
        Transform::new(
            &Rotation::from_rotation3d(&Rotation3D::new(0.3, -0.2, 1.1)),
            &Position3D::new(1.0, 2.0, 3.0),
        )
    }

    #[test]
    fn test_all_and_none() {
        let t = sample();
        assert_eq!(axis_mask_to_transform_on(&t, AxisMask::ALL), t);
        assert_eq!(
            axis_mask_to_transform_on(&t, AxisMask::NONE),
            Transform::IDENTITY
        );
    }

    #[test]
    fn test_translation_only() {
        let t = sample();
        let out = axis_mask_to_transform_on(&t, AxisMask::X | AxisMask::Z);
        assert_eq!(out.translation(), Position3D::new(1.0, 0.0, 3.0));
        assert_eq!(out.rotation(), Rotation::IDENTITY);

        let out = axis_mask_to_transform_on(&t, AxisMask::VEL);
        assert_eq!(out.translation(), t.translation());
    }

    #[test]
    fn test_single_rotation_axis() {
        let t = Transform::new(&Rotation::from_rot_z(0.7), &Position3D::default());
        let out = axis_mask_to_transform_on(&t, AxisMask::WZ);
        assert!(out.is_near(&t, EPSILON));

        let out = axis_mask_to_transform_on(&t, AxisMask::WX);
        assert!(out.is_near(&Transform::IDENTITY, EPSILON));
    }

    #[test]
    fn test_two_rotation_axes() {
        let t = sample();
        let out = axis_mask_to_transform_on(&t, AxisMask::WX | AxisMask::WZ);
        let rpy = Rotation3D::from_rotation(&out.rotation());
        assert_relative_eq!(rpy.wx, 0.3, epsilon = EPSILON);
        assert_relative_eq!(rpy.wy, 0.0, epsilon = EPSILON);
        assert_relative_eq!(rpy.wz, 1.1, epsilon = EPSILON);
        assert_eq!(out.translation(), Position3D::default());
    }

    #[test]
    fn test_idempotent() {
        let t = sample();
        for bits in 0..=63u8 {
            let mask = AxisMask::from_bits_truncate(bits);
            let once = axis_mask_to_transform_on(&t, mask);
            let twice = axis_mask_to_transform_on(&once, mask);
            assert!(twice.is_near(&once, EPSILON), "mask {bits}");
        }
    }

    #[test]
    fn test_mix() {
        let desired = sample();
        let reference = Transform::new(
            &Rotation::from_rotation3d(&Rotation3D::new(-0.5, 0.4, 0.0)),
            &Position3D::new(-1.0, -2.0, -3.0),
        );

        assert_eq!(
            compute_mix_transform_with_axis_mask(&desired, &reference, AxisMask::ALL),
            desired
        );
        assert_eq!(
            compute_mix_transform_with_axis_mask(&desired, &reference, AxisMask::NONE),
            reference
        );

        let out =
            compute_mix_transform_with_axis_mask(&desired, &reference, AxisMask::XY | AxisMask::WZ);
        assert_eq!(out.translation(), Position3D::new(1.0, 2.0, -3.0));
        let rpy = Rotation3D::from_rotation(&out.rotation());
        assert!(rpy.is_near(&Rotation3D::new(-0.5, 0.4, 1.1), EPSILON));
    }

    #[test]
    fn test_filter() {
        let poses = vec![sample(), Transform::IDENTITY, sample().inverse()];
        let out = filter_transform(&poses, AxisMask::XY);
        assert_eq!(out.len(), poses.len());
        for (o, p) in out.iter().zip(poses.iter()) {
            assert_eq!(*o, axis_mask_to_transform_on(p, AxisMask::XY));
            assert_relative_eq!(o.r3_c4, 0.0);
        }
        assert!(filter_transform(&[], AxisMask::ALL).is_empty());
    }
}
