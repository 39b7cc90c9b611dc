//! Roll, pitch and yaw parametrization of a rotation.

use crate::Rotation;

define_vector_type!(
    /// A rotation expressed as roll, pitch and yaw angles, in radians.
    ///
    /// The matching rotation matrix is `Rz(wz) · Ry(wy) · Rx(wx)`: roll about x is applied
    /// first, then pitch about y, then yaw about z, all about fixed axes.
    Rotation3D,
    3,
    [
        /// Roll, rotation about the x axis.
        wx,
        /// Pitch, rotation about the y axis.
        wy,
        /// Yaw, rotation about the z axis.
        wz
    ]
);

impl Rotation3D {
    /// Extract roll, pitch and yaw from a rotation matrix.
    ///
    /// Pitch is returned in `[-π/2, π/2]`, roll and yaw in `(-π, π]`. At pitch ±π/2
    /// (gimbal lock) roll and yaw are not separable and the split is arbitrary.
    pub fn from_rotation(rot: &Rotation) -> Self {
        let wx = rot.r3_c2.atan2(rot.r3_c3);
        let wy = (-rot.r3_c1).atan2((rot.r3_c2 * rot.r3_c2 + rot.r3_c3 * rot.r3_c3).sqrt());
        let wz = rot.r2_c1.atan2(rot.r1_c1);
        Self { wx, wy, wz }
    }

    /// Convert to a rotation matrix.
    #[inline]
    pub fn to_rotation(&self) -> Rotation {
        Rotation::from_rotation3d(self)
    }
}

impl Rotation {
    /// Build a rotation matrix from roll, pitch and yaw: `Rz(wz) · Ry(wy) · Rx(wx)`.
    pub fn from_rotation3d(rot: &Rotation3D) -> Self {
        let (sx, cx) = rot.wx.sin_cos();
        let (sy, cy) = rot.wy.sin_cos();
        let (sz, cz) = rot.wz.sin_cos();

        Self::from_array([
            cz * cy,
            cz * sy * sx - sz * cx,
            cz * sy * cx + sz * sx,
            sz * cy,
            sz * sy * sx + cz * cx,
            sz * sy * cx - cz * sx,
            -sy,
            cy * sx,
            cy * cx,
        ])
    }
}

impl From<&Rotation> for Rotation3D {
    fn from(rot: &Rotation) -> Self {
        Self::from_rotation(rot)
    }
}

impl From<&Rotation3D> for Rotation {
    fn from(rot: &Rotation3D) -> Self {
        Self::from_rotation3d(rot)
    }
}
