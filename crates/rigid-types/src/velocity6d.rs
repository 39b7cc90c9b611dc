//! Twist: linear and angular velocity.

define_vector_type!(
    /// A 6-dimensional velocity (twist), element of se(3).
    ///
    /// The linear part `(xd, yd, zd)` comes first, followed by the angular part
    /// `(wxd, wyd, wzd)`.
    Velocity6D,
    6,
    [
        /// Linear velocity along x.
        xd,
        /// Linear velocity along y.
        yd,
        /// Linear velocity along z.
        zd,
        /// Angular velocity about x.
        wxd,
        /// Angular velocity about y.
        wyd,
        /// Angular velocity about z.
        wzd
    ]
);

impl Velocity6D {
    /// The linear part of the twist.
    #[inline]
    pub fn linear(&self) -> crate::Position3D {
        crate::Position3D::new(self.xd, self.yd, self.zd)
    }

    /// The angular part of the twist.
    #[inline]
    pub fn angular(&self) -> crate::Position3D {
        crate::Position3D::new(self.wxd, self.wyd, self.wzd)
    }

    /// Assemble a twist from its linear and angular parts.
    #[inline]
    pub fn from_parts(linear: &crate::Position3D, angular: &crate::Position3D) -> Self {
        Self::new(
            linear.x, linear.y, linear.z, angular.x, angular.y, angular.z,
        )
    }
}
