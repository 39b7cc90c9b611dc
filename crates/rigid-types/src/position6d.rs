//! Position and small-angle orientation in space.

define_vector_type!(
    /// A position together with an orientation, in a 3-dimensional space.
    ///
    /// Depending on the producer, `(wx, wy, wz)` are either roll/pitch/yaw angles
    /// (see [`Rotation3D`](crate::Rotation3D)) or a small rotation vector used for
    /// differential motion.
    Position6D,
    6,
    [
        /// Coordinate along the x axis.
        x,
        /// Coordinate along the y axis.
        y,
        /// Coordinate along the z axis.
        z,
        /// Rotation about the x axis.
        wx,
        /// Rotation about the y axis.
        wy,
        /// Rotation about the z axis.
        wz
    ]
);

impl Position6D {
    /// The translation part.
    #[inline]
    pub fn position(&self) -> crate::Position3D {
        crate::Position3D::new(self.x, self.y, self.z)
    }

    /// The rotation part.
    #[inline]
    pub fn orientation(&self) -> crate::Position3D {
        crate::Position3D::new(self.wx, self.wy, self.wz)
    }

    /// Assemble a value from its translation and rotation parts.
    #[inline]
    pub fn from_parts(position: &crate::Position3D, orientation: &crate::Position3D) -> Self {
        Self::new(
            position.x,
            position.y,
            position.z,
            orientation.x,
            orientation.y,
            orientation.z,
        )
    }
}
