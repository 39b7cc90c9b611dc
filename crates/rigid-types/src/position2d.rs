//! Position in a plane.

define_vector_type!(
    /// A position in a 2-dimensional space.
    Position2D,
    2,
    [
        /// Coordinate along the x axis.
        x,
        /// Coordinate along the y axis.
        y
    ]
);

impl Position2D {
    /// The 2D cross product `x1 * y2 - y1 * x2`.
    #[inline]
    pub fn cross_product(&self, other: &Self) -> f32 {
        self.x * other.y - self.y * other.x
    }
}
