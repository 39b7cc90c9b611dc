//! Planar pose.

use crate::Position2D;

/// A pose in a 2-dimensional space.
///
/// On a plane, a pose is fully defined by the position `(x, y)` and the heading `theta`
/// in radians. The heading is stored as given, without wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pose2D {
    /// Position along the x axis.
    pub x: f32,
    /// Position along the y axis.
    pub y: f32,
    /// Heading, rotation about the z axis.
    pub theta: f32,
}

impl Pose2D {
    /// Create a new pose.
    #[inline]
    pub fn new(x: f32, y: f32, theta: f32) -> Self {
        Self { x, y, theta }
    }

    /// Create a pose with every component set to `value`.
    #[inline]
    pub fn splat(value: f32) -> Self {
        Self::new(value, value, value)
    }

    /// Create a pose from a slice holding `[x, y, theta]`.
    ///
    /// A slice whose length is not 3 yields the zero pose.
    pub fn from_slice(values: &[f32]) -> Self {
        match values {
            [x, y, theta] => Self::new(*x, *y, *theta),
            _ => {
                log::debug!(
                    "Pose2D: expected 3 components, got {}; using zero",
                    values.len()
                );
                Self::default()
            }
        }
    }

    /// Convert to a vector `[x, y, theta]`.
    pub fn to_vec(self) -> Vec<f32> {
        vec![self.x, self.y, self.theta]
    }

    /// The position part of the pose.
    #[inline]
    pub fn position(&self) -> Position2D {
        Position2D::new(self.x, self.y)
    }

    /// Squared distance between the positions of two poses. The heading is ignored.
    #[inline]
    pub fn distance_squared(&self, other: &Self) -> f32 {
        self.position().distance_squared(&other.position())
    }

    /// Distance between the positions of two poses. The heading is ignored.
    #[inline]
    pub fn distance(&self, other: &Self) -> f32 {
        self.distance_squared(other).sqrt()
    }

    /// The inverse pose, such that `p * p.inverse()` is the identity.
    pub fn inverse(&self) -> Self {
        let (s, c) = self.theta.sin_cos();
        Self {
            x: -c * self.x - s * self.y,
            y: s * self.x - c * self.y,
            theta: -self.theta,
        }
    }

    /// Check that every component is within `epsilon` of the other pose.
    pub fn is_near(&self, other: &Self, epsilon: f32) -> bool {
        (self.x - other.x).abs() <= epsilon
            && (self.y - other.y).abs() <= epsilon
            && (self.theta - other.theta).abs() <= epsilon
    }

    /// [`is_near`](Self::is_near) with [`DEFAULT_EPSILON`](crate::DEFAULT_EPSILON).
    #[inline]
    pub fn is_near_default(&self, other: &Self) -> bool {
        self.is_near(other, crate::DEFAULT_EPSILON)
    }
}

impl std::ops::Add for Pose2D {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.theta + rhs.theta)
    }
}

impl std::ops::Sub for Pose2D {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.theta - rhs.theta)
    }
}

impl std::ops::Neg for Pose2D {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y, -self.theta)
    }
}

impl std::ops::AddAssign for Pose2D {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl std::ops::SubAssign for Pose2D {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

/// Pose composition: `rhs` is expressed in the frame of `self`.
impl std::ops::Mul for Pose2D {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let (s, c) = self.theta.sin_cos();
        Self {
            x: self.x + c * rhs.x - s * rhs.y,
            y: self.y + s * rhs.x + c * rhs.y,
            theta: self.theta + rhs.theta,
        }
    }
}

impl std::ops::MulAssign for Pose2D {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

#[cfg(feature = "approx")]
impl approx::AbsDiffEq for Pose2D {
    type Epsilon = f32;

    #[inline]
    fn default_epsilon() -> Self::Epsilon {
        <f32 as approx::AbsDiffEq>::default_epsilon()
    }

    #[inline]
    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        approx::AbsDiffEq::abs_diff_eq(&self.x, &other.x, epsilon)
            && approx::AbsDiffEq::abs_diff_eq(&self.y, &other.y, epsilon)
            && approx::AbsDiffEq::abs_diff_eq(&self.theta, &other.theta, epsilon)
    }
}

#[cfg(feature = "approx")]
impl approx::RelativeEq for Pose2D {
    #[inline]
    fn default_max_relative() -> Self::Epsilon {
        <f32 as approx::RelativeEq>::default_max_relative()
    }

    #[inline]
    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        approx::RelativeEq::relative_eq(&self.x, &other.x, epsilon, max_relative)
            && approx::RelativeEq::relative_eq(&self.y, &other.y, epsilon, max_relative)
            && approx::RelativeEq::relative_eq(&self.theta, &other.theta, epsilon, max_relative)
    }
}
