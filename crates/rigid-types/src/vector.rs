//! Macro to define a flat vector-like value type.
//!
//! Positions, velocities and roll/pitch/yaw triples all share the same shape: a handful of
//! named `f32` components with componentwise arithmetic, a euclidean norm and an
//! epsilon comparison. The macro below generates that boilerplate once.
//!
//! # Arguments
//!
//! * `name`   - The name of the value type.
//! * `len`    - The number of components.
//! * `fields` - The component names, in storage order.
//!
macro_rules! define_vector_type {
    (
        $(#[$meta:meta])*
        $name:ident,
        $len:literal,
        [$($(#[$fmeta:meta])* $field:ident),+]
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Default)]
        pub struct $name {
            $(
                $(#[$fmeta])*
                pub $field: f32,
            )+
        }

        impl $name {
            /// Number of components.
            pub const LEN: usize = $len;

            /// Create a new value from its components.
            #[inline]
            pub fn new($($field: f32),+) -> Self {
                Self { $($field),+ }
            }

            /// Create a value with every component set to `value`.
            #[inline]
            pub fn splat(value: f32) -> Self {
                Self { $($field: value),+ }
            }

            /// Create a value from an array of components.
            #[inline]
            pub fn from_array(arr: [f32; $len]) -> Self {
                let [$($field),+] = arr;
                Self { $($field),+ }
            }

            /// Convert to an array of components.
            #[inline]
            pub fn to_array(self) -> [f32; $len] {
                [$(self.$field),+]
            }

            /// Create a value from a slice.
            ///
            /// A slice whose length differs from the number of components yields the all-zero
            /// value instead of an error.
            pub fn from_slice(values: &[f32]) -> Self {
                match <[f32; $len]>::try_from(values) {
                    Ok(arr) => Self::from_array(arr),
                    Err(_) => {
                        log::debug!(
                            "{}: expected {} components, got {}; using zero",
                            stringify!($name),
                            $len,
                            values.len()
                        );
                        Self::default()
                    }
                }
            }

            /// Convert to a vector of components.
            pub fn to_vec(self) -> Vec<f32> {
                self.to_array().to_vec()
            }

            /// Dot product with another value.
            #[inline]
            pub fn dot(&self, other: &Self) -> f32 {
                0.0 $(+ self.$field * other.$field)+
            }

            /// Squared euclidean norm.
            #[inline]
            pub fn norm_squared(&self) -> f32 {
                self.dot(self)
            }

            /// Euclidean norm.
            #[inline]
            pub fn norm(&self) -> f32 {
                self.norm_squared().sqrt()
            }

            /// Squared euclidean distance to another value.
            #[inline]
            pub fn distance_squared(&self, other: &Self) -> f32 {
                (*self - *other).norm_squared()
            }

            /// Euclidean distance to another value.
            #[inline]
            pub fn distance(&self, other: &Self) -> f32 {
                self.distance_squared(other).sqrt()
            }

            /// Divide every component by `value`.
            ///
            /// # Errors
            ///
            /// Returns [`MathError::DivisionByZero`](crate::MathError::DivisionByZero) if
            /// `value` is zero.
            pub fn try_div(&self, value: f32) -> Result<Self, crate::MathError> {
                if value == 0.0 {
                    return Err(crate::MathError::DivisionByZero(stringify!($name)));
                }
                Ok(Self { $($field: self.$field / value),+ })
            }

            /// Scale the value to unit norm.
            ///
            /// # Errors
            ///
            /// Returns [`MathError::DivisionByZero`](crate::MathError::DivisionByZero) if
            /// the norm is zero.
            pub fn normalize(&self) -> Result<Self, crate::MathError> {
                self.try_div(self.norm())
            }

            /// Check that every component is within `epsilon` of the other value.
            pub fn is_near(&self, other: &Self, epsilon: f32) -> bool {
                $((self.$field - other.$field).abs() <= epsilon)&&+
            }

            /// [`is_near`](Self::is_near) with [`DEFAULT_EPSILON`](crate::DEFAULT_EPSILON).
            #[inline]
            pub fn is_near_default(&self, other: &Self) -> bool {
                self.is_near(other, crate::DEFAULT_EPSILON)
            }

            /// Check that every component is finite.
            #[inline]
            pub fn is_finite(&self) -> bool {
                $(self.$field.is_finite())&&+
            }
        }

        impl From<[f32; $len]> for $name {
            #[inline]
            fn from(arr: [f32; $len]) -> Self {
                Self::from_array(arr)
            }
        }

        impl From<$name> for [f32; $len] {
            #[inline]
            fn from(v: $name) -> Self {
                v.to_array()
            }
        }

        impl std::ops::Add for $name {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self::Output {
                Self { $($field: self.$field + rhs.$field),+ }
            }
        }

        impl std::ops::Sub for $name {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self::Output {
                Self { $($field: self.$field - rhs.$field),+ }
            }
        }

        impl std::ops::Neg for $name {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self::Output {
                Self { $($field: -self.$field),+ }
            }
        }

        impl std::ops::AddAssign for $name {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl std::ops::SubAssign for $name {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl std::ops::Mul<f32> for $name {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: f32) -> Self::Output {
                Self { $($field: self.$field * rhs),+ }
            }
        }

        impl std::ops::Mul<$name> for f32 {
            type Output = $name;

            #[inline]
            fn mul(self, rhs: $name) -> Self::Output {
                rhs * self
            }
        }

        impl std::ops::MulAssign<f32> for $name {
            #[inline]
            fn mul_assign(&mut self, rhs: f32) {
                *self = *self * rhs;
            }
        }

        #[cfg(feature = "approx")]
        impl approx::AbsDiffEq for $name {
            type Epsilon = f32;

            #[inline]
            fn default_epsilon() -> Self::Epsilon {
                <f32 as approx::AbsDiffEq>::default_epsilon()
            }

            #[inline]
            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                $(approx::AbsDiffEq::abs_diff_eq(&self.$field, &other.$field, epsilon))&&+
            }
        }

        #[cfg(feature = "approx")]
        impl approx::RelativeEq for $name {
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
                $(approx::RelativeEq::relative_eq(&self.$field, &other.$field, epsilon, max_relative))&&+
            }
        }
    };
}
