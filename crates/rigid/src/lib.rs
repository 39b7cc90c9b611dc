#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use rigid_types as types;

#[doc(inline)]
pub use rigid_transform as transform;
