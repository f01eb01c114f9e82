#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

pub mod engine;
pub mod error;
pub mod geometry;
pub mod gob;
pub mod image;
pub mod surface;

/// C exports for the swizzle entry points.
#[cfg(feature = "c-exports")]
pub mod c_api;

pub use engine::{swizzle_level, SwizzleDirection, SwizzleParams};
pub use error::SwizzleError;
pub use image::{swizzle_image, swizzle_mip_chain, unswizzle_image};
pub use surface::{LevelLayout, SurfaceDescriptor, SurfaceLayout};

#[cfg(test)]
pub(crate) mod test_prelude;
