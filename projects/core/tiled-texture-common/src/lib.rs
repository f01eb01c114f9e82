#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

pub mod error;
pub mod extent;
pub mod math;
pub mod pixel_format;

pub use error::{ErrorCategory, PixelFormatError};
pub use extent::{Extent2D, Extent3D};
pub use pixel_format::{PixelFormat, PixelFormatInfo, MAX_PIXEL_FORMAT};

#[cfg(test)]
pub(crate) mod test_prelude;
