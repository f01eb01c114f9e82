#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

/// Header layout constants.
pub mod constants;

/// Header parsing.
pub mod parse_tex;

pub use constants::TEX_HEADER_SIZE;
pub use parse_tex::{parse_texture_header, texture_payload, TextureHeader};

#[cfg(test)]
pub(crate) mod test_prelude;
