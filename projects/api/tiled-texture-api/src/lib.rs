#![doc = include_str!("../README.MD")]
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

//! # Extracting a TEX file
//!
//! ```ignore
//! use tiled_texture_api::{extract_texture, PixelFormat};
//!
//! let file = std::fs::read("texture.tex")?;
//! let texture = extract_texture(&file, PixelFormat::Bc7Unorm)?;
//! for level in texture.layout.levels() {
//!     let pixels = &texture.data[level.linear_offset..][..level.linear_size];
//!     // ...
//! }
//! ```

extern crate alloc;

pub mod builder;
pub mod error;
pub mod extract;
pub mod transform;

pub use builder::SurfaceBuilder;
pub use error::TiledTextureError;
pub use extract::{extract_texture, ExtractedTexture};
pub use transform::{swizzle_allocating, swizzle_mip_chain_allocating, unswizzle_allocating};

pub use tiled_texture_common::{ErrorCategory, PixelFormat};
pub use tiled_texture_swizzle::{SurfaceDescriptor, SurfaceLayout};
pub use tiled_texture_tex::{parse_texture_header, TextureHeader};
pub use tiled_texture_ykcmp::{decompress, decompress_allocating, likely_ykcmp};

#[cfg(test)]
pub(crate) mod test_prelude;
