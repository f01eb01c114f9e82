#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

/// Container header layout and parsing.
pub mod container;

/// Decoder for the back-reference scheme (compression type 4).
pub mod back_reference;

/// Entry point dispatching on the compression type.
pub mod decompress;

/// Error types.
pub mod error;

/// C exports for decompression.
#[cfg(feature = "c-exports")]
pub mod exports;

pub use container::*;
pub use decompress::{decompress, decompress_allocating};
pub use error::{DecompressError, MalformedStreamKind};

#[cfg(test)]
pub(crate) mod test_prelude;
