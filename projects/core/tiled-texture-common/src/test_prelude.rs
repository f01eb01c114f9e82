//! Common test imports for the common crate.
#![allow(unused_imports)]

extern crate alloc;

pub use alloc::{vec, vec::Vec};
pub use rstest::rstest;
