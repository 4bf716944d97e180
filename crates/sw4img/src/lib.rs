#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod cursor;
pub mod endian;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod header;
pub mod image;
pub mod layout;
pub mod patch;
pub mod stats;
pub mod tables;

#[cfg(feature = "std")]
pub mod filename;
#[cfg(feature = "std")]
pub mod synthetic;

#[cfg(feature = "array")]
mod array;

#[cfg(test)]
mod test_support;

pub use error::{Error, Result};
pub use geometry::Extent;
pub use grid::{Grid, Samples};
pub use image::{decode_image, Image, ImageKind};
pub use layout::{HEADER_SIZE, PATCH_DESCRIPTOR_SIZE};
pub use patch::Patch;
pub use stats::Statistics;
pub use tables::{Mode, Plane, Precision};

#[cfg(feature = "std")]
pub use image::{read_image, read_image_with, ImageSource};
