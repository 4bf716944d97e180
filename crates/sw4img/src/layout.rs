//! On-disk layout of SW4 image files.
//!
//! An image file is one fixed-size header record, then `number_of_patches`
//! fixed-size patch descriptors back to back, then the sample buffer of each
//! patch in the same order. Every
//! multi-byte field is stored little-endian, the native order of the machines
//! the simulator runs on. Records are packed: there is no alignment padding
//! between fields.

/// Width of the creation-time string at the end of the header.
pub const CREATION_TIME_LEN: usize = 25;

/// Header field offsets, in bytes from the start of the file.
pub mod header_offsets {
    pub const PRECISION: usize = 0;
    pub const NUMBER_OF_PATCHES: usize = 4;
    pub const TIME: usize = 8;
    pub const PLANE: usize = 16;
    pub const COORDINATE: usize = 20;
    pub const MODE: usize = 28;
    pub const GRID_INFO: usize = 32;
    pub const CREATION_TIME: usize = 36;
}

/// Patch descriptor field offsets, in bytes from the start of the descriptor.
pub mod patch_offsets {
    pub const H: usize = 0;
    pub const ZMIN: usize = 8;
    pub const IB: usize = 16;
    pub const NI: usize = 20;
    pub const JB: usize = 24;
    pub const NJ: usize = 28;
}

/// Size of the file header record in bytes.
pub const HEADER_SIZE: usize = header_offsets::CREATION_TIME + CREATION_TIME_LEN;

/// Size of one patch descriptor record in bytes.
pub const PATCH_DESCRIPTOR_SIZE: usize = patch_offsets::NJ + 4;

// int32 precision, int32 patches, f64 time, int32 plane, f64 coordinate,
// int32 mode, int32 grid info, creation time.
const _: () = assert!(HEADER_SIZE == 4 + 4 + 8 + 4 + 8 + 4 + 4 + CREATION_TIME_LEN);
// f64 h, f64 zmin, int32 ib, int32 ni, int32 jb, int32 nj.
const _: () = assert!(PATCH_DESCRIPTOR_SIZE == 8 + 8 + 4 + 4 + 4 + 4);

/// Returns the byte length of a sample buffer holding `ni * nj` samples of
/// `width` bytes each, or `None` if the product overflows `usize`.
pub const fn sample_buffer_len(ni: usize, nj: usize, width: usize) -> Option<usize> {
    match ni.checked_mul(nj) {
        Some(count) => count.checked_mul(width),
        None => None,
    }
}
