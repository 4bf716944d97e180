//! Little-endian byte conversion for SW4 image data.
//!
//! SW4 writes every header field and sample in little-endian order. These
//! helpers read native Rust values from little-endian byte slices, plus bulk
//! decoding of whole sample buffers.

use alloc::vec::Vec;

use bytemuck::pod_collect_to_vec;

/// Read a little-endian `i32` from the first 4 bytes of the slice.
#[inline]
pub fn read_i32_le(buf: &[u8]) -> i32 {
    i32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]])
}

/// Read a little-endian `f32` (IEEE 754) from the first 4 bytes of the slice.
#[inline]
pub fn read_f32_le(buf: &[u8]) -> f32 {
    f32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]])
}

/// Read a little-endian `f64` (IEEE 754) from the first 8 bytes of the slice.
#[inline]
pub fn read_f64_le(buf: &[u8]) -> f64 {
    f64::from_le_bytes([
        buf[0], buf[1], buf[2], buf[3], buf[4], buf[5], buf[6], buf[7],
    ])
}

// --- Bulk decoding ---
//
// The raw buffer is copied into a properly aligned Vec first, then each element
// is swapped to native order in place. On little-endian hosts the swap is a
// no-op.

/// Decode a buffer of little-endian `f32` values.
///
/// # Panics
/// Panics if `raw.len()` is not a multiple of 4.
pub fn decode_f32_le(raw: &[u8]) -> Vec<f32> {
    assert!(
        raw.len() % 4 == 0,
        "buffer length must be a multiple of 4"
    );
    let mut values: Vec<f32> = pod_collect_to_vec(raw);
    for v in &mut values {
        *v = f32::from_bits(u32::from_le(v.to_bits()));
    }
    values
}

/// Decode a buffer of little-endian `f64` values.
///
/// # Panics
/// Panics if `raw.len()` is not a multiple of 8.
pub fn decode_f64_le(raw: &[u8]) -> Vec<f64> {
    assert!(
        raw.len() % 8 == 0,
        "buffer length must be a multiple of 8"
    );
    let mut values: Vec<f64> = pod_collect_to_vec(raw);
    for v in &mut values {
        *v = f64::from_bits(u64::from_le(v.to_bits()));
    }
    values
}
