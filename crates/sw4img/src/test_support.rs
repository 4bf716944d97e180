//! Byte builders for unit tests.

use alloc::vec::Vec;

use crate::layout::{CREATION_TIME_LEN, HEADER_SIZE, PATCH_DESCRIPTOR_SIZE};

pub(crate) struct HeaderBytes {
    pub precision: i32,
    pub number_of_patches: i32,
    pub time: f64,
    pub plane: i32,
    pub coordinate: f64,
    pub mode: i32,
    pub grid_info: i32,
    pub creation_time: &'static str,
}

impl Default for HeaderBytes {
    fn default() -> Self {
        HeaderBytes {
            precision: 8,
            number_of_patches: 1,
            time: 0.0,
            plane: 0,
            coordinate: 0.0,
            mode: 1,
            grid_info: 0,
            creation_time: "Mon Jun  1 12:00:00 2015",
        }
    }
}

impl HeaderBytes {
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(HEADER_SIZE);
        out.extend_from_slice(&self.precision.to_le_bytes());
        out.extend_from_slice(&self.number_of_patches.to_le_bytes());
        out.extend_from_slice(&self.time.to_le_bytes());
        out.extend_from_slice(&self.plane.to_le_bytes());
        out.extend_from_slice(&self.coordinate.to_le_bytes());
        out.extend_from_slice(&self.mode.to_le_bytes());
        out.extend_from_slice(&self.grid_info.to_le_bytes());
        let mut text = [0u8; CREATION_TIME_LEN];
        let src = self.creation_time.as_bytes();
        let len = src.len().min(CREATION_TIME_LEN);
        text[..len].copy_from_slice(&src[..len]);
        out.extend_from_slice(&text);
        out
    }
}

/// Descriptor bytes for a patch with `ib = jb = 1`.
pub(crate) fn descriptor_bytes(h: f64, zmin: f64, ni: i32, nj: i32) -> Vec<u8> {
    let mut out = Vec::with_capacity(PATCH_DESCRIPTOR_SIZE);
    out.extend_from_slice(&h.to_le_bytes());
    out.extend_from_slice(&zmin.to_le_bytes());
    out.extend_from_slice(&1_i32.to_le_bytes());
    out.extend_from_slice(&ni.to_le_bytes());
    out.extend_from_slice(&1_i32.to_le_bytes());
    out.extend_from_slice(&nj.to_le_bytes());
    out
}

pub(crate) fn f64_bytes(values: &[f64]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_le_bytes()).collect()
}

pub(crate) fn f32_bytes(values: &[f32]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_le_bytes()).collect()
}
