//! Patch record decoding.
//!
//! After the header come the fixed-size descriptors of every patch, back to
//! back, and then the sample buffers in the same order. Patch `k` holds
//! `ni * nj` samples stored row by row: `nj` rows of `ni` values.

use alloc::vec::Vec;

use log::trace;

use crate::cursor::ByteCursor;
use crate::endian::{decode_f32_le, decode_f64_le, read_f64_le, read_i32_le};
use crate::error::{Error, Result};
use crate::geometry::{orient, Extent};
use crate::grid::{Grid, Samples};
use crate::layout::{patch_offsets as off, sample_buffer_len, PATCH_DESCRIPTOR_SIZE};
use crate::stats::Statistics;
use crate::tables::{Plane, Precision};

/// The fixed-size record describing one patch's grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatchDescriptor {
    /// Grid spacing, the same along both axes.
    pub h: f64,
    /// Offset of the first row along the depth axis.
    pub zmin: f64,
    /// 1-based starting index along the first axis.
    pub ib: i32,
    /// Number of columns.
    pub ni: i32,
    /// 1-based starting index along the second axis.
    pub jb: i32,
    /// Number of rows.
    pub nj: i32,
}

/// A decoded patch before orientation: its descriptor and a `(nj, ni)` grid.
#[derive(Debug, Clone, PartialEq)]
pub struct RawPatch {
    pub descriptor: PatchDescriptor,
    /// Samples as stored, `nj` rows of `ni` values.
    pub grid: Grid,
}

fn truncated(patch: usize, needed: usize, cursor: &ByteCursor<'_>) -> Error {
    Error::TruncatedPatch {
        patch,
        needed,
        available: cursor.remaining(),
    }
}

/// Read the descriptor of patch number `patch` at the cursor.
pub fn parse_descriptor(cursor: &mut ByteCursor<'_>, patch: usize) -> Result<PatchDescriptor> {
    let buf = cursor
        .take(PATCH_DESCRIPTOR_SIZE)
        .ok_or_else(|| truncated(patch, PATCH_DESCRIPTOR_SIZE, cursor))?;
    Ok(PatchDescriptor {
        h: read_f64_le(&buf[off::H..]),
        zmin: read_f64_le(&buf[off::ZMIN..]),
        ib: read_i32_le(&buf[off::IB..]),
        ni: read_i32_le(&buf[off::NI..]),
        jb: read_i32_le(&buf[off::JB..]),
        nj: read_i32_le(&buf[off::NJ..]),
    })
}

/// Read the sample buffer described by `descriptor` and shape it `(nj, ni)`.
///
/// Both dimensions must be positive.
pub fn read_samples(
    cursor: &mut ByteCursor<'_>,
    patch: usize,
    descriptor: &PatchDescriptor,
    precision: Precision,
) -> Result<Grid> {
    let invalid = || Error::InvalidDimensions {
        patch,
        ni: descriptor.ni,
        nj: descriptor.nj,
    };
    let ni = usize::try_from(descriptor.ni).map_err(|_| invalid())?;
    let nj = usize::try_from(descriptor.nj).map_err(|_| invalid())?;
    if ni == 0 || nj == 0 {
        return Err(invalid());
    }

    let needed = sample_buffer_len(ni, nj, precision.width())
        .ok_or_else(|| truncated(patch, usize::MAX, cursor))?;
    let raw = cursor
        .take(needed)
        .ok_or_else(|| truncated(patch, needed, cursor))?;

    let samples = match precision {
        Precision::Single => Samples::F32(decode_f32_le(raw)),
        Precision::Double => Samples::F64(decode_f64_le(raw)),
    };
    Grid::from_samples(nj, ni, samples).ok_or_else(invalid)
}

/// Decode the descriptor block of `count` patches, then their sample buffers.
///
/// Any failure aborts the whole decode; no partially decoded list is returned.
pub fn decode_patches(
    cursor: &mut ByteCursor<'_>,
    precision: Precision,
    count: usize,
) -> Result<Vec<RawPatch>> {
    // The count comes from the file; don't let it size the allocation beyond
    // what the remaining bytes could possibly hold.
    let mut descriptors =
        Vec::with_capacity(count.min(cursor.remaining() / PATCH_DESCRIPTOR_SIZE));
    for number in 0..count {
        descriptors.push(parse_descriptor(cursor, number)?);
    }

    let mut patches = Vec::with_capacity(descriptors.len());
    for (number, descriptor) in descriptors.into_iter().enumerate() {
        let start = cursor.position();
        let grid = read_samples(cursor, number, &descriptor, precision)?;
        trace!(
            "patch {number}: ni={} nj={} h={} zmin={}, samples at offset {start}",
            descriptor.ni,
            descriptor.nj,
            descriptor.h,
            descriptor.zmin
        );
        patches.push(RawPatch { descriptor, grid });
    }
    Ok(patches)
}

/// One rectangular grid of samples and its placement within an image.
#[derive(Debug, Clone, PartialEq)]
pub struct Patch {
    /// Zero-based position in the image's patch list.
    pub number: usize,
    /// Grid spacing.
    pub h: f64,
    /// Offset of the first row along the depth axis.
    pub zmin: f64,
    /// 1-based starting index along the first axis.
    pub ib: i32,
    /// Samples per stored row.
    pub ni: usize,
    /// 1-based starting index along the second axis.
    pub jb: i32,
    /// Stored rows.
    pub nj: usize,
    /// Samples in display orientation: `(nj, ni)`, or `(ni, nj)` for Z planes.
    pub data: Grid,
    /// Physical area covered by `data`.
    pub extent: Extent,
    /// Statistics over every sample of the patch.
    pub stats: Statistics,
}

impl Patch {
    /// Compute statistics from the raw samples, then orient the grid for
    /// `plane`.
    pub fn from_raw(number: usize, raw: RawPatch, plane: Plane) -> Patch {
        let RawPatch { descriptor, grid } = raw;
        let (nj, ni) = grid.shape();
        let stats = Statistics::from_samples(grid.samples().iter_f64());
        let oriented = orient(plane, grid, descriptor.h, descriptor.zmin);
        Patch {
            number,
            h: descriptor.h,
            zmin: descriptor.zmin,
            ib: descriptor.ib,
            ni,
            jb: descriptor.jb,
            nj,
            data: oriented.grid,
            extent: oriented.extent,
            stats,
        }
    }

    /// Smallest sample.
    pub fn min(&self) -> f64 {
        self.stats.min
    }

    /// Largest sample.
    pub fn max(&self) -> f64 {
        self.stats.max
    }

    /// Population standard deviation of the samples.
    pub fn std(&self) -> f64 {
        self.stats.std
    }

    /// Root mean square of the samples.
    pub fn rms(&self) -> f64 {
        self.stats.rms
    }
}
