#[cfg(feature = "std")]
use alloc::string::String;

use crate::tables::CodeTable;

/// All errors that can occur while reading an SW4 image.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The fixed-size header could not be read or cannot drive the decode.
    #[error("malformed header: {reason} (needed {needed} bytes, {available} available)")]
    MalformedHeader {
        reason: &'static str,
        needed: usize,
        available: usize,
    },
    /// A patch descriptor or its sample buffer ran past the end of the data.
    #[error("truncated patch {patch}: needed {needed} bytes, {available} available")]
    TruncatedPatch {
        patch: usize,
        needed: usize,
        available: usize,
    },
    /// A header code has no entry in its lookup table.
    #[error("unknown {table} code: {code}")]
    UnknownCode { table: CodeTable, code: i32 },
    /// A patch declares negative grid dimensions.
    #[error("invalid dimensions for patch {patch}: ni={ni}, nj={nj}")]
    InvalidDimensions { patch: usize, ni: i32, nj: i32 },
    /// A file name does not follow the image naming convention.
    #[cfg(feature = "std")]
    #[error("unrecognized image file name: {0}")]
    FileName(String),
    /// An I/O error from the standard library.
    #[cfg(feature = "std")]
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;
