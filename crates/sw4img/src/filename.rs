//! Image file naming convention.
//!
//! The simulator names image files
//! `<name>.cycle=<int>.<plane>=<coordinate>.<mode>.sw4img`. Files without the
//! `.sw4img` extension use the older four-part name with no extension and are
//! not decoded.

use std::path::Path;

use crate::error::{Error, Result};

/// Extension of natively decodable image files, without the dot.
pub const NATIVE_EXTENSION: &str = "sw4img";

/// Fields carried by an image file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileNameInfo {
    pub name: String,
    pub cycle: i64,
    /// Plane token as written, e.g. `"z"`.
    pub plane: String,
    /// Coordinate token as written, e.g. `"0"` or `"2500.5"`.
    pub coordinate: String,
    /// Mode token as written, e.g. `"velmag"`.
    pub mode: String,
    /// Whether the file uses the native binary format.
    pub is_native: bool,
}

/// Extracts [`FileNameInfo`] from an image path.
pub trait FileNameParser {
    fn parse(&self, path: &Path) -> Result<FileNameInfo>;
}

/// Parser for the simulator's own naming convention.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sw4FileNames;

impl FileNameParser for Sw4FileNames {
    fn parse(&self, path: &Path) -> Result<FileNameInfo> {
        let bad = || Error::FileName(path.display().to_string());

        let basename = path.file_name().and_then(|s| s.to_str()).ok_or_else(bad)?;
        let is_native = path.extension().and_then(|s| s.to_str()) == Some(NATIVE_EXTENSION);
        let fields = if is_native {
            path.file_stem().and_then(|s| s.to_str()).ok_or_else(bad)?
        } else {
            basename
        };

        // Split from the right so the base name may itself contain dots.
        let mut parts = fields.rsplitn(4, '.');
        let mode = parts.next().ok_or_else(bad)?;
        let plane_part = parts.next().ok_or_else(bad)?;
        let cycle_part = parts.next().ok_or_else(bad)?;
        let name = parts.next().ok_or_else(bad)?;

        let cycle = cycle_part
            .rsplit('=')
            .next()
            .and_then(|s| s.parse::<i64>().ok())
            .ok_or_else(bad)?;

        let (plane, coordinate) = plane_part.split_once('=').ok_or_else(bad)?;
        if coordinate.contains('=') {
            return Err(bad());
        }

        Ok(FileNameInfo {
            name: name.to_string(),
            cycle,
            plane: plane.to_string(),
            coordinate: coordinate.to_string(),
            mode: mode.to_string(),
            is_native,
        })
    }
}
