//! Patch orientation and physical extent.
//!
//! Samples are cell centered. An extent reaches half a grid spacing past the
//! outermost sample centers so that adjacent cells tile without gaps.

use crate::grid::Grid;
use crate::tables::Plane;

/// Physical bounding box `(x_min, x_max, y_min, y_max)` covered by a grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Default for Extent {
    fn default() -> Self {
        Extent {
            x_min: 0.0,
            x_max: 1.0,
            y_min: 0.0,
            y_max: 1.0,
        }
    }
}

impl Extent {
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    pub fn as_tuple(&self) -> (f64, f64, f64, f64) {
        (self.x_min, self.x_max, self.y_min, self.y_max)
    }
}

/// Extent of a patch with `ni` columns and `nj` rows as stored on disk.
///
/// For X and Y planes the horizontal axis follows `ni` from zero and the
/// vertical axis follows `nj` from `zmin`. Z-plane patches are shown
/// transposed, so the horizontal axis follows `nj` and both axes start at
/// zero.
pub fn extent(plane: Plane, ni: usize, nj: usize, h: f64, zmin: f64) -> Extent {
    let half = h / 2.0;
    // Cell count minus one, as a float; zero cells gives -1.
    let last = |n: usize| n as f64 - 1.0;
    match plane {
        Plane::X | Plane::Y => Extent {
            x_min: 0.0 - half,
            x_max: last(ni) * h + half,
            y_min: zmin - half,
            y_max: zmin + last(nj) * h + half,
        },
        Plane::Z => Extent {
            x_min: 0.0 - half,
            x_max: last(nj) * h + half,
            y_min: 0.0 - half,
            y_max: last(ni) * h + half,
        },
    }
}

/// A grid in display orientation together with its extent.
#[derive(Debug, Clone, PartialEq)]
pub struct Oriented {
    pub grid: Grid,
    pub extent: Extent,
    pub transposed: bool,
}

/// Whether patches on `plane` are transposed for display.
pub fn is_transposed(plane: Plane) -> bool {
    matches!(plane, Plane::Z)
}

/// Orient a raw `(nj, ni)` grid for `plane` and compute its extent.
pub fn orient(plane: Plane, raw: Grid, h: f64, zmin: f64) -> Oriented {
    let (nj, ni) = raw.shape();
    let extent = extent(plane, ni, nj, h, zmin);
    if is_transposed(plane) {
        Oriented {
            grid: raw.transposed(),
            extent,
            transposed: true,
        }
    } else {
        Oriented {
            grid: raw,
            extent,
            transposed: false,
        }
    }
}
