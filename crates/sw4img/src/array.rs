//! `ndarray` views of decoded grids.

use ndarray::{Array2, ShapeError};

use crate::grid::{Grid, Samples};
use crate::patch::Patch;

impl Grid {
    /// Copy the grid into a `(rows, cols)` array, widening samples to `f64`.
    pub fn to_array2(&self) -> Result<Array2<f64>, ShapeError> {
        Array2::from_shape_vec(self.shape(), self.samples().to_f64_vec())
    }

    /// Copy the grid into a `(rows, cols)` array of single-precision samples.
    ///
    /// Returns `None` for double-precision grids.
    pub fn to_array2_f32(&self) -> Option<Result<Array2<f32>, ShapeError>> {
        match self.samples() {
            Samples::F32(v) => Some(Array2::from_shape_vec(self.shape(), v.clone())),
            Samples::F64(_) => None,
        }
    }
}

impl Patch {
    /// The patch samples in display orientation as an array.
    pub fn data_array(&self) -> Result<Array2<f64>, ShapeError> {
        self.data.to_array2()
    }
}
