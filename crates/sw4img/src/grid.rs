//! Two-dimensional sample grids.

use alloc::vec::Vec;

use crate::tables::Precision;

/// Sample values kept in their on-disk precision.
#[derive(Debug, Clone, PartialEq)]
pub enum Samples {
    /// Single precision, 4 bytes per sample.
    F32(Vec<f32>),
    /// Double precision, 8 bytes per sample.
    F64(Vec<f64>),
}

impl Samples {
    /// Number of samples.
    pub fn len(&self) -> usize {
        match self {
            Samples::F32(v) => v.len(),
            Samples::F64(v) => v.len(),
        }
    }

    /// Whether there are no samples.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The precision the samples were stored with.
    pub fn precision(&self) -> Precision {
        match self {
            Samples::F32(_) => Precision::Single,
            Samples::F64(_) => Precision::Double,
        }
    }

    /// Sample `i`, widened to `f64`.
    pub fn get(&self, i: usize) -> Option<f64> {
        match self {
            Samples::F32(v) => v.get(i).map(|&x| x as f64),
            Samples::F64(v) => v.get(i).copied(),
        }
    }

    /// Iterate over all samples, widened to `f64`.
    pub fn iter_f64(&self) -> impl Iterator<Item = f64> + '_ {
        let (single, double) = match self {
            Samples::F32(v) => (Some(v.iter().map(|&x| x as f64)), None),
            Samples::F64(v) => (None, Some(v.iter().copied())),
        };
        single
            .into_iter()
            .flatten()
            .chain(double.into_iter().flatten())
    }

    /// All samples widened to `f64`.
    pub fn to_f64_vec(&self) -> Vec<f64> {
        self.iter_f64().collect()
    }
}

/// A row-major grid of `rows * cols` samples.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    samples: Samples,
}

impl Grid {
    /// Wrap a flat sample buffer as a `rows x cols` grid.
    ///
    /// Returns `None` if the buffer length is not `rows * cols`.
    pub fn from_samples(rows: usize, cols: usize, samples: Samples) -> Option<Self> {
        if rows.checked_mul(cols)? != samples.len() {
            return None;
        }
        Some(Grid {
            rows,
            cols,
            samples,
        })
    }

    /// Build a double-precision `rows x cols` grid, calling `f(row, col)` in
    /// row-major order.
    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> f64,
    {
        let mut values = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                values.push(f(r, c));
            }
        }
        Grid {
            rows,
            cols,
            samples: Samples::F64(values),
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of samples, `rows * cols`.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the grid holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The flat row-major sample buffer.
    pub fn samples(&self) -> &Samples {
        &self.samples
    }

    /// Unwrap the flat row-major sample buffer.
    pub fn into_samples(self) -> Samples {
        self.samples
    }

    /// The sample at `(row, col)`, widened to `f64`.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.samples.get(row * self.cols + col)
    }

    /// Row `row` widened to `f64`.
    pub fn row(&self, row: usize) -> Option<Vec<f64>> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        Some(
            (start..start + self.cols)
                .filter_map(|i| self.samples.get(i))
                .collect(),
        )
    }

    /// Swap rows and columns, producing a `cols x rows` grid.
    pub fn transposed(&self) -> Grid {
        let samples = match &self.samples {
            Samples::F32(v) => Samples::F32(transpose(v, self.rows, self.cols)),
            Samples::F64(v) => Samples::F64(transpose(v, self.rows, self.cols)),
        };
        Grid {
            rows: self.cols,
            cols: self.rows,
            samples,
        }
    }
}

fn transpose<T: Copy>(src: &[T], rows: usize, cols: usize) -> Vec<T> {
    let mut out = Vec::with_capacity(src.len());
    for c in 0..cols {
        for r in 0..rows {
            out.push(src[r * cols + c]);
        }
    }
    out
}
