//! Random demonstration images, for exercising consumers without a file.

use rand::Rng;

use crate::geometry::Extent;
use crate::grid::Grid;
use crate::image::Image;
use crate::patch::Patch;
use crate::stats::Statistics;
use crate::tables::Precision;

/// Rows of the synthetic grid.
pub const SYNTHETIC_NI: usize = 100;
/// Columns of the synthetic grid.
pub const SYNTHETIC_NJ: usize = 200;
/// Grid spacing of the synthetic patch.
pub const SYNTHETIC_H: f64 = 100.0;

/// Extent used for synthetic patches: `(0, nj*h, zmin + ni*h, zmin)`.
///
/// Unlike decoded patches this is not padded by half a cell and the vertical
/// axis runs from bottom to top.
pub fn synthetic_extent(ni: usize, nj: usize, h: f64, zmin: f64) -> Extent {
    Extent {
        x_min: 0.0,
        x_max: nj as f64 * h,
        y_min: zmin + ni as f64 * h,
        y_max: zmin,
    }
}

/// Build a one-patch image of uniform random samples in `[-1, 1)`.
pub fn synthetic_image<R: Rng + ?Sized>(rng: &mut R) -> Image {
    let (ni, nj) = (SYNTHETIC_NI, SYNTHETIC_NJ);
    let zmin = 0.0;
    let data = Grid::from_fn(ni, nj, |_, _| 2.0 * (rng.gen::<f64>() - 0.5));
    let stats = Statistics::from_samples(data.samples().iter_f64());

    let patch = Patch {
        number: 0,
        h: SYNTHETIC_H,
        zmin,
        ib: 1,
        ni,
        jb: 1,
        nj,
        data,
        extent: synthetic_extent(ni, nj, SYNTHETIC_H, zmin),
        stats,
    };

    Image {
        filename: Some(String::from("random")),
        number_of_patches: 1,
        precision: Precision::Double,
        patches: vec![patch],
        ..Image::default()
    }
}

impl Image {
    /// A one-patch image of random samples drawn from `rng`.
    pub fn synthetic<R: Rng + ?Sized>(rng: &mut R) -> Image {
        synthetic_image(rng)
    }

    /// A one-patch image of random samples from the thread-local generator.
    pub fn random() -> Image {
        synthetic_image(&mut rand::thread_rng())
    }
}
