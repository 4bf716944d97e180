//! Property-based tests for geometry and statistics.
//!
//! These check the extent padding and statistics invariants over randomized
//! grids, independently of any file I/O.

use proptest::prelude::*;
use sw4img::geometry::{extent, orient};
use sw4img::{Grid, Plane, Samples, Statistics};

fn plane() -> impl Strategy<Value = Plane> {
    prop_oneof![Just(Plane::X), Just(Plane::Y), Just(Plane::Z)]
}

proptest! {
    /// Every extent reaches exactly h/2 past the outermost sample centers.
    #[test]
    fn prop_extent_padding_is_half_spacing(
        plane in plane(),
        ni in 1usize..500,
        nj in 1usize..500,
        h in 0.5f64..1000.0,
        zmin in -5000.0f64..5000.0,
    ) {
        let e = extent(plane, ni, nj, h, zmin);
        let (along_x, along_y, y0) = match plane {
            Plane::Z => (nj, ni, 0.0),
            Plane::X | Plane::Y => (ni, nj, zmin),
        };
        let tol = 1e-9 * (1.0 + h * (ni.max(nj) as f64) + zmin.abs());

        prop_assert!((e.x_min - (0.0 - h / 2.0)).abs() <= tol);
        prop_assert!((e.x_max - ((along_x - 1) as f64 * h + h / 2.0)).abs() <= tol);
        prop_assert!((e.y_min - (y0 - h / 2.0)).abs() <= tol);
        prop_assert!((e.y_max - (y0 + (along_y - 1) as f64 * h + h / 2.0)).abs() <= tol);
        prop_assert!((e.width() - along_x as f64 * h).abs() <= tol);
        prop_assert!((e.height() - along_y as f64 * h).abs() <= tol);
        prop_assert!(e.x_min < e.x_max);
        prop_assert!(e.y_min < e.y_max);
    }

    /// Orientation only transposes Z planes and never changes the sample count.
    #[test]
    fn prop_orient_preserves_cardinality(
        plane in plane(),
        rows in 1usize..20,
        cols in 1usize..20,
    ) {
        let raw = Grid::from_fn(rows, cols, |r, c| (r * cols + c) as f64);
        let o = orient(plane, raw.clone(), 10.0, 0.0);
        prop_assert_eq!(o.grid.len(), rows * cols);
        if plane == Plane::Z {
            prop_assert!(o.transposed);
            prop_assert_eq!(o.grid.shape(), (cols, rows));
            prop_assert_eq!(o.grid, raw.transposed());
        } else {
            prop_assert!(!o.transposed);
            prop_assert_eq!(o.grid, raw);
        }
    }

    /// Statistics match a direct two-pass recomputation.
    #[test]
    fn prop_statistics_match_direct_formulas(
        values in prop::collection::vec(-1.0e6f64..1.0e6, 1..400),
    ) {
        let s = Statistics::from_samples(values.iter().copied());
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let var = values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n;
        let rms = (values.iter().map(|v| v * v).sum::<f64>() / n).sqrt();
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        prop_assert_eq!(s.min, min);
        prop_assert_eq!(s.max, max);
        prop_assert!((s.rms - rms).abs() <= 1e-9 * (1.0 + rms));
        prop_assert!((s.std - var.sqrt()).abs() <= 1e-6 * (1.0 + var.sqrt()));
    }

    /// Statistics do not depend on orientation.
    #[test]
    fn prop_statistics_invariant_under_transpose(
        values in prop::collection::vec(-10.0f32..10.0, 12),
    ) {
        let g = Grid::from_samples(3, 4, Samples::F32(values)).unwrap();
        let a = Statistics::from_samples(g.samples().iter_f64());
        let b = Statistics::from_samples(g.transposed().samples().iter_f64());
        prop_assert_eq!(a.min, b.min);
        prop_assert_eq!(a.max, b.max);
        prop_assert!((a.rms - b.rms).abs() <= 1e-12 * (1.0 + a.rms));
        prop_assert!((a.std - b.std).abs() <= 1e-9 * (1.0 + a.std));
    }

    /// All-negative grids keep max below zero and rms equal to rms of |x|.
    #[test]
    fn prop_all_negative(values in prop::collection::vec(-100.0f64..-0.001, 1..100)) {
        let s = Statistics::from_samples(values.iter().copied());
        let flipped = Statistics::from_samples(values.iter().map(|v| -v));
        prop_assert!(s.max < 0.0);
        prop_assert_eq!(s.rms, flipped.rms);
        prop_assert_eq!(s.min, -flipped.max);
    }
}

#[test]
fn all_zero_grid_statistics() {
    let s = Statistics::from_samples(std::iter::repeat(0.0).take(50));
    assert_eq!((s.min, s.max, s.std, s.rms), (0.0, 0.0, 0.0, 0.0));
}
