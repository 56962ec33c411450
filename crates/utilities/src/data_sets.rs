use grid_downsample_core::prelude::*;
use grid_downsample_storage::{Array3, GridValue};

use rand::{rngs::StdRng, Rng, SeedableRng};

/// A cubic grid where the minimum corner of every `block_edge^3` block holds `marked_value` and every other cell is zero.
pub fn one_per_block_grid<T>(edge_length: i32, block_edge: i32, marked_value: T) -> Array3<T>
where
    T: GridValue,
{
    Array3::fill_with(Extent3i::cube(edge_length), |p| {
        if p.map_components(|c| c % block_edge) == Point3i::ZERO {
            marked_value
        } else {
            T::zero()
        }
    })
}

/// A cubic grid of uniform samples from `[0, 1)`, reproducible from `seed`.
pub fn random_grid(edge_length: i32, seed: u64) -> Array3<f64> {
    let mut rng = StdRng::seed_from_u64(seed);

    Array3::fill_with(Extent3i::cube(edge_length), |_| rng.gen())
}
