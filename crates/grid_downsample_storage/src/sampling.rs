//! Block-mean downsampling of cubic grids.
//!
//! Moving from a 256^3 grid to a 128^3 grid splits the source into disjoint 2x2x2 blocks, and each cell of the destination
//! is the mean of the block it covers. Blocks tile the source exactly, so the mean of the whole grid is conserved.
//!
//! ```
//! use grid_downsample_core::prelude::*;
//! use grid_downsample_storage::prelude::*;
//!
//! let src = Array3::fill_with(Extent3i::cube(4), |p| if p.x() < 2 { 0.0 } else { 2.0 });
//! let dst = downsample(&src, 2).unwrap();
//!
//! assert_eq!(dst.edge_length(), Some(2));
//! assert_eq!(dst.get(PointN([0, 0, 0])), 0.0);
//! assert_eq!(dst.get(PointN([1, 0, 0])), 2.0);
//! assert_eq!(dst.mean(), src.mean());
//! ```

use crate::{Array3, GridError, GridValue, Local, Local3i};

use grid_downsample_core::prelude::*;

/// The number of source cells along one axis of each averaged block.
///
/// Fails unless both resolutions are positive and `output_resolution` evenly divides `input_resolution`. Partial blocks would
/// not conserve the mean, so non-exact ratios are never rounded.
pub fn block_factor(input_resolution: i32, output_resolution: i32) -> Result<i32, GridError> {
    if input_resolution < 1 || output_resolution < 1 || input_resolution % output_resolution != 0
    {
        return Err(GridError::InvalidResolutionRatio {
            input: input_resolution,
            output: output_resolution,
        });
    }

    Ok(input_resolution / output_resolution)
}

/// Returns a new cubic grid of `output_resolution` cells per axis where each cell is the mean of the corresponding block of
/// `src`. The output has its minimum at the origin.
pub fn downsample<T>(src: &Array3<T>, output_resolution: i32) -> Result<Array3<T>, GridError>
where
    T: GridValue,
{
    let input_resolution = cubic_edge_length(src)?;
    let factor = block_factor(input_resolution, output_resolution)?;

    let mut dst = Array3::fill_cube(output_resolution, T::zero());
    downsample_with_factor(src, &mut dst, factor);

    Ok(dst)
}

/// Like `downsample`, but writes into `dst`, whose edge length determines the output resolution.
pub fn downsample_into<T>(src: &Array3<T>, dst: &mut Array3<T>) -> Result<(), GridError>
where
    T: GridValue,
{
    let input_resolution = cubic_edge_length(src)?;
    let output_resolution = cubic_edge_length(dst)?;
    let factor = block_factor(input_resolution, output_resolution)?;

    downsample_with_factor(src, dst, factor);

    Ok(())
}

/// Like `downsample`, but output Z slabs are computed in parallel. The result is identical to `downsample`.
#[cfg(feature = "rayon")]
pub fn par_downsample<T>(src: &Array3<T>, output_resolution: i32) -> Result<Array3<T>, GridError>
where
    T: GridValue,
{
    use rayon::prelude::*;

    let input_resolution = cubic_edge_length(src)?;
    let factor = block_factor(input_resolution, output_resolution)?;
    tracing::debug!(
        input_resolution,
        output_resolution,
        factor,
        "downsampling grid in parallel"
    );

    let mut dst = Array3::fill_cube(output_resolution, T::zero());
    let n = output_resolution as usize;
    dst.values_mut_slice()
        .par_chunks_mut(n * n)
        .enumerate()
        .for_each(|(z, slab)| {
            for (i, value) in slab.iter_mut().enumerate() {
                let p_dst = PointN([(i % n) as i32, (i / n) as i32, z as i32]);
                *value = block_mean(src, Local(p_dst), factor);
            }
        });

    Ok(dst)
}

fn cubic_edge_length<T>(array: &Array3<T>) -> Result<i32, GridError> {
    array.edge_length().ok_or(GridError::NonCubicGrid {
        shape: array.extent().shape,
    })
}

fn downsample_with_factor<T>(src: &Array3<T>, dst: &mut Array3<T>, factor: i32)
where
    T: GridValue,
{
    tracing::debug!(
        input_resolution = src.extent().shape.x(),
        output_resolution = dst.extent().shape.x(),
        factor,
        "downsampling grid"
    );

    let dst_min = dst.extent().minimum;
    let dst_extent = *dst.extent();
    dst.for_each_mut(&dst_extent, |p, value| {
        *value = block_mean(src, Local(p - dst_min), factor);
    });
}

/// The mean of the `factor^3` block of `src` covered by the destination cell at `p_dst`.
#[inline]
fn block_mean<T>(src: &Array3<T>, p_dst: Local3i, factor: i32) -> T
where
    T: GridValue,
{
    let block = Extent3i::from_min_and_shape(p_dst.0, Point3i::ONES) * factor + src.extent().minimum;

    let mut sum = T::zero();
    src.for_each(&block, |_p, v| sum = sum + v);

    sum / T::from_count(block.num_points())
}

// ████████╗███████╗███████╗████████╗███████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝
//    ██║   █████╗  ███████╗   ██║   ███████╗
//    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║
//    ██║   ███████╗███████║   ██║   ███████║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝
