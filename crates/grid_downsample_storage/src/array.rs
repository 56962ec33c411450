//! Dense 3-dimensional arrays.
//!
//! The domain of an array is located within an ambient space, a signed integer lattice where the elements are `Point3i`.
//! This means an array contains data at exactly the set of points in an `Extent3i`, and no more. Grids read from disk or
//! produced by downsampling have their minimum at the origin.
//!
//! # Indexing
//!
//! You can index an array with 3 kinds of coordinates, with [`Get`](crate::access_traits) traits:
//!   - `Get*<Stride>`: flat array offset
//!   - `Get*<Local3i>`: point in extent-local coordinates (i.e. min = `[0, 0, 0]`)
//!   - `Get*<Point3i>`: point in global (ambient) coordinates
//!
//! Indexing assumes that the coordinates are in-bounds of the array, panicking otherwise.
//!
//! # Iteration
//!
//! Arrays also support fast iteration over extents with `for_each` and `for_each_mut`. These methods will only iterate over
//! the section of the extent which is in-bounds of the array, so it's impossible to index out of bounds.
//!
//! ```
//! use grid_downsample_core::prelude::*;
//! use grid_downsample_storage::prelude::*;
//!
//! let mut array = Array3::fill(Extent3i::cube(8), 0.0);
//!
//! // Write all points in the extent to the same value.
//! let write_extent = Extent3i::from_min_and_lub(Point3i::fill(2), Point3i::fill(4));
//! array.for_each_mut(&write_extent, |_p, value| *value = 1.0);
//!
//! // Only the points in the extent should have been written.
//! array.for_each(array.extent(), |p: Point3i, value| {
//!     if write_extent.contains(p) {
//!         assert_eq!(value, 1.0);
//!     } else {
//!         assert_eq!(value, 0.0);
//!     }
//! });
//! ```

mod coords;
mod indexer;

pub use coords::*;
pub use indexer::*;

use crate::{GetMut, GetRef, GridError, GridValue};

use grid_downsample_core::prelude::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A map from lattice location `Point3i` to data `T`, stored as a flat array on the heap.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Array3<T> {
    values: Vec<T>,
    extent: Extent3i,
}

impl<T> Array3<T> {
    /// Create a new `Array3` directly from the extent and values. The number of points in the extent must match the length of
    /// `values`.
    pub fn new(extent: Extent3i, values: Vec<T>) -> Result<Self, GridError> {
        if extent.num_points() != values.len() {
            return Err(GridError::SizeMismatch {
                expected: extent.num_points(),
                actual: values.len(),
            });
        }

        Ok(Self { values, extent })
    }

    /// Creates a map that fills the entire `extent` with the same `value`.
    pub fn fill(extent: Extent3i, value: T) -> Self
    where
        T: Clone,
    {
        Self {
            values: vec![value; extent.num_points()],
            extent,
        }
    }

    /// A cube of `edge_length` cells per axis with its minimum at the origin, filled with `value`.
    pub fn fill_cube(edge_length: i32, value: T) -> Self
    where
        T: Clone,
    {
        Self::fill(Extent3i::cube(edge_length), value)
    }

    /// Create a new array for `extent` where each point's value is determined by the `filler` function.
    pub fn fill_with(extent: Extent3i, filler: impl FnMut(Point3i) -> T) -> Self {
        // `iter_points` visits points in the same order as the flat storage.
        let values = extent.iter_points().map(filler).collect();

        Self { values, extent }
    }

    #[inline]
    pub fn extent(&self) -> &Extent3i {
        &self.extent
    }

    /// The number of cells along each axis, if the array is cubic.
    #[inline]
    pub fn edge_length(&self) -> Option<i32> {
        self.extent.edge_length()
    }

    /// Returns `true` iff this map contains point `p`.
    #[inline]
    pub fn contains(&self, p: Point3i) -> bool {
        self.extent.contains(p)
    }

    /// Returns the entire slice of values.
    #[inline]
    pub fn values_slice(&self) -> &[T] {
        &self.values
    }

    /// Returns the entire slice of values.
    #[inline]
    pub fn values_mut_slice(&mut self) -> &mut [T] {
        &mut self.values
    }

    #[inline]
    pub fn stride_from_local_point(&self, p: Local3i) -> Stride {
        Array3Indexer::stride_from_local_point(self.extent.shape, p)
    }

    /// Visit every point of `iter_extent` that is in-bounds of the array.
    #[inline]
    pub fn for_each(&self, iter_extent: &Extent3i, mut f: impl FnMut(Point3i, T))
    where
        T: Copy,
    {
        let iter_extent = iter_extent.intersection(&self.extent);
        let values = &self.values;
        Array3Indexer::for_each_point_and_stride_unchecked(
            self.extent.shape,
            Local(iter_extent.minimum - self.extent.minimum),
            iter_extent,
            |p, stride| f(p, values[stride.0]),
        );
    }

    /// Mutably visit every point of `iter_extent` that is in-bounds of the array.
    #[inline]
    pub fn for_each_mut(&mut self, iter_extent: &Extent3i, mut f: impl FnMut(Point3i, &mut T)) {
        let iter_extent = iter_extent.intersection(&self.extent);
        let values = &mut self.values;
        Array3Indexer::for_each_point_and_stride_unchecked(
            self.extent.shape,
            Local(iter_extent.minimum - self.extent.minimum),
            iter_extent,
            |p, stride| f(p, &mut values[stride.0]),
        );
    }
}

impl<T> Array3<T>
where
    T: GridValue,
{
    /// The arithmetic mean of every cell. NaN for an empty array.
    pub fn mean(&self) -> T {
        let sum = self.values.iter().fold(T::zero(), |sum, &v| sum + v);

        sum / T::from_count(self.values.len())
    }
}

//  ██████╗ ███████╗████████╗████████╗███████╗██████╗ ███████╗
// ██╔════╝ ██╔════╝╚══██╔══╝╚══██╔══╝██╔════╝██╔══██╗██╔════╝
// ██║  ███╗█████╗     ██║      ██║   █████╗  ██████╔╝███████╗
// ██║   ██║██╔══╝     ██║      ██║   ██╔══╝  ██╔══██╗╚════██║
// ╚██████╔╝███████╗   ██║      ██║   ███████╗██║  ██║███████║
//  ╚═════╝ ╚══════╝   ╚═╝      ╚═╝   ╚══════╝╚═╝  ╚═╝╚══════╝

impl<T> GetRef<Stride> for Array3<T> {
    type Data = T;

    #[inline]
    fn get_ref(&self, stride: Stride) -> &T {
        &self.values[stride.0]
    }
}

impl<T> GetMut<Stride> for Array3<T> {
    type Data = T;

    #[inline]
    fn get_mut(&mut self, stride: Stride) -> &mut T {
        &mut self.values[stride.0]
    }
}

impl<T> GetRef<Local3i> for Array3<T> {
    type Data = T;

    #[inline]
    fn get_ref(&self, p: Local3i) -> &T {
        self.get_ref(self.stride_from_local_point(p))
    }
}

impl<T> GetMut<Local3i> for Array3<T> {
    type Data = T;

    #[inline]
    fn get_mut(&mut self, p: Local3i) -> &mut T {
        let stride = self.stride_from_local_point(p);

        self.get_mut(stride)
    }
}

impl<T> GetRef<Point3i> for Array3<T> {
    type Data = T;

    #[inline]
    fn get_ref(&self, p: Point3i) -> &T {
        let local_p = p - self.extent.minimum;

        self.get_ref(Local(local_p))
    }
}

impl<T> GetMut<Point3i> for Array3<T> {
    type Data = T;

    #[inline]
    fn get_mut(&mut self, p: Point3i) -> &mut T {
        let local_p = p - self.extent.minimum;

        self.get_mut(Local(local_p))
    }
}

impl_get_via_get_ref!(Array3<T>, Stride);
impl_get_via_get_ref!(Array3<T>, Local3i);
impl_get_via_get_ref!(Array3<T>, Point3i);

// ████████╗███████╗███████╗████████╗███████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝
//    ██║   █████╗  ███████╗   ██║   ███████╗
//    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║
//    ██║   ███████╗███████║   ██║   ███████║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝

#[cfg(test)]
mod test {
    use super::*;

    use crate::Get;

    use pretty_assertions::assert_eq;

    #[test]
    fn new_rejects_wrong_number_of_values() {
        let result = Array3::new(Extent3i::cube(2), vec![0.0f32; 7]);

        assert_eq!(
            result,
            Err(GridError::SizeMismatch {
                expected: 8,
                actual: 7
            })
        );
    }

    #[test]
    fn fill_with_matches_point_lookup() {
        let extent = Extent3i::from_min_and_shape(PointN([-1, 2, 5]), PointN([3, 4, 2]));
        let array = Array3::fill_with(extent, |p| p.x() + 10 * p.y() + 100 * p.z());

        for p in extent.iter_points() {
            assert_eq!(array.get(p), p.x() + 10 * p.y() + 100 * p.z());
        }
        assert_eq!(array.get(Local(Point3i::ZERO)), -1 + 20 + 500);
        assert_eq!(array.get(Stride(1)), 20 + 500);
    }

    #[test]
    fn for_each_clips_to_array_bounds() {
        let array = Array3::fill_cube(4, 1);
        let overhanging = Extent3i::from_min_and_shape(Point3i::fill(2), Point3i::fill(8));

        let mut count = 0;
        array.for_each(&overhanging, |p, value| {
            assert!(array.contains(p));
            count += value;
        });

        assert_eq!(count, 8);
    }

    #[test]
    fn for_each_mut_writes_through_points() {
        let mut array = Array3::fill_cube(3, 0.0);
        let center = Extent3i::from_min_and_shape(Point3i::ONES, Point3i::ONES);
        array.for_each_mut(&center, |_p, value| *value = 27.0);

        assert_eq!(array.get(PointN([1, 1, 1])), 27.0);
        assert_eq!(array.mean(), 1.0);
    }

    #[test]
    fn edge_length_of_cube_only() {
        assert_eq!(Array3::fill_cube(5, 0u8).edge_length(), Some(5));

        let slab = Array3::fill(
            Extent3i::from_min_and_shape(Point3i::ZERO, PointN([5, 5, 1])),
            0u8,
        );
        assert_eq!(slab.edge_length(), None);
    }
}
