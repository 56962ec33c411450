use grid_downsample_core::PointN;

use core::ops::Deref;

/// Array-local coordinates.
///
/// Most commonly, you will index an array with a `PointN<N>`, which is assumed to be in global coordinates. `Local<N>` is
/// relative to the array's minimum, so `Local(Point3i::ZERO)` is always the first cell.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Local<N>(pub PointN<N>);

/// Array-local coordinates, wrapping a `Point3i`.
pub type Local3i = Local<[i32; 3]>;

impl<N> Deref for Local<N> {
    type Target = PointN<N>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// The most efficient coordinates for slice-backed arrays. A single number that translates directly to a slice offset.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Stride(pub usize);
