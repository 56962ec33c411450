//! Traits defining different ways to access cells of a grid.
//!
//! The fastest way to iterate over data in an `Array3` is with a simple for loop over array indices, we call them
//! "stride"s:
//! ```
//! use grid_downsample_core::prelude::*;
//! use grid_downsample_storage::prelude::*;
//!
//! let extent = Extent3i::cube(16);
//! let mut grid = Array3::fill(extent, 0.0f64);
//!
//! for i in 0..extent.num_points() {
//!     // Use the `GetMut<Stride>` trait impl of the array.
//!     *grid.get_mut(Stride(i)) = 1.0;
//! }
//! ```
//! But this may require understanding the array layout. Indexing by `Point3i` (global) or `Local3i` (relative to the array
//! minimum) costs a couple of multiplications per lookup.

//  ██████╗ ███████╗████████╗████████╗███████╗██████╗ ███████╗
// ██╔════╝ ██╔════╝╚══██╔══╝╚══██╔══╝██╔════╝██╔══██╗██╔════╝
// ██║  ███╗█████╗     ██║      ██║   █████╗  ██████╔╝███████╗
// ██║   ██║██╔══╝     ██║      ██║   ██╔══╝  ██╔══██╗╚════██║
// ╚██████╔╝███████╗   ██║      ██║   ███████╗██║  ██║███████║
//  ╚═════╝ ╚══════╝   ╚═╝      ╚═╝   ╚══════╝╚═╝  ╚═╝╚══════╝

pub trait Get<L> {
    type Data;

    /// Get an owned value at `location`.
    fn get(&self, location: L) -> Self::Data;
}

pub trait GetRef<L> {
    type Data;

    /// Get an immutable reference to the value at `location`.
    fn get_ref(&self, location: L) -> &Self::Data;
}

pub trait GetMut<L> {
    type Data;

    /// Get a mutable reference to the value at `location`.
    fn get_mut(&mut self, location: L) -> &mut Self::Data;
}

/// Any type that can hand out references can also hand out copies.
macro_rules! impl_get_via_get_ref {
    ($map:ty, $loc:ty) => {
        impl<T> $crate::Get<$loc> for $map
        where
            T: Copy,
        {
            type Data = T;

            #[inline]
            fn get(&self, location: $loc) -> T {
                *$crate::GetRef::get_ref(self, location)
            }
        }
    };
}
