//! Dense storage and block-mean downsampling for cubic grids of floating point values.
//!
//! The core types are:
//!   - `Array3`: a dense 3-dimensional array over an `Extent3i`
//!   - `GridValue`: the cell types that can be averaged and stored on disk (`f32` and `f64`)
//!
//! Downsampling lives in the `sampling` module and raw binary grid files in `grid_file`.

#[macro_use]
pub mod access_traits;
pub mod array;
pub mod error;
pub mod grid_file;
pub mod sampling;
pub mod value;

pub use access_traits::*;
pub use array::*;
pub use error::*;
pub use grid_file::*;
pub use sampling::*;
pub use value::*;

pub mod prelude {
    #[cfg(feature = "rayon")]
    pub use super::par_downsample;
    pub use super::{
        block_factor, downsample, downsample_into, read_grid, write_grid, Array3, Get, GetMut,
        GetRef, GridError, GridFileError, GridValue, Local, Local3i, Precision, Stride,
    };
}
