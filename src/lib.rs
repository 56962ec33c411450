//! Block-mean downsampling for dense cubic grids of floating point values.
//!
//! This library is organized into several crates:
//! - **core**: lattice point and extent data types
//! - **storage**: dense `Array3` storage, block-mean downsampling, and raw binary grid files
//!
//! The `downsample_grid` binary (built with the `cli` feature) reads a raw grid file, downsamples it, and writes the result.
//!
//! ```
//! use grid_downsample::prelude::*;
//!
//! let src = Array3::fill_cube(8, 1.0f64);
//! let dst = downsample(&src, 4).unwrap();
//! assert_eq!(dst.edge_length(), Some(4));
//!
//! assert!(downsample(&src, 3).is_err());
//! ```

pub use grid_downsample_core as core;
pub use grid_downsample_storage as storage;

pub mod prelude {
    pub use super::core::prelude::*;
    pub use super::storage::prelude::*;
}
