//! The core data types for addressing cells of a 3D integer lattice:
//! - `PointN`: an N-dimensional point, most importantly `Point3i`
//! - `ExtentN`: an N-dimensional extent, most importantly `Extent3i`

pub mod extent;
pub mod point;

pub use extent::{Extent3PointIter, Extent3i, ExtentN};
pub use point::{Point3, Point3i, PointN};

pub mod prelude {
    pub use super::{Extent3i, ExtentN, Point3, Point3i, PointN};
}
