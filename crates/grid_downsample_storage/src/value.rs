use bytemuck::Pod;
use core::fmt::Debug;
use num::Float;

/// A floating point cell value that can be averaged and stored in raw binary grid files.
///
/// Implemented for `f32` ("float" precision) and `f64` ("double" precision).
pub trait GridValue: Float + Debug + Default + Pod + Send + Sync {
    /// Converts a number of cells into a divisor.
    fn from_count(count: usize) -> Self;
}

impl GridValue for f32 {
    #[inline]
    fn from_count(count: usize) -> Self {
        count as f32
    }
}

impl GridValue for f64 {
    #[inline]
    fn from_count(count: usize) -> Self {
        count as f64
    }
}
