use crate::array::{Local3i, Stride};

use grid_downsample_core::prelude::*;

/// Translates array-local points into `Stride`s for a flat array where X varies fastest, then Y, then Z.
pub struct Array3Indexer;

impl Array3Indexer {
    /// `p` must be in-bounds of `s`. The offset is computed in `usize`, since a cubic grid's cell count can exceed `i32`.
    #[inline]
    pub fn stride_from_local_point(s: Point3i, p: Local3i) -> Stride {
        let (sx, sy) = (s.x() as usize, s.y() as usize);

        Stride((p.z() as usize * sy + p.y() as usize) * sx + p.x() as usize)
    }

    /// Visits every point of `iter_extent` (in global coordinates) along with its stride into an array of `array_shape`
    /// whose local origin corresponds to the global point `index_min`. Nothing is bounds checked.
    #[inline]
    pub fn for_each_point_and_stride_unchecked(
        array_shape: Point3i,
        index_min: Local3i,
        iter_extent: Extent3i,
        mut f: impl FnMut(Point3i, Stride),
    ) {
        let iter_lub = iter_extent.least_upper_bound();
        let mut s = Array3ForEachState::new(array_shape, index_min);
        s.start_z();
        for z in iter_extent.minimum.z()..iter_lub.z() {
            s.start_y();
            for y in iter_extent.minimum.y()..iter_lub.y() {
                s.start_x();
                for x in iter_extent.minimum.x()..iter_lub.x() {
                    f(PointN([x, y, z]), s.stride());
                    s.incr_x();
                }
                s.incr_y();
            }
            s.incr_z();
        }
    }
}

struct Array3ForEachState {
    x_stride: usize,
    y_stride: usize,
    z_stride: usize,
    x_start: usize,
    y_start: usize,
    z_start: usize,
    x_i: usize,
    y_i: usize,
    z_i: usize,
}

impl Array3ForEachState {
    fn new(array_shape: Point3i, index_min: Local3i) -> Self {
        let x_stride = 1usize;
        let y_stride = array_shape.x() as usize;
        let z_stride = array_shape.y() as usize * array_shape.x() as usize;
        let x_start = x_stride * index_min.x() as usize;
        let y_start = y_stride * index_min.y() as usize;
        let z_start = z_stride * index_min.z() as usize;

        Self {
            x_stride,
            y_stride,
            z_stride,
            x_start,
            y_start,
            z_start,
            x_i: 0,
            y_i: 0,
            z_i: 0,
        }
    }

    fn stride(&self) -> Stride {
        Stride(self.x_i)
    }

    fn start_z(&mut self) {
        self.z_i = self.z_start;
    }
    fn start_y(&mut self) {
        self.y_i = self.z_i + self.y_start;
    }
    fn start_x(&mut self) {
        self.x_i = self.y_i + self.x_start;
    }

    fn incr_x(&mut self) {
        self.x_i += self.x_stride;
    }
    fn incr_y(&mut self) {
        self.y_i += self.y_stride;
    }
    fn incr_z(&mut self) {
        self.z_i += self.z_stride;
    }
}

// ████████╗███████╗███████╗████████╗███████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝
//    ██║   █████╗  ███████╗   ██║   ███████╗
//    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║
//    ██║   ███████╗███████║   ██║   ███████║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝
