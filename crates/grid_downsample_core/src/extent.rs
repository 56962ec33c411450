use crate::{Point3i, PointN};

use core::ops::{Add, Mul, Range, Sub};
use itertools::{iproduct, ConsTuples, Product};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An N-dimensional extent. This is mathematically the Cartesian product of a half-closed interval `[a, b)` in each dimension.
/// You can also just think of it as an axis-aligned box with some shape and a minimum point.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct ExtentN<N> {
    /// The least point contained in the extent.
    pub minimum: PointN<N>,
    /// The length of each dimension.
    pub shape: PointN<N>,
}

/// A 3-dimensional extent with scalar type `i32`.
pub type Extent3i = ExtentN<[i32; 3]>;

impl<N> ExtentN<N> {
    /// The default representation of an extent as the minimum point and shape.
    #[inline]
    pub fn from_min_and_shape(minimum: PointN<N>, shape: PointN<N>) -> Self {
        Self { minimum, shape }
    }
}

impl Extent3i {
    /// The cube with minimum at the origin and `edge_length` points along each axis.
    #[inline]
    pub fn cube(edge_length: i32) -> Self {
        Self::from_min_and_shape(Point3i::ZERO, Point3i::fill(edge_length))
    }

    /// An alternative representation of an extent as the minimum point and least upper bound.
    #[inline]
    pub fn from_min_and_lub(minimum: Point3i, least_upper_bound: Point3i) -> Self {
        // We want to avoid negative shape components.
        let shape = (least_upper_bound - minimum).join(&Point3i::ZERO);

        Self { minimum, shape }
    }

    /// The number of points contained in the extent, or `None` if that number does not fit in a `usize`.
    #[inline]
    pub fn checked_num_points(&self) -> Option<usize> {
        if self.shape.x() <= 0 || self.shape.y() <= 0 || self.shape.z() <= 0 {
            return Some(0);
        }

        (self.shape.x() as usize)
            .checked_mul(self.shape.y() as usize)?
            .checked_mul(self.shape.z() as usize)
    }

    /// The number of points contained in the extent. Saturates at `usize::MAX`, which no allocation can satisfy.
    #[inline]
    pub fn num_points(&self) -> usize {
        self.checked_num_points().unwrap_or(usize::MAX)
    }

    /// Returns `true` iff the number of points in the extent is 0.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.num_points() == 0
    }

    /// The least point `p` for which all points `q` in the extent satisfy `q < p`.
    #[inline]
    pub fn least_upper_bound(&self) -> Point3i {
        self.minimum + self.shape
    }

    /// Returns `true` iff the point `p` is contained in this extent.
    #[inline]
    pub fn contains(&self, p: Point3i) -> bool {
        let lub = self.least_upper_bound();

        self.minimum <= p && p < lub
    }

    /// Returns the extent containing only the points in both `self` and `other`.
    #[inline]
    pub fn intersection(&self, other: &Self) -> Self {
        let minimum = self.minimum.join(&other.minimum);
        let lub = self.least_upper_bound().meet(&other.least_upper_bound());

        Self::from_min_and_lub(minimum, lub)
    }

    /// The length of every edge, iff all edges have the same length.
    #[inline]
    pub fn edge_length(&self) -> Option<i32> {
        if self.shape.is_cube() {
            Some(self.shape.x())
        } else {
            None
        }
    }

    /// Iterate over all points in the extent, with X varying fastest and Z slowest.
    /// ```
    /// # use grid_downsample_core::prelude::*;
    /// #
    /// let extent = Extent3i::from_min_and_shape(PointN([0, 0, 0]), PointN([2, 2, 1]));
    /// let points = extent.iter_points().collect::<Vec<_>>();
    /// assert_eq!(points, vec![
    ///     PointN([0, 0, 0]), PointN([1, 0, 0]), PointN([0, 1, 0]), PointN([1, 1, 0])
    /// ]);
    /// ```
    #[inline]
    pub fn iter_points(&self) -> Extent3PointIter {
        let lub = self.least_upper_bound();

        Extent3PointIter {
            // iproduct is opposite of row-major order.
            product_iter: iproduct!(
                self.minimum.z()..lub.z(),
                self.minimum.y()..lub.y(),
                self.minimum.x()..lub.x()
            ),
        }
    }
}

type RangeProduct2 = Product<Range<i32>, Range<i32>>;
type RangeProduct3 = Product<RangeProduct2, Range<i32>>;

/// An iterator over all points in an `Extent3i`.
pub struct Extent3PointIter {
    product_iter: ConsTuples<RangeProduct3, ((i32, i32), i32)>,
}

impl Iterator for Extent3PointIter {
    type Item = Point3i;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.product_iter.next().map(|(z, y, x)| PointN([x, y, z]))
    }
}

impl Add<Point3i> for Extent3i {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Point3i) -> Self::Output {
        Self::from_min_and_shape(self.minimum + rhs, self.shape)
    }
}

impl Sub<Point3i> for Extent3i {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Point3i) -> Self::Output {
        Self::from_min_and_shape(self.minimum - rhs, self.shape)
    }
}

impl Mul<i32> for Extent3i {
    type Output = Self;

    /// Scales both the minimum and the shape, mapping a coarse extent onto the fine lattice it covers.
    #[inline]
    fn mul(self, rhs: i32) -> Self::Output {
        Self::from_min_and_shape(self.minimum * rhs, self.shape * rhs)
    }
}

// ████████╗███████╗███████╗████████╗███████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝
//    ██║   █████╗  ███████╗   ██║   ███████╗
//    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║
//    ██║   ███████╗███████║   ██║   ███████║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn row_major_extent_iter() {
        let extent = Extent3i::from_min_and_shape(PointN([0, 0, 0]), PointN([2, 2, 2]));

        let points: Vec<_> = extent.iter_points().collect();

        assert_eq!(
            points,
            vec![
                PointN([0, 0, 0]),
                PointN([1, 0, 0]),
                PointN([0, 1, 0]),
                PointN([1, 1, 0]),
                PointN([0, 0, 1]),
                PointN([1, 0, 1]),
                PointN([0, 1, 1]),
                PointN([1, 1, 1]),
            ]
        );
    }

    #[test]
    fn scaling_a_block_covers_the_fine_cells() {
        let coarse_cell = Extent3i::from_min_and_shape(PointN([1, 0, 2]), Point3i::ONES);
        let fine_block = coarse_cell * 2;

        assert_eq!(fine_block.minimum, PointN([2, 0, 4]));
        assert_eq!(fine_block.shape, Point3i::fill(2));
        assert_eq!(fine_block.num_points(), 8);
        assert!(fine_block.contains(PointN([3, 1, 5])));
        assert!(!fine_block.contains(PointN([4, 1, 5])));
    }

    #[test]
    fn edge_length_only_for_cubes() {
        assert_eq!(Extent3i::cube(16).edge_length(), Some(16));
        assert_eq!(
            Extent3i::from_min_and_shape(Point3i::ZERO, PointN([16, 16, 8])).edge_length(),
            None
        );
    }

    #[test]
    fn num_points_does_not_wrap_for_large_cubes() {
        assert_eq!(Extent3i::cube(1291).num_points(), 1291 * 1291 * 1291);
        assert_eq!(Extent3i::cube(2048).checked_num_points(), 2048usize.checked_pow(3));
        assert_eq!(Extent3i::cube(i32::MAX).checked_num_points(), None);
        assert_eq!(Extent3i::cube(i32::MAX).num_points(), usize::MAX);
    }

    #[test]
    fn num_points_of_degenerate_shapes_is_zero() {
        assert_eq!(Extent3i::cube(0).num_points(), 0);
        assert_eq!(Extent3i::cube(-2).checked_num_points(), Some(0));
        assert_eq!(
            Extent3i::from_min_and_shape(Point3i::ZERO, PointN([-4, -4, 4])).num_points(),
            0
        );
    }

    #[test]
    fn intersection_clamps_to_empty() {
        let a = Extent3i::cube(4);
        let b = Extent3i::cube(4) + Point3i::fill(10);

        assert!(a.intersection(&b).is_empty());
        assert_eq!(a.intersection(&(a + Point3i::fill(2))).shape, Point3i::fill(2));
    }
}
