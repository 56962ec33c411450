use grid_downsample_core::Point3i;

use core::fmt;

/// Failures of grid construction and downsampling.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum GridError {
    /// The number of values given for an array does not match the number of points in its extent.
    SizeMismatch { expected: usize, actual: usize },
    /// A downsampling source or destination did not have the same length along every axis.
    NonCubicGrid { shape: Point3i },
    /// The output resolution is zero or does not evenly divide the input resolution.
    InvalidResolutionRatio { input: i32, output: i32 },
    /// A grid file edge length that is not positive, or whose cell count cannot be addressed.
    InvalidEdgeLength { edge_length: i32 },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch { expected, actual } => {
                write!(f, "size mismatch: expected {} values, got {}", expected, actual)
            }
            Self::NonCubicGrid { shape } => write!(
                f,
                "grid must be cubic, but its shape is {:?}",
                shape.0
            ),
            Self::InvalidResolutionRatio { input, output } => write!(
                f,
                "input gridsize {} is not an integer multiple of output gridsize {}",
                input, output
            ),
            Self::InvalidEdgeLength { edge_length } => write!(
                f,
                "gridsize {} is not positive or has too many cells to address",
                edge_length
            ),
        }
    }
}

impl std::error::Error for GridError {}

#[cfg(test)]
mod test {
    use super::*;

    use grid_downsample_core::PointN;

    #[test]
    fn messages_name_the_offending_sizes() {
        let e = GridError::InvalidResolutionRatio {
            input: 100,
            output: 30,
        };
        assert_eq!(
            e.to_string(),
            "input gridsize 100 is not an integer multiple of output gridsize 30"
        );

        let e = GridError::NonCubicGrid {
            shape: PointN([4, 4, 2]),
        };
        assert_eq!(e.to_string(), "grid must be cubic, but its shape is [4, 4, 2]");

        let e = GridError::InvalidEdgeLength { edge_length: -2 };
        assert_eq!(
            e.to_string(),
            "gridsize -2 is not positive or has too many cells to address"
        );
    }
}
