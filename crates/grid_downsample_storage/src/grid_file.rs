//! Raw binary grid files.
//!
//! A file holds exactly `edge_length^3` cells in native byte order with no header, in the same order as `Array3` storage. The
//! cell type is given out of band by a `Precision`, so the file size is the only consistency check available.

use crate::{Array3, GridError, GridValue};

use grid_downsample_core::prelude::*;

use core::fmt;
use core::str::FromStr;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

/// The width of each cell stored in a grid file.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Precision {
    /// 32-bit IEEE float (`f32`).
    Float,
    /// 64-bit IEEE float (`f64`).
    Double,
}

impl Precision {
    pub fn byte_size(self) -> usize {
        match self {
            Self::Float => core::mem::size_of::<f32>(),
            Self::Double => core::mem::size_of::<f64>(),
        }
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Float => "float",
            Self::Double => "double",
        })
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParsePrecisionError(String);

impl fmt::Display for ParsePrecisionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown precision {:?}; the accepted values are \"float\" and \"double\"",
            self.0
        )
    }
}

impl std::error::Error for ParsePrecisionError {}

impl FromStr for Precision {
    type Err = ParsePrecisionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "float" => Ok(Self::Float),
            "double" => Ok(Self::Double),
            other => Err(ParsePrecisionError(other.to_string())),
        }
    }
}

#[derive(Debug)]
pub enum GridFileError {
    Io(io::Error),
    /// The file does not hold exactly `edge_length^3` cells of the requested precision.
    FileSize { expected: u64, actual: u64 },
    Grid(GridError),
}

impl fmt::Display for GridFileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "grid file I/O failed: {}", e),
            Self::FileSize { expected, actual } => write!(
                f,
                "grid file is {} bytes, but {} bytes were expected",
                actual, expected
            ),
            Self::Grid(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for GridFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Grid(e) => Some(e),
            Self::FileSize { .. } => None,
        }
    }
}

impl From<io::Error> for GridFileError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<GridError> for GridFileError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

/// Reads a cubic grid of `edge_length` cells per axis, with its minimum at the origin.
pub fn read_grid<T>(path: impl AsRef<Path>, edge_length: i32) -> Result<Array3<T>, GridFileError>
where
    T: GridValue,
{
    let path = path.as_ref();
    let _span = tracing::info_span!("read_grid", path = %path.display(), edge_length).entered();

    let extent = Extent3i::cube(edge_length);
    let num_cells = extent
        .checked_num_points()
        .filter(|&n| edge_length > 0 && n.checked_mul(core::mem::size_of::<T>()).is_some())
        .ok_or(GridError::InvalidEdgeLength { edge_length })?;
    let expected = (num_cells * core::mem::size_of::<T>()) as u64;

    let mut file = File::open(path)?;
    let actual = file.metadata()?.len();
    if actual != expected {
        return Err(GridFileError::FileSize { expected, actual });
    }

    let mut values = vec![T::zeroed(); num_cells];
    file.read_exact(bytemuck::cast_slice_mut(&mut values))?;
    tracing::debug!(num_cells = values.len(), "read grid");

    Ok(Array3::new(extent, values)?)
}

/// Writes the cells of `grid` verbatim, in storage order.
pub fn write_grid<T>(path: impl AsRef<Path>, grid: &Array3<T>) -> Result<(), GridFileError>
where
    T: GridValue,
{
    let path = path.as_ref();
    let _span = tracing::info_span!("write_grid", path = %path.display()).entered();

    let mut file = File::create(path)?;
    file.write_all(bytemuck::cast_slice(grid.values_slice()))?;
    file.flush()?;
    tracing::debug!(num_cells = grid.values_slice().len(), "wrote grid");

    Ok(())
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

    use crate::downsample;

    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn ramp_grid(edge_length: i32) -> Array3<f64> {
        Array3::fill_with(Extent3i::cube(edge_length), |p| {
            0.5 * f64::from(p.x()) - f64::from(p.y() * p.z())
        })
    }

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "grid_downsample_{}_{}.bin",
            std::process::id(),
            name
        ))
    }

    #[test]
    fn double_grid_survives_write_and_read() {
        let path = scratch_path("double");
        let grid = ramp_grid(8);

        write_grid(&path, &grid).unwrap();
        let read: Array3<f64> = read_grid(&path, 8).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(read, grid);
    }

    #[test]
    fn float_grid_has_four_bytes_per_cell() {
        let path = scratch_path("float");
        let grid = Array3::fill_with(Extent3i::cube(4), |p| (p.x() * p.y() + p.z()) as f32);

        write_grid(&path, &grid).unwrap();
        let len = std::fs::metadata(&path).unwrap().len();
        let read: Array3<f32> = read_grid(&path, 4).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(len, 64 * Precision::Float.byte_size() as u64);
        assert_eq!(read, grid);
    }

    #[test]
    fn wrong_file_size_is_rejected() {
        let path = scratch_path("size");
        write_grid(&path, &Array3::fill_cube(4, 1.0f32)).unwrap();

        // Reading 4^3 floats as doubles needs twice the bytes.
        let result: Result<Array3<f64>, _> = read_grid(&path, 4);
        std::fs::remove_file(&path).unwrap();

        match result {
            Err(GridFileError::FileSize { expected, actual }) => {
                assert_eq!(expected, 512);
                assert_eq!(actual, 256);
            }
            other => panic!("expected a file size error, got {:?}", other),
        }
    }

    #[test]
    fn empty_file_is_not_a_large_grid() {
        let path = scratch_path("empty_large");
        std::fs::File::create(&path).unwrap();

        let result: Result<Array3<f32>, _> = read_grid(&path, 2048);
        std::fs::remove_file(&path).unwrap();

        match result {
            Err(GridFileError::FileSize { expected, actual }) => {
                assert_eq!(expected, 2048u64.pow(3) * 4);
                assert_eq!(actual, 0);
            }
            // Too many cells to address on narrow targets.
            Err(GridFileError::Grid(GridError::InvalidEdgeLength { edge_length })) => {
                assert_eq!(edge_length, 2048);
            }
            other => panic!("expected the empty file to be rejected, got {:?}", other),
        }
    }

    #[test]
    fn non_positive_edge_length_is_rejected_before_io() {
        let path = scratch_path("empty_non_positive");
        std::fs::File::create(&path).unwrap();

        let negative: Result<Array3<f64>, _> = read_grid(&path, -2);
        let zero: Result<Array3<f64>, _> = read_grid(&path, 0);
        let missing: Result<Array3<f64>, _> = read_grid(scratch_path("never_created"), 0);
        std::fs::remove_file(&path).unwrap();

        for result in vec![negative, zero, missing] {
            assert!(matches!(
                result,
                Err(GridFileError::Grid(GridError::InvalidEdgeLength { .. }))
            ));
        }
    }

    #[test]
    fn unaddressable_edge_length_is_rejected() {
        let result: Result<Array3<f64>, _> = read_grid(scratch_path("never_created"), i32::MAX);

        assert!(matches!(
            result,
            Err(GridFileError::Grid(GridError::InvalidEdgeLength {
                edge_length: i32::MAX
            }))
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result: Result<Array3<f32>, _> = read_grid(scratch_path("missing"), 4);

        assert!(matches!(result, Err(GridFileError::Io(_))));
    }

    #[test]
    fn downsampled_file_round_trip() {
        let in_path = scratch_path("pipeline_in");
        let out_path = scratch_path("pipeline_out");
        write_grid(&in_path, &ramp_grid(16)).unwrap();

        let input: Array3<f64> = read_grid(&in_path, 16).unwrap();
        let output = downsample(&input, 4).unwrap();
        write_grid(&out_path, &output).unwrap();
        let reread: Array3<f64> = read_grid(&out_path, 4).unwrap();

        std::fs::remove_file(&in_path).unwrap();
        std::fs::remove_file(&out_path).unwrap();

        assert_eq!(reread, output);
        assert!((reread.mean() - input.mean()).abs() < 1e-6);
    }

    #[test]
    fn precision_parses_accepted_names_only() {
        assert_eq!("float".parse::<Precision>(), Ok(Precision::Float));
        assert_eq!("double".parse::<Precision>(), Ok(Precision::Double));
        assert!("int".parse::<Precision>().is_err());
        assert_eq!(Precision::Double.to_string(), "double");
        assert_eq!(Precision::Double.byte_size(), 8);
    }
}
