#![allow(
    clippy::disallowed_types,
    reason = "This is test utilities so things like PathBuf is fine, we won't deploy this code anywhere"
)]
use std::path::PathBuf;

pub use {ndarray, tempfile::TempDir, testresult::TestResult};

/// Name of the file the example writes
pub const EXAMPLE_FILE_NAME: &str = "h5ex_t_intatt.h5";

/// The `A1` attribute contents, `v(i, j) = i*j - j` over 4x7
pub const EXPECTED_A1: [[i64; 7]; 4] = [
    [0, -1, -2, -3, -4, -5, -6],
    [0, 0, 0, 0, 0, 0, 0],
    [0, 1, 2, 3, 4, 5, 6],
    [0, 2, 4, 6, 8, 10, 12],
];

/// What the example prints to stdout after reading the attribute back
pub const EXPECTED_STDOUT: &str = "\
A1:
[[ 0 -1 -2 -3 -4 -5 -6]
 [ 0  0  0  0  0  0  0]
 [ 0  1  2  3  4  5  6]
 [ 0  2  4  6  8 10 12]]
";

pub fn expected_a1() -> ndarray::Array2<i64> {
    ndarray::arr2(&EXPECTED_A1)
}

/// The expected attribute payload as it is laid out on disk: row-major, 64-bit big-endian
pub fn expected_a1_be_bytes() -> Vec<u8> {
    EXPECTED_A1
        .iter()
        .flatten()
        .flat_map(|v| v.to_be_bytes())
        .collect()
}

/// A fresh scratch directory and the path of an HDF5 file inside it
pub fn scratch_h5(file_name: &str) -> std::io::Result<(TempDir, PathBuf)> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join(file_name);
    Ok((dir, path))
}
