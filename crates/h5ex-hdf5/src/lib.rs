//! Writing and reading integer attributes with an explicit on-disk encoding through the HDF5
//! library.
pub mod error;
pub mod grid;
pub mod int_attribute;
pub mod raw;
pub mod storage_type;
pub(crate) mod util;

pub use {
    error::IntAttributeError,
    int_attribute::{IntAttributeLayout, StoredAttribute, read_int_attribute, write_int_attribute},
    storage_type::StorageType,
};

// File extensions we recognize as hdf5 files.
const POSSIBLE_HDF5_EXTENSIONS_CASE_INSENSITIVE: [&str; 3] = ["h5", "hdf5", "hdf"];

pub fn path_has_hdf5_extension(path: &std::path::Path) -> bool {
    let Some(extension) = path.extension() else {
        return false;
    };

    POSSIBLE_HDF5_EXTENSIONS_CASE_INSENSITIVE
        .iter()
        .any(|possible_extension| extension.eq_ignore_ascii_case(possible_extension))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_hdf5_extensions() {
        assert!(path_has_hdf5_extension(Path::new("h5ex_t_intatt.h5")));
        assert!(path_has_hdf5_extension(Path::new("dir/data.HDF5")));
        assert!(path_has_hdf5_extension(Path::new("x.Hdf")));
        assert!(!path_has_hdf5_extension(Path::new("notes.txt")));
        assert!(!path_has_hdf5_extension(Path::new("h5")));
    }
}
