use thiserror::Error;

#[derive(Debug, Error)]
pub enum IntAttributeError {
    #[error("HDF5 error: {0}")]
    Hdf5(#[from] hdf5::Error),
    #[error("No '{name}' dataset in {file}")]
    MissingDataset { name: String, file: String },
    #[error("No '{name}' attribute on dataset '{dataset}'. Attributes in dataset: {available}")]
    MissingAttribute {
        name: String,
        dataset: String,
        available: String,
    },
    #[error("Expected {expected} dimensions in dataset {name}, got: {actual}")]
    UnexpectedRank {
        name: String,
        expected: usize,
        actual: usize,
    },
    #[error("Expected shape {expected:?} for '{name}', got {actual:?}")]
    ShapeMismatch {
        name: String,
        expected: Vec<usize>,
        actual: Vec<usize>,
    },
    #[error("Unsupported integer encoding: {0}")]
    UnsupportedEncoding(String),
    #[error("Invalid HDF5 object name {0:?}: contains a NUL byte")]
    InvalidName(String),
    #[error("Failed creating {kind} '{name}' as {storage}: {source}")]
    Create {
        kind: &'static str,
        name: String,
        storage: &'static str,
        #[source]
        source: hdf5::Error,
    },
}
