use std::path::Path;

use hdf5::Extents;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::{
    error::IntAttributeError,
    grid::DIMS,
    raw::{create_attr_as, create_dataset_as},
    storage_type::StorageType,
    util::{log_all_attributes, open_attribute, open_dataset},
};

/// Where and how the integer grid is stored inside the file.
///
/// The dataset is a scalar placeholder that only exists to carry the attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntAttributeLayout {
    pub dataset: String,
    pub attribute: String,
    pub dims: [usize; 2],
    pub dataset_storage: StorageType,
    pub attribute_storage: StorageType,
}

impl Default for IntAttributeLayout {
    fn default() -> Self {
        Self {
            dataset: "DS1".to_owned(),
            attribute: "A1".to_owned(),
            dims: DIMS,
            dataset_storage: StorageType::I32Le,
            attribute_storage: StorageType::I64Be,
        }
    }
}

/// An integer attribute as read back from the file, converted to native `i64`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredAttribute {
    pub name: String,
    /// Encoding of the elements on disk
    pub storage: StorageType,
    pub values: Array2<i64>,
}

fn check_shape(
    name: &str,
    expected: [usize; 2],
    actual: &[usize],
) -> Result<(), IntAttributeError> {
    if actual != expected.as_slice() {
        return Err(IntAttributeError::ShapeMismatch {
            name: name.to_owned(),
            expected: expected.to_vec(),
            actual: actual.to_vec(),
        });
    }
    Ok(())
}

/// Creates (or truncates) the file at `path` and stores `grid` as the layout's attribute.
///
/// Every handle is released before returning, attribute first and file last.
pub fn write_int_attribute(
    path: impl AsRef<Path>,
    layout: &IntAttributeLayout,
    grid: &Array2<i64>,
) -> Result<(), IntAttributeError> {
    let path = path.as_ref();
    check_shape(&layout.attribute, layout.dims, grid.shape())?;

    let file = hdf5::File::create(path)?;
    log::info!("Created {}", path.display());

    let dataset = create_dataset_as(
        &file,
        &layout.dataset,
        layout.dataset_storage,
        Extents::Scalar,
    )?;
    let attr = create_attr_as(
        &dataset,
        &layout.attribute,
        layout.attribute_storage,
        layout.dims,
    )?;
    attr.write(grid)?;
    log::info!(
        "Wrote {}x{} grid to attribute '{}' as {}",
        layout.dims[0],
        layout.dims[1],
        layout.attribute,
        layout.attribute_storage
    );

    drop(attr);
    drop(dataset);
    drop(file);
    Ok(())
}

/// Reopens the file at `path` read-only and reads the layout's attribute into native integers
pub fn read_int_attribute(
    path: impl AsRef<Path>,
    layout: &IntAttributeLayout,
) -> Result<StoredAttribute, IntAttributeError> {
    let path = path.as_ref();
    let file = hdf5::File::open(path)?;
    log::info!("Reopened {}", path.display());

    let dataset = open_dataset(&file, &layout.dataset, 0)?;
    log_all_attributes(&dataset);
    let attr = open_attribute(&dataset, &layout.attribute)?;

    // Size the read buffer from the attribute's own dataspace
    let shape = attr.shape();
    check_shape(&layout.attribute, layout.dims, &shape)?;
    let storage = StorageType::try_from(&attr.dtype()?)?;
    if storage != layout.attribute_storage {
        log::warn!(
            "Attribute '{}' is stored as {storage}, expected {}",
            layout.attribute,
            layout.attribute_storage
        );
    }
    let values: Array2<i64> = attr.read_2d()?;

    Ok(StoredAttribute {
        name: layout.attribute.clone(),
        storage,
        values,
    })
}
