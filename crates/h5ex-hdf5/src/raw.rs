#![allow(
    unsafe_code,
    reason = "The high level binding always stores the native type, creating with an explicit file datatype needs the C API"
)]
//! Object creation with an explicit on-disk datatype.
//!
//! The C calls run under the binding's global lock, and every id they hand out is wrapped in the
//! binding's owned handle right away, so it is closed on drop like any other [`hdf5`] object.

use std::ffi::CString;

use hdf5::{Attribute, Dataset, Dataspace, Extents, Location, h5check};
use hdf5_sys::{h5a, h5d, h5p::H5P_DEFAULT};

use crate::{error::IntAttributeError, storage_type::StorageType};

fn c_name(name: &str) -> Result<CString, IntAttributeError> {
    CString::new(name).map_err(|_nul| IntAttributeError::InvalidName(name.to_owned()))
}

/// Creates dataset `name` under `parent` whose elements are stored as `storage`
pub fn create_dataset_as(
    parent: &Location,
    name: &str,
    storage: StorageType,
    extents: impl Into<Extents>,
) -> Result<Dataset, IntAttributeError> {
    let name_c = c_name(name)?;
    let space = Dataspace::try_new(extents)?;
    let dataset = hdf5::sync::sync(|| {
        // SAFETY: `parent` and `space` hold valid ids, the type id is a library constant and
        // `name_c` outlives the call.
        let id = h5check(unsafe {
            h5d::H5Dcreate2(
                parent.id(),
                name_c.as_ptr(),
                storage.file_type_id(),
                space.id(),
                H5P_DEFAULT,
                H5P_DEFAULT,
                H5P_DEFAULT,
            )
        })?;
        // SAFETY: `id` is a fresh, non-negative dataset id from `H5Dcreate2` that nothing else owns.
        unsafe { hdf5::from_id::<Dataset>(id) }
    })
    .map_err(|source| IntAttributeError::Create {
        kind: "dataset",
        name: name.to_owned(),
        storage: storage.hdf5_name(),
        source,
    })?;
    log::debug!("Created dataset '{name}' as {storage}");
    Ok(dataset)
}

/// Creates attribute `name` on `parent` whose elements are stored as `storage`
pub fn create_attr_as(
    parent: &Location,
    name: &str,
    storage: StorageType,
    extents: impl Into<Extents>,
) -> Result<Attribute, IntAttributeError> {
    let name_c = c_name(name)?;
    let space = Dataspace::try_new(extents)?;
    let attr = hdf5::sync::sync(|| {
        // SAFETY: `parent` and `space` hold valid ids, the type id is a library constant and
        // `name_c` outlives the call.
        let id = h5check(unsafe {
            h5a::H5Acreate2(
                parent.id(),
                name_c.as_ptr(),
                storage.file_type_id(),
                space.id(),
                H5P_DEFAULT,
                H5P_DEFAULT,
            )
        })?;
        // SAFETY: `id` is a fresh, non-negative attribute id from `H5Acreate2` that nothing else
        // owns.
        unsafe { hdf5::from_id::<Attribute>(id) }
    })
    .map_err(|source| IntAttributeError::Create {
        kind: "attribute",
        name: name.to_owned(),
        storage: storage.hdf5_name(),
        source,
    })?;
    log::debug!("Created attribute '{name}' as {storage}");
    Ok(attr)
}
