use hdf5::{Attribute, Dataset};

use crate::{error::IntAttributeError, storage_type::StorageType};

/// Convenience to open a dataset and error if the dataset is not in the HDF5 file or if it doesn't have the expected dimension
pub(crate) fn open_dataset(
    hdf5_file: &hdf5::File,
    name: &str,
    expect_ndim: usize,
) -> Result<Dataset, IntAttributeError> {
    let Ok(dataset) = hdf5_file.dataset(name) else {
        return Err(IntAttributeError::MissingDataset {
            name: name.to_owned(),
            file: hdf5_file.filename(),
        });
    };
    if dataset.ndim() != expect_ndim {
        return Err(IntAttributeError::UnexpectedRank {
            name: name.to_owned(),
            expected: expect_ndim,
            actual: dataset.ndim(),
        });
    }
    Ok(dataset)
}

/// Opens attribute `name` on `ds`, listing the attributes that do exist if it is missing
pub(crate) fn open_attribute(ds: &Dataset, name: &str) -> Result<Attribute, IntAttributeError> {
    let attrs = ds.attr_names()?;
    if !attrs.iter().any(|a| a == name) {
        return Err(IntAttributeError::MissingAttribute {
            name: name.to_owned(),
            dataset: ds.name(),
            available: attrs.join(", "),
        });
    }
    Ok(ds.attr(name)?)
}

/// One line summary of an attribute, e.g. `A1: H5T_STD_I64BE (4, 7)`
pub(crate) fn describe_attribute(
    name: &str,
    attr: &Attribute,
) -> Result<String, IntAttributeError> {
    let dtype = attr.dtype()?;
    let encoding = match StorageType::try_from(&dtype) {
        Ok(storage) => storage.to_string(),
        Err(_) => dtype.to_descriptor()?.to_string(),
    };
    let shape = attr
        .shape()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    Ok(format!("{name}: {encoding} ({shape})"))
}

/// Logs all dataset attributes at DEBUG verbosity
///
/// Ignores errors
pub(crate) fn log_all_attributes(ds: &Dataset) {
    let Ok(attrs) = ds.attr_names() else {
        log::error!("Failed loading HDF5 attribute names");
        return;
    };
    for a in attrs {
        let Ok(attr) = ds.attr(&a) else {
            log::error!("Failed loading Attribute: {a}");
            continue;
        };
        match describe_attribute(&a, &attr) {
            Ok(description) => log::debug!("Attr: {description}"),
            Err(e) => log::error!("Failed describing attribute '{a}': {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raw::{create_attr_as, create_dataset_as};
    use h5ex_test_util::{TestResult, scratch_h5};
    use hdf5::Extents;
    use pretty_assertions::assert_eq;

    #[test_log::test]
    fn test_describe_and_log_attributes() -> TestResult {
        let (_dir, path) = scratch_h5("describe.h5")?;
        let file = hdf5::File::create(&path)?;
        let ds = create_dataset_as(&file, "DS1", StorageType::I32Le, Extents::Scalar)?;
        let attr = create_attr_as(&ds, "A1", StorageType::I64Be, [4_usize, 7])?;
        let note = ds.new_attr::<f32>().create("scale")?;
        note.write_scalar(&0.5_f32)?;

        assert_eq!(describe_attribute("A1", &attr)?, "A1: H5T_STD_I64BE (4, 7)");
        let scale = describe_attribute("scale", &note)?;
        assert!(scale.starts_with("scale: ") && scale.ends_with(" ()"), "{scale}");
        log_all_attributes(&ds);
        Ok(())
    }

    #[test]
    fn test_open_dataset_rank_and_missing() -> TestResult {
        let (_dir, path) = scratch_h5("open.h5")?;
        let file = hdf5::File::create(&path)?;
        create_dataset_as(&file, "DS1", StorageType::I32Le, Extents::Scalar)?;

        assert_eq!(open_dataset(&file, "DS1", 0)?.ndim(), 0);
        assert!(matches!(
            open_dataset(&file, "DS1", 2).unwrap_err(),
            IntAttributeError::UnexpectedRank { expected: 2, actual: 0, .. }
        ));
        assert!(matches!(
            open_dataset(&file, "DS2", 0).unwrap_err(),
            IntAttributeError::MissingDataset { .. }
        ));
        Ok(())
    }

    #[test]
    fn test_open_attribute_lists_available() -> TestResult {
        let (_dir, path) = scratch_h5("attrs.h5")?;
        let file = hdf5::File::create(&path)?;
        let ds = create_dataset_as(&file, "DS1", StorageType::I32Le, Extents::Scalar)?;
        create_attr_as(&ds, "A1", StorageType::I64Be, [4_usize, 7])?;

        let err = open_attribute(&ds, "A2").unwrap_err();
        let IntAttributeError::MissingAttribute { available, .. } = err else {
            panic!("expected a missing attribute error");
        };
        assert_eq!(available, "A1");
        Ok(())
    }
}
