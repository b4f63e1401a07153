use derive_more::Display;
use hdf5::{
    Datatype,
    datatype::ByteOrder,
    types::{IntSize, TypeDescriptor},
};
use hdf5_sys::{h5i::hid_t, h5t};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator as _;
use strum_macros::EnumIter;

use crate::error::IntAttributeError;

/// On-disk encoding of a signed integer element.
///
/// The in-memory side is always native `i64`, HDF5 converts between the two on write and read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageType {
    #[display("H5T_STD_I8LE")]
    I8Le,
    #[display("H5T_STD_I8BE")]
    I8Be,
    #[display("H5T_STD_I16LE")]
    I16Le,
    #[display("H5T_STD_I16BE")]
    I16Be,
    #[display("H5T_STD_I32LE")]
    I32Le,
    #[display("H5T_STD_I32BE")]
    I32Be,
    #[display("H5T_STD_I64LE")]
    I64Le,
    #[display("H5T_STD_I64BE")]
    I64Be,
}

impl StorageType {
    /// Name of the matching HDF5 predefined datatype
    pub fn hdf5_name(self) -> &'static str {
        match self {
            Self::I8Le => "H5T_STD_I8LE",
            Self::I8Be => "H5T_STD_I8BE",
            Self::I16Le => "H5T_STD_I16LE",
            Self::I16Be => "H5T_STD_I16BE",
            Self::I32Le => "H5T_STD_I32LE",
            Self::I32Be => "H5T_STD_I32BE",
            Self::I64Le => "H5T_STD_I64LE",
            Self::I64Be => "H5T_STD_I64BE",
        }
    }

    pub fn int_size(self) -> IntSize {
        match self {
            Self::I8Le | Self::I8Be => IntSize::U1,
            Self::I16Le | Self::I16Be => IntSize::U2,
            Self::I32Le | Self::I32Be => IntSize::U4,
            Self::I64Le | Self::I64Be => IntSize::U8,
        }
    }

    pub fn byte_order(self) -> ByteOrder {
        match self {
            Self::I8Le | Self::I16Le | Self::I32Le | Self::I64Le => ByteOrder::LittleEndian,
            Self::I8Be | Self::I16Be | Self::I32Be | Self::I64Be => ByteOrder::BigEndian,
        }
    }

    /// Id of the predefined HDF5 datatype.
    ///
    /// Only valid once the library is initialised, which any open [`hdf5::File`] guarantees.
    pub(crate) fn file_type_id(self) -> hid_t {
        match self {
            Self::I8Le => *h5t::H5T_STD_I8LE,
            Self::I8Be => *h5t::H5T_STD_I8BE,
            Self::I16Le => *h5t::H5T_STD_I16LE,
            Self::I16Be => *h5t::H5T_STD_I16BE,
            Self::I32Le => *h5t::H5T_STD_I32LE,
            Self::I32Be => *h5t::H5T_STD_I32BE,
            Self::I64Le => *h5t::H5T_STD_I64LE,
            Self::I64Be => *h5t::H5T_STD_I64BE,
        }
    }
}

impl TryFrom<&Datatype> for StorageType {
    type Error = IntAttributeError;

    fn try_from(dtype: &Datatype) -> Result<Self, Self::Error> {
        let descriptor = dtype.to_descriptor()?;
        let TypeDescriptor::Integer(int_size) = descriptor else {
            return Err(IntAttributeError::UnsupportedEncoding(descriptor.to_string()));
        };
        let order = dtype.byte_order();
        Self::iter()
            .find(|s| s.int_size() == int_size && s.byte_order() == order)
            .ok_or_else(|| {
                IntAttributeError::UnsupportedEncoding(format!("{descriptor} ({order:?})"))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use h5ex_test_util::TestResult;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_native_i64_is_recognised() -> TestResult {
        let dtype = Datatype::from_type::<i64>()?;

        let expected = if cfg!(target_endian = "little") {
            StorageType::I64Le
        } else {
            StorageType::I64Be
        };
        assert_eq!(StorageType::try_from(&dtype)?, expected);
        Ok(())
    }

    #[test]
    fn test_float_is_rejected() -> TestResult {
        let dtype = Datatype::from_type::<f64>()?;

        let err = StorageType::try_from(&dtype).unwrap_err();
        assert!(matches!(err, IntAttributeError::UnsupportedEncoding(_)));
        Ok(())
    }

    #[test]
    fn test_names_follow_size_and_order() {
        for storage in StorageType::iter() {
            let name = storage.hdf5_name();
            let bits = match storage.int_size() {
                IntSize::U1 => "8",
                IntSize::U2 => "16",
                IntSize::U4 => "32",
                IntSize::U8 => "64",
            };
            let suffix = match storage.byte_order() {
                ByteOrder::LittleEndian => "LE",
                ByteOrder::BigEndian => "BE",
                other => unreachable!("{storage} has byte order {other:?}"),
            };
            assert_eq!(name, format!("H5T_STD_I{bits}{suffix}"));
            assert_eq!(storage.to_string(), name);
        }
    }
}
