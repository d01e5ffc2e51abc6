use super::Error;

/// Error when a mapped field has a type the coercer cannot populate.
#[derive(Debug)]
pub(super) struct UnsupportedFieldTypeError {
    type_name: &'static str,
}

impl std::error::Error for UnsupportedFieldTypeError {}

impl core::fmt::Display for UnsupportedFieldTypeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unsupported field type `{}`", self.type_name)
    }
}

impl Error {
    /// Creates an unsupported field type error.
    pub fn unsupported_field_type(type_name: &'static str) -> Error {
        Error::from(super::ErrorKind::UnsupportedFieldType(
            UnsupportedFieldTypeError { type_name },
        ))
    }

    /// Returns `true` if this error is an unsupported field type error.
    pub fn is_unsupported_field_type(&self) -> bool {
        matches!(self.root_kind(), super::ErrorKind::UnsupportedFieldType(_))
    }
}
