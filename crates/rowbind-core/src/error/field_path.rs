use super::Error;

/// A resolved field path does not match the record's field accessors.
///
/// Only reachable through hand-written [`Record`](crate::schema::Record)
/// impls whose `record_type` and `field_mut` disagree.
#[derive(Debug)]
pub(super) struct FieldPathError {
    record: &'static str,
    index: usize,
    expected: &'static str,
}

impl std::error::Error for FieldPathError {}

impl core::fmt::Display for FieldPathError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "invalid field path: field {} of `{}` is not {}",
            self.index, self.record, self.expected
        )
    }
}

impl Error {
    /// Creates an error for a field path step that does not fit the record.
    pub fn invalid_field_path(record: &'static str, index: usize, expected: &'static str) -> Error {
        Error::from(super::ErrorKind::FieldPath(FieldPathError {
            record,
            index,
            expected,
        }))
    }

    /// Returns `true` if this error is an invalid field path error.
    pub fn is_invalid_field_path(&self) -> bool {
        matches!(self.root_kind(), super::ErrorKind::FieldPath(_))
    }
}
