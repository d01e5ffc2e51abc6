use super::Error;

/// The header row contains the same column twice once normalized.
#[derive(Debug)]
pub(super) struct MalformedHeadersError {
    column: Box<str>,
}

impl std::error::Error for MalformedHeadersError {}

impl core::fmt::Display for MalformedHeadersError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "malformed headers: duplicate column `{}`", self.column)
    }
}

impl Error {
    /// Creates a malformed headers error for a duplicated column.
    pub fn malformed_headers(column: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MalformedHeaders(MalformedHeadersError {
            column: column.into().into(),
        }))
    }

    /// Returns `true` if this error is a malformed headers error.
    pub fn is_malformed_headers(&self) -> bool {
        matches!(self.root_kind(), super::ErrorKind::MalformedHeaders(_))
    }
}
