use super::Error;

/// The row source has no more rows.
///
/// Not a failure as such: bulk decoding uses it to terminate.
#[derive(Debug)]
pub(super) struct EndOfStreamError;

impl std::error::Error for EndOfStreamError {}

impl core::fmt::Display for EndOfStreamError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("end of stream")
    }
}

impl Error {
    /// Creates the end-of-stream signal.
    pub fn end_of_stream() -> Error {
        Error::from(super::ErrorKind::EndOfStream(EndOfStreamError))
    }

    /// Returns `true` if the row source ran out of rows.
    pub fn is_end_of_stream(&self) -> bool {
        matches!(self.root_kind(), super::ErrorKind::EndOfStream(_))
    }
}
