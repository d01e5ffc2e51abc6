use super::Error;

/// Error when a nested field's type has not opted into
/// [`TextDecode`](crate::value::TextDecode).
#[derive(Debug)]
pub(super) struct TextDecodeUnsupportedError {
    type_name: &'static str,
}

impl std::error::Error for TextDecodeUnsupportedError {}

impl core::fmt::Display for TextDecodeUnsupportedError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "type `{}` does not support text decoding",
            self.type_name
        )
    }
}

impl Error {
    /// Creates an error for a nested type without a text decoder.
    pub fn text_decode_unsupported(type_name: &'static str) -> Error {
        Error::from(super::ErrorKind::TextDecodeUnsupported(
            TextDecodeUnsupportedError { type_name },
        ))
    }

    /// Returns `true` if this error is a missing text decoder error.
    pub fn is_text_decode_unsupported(&self) -> bool {
        matches!(self.root_kind(), super::ErrorKind::TextDecodeUnsupported(_))
    }
}
