mod adhoc;
mod end_of_stream;
mod field_path;
mod invalid_value;
mod malformed_headers;
mod text_decode;
mod unsupported_field_type;

use adhoc::AdhocError;
use end_of_stream::EndOfStreamError;
use field_path::FieldPathError;
use invalid_value::InvalidValueError;
use malformed_headers::MalformedHeadersError;
use std::sync::Arc;
use text_decode::TextDecodeUnsupportedError;
use unsupported_field_type::UnsupportedFieldTypeError;

/// Returns early with an ad hoc [`Error`] built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::err!($($arg)*))
    };
}

/// Builds an ad hoc [`Error`] from a format string.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// An error raised while reading rows or decoding them into records.
///
/// Errors form a chain: the root describes what went wrong, and each link
/// added with [`Error::context`] says where. Predicates such as
/// [`Error::is_invalid_integer`] look at the root, whatever context was
/// added on top. Cloning is cheap.
#[derive(Clone)]
pub struct Error(Arc<Link>);

struct Link {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Wraps this error in a context message, shown before it.
    ///
    /// ```
    /// let err = rowbind_core::Error::invalid_boolean("maybe").context("column `active`");
    /// assert_eq!(err.to_string(), "column `active`: invalid boolean `maybe`");
    /// assert!(err.is_invalid_boolean());
    /// ```
    pub fn context(self, message: impl core::fmt::Display) -> Error {
        Error(Arc::new(Link {
            kind: ErrorKind::Adhoc(AdhocError::new(message.to_string())),
            cause: Some(self),
        }))
    }

    /// Creates an ad hoc error. Prefer the [`err!`] and [`bail!`] macros.
    pub fn from_args(args: core::fmt::Arguments<'_>) -> Error {
        Error::from(ErrorKind::Adhoc(AdhocError::new(args.to_string())))
    }

    /// The innermost error, without context.
    pub fn root(&self) -> &Error {
        let mut err = self;
        while let Some(cause) = &err.0.cause {
            err = cause;
        }
        err
    }

    fn links(&self) -> impl Iterator<Item = &Error> {
        core::iter::successors(Some(self), |err| err.0.cause.as_ref())
    }

    fn root_kind(&self) -> &ErrorKind {
        &self.root().0.kind
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        if let Some(cause) = &self.0.cause {
            return Some(cause);
        }

        match &self.0.kind {
            ErrorKind::Anyhow(err) => err.source(),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for (i, err) in self.links().enumerate() {
            if i > 0 {
                f.write_str(": ")?;
            }
            write!(f, "{}", err.0.kind)?;
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if f.alternate() {
            f.debug_list()
                .entries(self.links().map(|err| &err.0.kind))
                .finish()
        } else {
            core::fmt::Display::fmt(self, f)
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    Anyhow(anyhow::Error),
    Adhoc(AdhocError),
    EndOfStream(EndOfStreamError),
    MalformedHeaders(MalformedHeadersError),
    InvalidValue(InvalidValueError),
    UnsupportedFieldType(UnsupportedFieldTypeError),
    TextDecodeUnsupported(TextDecodeUnsupportedError),
    FieldPath(FieldPathError),
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let err: &dyn core::fmt::Display = match self {
            ErrorKind::Anyhow(err) => err,
            ErrorKind::Adhoc(err) => err,
            ErrorKind::EndOfStream(err) => err,
            ErrorKind::MalformedHeaders(err) => err,
            ErrorKind::InvalidValue(err) => err,
            ErrorKind::UnsupportedFieldType(err) => err,
            ErrorKind::TextDecodeUnsupported(err) => err,
            ErrorKind::FieldPath(err) => err,
        };
        err.fmt(f)
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error(Arc::new(Link { kind, cause: None }))
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from(ErrorKind::Anyhow(err))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        anyhow::Error::from(err).into()
    }
}

#[cfg(feature = "uuid")]
impl From<uuid::Error> for Error {
    fn from(err: uuid::Error) -> Error {
        anyhow::Error::from(err).into()
    }
}
