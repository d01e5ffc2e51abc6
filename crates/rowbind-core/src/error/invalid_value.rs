use super::Error;

/// A cell could not be coerced into the target field's type.
#[derive(Debug)]
pub(super) struct InvalidValueError {
    pub(super) kind: ValueKind,
    pub(super) value: Box<str>,
    pub(super) to_type: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ValueKind {
    Boolean,
    Integer,
    Float,
}

impl std::error::Error for InvalidValueError {}

impl core::fmt::Display for InvalidValueError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let kind = match self.kind {
            ValueKind::Boolean => "boolean",
            ValueKind::Integer => "integer",
            ValueKind::Float => "float",
        };

        write!(f, "invalid {} `{}`", kind, self.value)?;

        if let Some(to_type) = self.to_type {
            write!(f, " for {}", to_type)?;
        }

        Ok(())
    }
}

impl Error {
    /// Creates an invalid boolean error.
    pub fn invalid_boolean(value: impl Into<String>) -> Error {
        Error::invalid_value(ValueKind::Boolean, value.into(), None)
    }

    /// Creates an invalid integer error. Covers both syntax errors and values
    /// out of range for `to_type`.
    pub fn invalid_integer(value: impl Into<String>, to_type: &'static str) -> Error {
        Error::invalid_value(ValueKind::Integer, value.into(), Some(to_type))
    }

    /// Creates an invalid float error.
    pub fn invalid_float(value: impl Into<String>, to_type: &'static str) -> Error {
        Error::invalid_value(ValueKind::Float, value.into(), Some(to_type))
    }

    fn invalid_value(kind: ValueKind, value: String, to_type: Option<&'static str>) -> Error {
        Error::from(super::ErrorKind::InvalidValue(InvalidValueError {
            kind,
            value: value.into(),
            to_type,
        }))
    }

    /// Returns `true` if this error is an invalid boolean error.
    pub fn is_invalid_boolean(&self) -> bool {
        self.is_invalid_value(ValueKind::Boolean)
    }

    /// Returns `true` if this error is an invalid integer error.
    pub fn is_invalid_integer(&self) -> bool {
        self.is_invalid_value(ValueKind::Integer)
    }

    /// Returns `true` if this error is an invalid float error.
    pub fn is_invalid_float(&self) -> bool {
        self.is_invalid_value(ValueKind::Float)
    }

    fn is_invalid_value(&self, expected: ValueKind) -> bool {
        matches!(self.root_kind(), super::ErrorKind::InvalidValue(err) if err.kind == expected)
    }
}
