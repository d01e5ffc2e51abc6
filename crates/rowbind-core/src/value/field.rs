use super::TextDecode;
use crate::Result;

/// A field type that cells can be coerced into.
///
/// Implemented for `String`, `bool`, the integer and float primitives,
/// `Option<T>` (pointer semantics: empty cells leave it untouched) and
/// `Box<T>`. Derived records implement it too, as nested values.
pub trait Field {
    /// Returns the typed view of this field used by the coercer.
    fn slot(&mut self) -> Slot<'_>;
}

/// Mutable, typed view of a single field.
pub enum Slot<'a> {
    /// Text, assigned verbatim.
    Text(&'a mut String),

    Bool(&'a mut bool),

    /// Signed integer of any width.
    Signed(&'a mut dyn Signed),

    /// Unsigned integer of any width.
    Unsigned(&'a mut dyn Unsigned),

    /// Floating point of any precision.
    Float(&'a mut dyn Float),

    /// Structured value decoded from the whole cell.
    Nested(Nested<'a>),

    /// Optional value, allocated only for non-empty cells.
    Pointer(&'a mut dyn Pointer),

    /// A field the coercer cannot populate, named by its type.
    Unsupported(&'static str),
}

/// Integer field narrowed from `i64`.
pub trait Signed {
    fn type_name(&self) -> &'static str;

    /// Stores `value`, returning `false` if it does not fit the field's width.
    fn assign(&mut self, value: i64) -> bool;
}

/// Integer field narrowed from `u64`.
pub trait Unsigned {
    fn type_name(&self) -> &'static str;

    /// Stores `value`, returning `false` if it does not fit the field's width.
    fn assign(&mut self, value: u64) -> bool;
}

/// Floating point field narrowed from `f64`.
pub trait Float {
    fn type_name(&self) -> &'static str;

    /// Stores `value`, narrowed to the field's width.
    fn assign(&mut self, value: f64);
}

/// Storage that can be allocated on demand, then populated.
pub trait Pointer {
    /// Replaces the current value with a freshly allocated one and returns it.
    fn alloc(&mut self) -> &mut dyn Field;
}

/// A nested structured field, with or without a text decoder.
pub struct Nested<'a> {
    type_name: &'static str,
    decoder: Option<&'a mut dyn DecodeInPlace>,
}

impl<'a> Nested<'a> {
    /// A nested field decoded through `T`'s [`TextDecode`] impl.
    pub fn new<T: TextDecode>(value: &'a mut T) -> Self {
        Nested {
            type_name: std::any::type_name::<T>(),
            decoder: Some(value),
        }
    }

    /// A nested field of a type that declares no text decoder.
    pub fn opaque<T: ?Sized>() -> Self {
        Nested {
            type_name: std::any::type_name::<T>(),
            decoder: None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub(super) fn decode(self, text: &str) -> Result<()> {
        match self.decoder {
            Some(decoder) => decoder.decode_in_place(text),
            None => Err(crate::Error::text_decode_unsupported(self.type_name)),
        }
    }
}

/// Object-safe face of [`TextDecode`].
trait DecodeInPlace {
    fn decode_in_place(&mut self, text: &str) -> Result<()>;
}

impl<T: TextDecode> DecodeInPlace for T {
    fn decode_in_place(&mut self, text: &str) -> Result<()> {
        *self = T::decode_text(text)?;
        Ok(())
    }
}

impl Field for String {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Text(self)
    }
}

impl Field for bool {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Bool(self)
    }
}

macro_rules! impl_signed {
    ( $($t:ty),+ ) => {
        $(
            impl Signed for $t {
                fn type_name(&self) -> &'static str {
                    stringify!($t)
                }

                fn assign(&mut self, value: i64) -> bool {
                    match <$t>::try_from(value) {
                        Ok(value) => {
                            *self = value;
                            true
                        }
                        Err(_) => false,
                    }
                }
            }

            impl Field for $t {
                fn slot(&mut self) -> Slot<'_> {
                    Slot::Signed(self)
                }
            }
        )+
    };
}

macro_rules! impl_unsigned {
    ( $($t:ty),+ ) => {
        $(
            impl Unsigned for $t {
                fn type_name(&self) -> &'static str {
                    stringify!($t)
                }

                fn assign(&mut self, value: u64) -> bool {
                    match <$t>::try_from(value) {
                        Ok(value) => {
                            *self = value;
                            true
                        }
                        Err(_) => false,
                    }
                }
            }

            impl Field for $t {
                fn slot(&mut self) -> Slot<'_> {
                    Slot::Unsigned(self)
                }
            }
        )+
    };
}

impl_signed!(i8, i16, i32, i64, isize);
impl_unsigned!(u8, u16, u32, u64, usize);

impl Float for f32 {
    fn type_name(&self) -> &'static str {
        "f32"
    }

    fn assign(&mut self, value: f64) {
        *self = value as f32;
    }
}

impl Float for f64 {
    fn type_name(&self) -> &'static str {
        "f64"
    }

    fn assign(&mut self, value: f64) {
        *self = value;
    }
}

impl Field for f32 {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Float(self)
    }
}

impl Field for f64 {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Float(self)
    }
}

impl<T: Field + Default> Pointer for Option<T> {
    fn alloc(&mut self) -> &mut dyn Field {
        self.insert(T::default())
    }
}

impl<T: Field + Default> Field for Option<T> {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Pointer(self)
    }
}

impl<T: Field + ?Sized> Field for Box<T> {
    fn slot(&mut self) -> Slot<'_> {
        (**self).slot()
    }
}

#[cfg(feature = "uuid")]
impl TextDecode for uuid::Uuid {
    fn decode_text(text: &str) -> Result<Self> {
        Ok(uuid::Uuid::parse_str(text)?)
    }
}

#[cfg(feature = "uuid")]
impl Field for uuid::Uuid {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Nested(Nested::new(self))
    }
}
