//! Coercion of string cells into typed record fields.
//!
//! Every decodable field type implements [`Field`], which exposes the field as
//! a [`Slot`]: a typed, mutable view the coercer knows how to populate.
//! [`coerce`] applies the conversion rules for one cell.

mod coerce;
pub use coerce::coerce;

mod field;
pub use field::{Field, Float, Nested, Pointer, Signed, Slot, Unsigned};

pub mod parse;

mod text;
pub use text::TextDecode;
