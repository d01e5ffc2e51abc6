//! Core of rowbind: record descriptions, schema resolution and cell coercion.
//!
//! Most users depend on the `rowbind` crate, which re-exports this one and
//! adds the reader and the derive macro.

mod error;
pub use error::Error;

pub mod schema;
pub use schema::{Record, Schema, SchemaCache, Target};

pub mod source;
pub use source::{Row, RowSource};

pub mod value;

/// A Result type alias that uses rowbind's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
