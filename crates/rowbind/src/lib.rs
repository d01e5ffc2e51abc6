//! Decode header-keyed rows of text into typed Rust records.
//!
//! The first row of the input names the columns. Every following row is
//! decoded into a record deriving [`Record`]: each cell lands in the field
//! mapped to its column, converted to the field's type.
//!
//! ```
//! use rowbind::Record;
//!
//! #[derive(Debug, Default, PartialEq, Record)]
//! struct Client {
//!     #[column("client_id")]
//!     id: i64,
//!     #[column("client_name")]
//!     name: String,
//!     age: Option<u8>,
//! }
//!
//! let input = "client_id,client_name,age\n1,Jose,28\n2,Daniel,\n";
//! let mut reader = rowbind::ReaderBuilder::new().from_reader(input.as_bytes());
//!
//! assert_eq!(reader.headers()?, ["client_id", "client_name", "age"]);
//!
//! let mut clients: Vec<Client> = vec![];
//! reader.read_all(&mut clients)?;
//!
//! assert_eq!(clients[1], Client { id: 2, name: "Daniel".into(), age: None });
//! # Ok::<(), rowbind::Error>(())
//! ```

extern crate self as rowbind;

pub mod reader;
pub use reader::{Reader, ReaderBuilder, Records};

pub use rowbind_core::{
    bail, err,
    schema::{FieldPath, Schema, SchemaCache},
    source::{Row, RowSource, Rows},
    value::TextDecode,
    Error, Record, Result, Target,
};

pub use rowbind_macros::Record;

/// Building blocks for hand-written [`Record`] and field impls.
pub mod field {
    pub use rowbind_core::{
        schema::{Embedded, FieldDecl, FieldKind, FieldMut, RecordType},
        value::{coerce, parse, Field, Float, Nested, Pointer, Signed, Slot, Unsigned},
    };
}

#[doc(hidden)]
pub mod codegen_support {
    pub use rowbind_core::{
        schema::{self, FieldMut},
        value::{Field, Nested, Slot},
        Record, Target,
    };
}
