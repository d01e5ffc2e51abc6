//! Record descriptions and the column to field mapping resolved from them.

mod cache;
pub use cache::SchemaCache;

mod path;
pub use path::{FieldPath, Step};

mod record;
pub use record::{Embedded, FieldDecl, FieldKind, FieldMut, Record, RecordType};

mod resolve;
pub use resolve::Schema;

mod target;
pub use target::Target;
