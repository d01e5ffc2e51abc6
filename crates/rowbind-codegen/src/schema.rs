mod column;
pub(crate) use column::Column;

mod diagnostics;
pub(crate) use diagnostics::Diagnostics;

mod field;
pub(crate) use field::{Field, FieldTy};

mod record;
pub(crate) use record::Record;

mod record_attr;
pub(crate) use record_attr::RecordAttr;

mod ty;
