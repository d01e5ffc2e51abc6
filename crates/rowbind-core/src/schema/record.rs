use crate::value::Slot;

/// A struct that rows can be decoded into.
///
/// Usually implemented with `#[derive(Record)]`. The derive produces a static
/// [`RecordType`] describing every declared field, in declaration order, and a
/// `field_mut` accessor addressing the same fields by index.
pub trait Record: 'static {
    /// Field declarations of this record.
    fn record_type() -> &'static RecordType
    where
        Self: Sized;

    /// Mutable access to the field at `index` in the declaration order of
    /// [`Record::record_type`]. Returns `None` for out of range indices.
    fn field_mut(&mut self, index: usize) -> Option<FieldMut<'_>>;

    /// Name of the concrete record type, used in error messages.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Static description of a record type.
#[derive(Debug)]
pub struct RecordType {
    /// Type name
    pub name: &'static str,

    /// Declared fields, in declaration order
    pub fields: &'static [FieldDecl],
}

/// A single declared field.
#[derive(Debug)]
pub struct FieldDecl {
    /// Field identifier as declared
    pub name: &'static str,

    /// How the field takes part in column mapping
    pub kind: FieldKind,
}

#[derive(Debug)]
pub enum FieldKind {
    /// Mapped to the column named `tag`, or to the field name when `None`.
    Column { tag: Option<&'static str> },

    /// Excluded from mapping.
    Skip,

    /// A record whose own fields are promoted into the enclosing record.
    Embedded(Embedded),
}

/// An embedded record field.
#[derive(Debug)]
pub struct Embedded {
    /// Description of the embedded record type
    pub record_type: fn() -> &'static RecordType,

    /// True when the embedded record sits behind an `Option` and is allocated
    /// on first use
    pub indirect: bool,
}

/// Mutable access to one field of a record.
pub enum FieldMut<'a> {
    /// A leaf field, ready for coercion.
    Value(Slot<'a>),

    /// An embedded record. Pointer embeddings are allocated before being
    /// handed out.
    Embedded(&'a mut dyn Record),
}

impl FieldDecl {
    /// The column this field maps to, lowercased. `None` for skipped and
    /// embedded fields.
    pub fn tag(&self) -> Option<String> {
        match self.kind {
            FieldKind::Column { tag } => Some(tag.unwrap_or(self.name).to_lowercase()),
            FieldKind::Skip | FieldKind::Embedded(_) => None,
        }
    }
}
