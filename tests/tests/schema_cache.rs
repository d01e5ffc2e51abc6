use pretty_assertions::assert_eq;
use rowbind::{
    field::{Field, FieldDecl, FieldKind, FieldMut, RecordType},
    Reader, Record, Rows, Target,
};
use std::cell::Cell;
use tests::*;

thread_local! {
    static RESOLVED: Cell<usize> = const { Cell::new(0) };
}

/// Hand-written record counting how often its description is requested.
#[derive(Debug, Default, PartialEq)]
struct Counted {
    id: u32,
    name: String,
}

static COUNTED: RecordType = RecordType {
    name: "Counted",
    fields: &[
        FieldDecl {
            name: "id",
            kind: FieldKind::Column {
                tag: Some("client_id"),
            },
        },
        FieldDecl {
            name: "name",
            kind: FieldKind::Column {
                tag: Some("client_name"),
            },
        },
    ],
};

impl Record for Counted {
    fn record_type() -> &'static RecordType {
        RESOLVED.with(|resolved| resolved.set(resolved.get() + 1));
        &COUNTED
    }

    fn field_mut(&mut self, index: usize) -> Option<FieldMut<'_>> {
        match index {
            0 => Some(FieldMut::Value(self.id.slot())),
            1 => Some(FieldMut::Value(self.name.slot())),
            _ => None,
        }
    }
}

impl Target for Counted {
    type Record = Self;

    const INDIRECT: bool = false;

    fn record_mut(&mut self) -> &mut Self {
        self
    }
}

fn resolved() -> usize {
    RESOLVED.with(Cell::get)
}

#[test]
fn schema_resolved_once_per_reader() {
    let before = resolved();
    let mut reader = open("simple.csv");

    let mut all: Vec<Counted> = vec![];
    assert_ok!(reader.read_all(&mut all));
    assert_eq!(all.len(), 3);
    assert_eq!(
        all[2],
        Counted {
            id: 3,
            name: "Vincent".into()
        }
    );

    reader.schema::<Counted>();
    assert_eq!(resolved() - before, 1);
}

#[test]
fn each_reader_has_its_own_cache() {
    let before = resolved();

    let mut first = open("simple.csv");
    let mut second = open("simple.csv");
    assert_ok!(first.read(&mut Counted::default()));
    assert_ok!(second.read(&mut Counted::default()));

    assert_eq!(resolved() - before, 2);
}

#[test]
fn cache_moves_between_readers() {
    let before = resolved();

    let mut first = open("simple.csv");
    assert_ok!(first.read(&mut Counted::default()));

    let (_, schemas) = first.into_parts();
    let mut second = Reader::with_cache(
        Rows::from_strs([["client_id"], ["9"]]),
        schemas,
    );

    let mut counted = Counted::default();
    assert_ok!(second.read(&mut counted));
    assert_eq!(counted.id, 9);
    assert_eq!(resolved() - before, 1);
}

#[test]
fn builder_registration_resolves_up_front() {
    let before = resolved();

    let mut reader = rowbind::ReaderBuilder::new()
        .register::<Counted>()
        .from_reader("client_id\n4\n".as_bytes());
    assert_eq!(resolved() - before, 1);

    let mut counted = Counted::default();
    assert_ok!(reader.read(&mut counted));
    assert_eq!(counted.id, 4);
    assert_eq!(resolved() - before, 1);
}

#[test]
fn schema_lists_columns_in_declaration_order() {
    let mut reader = from_str("");
    let schema = reader.schema::<tests::models::Composed>();

    let columns: Vec<_> = schema
        .columns()
        .map(|(column, path)| (column, path.indices().collect::<Vec<_>>()))
        .collect();

    assert_eq!(
        columns,
        [
            ("client_id", vec![0, 0]),
            ("client_name", vec![0, 1]),
            ("age", vec![1]),
        ]
    );
}
