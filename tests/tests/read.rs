use pretty_assertions::assert_eq;
use rowbind::{Reader, Rows};
use tests::{models::*, *};

#[test]
fn simple_read() {
    let mut reader = open("simple.csv");

    let mut actual = Simple::default();
    assert_ok!(reader.read(&mut actual));
    assert_eq!(actual, simple_expected()[0]);
}

#[test]
fn simple_read_ptr() {
    let mut reader = open("simple.csv");

    let mut actual: Option<Simple> = None;
    assert_ok!(reader.read(&mut actual));
    assert_eq!(actual, Some(simple_expected()[0].clone()));

    let mut boxed: Option<Box<Simple>> = None;
    assert_ok!(reader.read(&mut boxed));
    assert_eq!(boxed, Some(Box::new(simple_expected()[1].clone())));
}

#[test]
fn read_overwrites_only_mapped_fields() {
    let mut reader = open("simple.csv");

    let mut actual = SimpleIgnore {
        id: 9,
        name: "Old".into(),
        age: 70,
    };
    assert_ok!(reader.read(&mut actual));
    assert_eq!(
        actual,
        SimpleIgnore {
            id: 1,
            name: "Jose".into(),
            age: 70,
        }
    );
}

#[test]
fn simple_read_all() {
    let mut reader = open("simple.csv");

    let mut actual: Vec<Simple> = vec![];
    assert_ok!(reader.read_all(&mut actual));
    assert_eq!(actual, simple_expected());
}

#[test]
fn simple_read_all_ptr() {
    let mut reader = open("simple.csv");

    let mut actual: Vec<Box<Simple>> = vec![];
    assert_ok!(reader.read_all(&mut actual));

    let expected: Vec<_> = simple_expected().into_iter().map(Box::new).collect();
    assert_eq!(actual, expected);
}

#[test]
fn read_all_appends() {
    let mut reader = open("simple.csv");

    let mut actual = vec![Simple {
        id: 0,
        name: "existing".into(),
    }];
    assert_ok!(reader.read_all(&mut actual));

    assert_eq!(actual.len(), 4);
    assert_eq!(actual[0].name, "existing");
    assert_eq!(actual[3].name, "Vincent");
}

#[test]
fn read_all_stops_at_end_of_stream() {
    let mut reader = Reader::new(Counting::new(Rows::from_strs([
        ["client_id", "client_name"],
        ["1", "Jose"],
        ["2", "Daniel"],
        ["3", "Vincent"],
    ])));

    let mut actual: Vec<Simple> = vec![];
    assert_ok!(reader.read_all(&mut actual));
    assert_eq!(actual, simple_expected());

    // Header, three rows, and the read that hit the end
    assert_eq!(reader.source().reads, 5);
}

#[test]
fn read_all_propagates_errors() {
    let mut reader = from_str("client_id,client_name\n1,Jose\nnope,Daniel\n3,Vincent\n");

    let mut actual: Vec<Simple> = vec![];
    let err = assert_err!(reader.read_all(&mut actual), is_invalid_integer);
    assert_eq!(
        err.to_string(),
        "row 2: column `client_id`: invalid integer `nope` for i64"
    );
    assert_eq!(actual, simple_expected()[..1]);
}

#[test]
fn records_iterator() {
    let mut reader = open("simple.csv");

    let actual = assert_ok!(reader.records::<Simple>().collect::<rowbind::Result<Vec<_>>>());
    assert_eq!(actual, simple_expected());
    assert_eq!(reader.position(), 3);
}

#[test]
fn records_iterator_ends_after_error() {
    let mut reader = from_str("client_id\n1\nx\n3\n");

    let mut records = reader.records::<Simple>();
    assert_eq!(assert_ok!(records.next().unwrap()).id, 1);
    assert_err!(records.next().unwrap(), is_invalid_integer);
    assert!(records.next().is_none());
}

#[test]
fn simple_extra_column() {
    let mut reader = open("clients.csv");

    let mut actual = Simple::default();
    assert_ok!(reader.read(&mut actual));
    assert_eq!(actual, simple_expected()[0]);
}

#[test]
fn simple_ignore_column() {
    let mut reader = open("clients.csv");

    let mut actual = SimpleIgnore::default();
    assert_ok!(reader.read(&mut actual));
    assert_eq!(
        actual,
        SimpleIgnore {
            id: 1,
            name: "Jose".into(),
            age: 0,
        }
    );
}

#[test]
fn simple_no_tag() {
    let mut reader = open("clients.csv");

    let mut actual = SimpleNoTag::default();
    assert_ok!(reader.read(&mut actual));
    assert_eq!(
        actual,
        SimpleNoTag {
            id: 1,
            name: "Jose".into(),
            age: 28,
        }
    );
}

#[test]
fn missing_cells_are_skipped() {
    let mut reader = from_str("client_id,client_name,age\n1\n");

    let mut actual = SimpleNoTag {
        id: 5,
        name: "kept".into(),
        age: 3,
    };
    assert_ok!(reader.read(&mut actual));
    assert_eq!(
        actual,
        SimpleNoTag {
            id: 1,
            name: "kept".into(),
            age: 3,
        }
    );
}
