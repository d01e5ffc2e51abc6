use pretty_assertions::assert_eq;
use rowbind::Record;
use tests::{models::*, *};

#[test]
fn text_decoded_field() {
    let mut reader = open("simple.csv");

    let mut actual = SimpleText::default();
    assert_ok!(reader.read(&mut actual));
    assert_eq!(
        actual,
        SimpleText {
            id: 1,
            name: Name {
                name: "Jose".into()
            },
        }
    );
}

#[test]
fn text_decoded_field_ptr() {
    let mut reader = open("simple.csv");

    let mut actual = SimpleTextPtr::default();
    assert_ok!(reader.read(&mut actual));
    assert_eq!(
        actual,
        SimpleTextPtr {
            id: 1,
            name: Some(Name {
                name: "Jose".into()
            }),
        }
    );
}

#[test]
fn composed() {
    let mut reader = open("clients.csv");

    let mut actual = Composed::default();
    assert_ok!(reader.read(&mut actual));
    assert_eq!(
        actual,
        Composed {
            simple: Simple {
                id: 1,
                name: "Jose".into(),
            },
            age: 28,
        }
    );
}

#[test]
fn composed_ptr() {
    let mut reader = open("clients.csv");

    let mut actual = ComposedPtr::default();
    assert_ok!(reader.read(&mut actual));
    assert_eq!(actual.age, 28);
    assert_eq!(
        actual.simple,
        Some(Box::new(Simple {
            id: 1,
            name: "Jose".into(),
        }))
    );
}

#[test]
fn embedded_ptr_stays_unset_without_columns() {
    let mut reader = from_str("age\n28\n");

    let mut actual = ComposedPtr::default();
    assert_ok!(reader.read(&mut actual));
    assert_eq!(
        actual,
        ComposedPtr {
            simple: None,
            age: 28,
        }
    );
}

#[derive(Debug, Default, PartialEq, Record)]
struct Address {
    city: String,
    #[column("zip")]
    postal_code: u32,
}

#[derive(Debug, Default, PartialEq, Record)]
struct Contact {
    #[embedded]
    client: Simple,
    #[embedded]
    address: Option<Address>,
}

#[derive(Debug, Default, PartialEq, Record)]
struct Account {
    number: u64,
    #[embedded]
    contact: Contact,
}

#[test]
fn nested_embedding() {
    let mut reader = from_str("number,client_id,client_name,city,zip\n7,1,Jose,Lyon,69001\n");

    let mut actual = Account::default();
    assert_ok!(reader.read(&mut actual));
    assert_eq!(
        actual,
        Account {
            number: 7,
            contact: Contact {
                client: Simple {
                    id: 1,
                    name: "Jose".into(),
                },
                address: Some(Address {
                    city: "Lyon".into(),
                    postal_code: 69001,
                }),
            },
        }
    );
}

/// The embedded `client_name` is declared after the outer one, so it wins.
#[derive(Debug, Default, PartialEq, Record)]
struct Shadowed {
    #[column("client_name")]
    label: String,
    #[embedded]
    simple: Simple,
}

#[test]
fn last_declared_tag_wins() {
    let mut reader = open("simple.csv");
    let schema = reader.schema::<Shadowed>();
    assert_eq!(
        schema.columns().map(|(column, _)| column).collect::<Vec<_>>(),
        ["client_name", "client_id"]
    );

    let mut actual = Shadowed::default();
    assert_ok!(reader.read(&mut actual));
    assert_eq!(
        actual,
        Shadowed {
            label: String::new(),
            simple: Simple {
                id: 1,
                name: "Jose".into(),
            },
        }
    );
}
