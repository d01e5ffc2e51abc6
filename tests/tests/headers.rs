use pretty_assertions::assert_eq;
use rowbind::{Reader, Rows};
use tests::{models::Simple, *};

#[test]
fn simple_headers() {
    let mut reader = open("simple.csv");
    let headers = assert_ok!(reader.headers());
    assert_eq!(headers, ["client_id", "client_name"]);
}

#[test]
fn headers_are_normalized() {
    let mut reader = from_str(" Client_ID ,CLIENT_NAME\n1,Jose\n");
    assert_eq!(assert_ok!(reader.headers()), ["client_id", "client_name"]);

    let mut simple = Simple::default();
    assert_ok!(reader.read(&mut simple));
    assert_eq!(simple.name, "Jose");
}

#[test]
fn headers_are_read_once() {
    let mut reader = Reader::new(Counting::new(Rows::from_strs([
        ["client_id", "client_name"],
        ["1", "Jose"],
    ])));

    let first = assert_ok!(reader.headers()).to_vec();
    let second = assert_ok!(reader.headers()).to_vec();
    assert_eq!(first, second);
    assert_eq!(reader.source().reads, 1);

    // Reading a record does not re-read the header
    let mut simple = Simple::default();
    assert_ok!(reader.read(&mut simple));
    assert_eq!(reader.source().reads, 2);
    assert_eq!(simple.id, 1);
}

#[test]
fn duplicated_headers() {
    let mut reader = open("duplicated_headers.csv");

    let err = assert_err!(reader.headers(), is_malformed_headers);
    assert_eq!(
        err.to_string(),
        "malformed headers: duplicate column `client_id`"
    );

    // The failure sticks, and also fails reads
    assert_err!(reader.headers(), is_malformed_headers);
    let mut simple = Simple::default();
    assert_err!(reader.read(&mut simple), is_malformed_headers);
}

#[test]
fn empty_input() {
    let mut reader = from_str("");
    assert_err!(reader.headers(), is_end_of_stream);

    let mut all: Vec<Simple> = vec![];
    assert_ok!(reader.read_all(&mut all));
    assert!(all.is_empty());
}

#[test]
fn header_only_input() {
    let mut reader = from_str("client_id,client_name\n");
    assert_ok!(reader.headers());

    let mut simple = Simple::default();
    assert_err!(reader.read(&mut simple), is_end_of_stream);
    assert_eq!(simple, Simple::default());
}
