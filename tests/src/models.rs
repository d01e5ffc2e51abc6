use rowbind::{Record, TextDecode};

#[derive(Debug, Default, Clone, PartialEq, Record)]
pub struct Simple {
    #[column("client_id")]
    pub id: i64,
    #[column("client_name")]
    pub name: String,
}

#[derive(Debug, Default, PartialEq, Record)]
pub struct SimpleIgnore {
    #[column("client_id")]
    pub id: i64,
    #[column("client_name")]
    pub name: String,
    #[column(skip)]
    pub age: i64,
}

#[derive(Debug, Default, PartialEq, Record)]
pub struct SimpleNoTag {
    #[column("client_id")]
    pub id: i64,
    #[column("client_name")]
    pub name: String,
    pub age: i64,
}

/// A value decoded whole from one cell.
#[derive(Debug, Default, Clone, PartialEq, Record)]
#[record(text)]
pub struct Name {
    pub name: String,
}

impl TextDecode for Name {
    fn decode_text(text: &str) -> rowbind::Result<Name> {
        Ok(Name { name: text.into() })
    }
}

#[derive(Debug, Default, PartialEq, Record)]
pub struct SimpleText {
    #[column("client_id")]
    pub id: i64,
    #[column("client_name")]
    pub name: Name,
}

#[derive(Debug, Default, PartialEq, Record)]
pub struct SimpleTextPtr {
    #[column("client_id")]
    pub id: i64,
    #[column("client_name")]
    pub name: Option<Name>,
}

#[derive(Debug, Default, PartialEq, Record)]
pub struct Composed {
    #[embedded]
    pub simple: Simple,
    pub age: i64,
}

#[derive(Debug, Default, PartialEq, Record)]
pub struct ComposedPtr {
    #[embedded]
    pub simple: Option<Box<Simple>>,
    pub age: i64,
}

#[derive(Debug, Default, PartialEq, Record)]
pub struct AllTypes {
    pub string: String,
    pub bool: bool,
    pub int: isize,
    pub int8: i8,
    pub int32: i32,
    pub int64: i64,
    pub uint: usize,
    pub uint8: u8,
    pub uint32: u32,
    pub uint64: u64,
    pub float32: f32,
    pub float64: f64,
}

#[derive(Debug, Default, PartialEq, Record)]
pub struct AllTypesPtr {
    pub string: Option<String>,
    pub bool: Option<bool>,
    pub int: Option<isize>,
    pub int8: Option<i8>,
    pub int32: Option<i32>,
    pub int64: Option<i64>,
    pub uint: Option<usize>,
    pub uint8: Option<u8>,
    pub uint32: Option<u32>,
    pub uint64: Option<u64>,
    pub float32: Option<f32>,
    pub float64: Option<f64>,
}

pub fn simple_expected() -> Vec<Simple> {
    vec![
        Simple {
            id: 1,
            name: "Jose".into(),
        },
        Simple {
            id: 2,
            name: "Daniel".into(),
        },
        Simple {
            id: 3,
            name: "Vincent".into(),
        },
    ]
}
