//! Shared fixtures for the end-to-end tests.

pub mod models;

use rowbind::{Reader, Result, Row, RowSource};
use std::path::PathBuf;

pub use std_util::prelude::*;

/// Opens a file under `testdata/` with default reader options.
pub fn open(name: &str) -> Reader<impl RowSource> {
    init_tracing();

    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("testdata")
        .join(name);

    assert_ok!(rowbind::ReaderBuilder::new().from_path(path))
}

/// Reader over in-memory text.
pub fn from_str(input: &str) -> Reader<impl RowSource + '_> {
    init_tracing();
    rowbind::ReaderBuilder::new().from_reader(input.as_bytes())
}

/// Wraps a row source, counting calls to `read_row`.
#[derive(Debug)]
pub struct Counting<S> {
    inner: S,
    pub reads: usize,
}

impl<S> Counting<S> {
    pub fn new(inner: S) -> Counting<S> {
        Counting { inner, reads: 0 }
    }
}

impl<S: RowSource> RowSource for Counting<S> {
    fn read_row(&mut self) -> Result<Option<Row>> {
        self.reads += 1;
        self.inner.read_row()
    }
}
