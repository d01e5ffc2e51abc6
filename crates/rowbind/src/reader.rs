//! The record reader: headers on first use, then one record per row.

mod builder;
pub use builder::ReaderBuilder;

mod headers;
pub use headers::Headers;

mod records;
pub use records::Records;

use rowbind_core::{
    value::coerce, Error, Record, Result, Row, RowSource, Schema, SchemaCache, Target,
};

use std::rc::Rc;
use tracing::trace;

/// Decodes rows from a [`RowSource`] into records.
///
/// The first row read is the header. Each later row is decoded by matching
/// header columns against the record's schema; cells in unmapped columns, and
/// fields without a column, are left alone.
///
/// Schemas are resolved once per record type and cached for the lifetime of
/// the reader. The cache can be carried over to another reader with
/// [`Reader::into_parts`] and [`Reader::with_cache`].
#[derive(Debug)]
pub struct Reader<S> {
    source: S,
    headers: Headers,
    schemas: SchemaCache,

    /// Data rows consumed so far
    position: usize,
}

impl<S: RowSource> Reader<S> {
    pub fn new(source: S) -> Reader<S> {
        Reader::with_cache(source, SchemaCache::new())
    }

    /// Creates a reader reusing schemas resolved by an earlier reader.
    pub fn with_cache(source: S, schemas: SchemaCache) -> Reader<S> {
        Reader {
            source,
            headers: Headers::new(),
            schemas,
            position: 0,
        }
    }

    /// Returns the normalized header, reading it on the first call.
    ///
    /// Column names are trimmed and lowercased. The outcome is cached: later
    /// calls never touch the source, and a failed header keeps failing.
    pub fn headers(&mut self) -> Result<&[String]> {
        self.headers.get_or_read(&mut self.source)
    }

    /// Returns the schema for `T`, resolving it on first use.
    pub fn schema<T: Record>(&mut self) -> Rc<Schema> {
        self.schemas.get_or_resolve::<T>()
    }

    /// Decodes the next row into `target`.
    ///
    /// Returns an error for which [`Error::is_end_of_stream`] holds once the
    /// source is exhausted. A coercion failure stops the row where it
    /// happened; fields already written keep their new values.
    pub fn read<T: Target>(&mut self, target: &mut T) -> Result<()> {
        let headers = self.headers.get_or_read(&mut self.source)?;
        let schema = self.schemas.get_or_resolve::<T::Record>();

        // Optional targets are allocated even when no row follows
        let record = target.record_mut();

        let Some(row) = self.source.read_row()? else {
            return Err(Error::end_of_stream());
        };

        self.position += 1;
        trace!(row = self.position, cells = row.len(), "decoding row");

        decode(headers, &schema, &row, record)
            .map_err(|err| err.context(format_args!("row {}", self.position)))
    }

    /// Decodes every remaining row, appending one element per row.
    ///
    /// Stops cleanly at the end of the stream. On any other error, the
    /// elements decoded before the failing row stay in `records`.
    pub fn read_all<T: Target + Default>(&mut self, records: &mut Vec<T>) -> Result<()> {
        let before = records.len();

        loop {
            let mut record = T::default();

            match self.read(&mut record) {
                Ok(()) => records.push(record),
                Err(err) if err.is_end_of_stream() => break,
                Err(err) => return Err(err),
            }
        }

        tracing::debug!(records = records.len() - before, "read all records");
        Ok(())
    }

    /// Returns an iterator decoding one record per remaining row.
    pub fn records<T: Target + Default>(&mut self) -> Records<'_, S, T> {
        Records::new(self)
    }
}

impl<S> Reader<S> {
    /// Number of data rows consumed so far, the header excluded.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Splits the reader into its source and its schema cache.
    pub fn into_parts(self) -> (S, SchemaCache) {
        (self.source, self.schemas)
    }
}

fn decode(headers: &[String], schema: &Schema, row: &Row, record: &mut dyn Record) -> Result<()> {
    // Cells past the header, and columns past the row, are ignored
    for (column, cell) in headers.iter().zip(row) {
        let Some(path) = schema.get(column) else {
            continue;
        };

        let slot = path.resolve(&mut *record)?;
        coerce(slot, cell).map_err(|err| err.context(format_args!("column `{column}`")))?;
    }

    Ok(())
}
