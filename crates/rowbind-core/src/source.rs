//! The boundary to row tokenizers.

use crate::Result;

/// One row of cells, in column order.
pub type Row = Vec<String>;

/// A forward-only source of rows.
///
/// Implemented by the tokenizer that splits raw text into cells. The first
/// row a reader pulls is the header.
pub trait RowSource {
    /// Reads the next row. `Ok(None)` signals the end of the stream.
    fn read_row(&mut self) -> Result<Option<Row>>;

    /// Reads every remaining row.
    fn read_all_rows(&mut self) -> Result<Vec<Row>> {
        let mut rows = vec![];
        while let Some(row) = self.read_row()? {
            rows.push(row);
        }
        Ok(rows)
    }
}

impl<S: RowSource + ?Sized> RowSource for &mut S {
    fn read_row(&mut self) -> Result<Option<Row>> {
        (**self).read_row()
    }
}

impl<S: RowSource + ?Sized> RowSource for Box<S> {
    fn read_row(&mut self) -> Result<Option<Row>> {
        (**self).read_row()
    }
}

#[cfg(feature = "csv")]
impl<R: std::io::Read> RowSource for csv::Reader<R> {
    fn read_row(&mut self) -> Result<Option<Row>> {
        let mut record = csv::StringRecord::new();

        if !self.read_record(&mut record).map_err(anyhow::Error::from)? {
            return Ok(None);
        }

        Ok(Some(record.iter().map(String::from).collect()))
    }
}

/// Row source over rows already in memory.
#[derive(Debug, Clone)]
pub struct Rows<I> {
    rows: I,
}

impl<I> Rows<I>
where
    I: Iterator<Item = Row>,
{
    pub fn new(rows: impl IntoIterator<IntoIter = I, Item = Row>) -> Rows<I> {
        Rows {
            rows: rows.into_iter(),
        }
    }
}

impl Rows<std::vec::IntoIter<Row>> {
    /// Builds a source from string slices, handy for literals.
    pub fn from_strs<R, C>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        let rows: Vec<Row> = rows
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect();
        Rows::new(rows)
    }
}

impl<I> RowSource for Rows<I>
where
    I: Iterator<Item = Row>,
{
    fn read_row(&mut self) -> Result<Option<Row>> {
        Ok(self.rows.next())
    }
}
