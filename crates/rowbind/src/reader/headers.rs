use rowbind_core::{Error, Result, RowSource};

use indexmap::IndexSet;

/// The normalized header of a row stream.
///
/// Read from the first row on first use. Both outcomes are cached: a header
/// that failed to load keeps returning the same error.
#[derive(Debug, Default)]
pub struct Headers {
    state: Option<Result<Vec<String>>>,
}

impl Headers {
    pub fn new() -> Headers {
        Headers::default()
    }

    /// True once the header row has been consumed, successfully or not.
    pub fn is_loaded(&self) -> bool {
        self.state.is_some()
    }

    /// Returns the header, reading it from `source` if not loaded yet.
    pub fn get_or_read(&mut self, source: &mut impl RowSource) -> Result<&[String]> {
        match self.state.get_or_insert_with(|| read(source)) {
            Ok(columns) => Ok(columns),
            Err(err) => Err(err.clone()),
        }
    }
}

fn read(source: &mut impl RowSource) -> Result<Vec<String>> {
    let Some(row) = source.read_row()? else {
        return Err(Error::end_of_stream());
    };

    let mut columns = IndexSet::with_capacity(row.len());

    for cell in &row {
        let column = cell.trim().to_lowercase();

        if columns.contains(&column) {
            return Err(Error::malformed_headers(column));
        }

        columns.insert(column);
    }

    tracing::debug!(columns = columns.len(), "loaded headers");
    Ok(columns.into_iter().collect())
}
