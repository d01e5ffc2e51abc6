use super::Reader;
use rowbind_core::{Record, Result, SchemaCache};

use std::{fs::File, io, path::Path};

/// Configures a [`Reader`] over delimited text.
///
/// Tokenizing is done by the `csv` crate. The header row is always handed to
/// the reader rather than consumed by the tokenizer, and rows may have any
/// number of cells.
///
/// ```
/// let mut reader = rowbind::ReaderBuilder::new()
///     .delimiter(b';')
///     .from_reader("id;name\n1;Jose\n".as_bytes());
///
/// assert_eq!(reader.headers()?, ["id", "name"]);
/// # Ok::<(), rowbind::Error>(())
/// ```
#[derive(Clone)]
pub struct ReaderBuilder {
    delimiter: u8,
    quote: Option<u8>,
    escape: Option<u8>,
    comment: Option<u8>,
    trim: bool,

    /// Record types resolved up front into every reader built
    registered: Vec<fn(&mut SchemaCache)>,
}

impl ReaderBuilder {
    pub fn new() -> ReaderBuilder {
        ReaderBuilder::default()
    }

    /// Field delimiter, `,` by default.
    pub fn delimiter(&mut self, delimiter: u8) -> &mut Self {
        self.delimiter = delimiter;
        self
    }

    /// Quote character, `"` by default. `None` disables quoting.
    pub fn quote(&mut self, quote: Option<u8>) -> &mut Self {
        self.quote = quote;
        self
    }

    /// Escape character for quotes inside quoted cells. When unset, quotes
    /// are escaped by doubling them.
    pub fn escape(&mut self, escape: Option<u8>) -> &mut Self {
        self.escape = escape;
        self
    }

    /// Lines starting with this byte are skipped.
    pub fn comment(&mut self, comment: Option<u8>) -> &mut Self {
        self.comment = comment;
        self
    }

    /// Trim whitespace around every cell, data rows included.
    pub fn trim(&mut self, trim: bool) -> &mut Self {
        self.trim = trim;
        self
    }

    /// Resolves the schema of `T` when a reader is built instead of on the
    /// first read.
    pub fn register<T: Record>(&mut self) -> &mut Self {
        self.registered.push(|schemas| {
            schemas.get_or_resolve::<T>();
        });
        self
    }

    pub fn from_reader<R: io::Read>(&self, rdr: R) -> Reader<csv::Reader<R>> {
        Reader::with_cache(self.csv().from_reader(rdr), self.schemas())
    }

    pub fn from_path(&self, path: impl AsRef<Path>) -> Result<Reader<csv::Reader<File>>> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "opening row source");

        let source = self
            .csv()
            .from_path(path)
            .map_err(anyhow::Error::from)?;

        Ok(Reader::with_cache(source, self.schemas()))
    }

    fn csv(&self) -> csv::ReaderBuilder {
        let mut builder = csv::ReaderBuilder::new();

        builder
            .has_headers(false)
            .flexible(true)
            .delimiter(self.delimiter)
            .quoting(self.quote.is_some())
            .escape(self.escape)
            .double_quote(self.escape.is_none())
            .comment(self.comment)
            .trim(if self.trim {
                csv::Trim::All
            } else {
                csv::Trim::None
            });

        if let Some(quote) = self.quote {
            builder.quote(quote);
        }

        builder
    }

    fn schemas(&self) -> SchemaCache {
        let mut schemas = SchemaCache::new();
        for register in &self.registered {
            register(&mut schemas);
        }
        schemas
    }
}

impl Default for ReaderBuilder {
    fn default() -> ReaderBuilder {
        ReaderBuilder {
            delimiter: b',',
            quote: Some(b'"'),
            escape: None,
            comment: None,
            trim: false,
            registered: vec![],
        }
    }
}

impl std::fmt::Debug for ReaderBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReaderBuilder")
            .field("delimiter", &self.delimiter)
            .field("quote", &self.quote)
            .field("escape", &self.escape)
            .field("comment", &self.comment)
            .field("trim", &self.trim)
            .field("registered", &self.registered.len())
            .finish()
    }
}
