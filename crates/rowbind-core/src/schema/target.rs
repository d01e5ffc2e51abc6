use super::Record;

/// Something a row can be decoded into: a record, or a record behind a
/// `Box` or an `Option`.
///
/// `#[derive(Record)]` implements this for the record itself. `Option`
/// targets are allocated (with `Default`) when absent, which is how pointer
/// embeddings and top-level optional targets are populated.
pub trait Target {
    /// The record ultimately populated
    type Record: Record;

    /// True when the record sits behind an `Option`
    const INDIRECT: bool;

    /// Returns the record, allocating it first if absent.
    fn record_mut(&mut self) -> &mut Self::Record;
}

impl<T: Record> Target for Box<T> {
    type Record = T;

    const INDIRECT: bool = false;

    fn record_mut(&mut self) -> &mut T {
        self
    }
}

impl<T: Target + Default> Target for Option<T> {
    type Record = T::Record;

    const INDIRECT: bool = true;

    fn record_mut(&mut self) -> &mut T::Record {
        self.get_or_insert_with(T::default).record_mut()
    }
}
