use super::Reader;
use rowbind_core::{Result, RowSource, Target};

use std::marker::PhantomData;

/// Iterator returned by [`Reader::records`].
///
/// Yields one decoded record per row. Ends at the end of the stream, and
/// after yielding the first error.
#[derive(Debug)]
pub struct Records<'a, S, T> {
    reader: &'a mut Reader<S>,
    done: bool,
    _p: PhantomData<fn() -> T>,
}

impl<'a, S, T> Records<'a, S, T> {
    pub(super) fn new(reader: &'a mut Reader<S>) -> Records<'a, S, T> {
        Records {
            reader,
            done: false,
            _p: PhantomData,
        }
    }
}

impl<S: RowSource, T: Target + Default> Iterator for Records<'_, S, T> {
    type Item = Result<T>;

    fn next(&mut self) -> Option<Result<T>> {
        if self.done {
            return None;
        }

        let mut record = T::default();

        match self.reader.read(&mut record) {
            Ok(()) => Some(Ok(record)),
            Err(err) => {
                self.done = true;

                if err.is_end_of_stream() {
                    None
                } else {
                    Some(Err(err))
                }
            }
        }
    }
}

impl<S: RowSource, T: Target + Default> std::iter::FusedIterator for Records<'_, S, T> {}
