use quote::ToTokens;
use std::fmt::Display;

/// Errors gathered while parsing one derive input, reported together.
#[derive(Debug, Default)]
pub(crate) struct Diagnostics {
    errors: Vec<syn::Error>,
}

impl Diagnostics {
    pub(crate) fn new() -> Diagnostics {
        Diagnostics::default()
    }

    /// Records an error pointing at `tokens`.
    pub(crate) fn error(&mut self, tokens: impl ToTokens, message: impl Display) {
        self.errors.push(syn::Error::new_spanned(tokens, message));
    }

    /// Keeps the value of `res`, recording its error instead if it failed.
    pub(crate) fn check<T>(&mut self, res: syn::Result<T>) -> Option<T> {
        res.map_err(|err| self.errors.push(err)).ok()
    }

    /// Returns `value` if nothing was recorded, or every error combined.
    pub(crate) fn finish<T>(self, value: T) -> syn::Result<T> {
        let combined = self.errors.into_iter().reduce(|mut acc, err| {
            acc.combine(err);
            acc
        });

        match combined {
            Some(err) => Err(err),
            None => Ok(value),
        }
    }
}
