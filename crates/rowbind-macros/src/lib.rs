extern crate proc_macro;

use proc_macro::TokenStream;

/// Derives `Record` (plus `Target` and `Field`) for a struct with named
/// fields.
///
/// Field attributes:
///
/// - `#[column("name")]` maps the field to the column `name`
///   (case-insensitively). Without it, the field's own name is used.
/// - `#[column(skip)]` leaves the field out of the mapping.
/// - `#[embedded]` promotes the fields of a nested record (`T`, `Box<T>`,
///   `Option<T>` or `Option<Box<T>>`) into this one.
///
/// Container attributes:
///
/// - `#[record(text)]` lets the record be used as a plain field of another
///   record, decoded from one cell with its `TextDecode` impl.
#[proc_macro_derive(Record, attributes(column, embedded, record))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    match rowbind_codegen::generate(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
