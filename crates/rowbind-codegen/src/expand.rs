mod field_mut;
mod record_type;
mod target;
mod util;

use crate::schema::Record;

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The record being expanded
    record: &'a Record,

    /// Path prefix for rowbind types
    rowbind: TokenStream,
}

impl Expand<'_> {
    fn expand(&self) -> TokenStream {
        let rowbind = &self.rowbind;
        let record_ident = &self.record.ident;
        let record_type = self.expand_record_type();
        let field_mut = self.expand_field_mut();
        let target_impl = self.expand_target_impl();
        let field_impl = self.expand_field_impl();

        wrap_in_const(quote! {
            impl #rowbind::Record for #record_ident {
                #record_type
                #field_mut
            }

            #target_impl
            #field_impl
        })
    }
}

pub(super) fn record(record: &Record) -> TokenStream {
    Expand {
        record,
        rowbind: quote!(_rowbind::codegen_support),
    }
    .expand()
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use rowbind as _rowbind;
            #code
        };
    }
}
