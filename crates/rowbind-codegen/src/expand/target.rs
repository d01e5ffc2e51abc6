use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_target_impl(&self) -> TokenStream {
        let rowbind = &self.rowbind;
        let record_ident = &self.record.ident;

        quote! {
            impl #rowbind::Target for #record_ident {
                type Record = Self;

                const INDIRECT: bool = false;

                fn record_mut(&mut self) -> &mut Self {
                    self
                }
            }
        }
    }

    /// As a plain (non-embedded) field, a record is a nested value that
    /// decodes from text only when it opts in with `#[record(text)]`.
    pub(super) fn expand_field_impl(&self) -> TokenStream {
        let rowbind = &self.rowbind;
        let record_ident = &self.record.ident;

        let nested = if self.record.attr.text {
            quote!(#rowbind::Nested::new(self))
        } else {
            quote!(#rowbind::Nested::opaque::<Self>())
        };

        quote! {
            impl #rowbind::Field for #record_ident {
                fn slot(&mut self) -> #rowbind::Slot<'_> {
                    #rowbind::Slot::Nested(#nested)
                }
            }
        }
    }
}
