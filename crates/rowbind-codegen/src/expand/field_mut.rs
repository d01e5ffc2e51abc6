use super::{util, Expand};
use crate::schema::FieldTy;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_field_mut(&self) -> TokenStream {
        let rowbind = &self.rowbind;

        // Skipped fields get no arm: their types need not be decodable
        let arms = self
            .record
            .fields
            .iter()
            .filter(|field| !field.is_skipped())
            .map(|field| {
                let ident = &field.ident;
                let index = util::int(field.index);

                let value = match &field.ty {
                    FieldTy::Value => quote! {
                        #rowbind::FieldMut::Value(#rowbind::Field::slot(&mut self.#ident))
                    },
                    FieldTy::Embedded(_) => quote! {
                        #rowbind::FieldMut::Embedded(#rowbind::Target::record_mut(&mut self.#ident))
                    },
                    FieldTy::Unsupported(ty) => {
                        let type_name = util::type_name(ty);
                        quote! {
                            #rowbind::FieldMut::Value(#rowbind::Slot::Unsupported(#type_name))
                        }
                    }
                };

                quote!(#index => Some(#value),)
            });

        quote! {
            fn field_mut(&mut self, index: usize) -> Option<#rowbind::FieldMut<'_>> {
                match index {
                    #( #arms )*
                    _ => None,
                }
            }
        }
    }
}
