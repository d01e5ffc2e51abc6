use super::Expand;
use crate::schema::FieldTy;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_record_type(&self) -> TokenStream {
        let rowbind = &self.rowbind;
        let name = self.record.ident.to_string();
        let fields = self.expand_field_decls();

        quote! {
            fn record_type() -> &'static #rowbind::schema::RecordType {
                #[allow(unused_imports)]
                use #rowbind::schema::{Embedded, FieldDecl, FieldKind, RecordType};

                static TYPE: RecordType = RecordType {
                    name: #name,
                    fields: &[ #( #fields ),* ],
                };

                &TYPE
            }
        }
    }

    fn expand_field_decls(&self) -> impl Iterator<Item = TokenStream> + '_ {
        let rowbind = &self.rowbind;

        self.record.fields.iter().map(move |field| {
            let name = field.ident.to_string();

            let kind = match &field.ty {
                FieldTy::Embedded(ty) => quote! {
                    FieldKind::Embedded(Embedded {
                        record_type: <<#ty as #rowbind::Target>::Record as #rowbind::Record>::record_type,
                        indirect: <#ty as #rowbind::Target>::INDIRECT,
                    })
                },
                _ if field.is_skipped() => quote!(FieldKind::Skip),
                _ => match field.column_name() {
                    Some(tag) => quote!(FieldKind::Column { tag: Some(#tag) }),
                    None => quote!(FieldKind::Column { tag: None }),
                },
            };

            quote! {
                FieldDecl {
                    name: #name,
                    kind: #kind,
                }
            }
        })
    }
}
