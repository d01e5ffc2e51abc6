use super::{Diagnostics, Field, RecordAttr};

#[derive(Debug)]
pub(crate) struct Record {
    /// Type identifier
    pub(crate) ident: syn::Ident,

    /// Record fields, in declaration order
    pub(crate) fields: Vec<Field>,

    /// Container attributes
    pub(crate) attr: RecordAttr,
}

impl Record {
    pub(crate) fn from_ast(ast: &syn::DeriveInput) -> syn::Result<Self> {
        let syn::Data::Struct(data) = &ast.data else {
            return Err(syn::Error::new_spanned(
                &ast.ident,
                "unsupported target shape: `Record` can only be derived for structs",
            ));
        };

        let syn::Fields::Named(node) = &data.fields else {
            return Err(syn::Error::new_spanned(
                &data.fields,
                "unsupported target shape: record fields must be named",
            ));
        };

        // Generics are not supported yet
        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "record generics are not supported",
            ));
        }

        let mut attr = RecordAttr::default();
        let mut fields = vec![];
        let mut diag = Diagnostics::new();

        diag.check(attr.populate_from_ast(&ast.attrs));

        for (index, node) in node.named.iter().enumerate() {
            fields.extend(diag.check(Field::from_ast(node, &ast.ident, index)));
        }

        diag.finish(Self {
            ident: ast.ident.clone(),
            fields,
            attr,
        })
    }
}
