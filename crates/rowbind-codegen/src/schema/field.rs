use super::{ty, Column, Diagnostics};

#[derive(Debug)]
pub(crate) struct Field {
    /// Index of field in the containing record
    pub(crate) index: usize,

    /// Field attributes
    pub(crate) attrs: FieldAttr,

    /// Field identifier
    pub(crate) ident: syn::Ident,

    /// Field type
    pub(crate) ty: FieldTy,
}

#[derive(Debug)]
pub(crate) struct FieldAttr {
    /// Column name override or skip marker
    pub(crate) column: Option<Column>,

    /// The field is annotated with `#[embedded]`
    pub(crate) embedded: Option<syn::Attribute>,
}

#[derive(Debug)]
pub(crate) enum FieldTy {
    /// Coerced from a single cell
    Value,

    /// A record flattened into the enclosing one
    Embedded(syn::Type),

    /// A type no cell can be coerced into
    Unsupported(syn::Type),
}

impl Field {
    pub(crate) fn is_skipped(&self) -> bool {
        matches!(self.attrs.column, Some(Column::Skip))
    }

    /// Explicit column name, if any.
    pub(crate) fn column_name(&self) -> Option<&syn::LitStr> {
        match &self.attrs.column {
            Some(Column::Named(name)) => Some(name),
            _ => None,
        }
    }

    pub(super) fn from_ast(
        field: &syn::Field,
        record_ident: &syn::Ident,
        index: usize,
    ) -> syn::Result<Self> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "record fields must be named"));
        };

        let mut diag = Diagnostics::new();
        let mut attrs = FieldAttr {
            column: None,
            embedded: None,
        };

        for attr in &field.attrs {
            if attr.path().is_ident("column") {
                if attrs.column.is_some() {
                    diag.error(attr, "duplicate #[column] attribute");
                } else {
                    attrs.column = diag.check(Column::from_ast(attr));
                }
            } else if attr.path().is_ident("embedded") {
                if attrs.embedded.is_some() {
                    diag.error(attr, "duplicate #[embedded] attribute");
                } else if !matches!(attr.meta, syn::Meta::Path(_)) {
                    diag.error(attr, "#[embedded] does not take arguments");
                } else {
                    attrs.embedded = Some(attr.clone());
                }
            }
        }

        if let (Some(embedded), Some(_)) = (&attrs.embedded, &attrs.column) {
            diag.error(
                embedded,
                "#[embedded] fields cannot have a #[column] attribute",
            );
        }

        let mut field_ty = field.ty.clone();
        ty::rewrite_self(&mut field_ty, record_ident);

        if attrs.embedded.is_some() && ty::is_unsupported(&field_ty) {
            diag.error(
                &field.ty,
                "#[embedded] fields must be records, `Box`ed records or `Option`al records",
            );
        }

        let ty = if attrs.embedded.is_some() {
            FieldTy::Embedded(field_ty)
        } else if ty::is_unsupported(&field_ty) {
            FieldTy::Unsupported(field_ty)
        } else {
            FieldTy::Value
        };

        diag.finish(Self {
            index,
            attrs,
            ident: ident.clone(),
            ty,
        })
    }
}
