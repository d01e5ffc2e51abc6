use syn::parse::ParseStream;

/// Argument of a `#[column(...)]` field attribute.
#[derive(Debug)]
pub(crate) enum Column {
    /// `#[column("name")]`
    Named(syn::LitStr),

    /// `#[column(skip)]`
    Skip,
}

mod kw {
    syn::custom_keyword!(skip);
}

impl Column {
    pub(super) fn from_ast(attr: &syn::Attribute) -> syn::Result<Column> {
        attr.parse_args_with(Column::parse_args)
    }

    fn parse_args(input: ParseStream) -> syn::Result<Column> {
        let lookahead = input.lookahead1();

        let column = if lookahead.peek(syn::LitStr) {
            let name: syn::LitStr = input.parse()?;
            if name.value().trim().is_empty() {
                return Err(syn::Error::new_spanned(name, "column name cannot be empty"));
            }
            Column::Named(name)
        } else if lookahead.peek(kw::skip) {
            input.parse::<kw::skip>()?;
            Column::Skip
        } else {
            return Err(lookahead.error());
        };

        if !input.is_empty() {
            return Err(input.error("expected a single column name or `skip`"));
        }

        Ok(column)
    }
}
