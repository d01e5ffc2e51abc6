use super::Diagnostics;

#[derive(Debug, Default)]
pub(crate) struct RecordAttr {
    /// True if the record decodes from a single cell through its
    /// `TextDecode` impl when used as a nested field: `#[record(text)]`
    pub(crate) text: bool,
}

impl RecordAttr {
    pub(super) fn populate_from_ast(&mut self, attrs: &[syn::Attribute]) -> syn::Result<()> {
        let mut diag = Diagnostics::new();

        for attr in attrs {
            if !attr.path().is_ident("record") {
                continue;
            }

            let res = attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("text") {
                    if self.text {
                        return Err(meta.error("duplicate `text`"));
                    }
                    self.text = true;
                    Ok(())
                } else {
                    Err(meta.error("unexpected record attribute"))
                }
            });

            diag.check(res);
        }

        diag.finish(())
    }
}
