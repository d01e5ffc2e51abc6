/// Returns `true` for field types the coercer can never populate. Fields of
/// these types compile, and fail at decode time when their column shows up.
pub(super) fn is_unsupported(ty: &syn::Type) -> bool {
    match ty {
        syn::Type::Paren(ty) => is_unsupported(&ty.elem),
        syn::Type::Group(ty) => is_unsupported(&ty.elem),
        syn::Type::Array(_)
        | syn::Type::BareFn(_)
        | syn::Type::ImplTrait(_)
        | syn::Type::Never(_)
        | syn::Type::Ptr(_)
        | syn::Type::Reference(_)
        | syn::Type::Slice(_)
        | syn::Type::TraitObject(_)
        | syn::Type::Tuple(_) => true,
        _ => false,
    }
}

/// Replaces `Self` with the record's identifier, so the type can be named
/// from items nested in the generated impl.
pub(super) fn rewrite_self(ty: &mut syn::Type, record: &syn::Ident) {
    use syn::visit_mut::VisitMut;

    struct RewriteSelf<'a>(&'a syn::Ident);

    impl VisitMut for RewriteSelf<'_> {
        fn visit_path_mut(&mut self, path: &mut syn::Path) {
            syn::visit_mut::visit_path_mut(self, path);

            if path.is_ident("Self") {
                path.segments[0].ident = self.0.clone();
            }
        }
    }

    RewriteSelf(record).visit_type_mut(ty);
}
