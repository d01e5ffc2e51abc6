use proc_macro2::TokenStream;

pub(crate) fn int(v: usize) -> TokenStream {
    use std::str::FromStr;
    TokenStream::from_str(&v.to_string()).expect("failed to parse int")
}

/// Renders a type the way it is shown in error messages.
pub(crate) fn type_name(ty: &syn::Type) -> String {
    use quote::ToTokens;

    let mut name = String::new();
    let tokens = ty.to_token_stream().to_string();

    // `quote` separates every token with a space
    for (i, part) in tokens.split(' ').enumerate() {
        let prev = name.chars().last();
        let spaced = i > 0
            && !matches!(prev, Some('&' | '(' | '[' | '<' | '\''))
            && !matches!(part, ")" | "]" | ">" | "," | ";" | "<");
        if spaced {
            name.push(' ');
        }
        name.push_str(part);
    }

    name
}
