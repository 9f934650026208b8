//! Human-readable rendering of declared field types.
//!
//! `TokenStream::to_string` separates every token with a space
//! (`Vec < String >`). The field table wants the type as a user would write
//! it, so spaces survive only between two word characters.

use quote::ToTokens as _;

/// Render `ty` compactly, e.g. `Option<Vec<u8>>` or `&'static str`.
pub(crate) fn type_label(ty: &syn::Type) -> String {
    let raw = ty.to_token_stream().to_string();
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(c) = chars.next() {
        if c != ' ' {
            out.push(c);
            continue;
        }
        let before = out.chars().next_back();
        let after = chars.peek().copied();
        if before.is_some_and(is_word) && after.is_some_and(|next| is_word(next) || next == '\'') {
            out.push(' ');
        }
    }
    out
}

const fn is_word(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[cfg(test)]
#[expect(clippy::expect_used, reason = "test inputs are literals")]
mod tests {
    //! Unit tests for declared type rendering.

    use super::type_label;
    use rstest::rstest;

    #[rstest]
    #[case::plain("u8", "u8")]
    #[case::generic("Vec < String >", "Vec<String>")]
    #[case::nested("Option<std::collections::HashMap<String, u32>>", "Option<std::collections::HashMap<String,u32>>")]
    #[case::static_ref("&'static str", "&'static str")]
    #[case::trait_object("Box<dyn Fn(u8) -> u8>", "Box<dyn Fn(u8)->u8>")]
    #[case::array("[u8; 4]", "[u8;4]")]
    fn renders_compact_type_text(#[case] input: &str, #[case] expected: &str) {
        let ty: syn::Type = syn::parse_str(input).expect("valid type");
        assert_eq!(type_label(&ty), expected);
    }
}
