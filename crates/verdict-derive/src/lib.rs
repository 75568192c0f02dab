use proc_macro::TokenStream;

mod has_key;

/// Derive `verdict::traits::HasKey` for a struct with named fields.
///
/// The key is the field marked `#[key]`, or the fields marked `#[key]` in
/// declaration order for a composite key. Without any marker a field named
/// `id` is used.
#[proc_macro_derive(HasKey, attributes(key))]
pub fn derive_has_key(input: TokenStream) -> TokenStream {
    has_key::derive_has_key(input.into()).into()
}
