use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Error, Field, Fields, Ident};

const MESSAGE: &str = "HasKey can only be derived for structs with named fields";

// derive_has_key
pub fn derive_has_key(input: TokenStream) -> TokenStream {
    match expand(input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

fn expand(input: TokenStream) -> Result<TokenStream, Error> {
    let input: DeriveInput = syn::parse2(input)?;

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            other => return Err(Error::new_spanned(other, MESSAGE)),
        },
        _ => return Err(Error::new_spanned(ident, MESSAGE)),
    };

    let key_fields = key_fields(ident, fields.iter())?;
    let body = match key_fields.as_slice() {
        [single] => quote! {
            ::verdict::key::EntityKey::new(::std::string::ToString::to_string(&self.#single))
        },
        parts => quote! {
            ::verdict::key::EntityKey::composite([
                #( ::std::string::ToString::to_string(&self.#parts) ),*
            ])
        },
    };

    Ok(quote! {
        impl #impl_generics ::verdict::traits::HasKey for #ident #ty_generics #where_clause {
            fn entity_key(&self) -> ::verdict::key::EntityKey {
                #body
            }
        }
    })
}

// Fields marked #[key] in declaration order, else the field named `id`.
fn key_fields<'a>(
    ident: &Ident,
    fields: impl Iterator<Item = &'a Field> + Clone,
) -> Result<Vec<&'a Ident>, Error> {
    let mut marked = Vec::new();
    for field in fields.clone() {
        let Some(attr) = field.attrs.iter().find(|attr| attr.path().is_ident("key")) else {
            continue;
        };
        attr.meta.require_path_only()?;
        if let Some(field_ident) = field.ident.as_ref() {
            marked.push(field_ident);
        }
    }
    if !marked.is_empty() {
        return Ok(marked);
    }

    fields
        .filter_map(|field| field.ident.as_ref())
        .find(|field_ident| *field_ident == "id")
        .map(|field_ident| vec![field_ident])
        .ok_or_else(|| {
            Error::new_spanned(
                ident,
                "HasKey needs a field marked #[key] or a field named `id`",
            )
        })
}

///
/// TESTS
///
