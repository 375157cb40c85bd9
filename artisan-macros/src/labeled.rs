use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, DeriveInput, Expr, ExprLit, Lit};

fn get_label(ast: &DeriveInput) -> syn::Result<String> {
    for attr in &ast.attrs {
        if attr.path().is_ident("artisan") {
            let mut label = None;
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("label") {
                    let value = meta.value()?;
                    let expr: Expr = value.parse()?;
                    match expr {
                        Expr::Lit(ExprLit { lit: Lit::Str(s), .. }) => label = Some(s.value()),
                        other => {
                            return Err(syn::Error::new_spanned(other, "label must be a string literal"));
                        }
                    }
                }
                Ok(())
            })?;
            if let Some(l) = label {
                return Ok(l);
            }
        }
    }
    Ok(ast.ident.to_string())
}

pub fn expand(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);
    let name = &ast.ident;
    let label = match get_label(&ast) {
        Ok(label) => label,
        Err(e) => return e.to_compile_error().into(),
    };
    let (impl_generics, ty_generics, where_clause) = ast.generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics artisan_core::traits::Labeled for #name #ty_generics #where_clause {
            const LABEL: &'static str = #label;
        }
    };

    expanded.into()
}

#[cfg(test)]
mod tests {
    use super::get_label;
    use syn::{parse_quote, DeriveInput};

    #[test]
    fn test_label_attribute() {
        let ast: DeriveInput = parse_quote! {
            #[artisan(label = "Wallet")]
            struct W;
        };
        assert_eq!(get_label(&ast).unwrap(), "Wallet");
    }

    #[test]
    fn test_label_defaults_to_ident() {
        let ast: DeriveInput = parse_quote! { struct Person; };
        assert_eq!(get_label(&ast).unwrap(), "Person");
    }

    #[test]
    fn test_non_string_label_is_error() {
        let ast: DeriveInput = parse_quote! {
            #[artisan(label = 5)]
            struct W;
        };
        let err = get_label(&ast).unwrap_err();
        assert!(err.to_string().contains("string literal"));
    }

    #[test]
    fn test_malformed_attribute_is_error() {
        let ast: DeriveInput = parse_quote! {
            #[artisan(label)]
            struct W;
        };
        assert!(get_label(&ast).is_err());
    }
}
