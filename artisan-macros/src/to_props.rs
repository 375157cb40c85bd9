use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Expr, ExprLit, Fields, Lit, Type};

struct FieldInfo {
    ident: syn::Ident,
    prop_key: String,
    skip: bool,
    optional: bool,
}

fn is_option(ty: &Type) -> bool {
    match ty {
        Type::Path(p) => p
            .path
            .segments
            .last()
            .map(|seg| seg.ident == "Option")
            .unwrap_or(false),
        _ => false,
    }
}

fn parse_field(f: &syn::Field) -> syn::Result<FieldInfo> {
    let ident = f
        .ident
        .clone()
        .ok_or_else(|| syn::Error::new_spanned(f, "ToProps requires named fields"))?;
    let mut prop_key = ident.to_string();
    let mut skip = false;

    for attr in &f.attrs {
        if attr.path().is_ident("artisan") {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("skip") {
                    skip = true;
                } else if meta.path.is_ident("prop") {
                    let value = meta.value()?;
                    let expr: Expr = value.parse()?;
                    match expr {
                        Expr::Lit(ExprLit { lit: Lit::Str(s), .. }) => prop_key = s.value(),
                        other => {
                            return Err(syn::Error::new_spanned(other, "prop must be a string literal"));
                        }
                    }
                }
                Ok(())
            })?;
        }
    }

    Ok(FieldInfo {
        ident,
        prop_key,
        skip,
        optional: is_option(&f.ty),
    })
}

pub fn expand(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);
    let name = &ast.ident;
    let (impl_generics, ty_generics, where_clause) = ast.generics.split_for_impl();

    let fields = match &ast.data {
        Data::Struct(s) => match &s.fields {
            Fields::Named(named) => named.named.iter().collect::<Vec<_>>(),
            _ => {
                return syn::Error::new_spanned(&ast, "ToProps only supports structs with named fields")
                    .to_compile_error()
                    .into();
            }
        },
        _ => {
            return syn::Error::new_spanned(&ast, "ToProps only supports structs")
                .to_compile_error()
                .into();
        }
    };

    let mut inserts = Vec::new();

    for f in fields {
        let info = match parse_field(f) {
            Ok(info) => info,
            Err(e) => return e.to_compile_error().into(),
        };
        if info.skip {
            continue;
        }
        let ident = &info.ident;
        let key = &info.prop_key;
        // `None` fields are left out of the map rather than rendered.
        if info.optional {
            inserts.push(quote! {
                if let ::core::option::Option::Some(v) = &self.#ident {
                    props.insert(#key, ::core::clone::Clone::clone(v));
                }
            });
        } else {
            inserts.push(quote! {
                props.insert(#key, ::core::clone::Clone::clone(&self.#ident));
            });
        }
    }

    let expanded = quote! {
        impl #impl_generics artisan_core::traits::ToProps for #name #ty_generics #where_clause {
            fn to_props(&self) -> artisan_core::pattern::PropertySet {
                #[allow(unused_mut)]
                let mut props = artisan_core::pattern::PropertySet::new();
                #(#inserts)*
                props
            }
        }
    };

    expanded.into()
}
