//! `#[subscriber]` attribute implementation.

use proc_macro::TokenStream;
use quote::quote;
use syn::{
    FnArg, Ident, ItemFn, LitStr, Pat, ReturnType, Token, Type,
    parse::{Parse, ParseStream},
    parse_macro_input,
};

/// Arguments for the `#[subscriber]` macro.
struct SubscriberArgs {
    name: Option<String>,
    collect: bool,
}

impl Parse for SubscriberArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut name = None;
        let mut collect = false;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;

            match ident.to_string().as_str() {
                "name" => {
                    input.parse::<Token![=]>()?;
                    let lit: LitStr = input.parse()?;
                    name = Some(lit.value());
                }
                "collect" => collect = true,
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute: {}", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        Ok(SubscriberArgs { name, collect })
    }
}

pub fn subscriber_impl(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as SubscriberArgs);
    let input = parse_macro_input!(item as ItemFn);

    let fn_name = &input.sig.ident;
    let fn_vis = &input.vis;
    let fn_block = &input.block;

    if let Some(asyncness) = &input.sig.asyncness {
        return syn::Error::new_spanned(asyncness, "subscriber functions must not be async")
            .to_compile_error()
            .into();
    }

    if let ReturnType::Type(_, ty) = &input.sig.output {
        return syn::Error::new_spanned(ty, "subscriber functions must return `()`")
            .to_compile_error()
            .into();
    }

    let mut params: Vec<(&Pat, &Type)> = Vec::new();
    for arg in &input.sig.inputs {
        match arg {
            FnArg::Typed(pat_type) => params.push((&pat_type.pat, &pat_type.ty)),
            FnArg::Receiver(receiver) => {
                return syn::Error::new_spanned(receiver, "subscriber functions take no `self`")
                    .to_compile_error()
                    .into();
            }
        }
    }

    let (shape, mode, bindings) = match params.as_slice() {
        [(level, level_ty), (file, file_ty), (line, line_ty), (function, function_ty), (message, message_ty)] => (
            quote! { source },
            quote! { ::tracehub::WithSource },
            quote! {
                let __site = __record.site();
                let #level: #level_ty = __record.level();
                let #file: #file_ty = __site.file;
                let #line: #line_ty = __site.line;
                let #function: #function_ty = __site.function;
                let #message: #message_ty = __record.message();
            },
        ),
        [(level, level_ty), (message, message_ty)] => (
            quote! { plain },
            quote! { ::tracehub::WithoutSource },
            quote! {
                let #level: #level_ty = __record.level();
                let #message: #message_ty = __record.message();
            },
        ),
        _ => {
            return syn::Error::new_spanned(
                &input.sig.inputs,
                "subscriber functions take `(level, file, line, function, message)` or `(level, message)`",
            )
            .to_compile_error()
            .into();
        }
    };

    let struct_name = if let Some(ref custom_name) = args.name {
        Ident::new(custom_name, fn_name.span())
    } else {
        fn_name.clone()
    };

    // The facade knows which mode is active; it rejects a mismatched shape.
    let collect: Option<proc_macro2::TokenStream> = args.collect.then(|| {
        quote! {
            ::tracehub::__collect_subscriber!(#shape, #struct_name);
        }
    });

    let expanded = quote! {
        #[allow(non_camel_case_types)]
        #[derive(Clone, Copy, Debug, Default)]
        #[doc = concat!("Subscriber generated by `#[tracehub::subscriber]` on `", stringify!(#fn_name), "`")]
        #fn_vis struct #struct_name;

        impl ::tracehub::Subscriber<#mode> for #struct_name {
            #[allow(unused_variables)]
            fn on_record(&self, __record: &::tracehub::Record<'_, #mode>) {
                #bindings
                #fn_block
            }
        }

        #collect
    };

    TokenStream::from(expanded)
}
