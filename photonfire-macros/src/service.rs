//! Implementation of the `#[photonfire_service]` attribute macro.

use photonfire_define::Diagnostic;
use photonfire_gen::frontend::{describe_item, describe_trait, strip_annotations};
use photonfire_gen::synthesize;
use proc_macro2::{Span, TokenStream};
use quote::{ToTokens, quote};
use syn::{Error, Item, ItemTrait, Result, TraitItem, parse_quote, parse2};

/// Main implementation for the `#[photonfire_service]` attribute macro.
pub fn service_impl(attr: TokenStream, item: TokenStream) -> TokenStream {
    match service_inner(attr, item) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

fn service_inner(attr: TokenStream, item: TokenStream) -> Result<TokenStream> {
    if !attr.is_empty() {
        return Err(Error::new_spanned(
            attr,
            "`photonfire_service` takes no arguments",
        ));
    }

    let item: Item = parse2(item)?;
    let Item::Trait(mut item_trait) = item else {
        // Keep the item so the only error is the one reported here.
        let output = synthesize(&describe_item(&item));
        let errors = output
            .diagnostics
            .iter()
            .map(|d| Error::new(Span::call_site(), d.message()).to_compile_error());
        return Ok(quote! {
            #item
            #(#errors)*
        });
    };

    let output = synthesize(&describe_trait(&item_trait));
    let errors: Vec<TokenStream> = output
        .diagnostics
        .iter()
        .map(|d| diagnostic_error(&item_trait, d))
        .collect();

    strip_annotations(&mut item_trait);
    item_trait
        .attrs
        .push(parse_quote!(#[allow(async_fn_in_trait)]));

    let implementation = output.implementation;
    Ok(quote! {
        #item_trait

        #implementation

        #(#errors)*
    })
}

/// Spans a diagnostic on the offending method signature or associated item,
/// or on the trait name when it concerns the whole declaration.
fn diagnostic_error(item: &ItemTrait, diagnostic: &Diagnostic) -> TokenStream {
    let message = diagnostic.message();
    let spanned = diagnostic.location.member.as_deref().and_then(|member| {
        item.items.iter().find_map(|trait_item| match trait_item {
            TraitItem::Fn(f) if f.sig.ident == member => Some(f.sig.to_token_stream()),
            TraitItem::Const(c) if c.ident == member => Some(c.to_token_stream()),
            TraitItem::Type(t) if t.ident == member => Some(t.to_token_stream()),
            _ => None,
        })
    });

    match spanned {
        Some(tokens) => Error::new_spanned(tokens, message).to_compile_error(),
        None => Error::new_spanned(&item.ident, message).to_compile_error(),
    }
}
