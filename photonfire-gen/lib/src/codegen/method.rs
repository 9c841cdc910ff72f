//! Per-method GET body synthesis.
//!
//! Each routed contract method becomes an `async fn` that:
//!
//! 1. evaluates the route's path expression,
//! 2. parses the client's base URL and appends the path to it,
//! 3. sends every parameter as a query item in declaration order,
//! 4. applies the client's default headers,
//! 5. performs the request through the client's transport,
//! 6. decodes the body as JSON into the method's success type.
//!
//! ## Example
//!
//! For `#[photonfire_get("/account")] async fn get_account(&self, id: String)
//! -> Result<Account, PhotonfireError>` the body reads:
//!
//! ```ignore
//! async fn get_account(&self, id: String) -> Result<Account, PhotonfireError> {
//!     let append_path = "/account";
//!     let mut url_components = ::photonfire::reqwest::Url::parse(self.client.base_url())
//!         .map_err(|_| ::photonfire::PhotonfireError::parameter("failed to create URLComponents"))?;
//!     // path join, query items, header application ...
//!     let data = self.client.session().perform(request).await?;
//!     Ok(self.client.json_decoder().decode::<Account>(&data)?)
//! }
//! ```

use photonfire_define::{
    ArgumentValue, DiagnosticKind, HttpVerb, InterfaceDescriptor, Location, MethodDescriptor,
};
use proc_macro2::{Span, TokenStream};
use quote::{ToTokens, quote};
use syn::{Expr, Ident, LitStr, Type};
use tracing::{debug, trace};

use crate::classifier::classify;
use crate::diagnostics::DiagnosticReporter;

/// Argument name reported when a route or its path expression is missing.
pub const APPEND_PATH_EXPR: &str = "appendPathExpr";

/// Message of the error returned when the base URL does not parse.
pub const URL_COMPONENTS_ERROR: &str = "failed to create URLComponents";

/// Message of the error returned when the joined URL cannot be used.
pub const URL_ERROR: &str = "failed to create url";

/// One synthesized trait method.
#[derive(Debug, Clone)]
pub struct MethodImplementation {
    /// Method name.
    pub name: String,
    /// HTTP verb the body sends.
    pub verb: HttpVerb,
    /// Query keys in the order they are sent.
    pub query_keys: Vec<String>,
    /// The complete `async fn` item.
    pub tokens: TokenStream,
}

impl ToTokens for MethodImplementation {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        tokens.extend(self.tokens.clone());
    }
}

/// Synthesizes the implementation of one contract method.
///
/// Returns `None` and reports a diagnostic when the method has no usable
/// route, has an unsupported signature, or carries a type or expression that
/// does not parse.
pub fn synthesize_method(
    interface: &InterfaceDescriptor,
    method: &MethodDescriptor,
    reporter: &mut DiagnosticReporter,
) -> Option<MethodImplementation> {
    let location = Location::member(&interface.name, &method.name);

    let Some((verb, path_arg)) = method
        .route()
        .and_then(|(verb, annotation)| annotation.first_argument().map(|arg| (verb, arg)))
    else {
        reporter.report(
            DiagnosticKind::MissingArgument(vec![APPEND_PATH_EXPR.to_string()]),
            location,
        );
        return None;
    };

    if !method.is_async {
        reporter.report(
            DiagnosticKind::UnsupportedSignature("method must be async".to_string()),
            location,
        );
        return None;
    }
    if !method.has_receiver {
        reporter.report(
            DiagnosticKind::UnsupportedSignature("method must take `&self`".to_string()),
            location,
        );
        return None;
    }
    if method.is_generic {
        reporter.report(
            DiagnosticKind::UnsupportedSignature(
                "method must not declare generics or lifetimes".to_string(),
            ),
            location,
        );
        return None;
    }

    let mut missing = Vec::new();
    let name = parse_or_missing::<Ident>(&method.name, "name", &mut missing);
    let append_path = match path_tokens(&path_arg.value) {
        Ok(tokens) => Some(tokens),
        Err(_) => {
            missing.push(APPEND_PATH_EXPR.to_string());
            None
        }
    };
    let output = parse_or_missing::<Type>(&method.output, "output", &mut missing);
    let return_type = parse_or_missing::<Type>(&method.return_type, "returnType", &mut missing);

    let mut params = Vec::with_capacity(method.parameters.len());
    let mut query_keys = Vec::with_capacity(method.parameters.len());
    for parameter in &method.parameters {
        let ident = binding_ident(&parameter.local_name);
        let ty = syn::parse_str::<Type>(&parameter.type_name);
        match (ident, ty) {
            (Ok(ident), Ok(ty)) => {
                let key = classify(parameter);
                trace!(parameter = %parameter.local_name, key = %key, "query key classified");
                query_keys.push(key);
                params.push((ident, ty));
            }
            _ => missing.push(parameter.local_name.clone()),
        }
    }

    let (Some(name), Some(append_path), Some(output), Some(return_type)) =
        (name, append_path, output, return_type)
    else {
        reporter.report(DiagnosticKind::MissingArgument(missing), location);
        return None;
    };
    if !missing.is_empty() {
        reporter.report(DiagnosticKind::MissingArgument(missing), location);
        return None;
    }

    let verb_tokens = verb_tokens(verb);
    let signature = params.iter().map(|(ident, ty)| quote! { #ident: #ty });
    let query_items = params
        .iter()
        .zip(&query_keys)
        .map(|((ident, _), key)| quote! { (#key, #ident.to_string()) });
    // Query values are captured before any local binding can shadow a parameter.
    let count = params.len();
    let (query_decl, query_append) = if params.is_empty() {
        (TokenStream::new(), TokenStream::new())
    } else {
        (
            quote! {
                let query_items: [(&str, ::std::string::String); #count] = [#(#query_items),*];
            },
            quote! {
                {
                    let mut query = url_components.query_pairs_mut();
                    for (name, value) in &query_items {
                        query.append_pair(name, value);
                    }
                }
            },
        )
    };

    let tokens = quote! {
        async fn #name(&self, #(#signature),*) -> #output {
            #query_decl
            let append_path = #append_path;

            let mut url_components = ::photonfire::reqwest::Url::parse(self.client.base_url())
                .map_err(|_| ::photonfire::PhotonfireError::parameter(#URL_COMPONENTS_ERROR))?;

            let path = match url_components.path() {
                "/" => ::std::string::ToString::to_string(&append_path),
                base_path => ::std::format!("{}{}", base_path, append_path),
            };
            url_components.set_path(&path);
            url_components.set_query(::std::option::Option::None);
            #query_append

            if url_components.cannot_be_a_base() {
                return ::std::result::Result::Err(
                    ::photonfire::PhotonfireError::parameter(#URL_ERROR),
                );
            }

            let mut request = ::photonfire::reqwest::Request::new(#verb_tokens, url_components);
            Self::set_headers(&mut request, #verb_tokens, self.client.default_headers());

            let data = self.client.session().perform(request).await?;
            ::std::result::Result::Ok(
                self.client.json_decoder().decode::<#return_type>(&data)?,
            )
        }
    };

    debug!(
        interface = %interface.name,
        method = %method.name,
        verb = %verb,
        query_items = query_keys.len(),
        "method synthesized"
    );

    Some(MethodImplementation {
        name: method.name.clone(),
        verb,
        query_keys,
        tokens,
    })
}

/// Converts the route argument into the expression bound to `append_path`.
fn path_tokens(value: &ArgumentValue) -> syn::Result<TokenStream> {
    match value {
        ArgumentValue::Literal(path) => {
            Ok(LitStr::new(path, Span::call_site()).to_token_stream())
        }
        ArgumentValue::Expression(source) => {
            syn::parse_str::<Expr>(source).map(|expr| expr.to_token_stream())
        }
    }
}

/// The binding for a parameter name, raw when the name is a keyword.
fn binding_ident(name: &str) -> syn::Result<Ident> {
    syn::parse_str::<Ident>(name).or_else(|_| syn::parse_str::<Ident>(&format!("r#{name}")))
}

/// Parses a verbatim descriptor field, recording `field` as missing on failure.
fn parse_or_missing<T: syn::parse::Parse>(
    source: &str,
    field: &str,
    missing: &mut Vec<String>,
) -> Option<T> {
    match syn::parse_str::<T>(source) {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            missing.push(field.to_string());
            None
        }
    }
}

/// The `reqwest::Method` constant for a verb.
pub(crate) fn verb_tokens(verb: HttpVerb) -> TokenStream {
    match verb {
        HttpVerb::Get => quote! { ::photonfire::reqwest::Method::GET },
    }
}
