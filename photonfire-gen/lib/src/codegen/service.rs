//! Implementation type synthesis.
//!
//! For a contract trait `AccountService` the synthesizer produces:
//!
//! ```ignore
//! pub struct PhotonfireAccountService {
//!     client: ::std::sync::Arc<::photonfire::PhotonfireClient>,
//! }
//!
//! impl ::photonfire::PhotonfireService for PhotonfireAccountService {
//!     fn create_instance(client: Arc<PhotonfireClient>) -> Self {
//!         Self::new(client)
//!     }
//! }
//!
//! impl PhotonfireAccountService {
//!     fn new(client: Arc<PhotonfireClient>) -> Self { Self { client } }
//!     fn set_headers(..) { .. }
//! }
//!
//! impl AccountService for PhotonfireAccountService {
//!     async fn get_account(&self, ..) -> Result<Account, PhotonfireError> { .. }
//! }
//! ```

use photonfire_define::{DiagnosticKind, InterfaceDescriptor, Location, Visibility};
use proc_macro2::TokenStream;
use quote::{ToTokens, format_ident, quote};
use syn::Ident;
use tracing::{debug, trace};

use crate::codegen::headers::generate_header_helper;
use crate::codegen::method::{MethodImplementation, synthesize_method};
use crate::diagnostics::DiagnosticReporter;

/// Prefix of every generated implementation type name.
pub const IMPLEMENTATION_PREFIX: &str = "Photonfire";

/// A synthesized implementation, kept in structural pieces.
///
/// Converting it to tokens emits the pieces in a fixed order, so rendering
/// the same class twice yields identical output.
#[derive(Debug, Clone)]
pub struct ImplementationClass {
    /// Generated type name (`PhotonfireAccountService`).
    pub name: Ident,
    /// Contract trait name (`AccountService`).
    pub interface: Ident,
    /// The struct declaration.
    pub struct_decl: TokenStream,
    /// `impl PhotonfireService` with `create_instance`.
    pub factory: TokenStream,
    /// The private `new` constructor.
    pub initializer: TokenStream,
    /// Method implementations in declaration order.
    pub methods: Vec<MethodImplementation>,
    /// The `set_headers` helper.
    pub header_helper: TokenStream,
}

impl ImplementationClass {
    pub fn method_names(&self) -> impl Iterator<Item = &str> {
        self.methods.iter().map(|m| m.name.as_str())
    }
}

impl ToTokens for ImplementationClass {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let name = &self.name;
        let interface = &self.interface;
        let struct_decl = &self.struct_decl;
        let factory = &self.factory;
        let initializer = &self.initializer;
        let header_helper = &self.header_helper;
        let methods = &self.methods;

        tokens.extend(quote! {
            #struct_decl

            #factory

            impl #name {
                #initializer

                #header_helper
            }

            impl #interface for #name {
                #(#methods)*
            }
        });
    }
}

/// Synthesizes the implementation type for `interface`.
///
/// Returns `None` when the declaration is not a trait, has no usable name,
/// is generic, or has associated items the implementation cannot supply.
/// Methods that fail are left out and reported; the rest are still emitted.
/// Provided methods without a route keep their default body and are skipped
/// without a diagnostic.
pub fn synthesize_service(
    interface: &InterfaceDescriptor,
    reporter: &mut DiagnosticReporter,
) -> Option<ImplementationClass> {
    if !interface.is_interface() {
        reporter.report(
            DiagnosticKind::NotAnInterface,
            Location::interface(&interface.name),
        );
        return None;
    }

    let Ok(interface_ident) = syn::parse_str::<Ident>(&interface.name) else {
        reporter.report(
            DiagnosticKind::MissingArgument(vec!["name".to_string()]),
            Location::interface(&interface.name),
        );
        return None;
    };
    let name = format_ident!("{}{}", IMPLEMENTATION_PREFIX, interface_ident);

    if interface.is_generic {
        reporter.report(
            DiagnosticKind::UnsupportedSignature(
                "contract must not declare generics or lifetimes".to_string(),
            ),
            Location::interface(&interface.name),
        );
    }
    for item in &interface.required_items {
        reporter.report(
            DiagnosticKind::UnsupportedSignature(format!(
                "associated item `{item}` has no default"
            )),
            Location::member(&interface.name, item),
        );
    }
    if interface.is_generic || !interface.required_items.is_empty() {
        return None;
    }

    let methods: Vec<MethodImplementation> = interface
        .methods
        .iter()
        .filter(|method| {
            let skip = method.provided && method.route().is_none();
            if skip {
                trace!(method = %method.name, "provided method without route kept as default");
            }
            !skip
        })
        .filter_map(|method| synthesize_method(interface, method, reporter))
        .collect();

    let vis = visibility_tokens(interface.visibility);
    let doc = format!("Generated implementation of [`{interface_ident}`].");

    let struct_decl = quote! {
        #[doc = #doc]
        #vis struct #name {
            client: ::std::sync::Arc<::photonfire::PhotonfireClient>,
        }
    };

    let factory = quote! {
        impl ::photonfire::PhotonfireService for #name {
            fn create_instance(client: ::std::sync::Arc<::photonfire::PhotonfireClient>) -> Self {
                Self::new(client)
            }
        }
    };

    let initializer = quote! {
        fn new(client: ::std::sync::Arc<::photonfire::PhotonfireClient>) -> Self {
            Self { client }
        }
    };

    debug!(
        interface = %interface.name,
        implementation = %name,
        methods = methods.len(),
        "service synthesized"
    );

    Some(ImplementationClass {
        name,
        interface: interface_ident,
        struct_decl,
        factory,
        initializer,
        methods,
        header_helper: generate_header_helper(),
    })
}

fn visibility_tokens(visibility: Visibility) -> TokenStream {
    match visibility {
        Visibility::Public => quote! { pub },
        Visibility::Crate => quote! { pub(crate) },
        Visibility::Inherited => TokenStream::new(),
    }
}
