//! Shared test fixtures for photonfire-gen unit tests.

use photonfire_define::{
    Annotation, DeclarationKind, InterfaceDescriptor, MethodDescriptor, ParameterDescriptor,
    Visibility,
};
use proc_macro2::TokenStream;
use quote::quote;

use crate::codegen::MethodImplementation;

/// Creates a public trait descriptor.
pub fn make_interface(name: &str, methods: Vec<MethodDescriptor>) -> InterfaceDescriptor {
    InterfaceDescriptor {
        name: name.to_string(),
        kind: DeclarationKind::Trait,
        visibility: Visibility::Public,
        methods,
        is_generic: false,
        required_items: Vec::new(),
    }
}

/// Creates an async `&self` method returning `Result<Account, PhotonfireError>`.
pub fn make_method(
    name: &str,
    annotations: Vec<Annotation>,
    parameters: Vec<ParameterDescriptor>,
) -> MethodDescriptor {
    MethodDescriptor {
        name: name.to_string(),
        parameters,
        output: "Result<Account, PhotonfireError>".to_string(),
        return_type: "Account".to_string(),
        annotations,
        is_async: true,
        has_receiver: true,
        provided: false,
        is_generic: false,
    }
}

/// Formats generated tokens as a file.
pub fn format_generated_code(tokens: &TokenStream) -> String {
    let file = syn::parse2(tokens.clone()).expect("generated code should parse");
    prettyplease::unparse(&file)
}

/// Formats a lone method by wrapping it in a trait impl.
pub fn format_method(method: &MethodImplementation) -> String {
    format_generated_code(&quote! {
        impl Contract for Implementation {
            #method
        }
    })
}
