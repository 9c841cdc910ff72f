//! Photonfire Definition Library
//!
//! This crate provides the descriptor model that the photonfire synthesizer
//! consumes. A front end (the `syn`-based one in `photonfire-gen`, or any tool
//! that writes the JSON form) normalizes a service contract into these types
//! before synthesis ever sees it.
//!
//! ## Core Types
//!
//! - [`InterfaceDescriptor`] - One service contract: name, declaration kind and methods
//! - [`MethodDescriptor`] - One method: parameters, return type and annotations
//! - [`ParameterDescriptor`] - One parameter: local name, type and annotations
//! - [`Annotation`] - A normalized attribute with its labelled arguments
//! - [`HttpVerb`] - HTTP verbs a route annotation can carry (GET only)
//! - [`Diagnostic`] - A structured synthesis error with a fixed message
//!
//! ## Examples
//!
//! ```
//! use photonfire_define::prelude::*;
//!
//! let service = InterfaceDescriptor {
//!     name: "AccountService".to_string(),
//!     kind: DeclarationKind::Trait,
//!     visibility: Visibility::Public,
//!     methods: vec![MethodDescriptor {
//!         name: "get_account".to_string(),
//!         parameters: vec![ParameterDescriptor::new("id", "String")],
//!         output: "Result<Account, PhotonfireError>".to_string(),
//!         return_type: "Account".to_string(),
//!         annotations: vec![Annotation::get("/account")],
//!         is_async: true,
//!         has_receiver: true,
//!         provided: false,
//!         is_generic: false,
//!     }],
//!     is_generic: false,
//!     required_items: vec![],
//! };
//!
//! assert!(service.is_interface());
//! assert_eq!(service.methods[0].route().map(|(verb, _)| verb), Some(HttpVerb::Get));
//! ```

pub mod annotation;
pub mod diagnostic;
pub mod prelude;
pub mod types;

pub use annotation::{Annotation, AnnotationArgument, ArgumentValue};
pub use diagnostic::{DOMAIN, Diagnostic, DiagnosticKind, Location, Severity};
pub use types::{
    DeclarationKind, HttpVerb, InterfaceDescriptor, MethodDescriptor, ParameterDescriptor,
    QUERY_ANNOTATION, SERVICE_ANNOTATION, Visibility,
};
