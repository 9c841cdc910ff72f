//! Convenient re-exports for building descriptors by hand.
//!
//! ## Examples
//!
//! ```
//! use photonfire_define::prelude::*;
//!
//! let param = ParameterDescriptor::new("activated", "bool")
//!     .with_annotation(Annotation::query("is_activated"));
//! assert_eq!(param.annotations.len(), 1);
//! ```

pub use crate::annotation::{Annotation, AnnotationArgument, ArgumentValue};
pub use crate::diagnostic::{DOMAIN, Diagnostic, DiagnosticKind, Location, Severity};
pub use crate::types::{
    DeclarationKind, HttpVerb, InterfaceDescriptor, MethodDescriptor, ParameterDescriptor,
    Visibility,
};
