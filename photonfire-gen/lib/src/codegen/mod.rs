//! Code generation for service implementations.
//!
//! - [`method`] - One `async fn` per routed contract method
//! - [`service`] - The implementation type, its factory and trait impl
//! - [`headers`] - The shared header-application helper

pub mod headers;
pub mod method;
pub mod service;

pub use headers::generate_header_helper;
pub use method::{MethodImplementation, synthesize_method};
pub use service::{IMPLEMENTATION_PREFIX, ImplementationClass, synthesize_service};

use photonfire_define::{Diagnostic, InterfaceDescriptor};

use crate::diagnostics::DiagnosticReporter;

/// Result of synthesizing one interface.
#[derive(Debug, Clone)]
pub struct SynthesisOutput {
    /// The implementation, absent when the interface itself was rejected.
    pub implementation: Option<ImplementationClass>,
    /// Every diagnostic reported during the run.
    pub diagnostics: Vec<Diagnostic>,
}

impl SynthesisOutput {
    /// Returns `true` when an implementation exists and nothing was reported.
    pub fn is_ok(&self) -> bool {
        self.implementation.is_some() && self.diagnostics.is_empty()
    }
}

/// Runs service synthesis with a fresh reporter.
///
/// ## Examples
///
/// ```
/// use photonfire_define::{DeclarationKind, InterfaceDescriptor, Visibility};
/// use photonfire_gen::synthesize;
///
/// let interface = InterfaceDescriptor {
///     name: "Account".into(),
///     kind: DeclarationKind::Struct,
///     visibility: Visibility::Public,
///     methods: vec![],
///     is_generic: false,
///     required_items: vec![],
/// };
///
/// let output = synthesize(&interface);
/// assert!(output.implementation.is_none());
/// assert_eq!(output.diagnostics[0].id(), "notAProtocol");
/// ```
pub fn synthesize(interface: &InterfaceDescriptor) -> SynthesisOutput {
    let mut reporter = DiagnosticReporter::new();
    let implementation = synthesize_service(interface, &mut reporter);
    SynthesisOutput {
        implementation,
        diagnostics: reporter.into_diagnostics(),
    }
}
