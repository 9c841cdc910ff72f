//! Photonfire service synthesizer.
//!
//! Turns a service contract (a trait whose methods carry route annotations)
//! into a concrete implementation type that performs the HTTP calls through
//! a shared `photonfire::PhotonfireClient`.
//!
//! ## Modules
//!
//! - [`frontend`] - `syn` items to [`InterfaceDescriptor`]s
//! - [`classifier`] - Query key for each parameter
//! - [`codegen`] - Method and service synthesis
//! - [`diagnostics`] - Diagnostic accumulation
//! - [`output`] - Validation, formatting and file writing
//! - [`errors`] - Generator error type
//!
//! ## Example Usage
//!
//! ```
//! use photonfire_gen::output::generate_from_source;
//!
//! let report = generate_from_source(r#"
//!     #[photonfire_service]
//!     pub trait AccountService {
//!         #[photonfire_get("/account")]
//!         async fn get_account(&self, id: String) -> Result<Account, PhotonfireError>;
//!     }
//! "#).unwrap();
//!
//! assert_eq!(report.services, ["PhotonfireAccountService"]);
//! assert!(report.code.contains("impl AccountService for PhotonfireAccountService"));
//! ```
//!
//! Contract problems never abort generation; they come back as
//! [`Diagnostic`](photonfire_define::Diagnostic)s next to whatever could be
//! synthesized.

pub mod classifier;
pub mod codegen;
pub mod diagnostics;
pub mod errors;
pub mod frontend;
pub mod output;

#[cfg(test)]
mod test_utils;

pub use codegen::{ImplementationClass, MethodImplementation, SynthesisOutput, synthesize};
pub use diagnostics::DiagnosticReporter;
pub use errors::GeneratorError;
pub use photonfire_define::InterfaceDescriptor;
