//! Structured synthesis diagnostics.
//!
//! Every diagnostic has a fixed message, a stable id under the [`DOMAIN`]
//! namespace, and error severity. Diagnostics are data: producing one never
//! aborts synthesis, the caller decides what is fatal.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Namespace of every diagnostic id.
pub const DOMAIN: &str = "Photonfire";

/// Diagnostic severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
}

/// What went wrong.
///
/// ## Examples
///
/// ```
/// use photonfire_define::DiagnosticKind;
///
/// let kind = DiagnosticKind::MissingArgument(vec!["appendPathExpr".into()]);
/// assert_eq!(kind.id(), "argumentNotFound");
/// assert_eq!(kind.to_string(), "Argument of appendPathExpr not found");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// The annotated declaration is not a trait.
    #[error("The attached declaration is not a protocol")]
    NotAnInterface,

    /// A required annotation argument could not be located.
    #[error("Argument of {} not found", .0.join(","))]
    MissingArgument(Vec<String>),

    /// The method signature cannot be implemented (not async, no receiver).
    #[error("Unsupported method signature: {0}")]
    UnsupportedSignature(String),
}

impl DiagnosticKind {
    /// Stable identifier within [`DOMAIN`].
    pub fn id(&self) -> &'static str {
        match self {
            Self::NotAnInterface => "notAProtocol",
            Self::MissingArgument(_) => "argumentNotFound",
            Self::UnsupportedSignature(_) => "unsupportedSignature",
        }
    }

    /// Severity; every kind is an error.
    pub fn severity(&self) -> Severity {
        Severity::Error
    }
}

/// Where in the input a diagnostic applies.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// Interface name.
    pub interface: String,
    /// Method name, when the diagnostic concerns a single method.
    pub member: Option<String>,
}

impl Location {
    /// Location of the whole interface declaration.
    pub fn interface(interface: impl Into<String>) -> Self {
        Self {
            interface: interface.into(),
            member: None,
        }
    }

    /// Location of one method.
    pub fn member(interface: impl Into<String>, member: impl Into<String>) -> Self {
        Self {
            interface: interface.into(),
            member: Some(member.into()),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.member {
            Some(member) => write!(f, "{}::{}", self.interface, member),
            None => f.write_str(&self.interface),
        }
    }
}

/// A reported diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub location: Location,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, location: Location) -> Self {
        Self { kind, location }
    }

    pub fn domain(&self) -> &'static str {
        DOMAIN
    }

    pub fn id(&self) -> &'static str {
        self.kind.id()
    }

    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    pub fn severity(&self) -> Severity {
        self.kind.severity()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{} at {}: {}", DOMAIN, self.id(), self.location, self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_an_interface_message_and_id() {
        let kind = DiagnosticKind::NotAnInterface;
        assert_eq!(kind.id(), "notAProtocol");
        assert_eq!(kind.to_string(), "The attached declaration is not a protocol");
        assert_eq!(kind.severity(), Severity::Error);
    }

    #[test]
    fn missing_argument_joins_names_with_commas() {
        let kind = DiagnosticKind::MissingArgument(vec!["a".into(), "b".into()]);
        assert_eq!(kind.to_string(), "Argument of a,b not found");
    }

    #[test]
    fn display_includes_domain_and_location() {
        let diagnostic = Diagnostic::new(
            DiagnosticKind::MissingArgument(vec!["appendPathExpr".into()]),
            Location::member("AccountService", "get_account"),
        );
        assert_eq!(
            diagnostic.to_string(),
            "Photonfire.argumentNotFound at AccountService::get_account: Argument of appendPathExpr not found"
        );
        assert_eq!(diagnostic.domain(), "Photonfire");
    }

    #[test]
    fn interface_location_has_no_member() {
        assert_eq!(Location::interface("Thing").to_string(), "Thing");
    }
}
