//! Diagnostic accumulation for a single synthesis run.

use photonfire_define::{Diagnostic, DiagnosticKind, Location, Severity};
use tracing::debug;

/// Collects diagnostics produced while synthesizing one interface.
///
/// Reporting never fails and never stops synthesis; callers inspect the
/// collected diagnostics once the run is over.
///
/// ## Examples
///
/// ```
/// use photonfire_define::{DiagnosticKind, Location};
/// use photonfire_gen::diagnostics::DiagnosticReporter;
///
/// let mut reporter = DiagnosticReporter::new();
/// reporter.report(DiagnosticKind::NotAnInterface, Location::interface("Thing"));
///
/// assert!(reporter.has_errors());
/// assert_eq!(reporter.diagnostics()[0].id(), "notAProtocol");
/// ```
#[derive(Debug, Default)]
pub struct DiagnosticReporter {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a diagnostic.
    pub fn report(&mut self, kind: DiagnosticKind, location: Location) {
        let diagnostic = Diagnostic::new(kind, location);
        debug!(
            id = diagnostic.id(),
            location = %diagnostic.location,
            message = %diagnostic.message(),
            "diagnostic reported"
        );
        self.diagnostics.push(diagnostic);
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Returns `true` if any error-severity diagnostic was reported.
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity() == Severity::Error)
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_reporter_has_no_errors() {
        let reporter = DiagnosticReporter::new();
        assert!(!reporter.has_errors());
        assert!(reporter.diagnostics().is_empty());
    }

    #[test]
    fn reports_accumulate_in_order() {
        let mut reporter = DiagnosticReporter::new();
        reporter.report(
            DiagnosticKind::MissingArgument(vec!["appendPathExpr".into()]),
            Location::member("Svc", "a"),
        );
        reporter.report(
            DiagnosticKind::UnsupportedSignature("method must be async".into()),
            Location::member("Svc", "b"),
        );

        let diagnostics = reporter.into_diagnostics();
        assert_eq!(diagnostics.len(), 2);
        assert_eq!(diagnostics[0].location.member.as_deref(), Some("a"));
        assert_eq!(diagnostics[1].id(), "unsupportedSignature");
    }
}
