//! Error types for the photonfire generator.

use photonfire_define::Diagnostic;
use thiserror::Error;

/// Errors that can occur while generating service implementations.
///
/// Synthesis problems in the contract itself are not errors; they are
/// reported as [`Diagnostic`](photonfire_define::Diagnostic)s. This type
/// covers I/O and the `Diagnostics` gate the CLI applies afterwards.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Failed to parse Rust source
    #[error("Failed to parse source: {0}")]
    ParseError(String),

    /// Generated tokens are not a valid Rust file
    #[error("Code generation failed: {0}")]
    CodeGenError(String),

    /// Failed to write output file
    #[error("Failed to write output file '{path}': {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read input file
    #[error("Failed to read input file '{path}': {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A JSON descriptor file did not match the interface model
    #[error("Invalid descriptor file '{path}': {source}")]
    DescriptorError {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Synthesis reported error diagnostics.
    #[error("{} error diagnostic(s) reported", .diagnostics.len())]
    Diagnostics { diagnostics: Vec<Diagnostic> },
}
