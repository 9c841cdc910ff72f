//! Output assembly, validation and file writing for generated services.
//!
//! Generated tokens are validated with `syn`, formatted with `prettyplease`
//! and written atomically (temp file + rename).

use std::fs;
use std::path::Path;

use photonfire_define::{Diagnostic, InterfaceDescriptor, SERVICE_ANNOTATION};
use proc_macro2::TokenStream;
use quote::ToTokens;
use serde::Deserialize;
use syn::{Attribute, Item};
use tracing::{debug, info};

use crate::codegen::{ImplementationClass, synthesize};
use crate::errors::GeneratorError;
use crate::frontend::{attribute_name, describe_item};

/// Everything produced from one input.
#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    /// Formatted source of every implementation, empty if none was produced.
    pub code: String,
    /// Names of the generated implementation types.
    pub services: Vec<String>,
    /// Diagnostics from every synthesized interface, in input order.
    pub diagnostics: Vec<Diagnostic>,
}

impl GenerationReport {
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Validates that generated tokens form a valid Rust file.
///
/// ## Errors
///
/// Returns `GeneratorError::CodeGenError` if the tokens do not parse.
pub fn validate_code(tokens: &TokenStream) -> Result<syn::File, GeneratorError> {
    syn::parse2(tokens.clone())
        .map_err(|e| GeneratorError::CodeGenError(format!("Generated code is invalid: {}", e)))
}

/// Formats a parsed file with prettyplease behind a generated-code notice.
pub fn format_code(file: &syn::File) -> String {
    let formatted = prettyplease::unparse(file);
    format!(
        "// This code was automatically generated by photonfire-gen. Do not edit manually.\n\n{}",
        formatted
    )
}

/// Renders one implementation to formatted source.
pub fn render(class: &ImplementationClass) -> Result<String, GeneratorError> {
    let file = validate_code(&class.to_token_stream())?;
    Ok(format_code(&file))
}

/// Writes content to a file atomically using temp file + rename.
///
/// ## Errors
///
/// Returns `GeneratorError::WriteError` if parent directories cannot be
/// created, the temp file cannot be written, or the rename fails.
pub fn write_atomic(path: &Path, content: &str) -> Result<(), GeneratorError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| GeneratorError::WriteError {
            path: parent.display().to_string(),
            source: e,
        })?;
    }

    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, content).map_err(|e| GeneratorError::WriteError {
        path: temp_path.display().to_string(),
        source: e,
    })?;

    fs::rename(&temp_path, path).map_err(|e| GeneratorError::WriteError {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// Generates implementations for every item in `source` that carries
/// `#[photonfire_service]`.
///
/// ## Errors
///
/// Returns `GeneratorError::ParseError` if `source` is not valid Rust, or
/// `GeneratorError::CodeGenError` if the assembled output does not parse.
/// Contract problems are returned as diagnostics in the report.
pub fn generate_from_source(source: &str) -> Result<GenerationReport, GeneratorError> {
    let file = syn::parse_file(source).map_err(|e| GeneratorError::ParseError(e.to_string()))?;

    let interfaces: Vec<InterfaceDescriptor> = file
        .items
        .iter()
        .filter(|item| item_attrs(item).iter().any(is_service_attribute))
        .map(describe_item)
        .collect();

    debug!(interfaces = interfaces.len(), "annotated items found");
    generate_from_descriptors(&interfaces)
}

/// Generates implementations for already described interfaces.
pub fn generate_from_descriptors(
    interfaces: &[InterfaceDescriptor],
) -> Result<GenerationReport, GeneratorError> {
    let mut tokens = TokenStream::new();
    let mut report = GenerationReport::default();

    for interface in interfaces {
        let output = synthesize(interface);
        if let Some(class) = &output.implementation {
            report.services.push(class.name.to_string());
            class.to_tokens(&mut tokens);
        }
        report.diagnostics.extend(output.diagnostics);
    }

    if !tokens.is_empty() {
        let file = validate_code(&tokens)?;
        report.code = format_code(&file);
    }

    info!(
        services = report.services.len(),
        diagnostics = report.diagnostics.len(),
        "generation complete"
    );
    Ok(report)
}

/// A descriptor file holds one interface or a list of them.
#[derive(Deserialize)]
#[serde(untagged)]
enum DescriptorFile {
    Many(Vec<InterfaceDescriptor>),
    One(InterfaceDescriptor),
}

/// Reads interfaces from a JSON descriptor file.
pub fn read_descriptors(path: &Path) -> Result<Vec<InterfaceDescriptor>, GeneratorError> {
    let content = read_input(path)?;
    let parsed: DescriptorFile =
        serde_json::from_str(&content).map_err(|e| GeneratorError::DescriptorError {
            path: path.display().to_string(),
            source: e,
        })?;
    Ok(match parsed {
        DescriptorFile::Many(interfaces) => interfaces,
        DescriptorFile::One(interface) => vec![interface],
    })
}

/// Generates from a `.rs` source file or a `.json` descriptor file.
///
/// When `output` is `Some` and `dry_run` is false the code is written there.
///
/// ## Errors
///
/// Returns `GeneratorError::Diagnostics`, carrying every diagnostic, when
/// anything was reported; nothing is written in that case.
pub fn generate_file(
    input: &Path,
    output: Option<&Path>,
    dry_run: bool,
) -> Result<GenerationReport, GeneratorError> {
    let report = if input.extension().is_some_and(|ext| ext == "json") {
        generate_from_descriptors(&read_descriptors(input)?)?
    } else {
        generate_from_source(&read_input(input)?)?
    };

    if report.has_errors() {
        return Err(GeneratorError::Diagnostics {
            diagnostics: report.diagnostics,
        });
    }

    if let Some(path) = output
        && !dry_run
    {
        write_atomic(path, &report.code)?;
        info!(path = %path.display(), "generated code written");
    }

    Ok(report)
}

fn read_input(path: &Path) -> Result<String, GeneratorError> {
    fs::read_to_string(path).map_err(|e| GeneratorError::ReadError {
        path: path.display().to_string(),
        source: e,
    })
}

fn is_service_attribute(attr: &Attribute) -> bool {
    attribute_name(attr).is_some_and(|name| name == SERVICE_ANNOTATION)
}

fn item_attrs(item: &Item) -> &[Attribute] {
    match item {
        Item::Trait(i) => &i.attrs,
        Item::Struct(i) => &i.attrs,
        Item::Enum(i) => &i.attrs,
        Item::Union(i) => &i.attrs,
        Item::Fn(i) => &i.attrs,
        Item::Type(i) => &i.attrs,
        Item::Impl(i) => &i.attrs,
        Item::Mod(i) => &i.attrs,
        Item::Const(i) => &i.attrs,
        Item::Static(i) => &i.attrs,
        _ => &[],
    }
}
