//! Core descriptor types.
//!
//! - [`InterfaceDescriptor`] - The top-level service contract
//! - [`MethodDescriptor`] - Individual contract methods
//! - [`ParameterDescriptor`] - Method parameters
//! - [`HttpVerb`] - Verbs a route annotation can carry

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::annotation::Annotation;

/// Attribute that marks a trait for service synthesis.
pub const SERVICE_ANNOTATION: &str = "photonfire_service";

/// Per-parameter attribute carrying an explicit query key.
pub const QUERY_ANNOTATION: &str = "photonfire_query";

/// HTTP verbs a route annotation can carry.
///
/// Only GET is synthesized. Other verbs need request bodies, which are not
/// modelled yet.
///
/// ## Examples
///
/// ```
/// use std::str::FromStr;
/// use photonfire_define::HttpVerb;
///
/// assert_eq!(HttpVerb::Get.to_string(), "GET");
/// assert_eq!(HttpVerb::from_str("GET").unwrap(), HttpVerb::Get);
/// assert_eq!(HttpVerb::from_annotation("photonfire_get"), Some(HttpVerb::Get));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum HttpVerb {
    /// HTTP GET
    Get,
}

impl HttpVerb {
    /// The attribute name that routes a method with this verb.
    pub fn annotation_name(self) -> &'static str {
        match self {
            Self::Get => "photonfire_get",
        }
    }

    /// Maps an attribute name back to its verb.
    pub fn from_annotation(name: &str) -> Option<Self> {
        use strum::IntoEnumIterator;
        Self::iter().find(|verb| verb.annotation_name() == name)
    }
}

/// Structural kind of the declaration a service annotation was attached to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DeclarationKind {
    Trait,
    Struct,
    Enum,
    Union,
    Other,
}

/// Visibility copied from the interface onto the generated implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    /// `pub`
    Public,
    /// `pub(crate)`
    Crate,
    /// No modifier.
    #[default]
    Inherited,
}

/// One parameter of a contract method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterDescriptor {
    /// Parameter name as declared, without any `r#` prefix.
    pub local_name: String,
    /// Declared type, verbatim (`String`, `bool`, `u32`).
    pub type_name: String,
    /// Attached annotations, raw. The query key is derived from these once.
    #[serde(default)]
    pub annotations: Vec<Annotation>,
}

impl ParameterDescriptor {
    /// Creates a parameter without annotations.
    pub fn new(local_name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            local_name: local_name.into(),
            type_name: type_name.into(),
            annotations: Vec::new(),
        }
    }

    /// Attaches an annotation.
    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }
}

/// One method of a service contract.
///
/// A method is routed when it carries a verb annotation; the first argument
/// of that annotation is the path expression appended to the base URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDescriptor {
    /// Method identifier.
    pub name: String,
    /// Parameters in declaration order, excluding the receiver.
    #[serde(default)]
    pub parameters: Vec<ParameterDescriptor>,
    /// Declared return type, verbatim (`Result<Account, PhotonfireError>`).
    pub output: String,
    /// Decode target: the success type of [`output`](Self::output).
    pub return_type: String,
    /// Attached annotations.
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    /// Whether the method is declared `async`.
    pub is_async: bool,
    /// Whether the method takes `&self`.
    pub has_receiver: bool,
    /// Whether the contract supplies a default body.
    #[serde(default)]
    pub provided: bool,
    /// Whether the method declares its own type or lifetime parameters.
    #[serde(default)]
    pub is_generic: bool,
}

impl MethodDescriptor {
    /// Returns the route annotation and its verb, if the method has one.
    ///
    /// When several verb annotations are attached the first one wins.
    pub fn route(&self) -> Option<(HttpVerb, &Annotation)> {
        self.annotations
            .iter()
            .find_map(|a| HttpVerb::from_annotation(&a.name).map(|verb| (verb, a)))
    }
}

/// A complete service contract.
///
/// `methods` keeps declaration order; synthesis emits implementations in the
/// same order so output is deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceDescriptor {
    /// Contract name. Must be non-empty.
    pub name: String,
    /// Declaration kind; only [`DeclarationKind::Trait`] is synthesized.
    pub kind: DeclarationKind,
    /// Visibility of the contract.
    #[serde(default)]
    pub visibility: Visibility,
    /// Methods in declaration order.
    #[serde(default)]
    pub methods: Vec<MethodDescriptor>,
    /// Whether the contract itself declares type or lifetime parameters.
    #[serde(default)]
    pub is_generic: bool,
    /// Associated consts and types without a default, in declaration order.
    /// An implementation has no way to supply them.
    #[serde(default)]
    pub required_items: Vec<String>,
}

impl InterfaceDescriptor {
    /// Returns `true` when the declaration is structurally an interface.
    pub fn is_interface(&self) -> bool {
        self.kind == DeclarationKind::Trait
    }
}
