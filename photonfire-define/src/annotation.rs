//! Normalized annotation values.
//!
//! Attributes on methods and parameters reach the synthesizer in this shape,
//! so it never needs to understand host-language attribute syntax. Arguments
//! keep their declaration order and their optional label.

use serde::{Deserialize, Serialize};

use crate::types::{HttpVerb, QUERY_ANNOTATION};

/// The value of one annotation argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ArgumentValue {
    /// A string literal, already unescaped.
    Literal(String),
    /// Any other expression, as source text. Evaluated by the generated code.
    Expression(String),
}

impl ArgumentValue {
    /// Returns the literal content, or `None` for expressions.
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Self::Literal(value) => Some(value),
            Self::Expression(_) => None,
        }
    }
}

/// One argument of an annotation, e.g. `name = "is_activated"` or `"/account"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationArgument {
    /// The argument label, if one was written (`name` in `name = "x"`).
    pub label: Option<String>,
    /// The argument value.
    pub value: ArgumentValue,
}

/// An attribute attached to a method or parameter.
///
/// ## Examples
///
/// ```
/// use photonfire_define::{Annotation, ArgumentValue};
///
/// let route = Annotation::get("/account");
/// assert_eq!(route.name, "photonfire_get");
/// assert_eq!(
///     route.first_argument().map(|a| &a.value),
///     Some(&ArgumentValue::Literal("/account".to_string()))
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    /// Attribute name without path qualifiers (`photonfire_get`).
    pub name: String,
    /// Arguments in declaration order.
    #[serde(default)]
    pub arguments: Vec<AnnotationArgument>,
}

impl Annotation {
    /// Creates an annotation with no arguments.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: Vec::new(),
        }
    }

    /// Appends an argument.
    pub fn with_argument(mut self, label: Option<&str>, value: ArgumentValue) -> Self {
        self.arguments.push(AnnotationArgument {
            label: label.map(str::to_string),
            value,
        });
        self
    }

    /// A GET route annotation with a literal path.
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpVerb::Get.annotation_name())
            .with_argument(Some("path"), ArgumentValue::Literal(path.into()))
    }

    /// A GET route annotation whose path is an expression evaluated per call.
    pub fn get_expr(expr: impl Into<String>) -> Self {
        Self::new(HttpVerb::Get.annotation_name())
            .with_argument(Some("path"), ArgumentValue::Expression(expr.into()))
    }

    /// A query-key override annotation.
    pub fn query(name: impl Into<String>) -> Self {
        Self::new(QUERY_ANNOTATION).with_argument(Some("name"), ArgumentValue::Literal(name.into()))
    }

    /// Returns the first argument regardless of its label.
    pub fn first_argument(&self) -> Option<&AnnotationArgument> {
        self.arguments.first()
    }

    /// Returns the first argument carrying `label`.
    pub fn argument(&self, label: &str) -> Option<&AnnotationArgument> {
        self.arguments
            .iter()
            .find(|arg| arg.label.as_deref() == Some(label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labelled_lookup_skips_unlabelled_arguments() {
        let annotation = Annotation::new("photonfire_query")
            .with_argument(None, ArgumentValue::Literal("positional".into()))
            .with_argument(Some("name"), ArgumentValue::Literal("key".into()));

        assert_eq!(
            annotation.argument("name").and_then(|a| a.value.as_literal()),
            Some("key")
        );
        assert!(annotation.argument("missing").is_none());
        assert_eq!(
            annotation.first_argument().and_then(|a| a.value.as_literal()),
            Some("positional")
        );
    }

    #[test]
    fn expression_has_no_literal() {
        let value = ArgumentValue::Expression("PATH".into());
        assert_eq!(value.as_literal(), None);
    }

    #[test]
    fn argument_value_json_shape() {
        let json = serde_json::to_string(&ArgumentValue::Literal("/a".into())).unwrap();
        assert_eq!(json, r#"{"kind":"literal","value":"/a"}"#);
    }
}
