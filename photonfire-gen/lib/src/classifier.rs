//! Query key classification for method parameters.
//!
//! Every parameter of a routed method becomes one query item. Its key is the
//! parameter's local name unless a `#[photonfire_query(name = "...")]`
//! annotation overrides it.

use photonfire_define::{ParameterDescriptor, QUERY_ANNOTATION};

/// Label of the override argument.
const NAME_LABEL: &str = "name";

/// Returns the query key for `parameter`.
///
/// ## Examples
///
/// ```
/// use photonfire_define::{Annotation, ParameterDescriptor};
/// use photonfire_gen::classifier::classify;
///
/// let plain = ParameterDescriptor::new("id", "String");
/// assert_eq!(classify(&plain), "id");
///
/// let renamed = ParameterDescriptor::new("is_activated", "bool")
///     .with_annotation(Annotation::query("activated"));
/// assert_eq!(classify(&renamed), "activated");
/// ```
pub fn classify(parameter: &ParameterDescriptor) -> String {
    query_key_override(parameter).unwrap_or_else(|| parameter.local_name.clone())
}

/// Returns the explicit query key, if one is present and usable.
///
/// Only a non-empty string literal labelled `name` on a `photonfire_query`
/// annotation counts; anything else falls back to the local name.
pub fn query_key_override(parameter: &ParameterDescriptor) -> Option<String> {
    parameter
        .annotations
        .iter()
        .filter(|a| a.name == QUERY_ANNOTATION)
        .find_map(|a| a.argument(NAME_LABEL))
        .and_then(|arg| arg.value.as_literal())
        .filter(|key| !key.is_empty())
        .map(str::to_string)
}
