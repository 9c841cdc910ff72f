//! Default headers applied to every generated request.

use reqwest::header::{HeaderName, HeaderValue};

use crate::error::PhotonfireError;

/// Ordered header map with last-write-wins semantics.
///
/// Entries iterate in first-insertion order. Re-inserting a name (compared
/// case-insensitively, as HTTP header names are) replaces the value in place.
///
/// ## Examples
///
/// ```rust
/// use photonfire::DefaultHeaders;
///
/// let mut headers = DefaultHeaders::new();
/// headers.try_insert("X-Client", "one").unwrap();
/// headers.try_insert("Accept", "application/json").unwrap();
/// headers.try_insert("x-client", "two").unwrap();
///
/// let names: Vec<_> = headers.iter().map(|(name, _)| name.as_str()).collect();
/// assert_eq!(names, ["x-client", "accept"]);
/// assert_eq!(headers.get("X-Client").unwrap(), "two");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefaultHeaders {
    entries: Vec<(HeaderName, HeaderValue)>,
}

impl DefaultHeaders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a validated header, replacing any existing value for `name`.
    pub fn insert(&mut self, name: HeaderName, value: HeaderValue) {
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Validates and inserts a header from strings.
    ///
    /// ## Errors
    ///
    /// Returns [`PhotonfireError::InvalidHeader`] if the name or value is not
    /// a legal HTTP header.
    pub fn try_insert(
        &mut self,
        name: impl AsRef<str>,
        value: impl AsRef<str>,
    ) -> Result<(), PhotonfireError> {
        let name = HeaderName::try_from(name.as_ref())
            .map_err(|e| PhotonfireError::InvalidHeader(format!("invalid header name: {e}")))?;
        let value = HeaderValue::try_from(value.as_ref())
            .map_err(|e| PhotonfireError::InvalidHeader(format!("invalid header value: {e}")))?;
        self.insert(name, value);
        Ok(())
    }

    /// Looks up a header value by name, case-insensitively.
    pub fn get(&self, name: &str) -> Option<&HeaderValue> {
        self.entries
            .iter()
            .find(|(existing, _)| existing.as_str().eq_ignore_ascii_case(name))
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&HeaderName, &HeaderValue)> {
        self.entries.iter().map(|(name, value)| (name, value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_invalid_name() {
        let mut headers = DefaultHeaders::new();
        let err = headers.try_insert("bad header", "v").unwrap_err();
        assert!(matches!(err, PhotonfireError::InvalidHeader(_)));
        assert!(headers.is_empty());
    }

    #[test]
    fn rejects_invalid_value() {
        let mut headers = DefaultHeaders::new();
        assert!(headers.try_insert("X-Ok", "line\nbreak").is_err());
    }

    #[test]
    fn replacement_keeps_position() {
        let mut headers = DefaultHeaders::new();
        headers.try_insert("A", "1").unwrap();
        headers.try_insert("B", "2").unwrap();
        headers.try_insert("a", "3").unwrap();

        let pairs: Vec<_> = headers
            .iter()
            .map(|(n, v)| (n.as_str().to_string(), v.to_str().unwrap().to_string()))
            .collect();
        assert_eq!(
            pairs,
            vec![("a".to_string(), "3".to_string()), ("b".to_string(), "2".to_string())]
        );
        assert_eq!(headers.len(), 2);
    }
}
