use serde::de::DeserializeOwned;
use tracing::trace;

/// Decodes response bodies into the declared return type.
///
/// Field names are matched exactly as serde derives them; use
/// `#[serde(rename_all = ...)]` on the target type for other conventions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonDecoder;

impl JsonDecoder {
    pub fn new() -> Self {
        Self
    }

    /// Decodes `data` as JSON into `T`.
    ///
    /// ## Errors
    ///
    /// Returns the `serde_json` error unchanged when the body is not valid
    /// JSON or does not match `T`.
    pub fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, serde_json::Error> {
        trace!(bytes = data.len(), type_name = std::any::type_name::<T>(), "decoding body");
        serde_json::from_slice(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Account {
        id: String,
        is_activated: bool,
    }

    #[test]
    fn decodes_matching_body() {
        let account: Account = JsonDecoder::new()
            .decode(br#"{"id":"42","is_activated":true}"#)
            .unwrap();
        assert_eq!(
            account,
            Account {
                id: "42".into(),
                is_activated: true
            }
        );
    }

    #[test]
    fn mismatched_body_is_error() {
        let result = JsonDecoder::new().decode::<Account>(br#"{"id":42}"#);
        assert!(result.is_err());
    }
}
