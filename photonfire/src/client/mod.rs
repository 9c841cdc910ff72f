//! The shared client that generated services are bound to.
//!
//! A [`PhotonfireClient`] is immutable once built and is shared behind an
//! [`Arc`] by every service created from it.

mod builder;

use std::sync::Arc;

pub use builder::PhotonfireClientBuilder;

use crate::decoder::JsonDecoder;
use crate::headers::DefaultHeaders;
use crate::service::PhotonfireService;
use crate::transport::Transport;

/// Base URL, transport, default headers and decoder for generated services.
///
/// ## Examples
///
/// ```rust
/// use photonfire::PhotonfireClient;
///
/// let client = PhotonfireClient::builder("https://api.example.com")
///     .default_headers([("Accept", "application/json"), ("X-Client", "docs")])?
///     .build();
///
/// assert_eq!(client.base_url(), "https://api.example.com");
/// assert_eq!(client.default_headers().len(), 2);
/// # Ok::<(), photonfire::PhotonfireError>(())
/// ```
#[derive(Debug)]
pub struct PhotonfireClient {
    base_url: String,
    session: Arc<dyn Transport>,
    default_headers: DefaultHeaders,
    json_decoder: JsonDecoder,
}

impl PhotonfireClient {
    /// Creates a builder for a client rooted at `base_url`.
    pub fn builder(base_url: impl Into<String>) -> PhotonfireClientBuilder {
        PhotonfireClientBuilder::new(base_url.into())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &dyn Transport {
        self.session.as_ref()
    }

    pub fn default_headers(&self) -> &DefaultHeaders {
        &self.default_headers
    }

    pub fn json_decoder(&self) -> &JsonDecoder {
        &self.json_decoder
    }

    /// Creates a generated service bound to this client.
    ///
    /// ```rust,ignore
    /// let service: PhotonfireAccountService = client.create_service();
    /// ```
    pub fn create_service<T: PhotonfireService>(self: &Arc<Self>) -> T {
        T::create_instance(Arc::clone(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PhotonfireError;
    use crate::transport::BoxFuture;
    use bytes::Bytes;

    #[derive(Debug)]
    struct NullTransport;

    impl Transport for NullTransport {
        fn perform(
            &self,
            _request: reqwest::Request,
        ) -> BoxFuture<'_, Result<Bytes, PhotonfireError>> {
            Box::pin(async { Ok(Bytes::new()) })
        }
    }

    struct Probe {
        client: Arc<PhotonfireClient>,
    }

    impl PhotonfireService for Probe {
        fn create_instance(client: Arc<PhotonfireClient>) -> Self {
            Self { client }
        }
    }

    #[test]
    fn default_headers_merge_last_write_wins() {
        let client = PhotonfireClient::builder("https://api.example.com")
            .default_header("X-Token", "first")
            .unwrap()
            .default_headers([("Accept", "application/json"), ("x-token", "second")])
            .unwrap()
            .build();

        let headers = client.default_headers();
        assert_eq!(headers.len(), 2);
        assert_eq!(headers.get("X-Token").unwrap(), "second");
    }

    #[test]
    fn decoder_is_configurable() {
        let client = PhotonfireClient::builder("https://api.example.com")
            .json_decoder(JsonDecoder::new())
            .build();
        let value: u32 = client.json_decoder().decode(b"7").unwrap();
        assert_eq!(value, 7);
    }

    #[test]
    fn invalid_header_fails_builder() {
        let result = PhotonfireClient::builder("https://api.example.com")
            .default_header("bad header", "value");
        assert!(matches!(result, Err(PhotonfireError::InvalidHeader(_))));
    }

    #[test]
    fn services_share_the_client() {
        let client = PhotonfireClient::builder("https://api.example.com")
            .session(NullTransport)
            .build();

        let first: Probe = client.create_service();
        let second: Probe = client.create_service();

        assert!(Arc::ptr_eq(&first.client, &second.client));
        assert!(Arc::ptr_eq(&first.client, &client));
    }

    #[tokio::test]
    async fn custom_session_is_used() {
        let client = PhotonfireClient::builder("https://api.example.com")
            .session(NullTransport)
            .build();
        let request = reqwest::Request::new(
            reqwest::Method::GET,
            reqwest::Url::parse("https://api.example.com/x").unwrap(),
        );

        let body = client.session().perform(request).await.unwrap();
        assert!(body.is_empty());
    }
}
