//! Builder for [`PhotonfireClient`].

use std::sync::{Arc, LazyLock};

use tracing::debug;

use crate::client::PhotonfireClient;
use crate::decoder::JsonDecoder;
use crate::error::PhotonfireError;
use crate::headers::DefaultHeaders;
use crate::transport::Transport;

/// Process-wide session used when the builder is given none.
static SHARED_SESSION: LazyLock<reqwest::Client> = LazyLock::new(reqwest::Client::new);

/// Builder for configuring a [`PhotonfireClient`].
#[derive(Debug)]
pub struct PhotonfireClientBuilder {
    base_url: String,
    session: Option<Arc<dyn Transport>>,
    default_headers: DefaultHeaders,
    json_decoder: JsonDecoder,
}

impl PhotonfireClientBuilder {
    pub(crate) fn new(base_url: String) -> Self {
        Self {
            base_url,
            session: None,
            default_headers: DefaultHeaders::new(),
            json_decoder: JsonDecoder::new(),
        }
    }

    /// Sets the transport used to perform requests.
    ///
    /// Defaults to a process-wide shared [`reqwest::Client`].
    pub fn session(mut self, session: impl Transport + 'static) -> Self {
        self.session = Some(Arc::new(session));
        self
    }

    /// Adds a default header to all requests. A later value for the same
    /// name replaces the earlier one.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// use photonfire::PhotonfireClient;
    ///
    /// let client = PhotonfireClient::builder("https://api.example.com")
    ///     .default_header("X-Client", "photonfire")?
    ///     .build();
    /// assert_eq!(client.default_headers().get("x-client").unwrap(), "photonfire");
    /// # Ok::<(), photonfire::PhotonfireError>(())
    /// ```
    ///
    /// ## Errors
    ///
    /// Returns [`PhotonfireError::InvalidHeader`] if the name or value is
    /// invalid.
    pub fn default_header(
        mut self,
        name: impl AsRef<str>,
        value: impl AsRef<str>,
    ) -> Result<Self, PhotonfireError> {
        self.default_headers.try_insert(name, value)?;
        Ok(self)
    }

    /// Merges a set of headers into the defaults, last write winning.
    ///
    /// ## Errors
    ///
    /// Returns [`PhotonfireError::InvalidHeader`] on the first invalid entry.
    pub fn default_headers<I, K, V>(mut self, headers: I) -> Result<Self, PhotonfireError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (name, value) in headers {
            self.default_headers.try_insert(name, value)?;
        }
        Ok(self)
    }

    /// Sets the response decoder.
    pub fn json_decoder(mut self, decoder: JsonDecoder) -> Self {
        self.json_decoder = decoder;
        self
    }

    /// Builds the client.
    ///
    /// The base URL is not validated here; an unusable base URL surfaces as
    /// [`PhotonfireError::ParameterError`] on the first call.
    pub fn build(self) -> Arc<PhotonfireClient> {
        let session = self
            .session
            .unwrap_or_else(|| Arc::new(SHARED_SESSION.clone()));
        debug!(
            base_url = %self.base_url,
            default_headers = self.default_headers.len(),
            "photonfire client built"
        );
        Arc::new(PhotonfireClient {
            base_url: self.base_url,
            session,
            default_headers: self.default_headers,
            json_decoder: self.json_decoder,
        })
    }
}
