//! Request transport.
//!
//! Generated methods hand a fully built [`reqwest::Request`] to the client's
//! [`Transport`] and get the raw response body back. The status code is
//! recorded on the request span but does not affect the result: any body is
//! passed on to the decoder.

use std::fmt;
use std::future::Future;
use std::pin::Pin;

use bytes::Bytes;
use reqwest::Request;
use tracing::{Span, debug, instrument};

use crate::error::PhotonfireError;

/// A boxed future that is `Send`.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Performs one HTTP exchange and returns the response body.
///
/// Implemented for [`reqwest::Client`]. Tests and embedders can supply their
/// own implementation through
/// [`PhotonfireClientBuilder::session`](crate::PhotonfireClientBuilder::session).
pub trait Transport: Send + Sync + fmt::Debug {
    fn perform(&self, request: Request) -> BoxFuture<'_, Result<Bytes, PhotonfireError>>;
}

impl Transport for reqwest::Client {
    fn perform(&self, request: Request) -> BoxFuture<'_, Result<Bytes, PhotonfireError>> {
        Box::pin(execute(self, request))
    }
}

#[instrument(
    name = "photonfire_request",
    skip_all,
    fields(
        http.method = %request.method(),
        http.url = %request.url(),
        http.status_code = tracing::field::Empty,
        otel.kind = "client",
    )
)]
async fn execute(client: &reqwest::Client, request: Request) -> Result<Bytes, PhotonfireError> {
    let response = client.execute(request).await?;
    let status = response.status();
    Span::current().record("http.status_code", status.as_u16());

    let body = response.bytes().await?;
    debug!(status = status.as_u16(), bytes = body.len(), "response received");
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn get(url: &str) -> Request {
        Request::new(reqwest::Method::GET, reqwest::Url::parse(url).unwrap())
    }

    #[tokio::test]
    #[traced_test]
    async fn returns_body_and_logs_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ping"))
            .respond_with(ResponseTemplate::new(200).set_body_string("pong"))
            .mount(&server)
            .await;

        let client = reqwest::Client::new();
        let body = client
            .perform(get(&format!("{}/ping", server.uri())))
            .await
            .unwrap();

        assert_eq!(&body[..], b"pong");
        assert!(logs_contain("response received"));
        assert!(logs_contain("photonfire_request"));
    }

    #[tokio::test]
    async fn non_success_status_still_yields_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_string("{\"error\":true}"))
            .mount(&server)
            .await;

        let client = reqwest::Client::new();
        let body = client
            .perform(get(&format!("{}/missing", server.uri())))
            .await
            .unwrap();

        assert_eq!(&body[..], b"{\"error\":true}");
    }

    #[tokio::test]
    async fn connection_failure_is_transport_error() {
        let client = reqwest::Client::new();
        let err = client
            .perform(get("http://127.0.0.1:1/unreachable"))
            .await
            .unwrap_err();

        assert!(matches!(err, PhotonfireError::Transport(_)));
    }
}
