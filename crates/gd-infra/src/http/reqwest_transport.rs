use std::time::Duration;

use async_trait::async_trait;
use gd_core::ports::{HttpMethod, HttpRequest, HttpResponse, HttpTransportPort};
use gd_core::TransportError;
use reqwest::header::CONTENT_LENGTH;
use tracing::debug;

/// [`HttpTransportPort`] over a shared `reqwest::Client`.
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// `timeout` bounds each whole request. `None` waits indefinitely.
    pub fn new(timeout: Option<Duration>) -> Result<Self, TransportError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| TransportError::InvalidRequest(e.to_string()))?;

        Ok(Self { client })
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransportPort for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let HttpRequest {
            method,
            url,
            json_body,
        } = request;

        debug!(?method, %url, "Sending HTTP request");

        let mut builder = match method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Delete => self.client.delete(&url),
            HttpMethod::Head => self.client.head(&url),
        };
        if let Some(body) = &json_body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(map_reqwest_error)?;

        let status = response.status().as_u16();
        // Read the header itself: `Response::content_length` reports the body
        // size hint, which is zero for HEAD.
        let content_length = response
            .headers()
            .get(CONTENT_LENGTH)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.trim().parse::<u64>().ok());

        let body = if method == HttpMethod::Head {
            Vec::new()
        } else {
            response
                .bytes()
                .await
                .map_err(map_reqwest_error)?
                .to_vec()
        };

        debug!(status, ?content_length, "Received HTTP response");

        Ok(HttpResponse {
            status,
            content_length,
            body,
        })
    }
}

fn map_reqwest_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_builder() {
        TransportError::InvalidRequest(err.to_string())
    } else {
        TransportError::Network(err.to_string())
    }
}
