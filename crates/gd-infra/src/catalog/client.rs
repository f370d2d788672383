use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::{debug, error};

use gd_core::gif::url::resolve_url;
use gd_core::ports::{CatalogPort, HttpRequest, HttpTransportPort, InlineEncoderPort};
use gd_core::{CatalogResult, GifEntry, GifId, UserId};

use super::wire::{PayloadField, WireEnvelope};

/// [`CatalogPort`] speaking the catalog's JSON-over-HTTP surface.
///
/// 基于 HTTP 的 GIF 目录客户端。所有失败都折叠为 `CatalogResult`，从不向外返回错误。
pub struct HttpCatalogClient {
    transport: Arc<dyn HttpTransportPort>,
    encoder: Arc<dyn InlineEncoderPort>,
    base_url: String,
}

impl HttpCatalogClient {
    pub fn new(
        transport: Arc<dyn HttpTransportPort>,
        encoder: Arc<dyn InlineEncoderPort>,
        base_url: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            transport,
            encoder,
            base_url,
        }
    }

    fn gifs_url(&self) -> String {
        format!("{}/gifs", self.base_url)
    }

    async fn call<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        request: HttpRequest,
        field: PayloadField,
    ) -> CatalogResult<T> {
        let response = match self.transport.execute(request).await {
            Ok(response) => response,
            Err(e) => {
                error!(operation, error = %e, "Catalog request failed");
                return CatalogResult::failure(e.to_string());
            }
        };

        if !response.is_success() {
            let message = format!("unexpected HTTP status: {}", response.status);
            error!(operation, status = response.status, "Catalog returned an error status");
            return CatalogResult::failure(message);
        }

        let result = WireEnvelope::parse(&response.body).and_then(|envelope| envelope.into_result(field));
        match result {
            Ok(result) => {
                if !result.succeeded {
                    debug!(operation, message = ?result.error_message, "Catalog reported failure");
                }
                result
            }
            Err(e) => {
                error!(operation, error = %e, "Failed to decode catalog response");
                CatalogResult::failure(format!("invalid catalog response: {e}"))
            }
        }
    }
}

/// `?userId=` suffix, empty when unscoped.
fn user_query(user: Option<&UserId>) -> String {
    user.map(|u| format!("?userId={}", urlencoding::encode(u.as_str())))
        .unwrap_or_default()
}

#[async_trait]
impl CatalogPort for HttpCatalogClient {
    async fn list(&self, user: Option<&UserId>) -> CatalogResult<Vec<GifEntry>> {
        let url = format!("{}{}", self.gifs_url(), user_query(user));
        self.call("list", HttpRequest::get(url), PayloadField::Data).await
    }

    async fn search(&self, query: &str, user: Option<&UserId>) -> CatalogResult<Vec<GifEntry>> {
        let mut url = format!("{}/search?q={}", self.gifs_url(), urlencoding::encode(query));
        if let Some(user) = user {
            url.push_str("&userId=");
            url.push_str(&urlencoding::encode(user.as_str()));
        }
        self.call("search", HttpRequest::get(url), PayloadField::Data).await
    }

    async fn upload(
        &self,
        title: &str,
        tags: &[String],
        payload: &[u8],
        user: Option<&UserId>,
    ) -> CatalogResult<GifEntry> {
        let base64_data = match self.encoder.encode_base64(payload).await {
            Ok(encoded) => encoded,
            Err(e) => {
                error!(error = %e, "Failed to encode GIF for upload");
                return CatalogResult::failure(format!("failed to encode GIF: {e}"));
            }
        };

        let mut body = json!({
            "title": title,
            "tags": tags,
            "base64_data": base64_data,
        });
        if let Some(user) = user {
            body["userId"] = json!(user.as_str());
        }

        self.call("upload", HttpRequest::post_json(self.gifs_url(), body), PayloadField::Data)
            .await
    }

    async fn remove(&self, id: &GifId, user: Option<&UserId>) -> CatalogResult<GifEntry> {
        let url = format!(
            "{}/{}{}",
            self.gifs_url(),
            urlencoding::encode(id.as_str()),
            user_query(user)
        );
        self.call("remove", HttpRequest::delete(url), PayloadField::DeletedGif)
            .await
    }

    async fn health(&self) -> CatalogResult<String> {
        let url = format!("{}/health", self.base_url);
        self.call("health", HttpRequest::get(url), PayloadField::Message)
            .await
    }

    fn resolve_url(&self, url: &str) -> String {
        resolve_url(&self.base_url, url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use anyhow::anyhow;
    use gd_core::ports::{HttpMethod, HttpResponse};
    use gd_core::TransportError;

    /// Records requests and replays one canned outcome.
    struct MockTransport {
        outcome: Result<HttpResponse, TransportError>,
        requests: Mutex<Vec<HttpRequest>>,
    }

    impl MockTransport {
        fn responding(status: u16, body: &str) -> Arc<Self> {
            Arc::new(Self {
                outcome: Ok(HttpResponse {
                    status,
                    content_length: Some(body.len() as u64),
                    body: body.as_bytes().to_vec(),
                }),
                requests: Mutex::new(Vec::new()),
            })
        }

        fn failing(err: TransportError) -> Arc<Self> {
            Arc::new(Self {
                outcome: Err(err),
                requests: Mutex::new(Vec::new()),
            })
        }

        fn last_request(&self) -> HttpRequest {
            self.requests.lock().unwrap().last().cloned().unwrap()
        }
    }

    #[async_trait]
    impl HttpTransportPort for MockTransport {
        async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
            self.requests.lock().unwrap().push(request);
            self.outcome.clone()
        }
    }

    struct MockEncoder {
        should_fail: bool,
    }

    #[async_trait]
    impl InlineEncoderPort for MockEncoder {
        async fn encode_base64(&self, _bytes: &[u8]) -> anyhow::Result<String> {
            if self.should_fail {
                return Err(anyhow!("encoder unavailable"));
            }
            Ok("R0lGODlh".to_string())
        }

        async fn encode_data_url(&self, mime_type: &str, bytes: &[u8]) -> anyhow::Result<String> {
            Ok(format!("data:{mime_type};base64,{}", self.encode_base64(bytes).await?))
        }
    }

    fn client(transport: Arc<MockTransport>) -> HttpCatalogClient {
        HttpCatalogClient::new(
            transport,
            Arc::new(MockEncoder { should_fail: false }),
            "http://catalog.test/",
        )
    }

    #[tokio::test]
    async fn list_without_user_is_unscoped() {
        let transport = MockTransport::responding(200, r#"{"success":true,"data":[]}"#);

        let result = client(transport.clone()).list(None).await;

        assert!(result.succeeded);
        let request = transport.last_request();
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.url, "http://catalog.test/gifs");
    }

    #[tokio::test]
    async fn list_with_user_adds_encoded_query() {
        let transport = MockTransport::responding(200, r#"{"success":true,"data":[]}"#);
        let user = UserId::from("a b&c");

        client(transport.clone()).list(Some(&user)).await;

        assert_eq!(
            transport.last_request().url,
            "http://catalog.test/gifs?userId=a%20b%26c"
        );
    }

    #[tokio::test]
    async fn search_encodes_query_and_user() {
        let transport = MockTransport::responding(200, r#"{"success":true,"data":[]}"#);
        let user = UserId::from("alice");

        client(transport.clone()).search("cat & dog", Some(&user)).await;

        assert_eq!(
            transport.last_request().url,
            "http://catalog.test/gifs/search?q=cat%20%26%20dog&userId=alice"
        );
    }

    #[tokio::test]
    async fn upload_posts_base64_and_user() {
        let transport = MockTransport::responding(
            201,
            r#"{"success":true,"data":{"id":"uploaded-1","title":"cat","url":"/static/gifs/1.gif"}}"#,
        );
        let user = UserId::from("alice");
        let tags = vec!["uploaded".to_string(), "custom".to_string()];

        let result = client(transport.clone())
            .upload("cat", &tags, b"GIF89a", Some(&user))
            .await;

        assert_eq!(result.payload.unwrap().id.as_str(), "uploaded-1");
        let request = transport.last_request();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.url, "http://catalog.test/gifs");
        assert_eq!(
            request.json_body,
            Some(json!({
                "title": "cat",
                "tags": ["uploaded", "custom"],
                "base64_data": "R0lGODlh",
                "userId": "alice"
            }))
        );
    }

    #[tokio::test]
    async fn upload_without_user_omits_user_field() {
        let transport = MockTransport::responding(201, r#"{"success":true,"data":null}"#);

        client(transport.clone()).upload("cat", &[], b"x", None).await;

        let body = transport.last_request().json_body.unwrap();
        assert!(body.get("userId").is_none());
    }

    #[tokio::test]
    async fn upload_encoding_failure_skips_network() {
        let transport = MockTransport::responding(201, "{}");
        let client = HttpCatalogClient::new(
            transport.clone(),
            Arc::new(MockEncoder { should_fail: true }),
            "http://catalog.test",
        );

        let result = client.upload("cat", &[], b"x", None).await;

        assert!(!result.succeeded);
        assert!(transport.requests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn remove_encodes_id_and_reads_deleted_gif() {
        let transport = MockTransport::responding(
            200,
            r#"{"success":true,"deleted_gif":{"id":"a/b","title":"t","url":"/u"}}"#,
        );

        let result = client(transport.clone())
            .remove(&GifId::from("a/b"), Some(&UserId::from("bob")))
            .await;

        assert_eq!(result.payload.unwrap().id.as_str(), "a/b");
        let request = transport.last_request();
        assert_eq!(request.method, HttpMethod::Delete);
        assert_eq!(request.url, "http://catalog.test/gifs/a%2Fb?userId=bob");
    }

    #[tokio::test]
    async fn non_success_status_becomes_failure() {
        let transport = MockTransport::responding(500, r#"{"success":false,"error":"boom"}"#);

        let result = client(transport).list(None).await;

        assert!(!result.succeeded);
        assert_eq!(result.error_message.as_deref(), Some("unexpected HTTP status: 500"));
    }

    #[tokio::test]
    async fn transport_error_becomes_failure() {
        let transport = MockTransport::failing(TransportError::Timeout);

        let result = client(transport).search("cat", None).await;

        assert!(!result.succeeded);
        assert_eq!(result.error_message.as_deref(), Some("request timed out"));
    }

    #[tokio::test]
    async fn unparseable_body_becomes_failure() {
        let transport = MockTransport::responding(200, "<html>");

        let result = client(transport).list(None).await;

        assert!(!result.succeeded);
        assert!(result
            .error_message
            .unwrap()
            .starts_with("invalid catalog response"));
    }

    #[tokio::test]
    async fn health_hits_health_endpoint() {
        let transport = MockTransport::responding(200, r#"{"success":true,"message":"ok"}"#);

        let result = client(transport.clone()).health().await;

        assert_eq!(result.payload.as_deref(), Some("ok"));
        assert_eq!(transport.last_request().url, "http://catalog.test/health");
    }

    #[test]
    fn resolves_relative_entry_urls() {
        let client = client(MockTransport::responding(200, "{}"));

        assert_eq!(
            client.resolve_url("/static/gifs/a.gif"),
            "http://catalog.test/static/gifs/a.gif"
        );
    }
}
