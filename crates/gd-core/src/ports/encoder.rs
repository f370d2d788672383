use anyhow::Result;
use async_trait::async_trait;

/// Binary → transport-safe text transcoding.
///
/// 二进制到可嵌入文本的转码端口。
#[async_trait]
pub trait InlineEncoderPort: Send + Sync {
    /// Plain base64 payload, as sent in the catalog's `base64_data` field.
    async fn encode_base64(&self, bytes: &[u8]) -> Result<String>;

    /// Self-contained `data:` URL usable directly as an entry url.
    async fn encode_data_url(&self, mime_type: &str, bytes: &[u8]) -> Result<String>;
}
